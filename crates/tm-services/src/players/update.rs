//! Update Service for Players

use tracing::{info, warn};

use tm_core::result::ServiceResult;
use tm_core::traits::Entity;
use tm_core::{TmError, TmResult};
use tm_db::{Catalog, PlayerChanges};
use tm_models::{Actor, Player, PlayerClubRef};
use tm_queries::find_by_id;

use super::PlayerParams;
use crate::contracts::{Contract, UpdatePlayerContract};

/// Service for updating a player
///
/// # Example
/// ```ignore
/// let service = UpdatePlayerService::new(&actor, &catalog);
/// let params = PlayerParams::new().with_market_value(60_000_000.0);
/// let result = service.call("kdb", params).await?;
/// ```
pub struct UpdatePlayerService<'a> {
    actor: &'a Actor,
    catalog: &'a Catalog,
}

impl<'a> UpdatePlayerService<'a> {
    pub fn new(actor: &'a Actor, catalog: &'a Catalog) -> Self {
        Self { actor, catalog }
    }

    /// Execute the update operation
    ///
    /// Permission and lookup failures are errors. Rejected params come back
    /// as a failed [`ServiceResult`] and leave the store untouched.
    pub async fn call(self, id: &str, params: PlayerParams) -> TmResult<ServiceResult<Player>> {
        if !self.actor.is_admin() {
            warn!(user = %self.actor.username, player_id = %id, "Edit refused");
            return Err(TmError::forbidden("only admins may edit players"));
        }

        let snapshot = self.catalog.snapshot().await?;
        if find_by_id(&snapshot.players, id).is_none() {
            return Err(TmError::not_found(Player::TYPE_NAME, id));
        }

        let contract = UpdatePlayerContract::new(&snapshot.clubs);
        let mut errors = match params.check() {
            Ok(()) => Default::default(),
            Err(errors) => errors,
        };
        if let Err(contract_errors) = contract.validate(&params) {
            errors.merge(contract_errors);
        }
        if !errors.is_empty() {
            return Ok(ServiceResult::failure(errors));
        }

        let club = params
            .club_id
            .as_deref()
            .and_then(|club_id| contract.club(club_id))
            .map(|club| PlayerClubRef::new(club.id.clone(), club.name.clone()));

        let changes = PlayerChanges {
            name: params.name,
            age: params.age,
            position: params.position,
            market_value_eur: params.market_value_eur,
            is_starter: params.is_starter,
            club,
        };

        let fresh = self.catalog.update_player(id, &changes).await?;
        info!(user = %self.actor.username, player_id = %id, "Player updated");

        let player = find_by_id(&fresh.players, id)
            .cloned()
            .ok_or_else(|| TmError::not_found(Player::TYPE_NAME, id))?;
        Ok(ServiceResult::success(player))
    }
}
