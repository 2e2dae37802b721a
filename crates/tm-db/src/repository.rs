//! Catalog source trait and shared types
//!
//! A source is where the catalog lives between processes. It hands out whole
//! collections; filtering and sorting happen on the cached snapshot.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tm_core::TmError;
use tm_models::{Club, Player, PlayerClubRef};

/// Error type for catalog source operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Fetching {resource} failed with status {status}")]
    Fetch { resource: String, status: u16 },

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Source is read-only: {0}")]
    ReadOnly(String),
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<RepositoryError> for TmError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => TmError::not_found("Player", id),
            RepositoryError::Http(e) => TmError::ExternalService {
                service: "catalog".to_string(),
                message: e.to_string(),
            },
            e @ RepositoryError::Fetch { .. } => TmError::ExternalService {
                service: "catalog".to_string(),
                message: e.to_string(),
            },
            e => TmError::Storage(e.to_string()),
        }
    }
}

/// Store-level changes to one player
///
/// `None` leaves a field untouched. The club reference is written as a
/// whole so that id and name never disagree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerChanges {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub position: Option<String>,
    pub market_value_eur: Option<f64>,
    pub is_starter: Option<bool>,
    pub club: Option<PlayerClubRef>,
}

impl PlayerChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the changes to a player record
    pub fn apply_to(&self, player: &mut Player) {
        if let Some(name) = &self.name {
            player.name = name.clone();
        }
        if let Some(age) = self.age {
            player.age = Some(age);
        }
        if let Some(position) = &self.position {
            player.position = position.clone();
        }
        if let Some(value) = self.market_value_eur {
            player.market_value_eur = Some(value);
        }
        if let Some(starter) = self.is_starter {
            player.set_starter(starter);
        }
        if let Some(club) = &self.club {
            player.club = Some(club.clone());
        }
    }
}

/// Backing store for players and clubs
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every player
    async fn load_players(&self) -> RepositoryResult<Vec<Player>>;

    /// Load every club
    async fn load_clubs(&self) -> RepositoryResult<Vec<Club>>;

    /// Persist changes to the player with this exact id and return the stored record
    async fn update_player(&self, id: &str, changes: &PlayerChanges) -> RepositoryResult<Player>;

    /// Source name for logging
    fn name(&self) -> &str;
}

/// Apply changes to the player with this id inside a loaded collection
pub(crate) fn update_in_place(
    players: &mut [Player],
    id: &str,
    changes: &PlayerChanges,
) -> RepositoryResult<Player> {
    let player = players
        .iter_mut()
        .find(|player| player.id == id)
        .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
    changes.apply_to(player);
    Ok(player.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_changes() {
        let mut player = Player::new("1", "Old").with_age(20);
        player.legacy_starter = Some(true);

        let changes = PlayerChanges {
            name: Some("New".to_string()),
            is_starter: Some(false),
            club: Some(PlayerClubRef::new("ajax", "Ajax")),
            ..Default::default()
        };
        assert!(!changes.is_empty());
        changes.apply_to(&mut player);

        assert_eq!(player.name, "New");
        assert_eq!(player.age, Some(20));
        assert!(!player.is_starter());
        assert_eq!(player.legacy_starter, None);
        assert_eq!(player.club_name(), Some("Ajax"));
    }

    #[test]
    fn test_update_in_place_requires_exact_id() {
        let mut players = vec![Player::new("abc", "A")];
        let changes = PlayerChanges {
            age: Some(30),
            ..Default::default()
        };

        let result = update_in_place(&mut players, "ABC", &changes);
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));

        let updated = update_in_place(&mut players, "abc", &changes).unwrap();
        assert_eq!(updated.age, Some(30));
        assert_eq!(players[0].age, Some(30));
    }

    #[test]
    fn test_error_conversion() {
        let err: TmError = RepositoryError::NotFound("x".into()).into();
        assert_eq!(err.error_code(), "not_found");

        let err: TmError = RepositoryError::Fetch {
            resource: "players".into(),
            status: 404,
        }
        .into();
        assert_eq!(err.error_code(), "external_service_error");
        assert!(err.to_string().contains("players"));

        let err: TmError = RepositoryError::ReadOnly("remote".into()).into();
        assert_eq!(err.error_code(), "storage_error");
    }
}
