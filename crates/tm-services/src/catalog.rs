//! Read services
//!
//! Every call takes one snapshot of the catalog and answers from it; nothing
//! here writes. Views own their records so they can outlive the snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use tm_core::traits::Entity;
use tm_core::{TmError, TmResult};
use tm_db::Catalog;
use tm_models::{Club, Player};
use tm_queries::{
    club_of, find_by_id, find_by_id_ignore_case, players_of_club, sum_market_value, ClubQuery,
    ClubSortKey, ListParams, PlayerQuery, PlayerSortKey, SortKey,
};

/// Totals shown on the start page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub total_players: usize,
    pub total_clubs: usize,
    pub total_market_value: f64,
    pub loaded_at: DateTime<Utc>,
}

/// Parameters after defaults and fallbacks were applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedParams {
    pub q: String,
    pub sort: String,
    pub order: String,
    pub starter: String,
    pub club_name: String,
}

impl ResolvedParams {
    fn resolve<K: SortKey>(params: &ListParams) -> Self {
        Self {
            q: params.q().to_string(),
            sort: params.sort_key::<K>().as_str().to_string(),
            order: params.direction().as_str().to_string(),
            starter: params.starter().as_str().to_string(),
            club_name: params.club_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerListing {
    pub params: ResolvedParams,
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClubListing {
    pub params: ResolvedParams,
    pub clubs: Vec<Club>,
}

/// A player and the club its reference resolves to, if any
#[derive(Debug, Clone, Serialize)]
pub struct PlayerDetail {
    pub player: Player,
    pub club: Option<Club>,
}

/// A club, its players in catalog order, and their summed value
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubDetail {
    pub club: Club,
    pub players: Vec<Player>,
    pub total_market_value: f64,
}

/// Result of an id search across both collections
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "record", rename_all = "lowercase")]
pub enum LookupHit {
    Player(Player),
    Club(Club),
}

/// Read access to the cached catalog
pub struct CatalogService<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogService<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub async fn dashboard(&self) -> TmResult<Dashboard> {
        let snapshot = self.catalog.snapshot().await?;
        Ok(Dashboard {
            total_players: snapshot.players.len(),
            total_clubs: snapshot.clubs.len(),
            total_market_value: sum_market_value(&snapshot.players),
            loaded_at: snapshot.loaded_at,
        })
    }

    pub async fn list_players(&self, params: &ListParams) -> TmResult<PlayerListing> {
        let snapshot = self.catalog.snapshot().await?;
        let query = PlayerQuery::from_params(params);
        let players = query.run_cloned(&snapshot.players);
        debug!(
            filters = query.filters.len(),
            sort = query.sort.key.as_str(),
            order = query.sort.direction.as_str(),
            matched = players.len(),
            "Player query"
        );
        Ok(PlayerListing {
            params: ResolvedParams::resolve::<PlayerSortKey>(params),
            players,
        })
    }

    pub async fn list_clubs(&self, params: &ListParams) -> TmResult<ClubListing> {
        let snapshot = self.catalog.snapshot().await?;
        let query = ClubQuery::from_params(params);
        let clubs = query.run_cloned(&snapshot.clubs);
        debug!(
            filters = query.filters.len(),
            sort = query.sort.key.as_str(),
            matched = clubs.len(),
            "Club query"
        );
        let mut resolved = ResolvedParams::resolve::<ClubSortKey>(params);
        // clubs ignore the player-only filters
        resolved.starter = "all".to_string();
        resolved.club_name = String::new();
        Ok(ClubListing {
            params: resolved,
            clubs,
        })
    }

    /// Player by exact id, with its resolved club
    pub async fn player_detail(&self, id: &str) -> TmResult<PlayerDetail> {
        let snapshot = self.catalog.snapshot().await?;
        let player = find_by_id(&snapshot.players, id)
            .ok_or_else(|| TmError::not_found(Player::TYPE_NAME, id))?;
        let club = club_of(&snapshot.clubs, player).cloned();
        Ok(PlayerDetail {
            player: player.clone(),
            club,
        })
    }

    /// Club by exact id, with the players that reference it
    pub async fn club_detail(&self, id: &str) -> TmResult<ClubDetail> {
        let snapshot = self.catalog.snapshot().await?;
        let club = find_by_id(&snapshot.clubs, id)
            .ok_or_else(|| TmError::not_found(Club::TYPE_NAME, id))?;
        let players = players_of_club(&snapshot.players, club);
        let total_market_value = sum_market_value(players.iter().copied());
        Ok(ClubDetail {
            club: club.clone(),
            players: players.into_iter().cloned().collect(),
            total_market_value,
        })
    }

    /// Case-insensitive id search, players first
    pub async fn lookup(&self, id: &str) -> TmResult<LookupHit> {
        let snapshot = self.catalog.snapshot().await?;
        if let Some(player) = find_by_id_ignore_case(&snapshot.players, id) {
            return Ok(LookupHit::Player(player.clone()));
        }
        if let Some(club) = find_by_id_ignore_case(&snapshot.clubs, id) {
            return Ok(LookupHit::Club(club.clone()));
        }
        Err(TmError::not_found("Player or club", id))
    }
}
