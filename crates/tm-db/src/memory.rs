//! In-memory source

use async_trait::async_trait;
use tokio::sync::RwLock;

use tm_models::{Club, Player};

use crate::repository::{update_in_place, CatalogSource, PlayerChanges, RepositoryResult};

/// In-process store, used by tests and when embedding a fixed dataset
#[derive(Default)]
pub struct MemorySource {
    players: RwLock<Vec<Player>>,
    clubs: RwLock<Vec<Club>>,
}

impl MemorySource {
    pub fn new(players: Vec<Player>, clubs: Vec<Club>) -> Self {
        Self {
            players: RwLock::new(players),
            clubs: RwLock::new(clubs),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace the stored players
    pub async fn set_players(&self, players: Vec<Player>) {
        *self.players.write().await = players;
    }

    /// Replace the stored clubs
    pub async fn set_clubs(&self, clubs: Vec<Club>) {
        *self.clubs.write().await = clubs;
    }
}

#[async_trait]
impl CatalogSource for MemorySource {
    async fn load_players(&self) -> RepositoryResult<Vec<Player>> {
        Ok(self.players.read().await.clone())
    }

    async fn load_clubs(&self) -> RepositoryResult<Vec<Club>> {
        Ok(self.clubs.read().await.clone())
    }

    async fn update_player(&self, id: &str, changes: &PlayerChanges) -> RepositoryResult<Player> {
        let mut players = self.players.write().await;
        update_in_place(&mut players, id, changes)
    }

    fn name(&self) -> &str {
        "memory"
    }
}
