//! Catalog cache
//!
//! Both collections are loaded once and shared as an immutable snapshot.
//! Requests clone the `Arc` and work on their own reference lists; a reload
//! swaps the snapshot wholesale, so readers never see a half-loaded catalog.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use tm_models::{Club, Player};

use crate::repository::{CatalogSource, PlayerChanges, RepositoryResult};

/// Immutable view of the catalog at one point in time
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub players: Vec<Player>,
    pub clubs: Vec<Club>,
    pub loaded_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(players: Vec<Player>, clubs: Vec<Club>) -> Self {
        Self {
            players: players.into_iter().map(Player::normalized).collect(),
            clubs,
            loaded_at: Utc::now(),
        }
    }
}

/// Owned handle to the cached catalog
pub struct Catalog {
    source: Arc<dyn CatalogSource>,
    snapshot: RwLock<Option<Arc<CatalogSnapshot>>>,
}

impl Catalog {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            snapshot: RwLock::new(None),
        }
    }

    /// Current snapshot, loading it on first use
    pub async fn snapshot(&self) -> RepositoryResult<Arc<CatalogSnapshot>> {
        {
            let cache = self.snapshot.read().await;
            if let Some(ref snapshot) = *cache {
                return Ok(Arc::clone(snapshot));
            }
        }

        let mut cache = self.snapshot.write().await;
        // another task may have loaded while we waited for the write lock
        if let Some(ref snapshot) = *cache {
            return Ok(Arc::clone(snapshot));
        }
        let snapshot = Arc::new(self.load().await?);
        *cache = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Read both collections again and replace the snapshot
    pub async fn reload(&self) -> RepositoryResult<Arc<CatalogSnapshot>> {
        let snapshot = Arc::new(self.load().await?);
        *self.snapshot.write().await = Some(Arc::clone(&snapshot));
        info!(
            players = snapshot.players.len(),
            clubs = snapshot.clubs.len(),
            "Catalog reloaded"
        );
        Ok(snapshot)
    }

    /// Whether a snapshot has been loaded
    pub async fn is_loaded(&self) -> bool {
        self.snapshot.read().await.is_some()
    }

    /// Write through the source, then reload the whole catalog
    pub async fn update_player(
        &self,
        id: &str,
        changes: &PlayerChanges,
    ) -> RepositoryResult<Arc<CatalogSnapshot>> {
        self.source.update_player(id, changes).await?;
        self.reload().await
    }

    async fn load(&self) -> RepositoryResult<CatalogSnapshot> {
        let started = Instant::now();
        let (players, clubs) =
            tokio::try_join!(self.source.load_players(), self.source.load_clubs())?;
        debug!(
            source = self.source.name(),
            players = players.len(),
            clubs = clubs.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Catalog loaded"
        );
        Ok(CatalogSnapshot::new(players, clubs))
    }
}
