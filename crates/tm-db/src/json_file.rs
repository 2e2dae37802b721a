//! JSON file source
//!
//! Players and clubs live in two files holding one JSON array each. A file
//! that does not exist yet reads as an empty collection.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use tm_models::{Club, Player};

use crate::repository::{update_in_place, CatalogSource, PlayerChanges, RepositoryResult};

/// Read/write source backed by local JSON files
pub struct JsonFileSource {
    players_path: PathBuf,
    clubs_path: PathBuf,
    /// Serializes read-modify-write cycles on the players file
    write_lock: Mutex<()>,
}

impl JsonFileSource {
    pub fn new(players_path: impl AsRef<Path>, clubs_path: impl AsRef<Path>) -> Self {
        Self {
            players_path: players_path.as_ref().to_path_buf(),
            clubs_path: clubs_path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// `players.json` and `clubs.json` inside one directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join("players.json"), dir.join("clubs.json"))
    }

    /// Overwrite the players file
    pub async fn write_players(&self, players: &[Player]) -> RepositoryResult<()> {
        write_json(&self.players_path, players).await
    }

    /// Overwrite the clubs file
    pub async fn write_clubs(&self, clubs: &[Club]) -> RepositoryResult<()> {
        write_json(&self.clubs_path, clubs).await
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> RepositoryResult<Vec<T>> {
    if !fs::try_exists(path).await? {
        debug!(path = %path.display(), "Store file missing, treating as empty");
        return Ok(Vec::new());
    }
    let bytes = fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn write_json<T: Serialize>(path: &Path, records: &[T]) -> RepositoryResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let bytes = serde_json::to_vec_pretty(records)?;
    fs::write(path, bytes).await?;
    debug!(path = %path.display(), count = records.len(), "Store file written");
    Ok(())
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn load_players(&self) -> RepositoryResult<Vec<Player>> {
        read_json(&self.players_path).await
    }

    async fn load_clubs(&self) -> RepositoryResult<Vec<Club>> {
        read_json(&self.clubs_path).await
    }

    #[instrument(skip(self, changes), fields(source = "file"))]
    async fn update_player(&self, id: &str, changes: &PlayerChanges) -> RepositoryResult<Player> {
        let _guard = self.write_lock.lock().await;

        let mut players: Vec<Player> = read_json(&self.players_path).await?;
        let updated = update_in_place(&mut players, id, changes)?;
        write_json(&self.players_path, &players).await?;

        info!(player_id = %id, "Player updated in store");
        Ok(updated)
    }

    fn name(&self) -> &str {
        "file"
    }
}
