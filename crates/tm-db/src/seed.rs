//! Seeding
//!
//! Fills an empty file store from a directory holding `players.json` and
//! `clubs.json`. Each collection is seeded on its own and only when empty.

use std::path::Path;

use tracing::{debug, info};

use tm_models::{Club, Player};

use crate::json_file::JsonFileSource;
use crate::repository::{CatalogSource, RepositoryResult};

/// What a seeding run inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub players_inserted: usize,
    pub clubs_inserted: usize,
}

impl SeedReport {
    pub fn is_noop(&self) -> bool {
        self.players_inserted == 0 && self.clubs_inserted == 0
    }
}

/// Copy seed collections into `target` where the target collection is empty
pub async fn seed_if_empty(target: &JsonFileSource, seed_dir: impl AsRef<Path>) -> RepositoryResult<SeedReport> {
    let seed = JsonFileSource::in_dir(seed_dir.as_ref());
    let mut report = SeedReport::default();

    if target.load_clubs().await?.is_empty() {
        let clubs: Vec<Club> = seed.load_clubs().await?;
        if !clubs.is_empty() {
            target.write_clubs(&clubs).await?;
            report.clubs_inserted = clubs.len();
            info!(count = clubs.len(), "Inserted clubs");
        }
    } else {
        debug!("Clubs already present, skipping seed");
    }

    if target.load_players().await?.is_empty() {
        let players: Vec<Player> = seed.load_players().await?;
        if !players.is_empty() {
            target.write_players(&players).await?;
            report.players_inserted = players.len();
            info!(count = players.len(), "Inserted players");
        }
    } else {
        debug!("Players already present, skipping seed");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("tm-seed-{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_seeds_empty_store() {
        let seed_dir = temp_dir();
        let seed = JsonFileSource::in_dir(&seed_dir);
        seed.write_players(&[Player::new("1", "A"), Player::new("2", "B")]).await.unwrap();
        seed.write_clubs(&[Club::new("c", "C")]).await.unwrap();

        let store_dir = temp_dir();
        let store = JsonFileSource::in_dir(&store_dir);
        let report = seed_if_empty(&store, &seed_dir).await.unwrap();

        assert_eq!(report, SeedReport { players_inserted: 2, clubs_inserted: 1 });
        assert_eq!(store.load_players().await.unwrap().len(), 2);

        let again = seed_if_empty(&store, &seed_dir).await.unwrap();
        assert!(again.is_noop());

        std::fs::remove_dir_all(seed_dir).ok();
        std::fs::remove_dir_all(store_dir).ok();
    }

    #[tokio::test]
    async fn test_non_empty_collection_untouched() {
        let seed_dir = temp_dir();
        let seed = JsonFileSource::in_dir(&seed_dir);
        seed.write_players(&[Player::new("1", "Seed")]).await.unwrap();
        seed.write_clubs(&[Club::new("c", "C")]).await.unwrap();

        let store_dir = temp_dir();
        let store = JsonFileSource::in_dir(&store_dir);
        store.write_players(&[Player::new("9", "Existing")]).await.unwrap();

        let report = seed_if_empty(&store, &seed_dir).await.unwrap();
        assert_eq!(report.players_inserted, 0);
        assert_eq!(report.clubs_inserted, 1);
        assert_eq!(store.load_players().await.unwrap()[0].name, "Existing");

        std::fs::remove_dir_all(seed_dir).ok();
        std::fs::remove_dir_all(store_dir).ok();
    }
}
