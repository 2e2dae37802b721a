//! Remote JSON source
//!
//! Fetches the published dataset over HTTP. Each collection is one GET; the
//! catalog issues both at once. The source is read-only.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use tm_core::config::RemoteConfig;
use tm_models::{Club, Player};

use crate::repository::{CatalogSource, PlayerChanges, RepositoryError, RepositoryResult};

/// Read-only source fetching `players.json` and `clubs.json` over HTTP
pub struct RemoteJsonSource {
    client: reqwest::Client,
    players_url: String,
    clubs_url: String,
}

impl RemoteJsonSource {
    pub fn new(
        players_url: impl Into<String>,
        clubs_url: impl Into<String>,
        timeout: Duration,
    ) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            players_url: players_url.into(),
            clubs_url: clubs_url.into(),
        })
    }

    pub fn from_config(config: &RemoteConfig) -> RepositoryResult<Self> {
        Self::new(
            config.players_url.clone(),
            config.clubs_url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    #[instrument(skip(self), fields(source = "remote"))]
    async fn fetch<T: DeserializeOwned>(&self, resource: &str, url: &str) -> RepositoryResult<Vec<T>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(resource, status = status.as_u16(), "Remote fetch failed");
            return Err(RepositoryError::Fetch {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }
        let records: Vec<T> = response.json().await?;
        debug!(resource, count = records.len(), "Remote collection fetched");
        Ok(records)
    }
}

#[async_trait]
impl CatalogSource for RemoteJsonSource {
    async fn load_players(&self) -> RepositoryResult<Vec<Player>> {
        self.fetch("players", &self.players_url).await
    }

    async fn load_clubs(&self) -> RepositoryResult<Vec<Club>> {
        self.fetch("clubs", &self.clubs_url).await
    }

    async fn update_player(&self, _id: &str, _changes: &PlayerChanges) -> RepositoryResult<Player> {
        Err(RepositoryError::ReadOnly(self.players_url.clone()))
    }

    fn name(&self) -> &str {
        "remote"
    }
}
