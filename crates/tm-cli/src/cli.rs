//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use tm_core::config::{AppConfig, ConfigError, DataSourceKind};
use tm_models::{Actor, Role};
use tm_queries::ListParams;
use tm_services::PlayerParams;

/// Browse and edit the Transfermarkt player and club catalog
#[derive(Parser, Debug)]
#[command(name = "transfermarkt", author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog source: `file` or `remote`
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Players JSON file (file source)
    #[arg(long, global = true)]
    pub players_path: Option<PathBuf>,

    /// Clubs JSON file (file source)
    #[arg(long, global = true)]
    pub clubs_path: Option<PathBuf>,

    /// Players JSON URL (remote source)
    #[arg(long, global = true)]
    pub players_url: Option<String>,

    /// Clubs JSON URL (remote source)
    #[arg(long, global = true)]
    pub clubs_url: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Totals: players, clubs, market value
    Dashboard,

    /// List players
    Players(PlayerListArgs),

    /// List clubs
    Clubs(ClubListArgs),

    /// Show one player by id
    Player { id: String },

    /// Show one club and its squad by id
    Club { id: String },

    /// Find a player or club by id, ignoring case
    Show { id: String },

    /// Edit a player (admins only)
    EditPlayer(EditPlayerArgs),

    /// Fill an empty file store from a seed directory
    Seed {
        /// Directory holding `players.json` and `clubs.json`
        #[arg(long, env = "TM_SEED_DIR")]
        seed_dir: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
pub struct PlayerListArgs {
    /// Raw query string, e.g. `q=ro&sort=age&order=desc`
    #[arg(long)]
    pub query: Option<String>,

    /// Name contains (case-insensitive)
    #[arg(short, long)]
    pub q: Option<String>,

    /// name, club, age, position, isStarter, marketValueEur
    #[arg(long)]
    pub sort: Option<String>,

    /// asc or desc
    #[arg(long)]
    pub order: Option<String>,

    /// all, yes, or no
    #[arg(long)]
    pub starter: Option<String>,

    /// Club name contains (case-insensitive)
    #[arg(long)]
    pub club_name: Option<String>,
}

impl PlayerListArgs {
    /// Query string first, individual flags override it
    pub fn to_params(&self) -> ListParams {
        let mut params = self
            .query
            .as_deref()
            .map(ListParams::from_query_string)
            .unwrap_or_default();
        override_with(&mut params.q, &self.q);
        override_with(&mut params.sort, &self.sort);
        override_with(&mut params.order, &self.order);
        override_with(&mut params.starter, &self.starter);
        override_with(&mut params.club_name, &self.club_name);
        params
    }
}

#[derive(Args, Debug, Default)]
pub struct ClubListArgs {
    /// Raw query string, e.g. `sort=foundedYear&order=desc`
    #[arg(long)]
    pub query: Option<String>,

    /// Name contains (case-insensitive)
    #[arg(short, long)]
    pub q: Option<String>,

    /// name, foundedYear, country, stadium
    #[arg(long)]
    pub sort: Option<String>,

    /// asc or desc
    #[arg(long)]
    pub order: Option<String>,
}

impl ClubListArgs {
    pub fn to_params(&self) -> ListParams {
        let mut params = self
            .query
            .as_deref()
            .map(ListParams::from_query_string)
            .unwrap_or_default();
        override_with(&mut params.q, &self.q);
        override_with(&mut params.sort, &self.sort);
        override_with(&mut params.order, &self.order);
        params
    }
}

fn override_with(slot: &mut Option<String>, value: &Option<String>) {
    if value.is_some() {
        slot.clone_from(value);
    }
}

#[derive(Args, Debug)]
pub struct EditPlayerArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long)]
    pub position: Option<String>,

    #[arg(long)]
    pub market_value: Option<f64>,

    #[arg(long)]
    pub starter: Option<bool>,

    #[arg(long)]
    pub club_id: Option<String>,

    /// Acting user name
    #[arg(long, env = "TM_USER", default_value = "guest")]
    pub user: String,

    /// Acting user role: ADMIN or USER
    #[arg(long, env = "TM_ROLE", default_value = "USER")]
    pub role: String,
}

impl EditPlayerArgs {
    pub fn actor(&self) -> Result<Actor, ConfigError> {
        let role = Role::from_str(&self.role).ok_or_else(|| ConfigError::InvalidValue {
            key: "--role".to_string(),
            message: format!("expected ADMIN or USER, got `{}`", self.role),
        })?;
        Ok(Actor::new(self.user.clone(), role))
    }

    pub fn params(&self) -> PlayerParams {
        PlayerParams {
            name: self.name.clone(),
            age: self.age,
            position: self.position.clone(),
            market_value_eur: self.market_value,
            is_starter: self.starter,
            club_id: self.club_id.clone(),
        }
    }
}

impl Cli {
    /// Apply command-line overrides on top of the environment configuration
    pub fn apply_to(&self, config: &mut AppConfig) -> Result<(), ConfigError> {
        if let Some(source) = &self.source {
            config.data.source =
                DataSourceKind::from_str(source).ok_or_else(|| ConfigError::InvalidValue {
                    key: "--source".to_string(),
                    message: format!("expected `file` or `remote`, got `{}`", source),
                })?;
        }
        if let Some(path) = &self.players_path {
            config.data.players_path = path.clone();
        }
        if let Some(path) = &self.clubs_path {
            config.data.clubs_path = path.clone();
        }
        if let Some(url) = &self.players_url {
            config.remote.players_url = url.clone();
        }
        if let Some(url) = &self.clubs_url {
            config.remote.clubs_url = url.clone();
        }
        config.validate()
    }
}
