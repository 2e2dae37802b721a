//! Transfermarkt catalog CLI
//!
//! Loads the catalog once per run, answers one command, and exits with a
//! code derived from the error kind.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tm_core::config::{AppConfig, ConfigError, DataSourceKind};
use tm_core::TmError;
use tm_db::{seed_if_empty, Catalog, CatalogSource, JsonFileSource, RemoteJsonSource};
use tm_services::{CatalogService, UpdatePlayerService};

mod cli;
mod render;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Initialize tracing/logging; stdout is reserved for command output
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tm_db=debug,tm_services=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<TmError>()
        .and_then(|e| u8::try_from(e.exit_code()).ok())
        .unwrap_or(1)
}

fn config_error(err: ConfigError) -> TmError {
    TmError::Config(err.to_string())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env().map_err(config_error)?;
    cli.apply_to(&mut config).map_err(config_error)?;
    debug!(source = config.data.source.as_str(), "Configuration loaded");

    if let Command::Seed { seed_dir } = &cli.command {
        let store = file_store(&config)?;
        let report = seed_if_empty(&store, seed_dir).await.map_err(TmError::from)?;
        info!(
            players = report.players_inserted,
            clubs = report.clubs_inserted,
            "Seeding finished"
        );
        return emit(cli.json, &SeedSummary::from(report), |summary| {
            format!(
                "Inserted {} player(s) and {} club(s)\n",
                summary.players_inserted, summary.clubs_inserted
            )
        });
    }

    let catalog = Catalog::new(open_source(&config).await?);
    let service = CatalogService::new(&catalog);

    match &cli.command {
        Command::Dashboard => {
            let dashboard = service.dashboard().await?;
            emit(cli.json, &dashboard, render::dashboard)
        }
        Command::Players(args) => {
            let listing = service.list_players(&args.to_params()).await?;
            emit(cli.json, &listing, |listing| render::players(&listing.players))
        }
        Command::Clubs(args) => {
            let listing = service.list_clubs(&args.to_params()).await?;
            emit(cli.json, &listing, |listing| render::clubs(&listing.clubs))
        }
        Command::Player { id } => {
            let detail = service.player_detail(id).await?;
            emit(cli.json, &detail, render::player_detail)
        }
        Command::Club { id } => {
            let detail = service.club_detail(id).await?;
            emit(cli.json, &detail, render::club_detail)
        }
        Command::Show { id } => {
            let hit = service.lookup(id).await?;
            emit(cli.json, &hit, render::lookup)
        }
        Command::EditPlayer(args) => {
            let actor = args.actor().map_err(config_error)?;
            let player = UpdatePlayerService::new(&actor, &catalog)
                .call(&args.id, args.params())
                .await?
                .into_result()?;
            emit(cli.json, &player, |player| {
                format!("Updated {} ({})\n", player.name, player.id)
            })
        }
        Command::Seed { .. } => Ok(()),
    }
}

fn file_store(config: &AppConfig) -> Result<JsonFileSource, TmError> {
    match config.data.source {
        DataSourceKind::File => Ok(JsonFileSource::new(
            &config.data.players_path,
            &config.data.clubs_path,
        )),
        DataSourceKind::Remote => Err(TmError::Config(
            "seeding needs the file source".to_string(),
        )),
    }
}

/// Build the configured source, seeding an empty file store first
async fn open_source(config: &AppConfig) -> Result<Arc<dyn CatalogSource>, TmError> {
    match config.data.source {
        DataSourceKind::File => {
            let store = file_store(config)?;
            if let Some(seed_dir) = &config.data.seed_dir {
                seed_if_empty(&store, seed_dir).await?;
            }
            Ok(Arc::new(store))
        }
        DataSourceKind::Remote => Ok(Arc::new(RemoteJsonSource::from_config(&config.remote)?)),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SeedSummary {
    players_inserted: usize,
    clubs_inserted: usize,
}

impl From<tm_db::SeedReport> for SeedSummary {
    fn from(report: tm_db::SeedReport) -> Self {
        Self {
            players_inserted: report.players_inserted,
            clubs_inserted: report.clubs_inserted,
        }
    }
}

/// Print either pretty JSON or the text rendering
fn emit<T, F>(json: bool, value: &T, text: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text(value));
    }
    Ok(())
}
