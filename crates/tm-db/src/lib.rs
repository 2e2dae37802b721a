//! # tm-db
//!
//! Data access for the Transfermarkt catalog.
//!
//! - Catalog sources: local JSON files, remote JSON over HTTP, in-memory
//! - Seeding of an empty file store
//! - The `Catalog` cache handing out immutable snapshots
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tm_db::{Catalog, JsonFileSource};
//!
//! let catalog = Catalog::new(Arc::new(JsonFileSource::in_dir("data")));
//! let snapshot = catalog.snapshot().await?;
//! println!("{} players", snapshot.players.len());
//! ```

pub mod repository;
pub mod json_file;
pub mod remote;
pub mod memory;
pub mod seed;
pub mod cache;

// Re-exports
pub use cache::{Catalog, CatalogSnapshot};
pub use json_file::JsonFileSource;
pub use memory::MemorySource;
pub use remote::RemoteJsonSource;
pub use repository::{CatalogSource, PlayerChanges, RepositoryError, RepositoryResult};
pub use seed::{seed_if_empty, SeedReport};
