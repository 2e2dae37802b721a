//! # tm-services
//!
//! Services over the cached catalog.
//!
//! Read services answer dashboard, listing, detail, and id-lookup requests
//! from one snapshot each. The player update service checks permissions,
//! validates through a contract, writes through the store, and reloads the
//! cache.

pub mod catalog;
pub mod contracts;
pub mod players;

pub use catalog::{
    CatalogService, ClubDetail, ClubListing, Dashboard, LookupHit, PlayerDetail, PlayerListing,
    ResolvedParams,
};
pub use contracts::{Contract, UpdatePlayerContract};
pub use players::{PlayerParams, UpdatePlayerService};
