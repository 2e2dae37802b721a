//! # tm-models
//!
//! Domain models for the Transfermarkt catalog.
//!
//! Records are deserialized leniently: absent or `null` fields fall back to
//! empty values so a loosely-shaped dataset still loads. Each model implements
//! the core traits from `tm-core` (Entity, Identifiable, Named).

pub use tm_core::traits::{Entity, Identifiable, Named};

pub mod club;
pub mod player;
pub mod user;
mod serde_helpers;

pub use club::Club;
pub use player::{Player, PlayerClubRef, PositionType};
pub use user::{Actor, Role};
