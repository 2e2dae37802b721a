//! # tm-core
//!
//! Core types, traits, and utilities for the Transfermarkt catalog.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Common error types
//! - Result type aliases
//! - Core traits (Identifiable, Entity)
//! - Service result types (ServiceResult)
//! - Configuration types
//! - Value formatting helpers

pub mod error;
pub mod result;
pub mod traits;
pub mod config;
pub mod format;

pub use error::*;
pub use result::*;
pub use traits::*;
pub use format::format_market_value;
