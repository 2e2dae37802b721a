//! # tm-queries
//!
//! Query pipeline for the Transfermarkt catalog.
//!
//! Requests are answered against an in-memory snapshot: the base collection
//! is copied into a working list of references, filters run in a fixed order,
//! then exactly one stable sort is applied. Nothing here fails or mutates the
//! snapshot; bad parameters fall back to defaults and missing fields compare
//! as zero or the empty string.
//!
//! ## Structure
//!
//! - `compare` - Comparator library (string, numeric, boolean)
//! - `sorts` - Sort directions, sort keys, and the sort dispatcher
//! - `filters` - Record filters and filter sets
//! - `aggregate` - Null-safe sums
//! - `params` - Raw request parameters with defaults
//! - `query` - The filter-then-sort pipeline
//! - `lookup` - Id lookups and club reference resolution
//!
//! ## Example
//!
//! ```
//! use tm_models::Player;
//! use tm_queries::{ListParams, PlayerQuery};
//!
//! let players = vec![
//!     Player::new("1", "Ronaldo"),
//!     Player::new("2", "Messi"),
//!     Player::new("3", "Robben"),
//! ];
//!
//! let params = ListParams::from_query_string("q=ro&sort=name&order=desc");
//! let names: Vec<&str> = PlayerQuery::from_params(&params)
//!     .run(&players)
//!     .into_iter()
//!     .map(|p| p.name.as_str())
//!     .collect();
//!
//! assert_eq!(names, vec!["Ronaldo", "Robben"]);
//! ```

pub mod compare;
pub mod sorts;
pub mod filters;
pub mod aggregate;
pub mod params;
pub mod query;
pub mod lookup;

// Re-exports for convenience
pub use compare::{compare_boolean, compare_numeric, compare_strings};
pub use sorts::{ClubSortKey, PlayerSortKey, SortCriterion, SortDirection, SortField, SortKey};
pub use filters::{ClubFilter, FilterSet, PlayerFilter, RecordFilter, StarterFilter};
pub use aggregate::{sum_by, sum_market_value};
pub use params::ListParams;
pub use query::{ClubQuery, PlayerQuery, Query};
pub use lookup::{club_of, find_by_id, find_by_id_ignore_case, players_of_club, resolve_club};
