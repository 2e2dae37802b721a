//! Query Model
//!
//! A query is the resolved form of one listing request: the filters that
//! were asked for plus exactly one sort criterion. Running it never touches
//! the base collection.

use tm_models::{Club, Player};

use crate::filters::{ClubFilter, FilterSet, PlayerFilter, RecordFilter};
use crate::params::ListParams;
use crate::sorts::{ClubSortKey, PlayerSortKey, SortCriterion, SortDirection, SortKey};

/// Filter-then-sort query over one record type
#[derive(Debug, Clone)]
pub struct Query<F, K> {
    /// Filters, applied in order
    pub filters: FilterSet<F>,
    /// The single sort criterion
    pub sort: SortCriterion<K>,
}

/// Query over players
pub type PlayerQuery = Query<PlayerFilter, PlayerSortKey>;

/// Query over clubs
pub type ClubQuery = Query<ClubFilter, ClubSortKey>;

impl<F, K> Default for Query<F, K>
where
    F: RecordFilter<Record = K::Record>,
    K: SortKey,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F, K> Query<F, K>
where
    F: RecordFilter<Record = K::Record>,
    K: SortKey,
{
    /// No filters, sorted by the default key ascending
    pub fn new() -> Self {
        Self {
            filters: FilterSet::new(),
            sort: SortCriterion::asc(K::DEFAULT),
        }
    }

    /// Add a filter
    pub fn with_filter(mut self, filter: F) -> Self {
        self.filters.add(filter);
        self
    }

    /// Set filters
    pub fn with_filters(mut self, filters: FilterSet<F>) -> Self {
        self.filters = filters;
        self
    }

    /// Set sort order
    pub fn with_sort(mut self, key: K, direction: SortDirection) -> Self {
        self.sort = SortCriterion::new(key, direction);
        self
    }

    /// Check if this query has any filters
    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Copy references to the records, filter, then sort
    pub fn run<'a>(&self, records: &'a [K::Record]) -> Vec<&'a K::Record> {
        let mut list: Vec<&K::Record> = records.iter().collect();
        self.filters.apply(&mut list);
        self.sort.apply(&mut list);
        list
    }
}

impl Query<PlayerFilter, PlayerSortKey> {
    /// Resolve raw player-listing parameters
    pub fn from_params(params: &ListParams) -> Self {
        Self {
            filters: FilterSet::for_players(params.q(), params.starter(), params.club_name()),
            sort: SortCriterion::new(params.sort_key(), params.direction()),
        }
    }

    /// Run against owned players, cloning the result
    pub fn run_cloned(&self, players: &[Player]) -> Vec<Player> {
        self.run(players).into_iter().cloned().collect()
    }
}

impl Query<ClubFilter, ClubSortKey> {
    /// Resolve raw club-listing parameters; only `q`, `sort`, and `order` apply
    pub fn from_params(params: &ListParams) -> Self {
        Self {
            filters: FilterSet::for_clubs(params.q()),
            sort: SortCriterion::new(params.sort_key(), params.direction()),
        }
    }

    /// Run against owned clubs, cloning the result
    pub fn run_cloned(&self, clubs: &[Club]) -> Vec<Club> {
        self.run(clubs).into_iter().cloned().collect()
    }
}
