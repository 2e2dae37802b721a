//! Query Filters
//!
//! A filter set holds only the filters a request actually asked for, in the
//! order they must run. An empty or default parameter never becomes a filter,
//! so "no filter requested" costs no scan and cannot be confused with
//! "filter excludes everything".

use std::borrow::Borrow;

use tm_core::traits::contains_ignore_case;
use tm_models::{Club, Player};

/// A predicate over one record type
pub trait RecordFilter {
    type Record;

    fn matches(&self, record: &Self::Record) -> bool;
}

/// Tri-state starter filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarterFilter {
    /// No filtering
    #[default]
    All,
    /// Starters only
    Yes,
    /// Non-starters only
    No,
}

impl StarterFilter {
    /// Parse the `starter` parameter; anything unrecognized means `All`
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("yes") => Self::Yes,
            Some("no") => Self::No,
            _ => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    /// The starter value to keep, or `None` when nothing is filtered
    pub fn wanted(&self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Yes => Some(true),
            Self::No => Some(false),
        }
    }
}

/// Player filter conditions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerFilter {
    /// Name contains the text, ignoring case
    NameContains(String),
    /// Starter flag equals the value
    Starter(bool),
    /// Referenced club name contains the text, ignoring case
    ClubNameContains(String),
}

impl RecordFilter for PlayerFilter {
    type Record = Player;

    fn matches(&self, player: &Player) -> bool {
        match self {
            Self::NameContains(needle) => contains_ignore_case(&player.name, needle),
            Self::Starter(wanted) => player.is_starter() == *wanted,
            Self::ClubNameContains(needle) => {
                contains_ignore_case(player.club_name().unwrap_or_default(), needle)
            }
        }
    }
}

/// Club filter conditions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClubFilter {
    /// Name contains the text, ignoring case
    NameContains(String),
}

impl RecordFilter for ClubFilter {
    type Record = Club;

    fn matches(&self, club: &Club) -> bool {
        match self {
            Self::NameContains(needle) => contains_ignore_case(&club.name, needle),
        }
    }
}

/// Filter set - a collection of filters with AND semantics, applied in order
#[derive(Debug, Clone)]
pub struct FilterSet<F> {
    filters: Vec<F>,
}

impl<F> Default for FilterSet<F> {
    fn default() -> Self {
        Self { filters: vec![] }
    }
}

impl<F: RecordFilter> FilterSet<F> {
    /// Create a new empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter to the set
    pub fn add(&mut self, filter: F) -> &mut Self {
        self.filters.push(filter);
        self
    }

    /// Add a filter and return self (builder pattern)
    pub fn with(mut self, filter: F) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get all filters
    pub fn filters(&self) -> &[F] {
        &self.filters
    }

    /// Check if any filters are set
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Get number of filters
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Discard non-matching records, one filter at a time
    ///
    /// Records are never modified and survivors keep their relative order.
    pub fn apply<R: Borrow<F::Record>>(&self, records: &mut Vec<R>) {
        for filter in &self.filters {
            records.retain(|record| filter.matches(record.borrow()));
        }
    }

    /// Whether a single record passes every filter
    pub fn matches(&self, record: &F::Record) -> bool {
        self.filters.iter().all(|filter| filter.matches(record))
    }
}

impl FilterSet<PlayerFilter> {
    /// Build from the raw `q`, `starter`, and `clubName` values
    ///
    /// Order is fixed: name, then starter status, then club name.
    pub fn for_players(q: &str, starter: StarterFilter, club_name: &str) -> Self {
        let mut set = Self::new();
        if !q.is_empty() {
            set.add(PlayerFilter::NameContains(q.to_string()));
        }
        if let Some(wanted) = starter.wanted() {
            set.add(PlayerFilter::Starter(wanted));
        }
        if !club_name.is_empty() {
            set.add(PlayerFilter::ClubNameContains(club_name.to_string()));
        }
        set
    }
}

impl FilterSet<ClubFilter> {
    /// Build from the raw `q` value
    pub fn for_clubs(q: &str) -> Self {
        let mut set = Self::new();
        if !q.is_empty() {
            set.add(ClubFilter::NameContains(q.to_string()));
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squad() -> Vec<Player> {
        vec![
            Player::new("1", "Ronaldo").with_starter(true).with_club("rm", "Real Madrid"),
            Player::new("2", "Robben").with_club("bay", "Bayern München"),
            Player::new("3", "Messi").with_starter(true).with_club("fcb", "FC Barcelona"),
            Player::new("4", "De Bruyne").with_club("mci", "Manchester City"),
            Player::new("5", "Courtois"),
        ]
    }

    fn names(players: &[&Player]) -> Vec<String> {
        players.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_starter_param() {
        assert_eq!(StarterFilter::from_param(Some("yes")), StarterFilter::Yes);
        assert_eq!(StarterFilter::from_param(Some("no")), StarterFilter::No);
        assert_eq!(StarterFilter::from_param(Some("all")), StarterFilter::All);
        assert_eq!(StarterFilter::from_param(Some("YES")), StarterFilter::All);
        assert_eq!(StarterFilter::from_param(None), StarterFilter::All);
    }

    #[test]
    fn test_defaults_build_no_filters() {
        let set = FilterSet::for_players("", StarterFilter::All, "");
        assert!(set.is_empty());

        let players = squad();
        let mut list: Vec<&Player> = players.iter().collect();
        set.apply(&mut list);
        assert_eq!(names(&list), vec!["Ronaldo", "Robben", "Messi", "De Bruyne", "Courtois"]);
    }

    #[test]
    fn test_name_filter() {
        let players = squad();
        let mut list: Vec<&Player> = players.iter().collect();
        FilterSet::for_players("ro", StarterFilter::All, "").apply(&mut list);
        assert_eq!(names(&list), vec!["Ronaldo", "Robben"]);
    }

    #[test]
    fn test_starter_filter() {
        let players = squad();

        let mut list: Vec<&Player> = players.iter().collect();
        FilterSet::for_players("", StarterFilter::Yes, "").apply(&mut list);
        assert_eq!(names(&list), vec!["Ronaldo", "Messi"]);

        let mut list: Vec<&Player> = players.iter().collect();
        FilterSet::for_players("", StarterFilter::No, "").apply(&mut list);
        assert_eq!(names(&list), vec!["Robben", "De Bruyne", "Courtois"]);
    }

    #[test]
    fn test_club_name_filter() {
        let players = squad();
        let mut list: Vec<&Player> = players.iter().collect();
        FilterSet::for_players("", StarterFilter::All, "MÜN").apply(&mut list);
        assert_eq!(names(&list), vec!["Robben"]);
    }

    #[test]
    fn test_club_name_filter_skips_players_without_club() {
        let players = squad();
        let mut list: Vec<&Player> = players.iter().collect();
        FilterSet::for_players("", StarterFilter::All, "c").apply(&mut list);
        assert_eq!(names(&list), vec!["Robben", "Messi", "De Bruyne"]);
    }

    #[test]
    fn test_filters_combine_in_order() {
        let set = FilterSet::for_players("o", StarterFilter::Yes, "real");
        assert_eq!(
            set.filters(),
            &[
                PlayerFilter::NameContains("o".to_string()),
                PlayerFilter::Starter(true),
                PlayerFilter::ClubNameContains("real".to_string()),
            ]
        );

        let players = squad();
        let mut list: Vec<&Player> = players.iter().collect();
        set.apply(&mut list);
        assert_eq!(names(&list), vec!["Ronaldo"]);
    }

    #[test]
    fn test_filter_can_exclude_everything() {
        let players = squad();
        let mut list: Vec<&Player> = players.iter().collect();
        let set = FilterSet::for_players("zzz", StarterFilter::All, "");
        assert_eq!(set.len(), 1);
        set.apply(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_club_filter() {
        let clubs = vec![Club::new("1", "Ajax"), Club::new("2", "Club Brugge"), Club::new("3", "AA Gent")];
        let mut list: Vec<&Club> = clubs.iter().collect();
        FilterSet::for_clubs("a").apply(&mut list);
        assert_eq!(list.len(), 2);
        assert!(FilterSet::for_clubs("GENT").matches(&clubs[2]));
    }
}
