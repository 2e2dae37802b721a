//! Sort orders
//!
//! Each entity has a closed set of sort keys. A key maps to exactly one typed
//! accessor and comparator, so there is never more than one sort key in play
//! and never any lookup of fields by name at comparison time.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use tm_models::{Club, Player};

use crate::compare::{compare_boolean, compare_numeric, compare_strings};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (A-Z, 1-9)
    #[default]
    Asc,
    /// Descending order (Z-A, 9-1)
    Desc,
}

impl SortDirection {
    /// Parse the `order` request parameter
    ///
    /// Only the exact literal `desc` selects descending order; anything
    /// else, including a missing value, is ascending.
    pub fn from_param(order: Option<&str>) -> Self {
        match order {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Get the opposite direction
    pub fn reverse(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Apply the direction to an ascending comparison result
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Typed accessor for one sortable attribute
pub enum SortField<T> {
    Text(fn(&T) -> Option<&str>),
    Number(fn(&T) -> Option<f64>),
    Flag(fn(&T) -> Option<bool>),
}

impl<T> SortField<T> {
    /// Compare two records on this attribute
    pub fn compare(&self, a: &T, b: &T, direction: SortDirection) -> Ordering {
        match self {
            SortField::Text(get) => compare_strings(get(a), get(b), direction),
            SortField::Number(get) => compare_numeric(get(a), get(b), direction),
            SortField::Flag(get) => compare_boolean(get(a), get(b), direction),
        }
    }
}

/// Whitelisted sort keys for one record type
pub trait SortKey: Copy + Eq + fmt::Debug + 'static {
    type Record;

    /// Key used when the request names none or an unknown one
    const DEFAULT: Self;

    /// Every accepted key
    const ALL: &'static [Self];

    /// Request-parameter spelling of the key
    fn as_str(self) -> &'static str;

    /// The accessor this key sorts by
    fn field(self) -> SortField<Self::Record>;

    /// Exact, case-sensitive match against the whitelist
    fn lookup(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == raw)
    }

    /// Like [`SortKey::lookup`] but falls back to [`SortKey::DEFAULT`]
    fn parse(raw: Option<&str>) -> Self {
        raw.and_then(Self::lookup).unwrap_or(Self::DEFAULT)
    }
}

/// Sort keys for players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerSortKey {
    #[default]
    Name,
    /// Name of the referenced club
    Club,
    Age,
    Position,
    IsStarter,
    MarketValueEur,
}

fn player_name(player: &Player) -> Option<&str> {
    Some(&player.name)
}

fn player_position(player: &Player) -> Option<&str> {
    Some(&player.position)
}

fn player_age(player: &Player) -> Option<f64> {
    player.age.map(f64::from)
}

fn player_starter(player: &Player) -> Option<bool> {
    Some(player.is_starter())
}

fn player_market_value(player: &Player) -> Option<f64> {
    player.market_value_eur
}

impl SortKey for PlayerSortKey {
    type Record = Player;

    const DEFAULT: Self = Self::Name;

    const ALL: &'static [Self] = &[
        Self::Name,
        Self::Club,
        Self::Age,
        Self::Position,
        Self::IsStarter,
        Self::MarketValueEur,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Club => "club",
            Self::Age => "age",
            Self::Position => "position",
            Self::IsStarter => "isStarter",
            Self::MarketValueEur => "marketValueEur",
        }
    }

    fn field(self) -> SortField<Player> {
        match self {
            Self::Name => SortField::Text(player_name),
            Self::Club => SortField::Text(Player::club_name),
            Self::Age => SortField::Number(player_age),
            Self::Position => SortField::Text(player_position),
            Self::IsStarter => SortField::Flag(player_starter),
            Self::MarketValueEur => SortField::Number(player_market_value),
        }
    }
}

/// Sort keys for clubs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClubSortKey {
    #[default]
    Name,
    FoundedYear,
    Country,
    Stadium,
}

fn club_name(club: &Club) -> Option<&str> {
    Some(&club.name)
}

fn club_founded_year(club: &Club) -> Option<f64> {
    club.founded_year.map(f64::from)
}

fn club_country(club: &Club) -> Option<&str> {
    Some(&club.country)
}

fn club_stadium(club: &Club) -> Option<&str> {
    Some(&club.stadium)
}

impl SortKey for ClubSortKey {
    type Record = Club;

    const DEFAULT: Self = Self::Name;

    const ALL: &'static [Self] = &[Self::Name, Self::FoundedYear, Self::Country, Self::Stadium];

    fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::FoundedYear => "foundedYear",
            Self::Country => "country",
            Self::Stadium => "stadium",
        }
    }

    fn field(self) -> SortField<Club> {
        match self {
            Self::Name => SortField::Text(club_name),
            Self::FoundedYear => SortField::Number(club_founded_year),
            Self::Country => SortField::Text(club_country),
            Self::Stadium => SortField::Text(club_stadium),
        }
    }
}

/// A resolved sort request: one key, one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortCriterion<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: SortKey> SortCriterion<K> {
    /// Create a new sort criterion
    pub fn new(key: K, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Create ascending sort
    pub fn asc(key: K) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    /// Create descending sort
    pub fn desc(key: K) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// Resolve the raw `sort` / `order` parameters, never failing
    pub fn from_params(sort: Option<&str>, order: Option<&str>) -> Self {
        Self::new(K::parse(sort), SortDirection::from_param(order))
    }

    /// Sort in place with the key's comparator as the only comparison
    ///
    /// `sort_by` is stable, so records with equal keys keep their order.
    pub fn apply<R: Borrow<K::Record>>(&self, records: &mut [R]) {
        let field = self.key.field();
        let direction = self.direction;
        records.sort_by(|a, b| field.compare(a.borrow(), b.borrow(), direction));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::name::en::LastName;
    use fake::Fake;

    fn names(players: &[&Player]) -> Vec<String> {
        players.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_direction_from_param() {
        assert_eq!(SortDirection::from_param(Some("desc")), SortDirection::Desc);
        assert_eq!(SortDirection::from_param(Some("asc")), SortDirection::Asc);
        assert_eq!(SortDirection::from_param(Some("DESC")), SortDirection::Asc);
        assert_eq!(SortDirection::from_param(Some("descending")), SortDirection::Asc);
        assert_eq!(SortDirection::from_param(None), SortDirection::Asc);
        assert_eq!(SortDirection::Asc.reverse(), SortDirection::Desc);
    }

    #[test]
    fn test_key_whitelist() {
        assert_eq!(PlayerSortKey::parse(Some("marketValueEur")), PlayerSortKey::MarketValueEur);
        assert_eq!(PlayerSortKey::parse(Some("isStarter")), PlayerSortKey::IsStarter);
        assert_eq!(PlayerSortKey::parse(Some("xyz")), PlayerSortKey::Name);
        assert_eq!(PlayerSortKey::parse(Some("foundedYear")), PlayerSortKey::Name);
        assert_eq!(PlayerSortKey::parse(None), PlayerSortKey::Name);
        assert_eq!(ClubSortKey::parse(Some("foundedYear")), ClubSortKey::FoundedYear);
        assert_eq!(ClubSortKey::parse(Some("age")), ClubSortKey::Name);
        assert!(PlayerSortKey::lookup("Name").is_none());
    }

    #[test]
    fn test_keys_round_trip_through_names() {
        for key in PlayerSortKey::ALL {
            assert_eq!(PlayerSortKey::lookup(key.as_str()), Some(*key));
        }
        for key in ClubSortKey::ALL {
            assert_eq!(ClubSortKey::lookup(key.as_str()), Some(*key));
        }
    }

    #[test]
    fn test_sort_clubs_by_founded_year() {
        let clubs = vec![
            Club::new("a", "Ajax").with_founded_year(1900),
            Club::new("b", "Brugge").with_founded_year(1850),
        ];
        let mut list: Vec<&Club> = clubs.iter().collect();

        SortCriterion::asc(ClubSortKey::FoundedYear).apply(&mut list);
        assert_eq!(list[0].founded_year, Some(1850));
        assert_eq!(list[1].founded_year, Some(1900));
    }

    #[test]
    fn test_sort_by_club_uses_nested_name() {
        let players = vec![
            Player::new("1", "A").with_club("z", "Zulte Waregem"),
            Player::new("2", "B"),
            Player::new("3", "C").with_club("a", "anderlecht"),
        ];
        let mut list: Vec<&Player> = players.iter().collect();

        SortCriterion::asc(PlayerSortKey::Club).apply(&mut list);
        assert_eq!(names(&list), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_sort_missing_market_value_as_zero() {
        let players = vec![
            Player::new("1", "Rich").with_market_value(50_000_000.0),
            Player::new("2", "Unknown"),
            Player::new("3", "Cheap").with_market_value(100.0),
        ];
        let mut list: Vec<&Player> = players.iter().collect();

        SortCriterion::desc(PlayerSortKey::MarketValueEur).apply(&mut list);
        assert_eq!(names(&list), vec!["Rich", "Cheap", "Unknown"]);
    }

    #[test]
    fn test_sort_starters_stable() {
        let players = vec![
            Player::new("1", "A").with_starter(true),
            Player::new("2", "B"),
            Player::new("3", "C").with_starter(true),
            Player::new("4", "D").with_starter(false),
        ];
        let mut list: Vec<&Player> = players.iter().collect();

        SortCriterion::desc(PlayerSortKey::IsStarter).apply(&mut list);
        assert_eq!(names(&list), vec!["A", "C", "B", "D"]);

        SortCriterion::asc(PlayerSortKey::IsStarter).apply(&mut list);
        assert_eq!(names(&list), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_name_desc_reverses_asc_except_ties() {
        let mut players: Vec<Player> = (0..40)
            .map(|i| Player::new(i.to_string(), LastName().fake::<String>()))
            .collect();
        // force a few case-insensitive ties
        players.push(Player::new("t1", "Tie"));
        players.push(Player::new("t2", "tie"));
        players.push(Player::new("t3", "TIE"));

        let mut asc: Vec<&Player> = players.iter().collect();
        SortCriterion::asc(PlayerSortKey::Name).apply(&mut asc);

        let mut desc: Vec<&Player> = players.iter().collect();
        SortCriterion::desc(PlayerSortKey::Name).apply(&mut desc);

        let key = |p: &&Player| p.name.to_lowercase();
        let asc_keys: Vec<String> = asc.iter().map(key).collect();
        let mut desc_keys: Vec<String> = desc.iter().map(key).collect();
        desc_keys.reverse();
        assert_eq!(asc_keys, desc_keys);

        // within a group of equal names both directions keep input order
        let ties = |list: &[&Player]| -> Vec<String> {
            list.iter()
                .filter(|p| p.name.eq_ignore_ascii_case("tie"))
                .map(|p| p.id.clone())
                .collect()
        };
        assert_eq!(ties(&asc), vec!["t1", "t2", "t3"]);
        assert_eq!(ties(&desc), vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn test_sort_owned_records() {
        let mut players = vec![Player::new("1", "b"), Player::new("2", "A")];
        SortCriterion::asc(PlayerSortKey::Name).apply(&mut players);
        assert_eq!(players[0].name, "A");
    }
}
