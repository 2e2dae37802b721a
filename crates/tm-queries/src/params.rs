//! Request parameters
//!
//! Raw values as they arrive from a caller. Nothing is validated here; the
//! accessors only supply the documented defaults, and the typed query layer
//! turns unrecognized values into their fallbacks.

use serde::{Deserialize, Serialize};

use crate::filters::StarterFilter;
use crate::sorts::{SortDirection, SortKey};

/// Recognized listing parameters: `q`, `sort`, `order`, `starter`, `clubName`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListParams {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub starter: Option<String>,
    #[serde(rename = "clubName")]
    pub club_name: Option<String>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect recognized keys from name/value pairs
    ///
    /// Unknown keys are ignored. When a key repeats, the first value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "q" => &mut params.q,
                "sort" => &mut params.sort,
                "order" => &mut params.order,
                "starter" => &mut params.starter,
                "clubName" => &mut params.club_name,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    /// Parse a URL-encoded query string, with or without the leading `?`
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()).into_owned())
    }

    pub fn with_q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn with_starter(mut self, starter: impl Into<String>) -> Self {
        self.starter = Some(starter.into());
        self
    }

    pub fn with_club_name(mut self, club_name: impl Into<String>) -> Self {
        self.club_name = Some(club_name.into());
        self
    }

    /// Free-text name search, default empty
    pub fn q(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    /// Club name search, default empty
    pub fn club_name(&self) -> &str {
        self.club_name.as_deref().unwrap_or_default()
    }

    /// Starter filter, default `all`
    pub fn starter(&self) -> StarterFilter {
        StarterFilter::from_param(self.starter.as_deref())
    }

    /// Sort direction, default ascending
    pub fn direction(&self) -> SortDirection {
        SortDirection::from_param(self.order.as_deref())
    }

    /// Whitelisted sort key, default `name`
    pub fn sort_key<K: SortKey>(&self) -> K {
        K::parse(self.sort.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::{ClubSortKey, PlayerSortKey};
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let params = ListParams::new();
        assert_eq!(params.q(), "");
        assert_eq!(params.club_name(), "");
        assert_eq!(params.starter(), StarterFilter::All);
        assert_eq!(params.direction(), SortDirection::Asc);
        assert_eq!(params.sort_key::<PlayerSortKey>(), PlayerSortKey::Name);
        assert_eq!(params.sort_key::<ClubSortKey>(), ClubSortKey::Name);
    }

    #[test]
    fn test_from_query_string() {
        let params =
            ListParams::from_query_string("?q=de+bruyne&sort=age&order=desc&starter=yes&clubName=Man%20City&page=2");
        assert_eq!(params.q(), "de bruyne");
        assert_eq!(params.sort_key::<PlayerSortKey>(), PlayerSortKey::Age);
        assert_eq!(params.direction(), SortDirection::Desc);
        assert_eq!(params.starter(), StarterFilter::Yes);
        assert_eq!(params.club_name(), "Man City");
    }

    #[test]
    fn test_first_value_wins() {
        let params = ListParams::from_query_string("q=ro&q=me");
        assert_eq!(params.q(), "ro");
    }

    #[test]
    fn test_from_map() {
        let mut map = HashMap::new();
        map.insert("sort".to_string(), "foundedYear".to_string());
        map.insert("order".to_string(), "sideways".to_string());

        let params = ListParams::from_pairs(map);
        assert_eq!(params.sort_key::<ClubSortKey>(), ClubSortKey::FoundedYear);
        assert_eq!(params.direction(), SortDirection::Asc);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let params = ListParams::new()
            .with_sort("xyz")
            .with_order("DESC")
            .with_starter("maybe");
        assert_eq!(params.sort_key::<PlayerSortKey>(), PlayerSortKey::Name);
        assert_eq!(params.direction(), SortDirection::Asc);
        assert_eq!(params.starter(), StarterFilter::All);
    }

    #[test]
    fn test_deserialize_camel_case_key() {
        let params: ListParams =
            serde_json::from_str(r#"{"clubName":"ajax","order":"desc"}"#).unwrap();
        assert_eq!(params.club_name(), "ajax");
        assert_eq!(params.direction(), SortDirection::Desc);
    }
}
