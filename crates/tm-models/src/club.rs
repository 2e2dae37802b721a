//! Club model
//!
//! Collection: clubs

use serde::{Deserialize, Serialize};
use tm_core::traits::{Entity, Identifiable, Named};

use crate::serde_helpers::{lenient_number, null_as_default};

/// Club record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub stadium: String,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub coach: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl Club {
    /// Create a club with only identity and name set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_stadium(mut self, stadium: impl Into<String>) -> Self {
        self.stadium = stadium.into();
        self
    }

    pub fn with_founded_year(mut self, year: i32) -> Self {
        self.founded_year = Some(year);
        self
    }
}

impl Identifiable for Club {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Named for Club {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Club {
    const TYPE_NAME: &'static str = "Club";
}
