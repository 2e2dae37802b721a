//! Player services
//!
//! Admin edit of a single player. Reads go through [`crate::CatalogService`].

mod update;

pub use update::UpdatePlayerService;

use serde::{Deserialize, Serialize};
use validator::Validate;

use tm_core::error::ValidationErrors;

/// Player edit params; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerParams {
    /// Blank names are rejected by the update contract
    pub name: Option<String>,

    #[validate(range(max = 150, message = "must be at most 150"))]
    pub age: Option<u32>,

    pub position: Option<String>,

    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub market_value_eur: Option<f64>,

    pub is_starter: Option<bool>,

    pub club_id: Option<String>,
}

impl PlayerParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_market_value(mut self, value: f64) -> Self {
        self.market_value_eur = Some(value);
        self
    }

    pub fn with_starter(mut self, starter: bool) -> Self {
        self.is_starter = Some(starter);
        self
    }

    pub fn with_club_id(mut self, club_id: impl Into<String>) -> Self {
        self.club_id = Some(club_id.into());
        self
    }

    /// Field-level checks, reported under the wire field names
    pub fn check(&self) -> Result<(), ValidationErrors> {
        self.validate().map_err(|errors| convert_errors(&errors))
    }
}

fn convert_errors(errors: &validator::ValidationErrors) -> ValidationErrors {
    let mut converted = ValidationErrors::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match &error.message {
                Some(message) => message.to_string(),
                None => error.code.to_string(),
            };
            converted.add(camel_case(field), message);
        }
    }
    converted
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
