//! Contracts
//!
//! A contract checks a proposed change against the rules that need the
//! catalog or the raw text to decide: a referenced club must exist, names
//! must not be blank, numbers must be real.
//! Range checks live on the params via `validator`.

use tm_core::error::ValidationErrors;
use tm_models::Club;

use crate::players::PlayerParams;

/// Result of contract validation
pub type ValidationResult = Result<(), ValidationErrors>;

/// Base contract trait
pub trait Contract<T> {
    fn validate(&self, entity: &T) -> ValidationResult;
}

/// Rules for an admin edit of one player
pub struct UpdatePlayerContract<'a> {
    clubs: &'a [Club],
}

impl<'a> UpdatePlayerContract<'a> {
    pub fn new(clubs: &'a [Club]) -> Self {
        Self { clubs }
    }

    /// The club with exactly this id
    pub fn club(&self, club_id: &str) -> Option<&'a Club> {
        self.clubs.iter().find(|club| club.id == club_id)
    }

    fn validate_name(&self, name: Option<&str>, errors: &mut ValidationErrors) {
        if let Some(name) = name {
            if name.trim().is_empty() {
                errors.add("name", "can't be blank");
            }
        }
    }

    fn validate_market_value(&self, value: Option<f64>, errors: &mut ValidationErrors) {
        if let Some(value) = value {
            if !value.is_finite() {
                errors.add("marketValueEur", "must be a number");
            }
        }
    }

    fn validate_club(&self, club_id: Option<&str>, errors: &mut ValidationErrors) {
        if let Some(club_id) = club_id {
            if self.club(club_id).is_none() {
                errors.add("clubId", "Invalid club");
            }
        }
    }
}

impl Contract<PlayerParams> for UpdatePlayerContract<'_> {
    fn validate(&self, params: &PlayerParams) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        self.validate_name(params.name.as_deref(), &mut errors);
        self.validate_market_value(params.market_value_eur, &mut errors);
        self.validate_club(params.club_id.as_deref(), &mut errors);

        errors.into_result()
    }
}
