//! Player model
//!
//! Collection: players

use serde::{Deserialize, Serialize};
use tm_core::traits::{Entity, Identifiable, Named};

use crate::serde_helpers::{lenient_number, null_as_default};

/// Broad position group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionType {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
    /// Anything the dataset spells differently
    #[serde(other)]
    Unknown,
}

impl PositionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::Defender => "DEF",
            Self::Midfielder => "MID",
            Self::Forward => "FWD",
            Self::Unknown => "?",
        }
    }
}

/// Denormalized pointer from a player to its club
///
/// Resolved by lookup, not enforced; it may name a club that does not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerClubRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl PlayerClubRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Player record
///
/// The starter flag is stored as `isStarter`. Older datasets call it
/// `isBasisspeler`; both are read, `isStarter` wins when both are present,
/// and [`Player::normalized`] folds the old name into the new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(rename = "isStarter", default, skip_serializing_if = "Option::is_none")]
    pub starter: Option<bool>,

    #[serde(rename = "isBasisspeler", default, skip_serializing_if = "Option::is_none")]
    pub legacy_starter: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(
        rename = "rugnummer",
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub shirt_number: Option<u32>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub position: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_type: Option<PositionType>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub market_value_eur: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<PlayerClubRef>,
}

impl Player {
    /// Create a player with only identity and name set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_position(mut self, position: impl Into<String>, kind: PositionType) -> Self {
        self.position = position.into();
        self.position_type = Some(kind);
        self
    }

    pub fn with_starter(mut self, starter: bool) -> Self {
        self.set_starter(starter);
        self
    }

    pub fn with_market_value(mut self, value: f64) -> Self {
        self.market_value_eur = Some(value);
        self
    }

    pub fn with_club(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.club = Some(PlayerClubRef::new(id, name));
        self
    }

    /// Starter status under either field name; absent means not a starter
    pub fn is_starter(&self) -> bool {
        self.starter.or(self.legacy_starter).unwrap_or(false)
    }

    pub fn set_starter(&mut self, starter: bool) {
        self.starter = Some(starter);
        self.legacy_starter = None;
    }

    /// Name of the referenced club, if the player carries a reference
    pub fn club_name(&self) -> Option<&str> {
        self.club.as_ref().map(|club| club.name.as_str())
    }

    /// Fold the legacy starter field into `isStarter`
    pub fn normalized(mut self) -> Self {
        if let Some(legacy) = self.legacy_starter.take() {
            self.starter.get_or_insert(legacy);
        }
        self
    }
}

impl Identifiable for Player {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Named for Player {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Player {
    const TYPE_NAME: &'static str = "Player";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let player: Player = serde_json::from_value(json!({
            "id": "kevin-de-bruyne",
            "name": "Kevin De Bruyne",
            "description": "Playmaker",
            "age": 33,
            "isStarter": true,
            "birthDate": "1991-06-28",
            "imageUrl": "https://example.com/kdb.png",
            "rugnummer": 17,
            "position": "Attacking Midfield",
            "positionType": "MID",
            "skills": ["Passing", "Vision"],
            "heightCm": 181,
            "weightKg": 68,
            "marketValueEur": 25000000,
            "club": { "id": "man-city", "name": "Manchester City" }
        }))
        .unwrap();

        assert_eq!(player.id, "kevin-de-bruyne");
        assert_eq!(player.age, Some(33));
        assert!(player.is_starter());
        assert_eq!(player.shirt_number, Some(17));
        assert_eq!(player.position_type, Some(PositionType::Midfielder));
        assert_eq!(player.market_value_eur, Some(25_000_000.0));
        assert_eq!(player.club_name(), Some("Manchester City"));
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let player: Player = serde_json::from_value(json!({
            "id": "p1",
            "name": null,
            "marketValueEur": null,
            "skills": null
        }))
        .unwrap();

        assert_eq!(player.name, "");
        assert!(player.market_value_eur.is_none());
        assert!(player.skills.is_empty());
        assert!(player.club.is_none());
        assert!(!player.is_starter());
    }

    #[test]
    fn test_numbers_given_as_strings() {
        let player: Player = serde_json::from_value(json!({
            "id": "p1",
            "age": "31",
            "rugnummer": "7",
            "heightCm": "n/a",
            "marketValueEur": "45000000"
        }))
        .unwrap();

        assert_eq!(player.age, Some(31));
        assert_eq!(player.shirt_number, Some(7));
        assert!(player.height_cm.is_none());
        assert_eq!(player.market_value_eur, Some(45_000_000.0));
    }

    #[test]
    fn test_legacy_starter_field() {
        let player: Player =
            serde_json::from_value(json!({ "id": "p1", "isBasisspeler": true })).unwrap();
        assert!(player.is_starter());

        let normalized = player.normalized();
        assert_eq!(normalized.starter, Some(true));
        assert!(normalized.legacy_starter.is_none());

        let out = serde_json::to_value(&normalized).unwrap();
        assert_eq!(out["isStarter"], json!(true));
        assert!(out.get("isBasisspeler").is_none());
    }

    #[test]
    fn test_canonical_starter_wins() {
        let player: Player = serde_json::from_value(json!({
            "id": "p1",
            "isStarter": false,
            "isBasisspeler": true
        }))
        .unwrap();
        assert!(!player.is_starter());
        assert_eq!(player.normalized().starter, Some(false));
    }

    #[test]
    fn test_unknown_position_type() {
        let player: Player =
            serde_json::from_value(json!({ "id": "p1", "positionType": "WINGBACK" })).unwrap();
        assert_eq!(player.position_type, Some(PositionType::Unknown));
    }

    #[test]
    fn test_builder() {
        let player = Player::new("p1", "Jan")
            .with_age(20)
            .with_starter(true)
            .with_market_value(1_000.0)
            .with_club("c1", "Club Brugge");

        assert_eq!(player.age, Some(20));
        assert!(player.is_starter());
        assert_eq!(player.club, Some(PlayerClubRef::new("c1", "Club Brugge")));
    }
}
