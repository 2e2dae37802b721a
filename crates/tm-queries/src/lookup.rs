//! Record lookups
//!
//! Lookups by id and the weak player-to-club reference. An unresolvable
//! reference is `None`, never an error.

use tm_core::traits::{eq_ignore_case, Identifiable};
use tm_models::{Club, Player, PlayerClubRef};

/// Exact id match
pub fn find_by_id<'a, T: Identifiable>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|record| record.has_id(id))
}

/// Case-insensitive id match; the first hit in collection order wins
pub fn find_by_id_ignore_case<'a, T: Identifiable>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|record| record.has_id_ignore_case(id))
}

/// Resolve a club reference: id first, then name, both ignoring case
///
/// Empty ids and names never match.
pub fn resolve_club<'a>(clubs: &'a [Club], reference: &PlayerClubRef) -> Option<&'a Club> {
    let by_id = || {
        if reference.id.is_empty() {
            return None;
        }
        clubs.iter().find(|club| eq_ignore_case(&club.id, &reference.id))
    };
    let by_name = || {
        if reference.name.is_empty() {
            return None;
        }
        clubs.iter().find(|club| eq_ignore_case(&club.name, &reference.name))
    };
    by_id().or_else(by_name)
}

/// The club a player plays for, if it can be resolved
pub fn club_of<'a>(clubs: &'a [Club], player: &Player) -> Option<&'a Club> {
    player.club.as_ref().and_then(|reference| resolve_club(clubs, reference))
}

/// Players whose club reference matches the club by id or name, in input order
pub fn players_of_club<'a>(players: &'a [Player], club: &Club) -> Vec<&'a Player> {
    players
        .iter()
        .filter(|player| match &player.club {
            Some(reference) => references(reference, club),
            None => false,
        })
        .collect()
}

fn references(reference: &PlayerClubRef, club: &Club) -> bool {
    (!reference.id.is_empty() && eq_ignore_case(&reference.id, &club.id))
        || (!reference.name.is_empty() && eq_ignore_case(&reference.name, &club.name))
}
