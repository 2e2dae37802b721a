//! Plain-text output

use std::fmt::Write;

use tm_core::format_market_value;
use tm_models::{Club, Player};
use tm_services::{ClubDetail, Dashboard, LookupHit, PlayerDetail};

fn value_or_dash(value: Option<f64>) -> String {
    value.map(format_market_value).unwrap_or_else(|| "-".to_string())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub fn dashboard(dashboard: &Dashboard) -> String {
    format!(
        "Players: {}\nClubs: {}\nTotal market value: {}\n",
        dashboard.total_players,
        dashboard.total_clubs,
        format_market_value(dashboard.total_market_value),
    )
}

pub fn players(players: &[Player]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16} {:<28} {:>4} {:<20} {:<7} {:<24} {:>12}",
        "ID", "NAME", "AGE", "POSITION", "STARTER", "CLUB", "VALUE"
    );
    for player in players {
        let _ = writeln!(
            out,
            "{:<16} {:<28} {:>4} {:<20} {:<7} {:<24} {:>12}",
            player.id,
            player.name,
            player.age.map(|age| age.to_string()).unwrap_or_default(),
            player.position,
            yes_no(player.is_starter()),
            player.club_name().unwrap_or("-"),
            value_or_dash(player.market_value_eur),
        );
    }
    let _ = writeln!(out, "{} player(s)", players.len());
    out
}

pub fn clubs(clubs: &[Club]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16} {:<28} {:<16} {:<28} {:>7}",
        "ID", "NAME", "COUNTRY", "STADIUM", "FOUNDED"
    );
    for club in clubs {
        let _ = writeln!(
            out,
            "{:<16} {:<28} {:<16} {:<28} {:>7}",
            club.id,
            club.name,
            club.country,
            club.stadium,
            club.founded_year.map(|year| year.to_string()).unwrap_or_default(),
        );
    }
    let _ = writeln!(out, "{} club(s)", clubs.len());
    out
}

fn player_card(out: &mut String, player: &Player) {
    let _ = writeln!(out, "{} ({})", player.name, player.id);
    if !player.description.is_empty() {
        let _ = writeln!(out, "  {}", player.description);
    }
    if let Some(age) = player.age {
        let _ = writeln!(out, "  Age: {}", age);
    }
    if !player.position.is_empty() {
        let _ = writeln!(out, "  Position: {}", player.position);
    }
    let _ = writeln!(out, "  Starter: {}", yes_no(player.is_starter()));
    if let Some(number) = player.shirt_number {
        let _ = writeln!(out, "  Shirt number: {}", number);
    }
    if !player.skills.is_empty() {
        let _ = writeln!(out, "  Skills: {}", player.skills.join(", "));
    }
    let _ = writeln!(out, "  Market value: {}", value_or_dash(player.market_value_eur));
}

fn club_card(out: &mut String, club: &Club) {
    let _ = writeln!(out, "{} ({})", club.name, club.id);
    if !club.country.is_empty() {
        let _ = writeln!(out, "  Country: {}", club.country);
    }
    if !club.stadium.is_empty() {
        let _ = writeln!(out, "  Stadium: {}", club.stadium);
    }
    if let Some(year) = club.founded_year {
        let _ = writeln!(out, "  Founded: {}", year);
    }
    if !club.coach.is_empty() {
        let _ = writeln!(out, "  Coach: {}", club.coach);
    }
}

pub fn player_detail(detail: &PlayerDetail) -> String {
    let mut out = String::new();
    player_card(&mut out, &detail.player);
    match &detail.club {
        Some(club) => {
            let _ = writeln!(out, "Club:");
            club_card(&mut out, club);
        }
        None => {
            let _ = writeln!(out, "Club info unavailable");
        }
    }
    out
}

pub fn club_detail(detail: &ClubDetail) -> String {
    let mut out = String::new();
    club_card(&mut out, &detail.club);
    let _ = writeln!(out, "Squad value: {}", format_market_value(detail.total_market_value));
    out.push_str(&players(&detail.players));
    out
}

pub fn lookup(hit: &LookupHit) -> String {
    let mut out = String::new();
    match hit {
        LookupHit::Player(player) => {
            let _ = writeln!(out, "Player found:");
            player_card(&mut out, player);
        }
        LookupHit::Club(club) => {
            let _ = writeln!(out, "Club found:");
            club_card(&mut out, club);
        }
    }
    out
}
