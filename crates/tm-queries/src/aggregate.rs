//! Aggregate helpers

use std::borrow::Borrow;

use tm_models::Player;

/// Sum a numeric attribute; absent and non-finite values count as zero
///
/// Works on any subset of a collection. An empty input sums to `0.0`.
pub fn sum_by<T, R, I, F>(records: I, value: F) -> f64
where
    I: IntoIterator<Item = R>,
    R: Borrow<T>,
    F: Fn(&T) -> Option<f64>,
{
    records
        .into_iter()
        .map(|record| value(record.borrow()))
        .map(|v| v.filter(|v| v.is_finite()).unwrap_or(0.0))
        .fold(0.0, |total, v| total + v)
}

/// Total market value in euros
pub fn sum_market_value<R, I>(players: I) -> f64
where
    I: IntoIterator<Item = R>,
    R: Borrow<Player>,
{
    sum_by(players, |player: &Player| player.market_value_eur)
}
