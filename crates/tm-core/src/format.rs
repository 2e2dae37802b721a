//! Display formatting for catalog values

/// Human-readable market value: "85 million", "750 k", or the plain number
///
/// Rounds half away from zero; inputs are expected to be non-negative.
pub fn format_market_value(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{} million", (value / 1_000_000.0).round())
    } else if value >= 1_000.0 {
        format!("{} k", (value / 1_000.0).round())
    } else {
        value.to_string()
    }
}
