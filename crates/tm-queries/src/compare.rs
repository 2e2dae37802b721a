//! Comparator library
//!
//! Every comparator is total: absent strings compare as `""`, absent or NaN
//! numbers as `0`, absent flags as `false`. The direction is applied last, so
//! ties stay `Equal` in both directions and a stable sort keeps them in input
//! order.

use std::cmp::Ordering;

use crate::sorts::SortDirection;

/// Case-insensitive comparison by code point
pub fn compare_strings(a: Option<&str>, b: Option<&str>, direction: SortDirection) -> Ordering {
    let a = a.unwrap_or_default().to_lowercase();
    let b = b.unwrap_or_default().to_lowercase();
    direction.apply(a.cmp(&b))
}

/// Numeric comparison with missing values coerced to zero
pub fn compare_numeric(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
    let a = number_or_zero(a);
    let b = number_or_zero(b);
    direction.apply(a.partial_cmp(&b).unwrap_or(Ordering::Equal))
}

/// Flags compare as integers: `true` = 1, `false` and absent = 0
pub fn compare_boolean(a: Option<bool>, b: Option<bool>, direction: SortDirection) -> Ordering {
    compare_numeric(a.map(flag_value), b.map(flag_value), direction)
}

fn number_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| !v.is_nan()).unwrap_or(0.0)
}

fn flag_value(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SortDirection::{Asc, Desc};

    #[test]
    fn test_strings_case_insensitive() {
        assert_eq!(compare_strings(Some("Ajax"), Some("ajax"), Asc), Ordering::Equal);
        assert_eq!(compare_strings(Some("Ajax"), Some("ajax"), Desc), Ordering::Equal);
        assert_eq!(compare_strings(Some("ajax"), Some("Brugge"), Asc), Ordering::Less);
        assert_eq!(compare_strings(Some("ajax"), Some("Brugge"), Desc), Ordering::Greater);
    }

    #[test]
    fn test_strings_missing_is_empty() {
        assert_eq!(compare_strings(None, Some(""), Asc), Ordering::Equal);
        assert_eq!(compare_strings(None, Some("a"), Asc), Ordering::Less);
        assert_eq!(compare_strings(Some("a"), None, Desc), Ordering::Less);
    }

    #[test]
    fn test_strings_code_point_order() {
        // 'z' (U+007A) sorts before 'é' (U+00E9)
        assert_eq!(compare_strings(Some("zola"), Some("émile"), Asc), Ordering::Less);
    }

    #[test]
    fn test_numeric() {
        assert_eq!(compare_numeric(Some(1850.0), Some(1900.0), Asc), Ordering::Less);
        assert_eq!(compare_numeric(Some(1850.0), Some(1900.0), Desc), Ordering::Greater);
        assert_eq!(compare_numeric(Some(7.0), Some(7.0), Desc), Ordering::Equal);
    }

    #[test]
    fn test_numeric_missing_is_zero() {
        assert_eq!(compare_numeric(None, Some(0.0), Asc), Ordering::Equal);
        assert_eq!(compare_numeric(None, Some(100.0), Asc), Ordering::Less);
        assert_eq!(compare_numeric(Some(-5.0), None, Asc), Ordering::Less);
        assert_eq!(compare_numeric(Some(f64::NAN), Some(0.0), Asc), Ordering::Equal);
    }

    #[test]
    fn test_boolean() {
        assert_eq!(compare_boolean(Some(false), Some(true), Asc), Ordering::Less);
        assert_eq!(compare_boolean(Some(false), Some(true), Desc), Ordering::Greater);
        assert_eq!(compare_boolean(None, Some(false), Asc), Ordering::Equal);
        assert_eq!(compare_boolean(Some(true), Some(true), Asc), Ordering::Equal);
    }
}
