use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Numeric types a loosely-typed field can be narrowed into
pub(crate) trait LooseNumber: Sized {
    fn from_f64(value: f64) -> Option<Self>;
}

impl LooseNumber for f64 {
    fn from_f64(value: f64) -> Option<Self> {
        value.is_finite().then_some(value)
    }
}

impl LooseNumber for u32 {
    fn from_f64(value: f64) -> Option<Self> {
        (value.fract() == 0.0 && value >= 0.0 && value <= f64::from(u32::MAX)).then(|| value as u32)
    }
}

impl LooseNumber for i32 {
    fn from_f64(value: f64) -> Option<Self> {
        (value.fract() == 0.0 && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX))
            .then(|| value as i32)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum Loose {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Accept a number, a numeric string, or `null`; anything else reads as `None`
pub(crate) fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: LooseNumber,
{
    let value = match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Number(value)) => Some(value),
        Some(Loose::Text(text)) => text.trim().parse::<f64>().ok(),
        Some(Loose::Other(_)) | None => None,
    };
    Ok(value.and_then(T::from_f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "lenient_number")]
        count: Option<u32>,
        #[serde(default, deserialize_with = "lenient_number")]
        value: Option<f64>,
    }

    fn sample(value: serde_json::Value) -> Sample {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        let parsed = sample(json!({ "count": "31", "value": " 1.5e6 " }));
        assert_eq!(parsed.count, Some(31));
        assert_eq!(parsed.value, Some(1_500_000.0));

        let parsed = sample(json!({ "count": 31, "value": 2 }));
        assert_eq!(parsed.count, Some(31));
        assert_eq!(parsed.value, Some(2.0));
    }

    #[test]
    fn test_unusable_values_read_as_none() {
        let parsed = sample(json!({ "count": "unknown", "value": [1, 2] }));
        assert_eq!(parsed.count, None);
        assert_eq!(parsed.value, None);

        let parsed = sample(json!({ "count": -3, "value": "NaN" }));
        assert_eq!(parsed.count, None);
        assert_eq!(parsed.value, None);

        let parsed = sample(json!({ "count": 30.5, "value": null }));
        assert_eq!(parsed.count, None);
        assert_eq!(parsed.value, None);

        let parsed = sample(json!({}));
        assert_eq!(parsed.count, None);
    }
}
