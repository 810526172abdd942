//! Lenient deserializers for stored record fields.
//!
//! Records written by older builds of the tool may carry amounts as text
//! (`"300000"`) or `null` in free-text fields. Reading accepts both; writing
//! always emits the canonical form.

use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Accepts a JSON number, a numeric string or `null`.
///
/// `null` and blank strings read as `0.0`. Non-finite values are rejected.
pub fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrFloat {
        String(String),
        Float(f64),
    }

    let value = match Option::<StringOrFloat>::deserialize(deserializer)? {
        Some(StringOrFloat::String(s)) if s.trim().is_empty() => 0.0,
        Some(StringOrFloat::String(s)) => s.trim().parse::<f64>().map_err(de::Error::custom)?,
        Some(StringOrFloat::Float(f)) => f,
        None => 0.0,
    };

    if !value.is_finite() {
        return Err(de::Error::custom(format!("non-finite amount: {}", value)));
    }
    Ok(value)
}

/// Reads `null` as an empty string.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_lenient_f64")]
        value: f64,
        #[serde(default, deserialize_with = "deserialize_lenient_string")]
        text: String,
    }

    fn probe(json: &str) -> Result<Probe, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        assert_eq!(probe(r#"{"value": 300000}"#).unwrap().value, 300000.0);
        assert_eq!(probe(r#"{"value": 12.5}"#).unwrap().value, 12.5);
        assert_eq!(probe(r#"{"value": "50000"}"#).unwrap().value, 50000.0);
        assert_eq!(probe(r#"{"value": " 7 "}"#).unwrap().value, 7.0);
    }

    #[test]
    fn test_missing_null_and_blank_read_as_zero() {
        assert_eq!(probe(r#"{}"#).unwrap().value, 0.0);
        assert_eq!(probe(r#"{"value": null}"#).unwrap().value, 0.0);
        assert_eq!(probe(r#"{"value": ""}"#).unwrap().value, 0.0);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(probe(r#"{"value": "abc"}"#).is_err());
        assert!(probe(r#"{"value": "NaN"}"#).is_err());
        assert!(probe(r#"{"value": true}"#).is_err());
    }

    #[test]
    fn test_null_string_reads_as_empty() {
        assert_eq!(probe(r#"{"text": null}"#).unwrap().text, "");
        assert_eq!(probe(r#"{"text": "INV-001"}"#).unwrap().text, "INV-001");
    }
}
