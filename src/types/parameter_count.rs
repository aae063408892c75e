//! Decoding for the model `parameters_number` field.
//!
//! The service sends this field as a magnitude string (`"70B"`), as a bare
//! number (`8000000000`), as `null`, or not at all. All of these decode to an
//! `Option<String>`; numbers are rendered as plain decimal digits.
//!
//! Use with `#[serde(default, deserialize_with = "parameter_count::deserialize")]`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Wire {
    Text(String),
    Number(serde_json::Number),
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Wire>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Wire::Text(s)) => Ok(Some(s)),
        Some(Wire::Number(n)) => Ok(Some(number_to_string(&n))),
    }
}

/// Render a JSON number without exponent or added trailing zeros.
///
/// Integers within `u64`/`i64` are exact. Anything larger is parsed as `f64`,
/// so only its 17 leading significant digits survive and the rest read as
/// zeros. Services that report counts that large should send a string.
fn number_to_string(n: &serde_json::Number) -> String {
    if let Some(u) = n.as_u64() {
        u.to_string()
    } else if let Some(i) = n.as_i64() {
        i.to_string()
    } else {
        // f64 Display never uses exponent notation and drops a zero fraction.
        n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
    }
}

/// Interpret a normalized parameter count, accepting `K`/`M`/`B`/`T` suffixes.
pub fn parse_magnitude(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let (digits, scale) = match raw.chars().last()?.to_ascii_uppercase() {
        'K' => (&raw[..raw.len() - 1], 1e3),
        'M' => (&raw[..raw.len() - 1], 1e6),
        'B' => (&raw[..raw.len() - 1], 1e9),
        'T' => (&raw[..raw.len() - 1], 1e12),
        _ => (raw, 1.0),
    };
    let digits = digits.trim();
    if scale == 1.0 {
        if let Ok(exact) = digits.parse::<u64>() {
            return Some(exact);
        }
    }
    let value: f64 = digits.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let scaled = (value * scale).round();
    if scaled > u64::MAX as f64 {
        return None;
    }
    Some(scaled as u64)
}
