//! Serde adapters for loosely typed backend fields.
//!
//! The backend hands out ids as numbers on some routes and strings on
//! others, booleans as `0`/`1`, and decimals as strings. Every entity that
//! reads such a field goes through one of these helpers so the rest of the
//! code only ever sees `String`, `f64`, `i64` and `bool`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    fn into_id(self) -> String {
        match self {
            Self::Bool(v) => v.to_string(),
            Self::Int(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Str(v) => v,
        }
    }

    fn into_number<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(v) => Ok(v as f64),
            Self::Float(v) => Ok(v),
            Self::Str(v) => v
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("expected a number, got '{v}'"))),
            Self::Bool(v) => Err(E::custom(format!("expected a number, got {v}"))),
        }
    }

    fn into_flag<E: serde::de::Error>(self) -> Result<bool, E> {
        match self {
            Self::Bool(v) => Ok(v),
            Self::Int(v) => Ok(v != 0),
            #[allow(clippy::float_cmp)]
            Self::Float(v) => Ok(v != 0.0),
            Self::Str(v) => match v.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" | "" => Ok(false),
                other => Err(E::custom(format!("expected a boolean, got '{other}'"))),
            },
        }
    }
}

/// Id that may arrive as a string or a number.
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(Scalar::into_id)
}

/// Optional id; `null` and a missing field both become `None`.
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_id)
        .filter(|v| !v.is_empty()))
}

/// List of ids with mixed element types.
pub fn id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Scalar>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(Scalar::into_id)
        .collect())
}

/// Number; `null` reads as zero.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(v) => v.into_number(),
    }
}

pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Str(v)) if v.trim().is_empty() => Ok(None),
        Some(v) => v.into_number().map(Some),
    }
}

/// Integer count (seats, credits, semesters). Fractions are truncated and
/// `null` reads as zero.
#[allow(clippy::cast_possible_truncation)]
pub fn count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    number(deserializer).map(|v| v as i64)
}

#[allow(clippy::cast_possible_truncation)]
pub fn opt_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    opt_number(deserializer).map(|v| v.map(|n| n as i64))
}

/// Boolean that may arrive as `true`, `1` or `"true"`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(false),
        Some(v) => v.into_flag(),
    }
}
