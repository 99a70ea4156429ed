//! Serde helpers for loosely typed DSM status fields.
//!
//! Responsibilities:
//! - Accept either a JSON string or a JSON unsigned integer where DSM reports
//!   a value that is only ever used as text (e.g. `status.connection.port`).
//!
//! Explicitly does NOT handle:
//! - Range checks or other semantic validation of the value.
//!
//! Invariants / assumptions:
//! - Strings are kept verbatim; integers are rendered in decimal.
//! - Errors are generic parse errors and never echo the payload.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
}

pub fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = StringOrNumber::deserialize(deserializer)?;
    match value {
        StringOrNumber::String(s) => Ok(s),
        StringOrNumber::U64(v) => Ok(v.to_string()),
    }
}
