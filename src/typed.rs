//! Typed access to nested INI sections.
//!
//! INI values are untyped text. [`sections_to_table`] turns [`Sections`] into a
//! `toml::Table` (one sub-table per section) and guesses each value's type, so
//! the result can be deserialized into a plain serde struct:
//!
//! ```ignore
//! #[derive(Deserialize)]
//! struct AppConfig {
//!     server: Server, // [server]
//! }
//!
//! let parsed = kvfile::read_ini_as_map_of_sections("app.ini")?;
//! let config: AppConfig = kvfile::typed::deserialize_sections(&parsed.values)?;
//! ```
//!
//! Guessing order: bool → integer → float → string. A value that must stay a
//! string while looking like a number (say a zip code) should be declared as a
//! `String` field with `#[serde(deserialize_with = ...)]`, or read from the
//! [`Sections`] map directly.

use serde::de::DeserializeOwned;
use toml::{Table, Value};

use crate::error::KvFileError;
use crate::types::Sections;

/// Build a `toml::Table` with one sub-table per section.
pub fn sections_to_table(sections: &Sections) -> Table {
    sections
        .iter()
        .map(|(name, pairs)| {
            let table: Table = pairs
                .iter()
                .map(|(key, value)| (key.clone(), infer_value(value)))
                .collect();
            (name.clone(), Value::Table(table))
        })
        .collect()
}

/// Deserialize sections into `T`. Section names map to fields of `T`.
pub fn deserialize_sections<T: DeserializeOwned>(sections: &Sections) -> Result<T, KvFileError> {
    Value::Table(sections_to_table(sections))
        .try_into()
        .map_err(|source| KvFileError::Deserialize { source })
}

/// Parse a raw value into a typed TOML value.
///
/// This is the heuristic clapfig's `parse_env_value` applies to environment
/// variables, reused unchanged so INI text and env text type the same way.
fn infer_value(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        return Value::Boolean(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Boolean(false);
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::Integer(i);
    }
    // Require a dot so "NaN" and "inf" stay strings.
    if s.contains('.')
        && let Ok(f) = s.parse::<f64>()
    {
        return Value::Float(f);
    }
    Value::String(s.to_string())
}
