//! Line-oriented readers for `.env` files and INI files, with per-line issue
//! reporting.
//!
//! Three readers share one scanner and differ only in the shape of what they
//! return:
//!
//! | Function | Output |
//! |---|---|
//! | [`env_from_file`] | sets process environment variables |
//! | [`read_ini`] | `"section::key"` → value |
//! | [`read_ini_as_map_of_sections`] | section → key → value |
//!
//! ```ignore
//! let parsed = kvfile::read_ini_as_map_of_sections("app.ini")?;
//! for issue in &parsed.issues {
//!     eprintln!("app.ini {issue}");
//! }
//! let url = &parsed.values["database"]["url"];
//! ```
//!
//! # File format
//!
//! ```text
//! # comment
//! [section]              ; INI only, text after ']' is ignored
//! key = value            ; surrounding whitespace trimmed
//! key = value # comment  ; comment stripped, then trimmed again
//! key = "a # b"          ; quotes win over comments, inner text kept verbatim
//! key = 'say "hi"'       ; either quote style, no escapes
//! just some text         ; lines without '=' are ignored
//! ```
//!
//! An unclosed quote (`key = 'abc`) keeps the value as written, quote
//! included. Invalid UTF-8 is replaced with U+FFFD rather than failing the
//! read.
//!
//! # Errors and issues
//!
//! Two severities:
//!
//! - **Fatal**: [`KvFileError`]. The file could not be opened, reading failed
//!   partway through, or an INI file has a key before its first `[section]`.
//!   No results are returned, but the error keeps the issues found so far.
//! - **Issues**: [`Issue`]. A line was skipped: empty key, empty value, or a
//!   pair the env sink refused. Reading continues and the issues come back in
//!   input order next to the results.
//!
//! Which problems count as issues differs a little between readers. The env
//! and flat INI readers report empty values; the nested INI reader drops them
//! silently. Malformed section headers (`[name` or `[]`) are logged with
//! `tracing::warn!` but not collected. Both behaviors can be changed through
//! [`KvFile::builder()`].
//!
//! # Environment variables
//!
//! [`env_from_file`] writes into the process environment, which is global and
//! unsynchronized. To keep values in memory instead, pass any [`EnvSink`] (a
//! `HashMap<String, String>` works) to
//! [`KvFileBuilder::env_from_file_into`].
//!
//! # Logging
//!
//! Events are emitted through [`tracing`]; install a subscriber to see them.
//! Nothing is printed otherwise.

pub mod error;
pub mod typed;
pub mod types;

mod builder;
mod collect;
mod env;
mod scan;

#[cfg(test)]
mod fixtures;

use std::path::Path;

pub use builder::{KvFile, KvFileBuilder};
pub use env::{EnvSink, ProcessEnv};
pub use error::KvFileError;
pub use types::{FlatIni, Issue, IssueKind, Parsed, Section, Sections};

/// Read a `.env` file into the process environment.
///
/// Returns the per-line issues. See [`ProcessEnv`] for the thread-safety
/// caveat.
pub fn env_from_file(path: impl AsRef<Path>) -> Result<Vec<Issue>, KvFileError> {
    KvFile::builder().env_from_file(path)
}

/// Read an INI file into one map keyed by `section::key`.
pub fn read_ini(path: impl AsRef<Path>) -> Result<Parsed<FlatIni>, KvFileError> {
    KvFile::builder().read_ini(path)
}

/// Read an INI file into a map of sections.
pub fn read_ini_as_map_of_sections(
    path: impl AsRef<Path>,
) -> Result<Parsed<Sections>, KvFileError> {
    KvFile::builder().read_ini_sections(path)
}
