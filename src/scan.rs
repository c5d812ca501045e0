//! The line scanner shared by every reader.
//!
//! Each line is trimmed and classified in order: blank, `#` comment, `[section]`
//! header (sectioned collectors only), then `key = value`. Lines without an `=`
//! are freeform and skipped silently.
//!
//! Values go through [`reduce_value`] before they are stored:
//!
//! - `'...'` or `"..."`: the text between the opening quote and the next
//!   matching quote, untrimmed. Quotes win over comments, so `'a#b'` keeps its
//!   `#`. An unclosed quote leaves the value as-is.
//! - otherwise: everything before the first `#`, trimmed.
//!
//! There are no escape sequences. Bytes that are not valid UTF-8 are replaced
//! with U+FFFD and the line is scanned like any other.
//!
//! Where a parsed pair ends up is decided by a [`Collector`]; see
//! [`collect`](crate::collect) for the three output shapes.

use std::borrow::Cow;
use std::io::BufRead;
use std::path::Path;

use tracing::{error, warn};

use crate::error::KvFileError;
use crate::types::{Issue, IssueKind};

/// An output strategy for [`scan`].
pub(crate) trait Collector {
    /// Whether `[section]` headers are recognized. Sectioned input must open a
    /// section before its first pair.
    const SECTIONED: bool;

    /// Called for each well-formed section header.
    fn begin_section(&mut self, _name: &str) {}

    /// Store one pair. `section` is always `Some` for sectioned collectors.
    ///
    /// `Err(reason)` is reported as an [`IssueKind::EnvRejected`] issue and the
    /// scan continues.
    fn assign(&mut self, section: Option<&str>, key: &str, value: &str) -> Result<(), String>;

    /// Called once, after the last line has been consumed.
    fn finish(&mut self) {}
}

/// Knobs that differ between readers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScanOptions {
    pub report_empty_values: bool,
    pub report_malformed_sections: bool,
}

enum Header<'a> {
    Name(&'a str),
    Unclosed,
    Empty,
}

/// Classify a line starting with `[`. Anything after the first `]` is ignored.
fn parse_header(line: &str) -> Option<Header<'_>> {
    let rest = line.strip_prefix('[')?;
    Some(match rest.split_once(']') {
        None => Header::Unclosed,
        Some(("", _)) => Header::Empty,
        Some((name, _)) => Header::Name(name),
    })
}

/// Strip surrounding quotes or a trailing `#` comment from a trimmed value.
pub(crate) fn reduce_value(value: &str) -> &str {
    if value.len() <= 1 {
        return value;
    }
    for quote in ['\'', '"'] {
        if let Some(rest) = value.strip_prefix(quote) {
            return match rest.find(quote) {
                Some(end) => &rest[..end],
                None => value,
            };
        }
    }
    match value.find('#') {
        Some(idx) => value[..idx].trim(),
        None => value,
    }
}

fn issue(kind: IssueKind, line: &str, line_number: usize) -> Issue {
    Issue {
        kind,
        line: line.to_string(),
        line_number,
    }
}

/// Consume `input` line by line, handing every valid pair to `collector`.
///
/// `path` only labels errors and log events. Returns the per-line issues in
/// input order. A fatal error carries the issues collected before it.
pub(crate) fn scan<R: BufRead, C: Collector>(
    input: R,
    path: &Path,
    collector: &mut C,
    options: ScanOptions,
) -> Result<Vec<Issue>, KvFileError> {
    let mut issues = Vec::new();
    let mut section: Option<String> = None;

    for (idx, raw) in input.split(b'\n').enumerate() {
        let line_number = idx + 1;
        let raw = match raw {
            Ok(raw) => raw,
            Err(source) => {
                return Err(KvFileError::Scan {
                    path: path.to_path_buf(),
                    line: line_number,
                    source,
                    issues,
                });
            }
        };
        let decoded = String::from_utf8_lossy(&raw);
        if let Cow::Owned(_) = decoded {
            warn!(path = %path.display(), line_number, "replaced invalid UTF-8 in line");
        }
        let line = decoded.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if C::SECTIONED {
            if let Some(header) = parse_header(line) {
                let kind = match header {
                    Header::Name(name) => {
                        collector.begin_section(name);
                        section = Some(name.to_string());
                        continue;
                    }
                    Header::Unclosed => IssueKind::UnclosedSection,
                    Header::Empty => IssueKind::EmptySection,
                };
                warn!(path = %path.display(), line_number, line, "skipping malformed section header: {kind}");
                if options.report_malformed_sections {
                    issues.push(issue(kind, line, line_number));
                }
                continue;
            }

            if section.is_none() {
                error!(path = %path.display(), line_number, line, "no section defined before this line");
                return Err(KvFileError::MissingSection {
                    path: path.to_path_buf(),
                    line: line_number,
                    issues,
                });
            }
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            issues.push(issue(IssueKind::EmptyKey, line, line_number));
            continue;
        }

        let value = reduce_value(value.trim());
        if value.is_empty() {
            if options.report_empty_values {
                issues.push(issue(IssueKind::EmptyValue, line, line_number));
            }
            continue;
        }

        if let Err(reason) = collector.assign(section.as_deref(), key, value) {
            let kind = IssueKind::EnvRejected {
                key: key.to_string(),
                reason,
            };
            issues.push(issue(kind, line, line_number));
        }
    }

    collector.finish();
    Ok(issues)
}
