use std::collections::BTreeMap;
use std::fmt;

/// Flat INI output: `"section::key"` → value.
pub type FlatIni = BTreeMap<String, String>;

/// The key/value pairs of one INI section.
pub type Section = BTreeMap<String, String>;

/// Nested INI output: section name → its key/value pairs.
pub type Sections = BTreeMap<String, Section>;

/// What was wrong with a skipped line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Nothing but whitespace before the `=`.
    EmptyKey,
    /// The value was empty after quote or comment stripping.
    EmptyValue,
    /// The env sink refused the pair.
    EnvRejected { key: String, reason: String },
    /// A `[` header with no closing `]`. Only collected on request.
    UnclosedSection,
    /// A `[]` header. Only collected on request.
    EmptySection,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::EmptyKey => write!(f, "key is empty"),
            IssueKind::EmptyValue => write!(f, "value is empty"),
            IssueKind::EnvRejected { key, reason } => {
                write!(f, "could not set environment variable '{key}': {reason}")
            }
            IssueKind::UnclosedSection => write!(f, "mismatched '[' ']'"),
            IssueKind::EmptySection => write!(f, "section name is empty"),
        }
    }
}

/// A non-fatal, per-line diagnostic. The line was skipped and parsing went on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: IssueKind,
    /// The offending line, trimmed.
    pub line: String,
    /// 1-based.
    pub line_number: usize,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {:?}", self.line_number, self.kind, self.line)
    }
}

/// The outcome of a read that ran to the end of its input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Parsed<T> {
    pub values: T,
    pub issues: Vec<Issue>,
}

impl<T> Parsed<T> {
    /// True when no line was skipped for a reported problem.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
