//! The three output shapes fed by [`scan`](crate::scan).
//!
//! - [`EnvCollector`]: no sections, every pair goes to an [`EnvSink`].
//! - [`CompositeKeys`]: sectioned, stored flat as `section{sep}key`.
//! - [`NestedSections`]: sectioned, stored as section → key → value.

use crate::env::EnvSink;
use crate::scan::Collector;
use crate::types::{FlatIni, Section, Sections};

pub(crate) struct EnvCollector<'a, S: EnvSink + ?Sized> {
    sink: &'a mut S,
    stored: usize,
}

impl<'a, S: EnvSink + ?Sized> EnvCollector<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink, stored: 0 }
    }

    /// Pairs the sink accepted.
    pub fn stored(&self) -> usize {
        self.stored
    }
}

impl<S: EnvSink + ?Sized> Collector for EnvCollector<'_, S> {
    const SECTIONED: bool = false;

    fn assign(&mut self, _section: Option<&str>, key: &str, value: &str) -> Result<(), String> {
        self.sink.set(key, value)?;
        self.stored += 1;
        tracing::trace!(key, "set environment variable");
        Ok(())
    }
}

pub(crate) struct CompositeKeys<'a> {
    separator: &'a str,
    values: FlatIni,
}

impl<'a> CompositeKeys<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            separator,
            values: FlatIni::new(),
        }
    }

    pub fn into_values(self) -> FlatIni {
        self.values
    }
}

impl Collector for CompositeKeys<'_> {
    const SECTIONED: bool = true;

    fn assign(&mut self, section: Option<&str>, key: &str, value: &str) -> Result<(), String> {
        let composite = format!("{}{}{key}", section.unwrap_or_default(), self.separator);
        tracing::trace!(key = %composite, "stored ini value");
        self.values.insert(composite, value.to_string());
        Ok(())
    }
}

/// Accumulates the open section and flushes it into the result when the next
/// header arrives or the input ends.
#[derive(Default)]
pub(crate) struct NestedSections {
    values: Sections,
    current: Option<(String, Section)>,
}

impl NestedSections {
    pub fn into_values(self) -> Sections {
        self.values
    }

    /// A repeated section name replaces the earlier one.
    fn flush(&mut self) {
        if let Some((name, section)) = self.current.take() {
            self.values.insert(name, section);
        }
    }
}

impl Collector for NestedSections {
    const SECTIONED: bool = true;

    fn begin_section(&mut self, name: &str) {
        self.flush();
        self.current = Some((name.to_string(), Section::new()));
    }

    fn assign(&mut self, _section: Option<&str>, key: &str, value: &str) -> Result<(), String> {
        if let Some((name, section)) = &mut self.current {
            tracing::trace!(section = %name, key, "stored ini value");
            section.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn finish(&mut self) {
        self.flush();
    }
}
