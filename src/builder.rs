use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::collect::{CompositeKeys, EnvCollector, NestedSections};
use crate::env::{EnvSink, ProcessEnv};
use crate::error::KvFileError;
use crate::scan::{self, ScanOptions};
use crate::types::{FlatIni, Issue, Parsed, Sections};

/// Label used in errors and log events for in-memory input.
const STR_SOURCE: &str = "<str>";

/// Entry point for configuring the readers.
pub struct KvFile;

impl KvFile {
    pub fn builder() -> KvFileBuilder {
        KvFileBuilder::default()
    }
}

/// Reader options plus the read operations that use them.
///
/// The defaults reproduce the crate-root functions ([`crate::env_from_file`],
/// [`crate::read_ini`], [`crate::read_ini_as_map_of_sections`]). A builder can
/// be reused for any number of reads.
///
/// ```ignore
/// let parsed = KvFile::builder()
///     .report_malformed_sections(true)
///     .section_separator(".")
///     .read_ini("app.ini")?;
/// ```
#[derive(Debug, Clone)]
pub struct KvFileBuilder {
    report_empty_values: Option<bool>,
    report_malformed_sections: bool,
    section_separator: String,
}

impl Default for KvFileBuilder {
    fn default() -> Self {
        Self {
            report_empty_values: None,
            report_malformed_sections: false,
            section_separator: "::".to_string(),
        }
    }
}

impl KvFileBuilder {
    /// Force empty values to be reported (or not) by every reader.
    ///
    /// Without this, the env and flat INI readers report them and the nested
    /// INI reader drops them silently.
    pub fn report_empty_values(mut self, report: bool) -> Self {
        self.report_empty_values = Some(report);
        self
    }

    /// Also collect unclosed (`[name`) and empty (`[]`) section headers as
    /// issues (default: `false`). They are logged as warnings either way.
    pub fn report_malformed_sections(mut self, report: bool) -> Self {
        self.report_malformed_sections = report;
        self
    }

    /// Separator between section and key in [`read_ini`](Self::read_ini)
    /// output (default: `"::"`).
    pub fn section_separator(mut self, separator: &str) -> Self {
        self.section_separator = separator.to_string();
        self
    }

    fn scan_options(&self, empty_values_by_default: bool) -> ScanOptions {
        ScanOptions {
            report_empty_values: self.report_empty_values.unwrap_or(empty_values_by_default),
            report_malformed_sections: self.report_malformed_sections,
        }
    }

    // --- env ---

    /// Read a `.env` file into the process environment.
    pub fn env_from_file(&self, path: impl AsRef<Path>) -> Result<Vec<Issue>, KvFileError> {
        self.env_from_file_into(path, &mut ProcessEnv)
    }

    /// Read a `.env` file into `sink`.
    pub fn env_from_file_into<S: EnvSink + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        sink: &mut S,
    ) -> Result<Vec<Issue>, KvFileError> {
        let path = path.as_ref();
        self.env_from_reader(open(path)?, path, sink)
    }

    /// Parse `.env` text already in memory into `sink`.
    pub fn parse_env_str<S: EnvSink + ?Sized>(
        &self,
        input: &str,
        sink: &mut S,
    ) -> Result<Vec<Issue>, KvFileError> {
        self.env_from_reader(input.as_bytes(), Path::new(STR_SOURCE), sink)
    }

    fn env_from_reader<R: BufRead, S: EnvSink + ?Sized>(
        &self,
        input: R,
        path: &Path,
        sink: &mut S,
    ) -> Result<Vec<Issue>, KvFileError> {
        let mut collector = EnvCollector::new(sink);
        let issues = scan::scan(input, path, &mut collector, self.scan_options(true))?;
        debug!(
            path = %path.display(),
            stored = collector.stored(),
            issues = issues.len(),
            "read env file"
        );
        Ok(issues)
    }

    // --- flat ini ---

    /// Read an INI file into one map keyed by `section::key`.
    pub fn read_ini(&self, path: impl AsRef<Path>) -> Result<Parsed<FlatIni>, KvFileError> {
        let path = path.as_ref();
        self.ini_from_reader(open(path)?, path)
    }

    /// Parse INI text already in memory into one map keyed by `section::key`.
    pub fn parse_ini_str(&self, input: &str) -> Result<Parsed<FlatIni>, KvFileError> {
        self.ini_from_reader(input.as_bytes(), Path::new(STR_SOURCE))
    }

    fn ini_from_reader<R: BufRead>(
        &self,
        input: R,
        path: &Path,
    ) -> Result<Parsed<FlatIni>, KvFileError> {
        let mut collector = CompositeKeys::new(&self.section_separator);
        let issues = scan::scan(input, path, &mut collector, self.scan_options(true))?;
        let values = collector.into_values();
        debug!(
            path = %path.display(),
            entries = values.len(),
            issues = issues.len(),
            "read ini file"
        );
        Ok(Parsed { values, issues })
    }

    // --- nested ini ---

    /// Read an INI file into a map of sections, each a map of keys to values.
    pub fn read_ini_sections(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Parsed<Sections>, KvFileError> {
        let path = path.as_ref();
        self.sections_from_reader(open(path)?, path)
    }

    /// Parse INI text already in memory into a map of sections.
    pub fn parse_ini_sections_str(&self, input: &str) -> Result<Parsed<Sections>, KvFileError> {
        self.sections_from_reader(input.as_bytes(), Path::new(STR_SOURCE))
    }

    fn sections_from_reader<R: BufRead>(
        &self,
        input: R,
        path: &Path,
    ) -> Result<Parsed<Sections>, KvFileError> {
        let mut collector = NestedSections::default();
        let issues = scan::scan(input, path, &mut collector, self.scan_options(false))?;
        let values = collector.into_values();
        debug!(
            path = %path.display(),
            sections = values.len(),
            issues = issues.len(),
            "read ini file as sections"
        );
        Ok(Parsed { values, issues })
    }
}

fn open(path: &Path) -> Result<BufReader<File>, KvFileError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| KvFileError::Read {
            path: path.to_path_buf(),
            source,
        })
}
