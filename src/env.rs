use std::collections::{BTreeMap, HashMap};

/// Destination for pairs read from a `.env` file.
///
/// The reader itself never touches the process environment; it hands every
/// pair to a sink. [`ProcessEnv`] is the default. The map impls let tests (and
/// callers who only want the values) collect into memory instead.
///
/// Returning `Err(reason)` skips the pair and records an
/// [`EnvRejected`](crate::IssueKind::EnvRejected) issue.
pub trait EnvSink {
    fn set(&mut self, key: &str, value: &str) -> Result<(), String>;
}

/// Sets variables in the current process environment.
///
/// The environment is process-global and unsynchronized. Do not read files
/// into it while other threads read or write environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSink for ProcessEnv {
    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        if key.is_empty() {
            return Err("key is empty".into());
        }
        if key.contains('=') {
            return Err("key contains '='".into());
        }
        if key.contains('\0') {
            return Err("key contains a NUL byte".into());
        }
        if value.contains('\0') {
            return Err("value contains a NUL byte".into());
        }
        // SAFETY: the caller is responsible for not racing other environment
        // access, as documented on `ProcessEnv`.
        unsafe { std::env::set_var(key, value) };
        Ok(())
    }
}

impl EnvSink for HashMap<String, String> {
    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl EnvSink for BTreeMap<String, String> {
    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
