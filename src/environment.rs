//! Read-only access to environment variables.

use std::env;

/// Key to string lookup over an environment
pub(crate) trait Lookup {
    /// Returns None if the variable is not set
    fn get(&self, key: &str) -> Option<String>;
}

/// The live process environment, read at lookup time
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ProcessEnv;

impl Lookup for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values are passed through lossily rather than rejected
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
impl Lookup for std::collections::HashMap<&str, &str> {
    fn get(&self, key: &str) -> Option<String> {
        std::collections::HashMap::get(self, key).map(|value| value.to_string())
    }
}
