//! Environment access helpers for settings loading and tests.

use std::str::FromStr;
use std::sync::{Mutex, OnceLock};

/// Process-wide lock serializing environment mutation in tests.
pub fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Read `name`, treating unset and whitespace-only values as absent.
pub fn env_nonempty(name: &str) -> Option<String> {
    crate::text::normalize_optional_nonempty(std::env::var(name).ok())
}

/// Read and parse `name`. Unset or unparsable values yield `None`.
pub fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    env_nonempty(name).and_then(|value| value.parse().ok())
}

#[allow(unused_unsafe)]
fn write_var(key: &str, value: Option<&str>) {
    // SAFETY: callers hold `env_lock` while tests run in parallel.
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

/// Applies a set of environment overrides and restores them on drop.
///
/// `None` removes the variable for the guard's lifetime.
pub struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(overrides: &[(&str, Option<&str>)]) -> Self {
        let mut saved = Vec::with_capacity(overrides.len());
        for (key, value) in overrides {
            saved.push((key.to_string(), std::env::var(key).ok()));
            write_var(key, *value);
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.saved.iter().rev() {
            write_var(key, previous.as_deref());
        }
    }
}
