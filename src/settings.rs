use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "PROBLEMSET";
const DEFAULT_OUTPUT_DIR: &str = "public/data";
const DEFAULT_TIMEOUT_SECS: i64 = 15;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Directory receiving `<source>_problems.json`.
    pub output_dir: PathBuf,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Settings {
    /// Defaults, then `problemset.toml` if present, then `PROBLEMSET_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_prefix(ENV_PREFIX)
    }

    fn load_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .add_source(File::with_name("problemset").required(false))
            .add_source(Environment::with_prefix(prefix).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_overrides() {
        let settings = Settings::load_with_prefix("PROBLEMSET_TEST_UNSET").unwrap();
        assert_eq!(settings.output_dir, PathBuf::from("public/data"));
        assert_eq!(settings.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn environment_overrides_defaults() {
        std::env::set_var("PROBLEMSET_TEST_ENV_TIMEOUT_SECS", "40");
        std::env::set_var("PROBLEMSET_TEST_ENV_OUTPUT_DIR", "/tmp/problems");
        let settings = Settings::load_with_prefix("PROBLEMSET_TEST_ENV").unwrap();
        assert_eq!(settings.timeout_secs, 40);
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/problems"));
    }
}
