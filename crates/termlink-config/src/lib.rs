use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use termlink_core::{TermError, TermResult};

use self::account::AccountConfig;
use self::query::QueryConfig;
use self::repository::RepositoryConfig;

pub mod account;
pub mod query;
pub mod repository;

pub use account::AuthScheme;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub repository: RepositoryConfig,
    pub account: AccountConfig,
    pub query: QueryConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            repository: RepositoryConfig::new(),
            account: AccountConfig::new(),
            query: QueryConfig::new(),
        }
    }

    /// Load a JSON config file; missing sections fall back to defaults
    pub fn from_json_file(path: &Path) -> TermResult<Self> {
        let file = File::open(path).map_err(|e| {
            TermError::ProviderMisconfigured(format!("cannot open {}: {e}", path.display()))
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            TermError::ProviderMisconfigured(format!("invalid config {}: {e}", path.display()))
        })
    }
}

/// Read an environment variable and parse it, ignoring unset or unparsable values
pub(crate) fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_json_file_partial_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"repository":{{"base_url":"https://terms.example.org","timeout_seconds":5}}}}"#
        )
        .unwrap();

        let config = Config::from_json_file(file.path()).unwrap();
        assert_eq!(config.repository.base_url, "https://terms.example.org");
        assert_eq!(config.repository.timeout_seconds, 5);
        assert!(!config.repository.fuzzy);
        assert_eq!(config.query.max_suggestions, 10);
        assert_eq!(config.account.auth_scheme, AuthScheme::Basic);
    }

    #[test]
    fn test_json_file_missing() {
        let result = Config::from_json_file(Path::new("/nonexistent/termlink.json"));
        assert!(matches!(result, Err(TermError::ProviderMisconfigured(_))));
    }

    #[test]
    fn test_json_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let result = Config::from_json_file(file.path());
        assert!(matches!(result, Err(TermError::ProviderMisconfigured(_))));
    }
}
