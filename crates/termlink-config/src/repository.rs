use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_parsed;

fn default_base_url() -> String {
    "https://www.tausdata.org".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_fuzzy() -> bool {
    false
}

/// Where the terminology repository lives and how requests are bounded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound for a whole request, connect through body. Zero means the default.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Sent as the `fuzzy` query parameter
    #[serde(default = "default_fuzzy")]
    pub fuzzy: bool,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            fuzzy: default_fuzzy(),
        }
    }
}

impl RepositoryConfig {
    pub fn new() -> Self {
        let base_url = env::var("TERMLINK_BASE_URL").unwrap_or_else(|_| default_base_url());
        let timeout_seconds =
            env_parsed("TERMLINK_TIMEOUT_SECONDS").unwrap_or_else(default_timeout_seconds);
        let fuzzy = env_parsed("TERMLINK_FUZZY").unwrap_or_else(default_fuzzy);

        Self {
            base_url,
            timeout_seconds,
            fuzzy,
        }
    }

    pub fn languages_url(&self) -> String {
        format!("{}/api/lang.xml", self.base_url.trim_end_matches('/'))
    }

    pub fn segments_url(&self) -> String {
        format!("{}/api/segment.xml", self.base_url.trim_end_matches('/'))
    }

    pub fn timeout(&self) -> Duration {
        match self.timeout_seconds {
            0 => Duration::from_secs(default_timeout_seconds()),
            secs => Duration::from_secs(secs),
        }
    }
}
