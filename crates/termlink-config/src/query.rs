use serde::{Deserialize, Serialize};

use crate::env_parsed;

fn default_max_suggestions() -> usize {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Cap used when the host does not pass its own
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl QueryConfig {
    pub fn new() -> Self {
        Self {
            max_suggestions: env_parsed("TERMLINK_MAX_SUGGESTIONS")
                .unwrap_or_else(default_max_suggestions),
        }
    }
}
