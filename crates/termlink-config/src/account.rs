use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use termlink_core::{TermError, TermResult};

fn default_endpoint_key() -> String {
    "https://www.tausdata.org".to_string()
}

/// How credentials are attached to outgoing requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthScheme {
    #[default]
    Basic,
}

impl FromStr for AuthScheme {
    type Err = TermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(AuthScheme::Basic),
            other => Err(TermError::ProviderMisconfigured(format!(
                "unsupported auth scheme: {other}"
            ))),
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthScheme::Basic => write!(f, "Basic"),
        }
    }
}

/// Which credential-store entry to use and how to present it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Lookup key handed to the credential store
    #[serde(default = "default_endpoint_key")]
    pub endpoint_key: String,
    #[serde(default)]
    pub auth_scheme: AuthScheme,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            endpoint_key: default_endpoint_key(),
            auth_scheme: AuthScheme::default(),
        }
    }
}

impl AccountConfig {
    pub fn new() -> Self {
        let endpoint_key =
            env::var("TERMLINK_ENDPOINT_KEY").unwrap_or_else(|_| default_endpoint_key());
        let auth_scheme = env::var("TERMLINK_AUTH_SCHEME")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            endpoint_key,
            auth_scheme,
        }
    }

    /// Read an account descriptor file
    pub fn from_descriptor(path: &Path) -> TermResult<Self> {
        let xml = std::fs::read_to_string(path).map_err(|e| {
            TermError::ProviderMisconfigured(format!(
                "cannot read account descriptor {}: {e}",
                path.display()
            ))
        })?;
        Self::from_descriptor_str(&xml)
    }

    /// Parse `<Account><User Url="..." Type="Basic"/></Account>`
    pub fn from_descriptor_str(xml: &str) -> TermResult<Self> {
        let doc = roxmltree::Document::parse(xml).map_err(|e| {
            TermError::ProviderMisconfigured(format!("invalid account descriptor: {e}"))
        })?;

        let root = doc.root_element();
        if !root.has_tag_name("Account") {
            return Err(TermError::ProviderMisconfigured(format!(
                "account descriptor root is <{}>, expected <Account>",
                root.tag_name().name()
            )));
        }

        let user = root
            .children()
            .find(|n| n.has_tag_name("User"))
            .ok_or_else(|| {
                TermError::ProviderMisconfigured("account descriptor has no <User>".to_string())
            })?;

        let attribute = |name: &str| {
            user.attribute(name)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    TermError::ProviderMisconfigured(format!(
                        "<User> is missing the {name} attribute"
                    ))
                })
        };

        Ok(Self {
            endpoint_key: attribute("Url")?.to_string(),
            auth_scheme: attribute("Type")?.parse()?,
        })
    }
}
