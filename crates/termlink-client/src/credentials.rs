use std::collections::HashMap;
use std::env;

/// Username and secret for one repository endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"***")
            .finish()
    }
}

/// Platform secret store boundary
pub trait CredentialStore: Send + Sync {
    /// `None` when no entry exists for `endpoint_key`
    fn lookup(&self, endpoint_key: &str) -> Option<Credentials>;
}

/// Reads a single credential pair from the process environment.
/// Serves every endpoint key.
#[derive(Debug, Clone)]
pub struct EnvCredentialStore {
    username_var: String,
    secret_var: String,
}

impl EnvCredentialStore {
    pub fn new() -> Self {
        Self::with_vars("TERMLINK_USERNAME", "TERMLINK_SECRET")
    }

    pub fn with_vars(username_var: impl Into<String>, secret_var: impl Into<String>) -> Self {
        Self {
            username_var: username_var.into(),
            secret_var: secret_var.into(),
        }
    }
}

impl Default for EnvCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for EnvCredentialStore {
    fn lookup(&self, endpoint_key: &str) -> Option<Credentials> {
        let read = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());

        let username = read(&self.username_var)?;
        let secret = read(&self.secret_var)?;
        tracing::debug!(endpoint_key, "credentials loaded from environment");

        Some(Credentials { username, secret })
    }
}

/// In-memory store keyed by endpoint
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialStore {
    entries: HashMap<String, Credentials>,
}

impl StaticCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, endpoint_key: impl Into<String>, credentials: Credentials) -> Self {
        self.entries.insert(endpoint_key.into(), credentials);
        self
    }
}

impl CredentialStore for StaticCredentialStore {
    fn lookup(&self, endpoint_key: &str) -> Option<Credentials> {
        self.entries.get(endpoint_key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_masks_secret() {
        let creds = Credentials::new("alice", "hunter2");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("alice"));
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_static_store_lookup() {
        let store = StaticCredentialStore::new()
            .with_entry("https://terms.example.org", Credentials::new("alice", "pw"));
        assert_eq!(
            store.lookup("https://terms.example.org"),
            Some(Credentials::new("alice", "pw"))
        );
        assert_eq!(store.lookup("https://other.example.org"), None);
    }

    #[test]
    fn test_env_store_reads_vars() {
        unsafe {
            std::env::set_var("TERMLINK_TEST_ENV_USER", "bob");
            std::env::set_var("TERMLINK_TEST_ENV_SECRET", "s3cret");
        }
        let store =
            EnvCredentialStore::with_vars("TERMLINK_TEST_ENV_USER", "TERMLINK_TEST_ENV_SECRET");
        assert_eq!(store.lookup("any"), Some(Credentials::new("bob", "s3cret")));
    }

    #[test]
    fn test_env_store_missing_or_blank() {
        unsafe {
            std::env::set_var("TERMLINK_TEST_BLANK_USER", "carol");
            std::env::set_var("TERMLINK_TEST_BLANK_SECRET", "   ");
            std::env::remove_var("TERMLINK_TEST_UNSET_SECRET");
        }
        let blank =
            EnvCredentialStore::with_vars("TERMLINK_TEST_BLANK_USER", "TERMLINK_TEST_BLANK_SECRET");
        assert_eq!(blank.lookup("any"), None);

        let unset =
            EnvCredentialStore::with_vars("TERMLINK_TEST_BLANK_USER", "TERMLINK_TEST_UNSET_SECRET");
        assert_eq!(unset.lookup("any"), None);
    }
}
