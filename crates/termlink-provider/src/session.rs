use serde::Serialize;
use termlink_core::{LocaleId, LocalePair, QuerySegment};

/// Host project a session was opened for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
}

/// Immutable per-session state handed to every lookup
#[derive(Debug, Clone)]
pub struct SessionContext {
    pair: LocalePair,
    project: ProjectInfo,
}

impl SessionContext {
    pub(crate) fn new(pair: LocalePair, project: ProjectInfo) -> Self {
        Self { pair, project }
    }

    pub fn project(&self) -> &ProjectInfo {
        &self.project
    }

    pub fn query(&self, text: &str) -> QuerySegment {
        QuerySegment::new(&self.pair, text)
    }

    pub fn source(&self) -> &LocaleId {
        &self.pair.source
    }

    pub fn target(&self) -> &LocaleId {
        &self.pair.target
    }
}
