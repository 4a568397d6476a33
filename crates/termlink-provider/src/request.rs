use termlink_core::{TermError, TermResult};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub request_id: Uuid,
    pub source: String,
}

impl TranslationRequest {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            source: source.into(),
        }
    }

    pub(crate) fn validate(&self) -> TermResult<()> {
        validate_source(&self.source)
    }
}

#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    pub request_id: Uuid,
    pub source: String,
    pub max_results: usize,
}

impl SuggestionRequest {
    pub fn new(source: impl Into<String>, max_results: usize) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            source: source.into(),
            max_results,
        }
    }

    pub(crate) fn validate(&self) -> TermResult<()> {
        validate_source(&self.source)?;
        if self.max_results == 0 {
            return Err(TermError::InvalidArgument(
                "max_results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn validate_source(source: &str) -> TermResult<()> {
    if source.trim().is_empty() {
        return Err(TermError::InvalidArgument(
            "source text is empty".to_string(),
        ));
    }
    Ok(())
}
