use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use icu_locale::Locale;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{TermError, TermResult};
use crate::scorer::Confidence;

/// BCP 47 locale tag as understood by the repository ("en-US", "de", "zh-Hans")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleId(Locale);

impl LocaleId {
    pub fn parse(tag: &str) -> TermResult<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(TermError::InvalidArgument("locale tag is empty".to_string()));
        }

        let locale: Locale = tag
            .parse()
            .map_err(|e| TermError::InvalidArgument(format!("invalid locale tag {tag:?}: {e:?}")))?;

        Ok(Self(locale))
    }

    pub fn locale(&self) -> &Locale {
        &self.0
    }
}

impl FromStr for LocaleId {
    type Err = TermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Locales the repository accepts, fetched once per session
pub type LanguageSet = HashSet<LocaleId>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalePair {
    pub source: LocaleId,
    pub target: LocaleId,
}

/// Input to a single lookup
#[derive(Debug, Clone)]
pub struct QuerySegment {
    pub source_locale: LocaleId,
    pub target_locale: LocaleId,
    pub text: String,
}

impl QuerySegment {
    pub fn new(pair: &LocalePair, text: impl Into<String>) -> Self {
        Self {
            source_locale: pair.source.clone(),
            target_locale: pair.target.clone(),
            text: text.into(),
        }
    }
}

/// Optional descriptive fields attached to a repository segment.
/// Each one is independently absent when the repository omits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SegmentMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}

impl SegmentMetadata {
    /// Present fields as (field key, value) in a fixed order
    /// Field keys in display order
    pub const FIELD_NAMES: [&'static str; 5] =
        ["product", "provider", "content_type", "industry", "owner"];

    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let values = [
            &self.product,
            &self.provider,
            &self.content_type,
            &self.industry,
            &self.owner,
        ];
        Self::FIELD_NAMES
            .into_iter()
            .zip(values)
            .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

/// One source/target pair parsed from a repository response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSegment {
    pub source: String,
    pub target: String,
    pub metadata: SegmentMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranslationState {
    Translated,
    NeedsReview,
    NoMatch,
}

impl TranslationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationState::Translated => "translated",
            TranslationState::NeedsReview => "needs-review",
            TranslationState::NoMatch => "no-match",
        }
    }
}

/// The repository is a word/phrase lookup, so every hit is reported as a memory match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
    #[default]
    TranslationMemory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
    pub source: String,
    pub target: String,
    pub confidence: Confidence,
    pub state: TranslationState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_state: Option<String>,
    pub match_kind: MatchKind,
    pub provider_name: String,
    pub metadata: SegmentMetadata,
}

impl ScoredResult {
    /// Result reported when the repository returned nothing usable
    pub fn no_match() -> Self {
        Self {
            request_id: None,
            source: String::new(),
            target: String::new(),
            confidence: Confidence::NONE,
            state: TranslationState::NoMatch,
            sub_state: Some("no match found".to_string()),
            match_kind: MatchKind::TranslationMemory,
            provider_name: String::new(),
            metadata: SegmentMetadata::default(),
        }
    }

    pub fn from_candidate(
        candidate: CandidateSegment,
        confidence: Confidence,
        provider_name: &str,
    ) -> Self {
        Self {
            request_id: None,
            source: candidate.source,
            target: candidate.target,
            confidence,
            state: TranslationState::NeedsReview,
            sub_state: None,
            match_kind: MatchKind::TranslationMemory,
            provider_name: provider_name.to_string(),
            metadata: candidate.metadata,
        }
    }

    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = Some(request_id);
        self
    }
}
