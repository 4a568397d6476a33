use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use termlink_core::{SegmentMetadata, TermError};

static TRANSLATE_LOGO: &[u8] = include_bytes!("../assets/translate-logo.png");
static SUGGEST_LOGO: &[u8] = include_bytes!("../assets/suggest-logo.png");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogoStyle {
    TranslateStandard,
    SuggestStandard,
}

impl FromStr for LogoStyle {
    type Err = TermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "translatestandard" | "translate" => Ok(LogoStyle::TranslateStandard),
            "suggeststandard" | "suggest" => Ok(LogoStyle::SuggestStandard),
            _ => Err(TermError::UnsupportedLogoStyle(s.to_string())),
        }
    }
}

impl fmt::Display for LogoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoStyle::TranslateStandard => write!(f, "translate-standard"),
            LogoStyle::SuggestStandard => write!(f, "suggest-standard"),
        }
    }
}

/// Localized strings shown by the host
pub trait StringResources: Send + Sync {
    fn display_name(&self) -> String;

    fn description(&self) -> String;

    /// Label for a metadata field key such as `content_type`
    fn metadata_label(&self, field: &str) -> String;

    /// One-line explanation of a metadata field
    fn metadata_description(&self, field: &str) -> String;
}

/// Provider images
pub trait ImageResources: Send + Sync {
    fn logo(&self, style: LogoStyle) -> Option<&'static [u8]>;
}

/// English strings and the bundled PNG logos
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

impl StringResources for EmbeddedResources {
    fn display_name(&self) -> String {
        "TAUS Data".to_string()
    }

    fn description(&self) -> String {
        "Exact and near-exact term matches from the TAUS Data repository".to_string()
    }

    fn metadata_label(&self, field: &str) -> String {
        match field {
            "product" => "Product",
            "provider" => "Provider",
            "content_type" => "Content Type",
            "industry" => "Industry",
            "owner" => "Owner",
            other => other,
        }
        .to_string()
    }

    fn metadata_description(&self, field: &str) -> String {
        match field {
            "product" => "Product the segment was translated for",
            "provider" => "Organisation that contributed the segment",
            "content_type" => "Kind of content the segment comes from",
            "industry" => "Industry domain of the segment",
            "owner" => "Owner of the segment",
            _ => "",
        }
        .to_string()
    }
}

impl ImageResources for EmbeddedResources {
    fn logo(&self, style: LogoStyle) -> Option<&'static [u8]> {
        match style {
            LogoStyle::TranslateStandard => Some(TRANSLATE_LOGO),
            LogoStyle::SuggestStandard => Some(SUGGEST_LOGO),
        }
    }
}

/// Collaborators injected into a provider
#[derive(Clone)]
pub struct ProviderResources {
    pub strings: Arc<dyn StringResources>,
    pub images: Arc<dyn ImageResources>,
}

impl ProviderResources {
    pub fn new(strings: Arc<dyn StringResources>, images: Arc<dyn ImageResources>) -> Self {
        Self { strings, images }
    }

    /// Present metadata fields paired with their display labels
    pub fn labelled_metadata(&self, metadata: &SegmentMetadata) -> Vec<(String, String)> {
        metadata
            .fields()
            .into_iter()
            .map(|(key, value)| (self.strings.metadata_label(key), value.to_string()))
            .collect()
    }

    /// Label and description of every metadata field, present or not
    pub fn metadata_columns(&self) -> Vec<(String, String)> {
        SegmentMetadata::FIELD_NAMES
            .into_iter()
            .map(|key| {
                (
                    self.strings.metadata_label(key),
                    self.strings.metadata_description(key),
                )
            })
            .collect()
    }
}

impl Default for ProviderResources {
    fn default() -> Self {
        Self::new(Arc::new(EmbeddedResources), Arc::new(EmbeddedResources))
    }
}

impl fmt::Debug for ProviderResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderResources")
            .field("display_name", &self.strings.display_name())
            .finish()
    }
}
