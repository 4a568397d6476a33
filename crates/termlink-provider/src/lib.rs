mod repository;
pub mod request;
pub mod resources;
pub mod session;

pub use repository::RepositoryProvider;
pub use request::{SuggestionRequest, TranslationRequest};
pub use resources::{
    EmbeddedResources, ImageResources, LogoStyle, ProviderResources, StringResources,
};
pub use session::{ProjectInfo, SessionContext};

use async_trait::async_trait;
use termlink_core::{LanguageSet, LocaleId, ScoredResult, TermResult};

/// Lifecycle calls a translation host makes against a provider
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Bind a locale pair and project to a new session
    fn initialize(
        &self,
        source: LocaleId,
        target: LocaleId,
        project: ProjectInfo,
    ) -> TermResult<SessionContext>;

    /// All supported locales if `source` is one of them, otherwise empty
    fn get_targets(&self, source: &LocaleId) -> LanguageSet;

    fn is_supported(&self, source: &LocaleId, target: &LocaleId) -> bool;

    /// Best single match, or the no-match result
    async fn translate(
        &self,
        session: &SessionContext,
        request: &TranslationRequest,
    ) -> TermResult<ScoredResult>;

    /// Up to `request.max_results` candidates, highest confidence first
    async fn suggest(
        &self,
        session: &SessionContext,
        request: &SuggestionRequest,
    ) -> TermResult<Vec<ScoredResult>>;

    fn get_logo(&self, style: LogoStyle) -> TermResult<&'static [u8]>;

    fn display_name(&self) -> String;

    fn description(&self) -> String;
}
