use std::sync::Arc;

use async_trait::async_trait;
use termlink_client::{CredentialStore, TerminologyClient};
use termlink_config::Config;
use termlink_core::{
    LanguageSet, LocaleId, LocalePair, ResultAssembler, ScoredResult, TermError, TermResult,
};
use tokio_util::sync::CancellationToken;

use crate::TranslationProvider;
use crate::request::{SuggestionRequest, TranslationRequest};
use crate::resources::{LogoStyle, ProviderResources};
use crate::session::{ProjectInfo, SessionContext};

/// Provider backed by the HTTP terminology repository
#[derive(Debug, Clone)]
pub struct RepositoryProvider {
    client: TerminologyClient,
    languages: Arc<LanguageSet>,
    assembler: ResultAssembler,
    resources: ProviderResources,
}

impl RepositoryProvider {
    /// Resolve credentials and fetch the supported language set
    pub async fn connect(config: &Config, store: &dyn CredentialStore) -> TermResult<Self> {
        Self::connect_with(
            config,
            store,
            ProviderResources::default(),
            CancellationToken::new(),
        )
        .await
    }

    pub async fn connect_with(
        config: &Config,
        store: &dyn CredentialStore,
        resources: ProviderResources,
        cancel_token: CancellationToken,
    ) -> TermResult<Self> {
        let endpoint_key = &config.account.endpoint_key;
        let credentials = store.lookup(endpoint_key).ok_or_else(|| {
            TermError::ProviderMisconfigured(format!("no credentials stored for {endpoint_key}"))
        })?;

        let client =
            TerminologyClient::new(&config.repository, credentials, config.account.auth_scheme)?
                .with_cancellation(cancel_token);

        let languages = client.fetch_languages().await?;
        tracing::info!(
            languages = languages.len(),
            base_url = %config.repository.base_url,
            "connected to terminology repository"
        );

        Ok(Self::from_parts(client, languages, resources))
    }

    /// Build from an already fetched language set
    pub fn from_parts(
        client: TerminologyClient,
        languages: LanguageSet,
        resources: ProviderResources,
    ) -> Self {
        let assembler = ResultAssembler::new(resources.strings.display_name());
        Self {
            client,
            languages: Arc::new(languages),
            assembler,
            resources,
        }
    }

    pub fn languages(&self) -> &LanguageSet {
        &self.languages
    }

    pub fn resources(&self) -> &ProviderResources {
        &self.resources
    }
}

#[async_trait]
impl TranslationProvider for RepositoryProvider {
    fn initialize(
        &self,
        source: LocaleId,
        target: LocaleId,
        project: ProjectInfo,
    ) -> TermResult<SessionContext> {
        tracing::info!(
            source = %source,
            target = %target,
            project = %project.name,
            "initializing session"
        );

        Ok(SessionContext::new(LocalePair { source, target }, project))
    }

    fn get_targets(&self, source: &LocaleId) -> LanguageSet {
        if self.languages.contains(source) {
            (*self.languages).clone()
        } else {
            LanguageSet::new()
        }
    }

    fn is_supported(&self, source: &LocaleId, target: &LocaleId) -> bool {
        self.languages.contains(source) && self.languages.contains(target)
    }

    async fn translate(
        &self,
        session: &SessionContext,
        request: &TranslationRequest,
    ) -> TermResult<ScoredResult> {
        request.validate()?;

        let response = self
            .client
            .fetch_translation(&session.query(&request.source))
            .await?;
        let result = self
            .assembler
            .best_match(&request.source, response.segments()?)?
            .with_request_id(request.request_id);

        tracing::debug!(
            request_id = %request.request_id,
            source = %session.source(),
            target = %session.target(),
            project = %session.project().name,
            confidence = result.confidence.value(),
            state = result.state.as_str(),
            "translate finished"
        );
        Ok(result)
    }

    async fn suggest(
        &self,
        session: &SessionContext,
        request: &SuggestionRequest,
    ) -> TermResult<Vec<ScoredResult>> {
        request.validate()?;

        let response = self
            .client
            .fetch_suggestions(&session.query(&request.source))
            .await?;
        let results = self
            .assembler
            .ranked(&request.source, response.segments()?, request.max_results)?;

        tracing::debug!(
            request_id = %request.request_id,
            source = %session.source(),
            target = %session.target(),
            project = %session.project().name,
            results = results.len(),
            "suggest finished"
        );
        Ok(results)
    }

    fn get_logo(&self, style: LogoStyle) -> TermResult<&'static [u8]> {
        self.resources
            .images
            .logo(style)
            .ok_or_else(|| TermError::UnsupportedLogoStyle(style.to_string()))
    }

    fn display_name(&self) -> String {
        self.resources.strings.display_name()
    }

    fn description(&self) -> String {
        self.resources.strings.description()
    }
}
