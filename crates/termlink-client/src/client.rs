use std::future::Future;

use reqwest::RequestBuilder;
use termlink_config::AuthScheme;
use termlink_config::repository::RepositoryConfig;
use termlink_core::{LanguageSet, QuerySegment, TermError, TermResult};
use tokio_util::sync::CancellationToken;

use crate::credentials::Credentials;
use crate::xml::{SegmentResponse, parse_languages};

/// Read-only HTTP access to the terminology repository
#[derive(Clone)]
pub struct TerminologyClient {
    client: reqwest::Client,
    languages_url: String,
    segments_url: String,
    credentials: Credentials,
    auth_scheme: AuthScheme,
    fuzzy: bool,
    cancel_token: CancellationToken,
}

impl TerminologyClient {
    pub fn new(
        config: &RepositoryConfig,
        credentials: Credentials,
        auth_scheme: AuthScheme,
    ) -> TermResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                TermError::ProviderMisconfigured(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            languages_url: config.languages_url(),
            segments_url: config.segments_url(),
            credentials,
            auth_scheme,
            fuzzy: config.fuzzy,
            cancel_token: CancellationToken::new(),
        })
    }

    /// Abort in-flight and future requests when `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    /// Every locale the repository reports; unparsable tags are dropped
    pub async fn fetch_languages(&self) -> TermResult<LanguageSet> {
        tracing::debug!(url = %self.languages_url, "fetching repository languages");
        let body = self.get_xml(self.client.get(&self.languages_url)).await?;
        parse_languages(&body)
    }

    /// Segments matching `query`, in the repository's order.
    ///
    /// The body is read in full here; segments are extracted as the caller
    /// iterates [`SegmentResponse::segments`].
    pub async fn fetch_translation(&self, query: &QuerySegment) -> TermResult<SegmentResponse> {
        let source_lang = query.source_locale.to_string();
        let target_lang = query.target_locale.to_string();
        let fuzzy = self.fuzzy.to_string();

        tracing::debug!(
            url = %self.segments_url,
            source_lang = %source_lang,
            target_lang = %target_lang,
            text_len = query.text.len(),
            "querying repository segments"
        );

        // form encoding turns spaces into '+'
        let request = self.client.get(&self.segments_url).query(&[
            ("source_lang", source_lang.as_str()),
            ("target_lang", target_lang.as_str()),
            ("q", query.text.as_str()),
            ("fuzzy", fuzzy.as_str()),
        ]);

        let body = self.get_xml(request).await?;
        Ok(SegmentResponse::new(body))
    }

    /// Same request as [`fetch_translation`](Self::fetch_translation); callers rank
    /// the result differently
    pub async fn fetch_suggestions(&self, query: &QuerySegment) -> TermResult<SegmentResponse> {
        self.fetch_translation(query).await
    }

    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth_scheme {
            AuthScheme::Basic => request.basic_auth(
                &self.credentials.username,
                Some(&self.credentials.secret),
            ),
        }
    }

    /// Send, check status, read the whole body
    async fn get_xml(&self, request: RequestBuilder) -> TermResult<String> {
        let request = self.authenticate(request);

        self.cancellable(async move {
            let response = request.send().await.map_err(unavailable)?;

            let status = response.status();
            if !status.is_success() {
                return Err(TermError::RepositoryUnavailable(format!(
                    "repository returned HTTP {status}"
                )));
            }

            response.text().await.map_err(unavailable)
        })
        .await
    }

    async fn cancellable<T>(&self, fut: impl Future<Output = TermResult<T>>) -> TermResult<T> {
        tokio::select! {
            biased;
            _ = self.cancel_token.cancelled() => {
                tracing::debug!("repository request cancelled");
                Err(TermError::Cancelled)
            }
            result = fut => result,
        }
    }
}

fn unavailable(e: reqwest::Error) -> TermError {
    if e.is_timeout() {
        TermError::RepositoryUnavailable(format!("request timed out: {e}"))
    } else {
        TermError::RepositoryUnavailable(e.to_string())
    }
}

impl std::fmt::Debug for TerminologyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminologyClient")
            .field("languages_url", &self.languages_url)
            .field("segments_url", &self.segments_url)
            .field("credentials", &self.credentials)
            .field("auth_scheme", &self.auth_scheme)
            .field("fuzzy", &self.fuzzy)
            .finish()
    }
}
