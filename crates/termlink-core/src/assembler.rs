use std::sync::Arc;

use crate::error::TermResult;
use crate::ranking::sort_ranked;
use crate::scorer::{ConfidenceScorer, TieredScorer};
use crate::types::{CandidateSegment, ScoredResult, TranslationState};

/// Turns parsed repository segments into scored results
#[derive(Clone)]
pub struct ResultAssembler {
    scorer: Arc<dyn ConfidenceScorer>,
    provider_name: String,
}

impl ResultAssembler {
    pub fn new(provider_name: impl Into<String>) -> Self {
        Self::with_scorer(provider_name, Arc::new(TieredScorer))
    }

    pub fn with_scorer(
        provider_name: impl Into<String>,
        scorer: Arc<dyn ConfidenceScorer>,
    ) -> Self {
        Self {
            scorer,
            provider_name: provider_name.into(),
        }
    }

    /// Keep the best candidate seen so far, in response order.
    ///
    /// The first exact match is marked translated and ends the scan; nothing
    /// after it is pulled from `candidates`. A candidate that fails to load
    /// fails the lookup only if it is reached.
    pub fn best_match<I>(&self, original: &str, candidates: I) -> TermResult<ScoredResult>
    where
        I: IntoIterator<Item = TermResult<CandidateSegment>>,
    {
        let mut best = ScoredResult::no_match();

        for candidate in candidates {
            let candidate = candidate?;
            let confidence = self.scorer.score(original, &candidate.source);
            if confidence > best.confidence {
                best = ScoredResult::from_candidate(candidate, confidence, &self.provider_name);
            }

            if best.confidence.is_exact() {
                best.state = TranslationState::Translated;
                tracing::debug!("exact match found, skipping remaining segments");
                break;
            }
        }

        Ok(best)
    }

    /// Score the first `max_results` candidates, then order them by descending
    /// confidence. Candidates past the cap are never pulled.
    pub fn ranked<I>(
        &self,
        original: &str,
        candidates: I,
        max_results: usize,
    ) -> TermResult<Vec<ScoredResult>>
    where
        I: IntoIterator<Item = TermResult<CandidateSegment>>,
    {
        let mut results = candidates
            .into_iter()
            .take(max_results)
            .map(|candidate| {
                let candidate = candidate?;
                let confidence = self.scorer.score(original, &candidate.source);
                Ok(ScoredResult::from_candidate(
                    candidate,
                    confidence,
                    &self.provider_name,
                ))
            })
            .collect::<TermResult<Vec<ScoredResult>>>()?;

        sort_ranked(&mut results);
        Ok(results)
    }
}

impl std::fmt::Debug for ResultAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultAssembler")
            .field("provider_name", &self.provider_name)
            .finish()
    }
}
