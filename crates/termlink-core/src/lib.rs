pub mod assembler;
pub mod error;
pub mod ranking;
pub mod scorer;
pub mod types;

pub use assembler::ResultAssembler;
pub use error::{TermError, TermResult};
pub use ranking::SuggestionRank;
pub use scorer::{Confidence, ConfidenceScorer, TieredScorer};
pub use types::{
    CandidateSegment, LanguageSet, LocaleId, LocalePair, MatchKind, QuerySegment, ScoredResult,
    SegmentMetadata, TranslationState,
};
