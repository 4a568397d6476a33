use std::cmp::Ordering;

use crate::types::ScoredResult;

/// Sort key for suggestion lists.
///
/// Present results order by descending confidence. An absent slot sorts
/// after every present one, and two absent slots are equal.
#[derive(Debug, Clone, Copy)]
pub enum SuggestionRank<'a> {
    Present(&'a ScoredResult),
    Absent,
}

impl<'a> From<Option<&'a ScoredResult>> for SuggestionRank<'a> {
    fn from(value: Option<&'a ScoredResult>) -> Self {
        match value {
            Some(result) => SuggestionRank::Present(result),
            None => SuggestionRank::Absent,
        }
    }
}

impl<'a> From<&'a ScoredResult> for SuggestionRank<'a> {
    fn from(value: &'a ScoredResult) -> Self {
        SuggestionRank::Present(value)
    }
}

impl Ord for SuggestionRank<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SuggestionRank::Absent, SuggestionRank::Absent) => Ordering::Equal,
            (SuggestionRank::Absent, SuggestionRank::Present(_)) => Ordering::Greater,
            (SuggestionRank::Present(_), SuggestionRank::Absent) => Ordering::Less,
            (SuggestionRank::Present(a), SuggestionRank::Present(b)) => {
                b.confidence.cmp(&a.confidence)
            }
        }
    }
}

impl PartialOrd for SuggestionRank<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SuggestionRank<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SuggestionRank<'_> {}

pub fn sort_ranked(results: &mut [ScoredResult]) {
    results.sort_by(|a, b| SuggestionRank::from(a).cmp(&SuggestionRank::from(b)));
}

/// Same ordering for lists that may hold unfilled slots
pub fn sort_ranked_slots(slots: &mut [Option<ScoredResult>]) {
    slots.sort_by(|a, b| SuggestionRank::from(a.as_ref()).cmp(&SuggestionRank::from(b.as_ref())));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::Confidence;
    use crate::types::CandidateSegment;

    fn result(source: &str, confidence: Confidence) -> ScoredResult {
        let candidate = CandidateSegment {
            source: source.to_string(),
            target: format!("{source}-t"),
            ..Default::default()
        };
        ScoredResult::from_candidate(candidate, confidence, "test")
    }

    #[test]
    fn test_absent_orders_after_present() {
        let r = result("a", Confidence::NONE);
        assert_eq!(
            SuggestionRank::Present(&r).cmp(&SuggestionRank::Absent),
            Ordering::Less
        );
        assert_eq!(
            SuggestionRank::Absent.cmp(&SuggestionRank::Present(&r)),
            Ordering::Greater
        );
        assert_eq!(SuggestionRank::Absent, SuggestionRank::Absent);
    }

    #[test]
    fn test_higher_confidence_first() {
        let high = result("a", Confidence::EXACT);
        let low = result("b", Confidence::DEFAULT);
        assert_eq!(
            SuggestionRank::from(&high).cmp(&SuggestionRank::from(&low)),
            Ordering::Less
        );
        assert_eq!(
            SuggestionRank::from(&low).cmp(&SuggestionRank::from(&low)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_sort_ranked_descending() {
        let mut results = vec![
            result("a", Confidence::DEFAULT),
            result("b", Confidence::EXACT),
            result("c", Confidence::CASE_INSENSITIVE),
        ];
        sort_ranked(&mut results);
        let order: Vec<u8> = results.iter().map(|r| r.confidence.value()).collect();
        assert_eq!(order, vec![100, 95, 50]);
    }

    #[test]
    fn test_sort_slots_pushes_absent_last() {
        let mut slots = vec![
            None,
            Some(result("a", Confidence::DEFAULT)),
            None,
            Some(result("b", Confidence::EXACT)),
        ];
        sort_ranked_slots(&mut slots);
        assert_eq!(slots[0].as_ref().unwrap().source, "b");
        assert_eq!(slots[1].as_ref().unwrap().source, "a");
        assert!(slots[2].is_none());
        assert!(slots[3].is_none());
    }
}
