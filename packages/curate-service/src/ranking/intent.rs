use curate_domain::CandidateItem;

/// Either string contains the other. Tolerates plural and compound mismatches such as
/// "tutorial" vs. "tutorials" or "machine" vs. "machine learning".
pub fn labels_match(label: &str, keyword: &str) -> bool {
	if label.is_empty() || keyword.is_empty() {
		return false;
	}

	label.contains(keyword) || keyword.contains(label)
}

pub fn matches_intent(candidate: &CandidateItem, keywords: &[String]) -> bool {
	if keywords.is_empty() {
		return true;
	}

	let labels = candidate.labels();

	labels.iter().any(|label| keywords.iter().any(|keyword| labels_match(label, keyword)))
}

/// Admits candidates whose category or tags relate to any keyword. An empty keyword list admits
/// everything so that a query made only of short words still returns results.
pub fn filter_by_intent<'a>(
	candidates: &'a [CandidateItem],
	keywords: &[String],
) -> Vec<&'a CandidateItem> {
	candidates.iter().filter(|candidate| matches_intent(candidate, keywords)).collect()
}
