use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use curate_domain::{CandidateItem, Constraints, Profile};

use crate::ranking::{
	PersonalizationScore, RelevanceScore, build_explanations, extract_keywords, filter_by_intent,
	personalization_score, relevance_score,
};

pub const RELEVANCE_WEIGHT: f32 = 0.7;
pub const PERSONALIZATION_WEIGHT: f32 = 0.3;

/// Component values behind a final score, kept next to the explanations derived from them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
	pub relevance: f32,
	pub personalization: f32,
	pub constraint_adjustment: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
	#[serde(flatten)]
	pub item: CandidateItem,
	pub final_score: f32,
	pub profile: Profile,
	pub explanations: Vec<String>,
	pub breakdown: ScoreBreakdown,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RankOutcome {
	pub keywords: Vec<String>,
	/// Candidates admitted by the intent filter, before truncation.
	pub matched_count: usize,
	pub results: Vec<RankedResult>,
}

struct Scored<'a> {
	candidate: &'a CandidateItem,
	final_score: f32,
	relevance: RelevanceScore,
	personalization: PersonalizationScore,
}

/// Filters, scores, sorts, truncates to `limit`, then explains.
///
/// Sorting is stable, so equal final scores keep candidate order. Explanations reuse the scores
/// computed for sorting.
pub fn rank(
	candidates: &[CandidateItem],
	query: &str,
	profile: Profile,
	constraints: &Constraints,
	limit: usize,
) -> RankOutcome {
	let keywords = extract_keywords(query);
	let admitted = filter_by_intent(candidates, &keywords);
	let matched_count = admitted.len();
	let mut scored = admitted
		.into_iter()
		.map(|candidate| {
			let relevance = relevance_score(candidate, &keywords);
			let personalization = personalization_score(candidate, profile, constraints);
			let final_score = (RELEVANCE_WEIGHT * relevance.score
				+ PERSONALIZATION_WEIGHT * personalization.score)
				.clamp(0.0, 1.0);

			Scored { candidate, final_score, relevance, personalization }
		})
		.collect::<Vec<_>>();

	scored.sort_by(|a, b| cmp_f32_desc(a.final_score, b.final_score));
	scored.truncate(limit);

	let results = scored
		.into_iter()
		.map(|scored| RankedResult {
			item: scored.candidate.clone(),
			final_score: scored.final_score,
			profile,
			explanations: build_explanations(
				scored.candidate,
				profile,
				constraints,
				&scored.relevance,
			),
			breakdown: ScoreBreakdown {
				relevance: scored.relevance.score,
				personalization: scored.personalization.score,
				constraint_adjustment: scored.personalization.adjustment,
			},
		})
		.collect();

	RankOutcome { keywords, matched_count, results }
}

fn cmp_f32_desc(a: f32, b: f32) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}
