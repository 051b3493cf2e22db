use curate_domain::CandidateItem;

use crate::ranking::labels_match;

const BASE_WEIGHT: f32 = 0.6;
const CATEGORY_WEIGHT: f32 = 0.25;
const TAG_WEIGHT: f32 = 0.15;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelevanceScore {
	pub score: f32,
	pub category_matched: bool,
	/// Original tag spellings that matched a keyword, in item order.
	pub matched_tags: Vec<String>,
}

/// Query-match component of the final score.
///
/// Three sub-factors contribute when their inputs exist: the item's own relevance metric (always),
/// a category match (needs a category and keywords), and the share of matching tags (needs tags
/// and keywords). The sum is normalized by the weights of the active sub-factors only, so an
/// item is never penalized for lacking a category or tags.
pub fn relevance_score(candidate: &CandidateItem, keywords: &[String]) -> RelevanceScore {
	let mut contribution = candidate.metrics.relevance * BASE_WEIGHT;
	let mut active_weight = BASE_WEIGHT;
	let category = candidate.category.trim().to_lowercase();
	let mut category_matched = false;
	let mut matched_tags = Vec::new();
	let tags = candidate.tags.iter().filter(|tag| !tag.trim().is_empty()).collect::<Vec<_>>();

	if !category.is_empty() && !keywords.is_empty() {
		active_weight += CATEGORY_WEIGHT;
		category_matched = keywords.iter().any(|keyword| labels_match(&category, keyword));

		if category_matched {
			contribution += CATEGORY_WEIGHT;
		}
	}
	if !tags.is_empty() && !keywords.is_empty() {
		active_weight += TAG_WEIGHT;

		for tag in &tags {
			let normalized = tag.trim().to_lowercase();

			if keywords.iter().any(|keyword| labels_match(&normalized, keyword)) {
				matched_tags.push(tag.to_string());
			}
		}

		let ratio = matched_tags.len() as f32 / tags.len() as f32;

		contribution += ratio * TAG_WEIGHT;
	}

	let score = if active_weight > 0.0 {
		contribution / active_weight
	} else {
		candidate.metrics.relevance
	};

	RelevanceScore { score: score.clamp(0.0, 1.0), category_matched, matched_tags }
}

#[cfg(test)]
mod tests {
	use curate_domain::Metrics;

	use super::*;
	use crate::ranking::{
		extract_keywords,
		fixtures::{item, with_metrics},
	};

	const EPS: f32 = 1e-6;

	fn relevant(category: &str, tags: &[&str], relevance: f32) -> CandidateItem {
		with_metrics(item("x", category, tags), Metrics { relevance, ..Metrics::default() })
	}

	#[test]
	fn no_keywords_falls_back_to_metric() {
		let candidate = relevant("course", &["tutorial"], 0.42);
		let score = relevance_score(&candidate, &[]);

		assert!((score.score - 0.42).abs() < EPS);
		assert!(!score.category_matched);
		assert!(score.matched_tags.is_empty());
	}

	#[test]
	fn full_match_scores_all_factors() {
		let candidate = relevant("course", &["machine learning", "tutorial"], 1.0);
		let keywords = extract_keywords("machine learning tutorial course");
		let score = relevance_score(&candidate, &keywords);

		assert!((score.score - 1.0).abs() < EPS);
		assert!(score.category_matched);
		assert_eq!(score.matched_tags, vec!["machine learning", "tutorial"]);
	}

	#[test]
	fn partial_tag_match_is_proportional() {
		let candidate = relevant("recipe", &["tutorial", "cooking"], 0.5);
		let score = relevance_score(&candidate, &extract_keywords("tutorial"));
		let expected = (0.5 * 0.6 + 0.5 * 0.15) / (0.6 + 0.25 + 0.15);

		assert!((score.score - expected).abs() < EPS, "got {}", score.score);
		assert!(!score.category_matched);
	}

	#[test]
	fn missing_tags_do_not_dilute_score() {
		let candidate = relevant("course", &[], 0.8);
		let score = relevance_score(&candidate, &extract_keywords("course"));
		let expected = (0.8 * 0.6 + 0.25) / (0.6 + 0.25);

		assert!((score.score - expected).abs() < EPS, "got {}", score.score);
	}

	#[test]
	fn blank_tags_do_not_dilute_tag_ratio() {
		let keywords = extract_keywords("tutorial");
		let clean = relevance_score(&relevant("", &["tutorial"], 0.0), &keywords);
		let padded = relevance_score(&relevant("", &["tutorial", " ", ""], 0.0), &keywords);
		let blank_only = relevance_score(&relevant("course", &["  "], 0.8), &keywords);

		assert!((clean.score - padded.score).abs() < EPS, "{} vs {}", clean.score, padded.score);
		assert_eq!(padded.matched_tags, vec!["tutorial"]);
		assert!((blank_only.score - 0.8 * 0.6 / (0.6 + 0.25)).abs() < EPS);
	}
}
