use curate_domain::{CandidateItem, Constraints, Metric, Profile, SkillLevel};

use crate::ranking::RelevanceScore;

const SIGNAL_THRESHOLD: f32 = 0.6;
const INTERMEDIATE_DEPTH_THRESHOLD: f32 = 0.4;
const GENERIC_RELEVANCE_THRESHOLD: f32 = 0.5;
const PREFERENCE_WEIGHT_THRESHOLD: f32 = 0.2;
const RECENCY_WEIGHT_THRESHOLD: f32 = 0.15;
const MAX_LISTED_TAGS: usize = 3;
const MAX_PREFERENCE_METRICS: usize = 2;

/// Metrics eligible for the profile preference line, in tie-break order.
const PREFERENCE_METRICS: [Metric; 6] = [
	Metric::Simplicity,
	Metric::Price,
	Metric::Reviews,
	Metric::Citations,
	Metric::Depth,
	Metric::Recency,
];

/// Justification lines for one ranked item, built from the scores the ranking actually used.
///
/// Only signals that clear their threshold are mentioned, and unmet constraints are never
/// stated. The result always holds at least one line.
pub fn build_explanations(
	candidate: &CandidateItem,
	profile: Profile,
	constraints: &Constraints,
	relevance: &RelevanceScore,
) -> Vec<String> {
	let mut lines = Vec::new();

	if relevance.category_matched {
		lines.push(format!(
			"Matches the \"{}\" category you searched for.",
			candidate.category.trim()
		));
	}
	if let Some(line) = tag_line(&relevance.matched_tags) {
		lines.push(line);
	}
	if relevance.score >= SIGNAL_THRESHOLD {
		lines.push(format!("Highly relevant to your query (relevance {:.2}).", relevance.score));
	}

	lines.extend(constraint_lines(candidate, constraints));

	if let Some(line) = preference_line(candidate, profile) {
		lines.push(line);
	}

	if lines.is_empty() {
		let generic = if relevance.score >= GENERIC_RELEVANCE_THRESHOLD {
			"Good overall match for your search."
		} else {
			"Related to your search."
		};

		lines.push(generic.to_string());
	}

	lines
}

fn tag_line(matched_tags: &[String]) -> Option<String> {
	if matched_tags.is_empty() {
		return None;
	}

	let listed =
		matched_tags.iter().take(MAX_LISTED_TAGS).map(String::as_str).collect::<Vec<_>>();
	let ending = if matched_tags.len() > MAX_LISTED_TAGS { "..." } else { "." };

	Some(format!("Tagged with {}{ending}", listed.join(", ")))
}

fn constraint_lines(candidate: &CandidateItem, constraints: &Constraints) -> Vec<String> {
	let metrics = &candidate.metrics;
	let mut lines = Vec::new();

	if let Some(ceiling) = constraints.reading_time_ceiling()
		&& candidate.reading_time <= ceiling
	{
		lines.push(format!(
			"Fits your {ceiling}-minute reading window ({} min).",
			candidate.reading_time
		));
	}
	// Price is a 0-1 desirability score. The budget amount is never quoted.
	if constraints.budget_active() && metrics.price >= SIGNAL_THRESHOLD {
		lines.push("Good value for your budget.".to_string());
	}

	let skill_line = match constraints.skill_level {
		Some(SkillLevel::Beginner) if metrics.simplicity >= SIGNAL_THRESHOLD =>
			Some("Approachable for beginners."),
		Some(SkillLevel::Intermediate) if metrics.depth >= INTERMEDIATE_DEPTH_THRESHOLD =>
			Some("Right level of depth for an intermediate reader."),
		Some(SkillLevel::Advanced) if metrics.depth >= SIGNAL_THRESHOLD =>
			Some("Detailed enough for an advanced reader."),
		_ => None,
	};

	if let Some(line) = skill_line {
		lines.push(line.to_string());
	}

	lines
}

fn preference_line(candidate: &CandidateItem, profile: Profile) -> Option<String> {
	let weights = profile.weights();
	let mut contributing = Vec::new();

	for metric in PREFERENCE_METRICS {
		let weight = weights.weight(metric);
		let threshold = if metric == Metric::Recency {
			RECENCY_WEIGHT_THRESHOLD
		} else {
			PREFERENCE_WEIGHT_THRESHOLD
		};
		let Some(value) = metric.value(&candidate.metrics) else { continue };

		if weight >= threshold && value >= SIGNAL_THRESHOLD {
			contributing.push((metric, value * weight));
		}
	}

	if contributing.is_empty() {
		return None;
	}

	// Stable: equal contributions keep the listed metric order.
	contributing.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

	let phrases = contributing
		.iter()
		.take(MAX_PREFERENCE_METRICS)
		.map(|(metric, _)| preference_phrase(*metric))
		.collect::<Vec<_>>();

	Some(format!("Suits the {profile} profile: {}.", phrases.join(" and ")))
}

fn preference_phrase(metric: Metric) -> &'static str {
	match metric {
		Metric::Simplicity => "easy to follow",
		Metric::Price => "good value",
		Metric::Reviews => "well reviewed",
		Metric::Citations => "widely cited",
		Metric::Depth => "in-depth coverage",
		Metric::Recency => "recently updated",
		Metric::ReadingTime => "quick to read",
	}
}
