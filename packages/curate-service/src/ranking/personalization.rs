use curate_domain::{CandidateItem, Constraints, Metric, Profile};

use crate::ranking::{constraint_adjustment, reading_time_score};

/// Score used when a profile carries no usable weights.
pub const NEUTRAL_SCORE: f32 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PersonalizationScore {
	pub score: f32,
	/// Weighted profile preference before constraints, in -1.0-1.0.
	pub preference: f32,
	/// Bounded constraint term that was added to `preference`.
	pub adjustment: f32,
}

/// Metric value used for personalization. Reading time enters as its desirability score.
pub fn metric_value(candidate: &CandidateItem, metric: Metric) -> f32 {
	metric
		.value(&candidate.metrics)
		.unwrap_or_else(|| reading_time_score(candidate.reading_time as f32))
}

pub fn personalization_score(
	candidate: &CandidateItem,
	profile: Profile,
	constraints: &Constraints,
) -> PersonalizationScore {
	let weights = profile.weights();
	let mut sum = 0.0_f32;
	let mut total = 0.0_f32;

	for metric in Metric::PERSONALIZATION {
		let weight = weights.weight(metric);

		if weight == 0.0 {
			continue;
		}

		sum += metric_value(candidate, metric) * weight;
		total += weight.abs();
	}

	let preference = if total > 0.0 { sum / total } else { NEUTRAL_SCORE };
	let adjustment = constraint_adjustment(candidate, constraints);

	let score = (preference + adjustment).clamp(0.0, 1.0);

	PersonalizationScore { score, preference, adjustment }
}
