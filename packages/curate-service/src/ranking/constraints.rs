use curate_domain::{CandidateItem, Constraints, SkillLevel};

/// Upper bound of the summed constraint adjustment.
pub const MAX_BONUS: f32 = 0.15;
/// Lower bound of the summed constraint adjustment. Penalties may outweigh bonuses.
pub const MAX_PENALTY: f32 = -0.25;

const BUDGET_PENALTY_SHARE: f32 = 0.8;
const READING_FIT_BONUS_SHARE: f32 = 0.4;
const READING_OVERRUN_PENALTY_SHARE: f32 = 0.5;
const READING_SIMPLICITY_SHARE: f32 = 0.15;
const BEGINNER_SIMPLICITY_SHARE: f32 = 0.6;
const BEGINNER_DEPTH_PENALTY_SHARE: f32 = 0.5;
const INTERMEDIATE_DEPTH_SHARE: f32 = 0.2;
const INTERMEDIATE_DEPTH_FLOOR: f32 = 0.3;
const ADVANCED_DEPTH_SHARE: f32 = 0.4;
const ADVANCED_CITATIONS_SHARE: f32 = 0.3;
const ADVANCED_SHALLOW_PENALTY_SHARE: f32 = 0.1;

/// Additive personalization term from the declared constraints, clamped to
/// [`MAX_PENALTY`, `MAX_BONUS`]. Returns 0.0 when no constraint is active.
pub fn constraint_adjustment(candidate: &CandidateItem, constraints: &Constraints) -> f32 {
	let metrics = &candidate.metrics;
	let mut total = 0.0_f32;

	if constraints.budget_active() {
		total += (1.0 - metrics.price) * MAX_PENALTY * BUDGET_PENALTY_SHARE;
	}
	if let Some(ceiling) = constraints.reading_time_ceiling() {
		let minutes = candidate.reading_time;

		if minutes <= ceiling {
			total += MAX_BONUS * READING_FIT_BONUS_SHARE;
		} else {
			let overrun = ((minutes - ceiling) as f32 / ceiling as f32).min(1.0);

			total += overrun * MAX_PENALTY * READING_OVERRUN_PENALTY_SHARE;
		}

		total += metrics.simplicity * MAX_BONUS * READING_SIMPLICITY_SHARE;
	}

	match constraints.skill_level {
		Some(SkillLevel::Beginner) => {
			total += metrics.simplicity * MAX_BONUS * BEGINNER_SIMPLICITY_SHARE;
			total += metrics.depth * MAX_PENALTY * BEGINNER_DEPTH_PENALTY_SHARE;
		},
		Some(SkillLevel::Intermediate) => {
			let depth = metrics.depth.max(INTERMEDIATE_DEPTH_FLOOR);

			total += depth * MAX_BONUS * INTERMEDIATE_DEPTH_SHARE;
		},
		Some(SkillLevel::Advanced) => {
			total += metrics.depth * MAX_BONUS * ADVANCED_DEPTH_SHARE;
			total += metrics.citations * MAX_BONUS * ADVANCED_CITATIONS_SHARE;
			total += (1.0 - metrics.depth) * MAX_PENALTY * ADVANCED_SHALLOW_PENALTY_SHARE;
		},
		None => {},
	}

	total.clamp(MAX_PENALTY, MAX_BONUS)
}
