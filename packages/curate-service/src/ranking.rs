mod constraints;
mod explain;
#[cfg(test)] mod fixtures;
mod intent;
mod keywords;
mod personalization;
mod pipeline;
mod reading_time;
mod relevance;

pub use constraints::{MAX_BONUS, MAX_PENALTY, constraint_adjustment};
pub use explain::build_explanations;
pub use intent::{filter_by_intent, labels_match, matches_intent};
pub use keywords::{MAX_KEYWORDS, extract_keywords};
pub use personalization::{NEUTRAL_SCORE, PersonalizationScore, personalization_score};
pub use pipeline::{
	PERSONALIZATION_WEIGHT, RELEVANCE_WEIGHT, RankOutcome, RankedResult, ScoreBreakdown, rank,
};
pub use reading_time::reading_time_score;
pub use relevance::{RelevanceScore, relevance_score};
