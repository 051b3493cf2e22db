pub mod candidate;
pub mod constraints;
pub mod profile;

pub use candidate::{
	CandidateItem, DEFAULT_READING_TIME_MINUTES, DecodeError, Metrics, decode_candidates,
	decode_candidates_value,
};
pub use constraints::{Budget, Constraints, SkillLevel};
pub use profile::{Metric, Profile, ProfileWeights};
