use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
	Beginner,
	Intermediate,
	Advanced,
}
impl SkillLevel {
	pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Beginner => "beginner",
			Self::Intermediate => "intermediate",
			Self::Advanced => "advanced",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		let value = value.trim();

		Self::ALL.into_iter().find(|level| level.as_str().eq_ignore_ascii_case(value))
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Budget {
	pub enabled: bool,
	pub amount: Option<f32>,
	pub currency: Option<String>,
}

/// Optional user-declared conditions. An absent field means the condition is not applied.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
	pub budget: Option<Budget>,
	/// Reading-time ceiling in minutes.
	pub reading_time: Option<u32>,
	pub skill_level: Option<SkillLevel>,
}
impl Constraints {
	pub fn budget_active(&self) -> bool {
		self.budget.as_ref().map(|budget| budget.enabled).unwrap_or(false)
	}

	/// The ceiling when it is usable. A zero ceiling is treated as not applied.
	pub fn reading_time_ceiling(&self) -> Option<u32> {
		self.reading_time.filter(|minutes| *minutes > 0)
	}

	pub fn is_empty(&self) -> bool {
		!self.budget_active() && self.reading_time_ceiling().is_none() && self.skill_level.is_none()
	}
}
