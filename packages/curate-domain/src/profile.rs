use serde::{Deserialize, Serialize};

use crate::candidate::Metrics;

/// Declared user archetype. Each variant carries a fixed weight record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
	Student,
	Shopper,
	Researcher,
	Casual,
}
impl Profile {
	pub const ALL: [Self; 4] = [Self::Student, Self::Shopper, Self::Researcher, Self::Casual];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Student => "student",
			Self::Shopper => "shopper",
			Self::Researcher => "researcher",
			Self::Casual => "casual",
		}
	}

	/// Case-insensitive lookup by name. Returns `None` for anything outside the enumeration.
	pub fn parse(value: &str) -> Option<Self> {
		let value = value.trim();

		Self::ALL.into_iter().find(|profile| profile.as_str().eq_ignore_ascii_case(value))
	}

	pub fn weights(self) -> &'static ProfileWeights {
		match self {
			Self::Student => &STUDENT_WEIGHTS,
			Self::Shopper => &SHOPPER_WEIGHTS,
			Self::Researcher => &RESEARCHER_WEIGHTS,
			Self::Casual => &CASUAL_WEIGHTS,
		}
	}
}
impl std::fmt::Display for Profile {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One weight per item signal. `relevance` is part of the record but belongs to query scoring,
/// so personalization never reads it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileWeights {
	pub simplicity: f32,
	pub relevance: f32,
	pub recency: f32,
	pub reviews: f32,
	pub depth: f32,
	pub price: f32,
	pub citations: f32,
	pub reading_time: f32,
}
impl ProfileWeights {
	pub fn weight(&self, metric: Metric) -> f32 {
		match metric {
			Metric::Simplicity => self.simplicity,
			Metric::Price => self.price,
			Metric::Reviews => self.reviews,
			Metric::Citations => self.citations,
			Metric::Depth => self.depth,
			Metric::Recency => self.recency,
			Metric::ReadingTime => self.reading_time,
		}
	}
}

pub const STUDENT_WEIGHTS: ProfileWeights = ProfileWeights {
	simplicity: 0.30,
	relevance: 0.25,
	recency: 0.15,
	reviews: 0.15,
	depth: 0.10,
	price: 0.05,
	citations: 0.0,
	reading_time: -0.05,
};

pub const SHOPPER_WEIGHTS: ProfileWeights = ProfileWeights {
	simplicity: 0.05,
	relevance: 0.20,
	recency: 0.10,
	reviews: 0.30,
	depth: 0.0,
	price: 0.35,
	citations: 0.0,
	reading_time: 0.0,
};

pub const RESEARCHER_WEIGHTS: ProfileWeights = ProfileWeights {
	simplicity: 0.0,
	relevance: 0.20,
	recency: 0.15,
	reviews: 0.05,
	depth: 0.25,
	price: 0.0,
	citations: 0.30,
	reading_time: 0.05,
};

pub const CASUAL_WEIGHTS: ProfileWeights = ProfileWeights {
	simplicity: 0.25,
	relevance: 0.20,
	recency: 0.10,
	reviews: 0.20,
	depth: 0.0,
	price: 0.05,
	citations: 0.0,
	reading_time: 0.20,
};

/// Item signals that feed personalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
	Simplicity,
	Price,
	Reviews,
	Citations,
	Depth,
	Recency,
	ReadingTime,
}
impl Metric {
	pub const PERSONALIZATION: [Self; 7] = [
		Self::Simplicity,
		Self::Price,
		Self::Reviews,
		Self::Citations,
		Self::Depth,
		Self::Recency,
		Self::ReadingTime,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Simplicity => "simplicity",
			Self::Price => "price",
			Self::Reviews => "reviews",
			Self::Citations => "citations",
			Self::Depth => "depth",
			Self::Recency => "recency",
			Self::ReadingTime => "readingTime",
		}
	}

	/// Raw value from an item's metrics. Reading time is not a 0-1 metric and has no raw value
	/// here; callers substitute its normalized score.
	pub fn value(self, metrics: &Metrics) -> Option<f32> {
		match self {
			Self::Simplicity => Some(metrics.simplicity),
			Self::Price => Some(metrics.price),
			Self::Reviews => Some(metrics.reviews),
			Self::Citations => Some(metrics.citations),
			Self::Depth => Some(metrics.depth),
			Self::Recency => Some(metrics.recency),
			Self::ReadingTime => None,
		}
	}
}
