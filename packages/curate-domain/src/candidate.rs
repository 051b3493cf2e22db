use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_READING_TIME_MINUTES: u32 = 15;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
	#[error("Candidate payload is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),
	#[error("Candidate payload must be an array or an object with an items/results array.")]
	UnexpectedShape,
}

/// Per-item signals, each expected in the range 0.0-1.0. Missing or null fields decode as zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
	#[serde(deserialize_with = "null_as_default")]
	pub relevance: f32,
	#[serde(deserialize_with = "null_as_default")]
	pub simplicity: f32,
	/// Price desirability. Higher means cheaper.
	#[serde(deserialize_with = "null_as_default")]
	pub price: f32,
	#[serde(deserialize_with = "null_as_default")]
	pub reviews: f32,
	#[serde(deserialize_with = "null_as_default")]
	pub citations: f32,
	#[serde(deserialize_with = "null_as_default")]
	pub depth: f32,
	#[serde(deserialize_with = "null_as_default")]
	pub recency: f32,
}
impl Metrics {
	fn clamped(self) -> Self {
		Self {
			relevance: unit(self.relevance),
			simplicity: unit(self.simplicity),
			price: unit(self.price),
			reviews: unit(self.reviews),
			citations: unit(self.citations),
			depth: unit(self.depth),
			recency: unit(self.recency),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateItem {
	pub id: String,
	pub title: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub url: String,
	#[serde(default, alias = "description", deserialize_with = "null_as_default")]
	pub summary: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub category: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub tags: Vec<String>,
	#[serde(flatten)]
	pub metrics: Metrics,
	#[serde(
		default = "default_reading_time",
		alias = "reading_time",
		deserialize_with = "null_as_default_reading_time"
	)]
	pub reading_time: u32,
}
impl CandidateItem {
	/// Brings decoded values into their documented ranges: non-finite or out-of-range metrics
	/// are clamped to 0.0-1.0, a zero reading time falls back to the default, and blank tags
	/// are dropped.
	pub fn sanitized(self) -> Self {
		let reading_time =
			if self.reading_time == 0 { DEFAULT_READING_TIME_MINUTES } else { self.reading_time };
		let tags = self.tags.into_iter().filter(|tag| !tag.trim().is_empty()).collect();

		Self { metrics: self.metrics.clamped(), reading_time, tags, ..self }
	}

	/// Category followed by tags, lower-cased, skipping blanks.
	pub fn labels(&self) -> Vec<String> {
		std::iter::once(&self.category)
			.chain(self.tags.iter())
			.map(|label| label.trim().to_lowercase())
			.filter(|label| !label.is_empty())
			.collect()
	}
}

/// Decodes a candidate list from raw JSON.
///
/// Accepts a bare array, or an object carrying the array under `items` or `results`.
pub fn decode_candidates(raw: &str) -> Result<Vec<CandidateItem>, DecodeError> {
	let value: Value = serde_json::from_str(raw)?;

	decode_candidates_value(value)
}

pub fn decode_candidates_value(value: Value) -> Result<Vec<CandidateItem>, DecodeError> {
	let items = match value {
		Value::Array(items) => items,
		Value::Object(mut map) => match map.remove("items").or_else(|| map.remove("results")) {
			Some(Value::Array(items)) => items,
			_ => return Err(DecodeError::UnexpectedShape),
		},
		_ => return Err(DecodeError::UnexpectedShape),
	};
	let mut out = Vec::with_capacity(items.len());

	for item in items {
		let candidate: CandidateItem = serde_json::from_value(item)?;

		out.push(candidate.sanitized());
	}

	Ok(out)
}

fn default_reading_time() -> u32 {
	DEFAULT_READING_TIME_MINUTES
}

/// JSON sources routinely send `null` for a missing value. Treat it like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn null_as_default_reading_time<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
	D: Deserializer<'de>,
{
	let minutes = Option::<u32>::deserialize(deserializer)?;

	Ok(minutes.unwrap_or_else(default_reading_time))
}

fn unit(value: f32) -> f32 {
	if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 }
}
