use serde::{Deserialize, Serialize};
use uuid::Uuid;

use curate_domain::{Budget, Constraints, Profile, SkillLevel};

use crate::{CurateService, Error, Result, ranking};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
	pub query: String,
	/// Defaults to `casual` when absent.
	pub profile: Option<String>,
	pub constraints: Option<ConstraintsRequest>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintsRequest {
	pub budget: Option<BudgetRequest>,
	#[serde(alias = "reading_time")]
	pub reading_time: Option<u32>,
	#[serde(alias = "skill_level")]
	pub skill_level: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BudgetRequest {
	#[serde(default, alias = "flag")]
	pub enabled: bool,
	pub amount: Option<f32>,
	pub currency: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
	Primary,
	Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
	Ok,
	/// Nothing survived the intent filter. Not an error.
	NoMatch,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMetadata {
	pub data_source: DataSource,
	pub candidate_count: usize,
	pub matched_count: usize,
	pub result_limit: u32,
	pub keywords: Vec<String>,
	pub constraints_applied: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
	pub trace_id: Uuid,
	pub query: String,
	pub profile: Profile,
	pub status: SearchStatus,
	pub results: Vec<ranking::RankedResult>,
	pub metadata: SearchMetadata,
}

impl CurateService {
	pub async fn search(&self, req: SearchRequest) -> Result<SearchResponse> {
		let query = req.query.trim();

		if query.is_empty() {
			return Err(Error::invalid("query", "query must be non-empty."));
		}

		let profile = resolve_profile(req.profile.as_deref())?;
		let constraints = resolve_constraints(req.constraints.as_ref())?;
		let trace_id = Uuid::new_v4();
		let result_limit = self.cfg.ranking.result_limit;
		let (candidates, data_source) = self.fetch_candidates(query).await;
		let outcome =
			ranking::rank(&candidates, query, profile, &constraints, result_limit as usize);
		let status =
			if outcome.matched_count == 0 { SearchStatus::NoMatch } else { SearchStatus::Ok };

		if status == SearchStatus::NoMatch {
			tracing::info!(
				%trace_id,
				keywords = ?outcome.keywords,
				candidate_count = candidates.len(),
				"No candidate matched the query intent."
			);
		}

		tracing::info!(
			%trace_id,
			profile = profile.as_str(),
			data_source = ?data_source,
			candidate_count = candidates.len(),
			matched_count = outcome.matched_count,
			result_count = outcome.results.len(),
			"Search ranked."
		);

		Ok(SearchResponse {
			trace_id,
			query: query.to_string(),
			profile,
			status,
			metadata: SearchMetadata {
				data_source,
				candidate_count: candidates.len(),
				matched_count: outcome.matched_count,
				result_limit,
				keywords: outcome.keywords,
				constraints_applied: !constraints.is_empty(),
			},
			results: outcome.results,
		})
	}
}

pub fn resolve_profile(raw: Option<&str>) -> Result<Profile> {
	let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
		return Ok(Profile::Casual);
	};

	Profile::parse(raw).ok_or_else(|| {
		Error::not_allowed("profile", raw, Profile::ALL.iter().map(|profile| profile.as_str()))
	})
}

pub fn resolve_constraints(raw: Option<&ConstraintsRequest>) -> Result<Constraints> {
	let Some(raw) = raw else { return Ok(Constraints::default()) };
	let skill_level = match raw.skill_level.as_deref().filter(|value| !value.trim().is_empty()) {
		Some(value) => Some(SkillLevel::parse(value).ok_or_else(|| {
			Error::not_allowed(
				"constraints.skillLevel",
				value,
				SkillLevel::ALL.iter().map(|level| level.as_str()),
			)
		})?),
		None => None,
	};

	if raw.reading_time == Some(0) {
		return Err(Error::invalid(
			"constraints.readingTime",
			"constraints.readingTime must be greater than zero.",
		));
	}

	let budget = raw.budget.as_ref().map(resolve_budget).transpose()?;

	Ok(Constraints { budget, reading_time: raw.reading_time, skill_level })
}

fn resolve_budget(raw: &BudgetRequest) -> Result<Budget> {
	if let Some(amount) = raw.amount
		&& (!amount.is_finite() || amount < 0.0)
	{
		return Err(Error::invalid(
			"constraints.budget.amount",
			"constraints.budget.amount must be a finite number, zero or greater.",
		));
	}

	let currency = match raw.currency.as_deref().map(str::trim).filter(|code| !code.is_empty()) {
		Some(code) if code.len() == 3 && code.chars().all(|ch| ch.is_ascii_alphabetic()) =>
			Some(code.to_ascii_uppercase()),
		Some(_) =>
			return Err(Error::invalid(
				"constraints.budget.currency",
				"constraints.budget.currency must be a three-letter currency code.",
			)),
		None => None,
	};

	Ok(Budget { enabled: raw.enabled, amount: raw.amount, currency })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_profile_defaults_to_casual() {
		assert_eq!(resolve_profile(None).expect("profile"), Profile::Casual);
		assert_eq!(resolve_profile(Some("  ")).expect("profile"), Profile::Casual);
		assert_eq!(resolve_profile(Some("Shopper")).expect("profile"), Profile::Shopper);
	}

	#[test]
	fn unknown_profile_lists_valid_values() {
		match resolve_profile(Some("wizard")) {
			Err(Error::InvalidRequest { field, allowed, .. }) => {
				assert_eq!(field, "profile");
				assert_eq!(allowed, vec!["student", "shopper", "researcher", "casual"]);
			},
			other => panic!("Expected invalid profile, got {other:?}."),
		}
	}

	#[test]
	fn unknown_skill_level_lists_valid_values() {
		let raw =
			ConstraintsRequest { skill_level: Some("guru".to_string()), ..Default::default() };

		match resolve_constraints(Some(&raw)) {
			Err(Error::InvalidRequest { field, allowed, .. }) => {
				assert_eq!(field, "constraints.skillLevel");
				assert_eq!(allowed, vec!["beginner", "intermediate", "advanced"]);
			},
			other => panic!("Expected invalid skill level, got {other:?}."),
		}
	}

	#[test]
	fn zero_reading_time_is_rejected() {
		let raw = ConstraintsRequest { reading_time: Some(0), ..Default::default() };

		assert!(resolve_constraints(Some(&raw)).is_err());
	}

	#[test]
	fn budget_currency_is_normalized() {
		let raw = ConstraintsRequest {
			budget: Some(BudgetRequest {
				enabled: true,
				amount: Some(25.0),
				currency: Some(" usd ".to_string()),
			}),
			..Default::default()
		};
		let constraints = resolve_constraints(Some(&raw)).expect("constraints");

		assert!(constraints.budget_active());
		assert_eq!(
			constraints.budget.and_then(|budget| budget.currency).as_deref(),
			Some("USD")
		);
	}

	#[test]
	fn negative_budget_is_rejected() {
		let raw = ConstraintsRequest {
			budget: Some(BudgetRequest { enabled: true, amount: Some(-1.0), currency: None }),
			..Default::default()
		};

		assert!(resolve_constraints(Some(&raw)).is_err());
	}
}
