// std
use std::time::Duration as StdDuration;

// crates.io
use reqwest::Client;
use serde_json::Value;

// self
use crate::{Error, Result};
use curate_config::ProviderConfig;
use curate_domain::{CandidateItem, decode_candidates_value};

/// Asks the upstream search provider for candidates matching `query`.
///
/// The request carries its own timeout from the provider config; callers that need a hard bound
/// on the whole call should still wrap it.
pub async fn search(cfg: &ProviderConfig, query: &str) -> Result<Vec<CandidateItem>> {
	let client = Client::builder().timeout(StdDuration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base.trim_end_matches('/'), cfg.path);
	let body = serde_json::json!({ "query": query });
	let res = client
		.post(url)
		.headers(crate::auth_headers(cfg.api_key.as_deref(), &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_search_response(json)
}

fn parse_search_response(json: Value) -> Result<Vec<CandidateItem>> {
	decode_candidates_value(json)
		.map_err(|err| Error::InvalidResponse { message: format!("Search response: {err}") })
}
