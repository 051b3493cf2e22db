use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub corpus: Corpus,
	/// Optional upstream search provider. The static corpus is used when absent or disabled.
	pub provider: Option<ProviderConfig>,
	#[serde(default)]
	pub ranking: Ranking,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Corpus {
	/// JSON file holding an array of candidate items.
	pub path: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProviderConfig {
	#[serde(default)]
	pub enabled: bool,
	pub api_base: String,
	#[serde(default = "default_provider_path")]
	pub path: String,
	pub api_key: Option<String>,
	#[serde(default = "default_provider_timeout_ms")]
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct Ranking {
	/// Number of results in the ranked set.
	#[serde(default = "default_result_limit")]
	pub result_limit: u32,
}
impl Default for Ranking {
	fn default() -> Self {
		Self { result_limit: default_result_limit() }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_provider_path() -> String {
	"/search".to_string()
}

fn default_provider_timeout_ms() -> u64 {
	2_000
}

fn default_result_limit() -> u32 {
	3
}
