mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Corpus, ProviderConfig, Ranking, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse(&raw, path)
}

/// Parses and validates config text. `origin` is only used in error messages.
pub fn parse(raw: &str, origin: &Path) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: origin.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.corpus.path.trim().is_empty() {
		return Err(Error::Validation { message: "corpus.path must be non-empty.".to_string() });
	}
	if cfg.ranking.result_limit == 0 {
		return Err(Error::Validation {
			message: "ranking.result_limit must be greater than zero.".to_string(),
		});
	}

	if let Some(provider) = cfg.provider.as_ref()
		&& provider.enabled
	{
		if provider.api_base.trim().is_empty() {
			return Err(Error::Validation {
				message: "provider.api_base must be non-empty when the provider is enabled."
					.to_string(),
			});
		}
		if provider.timeout_ms == 0 {
			return Err(Error::Validation {
				message: "provider.timeout_ms must be greater than zero.".to_string(),
			});
		}

		for (key, value) in &provider.default_headers {
			if !value.is_string() {
				return Err(Error::Validation {
					message: format!("provider.default_headers.{key} must be a string."),
				});
			}
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if let Some(provider) = cfg.provider.as_mut()
		&& provider.api_key.as_deref().map(|key| key.trim().is_empty()).unwrap_or(false)
	{
		provider.api_key = None;
	}
	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = "info".to_string();
	}
}
