pub mod corpus;
pub mod profiles;
pub mod ranking;
pub mod search;

mod error;

pub use corpus::Corpus;
pub use error::{Error, Result};
pub use profiles::{ProfileInfo, ProfilesResponse};
pub use ranking::{RankOutcome, RankedResult, ScoreBreakdown};
pub use search::{
	BudgetRequest, ConstraintsRequest, DataSource, SearchMetadata, SearchRequest, SearchResponse,
	SearchStatus,
};

use std::{future::Future, pin::Pin, sync::Arc, time::Duration};

use curate_config::{Config, ProviderConfig};
use curate_domain::CandidateItem;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

const DEFAULT_PROVIDER_TIMEOUT_MS: u64 = 2_000;

/// A live source of candidates that replaces the static corpus when it answers in time.
pub trait CandidateSource
where
	Self: Send + Sync,
{
	fn fetch<'a>(
		&'a self,
		query: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<CandidateItem>>>;
}

/// Upstream search provider reached over HTTP.
pub struct HttpCandidateSource {
	cfg: ProviderConfig,
}
impl HttpCandidateSource {
	pub fn new(cfg: ProviderConfig) -> Self {
		Self { cfg }
	}
}
impl CandidateSource for HttpCandidateSource {
	fn fetch<'a>(
		&'a self,
		query: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<CandidateItem>>> {
		Box::pin(async move { Ok(curate_providers::search::search(&self.cfg, query).await?) })
	}
}

pub struct CurateService {
	pub cfg: Config,
	pub corpus: Corpus,
	pub source: Option<Arc<dyn CandidateSource>>,
	provider_timeout: Duration,
}
impl CurateService {
	/// Builds the service with the HTTP provider from config when it is enabled.
	pub fn new(cfg: Config, corpus: Corpus) -> Self {
		let source = cfg.provider.as_ref().filter(|provider| provider.enabled).map(|provider| {
			Arc::new(HttpCandidateSource::new(provider.clone())) as Arc<dyn CandidateSource>
		});

		Self::with_source(cfg, corpus, source)
	}

	pub fn with_source(
		cfg: Config,
		corpus: Corpus,
		source: Option<Arc<dyn CandidateSource>>,
	) -> Self {
		let timeout_ms = cfg
			.provider
			.as_ref()
			.map(|provider| provider.timeout_ms)
			.filter(|ms| *ms > 0)
			.unwrap_or(DEFAULT_PROVIDER_TIMEOUT_MS);

		Self { cfg, corpus, source, provider_timeout: Duration::from_millis(timeout_ms) }
	}

	/// Candidates for one request and where they came from.
	///
	/// Provider failures, timeouts, and empty answers are logged and answered from the corpus.
	pub(crate) async fn fetch_candidates(
		&self,
		query: &str,
	) -> (Arc<[CandidateItem]>, DataSource) {
		let Some(source) = self.source.as_ref() else {
			return (self.corpus.items(), DataSource::Primary);
		};

		match tokio::time::timeout(self.provider_timeout, source.fetch(query)).await {
			Ok(Ok(items)) if !items.is_empty() => {
				let items = items.into_iter().map(CandidateItem::sanitized).collect();

				(items, DataSource::Primary)
			},
			Ok(Ok(_)) => {
				tracing::warn!("Candidate provider returned no items. Using static corpus.");

				(self.corpus.items(), DataSource::Fallback)
			},
			Ok(Err(err)) => {
				tracing::warn!(error = %err, "Candidate provider failed. Using static corpus.");

				(self.corpus.items(), DataSource::Fallback)
			},
			Err(_) => {
				tracing::warn!(
					timeout_ms = self.provider_timeout.as_millis() as u64,
					"Candidate provider timed out. Using static corpus."
				);

				(self.corpus.items(), DataSource::Fallback)
			},
		}
	}
}
