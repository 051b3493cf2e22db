use std::{path::Path, sync::Arc};

use curate_service::{Corpus, CurateService};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<CurateService>,
}
impl AppState {
	/// Loads the static corpus once. Every request shares it read-only.
	pub fn new(config: curate_config::Config) -> color_eyre::Result<Self> {
		let corpus = Corpus::load(Path::new(&config.corpus.path))?;

		tracing::info!(path = %config.corpus.path, items = corpus.len(), "Corpus loaded.");

		if corpus.is_empty() {
			tracing::warn!("Corpus is empty. Searches without a live provider return no results.");
		}

		Ok(Self::from_service(CurateService::new(config, corpus)))
	}

	pub fn from_service(service: CurateService) -> Self {
		Self { service: Arc::new(service) }
	}
}
