use std::{fs, path::Path, sync::Arc};

use curate_domain::{CandidateItem, decode_candidates};

use crate::{Error, Result};

/// Read-only candidate set loaded once and shared by every request.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
	items: Arc<[CandidateItem]>,
}
impl Corpus {
	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path).map_err(|err| Error::Corpus {
			message: format!("Failed to read corpus at {path:?}: {err}"),
		})?;
		let items = decode_candidates(&raw).map_err(|err| Error::Corpus {
			message: format!("Failed to decode corpus at {path:?}: {err}"),
		})?;

		Ok(Self::from_items(items))
	}

	pub fn from_items(items: Vec<CandidateItem>) -> Self {
		Self { items: items.into_iter().map(CandidateItem::sanitized).collect() }
	}

	pub fn items(&self) -> Arc<[CandidateItem]> {
		self.items.clone()
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}
