use curate_domain::{CandidateItem, Metrics};

pub fn item(id: &str, category: &str, tags: &[&str]) -> CandidateItem {
	CandidateItem {
		id: id.to_string(),
		title: id.to_string(),
		url: format!("https://example.com/{id}"),
		summary: String::new(),
		category: category.to_string(),
		tags: tags.iter().map(|tag| tag.to_string()).collect(),
		metrics: Metrics::default(),
		reading_time: 15,
	}
}

pub fn with_metrics(mut candidate: CandidateItem, metrics: Metrics) -> CandidateItem {
	candidate.metrics = metrics;

	candidate
}
