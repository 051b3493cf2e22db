use std::{
	path::Path,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
	time::Duration,
};

use curate_config::Config;
use curate_domain::{CandidateItem, Metrics};
use curate_service::{
	BoxFuture, BudgetRequest, CandidateSource, ConstraintsRequest, Corpus, CurateService,
	DataSource, Error, SearchRequest, SearchStatus,
};

fn test_config(provider_timeout_ms: u64) -> Config {
	let raw = format!(
		r#"
[service]
http_bind = "127.0.0.1:0"

[corpus]
path = "unused.json"

[provider]
enabled    = false
api_base   = "http://127.0.0.1:1"
timeout_ms = {provider_timeout_ms}
"#
	);

	curate_config::parse(&raw, Path::new("<test>")).expect("Failed to parse test config.")
}

fn candidate(id: &str, category: &str, tags: &[&str], metrics: Metrics) -> CandidateItem {
	CandidateItem {
		id: id.to_string(),
		title: format!("Title {id}"),
		url: format!("https://example.com/{id}"),
		summary: String::new(),
		category: category.to_string(),
		tags: tags.iter().map(|tag| tag.to_string()).collect(),
		metrics,
		reading_time: 15,
	}
}

fn learning_corpus() -> Corpus {
	Corpus::from_items(vec![
		candidate(
			"ml-course",
			"course",
			&["machine learning", "tutorial"],
			Metrics { relevance: 0.9, simplicity: 0.8, depth: 0.5, ..Metrics::default() },
		),
		candidate(
			"ml-paper",
			"paper",
			&["machine learning", "research"],
			Metrics { relevance: 0.8, citations: 0.95, depth: 0.9, ..Metrics::default() },
		),
		candidate(
			"pasta",
			"recipe",
			&["cooking"],
			Metrics { relevance: 0.99, ..Metrics::default() },
		),
		candidate(
			"ml-video",
			"video",
			&["tutorial"],
			Metrics { relevance: 0.6, simplicity: 0.9, reviews: 0.7, ..Metrics::default() },
		),
		candidate(
			"ml-book",
			"book",
			&["machine learning"],
			Metrics { relevance: 0.7, depth: 0.8, price: 0.3, ..Metrics::default() },
		),
	])
}

fn request(query: &str, profile: Option<&str>) -> SearchRequest {
	SearchRequest {
		query: query.to_string(),
		profile: profile.map(str::to_string),
		constraints: None,
	}
}

struct StubSource {
	items: Vec<CandidateItem>,
	delay: Option<Duration>,
	fail: bool,
	calls: Arc<AtomicUsize>,
}
impl StubSource {
	fn answering(items: Vec<CandidateItem>) -> Self {
		Self { items, delay: None, fail: false, calls: Arc::new(AtomicUsize::new(0)) }
	}
}
impl CandidateSource for StubSource {
	fn fetch<'a>(
		&'a self,
		_query: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<CandidateItem>>> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		Box::pin(async move {
			if let Some(delay) = self.delay {
				tokio::time::sleep(delay).await;
			}
			if self.fail {
				return Err(color_eyre::eyre::eyre!("upstream unavailable"));
			}

			Ok(self.items.clone())
		})
	}
}

fn service_with(source: Option<StubSource>, timeout_ms: u64) -> CurateService {
	CurateService::with_source(
		test_config(timeout_ms),
		learning_corpus(),
		source.map(|source| Arc::new(source) as Arc<dyn CandidateSource>),
	)
}

#[tokio::test]
async fn ranks_at_most_three_results_in_descending_order() {
	let service = service_with(None, 1_000);
	let response = service
		.search(request("machine learning tutorial", Some("student")))
		.await
		.expect("search failed");

	assert_eq!(response.status, SearchStatus::Ok);
	assert_eq!(response.results.len(), 3);
	assert_eq!(response.metadata.matched_count, 4);
	assert_eq!(response.metadata.candidate_count, 5);
	assert_eq!(response.metadata.data_source, DataSource::Primary);
	assert!(response.results.iter().all(|result| result.item.id != "pasta"));

	for pair in response.results.windows(2) {
		assert!(pair[0].final_score >= pair[1].final_score);
	}
	for result in &response.results {
		let expected = 0.7 * result.breakdown.relevance + 0.3 * result.breakdown.personalization;

		assert!((result.final_score - expected).abs() < 1e-5);
		assert!((0.0..=1.0).contains(&result.final_score));
		assert!((0.0..=1.0).contains(&result.breakdown.relevance));
		assert!((0.0..=1.0).contains(&result.breakdown.personalization));
		assert!(!result.explanations.is_empty());
	}
}

#[tokio::test]
async fn identical_requests_produce_identical_rankings() {
	let service = service_with(None, 1_000);
	let req = SearchRequest {
		query: "machine learning".to_string(),
		profile: Some("researcher".to_string()),
		constraints: Some(ConstraintsRequest {
			skill_level: Some("advanced".to_string()),
			reading_time: Some(20),
			..Default::default()
		}),
	};
	let first = service.search(req.clone()).await.expect("search failed");
	let second = service.search(req).await.expect("search failed");

	assert_eq!(first.results, second.results);
	assert_ne!(first.trace_id, second.trace_id);
}

#[tokio::test]
async fn short_query_admits_every_candidate() {
	let service = service_with(None, 1_000);
	let response = service.search(request("a to", None)).await.expect("search failed");

	assert!(response.metadata.keywords.is_empty());
	assert_eq!(response.metadata.matched_count, 5);
	assert_eq!(response.status, SearchStatus::Ok);
}

#[tokio::test]
async fn unmatched_intent_is_reported_as_no_match() {
	let service = service_with(None, 1_000);
	let response =
		service.search(request("quantum chromodynamics", None)).await.expect("search failed");

	assert_eq!(response.status, SearchStatus::NoMatch);
	assert!(response.results.is_empty());
	assert_eq!(response.metadata.keywords, vec!["quantum", "chromodynamics"]);
}

#[tokio::test]
async fn validation_errors_are_raised_before_ranking() {
	let source = StubSource::answering(Vec::new());
	let calls = source.calls.clone();
	let service = service_with(Some(source), 1_000);

	assert!(matches!(
		service.search(request("   ", None)).await,
		Err(Error::InvalidRequest { field, .. }) if field == "query"
	));
	assert!(matches!(
		service.search(request("machine learning", Some("pirate"))).await,
		Err(Error::InvalidRequest { field, .. }) if field == "profile"
	));
	assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn provider_answer_is_primary() {
	let source = StubSource::answering(vec![candidate(
		"live",
		"course",
		&["machine learning"],
		Metrics { relevance: 0.5, ..Metrics::default() },
	)]);
	let service = service_with(Some(source), 1_000);
	let response =
		service.search(request("machine learning", None)).await.expect("search failed");

	assert_eq!(response.metadata.data_source, DataSource::Primary);
	assert_eq!(response.metadata.candidate_count, 1);
	assert_eq!(response.results[0].item.id, "live");
}

#[tokio::test]
async fn provider_failure_falls_back_to_corpus() {
	let mut source = StubSource::answering(Vec::new());

	source.fail = true;

	let service = service_with(Some(source), 1_000);
	let response =
		service.search(request("machine learning", None)).await.expect("search failed");

	assert_eq!(response.metadata.data_source, DataSource::Fallback);
	assert_eq!(response.metadata.candidate_count, 5);
	assert!(!response.results.is_empty());
}

#[tokio::test]
async fn provider_timeout_falls_back_to_corpus() {
	let mut source = StubSource::answering(vec![candidate(
		"late",
		"course",
		&["machine learning"],
		Metrics::default(),
	)]);

	source.delay = Some(Duration::from_secs(5));

	let service = service_with(Some(source), 50);
	let response =
		service.search(request("machine learning", None)).await.expect("search failed");

	assert_eq!(response.metadata.data_source, DataSource::Fallback);
	assert!(response.results.iter().all(|result| result.item.id != "late"));
}

#[tokio::test]
async fn empty_provider_answer_falls_back_to_corpus() {
	let service = service_with(Some(StubSource::answering(Vec::new())), 1_000);
	let response =
		service.search(request("machine learning", None)).await.expect("search failed");

	assert_eq!(response.metadata.data_source, DataSource::Fallback);
}

#[tokio::test]
async fn budget_constraint_demotes_expensive_items_without_removing_them() {
	let service = service_with(None, 1_000);
	let base = service
		.search(request("machine learning book", Some("shopper")))
		.await
		.expect("search failed");
	let constrained = service
		.search(SearchRequest {
			query: "machine learning book".to_string(),
			profile: Some("shopper".to_string()),
			constraints: Some(ConstraintsRequest {
				budget: Some(BudgetRequest {
					enabled: true,
					amount: Some(20.0),
					currency: Some("usd".to_string()),
				}),
				..Default::default()
			}),
		})
		.await
		.expect("search failed");
	let score_of = |results: &[curate_service::RankedResult], id: &str| {
		results.iter().find(|result| result.item.id == id).map(|result| result.final_score)
	};
	let before = score_of(&base.results, "ml-book").expect("book ranked without budget");
	let after = score_of(&constrained.results, "ml-book").expect("book ranked with budget");

	assert!(after < before);
	assert!(constrained.metadata.constraints_applied);
	assert_eq!(base.metadata.matched_count, constrained.metadata.matched_count);
}
