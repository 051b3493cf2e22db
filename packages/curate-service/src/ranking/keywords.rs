pub const MAX_KEYWORDS: usize = 5;

const MIN_KEYWORD_CHARS: usize = 4;

/// Lower-cased whitespace tokens longer than three characters, in query order, capped at
/// [`MAX_KEYWORDS`]. Repeated tokens are kept.
pub fn extract_keywords(query: &str) -> Vec<String> {
	query
		.split_whitespace()
		.filter(|token| token.chars().count() >= MIN_KEYWORD_CHARS)
		.take(MAX_KEYWORDS)
		.map(str::to_lowercase)
		.collect()
}
