pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Rejected before ranking. `allowed` lists valid values when the field is enumerated.
	#[error("Invalid request: {message}")]
	InvalidRequest { field: String, message: String, allowed: Vec<String> },
	#[error("Corpus error: {message}")]
	Corpus { message: String },
}
impl Error {
	pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
		Self::InvalidRequest {
			field: field.to_string(),
			message: message.into(),
			allowed: Vec::new(),
		}
	}

	pub(crate) fn not_allowed<'a>(
		field: &str,
		value: &str,
		allowed: impl IntoIterator<Item = &'a str>,
	) -> Self {
		let allowed = allowed.into_iter().map(str::to_string).collect::<Vec<_>>();

		Self::InvalidRequest {
			field: field.to_string(),
			message: format!("{field} must be one of: {}. Got {value}.", allowed.join(", ")),
			allowed,
		}
	}
}
