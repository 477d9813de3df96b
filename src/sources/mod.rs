//! Network retrieval of the top-stories corpus.

mod error;
mod fetch;

/// Result type alias for corpus fetching operations.
pub type Result<T> = std::result::Result<T, FetchError>;

pub use error::FetchError;
pub use fetch::{
    DEFAULT_API_BASE, DEFAULT_CONCURRENCY, FailurePolicy, FetchOptions, Retriever,
};

/// What: Fetch the full corpus with the given options.
///
/// Inputs:
/// - `options`: Endpoint, concurrency cap, timeout, and failure policy.
///
/// Output:
/// - `Ok(Corpus)` on success.
///
/// # Errors
/// - Client construction failures and every error of [`Retriever::fetch_corpus`].
pub async fn fetch_corpus(options: FetchOptions) -> Result<crate::state::Corpus> {
    Retriever::new(options)?.fetch_corpus().await
}
