//! Top-stories retrieval with bounded, order-preserving fan-out.

use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::state::{Corpus, Item};

use super::{FetchError, Result};

/// Public Firebase endpoint of the story API.
pub const DEFAULT_API_BASE: &str = "https://hacker-news.firebaseio.com/v0";

/// Default number of item requests kept in flight.
pub const DEFAULT_CONCURRENCY: usize = 32;

/// What to do when a single item request fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Any failed item aborts the whole fetch.
    #[default]
    FailFast,
    /// Failed items are logged and dropped.
    SkipFailed,
}

/// Knobs for a corpus fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// API root, without trailing slash.
    pub api_base: String,
    /// Maximum item requests in flight, at least 1.
    pub concurrency: usize,
    /// Per-request timeout; `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    /// Item failure handling.
    pub failure_policy: FailurePolicy,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            request_timeout: None,
            failure_policy: FailurePolicy::FailFast,
        }
    }
}

/// Fetches the ranked id list and every item behind it.
#[derive(Clone, Debug)]
pub struct Retriever {
    /// Pooled HTTP client.
    client: reqwest::Client,
    /// Fetch configuration.
    options: FetchOptions,
}

impl Retriever {
    /// What: Build a retriever with its own HTTP client.
    ///
    /// Inputs:
    /// - `options`: Endpoint, concurrency cap, timeout, and failure policy.
    ///
    /// Output:
    /// - `Ok(Retriever)`; `Err(FetchError::Network)` if the client cannot be built.
    ///
    /// # Errors
    /// - Returns `Err` when the TLS backend or client configuration fails to initialize.
    pub fn new(options: FetchOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(format!(
            "hnview/{} (+terminal reader)",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = options.request_timeout {
            builder = builder.connect_timeout(timeout).timeout(timeout);
        }
        let client = builder.build().map_err(|source| FetchError::Network {
            url: options.api_base.clone(),
            source,
        })?;
        Ok(Self::with_client(client, options))
    }

    /// Build a retriever around an existing client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client, options: FetchOptions) -> Self {
        Self { client, options }
    }

    fn base(&self) -> &str {
        self.options.api_base.trim_end_matches('/')
    }

    /// URL of the ranked top-stories list.
    #[must_use]
    pub fn top_stories_url(&self) -> String {
        format!("{}/topstories.json", self.base())
    }

    /// URL of a single item.
    #[must_use]
    pub fn item_url(&self, id: u64) -> String {
        format!("{}/item/{id}.json", self.base())
    }

    /// What: GET a URL and decode its JSON body.
    ///
    /// Details:
    /// - Non-success statuses map to `FetchError::Status` before the body is read.
    /// - The body is read fully, then decoded, so transport and decode failures stay distinct.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(source) => return Err(FetchError::Network { url, source }),
        };
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }
        let body = match response.bytes().await {
            Ok(b) => b,
            Err(source) => return Err(FetchError::Network { url, source }),
        };
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { url, source })
    }

    /// What: Fetch the ranked list of top story ids.
    ///
    /// Output:
    /// - Ids in rank order.
    ///
    /// # Errors
    /// - `Network`/`Status` on transport failure or non-success status.
    /// - `Decode` when the body is not a JSON array of integers.
    pub async fn fetch_top_ids(&self) -> Result<Vec<u64>> {
        let ids: Vec<u64> = self.get_json(self.top_stories_url()).await?;
        info!(count = ids.len(), "fetched top story ids");
        Ok(ids)
    }

    /// What: Fetch one item record.
    ///
    /// # Errors
    /// - `Network`/`Status` on transport failure or non-success status.
    /// - `Decode` when the body is not an item object (a `null` body included).
    pub async fn fetch_item(&self, id: u64) -> Result<Item> {
        let item: Item = self.get_json(self.item_url(id)).await?;
        debug!(id, "fetched item");
        Ok(item)
    }

    /// What: Fetch all items for `ids`, preserving their order.
    ///
    /// Inputs:
    /// - `ids`: Item ids in rank order.
    ///
    /// Output:
    /// - Items in the same order as `ids` (minus failures under `SkipFailed`).
    ///
    /// # Errors
    /// - Under `FailFast`, the first failing item request in rank order.
    ///
    /// Details:
    /// - Up to `concurrency` requests are in flight; completion order does not affect output order.
    pub async fn fetch_items(&self, ids: &[u64]) -> Result<Vec<Item>> {
        let in_flight = self.options.concurrency.max(1);
        let requests = stream::iter(ids.iter().copied())
            .map(|id| self.fetch_item(id))
            .buffered(in_flight);

        match self.options.failure_policy {
            FailurePolicy::FailFast => requests.try_collect().await,
            FailurePolicy::SkipFailed => {
                let results: Vec<Result<Item>> = requests.collect().await;
                let mut items = Vec::with_capacity(results.len());
                let mut skipped = 0usize;
                for res in results {
                    match res {
                        Ok(item) => items.push(item),
                        Err(e) => {
                            skipped += 1;
                            warn!(error = %e, "skipping item that failed to load");
                        }
                    }
                }
                if skipped > 0 {
                    warn!(skipped, kept = items.len(), "corpus fetched with gaps");
                }
                Ok(items)
            }
        }
    }

    /// What: Fetch the full corpus: id list first, then every item.
    ///
    /// Output:
    /// - `Ok(Corpus)` in rank order; no partial corpus is ever returned under `FailFast`.
    ///
    /// # Errors
    /// - Any error from [`Self::fetch_top_ids`]; under `FailFast` any error from
    ///   [`Self::fetch_items`].
    pub async fn fetch_corpus(&self) -> Result<Corpus> {
        let started = Instant::now();
        let ids = self.fetch_top_ids().await.map_err(|e| {
            warn!(error = %e, "failed to fetch top story ids");
            e
        })?;
        let items = self.fetch_items(&ids).await.map_err(|e| {
            warn!(error = %e, "failed to fetch story items");
            e
        })?;
        let corpus = Corpus::new(items);
        info!(
            items = corpus.len(),
            domains = corpus.domain_count(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "corpus fetched"
        );
        Ok(corpus)
    }
}
