use reqwest::StatusCode;

/// Errors raised while fetching the corpus.
///
/// `Network` and `Status` form the network class, `Decode` covers bodies that
/// are not the expected JSON shape (including `null` for dead items).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport failure, timeout, or an unreadable body stream.
    #[error("request to {url} failed: {source}")]
    Network {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },
    /// Server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status.
        status: StatusCode,
    },
    /// Body did not decode into the expected structure.
    #[error("unexpected response body from {url}: {source}")]
    Decode {
        /// Requested URL.
        url: String,
        /// JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Whether this error belongs to the network class.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Status { .. })
    }

    /// Whether the response body failed to decode.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// URL of the failing request.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_network_class() {
        let err = FetchError::Status {
            url: "http://x/topstories.json".into(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert!(err.is_network());
        assert!(!err.is_decode());
        assert_eq!(err.url(), "http://x/topstories.json");
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn decode_error_keeps_source() {
        let source = serde_json::from_str::<Vec<u64>>("{").expect_err("invalid json");
        let err = FetchError::Decode {
            url: "http://x/item/1.json".into(),
            source,
        };
        assert!(err.is_decode());
        assert!(std::error::Error::source(&err).is_some());
    }
}
