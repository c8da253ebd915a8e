use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Error message embedded in a provider's response envelope.
    ///
    /// Displays bare so the aggregator can prefix it with the platform name
    /// without double-wrapping.
    #[error("{0}")]
    Api(String),

    /// Lookup miss surfaced verbatim to the caller ("Channel not found",
    /// "No statistics found"), without the platform error prefix.
    #[error("{0}")]
    NotFound(String),

    #[error("invalid endpoint URL \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}
