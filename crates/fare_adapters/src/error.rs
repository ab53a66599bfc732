use thiserror::Error;

/// Failures while constructing a collaborator.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenRouteService requires an API key (set router.api_key or OPENROUTE_API_KEY)")]
    MissingApiKey,

    #[error("precomputed router requires router.table_path")]
    MissingTablePath,

    #[error("failed to read route table '{path}': {source}")]
    TableIo {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse route table '{path}': {source}")]
    TableParse {
        path: String,
        source: serde_json::Error,
    },
}
