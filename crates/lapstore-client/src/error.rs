use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The server rejected the bearer token. The session has been cleared.
    #[error("session expired or unauthorized at {url}")]
    Unauthorized { url: String },

    /// An authenticated endpoint was called with no token in the session.
    #[error("no authentication token in session")]
    NotAuthenticated,

    #[error("login rejected: {detail}")]
    LoginRejected { detail: String },

    #[error("invalid backend URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
