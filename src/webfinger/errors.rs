/// Errors from account resolution, the WebFinger request and output.
use thiserror::Error;

/// Everything that can abort a lookup.
#[derive(Debug, Error)]
pub enum WebfingerError {
    /// No account was given on the command line.
    #[error("Usage: webfinger <acct>")]
    Usage,

    /// The account has no `@host` part and no `--hostname` was given.
    #[error("Missing host in account")]
    MissingHost,

    /// The hostname cannot be turned into an `https://` URL.
    #[error("Invalid hostname '{hostname}': {source}")]
    InvalidHost {
        /// The hostname as resolved from the account or flag.
        hostname: String,
        source: url::ParseError,
    },

    /// The server answered with a non-success status other than 404.
    #[error("Request failed with status: {status} {reason}")]
    Transport {
        /// Numeric HTTP status.
        status: u16,
        /// Canonical reason phrase, empty when the status has none.
        reason: String,
    },

    /// The request never produced a response (DNS, TLS, connection).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body is not valid JSON.
    #[error("Invalid JSON in response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Writing the result to stdout failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl WebfingerError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage
            | Self::MissingHost
            | Self::InvalidHost { .. }
            | Self::Transport { .. }
            | Self::Request(_)
            | Self::Parse(_)
            | Self::Io(_) => 1,
        }
    }
}
