use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("NASA API returned status {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Whether this is an upstream 404, which tools map to a
    /// domain-specific "not found" message.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ApiStatus { status: 404, .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            Error::Network(err.to_string())
        } else {
            Error::Unexpected(err.to_string())
        }
    }
}
