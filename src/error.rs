/// Client-side errors for the recommendation backend
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The backend answered with a non-success status and a structured
    /// error body. This is an ordinary branch of the protocol, not an
    /// exceptional condition.
    #[error("API error {status}: {detail:?}")]
    Api { status: u16, detail: Option<String> },
}

pub type ClientResult<T> = Result<T, ClientError>;
