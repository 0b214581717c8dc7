use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong during a search or fetch call.
///
/// Validation errors are raised before any request is sent, so a caller that
/// gets one of those can be sure no network traffic happened.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Query is required")]
    QueryRequired,

    #[error("Offset cannot be below 0")]
    OffsetBelowZero,

    #[error("Limit must be between 1 and 40")]
    LimitOutOfRange,

    #[error("The book ID is required")]
    BookIdRequired,

    /// The API answered with something other than 200.
    #[error("request failed with status {0}")]
    Status(u16),

    /// DNS failure, refused connection, reset, and friends.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API returned a 200 but the body was not valid JSON.
    #[error("invalid response body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}
