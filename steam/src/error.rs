use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The store reported the app id as unknown or unsuccessful.
    #[error("Steam store reported app ID {0} as not found or unsuccessful")]
    NotFound(i64),
    /// The store returned a successful envelope without a data payload.
    #[error("Steam store returned a successful response without data for app ID {0}")]
    UnexpectedResponse(i64),
    /// Transport failure or malformed response body.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
