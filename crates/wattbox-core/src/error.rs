use thiserror::Error;

use crate::http_client::HttpError;

/// Validation and contract errors exposed by `wattbox-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("house id cannot be empty")]
    EmptyHouseId,
    #[error("house id contains invalid character '{ch}' at index {index}")]
    HouseIdInvalidChar { ch: char, index: usize },

    #[error("access token cannot be empty")]
    EmptyToken,
    #[error("access token must not contain whitespace")]
    TokenContainsWhitespace,

    #[error("timestamp must be RFC3339 with a UTC offset: '{value}'")]
    InvalidTimestamp { value: String },

    #[error("price total must be finite")]
    NonFiniteTotal,

    #[error("lookback_weeks must be at least 1")]
    InvalidLookback,
}

/// Errors surfaced by the price history fetch loop.
///
/// None of these are retried; a failure at any page aborts the whole fetch
/// and discards accumulated progress.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Timeout or connection failure at the transport layer.
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    /// The endpoint answered with a non-2xx status.
    #[error("tibber returned status {status}")]
    Status { status: u16 },

    /// The GraphQL layer returned an `errors` payload, e.g. a rejected
    /// token or an unknown house id.
    #[error("tibber api error: {message}")]
    Api { message: String },

    /// The response body was not valid JSON of the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A step of `data.viewer.home.currentSubscription.priceInfo.range`
    /// was missing or null.
    #[error("response is missing '{path}' (check the access token and house id)")]
    MissingData { path: &'static str },

    /// A page arrived with zero price nodes, so the termination check has
    /// no first node to read.
    #[error("page contained no price nodes")]
    EmptyPage,

    /// The page claims an earlier page exists but carries no cursor to
    /// reach it.
    #[error("page reports an earlier page but carries no start cursor")]
    MissingCursor,
}
