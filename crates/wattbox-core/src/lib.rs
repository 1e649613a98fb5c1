//! # Wattbox Core
//!
//! Price history fetcher for the Tibber GraphQL API.
//!
//! The one non-trivial piece is the cursor pagination loop in
//! [`client`]: it walks price pages backward in time, accumulating nodes
//! until the lookback cutoff is crossed or the history runs out.
//! Everything else supports that loop.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Filesystem response cache keyed by request content |
//! | [`client`] | Tibber client and the pagination loop |
//! | [`config`] | Fetch configuration with documented defaults |
//! | [`domain`] | Validated domain types (prices, timestamps, ids) |
//! | [`error`] | Validation and fetch error taxonomy |
//! | [`http_client`] | Transport trait plus the reqwest implementation |
//! | [`query`] | Positional GraphQL query template |
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use wattbox_core::{AccessToken, FetchConfig, HouseId, TibberClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let token = AccessToken::parse("...")?;
//!     let house = HouseId::parse("96a14971-525a-4420-aae9-e5aedaa129ff")?;
//!
//!     let client = TibberClient::new(FetchConfig::default())?;
//!     let history = client.price_history(&token, &house).await?;
//!
//!     println!("fetched {} hourly prices", history.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Fetches return [`FetchError`]: transport failures, non-2xx statuses,
//! GraphQL error payloads, and malformed or truncated response shapes are
//! all distinct variants. No variant is retried.
//!
//! The access token is read from the environment by callers, passed in as
//! a validated [`AccessToken`], and never logged.

pub mod cache;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod query;

pub use cache::{CacheMode, ResponseCache};
pub use client::TibberClient;
pub use config::{
    FetchConfig, DEFAULT_CACHE_DIR, DEFAULT_CACHE_TTL, DEFAULT_LOOKBACK_WEEKS, DEFAULT_TIMEOUT,
    TIBBER_API,
};
pub use domain::{AccessToken, HouseId, Page, PageInfo, PriceHistory, PricePoint, PriceTimestamp};
pub use error::{FetchError, ValidationError};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use query::{QueryTemplate, PRICE_HISTORY_QUERY};
