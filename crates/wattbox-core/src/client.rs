//! Tibber GraphQL client: the cursor pagination loop.
//!
//! Pages are walked backward from the most recent one until either the
//! first node of the just-fetched page precedes the lookback cutoff or
//! the API reports no earlier page. One request is in flight at a time;
//! there are no retries, and a failure at any page discards all
//! accumulated progress.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::cache::ResponseCache;
use crate::config::FetchConfig;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::query::QueryTemplate;
use crate::{AccessToken, FetchError, HouseId, Page, PriceHistory, ValidationError};

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    viewer: Option<Viewer>,
}

#[derive(Debug, Deserialize)]
struct Viewer {
    home: Option<Home>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Home {
    current_subscription: Option<Subscription>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Subscription {
    price_info: Option<PriceInfo>,
}

#[derive(Debug, Deserialize)]
struct PriceInfo {
    range: Option<Page>,
}

/// Client for the Tibber price history endpoint.
pub struct TibberClient {
    http_client: Arc<dyn HttpClient>,
    cache: ResponseCache,
    template: QueryTemplate,
    config: FetchConfig,
}

impl TibberClient {
    /// Build a client with the production reqwest transport.
    pub fn new(config: FetchConfig) -> Result<Self, ValidationError> {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), config)
    }

    /// Build a client over an injected transport.
    pub fn with_http_client(
        http_client: Arc<dyn HttpClient>,
        config: FetchConfig,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        let cache = ResponseCache::new(&config.cache_dir, config.cache_ttl, config.cache_mode);

        Ok(Self {
            http_client,
            cache,
            template: QueryTemplate::price_history(),
            config,
        })
    }

    /// Fetch hourly prices for one house, covering at least the trailing
    /// lookback window, or everything available if the history is shorter.
    ///
    /// Nodes are returned in fetch order; the caller re-orders as needed.
    pub async fn price_history(
        &self,
        token: &AccessToken,
        house: &HouseId,
    ) -> Result<PriceHistory, FetchError> {
        let cutoff =
            OffsetDateTime::now_utc() - Duration::weeks(i64::from(self.config.lookback_weeks));

        let mut points = Vec::new();
        let mut cursor = String::new();

        loop {
            let page = self.fetch_page(token, house, &cursor).await?;

            // The termination check reads the first node of the page just
            // fetched: the provider orders each page oldest-first, so node
            // 0 stands in for the earliest timestamp seen so far.
            let first = page.nodes.first().cloned().ok_or(FetchError::EmptyPage)?;
            points.extend(page.nodes);

            if first.starts_at.into_inner() < cutoff {
                debug!(fetched = points.len(), "lookback window satisfied");
                break;
            }

            if page.page_info.has_previous_page {
                cursor = page.page_info.start_cursor.ok_or(FetchError::MissingCursor)?;
            } else {
                debug!(fetched = points.len(), "price history exhausted before cutoff");
                break;
            }
        }

        Ok(PriceHistory::new(points))
    }

    async fn fetch_page(
        &self,
        token: &AccessToken,
        house: &HouseId,
        cursor: &str,
    ) -> Result<Page, FetchError> {
        let query = self.template.render(house, cursor);
        let payload = serde_json::to_string(&GraphQlRequest { query: &query })?;
        let key = ResponseCache::key(&payload);

        let body = if let Some(cached) = self.cache.get(&key) {
            debug!(cursor, "serving page from cache");
            cached
        } else {
            let request = HttpRequest::post_json(self.config.endpoint.as_str(), payload)
                .with_bearer_token(token.as_str())
                .with_timeout(self.config.timeout);

            let response = self.http_client.execute(request).await?;
            if !response.is_success() {
                return Err(FetchError::Status {
                    status: response.status,
                });
            }

            self.cache.put(&key, &response.body);
            response.body
        };

        decode_page(&body)
    }
}

/// Decode `data.viewer.home.currentSubscription.priceInfo.range` out of a
/// GraphQL response body, naming the first missing step on failure.
fn decode_page(body: &str) -> Result<Page, FetchError> {
    let response: GraphQlResponse = serde_json::from_str(body)?;

    if let Some(error) = response.errors.into_iter().next() {
        return Err(FetchError::Api {
            message: error.message,
        });
    }

    response
        .data
        .ok_or(FetchError::MissingData { path: "data" })?
        .viewer
        .ok_or(FetchError::MissingData {
            path: "data.viewer",
        })?
        .home
        .ok_or(FetchError::MissingData {
            path: "data.viewer.home",
        })?
        .current_subscription
        .ok_or(FetchError::MissingData {
            path: "data.viewer.home.currentSubscription",
        })?
        .price_info
        .ok_or(FetchError::MissingData {
            path: "data.viewer.home.currentSubscription.priceInfo",
        })?
        .range
        .ok_or(FetchError::MissingData {
            path: "data.viewer.home.currentSubscription.priceInfo.range",
        })
}
