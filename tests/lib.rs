//! Shared fixtures for wattbox behavior tests: canned Tibber responses in
//! the provider's nesting, and a scripted transport that records every
//! outgoing request.

use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};
use wattbox_core::{CacheMode, FetchConfig, HttpClient, HttpError, HttpRequest, HttpResponse};

/// Scripted transport: hands out queued responses in order and records
/// outgoing requests for assertions. Running out of responses fails the
/// request, so an over-eager pagination loop fails its test.
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    responses: Mutex<Vec<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn with_bodies(bodies: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(bodies.into_iter().map(HttpResponse::ok_json).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests.lock().expect("requests lock").push(request);

        let mut responses = self.responses.lock().expect("responses lock");
        let result = if responses.is_empty() {
            Err(HttpError::new("scripted transport ran out of responses"))
        } else {
            Ok(responses.remove(0))
        };

        Box::pin(async move { result })
    }
}

/// Fetch config pointing at a fake endpoint with the cache bypassed.
pub fn offline_config() -> FetchConfig {
    FetchConfig::default()
        .with_endpoint("https://tibber.test/gql")
        .with_cache_mode(CacheMode::Bypass)
}

pub fn rfc3339_days_ago(days: i64) -> String {
    (OffsetDateTime::now_utc() - Duration::days(days))
        .format(&Rfc3339)
        .expect("timestamp must format")
}

/// One page response with the full
/// `data.viewer.home.currentSubscription.priceInfo.range` nesting.
pub fn page_response(
    nodes: &[(String, f64)],
    has_previous_page: bool,
    start_cursor: Option<&str>,
) -> String {
    let nodes: Vec<serde_json::Value> = nodes
        .iter()
        .map(|(starts_at, total)| serde_json::json!({ "startsAt": starts_at, "total": total }))
        .collect();

    serde_json::json!({
        "data": {
            "viewer": {
                "home": {
                    "currentSubscription": {
                        "priceInfo": {
                            "range": {
                                "nodes": nodes,
                                "pageInfo": {
                                    "hasPreviousPage": has_previous_page,
                                    "startCursor": start_cursor
                                }
                            }
                        }
                    }
                }
            }
        }
    })
    .to_string()
}

/// Pages chained with `cursor{i}` cursors; only the last page reports no
/// previous page.
pub fn chained_pages(pages: Vec<Vec<(String, f64)>>) -> Vec<String> {
    let count = pages.len();
    pages
        .iter()
        .enumerate()
        .map(|(index, nodes)| {
            let has_previous = index < count - 1;
            let cursor = has_previous.then(|| format!("cursor{index}"));
            page_response(nodes, has_previous, cursor.as_deref())
        })
        .collect()
}

/// The reference four-page scenario: 3 + 3 + 3 + 1 nodes dated one to ten
/// days back, so a four-week cutoff never trips the early exit.
pub fn four_pages() -> Vec<String> {
    chained_pages(vec![
        (1..4).map(|d| (rfc3339_days_ago(d), 0.1)).collect(),
        (4..7).map(|d| (rfc3339_days_ago(d), 0.2)).collect(),
        (7..10).map(|d| (rfc3339_days_ago(d), 0.3)).collect(),
        vec![(rfc3339_days_ago(10), 0.4)],
    ])
}
