//! Behavior tests for the fetch → report handoff.

use std::sync::Arc;

use wattbox_core::{AccessToken, HouseId, PriceHistory, PricePoint, PriceTimestamp, TibberClient};
use wattbox_report::{ReportDataset, ReportError};
use wattbox_tests::{four_pages, offline_config, ScriptedHttpClient};

fn point(rfc3339: &str, total: f64) -> PricePoint {
    PricePoint {
        starts_at: PriceTimestamp::parse(rfc3339).expect("timestamp"),
        total,
    }
}

#[tokio::test]
async fn a_fetched_history_feeds_the_report_dataset() {
    let transport = Arc::new(ScriptedHttpClient::with_bodies(four_pages()));
    let client =
        TibberClient::with_http_client(transport.clone(), offline_config()).expect("client");
    let history = client
        .price_history(
            &AccessToken::parse("test-token").expect("token"),
            &HouseId::parse("test-house-id").expect("house id"),
        )
        .await
        .expect("fetch");

    let dataset = ReportDataset::from_history(&history).expect("dataset");
    assert_eq!(dataset.len(), 10);

    // Ten days of nodes: the dataset re-orders what arrived newest-first.
    let (start, end) = dataset.date_range();
    assert!(start < end);

    // Every bucketing partitions the full sample set.
    for groups in [
        dataset.by_date(),
        dataset.by_week(),
        dataset.by_weekday(),
        dataset.by_hour(),
    ] {
        let bucketed: usize = groups.iter().map(|g| g.values.len()).sum();
        assert_eq!(bucketed, 10);
    }

    let grid_total: usize = dataset
        .by_hour_per_week()
        .iter()
        .flat_map(|(_, groups)| groups.iter())
        .map(|g| g.values.len())
        .sum();
    assert_eq!(grid_total, 10);
}

#[test]
fn an_empty_history_cannot_become_a_report() {
    let err = ReportDataset::from_history(&PriceHistory::default()).expect_err("must fail");
    assert!(matches!(err, ReportError::EmptyHistory));
}

#[test]
fn bucket_labels_follow_the_providers_local_clock() {
    let history = PriceHistory::new(vec![
        point("2024-01-05T23:00:00+01:00", 0.4),
        point("2024-01-06T00:00:00+01:00", 0.2),
    ]);

    let dataset = ReportDataset::from_history(&history).expect("dataset");

    let dates: Vec<String> = dataset.by_date().into_iter().map(|g| g.label).collect();
    assert_eq!(dates, vec!["2024-01-05", "2024-01-06"]);

    let hours: Vec<String> = dataset.by_hour().into_iter().map(|g| g.label).collect();
    assert_eq!(hours, vec!["00", "23"]);
}
