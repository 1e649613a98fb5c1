use serde::{Deserialize, Serialize};

use crate::{PriceTimestamp, ValidationError};

/// One hourly price node as reported by the provider.
///
/// `total` may be negative; spot prices go below zero in low-demand hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(rename = "startsAt")]
    pub starts_at: PriceTimestamp,
    pub total: f64,
}

impl PricePoint {
    pub fn new(starts_at: PriceTimestamp, total: f64) -> Result<Self, ValidationError> {
        if !total.is_finite() {
            return Err(ValidationError::NonFiniteTotal);
        }

        Ok(Self { starts_at, total })
    }
}

/// Pagination metadata for one fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
}

/// One API response's worth of price nodes plus pagination metadata.
/// Lives for a single loop iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub nodes: Vec<PricePoint>,
    pub page_info: PageInfo,
}

/// Accumulated price history across all fetched pages, in fetch order
/// (page 1's nodes, then page 2's, ...). Callers re-order as needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub points: Vec<PricePoint>,
}

impl PriceHistory {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest and latest timestamps in the history, by instant.
    pub fn span(&self) -> Option<(PriceTimestamp, PriceTimestamp)> {
        let earliest = self.points.iter().map(|p| p.starts_at).min()?;
        let latest = self.points.iter().map(|p| p.starts_at).max()?;
        Some((earliest, latest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(rfc3339: &str, total: f64) -> PricePoint {
        PricePoint {
            starts_at: PriceTimestamp::parse(rfc3339).expect("timestamp"),
            total,
        }
    }

    #[test]
    fn rejects_non_finite_total() {
        let ts = PriceTimestamp::parse("2024-01-01T00:00:00Z").expect("timestamp");
        let err = PricePoint::new(ts, f64::NAN).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteTotal));
    }

    #[test]
    fn allows_negative_total() {
        let ts = PriceTimestamp::parse("2024-01-01T00:00:00Z").expect("timestamp");
        let node = PricePoint::new(ts, -0.012).expect("negative prices are real");
        assert_eq!(node.total, -0.012);
    }

    #[test]
    fn span_ignores_fetch_order() {
        let history = PriceHistory::new(vec![
            point("2024-01-03T00:00:00+01:00", 0.3),
            point("2024-01-01T00:00:00+01:00", 0.1),
            point("2024-01-02T00:00:00+01:00", 0.2),
        ]);

        let (earliest, latest) = history.span().expect("non-empty");
        assert_eq!(earliest.format_rfc3339(), "2024-01-01T00:00:00+01:00");
        assert_eq!(latest.format_rfc3339(), "2024-01-03T00:00:00+01:00");
    }

    #[test]
    fn decodes_provider_field_names() {
        let node: PricePoint =
            serde_json::from_str(r#"{"startsAt": "2023-09-15T12:00:00+00:00", "total": 0.1}"#)
                .expect("must decode");
        assert_eq!(node.total, 0.1);
        assert_eq!(node.starts_at.hour(), 12);
    }
}
