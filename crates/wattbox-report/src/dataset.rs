//! Calendar bucketing of a fetched price history.
//!
//! The fetcher hands over nodes in fetch order (newest page first); this
//! module sorts them and derives the calendar buckets the charts need.
//! Buckets use each timestamp's own offset: the provider already reports
//! the home's local time, so no timezone database is involved.

use std::collections::BTreeMap;

use time::Date;
use wattbox_core::{PriceHistory, PricePoint};

use crate::ReportError;

/// Indexed by `Weekday::number_days_from_monday`.
const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A labelled group of price samples, in presentation order.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceGroup {
    pub label: String,
    pub values: Vec<f64>,
}

/// Price history prepared for charting: non-empty and sorted by instant.
#[derive(Debug, Clone)]
pub struct ReportDataset {
    points: Vec<PricePoint>,
}

impl ReportDataset {
    pub fn from_history(history: &PriceHistory) -> Result<Self, ReportError> {
        if history.is_empty() {
            return Err(ReportError::EmptyHistory);
        }

        let mut points = history.points.clone();
        points.sort_by(|a, b| a.starts_at.cmp(&b.starts_at));

        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All price samples, oldest first.
    pub fn totals(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.total).collect()
    }

    /// First and last calendar dates covered.
    pub fn date_range(&self) -> (Date, Date) {
        (
            self.points[0].starts_at.date(),
            self.points[self.points.len() - 1].starts_at.date(),
        )
    }

    /// One group per calendar date, chronological.
    pub fn by_date(&self) -> Vec<PriceGroup> {
        let mut buckets: BTreeMap<Date, Vec<f64>> = BTreeMap::new();
        for point in &self.points {
            buckets.entry(point.starts_at.date()).or_default().push(point.total);
        }

        buckets
            .into_iter()
            .map(|(date, values)| PriceGroup {
                label: date.to_string(),
                values,
            })
            .collect()
    }

    /// One group per ISO week, labelled `YYYY-Wnn`, chronological.
    pub fn by_week(&self) -> Vec<PriceGroup> {
        let mut buckets: BTreeMap<(i32, u8), Vec<f64>> = BTreeMap::new();
        for point in &self.points {
            buckets
                .entry(point.starts_at.iso_week())
                .or_default()
                .push(point.total);
        }

        buckets
            .into_iter()
            .map(|((year, week), values)| PriceGroup {
                label: week_label(year, week),
                values,
            })
            .collect()
    }

    /// One group per weekday with data, Monday first.
    pub fn by_weekday(&self) -> Vec<PriceGroup> {
        let mut buckets: BTreeMap<u8, Vec<f64>> = BTreeMap::new();
        for point in &self.points {
            buckets
                .entry(point.starts_at.weekday().number_days_from_monday())
                .or_default()
                .push(point.total);
        }

        WEEKDAY_LABELS
            .iter()
            .enumerate()
            .filter_map(|(index, label)| {
                buckets.remove(&(index as u8)).map(|values| PriceGroup {
                    label: (*label).to_owned(),
                    values,
                })
            })
            .collect()
    }

    /// One group per hour of day with data, 00 first.
    pub fn by_hour(&self) -> Vec<PriceGroup> {
        Self::hour_groups(&self.points)
    }

    /// Per-hour groups split by ISO week, for the week-grid chart.
    pub fn by_hour_per_week(&self) -> Vec<(String, Vec<PriceGroup>)> {
        let mut weeks: BTreeMap<(i32, u8), Vec<&PricePoint>> = BTreeMap::new();
        for point in &self.points {
            weeks.entry(point.starts_at.iso_week()).or_default().push(point);
        }

        weeks
            .into_iter()
            .map(|((year, week), points)| {
                let owned: Vec<PricePoint> = points.into_iter().cloned().collect();
                (week_label(year, week), Self::hour_groups(&owned))
            })
            .collect()
    }

    fn hour_groups(points: &[PricePoint]) -> Vec<PriceGroup> {
        let mut buckets: BTreeMap<u8, Vec<f64>> = BTreeMap::new();
        for point in points {
            buckets.entry(point.starts_at.hour()).or_default().push(point.total);
        }

        buckets
            .into_iter()
            .map(|(hour, values)| PriceGroup {
                label: format!("{hour:02}"),
                values,
            })
            .collect()
    }
}

fn week_label(year: i32, week: u8) -> String {
    format!("{year}-W{week:02}")
}
