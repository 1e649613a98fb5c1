//! # Wattbox Report
//!
//! Presentation layer over a fetched price history: buckets hourly prices
//! by calendar (date, ISO week, weekday, hour), draws one box plot per
//! bucketing with plotters, and assembles the figures into a multi-page
//! PDF.
//!
//! The fetcher's output arrives unordered with respect to presentation;
//! [`ReportDataset`] owns the re-ordering and bucketing, [`charts`] the
//! drawing, and [`pdf`] the page assembly. [`render_pdf`] wires the fixed
//! figure sequence together.

pub mod charts;
pub mod dataset;
pub mod error;
pub mod pdf;
pub mod report;

pub use charts::ChartImage;
pub use dataset::{PriceGroup, ReportDataset};
pub use error::ReportError;
pub use pdf::{DOCUMENT_TITLE, REPORT_HEADING};
pub use report::render_pdf;
