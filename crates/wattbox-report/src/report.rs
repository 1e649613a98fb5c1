//! Report orchestration: the fixed figure sequence.

use std::path::Path;

use tracing::debug;
use wattbox_core::PriceHistory;

use crate::{charts, pdf, ReportDataset, ReportError};

/// Render the full box-plot report for `history` into a PDF at `output`.
///
/// Page order: title, overall distribution, per date, per week, per
/// weekday, per hour, per hour grouped by week.
pub fn render_pdf(history: &PriceHistory, output: &Path) -> Result<(), ReportError> {
    let dataset = ReportDataset::from_history(history)?;
    debug!(points = dataset.len(), "rendering report charts");

    let figures = vec![
        charts::overall_boxplot(&dataset)?,
        charts::boxplot_per_date(&dataset)?,
        charts::boxplot_per_week(&dataset)?,
        charts::boxplot_per_weekday(&dataset)?,
        charts::boxplot_per_hour(&dataset)?,
        charts::boxplot_per_hour_by_week(&dataset)?,
    ];

    pdf::write_report(output, &figures)
}
