//! Box-plot rendering with plotters.
//!
//! Each figure is drawn into an in-memory RGB8 buffer so the PDF layer
//! can embed it without touching the filesystem.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::dataset::{PriceGroup, ReportDataset};
use crate::ReportError;

const CHART_WIDTH: u32 = 1280;
const CHART_HEIGHT: u32 = 720;
const GRID_COLUMNS: usize = 3;
const GRID_ROW_HEIGHT: u32 = 380;

/// Chart rendered into a raw RGB8 buffer, ready for PDF embedding.
#[derive(Debug, Clone)]
pub struct ChartImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

/// Overall price distribution, captioned with the covered date range.
pub fn overall_boxplot(dataset: &ReportDataset) -> Result<ChartImage, ReportError> {
    let (start, end) = dataset.date_range();
    let caption = format!("Tibber hourly prices ({start} to {end})");
    let group = PriceGroup {
        label: String::from("total"),
        values: dataset.totals(),
    };

    let (width, height) = (CHART_WIDTH, 480);
    let mut rgb = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ReportError::Chart(format!("failed to fill canvas: {}", e)))?;

        draw_horizontal_boxplots(&root, &caption, 28, "Price", std::slice::from_ref(&group))?;

        root.present()
            .map_err(|e| ReportError::Chart(format!("failed to render chart: {}", e)))?;
    }

    Ok(ChartImage { width, height, rgb })
}

/// One horizontal box per calendar date, earliest at the top.
pub fn boxplot_per_date(dataset: &ReportDataset) -> Result<ChartImage, ReportError> {
    let mut groups = dataset.by_date();
    // Segmented axes grow bottom-up; reversing puts the earliest date on top.
    groups.reverse();

    let width = CHART_WIDTH;
    let height = (200 + 28 * groups.len() as u32).max(420);
    let mut rgb = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ReportError::Chart(format!("failed to fill canvas: {}", e)))?;

        draw_horizontal_boxplots(&root, "Tibber hourly prices by date", 28, "Price", &groups)?;

        root.present()
            .map_err(|e| ReportError::Chart(format!("failed to render chart: {}", e)))?;
    }

    Ok(ChartImage { width, height, rgb })
}

/// One vertical box per ISO week.
pub fn boxplot_per_week(dataset: &ReportDataset) -> Result<ChartImage, ReportError> {
    vertical_chart(
        "Tibber hourly prices by week of the year",
        "Week of the Year",
        &dataset.by_week(),
    )
}

/// One vertical box per day of the week, Monday first.
pub fn boxplot_per_weekday(dataset: &ReportDataset) -> Result<ChartImage, ReportError> {
    vertical_chart(
        "Tibber hourly prices by day of the week",
        "Day of the Week",
        &dataset.by_weekday(),
    )
}

/// One vertical box per hour of the day.
pub fn boxplot_per_hour(dataset: &ReportDataset) -> Result<ChartImage, ReportError> {
    vertical_chart(
        "Tibber hourly prices by hour of the day",
        "hour",
        &dataset.by_hour(),
    )
}

/// Grid of per-hour box plots, one cell per ISO week.
pub fn boxplot_per_hour_by_week(dataset: &ReportDataset) -> Result<ChartImage, ReportError> {
    let weeks = dataset.by_hour_per_week();
    let rows = weeks.len().div_ceil(GRID_COLUMNS);

    let width = CHART_WIDTH;
    let height = (rows as u32 * GRID_ROW_HEIGHT).max(420);
    let mut rgb = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ReportError::Chart(format!("failed to fill canvas: {}", e)))?;

        let titled = root
            .titled(
                "Tibber hourly prices by hour of the day, grouped by week",
                ("sans-serif", 28),
            )
            .map_err(|e| ReportError::Chart(format!("failed to draw title: {}", e)))?;

        // Unused trailing cells stay blank.
        let cells = titled.split_evenly((rows, GRID_COLUMNS));
        for ((label, groups), cell) in weeks.iter().zip(cells.iter()) {
            draw_vertical_boxplots(cell, label, 20, "hour", groups)?;
        }

        titled
            .present()
            .map_err(|e| ReportError::Chart(format!("failed to render chart: {}", e)))?;
    }

    Ok(ChartImage { width, height, rgb })
}

fn vertical_chart(
    caption: &str,
    x_desc: &str,
    groups: &[PriceGroup],
) -> Result<ChartImage, ReportError> {
    let (width, height) = (CHART_WIDTH, CHART_HEIGHT);
    let mut rgb = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ReportError::Chart(format!("failed to fill canvas: {}", e)))?;

        draw_vertical_boxplots(&root, caption, 28, x_desc, groups)?;

        root.present()
            .map_err(|e| ReportError::Chart(format!("failed to render chart: {}", e)))?;
    }

    Ok(ChartImage { width, height, rgb })
}

fn draw_vertical_boxplots(
    area: &DrawingArea<BitMapBackend, Shift>,
    caption: &str,
    caption_size: i32,
    x_desc: &str,
    groups: &[PriceGroup],
) -> Result<(), ReportError> {
    let labels: Vec<String> = groups.iter().map(|g| g.label.clone()).collect();
    let quartiles: Vec<Quartiles> = groups.iter().map(|g| Quartiles::new(&g.values)).collect();
    let (lo, hi) = value_bounds(&quartiles);

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", caption_size))
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(labels[..].into_segmented(), lo..hi)
        .map_err(|e| ReportError::Chart(format!("failed to build chart: {}", e)))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc("Price")
        .draw()
        .map_err(|e| ReportError::Chart(format!("failed to draw mesh: {}", e)))?;

    chart
        .draw_series(labels.iter().zip(quartiles.iter()).map(|(label, quartiles)| {
            Boxplot::new_vertical(SegmentValue::CenterOf(label), quartiles).width(18)
        }))
        .map_err(|e| ReportError::Chart(format!("failed to draw series: {}", e)))?;

    Ok(())
}

fn draw_horizontal_boxplots(
    area: &DrawingArea<BitMapBackend, Shift>,
    caption: &str,
    caption_size: i32,
    x_desc: &str,
    groups: &[PriceGroup],
) -> Result<(), ReportError> {
    let labels: Vec<String> = groups.iter().map(|g| g.label.clone()).collect();
    let quartiles: Vec<Quartiles> = groups.iter().map(|g| Quartiles::new(&g.values)).collect();
    let (lo, hi) = value_bounds(&quartiles);

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", caption_size))
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(110)
        .build_cartesian_2d(lo..hi, labels[..].into_segmented())
        .map_err(|e| ReportError::Chart(format!("failed to build chart: {}", e)))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc(x_desc)
        .draw()
        .map_err(|e| ReportError::Chart(format!("failed to draw mesh: {}", e)))?;

    chart
        .draw_series(labels.iter().zip(quartiles.iter()).map(|(label, quartiles)| {
            Boxplot::new_horizontal(SegmentValue::CenterOf(label), quartiles).width(14)
        }))
        .map_err(|e| ReportError::Chart(format!("failed to draw series: {}", e)))?;

    Ok(())
}

/// Padded bounds over every whisker of every group.
fn value_bounds(quartiles: &[Quartiles]) -> (f32, f32) {
    let mut lo = f32::INFINITY;
    let mut hi = f32::NEG_INFINITY;
    for q in quartiles {
        let values = q.values();
        lo = lo.min(values[0]);
        hi = hi.max(values[4]);
    }

    let pad = ((hi - lo) * 0.1).max(0.01);
    (lo - pad, hi + pad)
}
