//! Multi-page PDF assembly.
//!
//! Landscape A4: a text-only title page followed by one page per chart,
//! each chart embedded as a raw RGB image scaled to the page width.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument, Px,
};

use crate::charts::ChartImage;
use crate::ReportError;

const PAGE_WIDTH_MM: f64 = 297.0;
const PAGE_HEIGHT_MM: f64 = 210.0;
const PAGE_MARGIN_MM: f64 = 10.0;
const MM_PER_INCH: f64 = 25.4;

pub const DOCUMENT_TITLE: &str = "Visualisation of Tibber Hourly Prices";
pub const REPORT_HEADING: &str = "Tibber Hourly Electricity Prices";

/// Write the title page plus one page per chart to `path`.
pub fn write_report(path: &Path, charts: &[ChartImage]) -> Result<(), ReportError> {
    let (doc, title_page, title_layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH_MM as f32),
        Mm(PAGE_HEIGHT_MM as f32),
        "title",
    );

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;

    doc.get_page(title_page).get_layer(title_layer).use_text(
        REPORT_HEADING,
        28.0,
        Mm(70.0),
        Mm((PAGE_HEIGHT_MM / 2.0) as f32),
        &font,
    );

    for chart in charts {
        let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM as f32), Mm(PAGE_HEIGHT_MM as f32), "chart");

        let image = Image::from(ImageXObject {
            width: Px(chart.width as usize),
            height: Px(chart.height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: chart.rgb.clone(),
            image_filter: None,
            smask: None,
            clipping_bbox: None,
        });

        // Fit the chart to the page width; tall charts (per-date, week
        // grid) keep their aspect and overflow vertically rather than
        // shrink below legibility.
        let dpi = f64::from(chart.width) / ((PAGE_WIDTH_MM - 2.0 * PAGE_MARGIN_MM) / MM_PER_INCH);
        let rendered_height_mm = f64::from(chart.height) / dpi * MM_PER_INCH;
        let translate_y = ((PAGE_HEIGHT_MM - rendered_height_mm) / 2.0).max(PAGE_MARGIN_MM / 2.0);

        image.add_to_layer(
            doc.get_page(page).get_layer(layer),
            ImageTransform {
                translate_x: Some(Mm(PAGE_MARGIN_MM as f32)),
                translate_y: Some(Mm(translate_y as f32)),
                dpi: Some(dpi as f32),
                ..ImageTransform::default()
            },
        );
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ReportError::Pdf(e.to_string()))?;

    Ok(())
}
