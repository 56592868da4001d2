//! PDF Layout and Rendering
//!
//! Builds the report document: an A4 page with a title block, the embedded
//! chart snapshot when one survived decoding, and the keyword/count table in
//! exactly the aggregator's order, flowing onto continuation pages as needed.

use super::snapshot::ChartSnapshot;
use crate::trending::types::{Timeframe, TrendingRecord};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{
    BuiltinFont, Image, ImageTransform, Mm, PdfDocument, PdfLayerReference,
};
use std::io::Cursor;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const LINE_STEP: f32 = 7.0;

const TITLE_SIZE: f32 = 20.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 11.0;
const META_SIZE: f32 = 10.0;

/// Renders the full report document and returns its bytes.
///
/// A snapshot that fails to embed is skipped with a warning rather than
/// failing the document; only assembly itself is a hard error.
pub fn render_report(
    timeframe: Timeframe,
    records: &[TrendingRecord],
    snapshot: Option<ChartSnapshot>,
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Trending Topics Report",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );

    let heading_font = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let body_font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    {
        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        let mut cursor = PAGE_HEIGHT - MARGIN;

        layer.use_text(
            "Trending Topics Report",
            TITLE_SIZE,
            Mm(MARGIN),
            Mm(cursor),
            &heading_font,
        );
        cursor -= 10.0;
        layer.use_text(
            format!("Timeframe: {}", timeframe.label()),
            HEADING_SIZE,
            Mm(MARGIN),
            Mm(cursor),
            &body_font,
        );
        cursor -= 6.0;
        layer.use_text(
            format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M UTC")),
            META_SIZE,
            Mm(MARGIN),
            Mm(cursor),
            &body_font,
        );
        cursor -= 12.0;

        if let Some(snapshot) = &snapshot {
            match embed_chart(&layer, snapshot, cursor) {
                Ok(next_cursor) => cursor = next_cursor,
                Err(e) => tracing::warn!("Skipping chart embed: {:#}", e),
            }
        }

        layer.use_text(
            "Keywords by search count",
            HEADING_SIZE,
            Mm(MARGIN),
            Mm(cursor),
            &heading_font,
        );
        cursor -= LINE_STEP;

        if records.is_empty() {
            layer.use_text(
                "No searches recorded for this timeframe.",
                BODY_SIZE,
                Mm(MARGIN),
                Mm(cursor),
                &body_font,
            );
        } else {
            for record in records {
                if cursor < MARGIN {
                    let (page, page_layer) =
                        doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                    layer = doc.get_page(page).get_layer(page_layer);
                    cursor = PAGE_HEIGHT - MARGIN;
                }

                layer.use_text(
                    format!("{} - {} searches", record.keyword, record.count),
                    BODY_SIZE,
                    Mm(MARGIN),
                    Mm(cursor),
                    &body_font,
                );
                cursor -= LINE_STEP;
            }
        }
    }

    doc.save_to_bytes()
        .context("report document serialization failed")
}

/// Draws the snapshot under the title block, scaled to fit the content width
/// and the space left on the page. Returns the cursor position below the
/// image.
fn embed_chart(layer: &PdfLayerReference, snapshot: &ChartSnapshot, cursor: f32) -> Result<f32> {
    let decoder = PngDecoder::new(Cursor::new(snapshot.png_bytes.as_slice()))
        .context("chart snapshot failed to decode")?;
    let image = Image::try_from(decoder).context("chart snapshot could not be embedded")?;

    let natural_width = mm_from_px(snapshot.width);
    let natural_height = mm_from_px(snapshot.height);
    let max_width = PAGE_WIDTH - 2.0 * MARGIN;
    let available_height = cursor - MARGIN;
    let scale = (max_width / natural_width).min(available_height / natural_height);

    let y = cursor - natural_height * scale;
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(MARGIN)),
            translate_y: Some(Mm(y)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            ..Default::default()
        },
    );

    Ok(y - 10.0)
}

/// Embedded images render at 300 DPI unless the transform overrides it.
fn mm_from_px(px: u32) -> f32 {
    px as f32 * 25.4 / 300.0
}
