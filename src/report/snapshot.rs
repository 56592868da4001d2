//! Chart Snapshot Intake
//!
//! Decodes the client-supplied chart image into validated PNG bytes before
//! the renderer touches it. Rejections here are soft: the report handler logs
//! them and produces a table-only document.

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use printpdf::image_crate::ImageDecoder;
use printpdf::image_crate::codecs::png::PngDecoder;
use regex::Regex;
use std::io::Cursor;

/// A decoded chart image ready for embedding.
pub struct ChartSnapshot {
    pub png_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Accepts either a bare base64 payload or a `data:image/png;base64,...` URL,
/// the form a canvas export produces. The payload must decode to a real PNG
/// with non-zero dimensions.
pub fn decode_snapshot(raw: &str) -> Result<ChartSnapshot> {
    let trimmed = raw.trim();

    let re = Regex::new(r"^data:image/[a-zA-Z0-9.+-]+;base64,").unwrap();
    let payload = match re.find(trimmed) {
        Some(prefix) => &trimmed[prefix.end()..],
        None => trimmed,
    };

    let png_bytes = STANDARD
        .decode(payload)
        .context("chart snapshot is not valid base64")?;

    let decoder = PngDecoder::new(Cursor::new(png_bytes.as_slice()))
        .context("chart snapshot is not a PNG image")?;
    let (width, height) = decoder.dimensions();
    if width == 0 || height == 0 {
        anyhow::bail!("chart snapshot has zero dimensions");
    }

    Ok(ChartSnapshot {
        png_bytes,
        width,
        height,
    })
}
