//! Report Module Tests
//!
//! Validates snapshot intake and document rendering.
//!
//! ## Test Scopes
//! - **Snapshot**: Data-URL handling, base64 and PNG validation.
//! - **Rendering**: PDF output with and without a chart, empty windows,
//!   long-table pagination.
//! - **Handler**: Response headers and the table-only degradation path.

#[cfg(test)]
mod tests {
    use crate::errors::PortalError;
    use crate::logbook::store::LogBook;
    use crate::report::handlers::handle_report;
    use crate::report::pdf::render_report;
    use crate::report::snapshot::decode_snapshot;
    use crate::report::types::ReportRequest;
    use crate::trending::types::{Timeframe, TrendingRecord};
    use axum::http::header;
    use axum::{Extension, Json};
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use chrono::Utc;
    use printpdf::image_crate;
    use std::io::Cursor;
    use std::sync::Arc;

    /// Builds a real PNG in memory so snapshot tests never depend on
    /// hand-written base64 blobs.
    fn png_fixture(width: u32, height: u32) -> Vec<u8> {
        let pixels =
            image_crate::RgbImage::from_pixel(width, height, image_crate::Rgb([230, 120, 30]));
        let mut bytes = Vec::new();
        image_crate::DynamicImage::ImageRgb8(pixels)
            .write_to(&mut Cursor::new(&mut bytes), image_crate::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn sample_records(n: usize) -> Vec<TrendingRecord> {
        (0..n)
            .map(|i| TrendingRecord {
                keyword: format!("keyword {}", i),
                count: (n - i) as u64,
            })
            .collect()
    }

    // ============================================================
    // SNAPSHOT TESTS
    // ============================================================

    #[test]
    fn test_decode_snapshot_data_url() {
        let png = png_fixture(40, 20);
        let raw = format!("data:image/png;base64,{}", STANDARD.encode(&png));

        let snapshot = decode_snapshot(&raw).expect("decode failed");

        assert_eq!(snapshot.width, 40);
        assert_eq!(snapshot.height, 20);
        assert_eq!(snapshot.png_bytes, png);
    }

    #[test]
    fn test_decode_snapshot_bare_base64() {
        let png = png_fixture(8, 8);
        let raw = STANDARD.encode(&png);

        let snapshot = decode_snapshot(&raw).expect("decode failed");

        assert_eq!(snapshot.width, 8);
        assert_eq!(snapshot.height, 8);
    }

    #[test]
    fn test_decode_snapshot_rejects_invalid_base64() {
        assert!(decode_snapshot("data:image/png;base64,!!!not-base64!!!").is_err());
    }

    #[test]
    fn test_decode_snapshot_rejects_non_png_payload() {
        let raw = STANDARD.encode(b"plain text, definitely not an image");
        assert!(decode_snapshot(&raw).is_err());
    }

    // ============================================================
    // RENDERING TESTS
    // ============================================================

    #[test]
    fn test_render_report_produces_pdf() {
        let png = png_fixture(40, 20);
        let snapshot = decode_snapshot(&STANDARD.encode(&png)).unwrap();

        let bytes = render_report(
            Timeframe::Month,
            &sample_records(3),
            Some(snapshot),
            Utc::now(),
        )
        .expect("render failed");

        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_render_report_without_snapshot() {
        let bytes = render_report(Timeframe::AllTime, &sample_records(5), None, Utc::now())
            .expect("render failed");

        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_render_report_with_empty_window() {
        let bytes =
            render_report(Timeframe::Year, &[], None, Utc::now()).expect("render failed");

        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_render_report_paginates_long_table() {
        // 120 rows cannot fit a single A4 column
        let bytes = render_report(Timeframe::AllTime, &sample_records(120), None, Utc::now())
            .expect("render failed");

        assert!(bytes.starts_with(b"%PDF-"));
    }

    // ============================================================
    // REQUEST TYPE TESTS
    // ============================================================

    #[test]
    fn test_report_request_accepts_both_snapshot_spellings() {
        let camel: ReportRequest =
            serde_json::from_str(r#"{"timeframe":"month","chartImage":"abc"}"#).unwrap();
        let snake: ReportRequest =
            serde_json::from_str(r#"{"timeframe":"month","chart_image":"abc"}"#).unwrap();
        let empty: ReportRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(camel.chart_image.as_deref(), Some("abc"));
        assert_eq!(snake.chart_image.as_deref(), Some("abc"));
        assert!(empty.timeframe.is_none());
        assert!(empty.chart_image.is_none());
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_report_handler_returns_pdf_attachment() {
        let logbook = Arc::new(LogBook::new());
        logbook.record("quantum", true, Some("physics".to_string()));
        logbook.record("quantum", false, Some("physics".to_string()));

        let png = png_fixture(40, 20);
        let response = handle_report(
            Extension(logbook),
            Json(ReportRequest {
                timeframe: Some("month".to_string()),
                chart_image: Some(format!("data:image/png;base64,{}", STANDARD.encode(&png))),
            }),
        )
        .await
        .expect("report failed");

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.contains("trending_report_month.pdf"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_report_handler_degrades_on_garbage_snapshot() {
        let logbook = Arc::new(LogBook::new());
        logbook.record("quantum", false, None);

        let response = handle_report(
            Extension(logbook),
            Json(ReportRequest {
                timeframe: None,
                chart_image: Some("not a chart at all".to_string()),
            }),
        )
        .await
        .expect("report failed");

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_report_handler_rejects_unknown_timeframe() {
        let logbook = Arc::new(LogBook::new());

        let result = handle_report(
            Extension(logbook),
            Json(ReportRequest {
                timeframe: Some("fortnight".to_string()),
                chart_image: None,
            }),
        )
        .await;

        assert!(matches!(result, Err(PortalError::Validation(_))));
    }
}
