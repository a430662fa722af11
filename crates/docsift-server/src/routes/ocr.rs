//! Upload routes: one per document kind, all answering with the envelope.

use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, Multipart, State},
    routing::post,
    Json, Router,
};
use docsift_core::documents::validate_pdf_content_type;
use docsift_core::DocumentKind;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Multipart field carrying the document.
const FILE_FIELD: &str = "file";

/// Create the OCR router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/invoice", post(invoice))
        .route("/receipt", post(receipt))
        .route("/barcode", post(barcode))
        .route("/product", post(product))
        .route("/text", post(text))
        .route("/pdf", post(pdf))
}

async fn invoice(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Json<ApiResponse> {
    Json(handle_upload(state, multipart, DocumentKind::Invoice).await)
}

async fn receipt(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Json<ApiResponse> {
    Json(handle_upload(state, multipart, DocumentKind::Receipt).await)
}

async fn barcode(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Json<ApiResponse> {
    Json(handle_upload(state, multipart, DocumentKind::Barcode).await)
}

async fn product(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Json<ApiResponse> {
    Json(handle_upload(state, multipart, DocumentKind::Product).await)
}

async fn text(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Json<ApiResponse> {
    Json(handle_upload(state, multipart, DocumentKind::Text).await)
}

async fn pdf(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Json<ApiResponse> {
    Json(handle_upload(state, multipart, DocumentKind::Pdf).await)
}

/// An uploaded file part.
struct Upload {
    content_type: Option<String>,
    data: Bytes,
}

async fn handle_upload(
    state: AppState,
    multipart: Result<Multipart, MultipartRejection>,
    kind: DocumentKind,
) -> ApiResponse {
    let upload = match multipart {
        Ok(mut multipart) => match read_file_field(&mut multipart).await {
            Ok(Some(upload)) => upload,
            Ok(None) => {
                tracing::warn!("No file field found in {} upload", kind);
                return ApiResponse::failure("No file uploaded");
            }
            Err(message) => {
                tracing::error!("Failed to read {} upload: {}", kind, message);
                return ApiResponse::failure(message);
            }
        },
        Err(rejection) => {
            tracing::warn!("Rejected {} upload: {}", kind, rejection);
            return ApiResponse::failure("No file uploaded");
        }
    };

    if kind == DocumentKind::Pdf {
        if let Err(e) = validate_pdf_content_type(upload.content_type.as_deref()) {
            return ApiResponse::failure(e.to_string());
        }
    }

    tracing::debug!(
        "Processing {} upload: {} bytes, content_type={:?}",
        kind,
        upload.data.len(),
        upload.content_type
    );

    // OCR and PDF parsing are CPU-bound
    let result =
        tokio::task::spawn_blocking(move || state.processor().process(kind, &upload.data)).await;

    match result {
        Ok(Ok(data)) => ApiResponse::success(data),
        Ok(Err(e)) => {
            tracing::error!("{} extraction failed: {}", kind, e);
            ApiResponse::failure(e.to_string())
        }
        Err(e) => {
            tracing::error!("{} extraction task failed: {}", kind, e);
            ApiResponse::failure(e.to_string())
        }
    }
}

/// Find the `file` part, skipping any other fields.
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<Upload>, String> {
    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(|s| s.to_string());
        let data = field.bytes().await.map_err(|e| e.to_string())?;
        return Ok(Some(Upload { content_type, data }));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tower::ServiceExt;

    use docsift_core::DocsiftConfig;

    use crate::routes::testing::{
        app_with_config, app_with_text, app_without_ocr, envelope, missing_font_pdf,
        multipart_request, png_bytes, text_pdf,
    };

    const INVOICE_TEXT: &str = "Acme Supplies Ltd\nInvoice #4521\nDate: 03/15/2024\n\
                                Total: $1,234.56\n3 Widget Pro $9.99";

    #[tokio::test]
    async fn test_invoice_upload() {
        let request = multipart_request("/ocr/invoice", "file", "image/png", &png_bytes());
        let response = app_with_text(INVOICE_TEXT).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let envelope = envelope(response).await;
        assert!(envelope.success);
        assert_eq!(envelope.error, None);

        let data = envelope.data.unwrap();
        assert_eq!(data["vendor_name"], json!("Acme Supplies Ltd"));
        assert_eq!(data["invoice_number"], json!("4521"));
        assert_eq!(data["invoice_date"], json!("2024-03-15T00:00:00"));
        assert_eq!(data["total_amount"], json!(1234.56));
        assert_eq!(
            data["items"],
            json!([{"quantity": 3, "description": "Widget Pro", "price": 9.99}])
        );
        assert_eq!(data["confidence"], json!("medium"));
    }

    #[tokio::test]
    async fn test_receipt_upload() {
        let text = "CORNER CAFE\nReceipt #R7781\nTotal $4.50\nPaid with cash";
        let request = multipart_request("/ocr/receipt", "file", "image/png", &png_bytes());
        let envelope = envelope(app_with_text(text).oneshot(request).await.unwrap()).await;

        let data = envelope.data.unwrap();
        assert_eq!(data["vendor"], json!("CORNER CAFE"));
        assert_eq!(data["receipt_number"], json!("R7781"));
        assert_eq!(data["amount"], json!(4.5));
        assert_eq!(data["payment_method"], json!("cash"));
    }

    #[tokio::test]
    async fn test_text_upload() {
        let request = multipart_request("/ocr/text", "file", "image/png", &png_bytes());
        let envelope = envelope(app_with_text("hello\nworld").oneshot(request).await.unwrap()).await;

        assert_eq!(envelope.data, Some(json!({"text": "hello\nworld"})));
    }

    #[tokio::test]
    async fn test_missing_engine_is_reported_in_envelope() {
        let request = multipart_request("/ocr/product", "file", "image/png", &png_bytes());
        let response = app_without_ocr().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let envelope = envelope(response).await;
        assert!(!envelope.success);
        assert_eq!(envelope.data, None);
        assert!(envelope.error.unwrap().contains("no OCR engine available"));
    }

    #[tokio::test]
    async fn test_undecodable_image_is_reported_in_envelope() {
        let request = multipart_request("/ocr/invoice", "file", "image/png", b"not an image");
        let envelope = envelope(app_with_text("x").oneshot(request).await.unwrap()).await;

        assert!(!envelope.success);
        assert!(envelope.error.is_some());
    }

    #[tokio::test]
    async fn test_missing_file_field() {
        let request = multipart_request("/ocr/text", "document", "image/png", &png_bytes());
        let envelope = envelope(app_with_text("x").oneshot(request).await.unwrap()).await;

        assert!(!envelope.success);
        assert_eq!(envelope.error.as_deref(), Some("No file uploaded"));
    }

    #[tokio::test]
    async fn test_non_multipart_body() {
        let request = Request::post("/ocr/text")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let response = app_with_text("x").oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let envelope = envelope(response).await;
        assert_eq!(envelope.error.as_deref(), Some("No file uploaded"));
    }

    #[tokio::test]
    async fn test_oversized_upload_is_reported_in_envelope() {
        let mut config = DocsiftConfig::default();
        config.server.max_upload_bytes = 16;

        let request = multipart_request("/ocr/text", "file", "image/png", &png_bytes());
        let response = app_with_config(config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let envelope = envelope(response).await;
        assert!(!envelope.success);
        assert_eq!(envelope.data, None);
        assert!(envelope.error.is_some());
    }

    #[tokio::test]
    async fn test_barcode_without_symbol() {
        let request = multipart_request("/ocr/barcode", "file", "image/png", &png_bytes());
        let envelope = envelope(app_without_ocr().oneshot(request).await.unwrap()).await;

        assert!(envelope.success);
        let data = envelope.data.unwrap();
        assert_eq!(data["found"], json!(false));
        assert_eq!(data["barcode_data"], json!(null));
        assert_eq!(data["barcode_type"], json!(null));
    }

    #[tokio::test]
    async fn test_pdf_requires_pdf_content_type() {
        let request = multipart_request("/ocr/pdf", "file", "image/png", &text_pdf(&["Hello"]));
        let envelope = envelope(app_without_ocr().oneshot(request).await.unwrap()).await;

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": false, "data": null, "error": "File must be a PDF"})
        );
    }

    #[tokio::test]
    async fn test_pdf_upload() {
        let request = multipart_request(
            "/ocr/pdf",
            "file",
            "application/pdf",
            &text_pdf(&["Quarterly report"]),
        );
        let envelope = envelope(app_without_ocr().oneshot(request).await.unwrap()).await;

        assert!(envelope.success);
        let data = envelope.data.unwrap();
        assert_eq!(data["document_type"], json!("pdf"));
        assert_eq!(data["page_count"], json!(1));
        assert!(data["total_text"].as_str().unwrap().contains("Quarterly report"));
    }

    #[tokio::test]
    async fn test_malformed_pdf() {
        let request = multipart_request("/ocr/pdf", "file", "application/pdf", b"%PDF-garbage");
        let envelope = envelope(app_without_ocr().oneshot(request).await.unwrap()).await;

        assert!(!envelope.success);
        assert!(envelope.error.unwrap().starts_with("PDF error"));
    }

    #[tokio::test]
    async fn test_pdf_with_unknown_font_is_reported_in_envelope() {
        let request = multipart_request(
            "/ocr/pdf",
            "file",
            "application/pdf",
            &missing_font_pdf("Hello"),
        );
        let response = app_without_ocr().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let envelope = envelope(response).await;
        assert!(!envelope.success);
        assert!(envelope.error.unwrap().starts_with("PDF error"));
    }
}
