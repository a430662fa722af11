//! Barcode reading backed by `rxing`.

use chrono::Utc;
use image::DynamicImage;
use rxing::Exceptions;
use tracing::{debug, error, info};

use crate::error::{BarcodeError, DocsiftError};
use crate::models::document::BarcodeScan;

/// Decodes the first barcode or QR code found in an image.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarcodeReader;

impl BarcodeReader {
    pub fn new() -> Self {
        Self
    }

    /// Scan encoded image bytes. Failures are reported in the result, never returned.
    pub fn read(&self, image_data: &[u8]) -> BarcodeScan {
        let decoded = image::load_from_memory(image_data)
            .map_err(DocsiftError::from)
            .and_then(|image| self.decode(&image).map_err(DocsiftError::from));

        match decoded {
            Ok(Some((data, symbology))) => {
                info!("Decoded {} barcode ({} bytes)", symbology, data.len());
                BarcodeScan::found(data, symbology, Utc::now())
            }
            Ok(None) => {
                debug!("No barcode detected");
                BarcodeScan::not_found()
            }
            Err(e) => {
                error!("Error reading barcode: {}", e);
                BarcodeScan::failed(e.to_string(), Utc::now())
            }
        }
    }

    /// Decode the first symbol in a decoded image as `(payload, symbology)`.
    pub fn decode(&self, image: &DynamicImage) -> Result<Option<(String, String)>, BarcodeError> {
        let luma = image.to_luma8();
        let (width, height) = luma.dimensions();

        match rxing::helpers::detect_multiple_in_luma(luma.into_raw(), width, height) {
            Ok(results) => Ok(results.into_iter().next().map(|result| {
                (
                    result.getText().to_string(),
                    format!("{:?}", result.getBarcodeFormat()),
                )
            })),
            Err(e) if is_nothing_found(&e) => Ok(None),
            Err(e) => Err(BarcodeError::Decode(e.to_string())),
        }
    }
}

/// Partial patterns that fail checksum or format checks count as "no barcode".
fn is_nothing_found(e: &Exceptions) -> bool {
    matches!(
        e,
        Exceptions::NotFoundException(_)
            | Exceptions::FormatException(_)
            | Exceptions::ChecksumException(_)
    )
}
