//! Fallback OCR engine: the `tesseract` command-line tool.

use std::process::Command;

use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::error::OcrError;

use super::{ProviderKind, TextRecognizer};

/// Tesseract OCR provider.
pub struct TesseractProvider {
    binary: String,
    language: String,
}

impl TesseractProvider {
    pub fn new(binary: &str, language: &str) -> Self {
        Self {
            binary: binary.to_string(),
            language: language.to_string(),
        }
    }
}

impl TextRecognizer for TesseractProvider {
    fn name(&self) -> &str {
        "tesseract"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Fallback
    }

    fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let temp_dir = tempfile::tempdir()
            .map_err(|e| OcrError::Recognition(format!("failed to create temp dir: {}", e)))?;
        let input_path = temp_dir.path().join("page.png");

        image
            .save_with_format(&input_path, ImageFormat::Png)
            .map_err(|e| OcrError::InvalidImage(e.to_string()))?;

        let output = Command::new(&self.binary)
            .arg(&input_path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|e| OcrError::Recognition(format!("failed to run tesseract: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Recognition(format!("tesseract failed: {}", stderr.trim())));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("tesseract returned {} bytes of text", text.len());

        Ok(text)
    }
}
