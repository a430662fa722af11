//! Configuration structures for the extraction service.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::DocsiftError;

/// Main configuration for docsift.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsiftConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,

    /// OCR provider configuration.
    pub ocr: OcrConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,

    /// Port to listen on.
    pub port: u16,

    /// Maximum accepted upload size in bytes.
    pub max_upload_bytes: usize,

    /// Allow requests from any origin.
    pub permissive_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_upload_bytes: 25 * 1024 * 1024,
            permissive_cors: true,
        }
    }
}

/// OCR provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Load the pure-onnx-ocr models at startup.
    pub enable_primary: bool,

    /// Directory containing `det.onnx`, `latin_rec.onnx` and `latin_dict.txt`.
    pub model_dir: PathBuf,

    /// Fall back to the tesseract CLI when the primary engine is missing.
    pub enable_fallback: bool,

    /// Tesseract executable name or path.
    pub tesseract_binary: String,

    /// Tesseract language code.
    pub language: String,

    /// Keep `[UNK]` tokens from the recognizer instead of blanking them.
    pub keep_unk: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enable_primary: true,
            model_dir: PathBuf::from("models"),
            enable_fallback: true,
            tesseract_binary: "tesseract".to_string(),
            language: "eng".to_string(),
            keep_unk: false,
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Try the empty password on encrypted PDFs.
    pub decrypt_empty_password: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            decrypt_empty_password: true,
        }
    }
}

impl DocsiftConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, DocsiftError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| DocsiftError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), DocsiftError> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| DocsiftError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `API_PORT` from the environment, if it holds a valid port.
    pub fn apply_env(&mut self) -> Result<(), DocsiftError> {
        if let Ok(raw) = std::env::var("API_PORT") {
            self.server.port = raw
                .trim()
                .parse()
                .map_err(|_| DocsiftError::Config(format!("invalid API_PORT: {}", raw)))?;
        }
        Ok(())
    }
}
