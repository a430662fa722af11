//! Application state shared by every request.

use std::sync::Arc;

use docsift_core::{DocsiftConfig, DocumentProcessor};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DocsiftConfig,
    processor: DocumentProcessor,
}

impl AppState {
    /// Wrap an already-initialized processor. The OCR engine inside it is
    /// read-only from here on.
    pub fn new(config: DocsiftConfig, processor: DocumentProcessor) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, processor }),
        }
    }

    pub fn config(&self) -> &DocsiftConfig {
        &self.inner.config
    }

    pub fn processor(&self) -> &DocumentProcessor {
        &self.inner.processor
    }
}
