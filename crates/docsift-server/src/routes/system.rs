//! Service-level routes: banner, health and the prediction placeholder.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::state::AppState;

#[derive(Serialize)]
pub struct RootResponse {
    message: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    ocr_enabled: bool,
}

#[derive(Serialize)]
pub struct PredictionResponse {
    prediction: Option<Value>,
    confidence: u32,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Docsift document extraction API",
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        ocr_enabled: state.processor().ocr_enabled(),
    })
}

/// No model is trained yet; every input gets the same empty prediction.
pub async fn predict(Json(_input): Json<Value>) -> Json<PredictionResponse> {
    tracing::debug!("Prediction requested");
    Json(PredictionResponse {
        prediction: None,
        confidence: 0,
    })
}
