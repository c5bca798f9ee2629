// Handlers for the three public endpoints

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct HomeResponse {
    pub message: &'static str,
    pub environment: String,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct InfoResponse {
    pub app: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: EndpointList,
}

#[derive(Serialize)]
pub struct EndpointList {
    pub health: &'static str,
    pub home: &'static str,
    pub info: &'static str,
}

/// Health check endpoint with version information
#[instrument(skip(state, _body))]
pub async fn health_handler(
    State(state): State<AppState>,
    _body: Bytes, // Forces body reading and triggers size limits
) -> (StatusCode, Json<HealthResponse>) {
    info!("Health endpoint called");

    let body: HealthResponse = HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        version: state.environment.version.to_string(),
    };

    (StatusCode::OK, Json(body))
}

/// Home endpoint reporting the configured environment
#[instrument(skip(state, _body))]
pub async fn home_handler(
    State(state): State<AppState>,
    _body: Bytes,
) -> (StatusCode, Json<HomeResponse>) {
    info!("Home endpoint called");

    let body: HomeResponse = HomeResponse {
        message: "Hello from Docker container!",
        environment: state.environment.environment.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(body))
}

/// Fixed descriptive object listing the available endpoints
#[instrument(skip(_body))]
pub async fn info_handler(_body: Bytes) -> (StatusCode, Json<InfoResponse>) {
    info!("Info endpoint called");

    let body: InfoResponse = InfoResponse {
        app: "Docker Build Demo",
        version: "1.0.0",
        description: "A sample app for Docker build and ACR deployment",
        endpoints: EndpointList {
            health: "/health",
            home: "/",
            info: "/api/info",
        },
    };

    (StatusCode::OK, Json(body))
}
