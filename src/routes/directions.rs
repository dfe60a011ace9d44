use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::models::{
    DirectionSearchRequest, DirectionSearchResponse, DirectionView, ErrorResponse,
    HealthResponse, InputLocation,
};
use crate::services::{DirectionService, PharmacySearch};

/// Application state shared across all handlers
pub struct AppState<S> {
    pub directions: Arc<DirectionService<S>>,
}

impl<S> AppState<S> {
    pub fn new(directions: DirectionService<S>) -> Self {
        Self {
            directions: Arc::new(directions),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            directions: Arc::clone(&self.directions),
        }
    }
}

/// Configure all direction-related routes
pub fn configure<S: PharmacySearch + 'static>(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check::<S>))
        .route("/directions/search", web::post().to(search_directions::<S>));
}

/// Health check endpoint
async fn health_check<S: PharmacySearch + 'static>(
    state: web::Data<AppState<S>>,
) -> impl Responder {
    let healthy = state.directions.search().is_healthy().await;

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Nearest pharmacy search endpoint
///
/// POST /api/v1/directions/search
///
/// Request body:
/// ```json
/// {
///   "addressName": "string",
///   "latitude": 37.5,
///   "longitude": 127.0
/// }
/// ```
async fn search_directions<S: PharmacySearch + 'static>(
    state: web::Data<AppState<S>>,
    req: web::Json<DirectionSearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for direction search: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let input = InputLocation::from(req.into_inner());

    tracing::info!(
        "Searching pharmacies near {} ({}, {})",
        input.address_name,
        input.latitude,
        input.longitude
    );

    match state.directions.build_direction_list(Some(&input)).await {
        Ok(directions) => {
            let directions: Vec<DirectionView> =
                directions.into_iter().map(DirectionView::from).collect();

            HttpResponse::Ok().json(DirectionSearchResponse {
                total_results: directions.len(),
                directions,
            })
        }
        Err(e) => {
            tracing::error!("Failed to search pharmacies near {}: {}", input.address_name, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to search pharmacies".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
