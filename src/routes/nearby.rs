use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{Coordinate, MatchError, ProximityMatcher};
use crate::models::{ErrorResponse, FindNearbyRequest, HealthResponse, NearbyResponse, SearchRequest};
use crate::services::SpatialClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: ProximityMatcher<SpatialClient>,
    pub max_radius_km: f64,
}

/// Configure all discovery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/movers/nearby", web::post().to(find_nearby));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find nearby movers endpoint
///
/// POST /api/v1/movers/nearby
///
/// Request body:
/// ```json
/// {
///   "latitude": -1.2921,
///   "longitude": 36.8219,
///   "radiusKm": 25.0,
///   "vehicleTypes": ["van"],
///   "limit": 20
/// }
/// ```
async fn find_nearby(
    state: web::Data<AppState>,
    req: web::Json<FindNearbyRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for nearby request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // The core re-validates ranges; the derive check above only exists to
    // give transport-level errors a uniform shape.
    let origin = match Coordinate::new(req.latitude, req.longitude) {
        Ok(origin) => origin,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid coordinate".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    // Cap the radius at the configured maximum to bound backend load.
    // Non-finite values fall through untouched so the core rejects them.
    let radius_km = if req.radius_km > state.max_radius_km {
        state.max_radius_km
    } else {
        req.radius_km
    };

    let search = SearchRequest {
        origin,
        radius_km,
        vehicle_types: req.vehicle_types.clone(),
    };

    tracing::info!(
        "Finding movers near {} within {}km (filters: {:?})",
        origin,
        radius_km,
        search.vehicle_types
    );

    match state.matcher.find_nearby(&search).await {
        Ok(mut matches) => {
            let total_results = matches.len();
            if let Some(limit) = req.limit {
                // Truncate after sorting so the cap respects the
                // deterministic order.
                matches.truncate(limit);
            }

            tracing::info!(
                "Returning {} of {} matches near {}",
                matches.len(),
                total_results,
                origin
            );

            HttpResponse::Ok().json(NearbyResponse {
                matches,
                total_results,
            })
        }
        Err(e @ MatchError::InvalidRequest(_)) | Err(e @ MatchError::Parse(_)) => {
            HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid request".to_string(),
                message: e.to_string(),
                status_code: 400,
            })
        }
        Err(e @ MatchError::Unavailable(_)) => {
            tracing::error!("Spatial backend unavailable: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Mover search unavailable".to_string(),
                message: e.to_string(),
                status_code: 502,
            })
        }
        Err(e @ MatchError::Cancelled) => {
            tracing::warn!("Nearby search timed out: {}", e);
            HttpResponse::GatewayTimeout().json(ErrorResponse {
                error: "Mover search timed out".to_string(),
                message: e.to_string(),
                status_code: 504,
            })
        }
    }
}
