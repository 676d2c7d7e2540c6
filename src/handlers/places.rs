// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place operations
// PURPOSE: Parse requests, call services, return responses

use crate::db::PlaceRepository;
use crate::errors::PlacesError;
use crate::models::{PlaceFilter, PlaceRequest};
use crate::services::PlaceService;
use actix_web::error::{PathError, QueryPayloadError};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

/// GET /places?name=
/// List places, optionally filtered by name fragment
pub async fn list_places(
    repo: web::Data<dyn PlaceRepository>,
    query: web::Query<PlaceFilter>,
) -> Result<impl Responder, PlacesError> {
    let places = PlaceService::list_places(repo.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(places))
}

/// Parse a create/update body
/// DOCUMENTATION: An absent or blank body is an empty request, so it reaches
/// validation and is answered with per-field errors. Bytes that are not a
/// JSON object are rejected as invalid input.
fn parse_place_body(body: &web::Bytes) -> Result<PlaceRequest, PlacesError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(PlaceRequest::default());
    }

    let value: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
        log::debug!("Rejected place body: {}", e);
        PlacesError::InvalidInput(format!("Malformed JSON body: {}", e))
    })?;
    if !value.is_object() {
        return Err(PlacesError::InvalidInput(
            "Request body must be a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| PlacesError::InvalidInput(e.to_string()))
}

/// POST /places
/// Create a new place
pub async fn create_place(
    repo: web::Data<dyn PlaceRepository>,
    body: web::Bytes,
) -> Result<impl Responder, PlacesError> {
    let req = parse_place_body(&body)?;
    let place = PlaceService::create_place(repo.get_ref(), &req).await?;
    Ok(HttpResponse::Created().json(place))
}

/// GET /places/{id}
/// Retrieve a place by ID
pub async fn get_place(
    repo: web::Data<dyn PlaceRepository>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, PlacesError> {
    let place = PlaceService::get_place(repo.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(place))
}

/// PUT /places/{id}
/// Replace name, city and state of a place
pub async fn update_place(
    repo: web::Data<dyn PlaceRepository>,
    path: web::Path<Uuid>,
    body: web::Bytes,
) -> Result<impl Responder, PlacesError> {
    let req = parse_place_body(&body)?;
    let place = PlaceService::update_place(repo.get_ref(), path.into_inner(), &req).await?;
    Ok(HttpResponse::Ok().json(place))
}

/// DELETE /places/{id}
/// Permanently delete a place
pub async fn delete_place(
    repo: web::Data<dyn PlaceRepository>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, PlacesError> {
    PlaceService::delete_place(repo.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// A malformed id can never name a stored place
fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let id = req.match_info().get("id").unwrap_or_default();
    log::debug!("Rejected place id {:?}: {}", id, err);
    PlacesError::NotFound(id.to_string()).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    PlacesError::InvalidInput(err.to_string()).into()
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/places")
            .app_data(web::PathConfig::default().error_handler(path_error))
            .app_data(web::QueryConfig::default().error_handler(query_error))
            .route("", web::get().to(list_places))
            .route("", web::post().to(create_place))
            .route("/{id}", web::get().to(get_place))
            .route("/{id}", web::put().to(update_place))
            .route("/{id}", web::delete().to(delete_place)),
    );
}
