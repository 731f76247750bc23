use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use validator::Validate;

use crate::dto::geocoding_dto::{
    AddressValidationResponse, ReverseGeocodeRequest, ReverseGeocodeResponse, ValidateAddressRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_geocoding_router() -> Router<AppState> {
    Router::new()
        .route("/validar", post(validate_address))
        .route("/inversa", post(reverse_geocode))
}

/// Validar que una dirección esté dentro de la ciudad objetivo.
///
/// Una dirección rechazada sigue siendo un 200 con `valida: false`; la UI
/// bloquea el envío del formulario.
async fn validate_address(
    State(state): State<AppState>,
    payload: Result<Json<ValidateAddressRequest>, JsonRejection>,
) -> Result<Json<AddressValidationResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;
    let response = state.address_validator.validate(&request.address).await;
    Ok(Json(response))
}

async fn reverse_geocode(
    State(state): State<AppState>,
    payload: Result<Json<ReverseGeocodeRequest>, JsonRejection>,
) -> Result<Json<ReverseGeocodeResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;
    let response = state
        .address_validator
        .reverse(request.lat, request.lng)
        .await
        .map_err(|e| AppError::ExternalApi(e.to_string()))?;
    Ok(Json(response))
}
