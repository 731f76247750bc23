use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde_json::{Map, Value};

use crate::controllers::station_controller::StationController;
use crate::dto::station_dto::{CreateStationRequest, MessageResponse};
use crate::models::{Station, StationsDocument};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_station_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stations).post(create_station))
        .route("/:id", put(update_station).delete(delete_station))
}

async fn list_stations(State(state): State<AppState>) -> Result<Json<StationsDocument>, AppError> {
    let controller = StationController::new(state.store.clone());
    let estaciones = controller.list().await?;
    Ok(Json(StationsDocument { estaciones }))
}

async fn create_station(
    State(state): State<AppState>,
    payload: Result<Json<CreateStationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Station>), AppError> {
    let Json(request) = payload?;
    let controller = StationController::new(state.store.clone());
    let station = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(station)))
}

async fn update_station(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Station>, AppError> {
    let Json(patch) = payload?;
    let controller = StationController::new(state.store.clone());
    let station = controller.update(&id, patch).await?;
    Ok(Json(station))
}

async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = StationController::new(state.store.clone());
    controller.delete(&id).await?;
    Ok(Json(MessageResponse::new("Estación eliminada correctamente")))
}
