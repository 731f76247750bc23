use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{Map, Value};

use crate::controllers::bicycle_controller::BicycleController;
use crate::dto::bicycle_dto::{AddRepairRequest, CreateBicycleRequest, MoveBicycleRequest};
use crate::dto::station_dto::MessageResponse;
use crate::models::{Bicycle, BicyclesDocument};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_bicycle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bicycles).post(create_bicycle))
        .route(
            "/:id",
            get(get_bicycle).put(update_bicycle).delete(delete_bicycle),
        )
        .route("/:id/arreglos", post(add_repair))
        .route("/:id/mover", put(move_bicycle))
}

async fn list_bicycles(State(state): State<AppState>) -> Result<Json<BicyclesDocument>, AppError> {
    let controller = BicycleController::new(state.store.clone());
    let bicicletas = controller.list().await?;
    Ok(Json(BicyclesDocument { bicicletas }))
}

async fn get_bicycle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Bicycle>, AppError> {
    let controller = BicycleController::new(state.store.clone());
    Ok(Json(controller.get_by_id(&id).await?))
}

async fn create_bicycle(
    State(state): State<AppState>,
    payload: Result<Json<CreateBicycleRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Bicycle>), AppError> {
    let Json(request) = payload?;
    let controller = BicycleController::new(state.store.clone());
    let bicycle = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(bicycle)))
}

async fn update_bicycle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Bicycle>, AppError> {
    let Json(patch) = payload?;
    let controller = BicycleController::new(state.store.clone());
    Ok(Json(controller.update(&id, patch).await?))
}

async fn delete_bicycle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = BicycleController::new(state.store.clone());
    controller.delete(&id).await?;
    Ok(Json(MessageResponse::new("Bicicleta eliminada correctamente")))
}

async fn add_repair(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AddRepairRequest>, JsonRejection>,
) -> Result<Json<Bicycle>, AppError> {
    let Json(request) = payload?;
    let controller = BicycleController::new(state.store.clone());
    Ok(Json(controller.add_repair(&id, request).await?))
}

async fn move_bicycle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MoveBicycleRequest>, JsonRejection>,
) -> Result<Json<Bicycle>, AppError> {
    let Json(request) = payload?;
    let controller = BicycleController::new(state.store.clone());
    Ok(Json(controller.move_to(&id, request).await?))
}
