use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, post, put},
};
use uuid::Uuid;

use crate::{
    dto::plants::{CreatePlantRequest, UpdatePlantRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Plant,
    response::ApiResponse,
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/plants", post(create_plant))
        .route("/plants/{id}", put(update_plant))
        .route("/plants/{id}", delete(delete_plant))
}

#[utoipa::path(
    post,
    path = "/api/admin/plants",
    request_body = CreatePlantRequest,
    responses(
        (status = 200, description = "Create plant", body = ApiResponse<Plant>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_plant(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreatePlantRequest>,
) -> AppResult<Json<ApiResponse<Plant>>> {
    let resp = admin_service::create_plant(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/plants/{id}",
    params(
        ("id" = Uuid, Path, description = "Plant ID")
    ),
    request_body = UpdatePlantRequest,
    responses(
        (status = 200, description = "Update plant", body = ApiResponse<Plant>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_plant(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePlantRequest>,
) -> AppResult<Json<ApiResponse<Plant>>> {
    let resp = admin_service::update_plant(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/admin/plants/{id}",
    params(
        ("id" = Uuid, Path, description = "Plant ID")
    ),
    responses(
        (status = 200, description = "Delete plant", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Not Found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_plant(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = admin_service::delete_plant(&state, &user, id).await?;
    Ok(Json(resp))
}
