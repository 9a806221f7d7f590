use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::plants::{PlantList, SearchSuggestions},
    error::AppResult,
    models::Plant,
    response::ApiResponse,
    routes::params::{PlantQuery, SearchQuery, SuggestionQuery},
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_plants))
        .route("/search", get(search))
        .route("/search/suggestions", get(search_suggestions))
        .route("/{id}", get(get_plant))
}

#[utoipa::path(
    get,
    path = "/api/plants",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("category" = Option<String>, Query, description = "Filter by category, case-insensitive")
    ),
    responses(
        (status = 200, description = "List plants", body = ApiResponse<PlantList>)
    ),
    tag = "Plants"
)]
pub async fn list_plants(
    State(state): State<AppState>,
    Query(query): Query<PlantQuery>,
) -> AppResult<Json<ApiResponse<PlantList>>> {
    let resp = catalog_service::list_plants(&state.pool, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/plants/{id}",
    params(
        ("id" = Uuid, Path, description = "Plant ID")
    ),
    responses(
        (status = 200, description = "Get plant", body = ApiResponse<Plant>),
        (status = 404, description = "Plant not found"),
    ),
    tag = "Plants"
)]
pub async fn get_plant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Plant>>> {
    let resp = catalog_service::get_plant(&state.pool, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/plants/search",
    params(
        ("q" = String, Query, description = "Search term"),
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "Search plants by name, category or description", body = ApiResponse<PlantList>)
    ),
    tag = "Plants"
)]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ApiResponse<PlantList>>> {
    let resp = catalog_service::search_plants(&state.pool, &query.q, query.pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/plants/search/suggestions",
    params(
        ("q" = String, Query, description = "Search term")
    ),
    responses(
        (status = 200, description = "Up to six matching plant names", body = ApiResponse<SearchSuggestions>)
    ),
    tag = "Plants"
)]
pub async fn search_suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionQuery>,
) -> AppResult<Json<ApiResponse<SearchSuggestions>>> {
    let resp = catalog_service::search_suggestions(&state.pool, &query.q).await?;
    Ok(Json(resp))
}
