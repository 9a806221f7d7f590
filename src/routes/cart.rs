use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};
use uuid::Uuid;

use crate::{
    dto::cart::CartView,
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(view_cart))
        .route("/items/{plant_id}", post(add_to_cart))
        .route("/lines/{index}/increase", post(increase_quantity))
        .route("/lines/{index}/decrease", post(decrease_quantity))
        .route("/lines/{index}", delete(remove_line))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Current cart with total", body = ApiResponse<CartView>)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn view_cart(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::view_cart(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart/items/{plant_id}",
    params(
        ("plant_id" = Uuid, Path, description = "Plant ID")
    ),
    responses(
        (status = 200, description = "Add one unit of a plant to the cart", body = ApiResponse<CartView>),
        (status = 404, description = "Plant not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    user: AuthUser,
    Path(plant_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::add_to_cart(&state, &user, plant_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart/lines/{index}/increase",
    params(
        ("index" = usize, Path, description = "Zero-based cart line index")
    ),
    responses(
        (status = 200, description = "Increase line quantity by one; out-of-range index is ignored", body = ApiResponse<CartView>)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn increase_quantity(
    State(state): State<AppState>,
    user: AuthUser,
    Path(index): Path<usize>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::increase_quantity(&state, &user, index).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/cart/lines/{index}/decrease",
    params(
        ("index" = usize, Path, description = "Zero-based cart line index")
    ),
    responses(
        (status = 200, description = "Decrease line quantity by one, removing the line at zero", body = ApiResponse<CartView>)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn decrease_quantity(
    State(state): State<AppState>,
    user: AuthUser,
    Path(index): Path<usize>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::decrease_quantity(&state, &user, index).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cart/lines/{index}",
    params(
        ("index" = usize, Path, description = "Zero-based cart line index")
    ),
    responses(
        (status = 200, description = "Remove a cart line; out-of-range index is ignored", body = ApiResponse<CartView>)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn remove_line(
    State(state): State<AppState>,
    user: AuthUser,
    Path(index): Path<usize>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::remove_line(&state, &user, index).await?;
    Ok(Json(resp))
}
