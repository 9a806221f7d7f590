use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::cart::CartView,
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Renders the user's cart: lines in insertion order plus the exact total.
pub async fn view_cart(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<CartView>> {
    let handle = state.sessions.cart(user.user_id).await;
    let cart = handle.lock().await;
    let view = CartView {
        lines: cart.lines().to_vec(),
        total: cart.total(),
    };
    Ok(ApiResponse::success("OK", view, Some(Meta::empty())))
}

/// Adds one unit of a plant to the session cart, capturing the current
/// catalog price on first add. The whole read-modify-write happens under the
/// per-user cart lock.
pub async fn add_to_cart(
    state: &AppState,
    user: &AuthUser,
    plant_id: Uuid,
) -> AppResult<ApiResponse<CartView>> {
    let plant: Option<(Uuid, String, i64)> =
        sqlx::query_as("SELECT id, name, price FROM plants WHERE id = $1")
            .bind(plant_id)
            .fetch_optional(&state.pool)
            .await?;
    let (id, name, price) = plant.ok_or(AppError::NotFound)?;

    let handle = state.sessions.cart(user.user_id).await;
    let view = {
        let mut cart = handle.lock().await;
        cart.add_item(id, &name, price);
        CartView {
            lines: cart.lines().to_vec(),
            total: cart.total(),
        }
    };

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "cart_add",
        Some("cart"),
        Some(serde_json::json!({ "plant_id": plant_id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success("Added to cart", view, None))
}

/// Bumps the quantity of the line at `index`. Out-of-range indexes fall
/// through untouched, matching the cart page's link-per-row navigation.
pub async fn increase_quantity(
    state: &AppState,
    user: &AuthUser,
    index: usize,
) -> AppResult<ApiResponse<CartView>> {
    let handle = state.sessions.cart(user.user_id).await;
    let view = {
        let mut cart = handle.lock().await;
        cart.increase_quantity(index);
        CartView {
            lines: cart.lines().to_vec(),
            total: cart.total(),
        }
    };
    Ok(ApiResponse::success("OK", view, None))
}

/// Lowers the quantity of the line at `index`, removing the line when it
/// hits zero. Same bounds policy as `increase_quantity`.
pub async fn decrease_quantity(
    state: &AppState,
    user: &AuthUser,
    index: usize,
) -> AppResult<ApiResponse<CartView>> {
    let handle = state.sessions.cart(user.user_id).await;
    let view = {
        let mut cart = handle.lock().await;
        cart.decrease_quantity(index);
        CartView {
            lines: cart.lines().to_vec(),
            total: cart.total(),
        }
    };
    Ok(ApiResponse::success("OK", view, None))
}

/// Drops the line at `index` entirely. Same bounds policy as above.
pub async fn remove_line(
    state: &AppState,
    user: &AuthUser,
    index: usize,
) -> AppResult<ApiResponse<CartView>> {
    let handle = state.sessions.cart(user.user_id).await;
    let view = {
        let mut cart = handle.lock().await;
        cart.remove_line(index);
        CartView {
            lines: cart.lines().to_vec(),
            total: cart.total(),
        }
    };

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "cart_remove",
        Some("cart"),
        Some(serde_json::json!({ "index": index })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success("Removed from cart", view, None))
}
