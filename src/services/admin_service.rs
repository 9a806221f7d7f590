use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::plants::{CreatePlantRequest, UpdatePlantRequest},
    entity::plants::{ActiveModel as PlantActive, Entity as Plants, Model as PlantModel},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Plant,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn create_plant(
    state: &AppState,
    user: &AuthUser,
    payload: CreatePlantRequest,
) -> AppResult<ApiResponse<Plant>> {
    ensure_admin(user)?;

    if payload.name.trim().is_empty() || payload.category.trim().is_empty() {
        return Err(AppError::BadRequest(
            "name and category are required".to_string(),
        ));
    }
    if payload.price < 0 {
        return Err(AppError::BadRequest("price must not be negative".to_string()));
    }

    let plant = PlantActive {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        category: Set(payload.category),
        price: Set(payload.price),
        image: Set(payload.image),
        description: Set(payload.description),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "plant_create",
        Some("plants"),
        Some(serde_json::json!({ "plant_id": plant.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Plant created",
        plant_from_entity(plant),
        Some(Meta::empty()),
    ))
}

pub async fn update_plant(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdatePlantRequest,
) -> AppResult<ApiResponse<Plant>> {
    ensure_admin(user)?;

    let existing = Plants::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    if let Some(price) = payload.price {
        if price < 0 {
            return Err(AppError::BadRequest("price must not be negative".to_string()));
        }
    }

    let mut active: PlantActive = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(category) = payload.category {
        active.category = Set(category);
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(image) = payload.image {
        active.image = Set(Some(image));
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    let plant = active.update(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "plant_update",
        Some("plants"),
        Some(serde_json::json!({ "plant_id": plant.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Plant updated",
        plant_from_entity(plant),
        Some(Meta::empty()),
    ))
}

pub async fn delete_plant(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;

    let result = Plants::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.user_id),
        "plant_delete",
        Some("plants"),
        Some(serde_json::json!({ "plant_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Plant deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn plant_from_entity(model: PlantModel) -> Plant {
    Plant {
        id: model.id,
        name: model.name,
        category: model.category,
        price: model.price,
        image: model.image,
        description: model.description,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
