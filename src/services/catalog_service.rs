use uuid::Uuid;

use crate::{
    db::DbPool,
    dto::plants::{PlantList, SearchSuggestions},
    error::{AppError, AppResult},
    models::Plant,
    response::{ApiResponse, Meta},
    routes::params::{Pagination, PlantQuery},
};

pub async fn list_plants(pool: &DbPool, query: PlantQuery) -> AppResult<ApiResponse<PlantList>> {
    let (page, limit, offset) = query.pagination.normalize();

    let (items, total) = if let Some(category) = query.category.as_ref().filter(|c| !c.is_empty()) {
        let items = sqlx::query_as::<_, Plant>(
            r#"
            SELECT * FROM plants
            WHERE LOWER(category) = LOWER($1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(category)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM plants WHERE LOWER(category) = LOWER($1)")
                .bind(category)
                .fetch_one(pool)
                .await?;
        (items, total.0)
    } else {
        let items = sqlx::query_as::<_, Plant>(
            "SELECT * FROM plants ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM plants")
            .fetch_one(pool)
            .await?;
        (items, total.0)
    };

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Plants", PlantList { items }, Some(meta)))
}

pub async fn get_plant(pool: &DbPool, id: Uuid) -> AppResult<ApiResponse<Plant>> {
    let plant = sqlx::query_as::<_, Plant>("SELECT * FROM plants WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    let plant = match plant {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Plant", plant, None))
}

/// Case-insensitive substring search over name, category and description.
pub async fn search_plants(
    pool: &DbPool,
    q: &str,
    pagination: Pagination,
) -> AppResult<ApiResponse<PlantList>> {
    let (page, limit, offset) = pagination.normalize();
    let pattern = format!("%{}%", q.trim());

    let items = sqlx::query_as::<_, Plant>(
        r#"
        SELECT * FROM plants
        WHERE name ILIKE $1 OR category ILIKE $1 OR description ILIKE $1
        ORDER BY name
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(&pattern)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let total: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM plants WHERE name ILIKE $1 OR category ILIKE $1 OR description ILIKE $1",
    )
    .bind(&pattern)
    .fetch_one(pool)
    .await?;

    let meta = Meta::new(page, limit, total.0);
    Ok(ApiResponse::success("Search results", PlantList { items }, Some(meta)))
}

/// Up to six distinct plant names matching the typed prefix, for the search
/// box dropdown.
pub async fn search_suggestions(
    pool: &DbPool,
    q: &str,
) -> AppResult<ApiResponse<SearchSuggestions>> {
    let pattern = format!("%{}%", q.trim());

    let rows: Vec<(String,)> = sqlx::query_as(
        r#"
        SELECT DISTINCT name FROM plants
        WHERE name ILIKE $1 OR category ILIKE $1 OR description ILIKE $1
        ORDER BY name
        LIMIT 6
        "#,
    )
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    let suggestions = rows.into_iter().map(|(name,)| name).collect();
    Ok(ApiResponse::success(
        "OK",
        SearchSuggestions { suggestions },
        None,
    ))
}
