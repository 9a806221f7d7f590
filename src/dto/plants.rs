use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Plant;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePlantRequest {
    pub name: String,
    pub category: String,
    pub price: i64,
    pub image: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePlantRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<i64>,
    pub image: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlantList {
    pub items: Vec<Plant>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchSuggestions {
    pub suggestions: Vec<String>,
}
