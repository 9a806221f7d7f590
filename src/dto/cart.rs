use serde::Serialize;
use utoipa::ToSchema;

use crate::cart::CartLine;

/// The cart view the storefront renders: lines in order plus the running
/// total in minor units.
#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: i64,
}
