use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    cart::{Cart, CartLine},
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest},
        cart::CartView,
        orders::{CheckoutRequest, OrderList, OrderWithItems},
        plants::{CreatePlantRequest, PlantList, SearchSuggestions, UpdatePlantRequest},
    },
    models::{Order, OrderItem, Plant, User},
    response::{ApiResponse, Meta},
    routes::{admin, auth, cart, health, orders, params, plants},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        auth::logout,
        plants::list_plants,
        plants::get_plant,
        plants::search,
        plants::search_suggestions,
        cart::view_cart,
        cart::add_to_cart,
        cart::increase_quantity,
        cart::decrease_quantity,
        cart::remove_line,
        orders::checkout,
        orders::list_orders,
        orders::get_order,
        admin::create_plant,
        admin::update_plant,
        admin::delete_plant
    ),
    components(
        schemas(
            User,
            Plant,
            Order,
            OrderItem,
            Cart,
            CartLine,
            CartView,
            PlantList,
            SearchSuggestions,
            CreatePlantRequest,
            UpdatePlantRequest,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            CheckoutRequest,
            OrderList,
            OrderWithItems,
            params::Pagination,
            params::PlantQuery,
            params::SearchQuery,
            params::SuggestionQuery,
            health::HealthData,
            Meta,
            ApiResponse<Plant>,
            ApiResponse<PlantList>,
            ApiResponse<CartView>,
            ApiResponse<OrderWithItems>,
            ApiResponse<OrderList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Plants", description = "Plant catalog endpoints"),
        (name = "Cart", description = "Session cart endpoints"),
        (name = "Orders", description = "Checkout and order history endpoints"),
        (name = "Admin", description = "Catalog maintenance endpoints"),
        (name = "Auth", description = "Authentication endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
