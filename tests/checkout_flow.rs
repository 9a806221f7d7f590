use flora_frame_api::{
    db::{create_orm_conn, create_pool, run_migrations},
    dto::orders::CheckoutRequest,
    entity::{
        orders::{Column as OrderCol, Entity as Orders},
        plants::{ActiveModel as PlantActive, Entity as Plants},
        users::ActiveModel as UserActive,
    },
    error::AppError,
    middleware::auth::AuthUser,
    routes::params::Pagination,
    services::{cart_service, order_service},
    session::SessionStore,
    state::AppState,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
    Statement,
};
use uuid::Uuid;

// Integration flow against a real database: add to cart -> checkout ->
// order persisted and cart cleared; re-checkout guarded; blank shipping
// rejected without side effects; forced item failure rolls the order back.
#[tokio::test]
async fn cart_checkout_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    let user_id = create_user(&state, "Ada", "ada@example.com").await?;
    let user = AuthUser {
        user_id,
        name: "Ada".into(),
        role: "user".into(),
    };

    let plant = PlantActive {
        id: Set(Uuid::new_v4()),
        name: Set("Monstera Deliciosa".into()),
        category: Set("Indoor".into()),
        price: Set(1250),
        image: Set(None),
        description: Set(Some("Split-leaf favourite".into())),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    // Two adds of the same plant accumulate into one line.
    cart_service::add_to_cart(&state, &user, plant.id).await?;
    let view = cart_service::add_to_cart(&state, &user, plant.id)
        .await?
        .data
        .unwrap();
    assert_eq!(view.lines.len(), 1);
    assert_eq!(view.lines[0].quantity, 2);
    assert_eq!(view.total, 2500);

    // Blank shipping details are rejected before anything is written.
    let rejected = order_service::checkout(
        &state,
        &user,
        CheckoutRequest {
            name: "Ada".into(),
            address: "   ".into(),
            phone: "555-0100".into(),
        },
    )
    .await;
    assert!(matches!(rejected, Err(AppError::BadRequest(_))));
    let view = cart_service::view_cart(&state, &user).await?.data.unwrap();
    assert_eq!(view.lines.len(), 1, "rejected checkout must not touch the cart");

    // Checkout persists the order with one item per cart line.
    let resp = order_service::checkout(
        &state,
        &user,
        CheckoutRequest {
            name: "Ada".into(),
            address: "1 Fern Lane".into(),
            phone: "555-0100".into(),
        },
    )
    .await?;
    let placed = resp.data.unwrap();
    assert_eq!(placed.order.total_amount, 2500);
    assert_eq!(placed.items.len(), 1);
    assert_eq!(placed.items[0].plant_id, plant.id);
    assert_eq!(placed.items[0].quantity, 2);
    assert_eq!(placed.items[0].price, 1250);

    // The cart is cleared after commit.
    let view = cart_service::view_cart(&state, &user).await?.data.unwrap();
    assert!(view.lines.is_empty());
    assert_eq!(view.total, 0);

    // A second submission with the now-empty cart hits the guard and
    // creates nothing.
    let retried = order_service::checkout(
        &state,
        &user,
        CheckoutRequest {
            name: "Ada".into(),
            address: "1 Fern Lane".into(),
            phone: "555-0100".into(),
        },
    )
    .await;
    assert!(matches!(retried, Err(AppError::EmptyCart)));
    let order_count = Orders::find()
        .filter(OrderCol::UserId.eq(user_id))
        .count(&state.orm)
        .await?;
    assert_eq!(order_count, 1);

    // The order is durably visible.
    let listed = order_service::list_orders(
        &state,
        &user,
        Pagination {
            page: Some(1),
            per_page: Some(20),
        },
    )
    .await?;
    assert_eq!(listed.data.unwrap().items.len(), 1);
    let fetched = order_service::get_order(&state, &user, placed.order.id).await?;
    assert_eq!(fetched.data.unwrap().order.id, placed.order.id);

    // Atomicity: pull a plant out from under the cart so the order_items
    // foreign key fails mid-transaction; the order row must roll back and
    // the cart stay intact.
    let doomed = create_plant(&state, "Rosemary", 650).await?;
    cart_service::add_to_cart(&state, &user, doomed).await?;
    Plants::delete_by_id(doomed).exec(&state.orm).await?;

    let failed = order_service::checkout(
        &state,
        &user,
        CheckoutRequest {
            name: "Ada".into(),
            address: "1 Fern Lane".into(),
            phone: "555-0100".into(),
        },
    )
    .await;
    assert!(failed.is_err(), "checkout should fail on the item insert");

    let order_count = Orders::find()
        .filter(OrderCol::UserId.eq(user_id))
        .count(&state.orm)
        .await?;
    assert_eq!(order_count, 1, "no order row may survive the rollback");

    let view = cart_service::view_cart(&state, &user).await?.data.unwrap();
    assert_eq!(view.lines.len(), 1, "cart must be untouched after rollback");

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url).await?;
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE order_items, orders, audit_logs, plants, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(AppState {
        pool,
        orm,
        sessions: SessionStore::new(),
    })
}

async fn create_user(state: &AppState, name: &str, email: &str) -> anyhow::Result<Uuid> {
    let user = UserActive {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password_hash: Set("dummy".into()),
        role: Set("user".into()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(user.id)
}

async fn create_plant(state: &AppState, name: &str, price: i64) -> anyhow::Result<Uuid> {
    let plant = PlantActive {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        category: Set("Herb".into()),
        price: Set(price),
        image: Set(None),
        description: Set(None),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(plant.id)
}
