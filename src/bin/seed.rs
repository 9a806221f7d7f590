use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use flora_frame_api::{config::AppConfig, db::create_pool};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let admin_id = ensure_user(&pool, "Admin", "admin@florafame.test", "admin123", "admin").await?;
    let user_id = ensure_user(&pool, "Sample User", "user@florafame.test", "user123", "user").await?;
    seed_plants(&pool).await?;

    println!("Seed completed. Admin ID: {admin_id}, User ID: {user_id}");
    Ok(())
}

async fn ensure_user(
    pool: &sqlx::PgPool,
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> anyhow::Result<Uuid> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO users (id, name, email, password_hash, role)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .fetch_optional(pool)
    .await?;

    // If user already exists, fetch id
    let user_id = match row {
        Some((id,)) => id,
        None => {
            let existing: (Uuid,) = sqlx::query_as("SELECT id FROM users WHERE email = $1")
                .bind(email)
                .fetch_one(pool)
                .await?;
            existing.0
        }
    };

    println!("Ensured user {email} (role={role})");
    Ok(user_id)
}

async fn seed_plants(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let plants = vec![
        ("Monstera Deliciosa", "Indoor", 2499, "Split-leaf favourite for bright rooms"),
        ("Snake Plant", "Indoor", 1299, "Forgiving, thrives on neglect"),
        ("Lavender", "Outdoor", 899, "Fragrant, loves full sun"),
        ("Bonsai Juniper", "Bonsai", 4500, "Shaped juniper, five years old"),
        ("Boston Fern", "Indoor", 1050, "Humidity-loving hanging fern"),
        ("Rosemary", "Herb", 650, "Culinary herb, drought tolerant"),
    ];

    for (name, category, price, description) in plants {
        sqlx::query(
            r#"
            INSERT INTO plants (id, name, category, price, description)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(category)
        .bind(price as i64)
        .bind(description)
        .execute(pool)
        .await?;
    }

    println!("Seeded plants");
    Ok(())
}
