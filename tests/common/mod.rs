//! Common test utilities

use axum::{middleware, Router};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use finance_ledger::api;

/// Connect to the test database. Returns None when DATABASE_URL is not set
/// so database-backed suites skip instead of failing on machines without
/// PostgreSQL.
#[allow(dead_code)]
pub async fn try_setup_test_db() -> Option<PgPool> {
    dotenvy::dotenv().ok();

    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set, skipping database-backed test");
            return None;
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to DB");

    Some(pool)
}

/// Assemble the app the way the server binary does: public auth routes next
/// to the protected surface behind the bearer-token middleware.
#[allow(dead_code)]
pub fn build_app(pool: PgPool) -> Router {
    let protected = api::create_router().layer(middleware::from_fn_with_state(
        pool.clone(),
        api::middleware::auth_middleware,
    ));

    Router::new()
        .nest("/api/v1/auth", api::auth_router())
        .nest("/api/v1", protected)
        .with_state(pool)
}
