use sqlx::{Pool, Postgres};
use tracing::info;

/// Apply the embedded migrations from `./migrations`
///
/// sqlx records applied versions, so running this on every start is a no-op
/// once the schema is current.
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Running database migrations...");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await?;

    info!("Database migrations completed successfully");
    Ok(())
}
