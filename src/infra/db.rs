use sqlx::{PgPool, migrate::Migrator, postgres::PgPoolOptions};
use tracing::info;

use crate::infra::error::InfraError;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn init_db(database_url: &str, max_connections: u32) -> Result<PgPool, InfraError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    info!("Connected to database!");
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), InfraError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
