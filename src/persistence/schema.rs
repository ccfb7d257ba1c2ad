//! Schema bootstrap for the orders store.

use sqlx::PgPool;

use crate::error::PersistenceError;

const CREATE_ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    id      UUID            PRIMARY KEY,
    value   NUMERIC(18, 2)  NOT NULL,
    status  SMALLINT        NOT NULL,
    active  BOOLEAN         NOT NULL DEFAULT TRUE
)"#;

/// Create the orders table when missing.
pub async fn init_schema(pool: &PgPool) -> Result<(), PersistenceError> {
    tracing::info!("Initializing orders schema");
    sqlx::query(CREATE_ORDERS_TABLE).execute(pool).await?;
    Ok(())
}
