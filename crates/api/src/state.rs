use std::sync::Arc;

use fyyur_db::session;
use sqlx::pool::PoolConnection;
use sqlx::{Postgres, Transaction};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: fyyur_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Check out a pooled connection for a read path.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, sqlx::Error> {
        session::acquire(&self.pool, &self.config.db_retry).await
    }

    /// Open a transaction for a write path. Dropped without `commit` it
    /// rolls back.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        session::begin(&self.pool, &self.config.db_retry).await
    }
}
