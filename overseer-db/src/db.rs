//! Pooled MySQL handle and fire-and-forget dispatch.
//!
//! Every helper spawns one tokio task per call: no ordering between
//! concurrent calls, no cancellation, no timeout. The sqlx pool (bounded
//! connections, acquire/release) is the only resource discipline. Failures
//! inside a spawned task are logged at warn level with the offending query
//! and swallowed; only [`Database::connect`] and [`Database::acquire`]
//! return errors to the caller.

use sqlx::mysql::{MySqlPoolOptions, MySqlRow};
use sqlx::pool::PoolConnection;
use sqlx::{MySql, MySqlPool};
use tracing::{info, warn};

use crate::config::DbConfig;
use crate::error::Result;
use crate::params::{bind_params, SqlParam};

/// Handle to a plugin's MySQL database.
///
/// Cheap to clone; all clones share one pool. Lifecycle is
/// open-on-[`connect`](Database::connect) / close-on-[`close`](Database::close).
#[derive(Debug, Clone)]
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// Open the connection pool.
    ///
    /// The one operation whose failure reaches the caller: a bad host,
    /// credential, or database name surfaces here instead of in the logs.
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url())
            .await?;

        info!(username = %config.username, "connected to the database");
        Ok(Self { pool })
    }

    /// Check a connection out of the pool, for callers that need to run
    /// statements directly.
    pub async fn acquire(&self) -> Result<PoolConnection<MySql>> {
        Ok(self.pool.acquire().await?)
    }

    /// The underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Close the pool. In-flight tasks fail their acquire and log.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Create a table if it does not exist, off the caller's task.
    ///
    /// `columns` is the column list between the parentheses, verbatim.
    pub fn create_table(&self, name: impl Into<String>, columns: impl Into<String>) {
        let pool = self.pool.clone();
        let name = name.into();
        let statement = format!("CREATE TABLE IF NOT EXISTS {} ({});", name, columns.into());

        tokio::spawn(async move {
            if let Err(error) = sqlx::query(&statement).execute(&pool).await {
                warn!(table = %name, %error, "failed to create database table");
            }
        });
    }

    /// Run an update statement off the caller's task.
    ///
    /// Parameters bind to `?` placeholders in order.
    pub fn execute(&self, query: impl Into<String>, params: Vec<SqlParam>) {
        let pool = self.pool.clone();
        let query = query.into();

        tokio::spawn(async move {
            if let Err(error) = bind_params(sqlx::query(&query), &params)
                .execute(&pool)
                .await
            {
                warn!(%query, %error, "failed to execute database update");
            }
        });
    }

    /// Run an update statement off the caller's task, then invoke `on_done`.
    ///
    /// The callback runs on the spawned task, exactly once, and only after
    /// a successful execution.
    pub fn execute_then(
        &self,
        query: impl Into<String>,
        params: Vec<SqlParam>,
        on_done: impl FnOnce() + Send + 'static,
    ) {
        let pool = self.pool.clone();
        let query = query.into();

        tokio::spawn(async move {
            match bind_params(sqlx::query(&query), &params).execute(&pool).await {
                Ok(_) => on_done(),
                Err(error) => {
                    warn!(%query, %error, "failed to execute database update");
                }
            }
        });
    }

    /// Run a query off the caller's task and hand the raw rows to `on_rows`.
    ///
    /// The callback runs on the spawned task, exactly once, and only on
    /// success.
    pub fn select(
        &self,
        query: impl Into<String>,
        params: Vec<SqlParam>,
        on_rows: impl FnOnce(Vec<MySqlRow>) + Send + 'static,
    ) {
        let pool = self.pool.clone();
        let query = query.into();

        tokio::spawn(async move {
            match bind_params(sqlx::query(&query), &params)
                .fetch_all(&pool)
                .await
            {
                Ok(rows) => on_rows(rows),
                Err(error) => {
                    warn!(%query, %error, "failed to execute database query");
                }
            }
        });
    }
}
