use async_trait::async_trait;
use serde_json::Value;
use sqlx::{postgres::PgArguments, query::Query, PgPool, Postgres, Row};

use crate::database::manager::StoreError;

/// Positional parameter bound to a `$n` placeholder.
///
/// Request bodies are passed through without validation, so every variant
/// carries an `Option`: an absent field binds as SQL `NULL` and the store
/// decides whether that is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Int(Option<i64>),
    Text(Option<String>),
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Int(Some(value))
    }
}

impl From<Option<i64>> for Param {
    fn from(value: Option<i64>) -> Self {
        Param::Int(value)
    }
}

impl From<Option<String>> for Param {
    fn from(value: Option<String>) -> Self {
        Param::Text(value)
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Text(Some(value.to_string()))
    }
}

/// Executes parameterized SQL against the relational store
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run a read statement; each row comes back as a JSON object keyed by column name
    async fn fetch_all(&self, sql: &str, params: &[Param]) -> Result<Vec<Value>, StoreError>;

    /// Run a write statement and return the number of affected rows
    async fn execute(&self, sql: &str, params: &[Param]) -> Result<u64, StoreError>;

    /// Round-trip to the store without touching any table
    async fn ping(&self) -> Result<(), StoreError>;
}

/// `QueryExecutor` over a shared PostgreSQL pool. Every call checks out its
/// own connection for the single statement it runs.
#[derive(Clone)]
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QueryExecutor for PgExecutor {
    async fn fetch_all(&self, sql: &str, params: &[Param]) -> Result<Vec<Value>, StoreError> {
        // row_to_json gives automatic column mapping without per-table row types
        let wrapped = format!("SELECT row_to_json(t) AS row FROM ({}) t", sql);
        let rows = bind_params(sqlx::query(&wrapped), params)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| -> Result<Value, StoreError> {
                let value: Value = row.try_get("row")?;
                match value {
                    Value::Object(_) => Ok(value),
                    other => Err(StoreError::UnexpectedRow(other.to_string())),
                }
            })
            .collect()
    }

    async fn execute(&self, sql: &str, params: &[Param]) -> Result<u64, StoreError> {
        let result = bind_params(sqlx::query(sql), params)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn bind_params<'q>(
    query: Query<'q, Postgres, PgArguments>,
    params: &'q [Param],
) -> Query<'q, Postgres, PgArguments> {
    params.iter().fold(query, |q, param| match param {
        Param::Int(v) => q.bind(*v),
        Param::Text(v) => q.bind(v.as_deref()),
    })
}
