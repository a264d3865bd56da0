//! The shape every resource handler shares: one statement against the store,
//! a fixed success status and message, and a single failure boundary that
//! logs the store error and answers with the generic 500.

use axum::http::StatusCode;
use serde_json::Value;

use crate::database::{Param, QueryExecutor};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, MessageBody};

/// A select whose rows are returned to the caller as a JSON array
#[derive(Debug, Clone, Copy)]
pub struct Read {
    pub sql: &'static str,
    /// Log line written when the store fails
    pub failure: &'static str,
}

/// An insert, update or delete answered with a confirmation message
#[derive(Debug, Clone, Copy)]
pub struct Write {
    pub sql: &'static str,
    pub status: StatusCode,
    pub confirmation: &'static str,
    /// Log line written when the store fails
    pub failure: &'static str,
}

impl Read {
    pub async fn run(&self, store: &dyn QueryExecutor, params: &[Param]) -> ApiResult<Vec<Value>> {
        let rows = store
            .fetch_all(self.sql, params)
            .await
            .map_err(|e| ApiError::store(self.failure, e))?;

        Ok(ApiResponse::success(rows))
    }
}

impl Write {
    /// Affected-row count is not inspected: writes against a missing id still
    /// confirm.
    pub async fn run(&self, store: &dyn QueryExecutor, params: &[Param]) -> ApiResult<MessageBody> {
        let affected = store
            .execute(self.sql, params)
            .await
            .map_err(|e| ApiError::store(self.failure, e))?;

        tracing::debug!(affected, sql = self.sql, "write applied");
        Ok(ApiResponse::message(self.status, self.confirmation))
    }
}
