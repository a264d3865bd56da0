#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use blog_api_rust::auth::{generate_jwt, Claims};
use blog_api_rust::database::{self, Param, PgExecutor, QueryExecutor, StoreError};
use blog_api_rust::{config, router, AppState};

/// One statement the handlers asked the store to run
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub sql: String,
    pub params: Vec<Param>,
}

/// In-process store double: records every statement, answers reads with
/// canned rows, and can be switched to fail like a dropped connection.
#[derive(Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<Call>>,
    rows: Vec<Value>,
    fail: bool,
}

impl RecordingExecutor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_rows(rows: Vec<Value>) -> Arc<Self> {
        Arc::new(Self {
            rows,
            ..Default::default()
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Default::default()
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, sql: &str, params: &[Param]) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(Call {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
        if self.fail {
            return Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl QueryExecutor for RecordingExecutor {
    async fn fetch_all(&self, sql: &str, params: &[Param]) -> Result<Vec<Value>, StoreError> {
        self.record(sql, params)?;
        Ok(self.rows.clone())
    }

    async fn execute(&self, sql: &str, params: &[Param]) -> Result<u64, StoreError> {
        self.record(sql, params)?;
        Ok(0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

pub fn app(store: Arc<RecordingExecutor>) -> Router {
    router(AppState::new(store), config::config())
}

pub fn token(user_id: i64, role_id: i64) -> String {
    let claims = Claims::new(user_id, role_id).expect("token claims");
    generate_jwt(&claims).expect("token generation")
}

/// Drive one request through the router and decode the JSON reply
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    dispatch(app, request).await
}

/// Like `send`, but the body goes out exactly as given, with a content type
/// only when one is passed
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    bearer: Option<&str>,
    content_type: Option<&str>,
    body: &'static str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body)).unwrap();

    dispatch(app, request).await
}

async fn dispatch(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// A real server bound to a free port, backed by PostgreSQL
pub struct LiveServer {
    pub base_url: String,
}

/// Serve the router against `DATABASE_URL`. Returns `None` when no database
/// is configured so live tests can skip.
pub async fn live_server() -> Result<Option<LiveServer>> {
    let _ = dotenvy::dotenv();
    let app_config = config::config();
    if app_config.database.url.is_none() {
        eprintln!("DATABASE_URL not set; skipping live test");
        return Ok(None);
    }

    let pool = database::manager::connect(&app_config.database).await?;
    let store = PgExecutor::new(pool);
    database::schema::ensure_schema(&store).await?;

    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    let app = router(AppState::new(Arc::new(store)), app_config);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(Some(LiveServer {
        base_url: format!("http://127.0.0.1:{}", port),
    }))
}
