use std::sync::Arc;

use anyhow::Context;
use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::{AccessPolicy, AdminOrSelf, Principal};
use crate::config::AppConfig;
use crate::database::{self, PgExecutor, QueryExecutor};
use crate::error::ApiError;
use crate::handlers::{categories, comments, posts, system, users};
use crate::middleware::principal_middleware;
use crate::types::Action;

/// Dependencies shared by every handler: the pooled store and the policy
/// guarding user writes. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn QueryExecutor>,
    policy: Arc<dyn AccessPolicy>,
}

impl AppState {
    pub fn new(store: Arc<dyn QueryExecutor>) -> Self {
        Self::with_policy(store, Arc::new(AdminOrSelf))
    }

    pub fn with_policy(store: Arc<dyn QueryExecutor>, policy: Arc<dyn AccessPolicy>) -> Self {
        Self { store, policy }
    }

    pub fn store(&self) -> &dyn QueryExecutor {
        self.store.as_ref()
    }

    /// Run the access policy; a denial becomes a 403 carrying `denial`
    pub fn authorize(
        &self,
        principal: Option<&Principal>,
        action: Action,
        target_id: Option<i64>,
        denial: &str,
    ) -> Result<(), ApiError> {
        if self.policy.evaluate(principal, action, target_id) {
            return Ok(());
        }

        tracing::warn!(
            principal = ?principal,
            ?action,
            target_id = ?target_id,
            "Access denied"
        );
        Err(ApiError::forbidden(denial))
    }
}

/// Build the full HTTP surface over `state`
pub fn router(state: AppState, config: &AppConfig) -> Router {
    let mut app = Router::new()
        // Public
        .route("/", get(system::root))
        .route("/health", get(system::health))
        // Blog resources
        .merge(user_routes())
        .merge(post_routes())
        .merge(comment_routes())
        .merge(category_routes())
        .layer(middleware::from_fn(principal_middleware))
        .with_state(state);

    // Global middleware
    if config.security.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }
    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/:id", put(users::update).delete(users::delete))
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list).post(posts::create))
        .route("/posts/:id", put(posts::update).delete(posts::delete))
}

fn comment_routes() -> Router<AppState> {
    use axum::routing::post;

    // GET reads the segment as a post id, PUT and DELETE as a comment id
    Router::new()
        .route("/comments", post(comments::create))
        .route(
            "/comments/:id",
            get(comments::list_by_post)
                .put(comments::update)
                .delete(comments::delete),
        )
}

fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/:id",
            put(categories::update).delete(categories::delete),
        )
}

/// Connect the store, optionally bootstrap the schema, and serve until ctrl-c
pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let pool = database::manager::connect(&config.database)
        .await
        .context("failed to connect to the database")?;
    let store = PgExecutor::new(pool.clone());

    if config.database.auto_migrate {
        database::schema::ensure_schema(&store)
            .await
            .context("failed to create blog tables")?;
    }

    let app = router(AppState::new(Arc::new(store)), config);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Blog API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    tracing::info!("Closed database pool");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
