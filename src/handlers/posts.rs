use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::app::AppState;
use crate::database::models::PostBody;
use crate::database::Param;
use crate::middleware::{ApiResult, MessageBody};

use super::resource::{Read, Write};

const LIST: Read = Read {
    sql: "SELECT * FROM posts",
    failure: "Error al obtener publicaciones",
};

const CREATE: Write = Write {
    sql: r#"INSERT INTO posts (title, content, "userId") VALUES ($1, $2, $3)"#,
    status: StatusCode::CREATED,
    confirmation: "Publicación creada exitosamente",
    failure: "Error al crear publicación",
};

const UPDATE: Write = Write {
    sql: "UPDATE posts SET title = $1, content = $2 WHERE id = $3",
    status: StatusCode::OK,
    confirmation: "Publicación actualizada exitosamente",
    failure: "Error al actualizar publicación",
};

const DELETE: Write = Write {
    sql: "DELETE FROM posts WHERE id = $1",
    status: StatusCode::OK,
    confirmation: "Publicación eliminada exitosamente",
    failure: "Error al eliminar publicación",
};

/// GET /posts
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Value>> {
    LIST.run(state.store(), &[]).await
}

/// POST /posts
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<PostBody>, JsonRejection>,
) -> ApiResult<MessageBody> {
    let Json(body) = body?;

    CREATE
        .run(
            state.store(),
            &[Param::from(body.title), Param::from(body.content), Param::from(body.user_id)],
        )
        .await
}

/// PUT /posts/:id
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<PostBody>, JsonRejection>,
) -> ApiResult<MessageBody> {
    let Path(id) = path?;
    let Json(body) = body?;

    UPDATE
        .run(
            state.store(),
            &[Param::from(body.title), Param::from(body.content), Param::from(id)],
        )
        .await
}

/// DELETE /posts/:id
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<MessageBody> {
    let Path(id) = path?;
    DELETE.run(state.store(), &[Param::from(id)]).await
}
