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
use crate::database::models::CommentBody;
use crate::database::Param;
use crate::middleware::{ApiResult, MessageBody};

use super::resource::{Read, Write};

const LIST_BY_POST: Read = Read {
    sql: r#"SELECT * FROM comments WHERE "postId" = $1"#,
    failure: "Error al obtener comentarios",
};

const CREATE: Write = Write {
    sql: r#"INSERT INTO comments (comment, "postId", "userId") VALUES ($1, $2, $3)"#,
    status: StatusCode::CREATED,
    confirmation: "Comentario creado exitosamente",
    failure: "Error al crear comentario",
};

const UPDATE: Write = Write {
    sql: "UPDATE comments SET comment = $1 WHERE id = $2",
    status: StatusCode::OK,
    confirmation: "Comentario actualizado exitosamente",
    failure: "Error al actualizar comentario",
};

const DELETE: Write = Write {
    sql: "DELETE FROM comments WHERE id = $1",
    status: StatusCode::OK,
    confirmation: "Comentario eliminado exitosamente",
    failure: "Error al eliminar comentario",
};

/// GET /comments/:postId - comments attached to one post
pub async fn list_by_post(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Vec<Value>> {
    let Path(post_id) = path?;
    LIST_BY_POST.run(state.store(), &[Param::from(post_id)]).await
}

/// POST /comments
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CommentBody>, JsonRejection>,
) -> ApiResult<MessageBody> {
    let Json(body) = body?;

    CREATE
        .run(
            state.store(),
            &[Param::from(body.comment), Param::from(body.post_id), Param::from(body.user_id)],
        )
        .await
}

/// PUT /comments/:id
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<CommentBody>, JsonRejection>,
) -> ApiResult<MessageBody> {
    let Path(id) = path?;
    let Json(body) = body?;

    UPDATE
        .run(state.store(), &[Param::from(body.comment), Param::from(id)])
        .await
}

/// DELETE /comments/:id
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<MessageBody> {
    let Path(id) = path?;
    DELETE.run(state.store(), &[Param::from(id)]).await
}
