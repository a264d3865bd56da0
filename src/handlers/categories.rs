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
use crate::database::models::CategoryBody;
use crate::database::Param;
use crate::middleware::{ApiResult, MessageBody};

use super::resource::{Read, Write};

const LIST: Read = Read {
    sql: "SELECT * FROM categories",
    failure: "Error al obtener categorías",
};

const CREATE: Write = Write {
    sql: r#"INSERT INTO categories ("categoryName") VALUES ($1)"#,
    status: StatusCode::CREATED,
    confirmation: "Categoría creada exitosamente",
    failure: "Error al crear categoría",
};

const UPDATE: Write = Write {
    sql: r#"UPDATE categories SET "categoryName" = $1 WHERE id = $2"#,
    status: StatusCode::OK,
    confirmation: "Categoría actualizada exitosamente",
    failure: "Error al actualizar categoría",
};

const DELETE: Write = Write {
    sql: "DELETE FROM categories WHERE id = $1",
    status: StatusCode::OK,
    confirmation: "Categoría eliminada exitosamente",
    failure: "Error al eliminar categoría",
};

pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Value>> {
    LIST.run(state.store(), &[]).await
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CategoryBody>, JsonRejection>,
) -> ApiResult<MessageBody> {
    let Json(body) = body?;

    CREATE
        .run(state.store(), &[Param::from(body.category_name)])
        .await
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<CategoryBody>, JsonRejection>,
) -> ApiResult<MessageBody> {
    let Path(id) = path?;
    let Json(body) = body?;

    UPDATE
        .run(state.store(), &[Param::from(body.category_name), Param::from(id)])
        .await
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<MessageBody> {
    let Path(id) = path?;
    DELETE.run(state.store(), &[Param::from(id)]).await
}
