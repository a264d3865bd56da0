use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::app::AppState;
use crate::auth::Principal;
use crate::database::models::UserBody;
use crate::database::Param;
use crate::middleware::{ApiResult, MessageBody};
use crate::types::Action;

use super::resource::{Read, Write};

const LIST: Read = Read {
    sql: "SELECT * FROM users",
    failure: "Error al obtener usuarios",
};

const CREATE: Write = Write {
    sql: "INSERT INTO users (username, email, password, role_id) VALUES ($1, $2, $3, $4)",
    status: StatusCode::CREATED,
    confirmation: "Usuario creado exitosamente",
    failure: "Error al crear usuario",
};

const UPDATE: Write = Write {
    sql: "UPDATE users SET username = $1, email = $2, password = $3, role_id = $4 WHERE id = $5",
    status: StatusCode::OK,
    confirmation: "Usuario actualizado exitosamente",
    failure: "Error al actualizar usuario",
};

const DELETE: Write = Write {
    sql: "DELETE FROM users WHERE id = $1",
    status: StatusCode::OK,
    confirmation: "Usuario eliminado exitosamente",
    failure: "Error al eliminar usuario",
};

/// GET /users
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Value>> {
    LIST.run(state.store(), &[]).await
}

// The access policy runs before the id or body are decoded, so a caller
// without permission gets 403 whatever they sent.

/// POST /users - administrators only
pub async fn create(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    body: Result<Json<UserBody>, JsonRejection>,
) -> ApiResult<MessageBody> {
    state.authorize(
        principal.as_deref(),
        Action::Create,
        None,
        "No tienes permiso para crear usuarios",
    )?;
    let Json(body) = body?;

    CREATE
        .run(
            state.store(),
            &[
                Param::from(body.username),
                Param::from(body.email),
                Param::from(body.password),
                Param::from(body.role_id),
            ],
        )
        .await
}

/// PUT /users/:id - administrators, or the user editing their own record
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    principal: Option<Extension<Principal>>,
    body: Result<Json<UserBody>, JsonRejection>,
) -> ApiResult<MessageBody> {
    state.authorize(
        principal.as_deref(),
        Action::Update,
        target_id(&path),
        "No tienes permiso para actualizar este usuario",
    )?;
    let Path(id) = path?;
    let Json(body) = body?;

    UPDATE
        .run(
            state.store(),
            &[
                Param::from(body.username),
                Param::from(body.email),
                Param::from(body.password),
                Param::from(body.role_id),
                Param::from(id),
            ],
        )
        .await
}

/// DELETE /users/:id - administrators, or the user deleting their own record
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    principal: Option<Extension<Principal>>,
) -> ApiResult<MessageBody> {
    state.authorize(
        principal.as_deref(),
        Action::Delete,
        target_id(&path),
        "No tienes permiso para eliminar este usuario",
    )?;
    let Path(id) = path?;

    DELETE.run(state.store(), &[Param::from(id)]).await
}

/// An unparseable id matches nobody's own record; only administrators get past it
fn target_id(path: &Result<Path<i64>, PathRejection>) -> Option<i64> {
    path.as_ref().ok().map(|Path(id)| *id)
}
