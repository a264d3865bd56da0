use serde::{Deserialize, Serialize};

/// Body of `POST /users` and `PUT /users/:id`.
///
/// The password is an opaque credential stored exactly as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserBody {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role_id: Option<i64>,
}
