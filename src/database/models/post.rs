use serde::{Deserialize, Serialize};

/// Body of `POST /posts` and `PUT /posts/:id`. Updates ignore `userId`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostBody {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}
