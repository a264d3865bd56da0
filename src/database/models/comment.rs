use serde::{Deserialize, Serialize};

/// Body of `POST /comments` and `PUT /comments/:id`. Updates only touch the text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentBody {
    pub comment: Option<String>,
    #[serde(rename = "postId")]
    pub post_id: Option<i64>,
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}
