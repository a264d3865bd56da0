use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryBody {
    #[serde(rename = "categoryName")]
    pub category_name: Option<String>,
}
