use serde::{Deserialize, Serialize};

/// A single post from the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Request body for creating or replacing a post.
#[derive(Debug, Clone, Serialize)]
pub struct PostInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}
