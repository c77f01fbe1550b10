//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a post.
///
/// `user_id` is mandatory for the operation to succeed but optional in the
/// wire format; the service reports the missing field, not the decoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub user_id: Option<i64>,
}

/// Request to update a post. Absent fields keep their stored value; the
/// owning user cannot be changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// A stored post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub user_id: i64,
}
