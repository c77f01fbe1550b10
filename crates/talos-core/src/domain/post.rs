use serde::{Deserialize, Serialize};

/// Post entity - one row in the post table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Assigned by the store on first save; `None` for a post that has
    /// never been persisted. Immutable once set.
    pub id: Option<i64>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub user_id: i64,
}

/// Transfer object for create and update input.
///
/// Every field is optional; which ones are mandatory depends on the
/// operation and is enforced by the service, not by deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostData {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub user_id: Option<i64>,
}

impl Post {
    /// Copy the `Some` title/body fields from `data` onto this post.
    ///
    /// A `None` field leaves the stored value as it is. `id` and `user_id`
    /// are never touched.
    pub fn apply(&mut self, data: &PostData) {
        if let Some(title) = &data.title {
            self.title = Some(title.clone());
        }
        if let Some(body) = &data.body {
            self.body = Some(body.clone());
        }
    }
}
