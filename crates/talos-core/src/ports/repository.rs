use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Persistence boundary for posts.
///
/// Absence is reported as `Ok(None)` or an empty vec; whether a missing
/// row is an error is the caller's decision, not the store's.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// All posts, in store order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// All posts owned by the given user.
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Post>, RepoError>;

    /// Save a post: inserts and assigns an id when `post.id` is `None`,
    /// updates the existing row otherwise.
    async fn save(&self, post: Post) -> Result<Post, RepoError>;

    /// Delete a previously loaded post.
    async fn delete(&self, post: &Post) -> Result<(), RepoError>;
}
