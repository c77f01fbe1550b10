//! In-memory post store - used as fallback when no database is configured.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use talos_core::domain::Post;
use talos_core::error::RepoError;
use talos_core::ports::PostRepository;

/// In-memory post store using a HashMap behind an async RwLock.
///
/// Ids are assigned from a process-local counter.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    rows: RwLock<HashMap<i64, Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Post>, RepoError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn save(&self, mut post: Post) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;
        let id = match post.id {
            Some(id) => id,
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                post.id = Some(id);
                id
            }
        };
        rows.insert(id, post.clone());
        Ok(post)
    }

    async fn delete(&self, post: &Post) -> Result<(), RepoError> {
        let Some(id) = post.id else {
            return Err(RepoError::NotFound);
        };
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}
