use std::sync::Arc;

use crate::domain::{Post, PostData};
use crate::error::DomainError;
use crate::ports::{PostRepository, UserDirectory};

/// Orchestrates post CRUD: validates input, checks the owning user against
/// the external directory on create, and delegates persistence to the store.
///
/// Collaborators are injected at construction; the service holds no other
/// state and every operation is a single request-response sequence.
pub struct PostService {
    store: Arc<dyn PostRepository>,
    directory: Arc<dyn UserDirectory>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostRepository>, directory: Arc<dyn UserDirectory>) -> Self {
        Self { store, directory }
    }

    /// Create a post owned by `data.user_id`.
    ///
    /// The user id is mandatory and must exist in the external directory at
    /// creation time. Validation and the directory lookup happen strictly
    /// before the write, so a rejected create leaves the store untouched.
    pub async fn create_post(&self, data: &PostData) -> Result<Post, DomainError> {
        let user_id = data
            .user_id
            .ok_or(DomainError::InvalidInput("post user id is mandatory"))?;

        if self.directory.find_user(user_id).await?.is_none() {
            return Err(DomainError::NotFound {
                entity: "user",
                id: user_id,
            });
        }

        let post = Post {
            id: None,
            title: data.title.clone(),
            body: data.body.clone(),
            user_id,
        };

        Ok(self.store.save(post).await?)
    }

    /// Find a post by id. A missing post is `Ok(None)`, not an error.
    pub async fn find_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// All posts, in store order. No pagination.
    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.store.find_all().await?)
    }

    /// All posts owned by `user_id`.
    ///
    /// The user is not checked against the directory; listing posts of a
    /// since-deleted user works.
    pub async fn list_user_posts(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
        Ok(self.store.find_by_user_id(user_id).await?)
    }

    /// Update the title/body of an existing post.
    ///
    /// Only the `Some` fields of `data` are applied. The owning user id is
    /// never changed by an update and is not re-validated.
    pub async fn update_post(&self, data: &PostData) -> Result<Post, DomainError> {
        let id = data
            .id
            .ok_or(DomainError::InvalidInput("post id is mandatory"))?;

        let mut post = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "post", id })?;

        post.apply(data);
        Ok(self.store.save(post).await?)
    }

    /// Delete a post by id.
    ///
    /// Deleting a post that does not exist is an error, unlike `find_post`.
    pub async fn delete_post(&self, id: i64) -> Result<(), DomainError> {
        let post = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "post", id })?;

        Ok(self.store.delete(&post).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI64, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::{DirectoryError, RepoError};
    use crate::ports::DirectoryUser;

    #[derive(Default)]
    struct FakeStore {
        rows: Mutex<HashMap<i64, Post>>,
        next_id: AtomicI64,
    }

    impl FakeStore {
        fn row_count(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PostRepository for FakeStore {
        async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Post>, RepoError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn save(&self, mut post: Post) -> Result<Post, RepoError> {
            let id = match post.id {
                Some(id) => id,
                None => {
                    let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                    post.id = Some(id);
                    id
                }
            };
            self.rows.lock().unwrap().insert(id, post.clone());
            Ok(post)
        }

        async fn delete(&self, post: &Post) -> Result<(), RepoError> {
            let id = post.id.ok_or(RepoError::NotFound)?;
            self.rows
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(RepoError::NotFound)
        }
    }

    struct FakeDirectory {
        known: Vec<i64>,
    }

    #[async_trait]
    impl UserDirectory for FakeDirectory {
        async fn find_user(&self, user_id: i64) -> Result<Option<DirectoryUser>, DirectoryError> {
            Ok(self.known.contains(&user_id).then(|| DirectoryUser {
                id: user_id,
                name: "Leanne Graham".to_owned(),
                username: "Bret".to_owned(),
                email: "Sincere@april.biz".to_owned(),
            }))
        }
    }

    struct UnreachableDirectory;

    #[async_trait]
    impl UserDirectory for UnreachableDirectory {
        async fn find_user(&self, _user_id: i64) -> Result<Option<DirectoryUser>, DirectoryError> {
            Err(DirectoryError::Transport("connection refused".to_owned()))
        }
    }

    fn service_with_users(known: Vec<i64>) -> (Arc<FakeStore>, PostService) {
        let store = Arc::new(FakeStore::default());
        let service = PostService::new(store.clone(), Arc::new(FakeDirectory { known }));
        (store, service)
    }

    fn draft(title: &str, body: &str, user_id: i64) -> PostData {
        PostData {
            id: None,
            title: Some(title.to_owned()),
            body: Some(body.to_owned()),
            user_id: Some(user_id),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_keeps_user() {
        let (_store, service) = service_with_users(vec![7]);

        let post = service.create_post(&draft("Hi", "World", 7)).await.unwrap();

        assert!(post.id.is_some());
        assert_eq!(post.user_id, 7);
        assert_eq!(post.title.as_deref(), Some("Hi"));
        assert_eq!(post.body.as_deref(), Some("World"));
    }

    #[tokio::test]
    async fn create_without_user_id_is_rejected() {
        let (store, service) = service_with_users(vec![7]);
        let data = PostData {
            user_id: None,
            ..draft("Hi", "World", 0)
        };

        let err = service.create_post(&data).await.unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(store.row_count(), 0);
    }

    #[tokio::test]
    async fn create_for_unknown_user_is_rejected() {
        let (store, service) = service_with_users(vec![7]);

        let err = service.create_post(&draft("Hi", "World", 99)).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::NotFound {
                entity: "user",
                id: 99
            }
        ));
        assert_eq!(store.row_count(), 0);
    }

    #[tokio::test]
    async fn create_propagates_directory_failure() {
        let store = Arc::new(FakeStore::default());
        let service = PostService::new(store.clone(), Arc::new(UnreachableDirectory));

        let err = service.create_post(&draft("Hi", "World", 7)).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::Directory(DirectoryError::Transport(_))
        ));
        assert_eq!(store.row_count(), 0);
    }

    #[tokio::test]
    async fn find_post_absence_is_not_an_error() {
        let (_store, service) = service_with_users(vec![]);

        assert!(service.find_post(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_with_title_only_keeps_body_and_user() {
        let (_store, service) = service_with_users(vec![7]);
        let created = service.create_post(&draft("Hi", "World", 7)).await.unwrap();

        let updated = service
            .update_post(&PostData {
                id: created.id,
                title: Some("Hi2".to_owned()),
                ..PostData::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.title.as_deref(), Some("Hi2"));
        assert_eq!(updated.body.as_deref(), Some("World"));
        assert_eq!(updated.user_id, 7);
        assert_eq!(updated.id, created.id);
    }

    #[tokio::test]
    async fn update_of_missing_post_is_rejected() {
        let (store, service) = service_with_users(vec![7]);

        let err = service
            .update_post(&PostData {
                id: Some(42),
                title: Some("Hi2".to_owned()),
                ..PostData::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::NotFound {
                entity: "post",
                id: 42
            }
        ));
        assert_eq!(store.row_count(), 0);
    }

    #[tokio::test]
    async fn update_without_id_is_rejected() {
        let (_store, service) = service_with_users(vec![7]);

        let err = service
            .update_post(&PostData {
                title: Some("Hi2".to_owned()),
                ..PostData::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn delete_of_missing_post_is_rejected() {
        let (_store, service) = service_with_users(vec![7]);

        let err = service.delete_post(42).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::NotFound {
                entity: "post",
                id: 42
            }
        ));
    }

    #[tokio::test]
    async fn list_user_posts_filters_by_owner() {
        let (_store, service) = service_with_users(vec![3, 7]);
        service.create_post(&draft("a", "1", 7)).await.unwrap();
        service.create_post(&draft("b", "2", 7)).await.unwrap();
        service.create_post(&draft("c", "3", 3)).await.unwrap();

        let posts = service.list_user_posts(7).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.user_id == 7));

        // A user with no posts (or one unknown to the directory) is an
        // empty listing, not an error.
        assert!(service.list_user_posts(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_posts_returns_everything() {
        let (_store, service) = service_with_users(vec![3, 7]);
        service.create_post(&draft("a", "1", 7)).await.unwrap();
        service.create_post(&draft("b", "2", 3)).await.unwrap();

        assert_eq!(service.list_posts().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn create_update_delete_round_trip() {
        let (_store, service) = service_with_users(vec![7]);

        let created = service.create_post(&draft("Hi", "World", 7)).await.unwrap();
        let id = created.id.unwrap();

        let updated = service
            .update_post(&PostData {
                id: Some(id),
                title: Some("Hi2".to_owned()),
                ..PostData::default()
            })
            .await
            .unwrap();
        assert_eq!(updated.title.as_deref(), Some("Hi2"));
        assert_eq!(updated.body.as_deref(), Some("World"));
        assert_eq!(updated.user_id, 7);

        service.delete_post(id).await.unwrap();
        assert!(service.find_post(id).await.unwrap().is_none());
    }
}
