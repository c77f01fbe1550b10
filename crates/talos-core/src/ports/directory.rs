use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;

/// A user record as the external directory reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// External user directory - answers whether a user id exists.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look up a user by id.
    ///
    /// `Ok(None)` means the directory explicitly reported the user as
    /// absent; any other failure surfaces as a `DirectoryError`.
    async fn find_user(&self, user_id: i64) -> Result<Option<DirectoryUser>, DirectoryError>;
}
