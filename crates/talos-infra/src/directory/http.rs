use async_trait::async_trait;
use reqwest::StatusCode;

use talos_core::error::DirectoryError;
use talos_core::ports::{DirectoryUser, UserDirectory};

/// User directory backed by a JSONPlaceholder-style HTTP API.
///
/// A lookup issues `GET {base_url}/users/{id}`. A 404 is the one response
/// treated as an explicit absence; every other failure surfaces as an
/// error. No retries, no caching.
pub struct HttpUserDirectory {
    base_url: String,
    client: reqwest::Client,
}

impl HttpUserDirectory {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn find_user(&self, user_id: i64) -> Result<Option<DirectoryUser>, DirectoryError> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        tracing::debug!(%url, "looking up user in directory");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let user = response
                    .json::<DirectoryUser>()
                    .await
                    .map_err(|e| DirectoryError::Decode(e.to_string()))?;
                Ok(Some(user))
            }
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(DirectoryError::Status(status.as_u16())),
        }
    }
}
