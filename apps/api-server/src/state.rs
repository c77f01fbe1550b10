//! Application state - shared across all handlers.

use std::sync::Arc;

use talos_core::ports::{PostRepository, UserDirectory};
use talos_core::service::PostService;
use talos_infra::HttpUserDirectory;
use talos_infra::database::InMemoryPostRepository;

#[cfg(feature = "postgres")]
use talos_infra::database::{self, PostgresPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let directory: Arc<dyn UserDirectory> =
            Arc::new(HttpUserDirectory::new(config.user_directory_url.clone()));

        #[cfg(feature = "postgres")]
        let store: Arc<dyn PostRepository> = {
            if let Some(db_config) = &config.database {
                match database::connect(db_config).await {
                    Ok(db) => Arc::new(PostgresPostRepository::new(db)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryPostRepository::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let store: Arc<dyn PostRepository> = {
            tracing::info!("Running without postgres feature - using in-memory store");
            Arc::new(InMemoryPostRepository::new())
        };

        tracing::info!("Application state initialized");

        Self {
            posts: Arc::new(PostService::new(store, directory)),
        }
    }
}
