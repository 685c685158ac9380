use std::sync::Arc;

use axum::Router;
use repositories::{posts_repo::PostsRepository, MemoryRepo, PostgresRepo};
use routes::create_router;
use services::posts::PostsService;
use tracing::{info, warn};

pub use self::config::Config;
pub use self::errors::{Error, Result};

pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod manager;
pub mod models;
pub mod notify;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod view;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub posts_service: PostsService,
}

impl AppState {
    pub fn new(config: Config, repo: Arc<dyn PostsRepository>) -> Self {
        Self {
            config,
            posts_service: PostsService::new(repo),
        }
    }

    /// Picks Postgres when `DATABASE_URL` is configured, the memory store otherwise.
    pub async fn from_config(config: Config) -> Result<Self> {
        let repo: Arc<dyn PostsRepository> = match &config.database_url {
            Some(url) => {
                let repo = PostgresRepo::connect(url, config.max_connections).await?;
                repo.migrate().await?;
                info!("✅ Connection to the database is successful!");
                Arc::new(repo)
            }
            None => {
                warn!("DATABASE_URL not set, posts are kept in memory");
                Arc::new(MemoryRepo::new())
            }
        };

        Ok(Self::new(config, repo))
    }

    pub fn into_router(self) -> Router {
        create_router(Arc::new(self))
    }
}
