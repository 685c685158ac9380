use std::sync::Arc;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tokio::sync::RwLock;

use crate::{models::posts::Post, Result};

pub mod memory_repo;
pub mod posts_repo;

#[derive(Clone)]
pub struct PostgresRepo {
    pool: PgPool,
}

impl PostgresRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

/// In-process store used when no database is configured.
#[derive(Clone, Default)]
pub struct MemoryRepo {
    store: Arc<RwLock<MemoryStore>>,
}

#[derive(Default)]
struct MemoryStore {
    last_id: i64,
    posts: Vec<Post>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }
}
