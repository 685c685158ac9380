use async_trait::async_trait;

use crate::{
    models::posts::{Post, PostId},
    Result,
};

use super::PostgresRepo;

#[async_trait]
pub trait PostsRepository: Sync + Send {
    async fn get_posts(&self) -> Result<Vec<Post>>;
    async fn create_post(&self, title: &str, content: &str, published: bool) -> Result<Post>;
    /// Returns the removed post, or `None` when no post has that id.
    async fn delete_post(&self, post_id: PostId) -> Result<Option<Post>>;
}

#[async_trait]
impl PostsRepository for PostgresRepo {
    async fn get_posts(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, published FROM posts ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    async fn create_post(&self, title: &str, content: &str, published: bool) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, published)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, published
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(published)
        .fetch_one(&self.pool)
        .await?;
        Ok(post)
    }

    async fn delete_post(&self, post_id: PostId) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            DELETE FROM posts WHERE id = $1
            RETURNING id, title, content, published
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }
}
