use std::sync::Arc;

use tracing::info;

use crate::{
    models::posts::{CreatePostDto, Post, PostId},
    repositories::posts_repo::PostsRepository,
    Error, Result,
};

#[derive(Clone)]
pub struct PostsService {
    repo: Arc<dyn PostsRepository>,
}

impl PostsService {
    pub fn new(repo: Arc<dyn PostsRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_posts(&self) -> Result<Vec<Post>> {
        let posts = self.repo.get_posts().await?;
        Ok(posts)
    }

    pub async fn create_post(&self, new_post: CreatePostDto) -> Result<Post> {
        let post = self
            .repo
            .create_post(&new_post.title, &new_post.content, new_post.published)
            .await?;

        info!(id = post.id, "created post");
        Ok(post)
    }

    pub async fn delete_post(&self, post_id: PostId) -> Result<Post> {
        let post = self.repo.delete_post(post_id).await?.ok_or(Error::NotFound)?;

        info!(id = post.id, "deleted post");
        Ok(post)
    }
}
