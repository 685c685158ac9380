use async_trait::async_trait;

use crate::{
    models::posts::{Post, PostId},
    Result,
};

use super::{posts_repo::PostsRepository, MemoryRepo};

#[async_trait]
impl PostsRepository for MemoryRepo {
    async fn get_posts(&self) -> Result<Vec<Post>> {
        let store = self.store.read().await;
        Ok(store.posts.clone())
    }

    async fn create_post(&self, title: &str, content: &str, published: bool) -> Result<Post> {
        let mut store = self.store.write().await;
        store.last_id += 1;

        let post = Post {
            id: store.last_id,
            title: title.to_string(),
            content: content.to_string(),
            published,
        };
        store.posts.push(post.clone());

        Ok(post)
    }

    async fn delete_post(&self, post_id: PostId) -> Result<Option<Post>> {
        let mut store = self.store.write().await;
        let removed = store
            .posts
            .iter()
            .position(|p| p.id == post_id)
            .map(|index| store.posts.remove(index));

        Ok(removed)
    }
}
