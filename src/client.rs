//! Client side of the posts API.

use std::fmt;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::posts::{CreatePostDto, DeletePostDto, Post, PostId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with something other than 200. `body` is the
    /// serialized JSON body (or the raw text when it was not JSON).
    Rejected { status: u16, body: String },
    /// The request never completed.
    Transport(String),
    /// A 200 response whose body could not be read as the expected type.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { body, .. } => write!(f, "{body}"),
            Self::Transport(detail) => write!(f, "{detail}"),
            Self::Decode(detail) => write!(f, "invalid response body: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Post>, ApiError>;
    async fn create(&self, draft: &CreatePostDto) -> Result<Post, ApiError>;
    async fn delete(&self, id: PostId) -> Result<(), ApiError>;
}

#[derive(Clone)]
pub struct HttpPostsApi {
    client: Client,
    base_url: String,
}

impl HttpPostsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }
}

async fn read_ok<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    let status = res.status();
    let text = res.text().await?;

    if status != StatusCode::OK {
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(json) => json.to_string(),
            Err(_) => text,
        };
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        let res = self
            .client
            .get(self.url("all_posts"))
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        read_ok(res).await
    }

    async fn create(&self, draft: &CreatePostDto) -> Result<Post, ApiError> {
        let res = self
            .client
            .post(self.url("create_post"))
            .header(ACCEPT, "application/json")
            .json(draft)
            .send()
            .await?;
        read_ok(res).await
    }

    async fn delete(&self, id: PostId) -> Result<(), ApiError> {
        let res = self
            .client
            .post(self.url("delete_post"))
            .header(ACCEPT, "application/json")
            .json(&DeletePostDto { id })
            .send()
            .await?;
        // Only the presence of a JSON body matters here.
        read_ok::<Value>(res).await?;
        Ok(())
    }
}
