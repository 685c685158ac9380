use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use validator::Validate;

use crate::{
    models::posts::{CreatePostDto, DeletePostDto},
    AppState, Error, Result,
};

pub fn posts_handler() -> Router {
    Router::new()
        .route("/all_posts", get(all_posts))
        .route("/create_post", post(create_post))
        .route("/delete_post", post(delete_post))
}

async fn all_posts(Extension(app_state): Extension<Arc<AppState>>) -> Result<impl IntoResponse> {
    let posts = app_state.posts_service.get_posts().await?;
    Ok((StatusCode::OK, Json(posts)))
}

async fn create_post(
    Extension(app_state): Extension<Arc<AppState>>,
    payload: core::result::Result<Json<CreatePostDto>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(new_post) = payload.map_err(|e| Error::BadRequest(e.body_text()))?;
    new_post.validate()?;

    let post = app_state.posts_service.create_post(new_post).await?;
    Ok((StatusCode::OK, Json(post)))
}

async fn delete_post(
    Extension(app_state): Extension<Arc<AppState>>,
    payload: core::result::Result<Json<DeletePostDto>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(target) = payload.map_err(|e| Error::BadRequest(e.body_text()))?;

    let deleted_post = app_state.posts_service.delete_post(target.id).await?;
    Ok((StatusCode::OK, Json(deleted_post)))
}
