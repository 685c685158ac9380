//! View-model for the posts page.
//!
//! `PostManager` owns a cache of the last-known server list and keeps it in
//! sync after each list/create/delete call. Failures are terminal for the
//! operation that hit them: they surface as an error notification and leave
//! `posts` untouched. Nothing is retried.

use tracing::{debug, warn};

use crate::{
    client::{ApiError, PostsApi},
    models::posts::{CreatePostDto, Post},
    notify::{Notification, Notifier},
};

pub mod state;

pub use state::{Action, DialogState, FormBuffer, FormError, PostsState};

pub struct PostManager<A, N> {
    api: A,
    notifier: N,
    state: PostsState,
}

impl<A: PostsApi, N: Notifier> PostManager<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            state: PostsState::default(),
        }
    }

    pub fn state(&self) -> &PostsState {
        &self.state
    }

    pub fn posts(&self) -> &[Post] {
        self.state.posts()
    }

    pub fn dialog(&self) -> DialogState {
        self.state.dialog()
    }

    pub fn form(&self) -> &FormBuffer {
        self.state.form()
    }

    pub fn form_mut(&mut self) -> &mut FormBuffer {
        self.state.form_mut()
    }

    /// Replaces the list with whatever the server returns.
    pub async fn load_all(&mut self) {
        match self.api.list().await {
            Ok(posts) => {
                debug!(count = posts.len(), "loaded posts");
                self.state.apply(Action::Loaded(posts));
            }
            Err(err) => {
                warn!(error = %err, "failed to load posts");
                self.notifier
                    .notify(Notification::error(format!("Failed to load posts: {err}")));
            }
        }
    }

    /// Closes the dialog before the request goes out, then appends the created
    /// post on success.
    pub async fn create(&mut self, draft: CreatePostDto) {
        self.state.apply(Action::HideDialog);

        match self.api.create(&draft).await {
            Ok(post) => {
                let message = format!("created post {}", post.title);
                self.state.apply(Action::Created(post));
                self.notifier.notify(Notification::success(message));
            }
            Err(ApiError::Rejected { body, .. }) => {
                self.notifier
                    .notify(Notification::error(format!("Failed to create post:\n {body}")));
            }
            Err(err) => self.notifier.notify(Notification::error(err.to_string())),
        }
    }

    /// Deletes immediately; there is no confirmation step.
    pub async fn delete(&mut self, post: &Post) {
        self.state.apply(Action::HideDialog);

        match self.api.delete(post.id).await {
            Ok(()) => {
                self.state.apply(Action::Deleted(post.id));
                self.notifier
                    .notify(Notification::success(format!("Deleted post {}", post.title)));
            }
            Err(ApiError::Rejected { .. }) => {
                self.notifier.notify(Notification::error(format!(
                    "Failed to delete post:\n {}",
                    post.title
                )));
            }
            Err(err) => {
                self.notifier.notify(Notification::error(format!(
                    "Failed to delete post:\n {}: {err}",
                    post.title
                )));
            }
        }
    }

    pub fn open_create_dialog(&mut self) {
        self.state.apply(Action::OpenDialog);
    }

    pub fn cancel_dialog(&mut self) {
        self.state.apply(Action::CloseDialog);
    }

    pub fn reset_form(&mut self) {
        self.state.apply(Action::ResetForm);
    }

    pub fn fill_random(&mut self) {
        self.state.apply(Action::FillForm(FormBuffer::random()));
    }
}
