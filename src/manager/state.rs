use std::fmt;

use fake::{
    faker::lorem::en::{Paragraph, Sentence},
    Fake, Faker,
};

use crate::models::posts::{CreatePostDto, Post, PostId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Field values of the create dialog. Not part of the entity model.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormBuffer {
    pub title: String,
    pub content: String,
    pub published: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormError {
    pub missing: Vec<&'static str>,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "required fields missing: {}", self.missing.join(", "))
    }
}

impl std::error::Error for FormError {}

impl FormBuffer {
    /// Example values for the create dialog.
    pub fn random() -> Self {
        Self {
            title: Sentence(3..8).fake(),
            content: Paragraph(2..5).fake(),
            published: Some(Faker.fake()),
        }
    }

    /// Required-field check done before a submission is handed to the manager.
    /// Same rule as the server: a field only needs to be non-empty.
    pub fn draft(&self) -> Result<CreatePostDto, FormError> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.content.is_empty() {
            missing.push("content");
        }
        if self.published.is_none() {
            missing.push("published");
        }

        match (missing.is_empty(), self.published) {
            (true, Some(published)) => Ok(CreatePostDto {
                title: self.title.clone(),
                content: self.content.clone(),
                published,
            }),
            _ => Err(FormError { missing }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Loaded(Vec<Post>),
    Created(Post),
    Deleted(PostId),
    OpenDialog,
    /// Cancel: closes the dialog and clears the form.
    CloseDialog,
    /// Submit or delete: closes the dialog, the form keeps its values.
    HideDialog,
    ResetForm,
    FillForm(FormBuffer),
}

/// Last-known server state plus dialog state. Every change goes through `apply`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostsState {
    posts: Vec<Post>,
    dialog: DialogState,
    form: FormBuffer,
}

impl PostsState {
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn form(&self) -> &FormBuffer {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormBuffer {
        &mut self.form
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Loaded(posts) => self.posts = posts,
            Action::Created(post) => {
                // ids stay unique within the list
                match self.posts.iter_mut().find(|p| p.id == post.id) {
                    Some(existing) => *existing = post,
                    None => self.posts.push(post),
                }
            }
            Action::Deleted(id) => self.posts.retain(|p| p.id != id),
            Action::OpenDialog => {
                self.dialog = DialogState::Open;
                self.form = FormBuffer::default();
            }
            Action::CloseDialog => {
                self.dialog = DialogState::Closed;
                self.form = FormBuffer::default();
            }
            Action::HideDialog => self.dialog = DialogState::Closed,
            Action::ResetForm => self.form = FormBuffer::default(),
            Action::FillForm(form) => self.form = form,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: PostId, title: &str) -> Post {
        Post {
            id,
            title: title.into(),
            content: "Body".into(),
            published: false,
        }
    }

    #[test]
    fn loaded_replaces_list_wholesale() {
        let mut state = PostsState::default();
        state.apply(Action::Loaded(vec![post(9, "Old")]));
        state.apply(Action::Loaded(vec![post(2, "B"), post(1, "A")]));

        assert_eq!(state.posts(), &[post(2, "B"), post(1, "A")]);
    }

    #[test]
    fn created_appends_and_deleted_removes_by_id() {
        let mut state = PostsState::default();
        state.apply(Action::Loaded(vec![post(1, "A"), post(2, "B")]));
        state.apply(Action::Created(post(3, "C")));
        assert_eq!(state.posts(), &[post(1, "A"), post(2, "B"), post(3, "C")]);

        state.apply(Action::Deleted(2));
        assert_eq!(state.posts(), &[post(1, "A"), post(3, "C")]);

        state.apply(Action::Deleted(42));
        assert_eq!(state.posts().len(), 2);
    }

    #[test]
    fn created_with_known_id_replaces_entry() {
        let mut state = PostsState::default();
        state.apply(Action::Loaded(vec![post(1, "A"), post(2, "B")]));
        state.apply(Action::Created(post(1, "A2")));

        assert_eq!(state.posts(), &[post(1, "A2"), post(2, "B")]);
    }

    #[test]
    fn dialog_open_and_close_clear_the_form() {
        let mut state = PostsState::default();
        assert_eq!(state.dialog(), DialogState::Closed);

        state.apply(Action::FillForm(FormBuffer::random()));
        state.apply(Action::OpenDialog);
        assert_eq!(state.dialog(), DialogState::Open);
        assert_eq!(state.form(), &FormBuffer::default());

        state.apply(Action::FillForm(FormBuffer::random()));
        state.apply(Action::ResetForm);
        assert_eq!(state.dialog(), DialogState::Open);
        assert_eq!(state.form(), &FormBuffer::default());

        state.apply(Action::FillForm(FormBuffer::random()));
        state.apply(Action::CloseDialog);
        assert_eq!(state.dialog(), DialogState::Closed);
        assert_eq!(state.form(), &FormBuffer::default());
    }

    #[test]
    fn draft_lists_missing_fields() {
        let err = FormBuffer::default().draft().unwrap_err();
        assert_eq!(err.missing, vec!["title", "content", "published"]);

        let form = FormBuffer {
            title: "New".into(),
            content: String::new(),
            published: Some(true),
        };
        assert_eq!(form.draft().unwrap_err().missing, vec!["content"]);
    }

    #[test]
    fn whitespace_counts_as_filled_like_the_server_rule() {
        use validator::Validate;

        let form = FormBuffer {
            title: "   ".into(),
            content: " ".into(),
            published: Some(false),
        };
        let draft = form.draft().unwrap();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn hide_dialog_keeps_form_values() {
        let mut state = PostsState::default();
        state.apply(Action::OpenDialog);
        let filled = FormBuffer {
            title: "New".into(),
            content: "Body".into(),
            published: Some(true),
        };
        state.apply(Action::FillForm(filled.clone()));

        state.apply(Action::HideDialog);
        assert_eq!(state.dialog(), DialogState::Closed);
        assert_eq!(state.form(), &filled);
    }

    #[test]
    fn random_form_is_always_submittable() {
        for _ in 0..20 {
            let draft = FormBuffer::random().draft().unwrap();
            assert!(!draft.title.is_empty());
            assert!(!draft.content.is_empty());
        }
    }
}
