use serde::{Deserialize, Serialize};
use validator::Validate;

pub type PostId = i64;

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub published: bool,
}

/// Body of `POST /api/create_post`. Also the draft a client submits from its form.
#[derive(Validate, Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CreatePostDto {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    pub published: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct DeletePostDto {
    pub id: PostId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dto_requires_title_and_content() {
        let dto = CreatePostDto {
            title: String::new(),
            content: String::new(),
            published: true,
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("content"));

        let dto = CreatePostDto {
            title: "Hello".into(),
            content: "World".into(),
            published: false,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn post_uses_plain_field_names_on_the_wire() {
        let post = Post {
            id: 1,
            title: "Hello".into(),
            content: "World".into(),
            published: true,
        };
        assert_eq!(
            serde_json::to_value(&post).unwrap(),
            serde_json::json!({"id": 1, "title": "Hello", "content": "World", "published": true})
        );
    }
}
