use std::fmt::Write;

use crate::models::posts::Post;

pub const LOADING_PLACEHOLDER: &str = "Give me a second";

const CONTENT_WIDTH: usize = 48;

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}

/// Renders the posts table, or the loading placeholder while the list is empty.
pub fn render_posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return LOADING_PLACEHOLDER.to_string();
    }

    let id_width = posts
        .iter()
        .map(|p| p.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let title_width = posts
        .iter()
        .map(|p| p.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("Title".len());

    let content_width = CONTENT_WIDTH;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<id_width$}  {:<title_width$}  {:<content_width$}  Published",
        "ID", "Title", "Content"
    );
    for post in posts {
        let _ = writeln!(
            out,
            "{:<id_width$}  {:<title_width$}  {:<content_width$}  {}",
            post.id,
            post.title,
            truncate(&post.content, CONTENT_WIDTH),
            if post.published { "Yes" } else { "No" }
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_shows_placeholder() {
        assert_eq!(render_posts(&[]), LOADING_PLACEHOLDER);
    }

    #[test]
    fn rows_show_published_as_yes_or_no() {
        let posts = vec![
            Post {
                id: 1,
                title: "Hello".into(),
                content: "World".into(),
                published: true,
            },
            Post {
                id: 2,
                title: "New".into(),
                content: "x".repeat(100),
                published: false,
            },
        ];

        let table = render_posts(&posts);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].starts_with("1 ") && lines[1].ends_with("Yes"));
        assert!(lines[2].starts_with("2 ") && lines[2].ends_with("No"));
        assert!(lines[2].contains('…'));
    }
}
