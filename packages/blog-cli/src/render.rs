//! Text formatting for the posts view.

use blog_core::{Post, Session};

/// Posts in the order they are printed: newest (last in the collection) first.
pub fn display_order<'a>(view: &[&'a Post]) -> Vec<&'a Post> {
    view.iter().rev().copied().collect()
}

/// One-line label used in menus.
pub fn post_label(post: &Post) -> String {
    format!("#{} {}", post.id, post.title)
}

pub fn summary(session: &Session) -> String {
    let shown = session.view().len();
    let total = session.posts().len();
    if session.filter().is_empty() {
        format!("{total} posts")
    } else {
        format!(
            "Showing {shown} of {total} posts (id = {})",
            session.filter().criterion()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, title: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            body: String::new(),
            user_id: 1,
        }
    }

    #[test]
    fn newest_first() {
        let a = post(1, "a");
        let b = post(2, "b");
        let c = post(101, "c");
        let view = vec![&a, &b, &c];

        let ids: Vec<i64> = display_order(&view).iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![101, 2, 1]);
    }

    #[test]
    fn label_has_id_and_title() {
        assert_eq!(post_label(&post(7, "Hello")), "#7 Hello");
    }

    #[test]
    fn summary_without_filter() {
        assert_eq!(summary(&Session::new()), "0 posts");
    }

    #[test]
    fn summary_with_filter() {
        let session = Session::with_filter("4");
        assert_eq!(summary(&session), "Showing 0 of 0 posts (id = 4)");
    }
}
