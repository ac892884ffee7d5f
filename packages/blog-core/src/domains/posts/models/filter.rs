use posts_client::Post;

/// Identifier filter for the posts view.
///
/// An empty criterion shows everything. Anything else is compared verbatim
/// against the decimal form of each post id, so at most one post matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostFilter {
    criterion: String,
}

impl PostFilter {
    pub fn new(criterion: impl Into<String>) -> Self {
        Self {
            criterion: criterion.into(),
        }
    }

    pub fn criterion(&self) -> &str {
        &self.criterion
    }

    pub fn is_empty(&self) -> bool {
        self.criterion.is_empty()
    }

    pub fn matches(&self, post: &Post) -> bool {
        self.is_empty() || post.id.to_string() == self.criterion
    }

    /// Order-preserving projection of `posts`.
    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        posts.iter().filter(|post| self.matches(post)).collect()
    }
}
