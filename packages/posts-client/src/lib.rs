//! Pure posts REST API client.
//!
//! A minimal client for a JSON posts resource (`/posts`, `/posts/{id}`) such as
//! the one served by jsonplaceholder. One request per call, no retry, no
//! caching.
//!
//! # Example
//!
//! ```rust,ignore
//! use posts_client::PostsClient;
//!
//! let client = PostsClient::new();
//!
//! let posts = client.list_posts().await?;
//! let created = client.create_post("Title", "Body").await?;
//! client.delete_post(created.id).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{PostsError, Result};
pub use types::{Post, PostInput};

use std::time::Duration;

use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Base URL of the public jsonplaceholder service.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Author id sent with create and update requests unless overridden.
pub const DEFAULT_USER_ID: i64 = 1;

#[derive(Clone)]
pub struct PostsClient {
    client: reqwest::Client,
    base_url: String,
    user_id: i64,
}

impl Default for PostsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PostsClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID,
        }
    }

    /// Point the client at a different host (proxies, local fakes).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Author id written into create and update bodies.
    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Apply a per-request timeout. Without one the transport default applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PostsError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// `GET /posts`, in server order.
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let resp = self
            .send(Method::GET, &self.collection_url(), None)
            .await?;
        let posts: Vec<Post> = read_json(resp).await?;
        debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    /// `POST /posts`. The returned post carries the server-assigned id.
    pub async fn create_post(&self, title: &str, body: &str) -> Result<Post> {
        let input = PostInput {
            id: None,
            title: title.to_string(),
            body: body.to_string(),
            user_id: self.user_id,
        };
        let resp = self
            .send(Method::POST, &self.collection_url(), Some(&input))
            .await?;
        read_json(resp).await
    }

    /// `PUT /posts/{id}`. Whatever the remote store answers is passed through.
    pub async fn update_post(&self, id: i64, title: &str, body: &str) -> Result<Post> {
        let input = PostInput {
            id: Some(id),
            title: title.to_string(),
            body: body.to_string(),
            user_id: self.user_id,
        };
        let resp = self
            .send(Method::PUT, &self.item_url(id), Some(&input))
            .await?;
        read_json(resp).await
    }

    /// `DELETE /posts/{id}`. The response body is ignored.
    pub async fn delete_post(&self, id: i64) -> Result<()> {
        self.send(Method::DELETE, &self.item_url(id), None).await?;
        Ok(())
    }

    fn collection_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }

    /// Issue one request and turn any non-2xx status into [`PostsError::Api`].
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&PostInput>,
    ) -> Result<Response> {
        let mut request = self.client.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request.send().await?;
        let status = resp.status();
        debug!(%method, url, status = status.as_u16(), "Posts API response");

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(PostsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp)
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| PostsError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_ignored() {
        let client = PostsClient::new().with_base_url("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.item_url(4), "http://localhost:3000/posts/4");
    }

    #[test]
    fn defaults_match_public_service() {
        let client = PostsClient::new();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.user_id(), DEFAULT_USER_ID);
        assert_eq!(
            client.collection_url(),
            "https://jsonplaceholder.typicode.com/posts"
        );
    }
}
