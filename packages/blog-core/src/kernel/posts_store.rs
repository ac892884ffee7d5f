use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use posts_client::{Post, PostsClient};

use super::BasePostStore;
use crate::Config;

#[async_trait]
impl BasePostStore for PostsClient {
    async fn list_posts(&self) -> posts_client::Result<Vec<Post>> {
        PostsClient::list_posts(self).await
    }

    async fn create_post(&self, title: &str, body: &str) -> posts_client::Result<Post> {
        PostsClient::create_post(self, title, body).await
    }

    async fn update_post(&self, id: i64, title: &str, body: &str) -> posts_client::Result<Post> {
        PostsClient::update_post(self, id, title, body).await
    }

    async fn delete_post(&self, id: i64) -> posts_client::Result<()> {
        PostsClient::delete_post(self, id).await
    }
}

/// Build the HTTP-backed post store described by `config`.
pub fn create_post_store(config: &Config) -> Result<Arc<dyn BasePostStore>> {
    let mut client = PostsClient::new()
        .with_base_url(config.posts_api_url.as_str())
        .with_user_id(config.user_id);

    if let Some(timeout) = config.http_timeout {
        client = client
            .with_timeout(timeout)
            .context("Failed to create HTTP client")?;
    }

    tracing::info!(base_url = %client.base_url(), "Using remote post store");
    Ok(Arc::new(client))
}
