// Interactive terminal front-end for the blog posts session

mod app;
mod render;

use anyhow::{Context, Result};
use blog_core::{kernel::create_post_store, Config, Reconciler, Session};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "blog", about = "Create, edit, delete and filter blog posts")]
struct Cli {
    /// Base URL of the posts API (overrides POSTS_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Author id sent with new and edited posts (overrides POSTS_USER_ID)
    #[arg(long)]
    user_id: Option<i64>,

    /// Only show the post with this id
    #[arg(long, value_name = "ID")]
    filter: Option<String>,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "warn,blog_core=info,posts_client=info",
            _ => "info,blog_core=debug,posts_client=debug",
        }
    }

    fn apply(&self, mut config: Config) -> Config {
        if let Some(url) = &self.api_url {
            config.posts_api_url = url.clone();
        }
        if let Some(user_id) = self.user_id {
            config.user_id = user_id;
        }
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they don't interleave with the menus on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.apply(Config::from_env().context("Failed to load configuration")?);
    tracing::info!(?config, "Configuration loaded");

    let store = create_post_store(&config)?;
    let reconciler = Reconciler::new(store);
    let session = match &cli.filter {
        Some(criterion) => Session::with_filter(criterion.as_str()),
        None => Session::new(),
    };

    app::run(reconciler, session).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["blog", "--api-url", "http://localhost:3000", "--user-id", "9"]);

        let config = cli.apply(Config::default());

        assert_eq!(config.posts_api_url, "http://localhost:3000");
        assert_eq!(config.user_id, 9);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["blog"]);
        assert_eq!(cli.apply(Config::default()), Config::default());
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn verbosity_raises_log_level() {
        let cli = Cli::parse_from(["blog", "-vv", "--filter", "3"]);
        assert_eq!(cli.log_filter(), "info,blog_core=debug,posts_client=debug");
        assert_eq!(cli.filter.as_deref(), Some("3"));
    }
}
