mod config;
mod firebase;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::firebase::{AppCell, FirebaseStore};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let s = Settings::from_env()?;
    let cell = AppCell::new();
    let store = FirebaseStore::new(&s, &cell)?;

    tracing::info!(
        project_id = %store.app().project_id(),
        database_url = %store.app().database_url(),
        news_sources = s.news.sources.len(),
        track_keywords = s.social.track_keywords.len(),
        sentiment_threshold = s.model.sentiment_threshold,
        "bootstrap complete"
    );

    // Collectors and the model pipeline attach here once they land; until
    // then the process idles so the connection handle stays warm.
    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    Ok(())
}
