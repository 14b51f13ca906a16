//! Config document loading with example fallback.

use anyhow::Context;
use casona_model::SiteConfig;
use gloo::console;
use gloo_net::http::Request;

/// Fetch the primary config, falling back to the bundled example on any
/// failure. Both failing is an unrecoverable startup error for the caller.
pub(crate) async fn load_config() -> anyhow::Result<SiteConfig> {
    match fetch("config.json").await {
        Ok(config) => Ok(config),
        Err(err) => {
            console::warn!("config.json unavailable, using example", err.to_string());
            fetch("config.example.json")
                .await
                .context("both config fetches failed")
        }
    }
}

async fn fetch(url: &str) -> anyhow::Result<SiteConfig> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        anyhow::bail!("{url}: status {}", response.status());
    }
    Ok(response.json::<SiteConfig>().await?)
}
