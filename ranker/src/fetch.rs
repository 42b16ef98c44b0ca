use crate::config::FetchConfig;
use crate::extract::extract_titles;
use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub fn build_client(cfg: &FetchConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(cfg.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(5))
        .timeout(cfg.timeout)
        .build()?;
    Ok(client)
}

/// Download the configured page and pull the titles out of it.
pub async fn fetch_titles(client: &Client, cfg: &FetchConfig) -> Result<Vec<String>> {
    tracing::info!(url = %cfg.url, selector = %cfg.selector, "fetching titles");
    let resp = client
        .get(cfg.url.clone())
        .send()
        .await
        .with_context(|| format!("request to {} failed", cfg.url))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(anyhow!("{} returned {}", cfg.url, status));
    }
    let body = resp.text().await.context("reading response body")?;
    tracing::debug!(bytes = body.len(), "page downloaded");
    let titles = extract_titles(&body, &cfg.selector)?;
    tracing::info!(titles = titles.len(), "extracted titles");
    Ok(titles)
}

/// One title per line from `path`, or stdin when `path` is `-`. Blank lines are skipped.
pub fn read_titles(path: &str) -> Result<Vec<String>> {
    if path == "-" {
        return collect_lines(io::stdin().lock());
    }
    let f = File::open(Path::new(path)).with_context(|| format!("opening {path}"))?;
    collect_lines(BufReader::new(f))
}

fn collect_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut titles = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let t = line.trim();
        if t.is_empty() { continue; }
        titles.push(t.to_string());
    }
    Ok(titles)
}
