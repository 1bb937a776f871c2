//! Shared blocking HTTP client and cached download of the prebuilt
//! player database.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CACHE_DIR: &str = "revenge_week";

static CLIENT: OnceCell<Client> = OnceCell::new();

pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

pub fn app_cache_dir() -> Option<PathBuf> {
    if let Ok(base) = std::env::var("XDG_CACHE_HOME") {
        if !base.trim().is_empty() {
            return Some(PathBuf::from(base).join(CACHE_DIR));
        }
    }
    let home = std::env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(PathBuf::from(home).join(".cache").join(CACHE_DIR))
}

/// Download the database once and reuse the cached copy afterwards.
/// `refresh` forces a re-download over an existing cache file.
pub fn fetch_db_cached(url: &str, refresh: bool) -> Result<PathBuf> {
    let dir = app_cache_dir().context("unable to resolve cache dir")?;
    fs::create_dir_all(&dir).with_context(|| format!("create cache dir {}", dir.display()))?;
    let path = dir.join(cache_file_name(url));
    if path.exists() && !refresh {
        return Ok(path);
    }

    let client = http_client()?;
    let resp = client
        .get(url)
        .header(USER_AGENT, "Mozilla/5.0")
        .send()
        .with_context(|| format!("fetch player db {url}"))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(anyhow!("http {status} fetching {url}"));
    }
    let body = resp.bytes().context("failed reading db body")?;

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &body).context("write db cache")?;
    fs::rename(&tmp, &path).context("swap db cache")?;
    Ok(path)
}

fn cache_file_name(url: &str) -> String {
    let tail = url
        .rsplit('/')
        .next()
        .map(|s| s.split(['?', '#']).next().unwrap_or(s))
        .filter(|s| !s.is_empty())
        .unwrap_or("players.db");
    tail.to_string()
}
