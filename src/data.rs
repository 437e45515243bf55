use std::path::PathBuf;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::model::Game;
use crate::schedule::sort_by_week;

/// Where the predictions document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Source::Url(raw.to_string())
        } else {
            Source::File(PathBuf::from(raw))
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => f.write_str(url),
        }
    }
}

/// Outcome of the one-shot schedule load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

pub struct DataClient {
    client: Client,
}

impl DataClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn http(&self) -> &Client {
        &self.client
    }

    /// Reads the document once and returns its games sorted by week.
    pub async fn fetch_schedule(&self, source: &Source) -> Result<Vec<Game>> {
        let body = match source {
            Source::File(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("reading {}", path.display()))?,
            Source::Url(url) => self
                .client
                .get(url)
                .send()
                .await
                .with_context(|| format!("requesting {}", url))?
                .error_for_status()
                .with_context(|| format!("requesting {}", url))?
                .text()
                .await
                .with_context(|| format!("reading body of {}", url))?,
        };
        let mut games = parse_schedule(&body).with_context(|| format!("parsing {}", source))?;
        sort_by_week(&mut games);
        Ok(games)
    }
}

impl Default for DataClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_schedule(body: &str) -> Result<Vec<Game>> {
    let games = serde_json::from_str::<Vec<Game>>(body)?;
    Ok(games)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn fixture() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/nfl_predictions_sample.json")
    }

    #[test]
    fn test_deserialize_sample() {
        let content = fs::read_to_string(fixture()).expect("Failed to read sample file");
        let games = parse_schedule(&content).expect("Failed to deserialize");
        assert!(!games.is_empty());
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(
            Source::parse("https://example.com/nfl.json"),
            Source::Url("https://example.com/nfl.json".to_string())
        );
        assert_eq!(
            Source::parse("public/nfl.json"),
            Source::File(PathBuf::from("public/nfl.json"))
        );
    }

    #[tokio::test]
    async fn test_fetch_file_sorts_by_week() {
        let client = DataClient::new();
        let games = client
            .fetch_schedule(&Source::File(fixture()))
            .await
            .expect("fixture loads");
        assert!(games.windows(2).all(|w| w[0].week <= w[1].week));
    }

    #[tokio::test]
    async fn test_fetch_missing_file_fails_with_path() {
        let client = DataClient::new();
        let err = client
            .fetch_schedule(&Source::File(PathBuf::from("does/not/exist.json")))
            .await
            .expect_err("missing file");
        assert!(format!("{:#}", err).contains("does/not/exist.json"));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_schedule(r#"{"game_id":"x"}"#).is_err());
        assert!(parse_schedule("not json").is_err());
    }
}
