//! JSON fixtures read from a directory
//!
//! Looks for `weather.json`, `finance.json`, `news.json` and `activity.json`.
//! A missing file is an empty answer, not an error.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use skydeck_core::prelude::*;
use skydeck_core::{ActivityPayload, FinancePayload, NewsPayload, WeatherPayload, WidgetKind};

use super::DataProvider;

#[derive(Debug, Clone)]
pub struct FixtureProvider {
    dir: PathBuf,
}

impl FixtureProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn fixture_path(&self, kind: WidgetKind) -> PathBuf {
        self.dir.join(format!("{kind}.json"))
    }

    async fn read<T: DeserializeOwned>(&self, kind: WidgetKind) -> Result<Option<T>> {
        let path = self.fixture_path(kind);

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No fixture at {:?}", path);
                return Ok(None);
            }
            Err(e) => {
                warn!("Failed to read fixture {:?}: {}", path, e);
                return Err(Error::fixture(path));
            }
        };

        if content.trim().is_empty() || content.trim() == "null" {
            return Ok(None);
        }

        let payload = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse fixture {:?}", path))?;
        Ok(Some(payload))
    }
}

impl DataProvider for FixtureProvider {
    async fn fetch_weather(&self) -> Result<Option<WeatherPayload>> {
        self.read(WidgetKind::Weather).await
    }

    async fn fetch_finance(&self) -> Result<Option<FinancePayload>> {
        self.read(WidgetKind::Finance).await
    }

    async fn fetch_news(&self) -> Result<Option<NewsPayload>> {
        self.read(WidgetKind::News).await
    }

    async fn fetch_activity(&self) -> Result<Option<ActivityPayload>> {
        self.read(WidgetKind::Activity).await
    }
}
