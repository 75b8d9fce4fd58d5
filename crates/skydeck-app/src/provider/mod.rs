//! Data providers for dashboard widgets
//!
//! Widgets treat the provider as an opaque asynchronous source with a fixed
//! response shape. `Ok(None)` means the provider answered with nothing.

pub mod fixtures;
pub mod mock;

use std::path::PathBuf;
use std::time::Duration;

use skydeck_core::prelude::*;
use skydeck_core::{
    ActivityPayload, FinancePayload, NewsPayload, WeatherPayload, WidgetData, WidgetKind,
};

use crate::config::{ProviderKind, ProviderSettings};

pub use fixtures::FixtureProvider;
pub use mock::MockProvider;

/// Per-domain fetch operations.
#[trait_variant::make(DataProvider: Send)]
pub trait LocalDataProvider {
    async fn fetch_weather(&self) -> Result<Option<WeatherPayload>>;

    async fn fetch_finance(&self) -> Result<Option<FinancePayload>>;

    async fn fetch_news(&self) -> Result<Option<NewsPayload>>;

    async fn fetch_activity(&self) -> Result<Option<ActivityPayload>>;
}

/// Fetch the payload for one widget kind.
pub async fn fetch<P>(provider: &P, kind: WidgetKind) -> Result<Option<WidgetData>>
where
    P: DataProvider + Sync,
{
    Ok(match kind {
        WidgetKind::Weather => {
            DataProvider::fetch_weather(provider)
                .await?
                .map(WidgetData::Weather)
        }
        WidgetKind::Finance => {
            DataProvider::fetch_finance(provider)
                .await?
                .map(WidgetData::Finance)
        }
        WidgetKind::News => DataProvider::fetch_news(provider).await?.map(WidgetData::News),
        WidgetKind::Activity => {
            DataProvider::fetch_activity(provider)
                .await?
                .map(WidgetData::Activity)
        }
    })
}

/// Provider chosen at startup from settings.
#[derive(Debug, Clone)]
pub enum AnyProvider {
    Mock(MockProvider),
    Fixtures(FixtureProvider),
}

impl AnyProvider {
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self> {
        match settings.kind {
            ProviderKind::Mock => Ok(Self::Mock(
                MockProvider::new(Duration::from_millis(settings.latency_ms))
                    .with_jitter(Duration::from_millis(settings.jitter_ms)),
            )),
            ProviderKind::Fixtures => {
                let dir: PathBuf = settings.fixtures_dir.clone().ok_or_else(|| {
                    Error::ConfigInvalid {
                        message: "provider.kind = \"fixtures\" requires provider.fixtures_dir"
                            .into(),
                    }
                })?;
                Ok(Self::Fixtures(FixtureProvider::new(dir)))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnyProvider::Mock(_) => "mock",
            AnyProvider::Fixtures(_) => "fixtures",
        }
    }
}

impl DataProvider for AnyProvider {
    async fn fetch_weather(&self) -> Result<Option<WeatherPayload>> {
        match self {
            AnyProvider::Mock(p) => DataProvider::fetch_weather(p).await,
            AnyProvider::Fixtures(p) => DataProvider::fetch_weather(p).await,
        }
    }

    async fn fetch_finance(&self) -> Result<Option<FinancePayload>> {
        match self {
            AnyProvider::Mock(p) => DataProvider::fetch_finance(p).await,
            AnyProvider::Fixtures(p) => DataProvider::fetch_finance(p).await,
        }
    }

    async fn fetch_news(&self) -> Result<Option<NewsPayload>> {
        match self {
            AnyProvider::Mock(p) => DataProvider::fetch_news(p).await,
            AnyProvider::Fixtures(p) => DataProvider::fetch_news(p).await,
        }
    }

    async fn fetch_activity(&self) -> Result<Option<ActivityPayload>> {
        match self {
            AnyProvider::Mock(p) => DataProvider::fetch_activity(p).await,
            AnyProvider::Fixtures(p) => DataProvider::fetch_activity(p).await,
        }
    }
}
