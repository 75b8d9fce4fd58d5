//! Canned payloads delivered after a simulated latency

use std::collections::HashSet;
use std::time::Duration;

use rand::Rng;
use skydeck_core::prelude::*;
use skydeck_core::{
    ActivityPayload, ActivityPoint, FinancePayload, ForecastDay, NewsArticle, NewsPayload,
    PricePoint, WeatherPayload, WidgetKind,
};

use super::DataProvider;

#[derive(Debug, Clone)]
pub struct MockProvider {
    latency: Duration,
    jitter: Duration,
    unavailable: HashSet<WidgetKind>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

impl MockProvider {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            jitter: Duration::ZERO,
            unavailable: HashSet::new(),
        }
    }

    /// No simulated latency
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn with_jitter(mut self, jitter: Duration) -> Self {
        self.jitter = jitter;
        self
    }

    /// Requests for `kind` fail after the usual latency.
    pub fn with_unavailable(mut self, kind: WidgetKind) -> Self {
        self.unavailable.insert(kind);
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn respond<T>(&self, kind: WidgetKind, payload: impl FnOnce() -> T) -> Result<Option<T>> {
        let delay = self.delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if self.unavailable.contains(&kind) {
            debug!("Mock {} request failing as configured", kind);
            return Err(Error::provider_unavailable(format!("mock {} offline", kind)));
        }
        Ok(Some(payload()))
    }

    fn delay(&self) -> Duration {
        if self.jitter.is_zero() {
            return self.latency;
        }
        let extra = rand::thread_rng().gen_range(0..=self.jitter.as_millis() as u64);
        self.latency + Duration::from_millis(extra)
    }
}

impl DataProvider for MockProvider {
    async fn fetch_weather(&self) -> Result<Option<WeatherPayload>> {
        self.respond(WidgetKind::Weather, sample_weather).await
    }

    async fn fetch_finance(&self) -> Result<Option<FinancePayload>> {
        self.respond(WidgetKind::Finance, sample_finance).await
    }

    async fn fetch_news(&self) -> Result<Option<NewsPayload>> {
        self.respond(WidgetKind::News, sample_news).await
    }

    async fn fetch_activity(&self) -> Result<Option<ActivityPayload>> {
        self.respond(WidgetKind::Activity, sample_activity).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sample data
// ─────────────────────────────────────────────────────────────────────────────

pub fn sample_weather() -> WeatherPayload {
    let forecast = [
        ("Mon", 72.0, "Sunny"),
        ("Tue", 70.0, "Cloudy"),
        ("Wed", 65.0, "Rainy"),
        ("Thu", 67.0, "Cloudy"),
        ("Fri", 71.0, "Sunny"),
        ("Sat", 74.0, "Sunny"),
        ("Sun", 69.0, "Rainy"),
    ]
    .into_iter()
    .map(|(date, temperature, condition)| ForecastDay {
        date: date.to_string(),
        temperature,
        condition: condition.to_string(),
    })
    .collect();

    WeatherPayload {
        location: "San Francisco, CA".to_string(),
        temperature: 72.0,
        condition: "Sunny".to_string(),
        humidity: 65.0,
        wind_speed: 8.0,
        forecast,
    }
}

pub fn sample_finance() -> FinancePayload {
    let historical_data = [
        ("Mon", 182.31),
        ("Tue", 184.02),
        ("Wed", 183.15),
        ("Thu", 186.40),
        ("Fri", 185.22),
        ("Sat", 187.96),
        ("Sun", 189.43),
    ]
    .into_iter()
    .map(|(date, price)| PricePoint {
        date: date.to_string(),
        price,
    })
    .collect();

    FinancePayload {
        symbol: "AAPL".to_string(),
        name: "Apple Inc.".to_string(),
        current_price: 189.43,
        change: 2.35,
        change_percentage: 1.26,
        high: 190.12,
        low: 186.85,
        volume: 54_321_987,
        market_cap: "2.94T".to_string(),
        historical_data,
    }
}

pub fn sample_news() -> NewsPayload {
    let articles = [
        ("1", "Chipmakers race to ship next-gen AI accelerators", "Tech Daily", "Technology"),
        ("2", "Markets rally as inflation cools for a third month", "Market Watch", "Business"),
        ("3", "Open-source tooling adoption hits record high", "Dev Weekly", "Technology"),
        ("4", "New study links daily walks to better sleep", "Health Today", "Health"),
        ("5", "Underdogs clinch the championship in overtime", "Sports Central", "Sports"),
        ("6", "Retailers brace for a busy holiday season", "Business Insider", "Business"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (id, title, source, category))| NewsArticle {
        id: id.to_string(),
        title: title.to_string(),
        source: source.to_string(),
        date: format!("2026-10-{:02}", 12 - i),
        summary: format!("{title}."),
        url: format!("https://news.example.com/articles/{id}"),
        image_url: format!("https://news.example.com/images/{id}.jpg"),
        category: category.to_string(),
    })
    .collect();

    NewsPayload { articles }
}

pub fn sample_activity() -> ActivityPayload {
    let points = [
        ("00:00", 210),
        ("03:00", 150),
        ("06:00", 180),
        ("09:00", 420),
        ("12:00", 650),
        ("15:00", 780),
        ("18:00", 520),
        ("21:00", 350),
    ]
    .into_iter()
    .map(|(time, users)| ActivityPoint {
        time: time.to_string(),
        users,
    })
    .collect();

    ActivityPayload { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skydeck_core::{filter_articles, NewsCategory, WidgetData};

    #[tokio::test(start_paused = true)]
    async fn test_mock_waits_for_latency() {
        let provider = MockProvider::new(Duration::from_millis(1000));
        let start = tokio::time::Instant::now();

        let payload = provider.fetch_weather().await.unwrap().unwrap();

        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert_eq!(payload.location, "San Francisco, CA");
    }

    #[tokio::test(start_paused = true)]
    async fn test_jitter_stays_within_bound() {
        let provider = MockProvider::new(Duration::from_millis(100))
            .with_jitter(Duration::from_millis(50));
        let start = tokio::time::Instant::now();

        provider.fetch_activity().await.unwrap();

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed <= Duration::from_millis(151));
    }

    #[tokio::test]
    async fn test_unavailable_kind_fails() {
        let provider = MockProvider::instant().with_unavailable(WidgetKind::Finance);
        assert!(provider.fetch_finance().await.is_err());
        assert!(provider.fetch_news().await.unwrap().is_some());
    }

    #[test]
    fn test_samples_are_usable() {
        assert!(WidgetData::Weather(sample_weather()).is_usable());
        assert!(WidgetData::Finance(sample_finance()).is_usable());
        assert!(WidgetData::News(sample_news()).is_usable());
        assert!(WidgetData::Activity(sample_activity()).is_usable());
        assert_eq!(sample_weather().forecast.len(), 7);
    }

    #[test]
    fn test_sample_news_covers_each_category() {
        let news = sample_news();
        for category in &NewsCategory::ALL[1..] {
            assert!(!filter_articles(&news.articles, *category, 4).is_empty());
        }
    }
}
