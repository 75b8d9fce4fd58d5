//! # Widget Payloads
//!
//! Fixed response shapes returned by data providers. Field names follow the
//! camelCase wire form so fixture files can be dropped in unchanged.
//! Payloads are read-only once received; views are derived, never written
//! back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::WidgetKind;

// ── Weather ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherPayload {
    pub location: String,
    pub temperature: f64,
    pub condition: String,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Wind speed in mph
    pub wind_speed: f64,
    #[serde(default)]
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: String,
    pub temperature: f64,
    pub condition: String,
}

/// Icon bucket for a free-form condition string. Unknown conditions fall
/// back to `Sunny`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
}

impl Condition {
    pub fn classify(condition: &str) -> Self {
        match condition.trim().to_ascii_lowercase().as_str() {
            "cloudy" => Condition::Cloudy,
            "rainy" => Condition::Rainy,
            _ => Condition::Sunny,
        }
    }
}

// ── Finance ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancePayload {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub change: f64,
    pub change_percentage: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
    /// Preformatted by the provider (e.g. `"2.87T"`)
    pub market_cap: String,
    #[serde(default)]
    pub historical_data: Vec<PricePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

impl FinancePayload {
    /// Strictly positive change counts as an uptrend.
    pub fn is_positive(&self) -> bool {
        self.change > 0.0
    }

    /// `(min, max)` over the historical series, if any
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        self.historical_data.iter().map(|p| p.price).fold(None, |acc, price| {
            Some(match acc {
                None => (price, price),
                Some((lo, hi)) => (lo.min(price), hi.max(price)),
            })
        })
    }
}

// ── News ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsPayload {
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub source: String,
    pub date: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image_url: String,
    pub category: String,
}

impl NewsArticle {
    /// Parsed `YYYY-MM-DD` date, when the provider sends one
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// `source · date` byline, with ISO dates shortened to `Mon D, YYYY`
    pub fn byline(&self) -> String {
        let date = match self.published() {
            Some(d) => d.format("%b %-d, %Y").to_string(),
            None => self.date.clone(),
        };
        format!("{} · {}", self.source, date)
    }
}

// ── Activity ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPayload {
    #[serde(default)]
    pub points: Vec<ActivityPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPoint {
    pub time: String,
    pub users: u64,
}

impl ActivityPayload {
    pub fn peak(&self) -> Option<&ActivityPoint> {
        self.points.iter().max_by_key(|p| p.users)
    }
}

// ── WidgetData ───────────────────────────────────────────────────────────────

/// A payload tagged with the widget it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetData {
    Weather(WeatherPayload),
    Finance(FinancePayload),
    News(NewsPayload),
    Activity(ActivityPayload),
}

impl WidgetData {
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetData::Weather(_) => WidgetKind::Weather,
            WidgetData::Finance(_) => WidgetKind::Finance,
            WidgetData::News(_) => WidgetKind::News,
            WidgetData::Activity(_) => WidgetKind::Activity,
        }
    }

    /// Whether the payload carries anything worth rendering. Blank payloads
    /// are treated like a failed request.
    pub fn is_usable(&self) -> bool {
        match self {
            WidgetData::Weather(w) => !w.location.trim().is_empty(),
            WidgetData::Finance(f) => !f.symbol.trim().is_empty(),
            WidgetData::News(n) => !n.articles.is_empty(),
            WidgetData::Activity(a) => !a.points.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(date: &str) -> NewsArticle {
        NewsArticle {
            id: "1".into(),
            title: "Chip shortage eases".into(),
            source: "Tech Daily".into(),
            date: date.into(),
            summary: String::new(),
            url: String::new(),
            image_url: String::new(),
            category: "Technology".into(),
        }
    }

    #[test]
    fn test_weather_deserializes_camel_case() {
        let json = r#"{
            "location": "San Francisco, CA",
            "temperature": 68,
            "condition": "Sunny",
            "humidity": 62,
            "windSpeed": 8,
            "forecast": [{"date": "Mon", "temperature": 70, "condition": "Cloudy"}]
        }"#;
        let payload: WeatherPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.wind_speed, 8.0);
        assert_eq!(payload.forecast.len(), 1);
        assert_eq!(Condition::classify(&payload.forecast[0].condition), Condition::Cloudy);
    }

    #[test]
    fn test_condition_defaults_to_sunny() {
        assert_eq!(Condition::classify("rainy"), Condition::Rainy);
        assert_eq!(Condition::classify("Snow"), Condition::Sunny);
    }

    #[test]
    fn test_finance_trend_is_strict() {
        let json = r#"{
            "symbol": "AAPL", "name": "Apple Inc.", "currentPrice": 187.5,
            "change": 0, "changePercentage": 0, "high": 189.1, "low": 185.2,
            "volume": 51234567, "marketCap": "2.91T",
            "historicalData": [{"date": "Mon", "price": 183.0}, {"date": "Tue", "price": 188.0}]
        }"#;
        let mut payload: FinancePayload = serde_json::from_str(json).unwrap();
        assert!(!payload.is_positive());
        payload.change = 0.01;
        assert!(payload.is_positive());
        assert_eq!(payload.price_bounds(), Some((183.0, 188.0)));
    }

    #[test]
    fn test_byline_formats_iso_dates() {
        assert_eq!(article("2026-03-07").byline(), "Tech Daily · Mar 7, 2026");
        assert_eq!(article("2 hours ago").byline(), "Tech Daily · 2 hours ago");
    }

    #[test]
    fn test_blank_payloads_are_unusable() {
        assert!(!WidgetData::News(NewsPayload { articles: vec![] }).is_usable());
        assert!(!WidgetData::Activity(ActivityPayload { points: vec![] }).is_usable());
        assert!(WidgetData::News(NewsPayload {
            articles: vec![article("2026-01-01")]
        })
        .is_usable());
    }

    #[test]
    fn test_activity_peak() {
        let payload = ActivityPayload {
            points: vec![
                ActivityPoint { time: "00:00".into(), users: 210 },
                ActivityPoint { time: "15:00".into(), users: 780 },
                ActivityPoint { time: "18:00".into(), users: 520 },
            ],
        };
        assert_eq!(payload.peak().map(|p| p.time.as_str()), Some("15:00"));
    }
}
