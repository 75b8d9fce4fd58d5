//! # skydeck-core - Core Domain Types
//!
//! Foundation crate for Skydeck. Provides domain types, payload shapes,
//! filter derivations, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Theme`] - Light/dark visual mode
//! - [`WidgetKind`] - Weather, Finance, News, Activity
//! - [`Phase`], [`WidgetState`], [`ErrorInfo`] - Per-widget data lifecycle
//! - [`Page`] - Sidebar navigation targets
//!
//! ### Payloads (`payload`)
//! - [`WeatherPayload`], [`FinancePayload`], [`NewsPayload`], [`ActivityPayload`]
//! - [`WidgetData`] - A payload tagged with its widget
//!
//! ### Filters (`filter`)
//! - [`NewsCategory`], [`TimeRange`] - Widget-local selections
//! - [`news_view()`] - Category filter with top-N truncation and empty state
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use skydeck_core::prelude::*;
//! ```

pub mod error;
pub mod filter;
pub mod logging;
pub mod payload;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use filter::{
    filter_articles, news_view, NewsCategory, NewsView, TimeRange, NEWS_DISPLAY_LIMIT,
};
pub use payload::{
    ActivityPayload, ActivityPoint, Condition, FinancePayload, ForecastDay, NewsArticle,
    NewsPayload, PricePoint, WeatherPayload, WidgetData,
};
pub use types::{AppPhase, ErrorInfo, Page, Phase, Theme, WidgetKind, WidgetState};
