//! Custom widget components

mod activity;
pub mod card;
mod finance;
mod header;
mod kpi;
mod news;
mod sidebar;
mod weather;

pub use activity::ActivityCard;
pub use card::{Skeleton, Unavailable};
pub use finance::{format_volume, FinanceCard};
pub use header::MainHeader;
pub use kpi::{Kpi, KpiRow, OVERVIEW};
pub use news::{empty_message, truncate, NewsCard};
pub use sidebar::Sidebar;
pub use weather::WeatherCard;
