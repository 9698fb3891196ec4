//! Placeholder store metrics
//!
//! Size, rent, revenue, rating and lease end are not tracked by the catalog.
//! A [`MetricsProvider`] supplies them so rankings stay reproducible.

mod fixed;
mod synthetic;

pub use fixed::FixedMetrics;
pub use synthetic::SyntheticMetrics;

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::Store;

/// Revenue tier shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Performance {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Performance {
    /// `< 1M low`, `< 2M medium`, `< 3.5M high`, otherwise `very-high`
    pub fn from_revenue(revenue: u64) -> Self {
        match revenue {
            r if r < 1_000_000 => Performance::Low,
            r if r < 2_000_000 => Performance::Medium,
            r if r < 3_500_000 => Performance::High,
            _ => Performance::VeryHigh,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Performance::Low => "low",
            Performance::Medium => "medium",
            Performance::High => "high",
            Performance::VeryHigh => "very-high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreMetrics {
    /// Floor area in square feet
    pub size: u32,
    pub monthly_rent: u64,
    pub revenue: u64,
    /// 3.5 to 5.0, one decimal
    pub rating: f64,
    pub performance: Performance,
    pub lease_end: NaiveDate,
}

/// Source of per-store metrics
pub trait MetricsProvider: Send + Sync {
    fn metrics(&self, store: &Store) -> StoreMetrics;
}
