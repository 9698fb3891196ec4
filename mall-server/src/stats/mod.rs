//! Store statistics
//!
//! Read-only projections over the full store collection. Nothing here talks
//! to the database; callers pass the stores in.

use crate::metrics::{MetricsProvider, Performance};
use chrono::NaiveDate;
use serde::Serialize;
use shared::models::catalog::{BASE_REVENUE_PER_STORE, revenue_multiplier};
use shared::models::{Store, StoreCategory, StoreStatus};
use std::collections::BTreeMap;

/// Default number of entries in the rankings
pub const DEFAULT_RANK_LIMIT: usize = 5;

/// Lease ending within this many days is urgent
pub const LEASE_DANGER_DAYS: i64 = 30;
/// Lease ending within this many days needs attention
pub const LEASE_WARNING_DAYS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreSummary {
    pub total_stores: usize,
    pub active_stores: usize,
    pub inactive_stores: usize,
    pub maintenance_stores: usize,
    /// Percentage of capacity, one decimal
    pub occupancy_rate: f64,
    pub capacity: u32,
    pub average_size: f64,
    pub average_rent: f64,
    pub avg_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPerformer {
    pub store_id: String,
    pub name: String,
    pub category: StoreCategory,
    pub revenue: u64,
    pub rating: f64,
    pub performance: Performance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaseUrgency {
    Danger,
    Warning,
    Normal,
}

impl LeaseUrgency {
    pub fn from_days(days_until: i64) -> Self {
        if days_until <= LEASE_DANGER_DAYS {
            LeaseUrgency::Danger
        } else if days_until <= LEASE_WARNING_DAYS {
            LeaseUrgency::Warning
        } else {
            LeaseUrgency::Normal
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            LeaseUrgency::Danger => "danger",
            LeaseUrgency::Warning => "warning",
            LeaseUrgency::Normal => "normal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaseEntry {
    pub store_id: String,
    pub name: String,
    pub lease_end: NaiveDate,
    /// Negative once the lease has lapsed
    pub days_until: i64,
    pub urgency: LeaseUrgency,
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Numeric id order, then lexical for ids outside the sequence
fn id_order(a: &Store, b: &Store) -> std::cmp::Ordering {
    a.sequence()
        .cmp(&b.sequence())
        .then_with(|| a.store_id.cmp(&b.store_id))
}

/// Aggregates over a snapshot of stores
pub struct StatsAggregator<'a> {
    stores: &'a [Store],
    metrics: &'a dyn MetricsProvider,
    capacity: u32,
}

impl<'a> StatsAggregator<'a> {
    pub fn new(stores: &'a [Store], metrics: &'a dyn MetricsProvider, capacity: u32) -> Self {
        Self {
            stores,
            metrics,
            capacity,
        }
    }

    pub fn summary(&self) -> StoreSummary {
        let count = |status: StoreStatus| self.stores.iter().filter(|s| s.status == status).count();
        let total = self.stores.len();

        let occupancy_rate = if self.capacity == 0 {
            0.0
        } else {
            round1(total as f64 / f64::from(self.capacity) * 100.0)
        };

        // persisted values first, provider values for the rest
        let metrics: Vec<_> = self.stores.iter().map(|s| self.metrics.metrics(s)).collect();
        let sizes = self
            .stores
            .iter()
            .zip(&metrics)
            .map(|(s, m)| f64::from(s.size.unwrap_or(m.size)));
        let rents = self
            .stores
            .iter()
            .zip(&metrics)
            .map(|(s, m)| s.monthly_rent.unwrap_or(m.monthly_rent) as f64);

        StoreSummary {
            total_stores: total,
            active_stores: count(StoreStatus::Active),
            inactive_stores: count(StoreStatus::Inactive),
            maintenance_stores: count(StoreStatus::Maintenance),
            occupancy_rate,
            capacity: self.capacity,
            average_size: mean(sizes),
            average_rent: mean(rents),
            avg_rating: round1(mean(metrics.iter().map(|m| m.rating))),
        }
    }

    /// Category -> number of stores; empty categories are left out
    pub fn category_distribution(&self) -> BTreeMap<StoreCategory, usize> {
        let mut distribution = BTreeMap::new();
        for store in self.stores {
            *distribution.entry(store.category).or_insert(0) += 1;
        }
        distribution
    }

    /// Category -> count × base revenue × multiplier
    pub fn category_revenue(&self) -> BTreeMap<StoreCategory, f64> {
        self.category_distribution()
            .into_iter()
            .map(|(category, count)| {
                let revenue = count as f64 * BASE_REVENUE_PER_STORE * revenue_multiplier(category);
                (category, revenue)
            })
            .collect()
    }

    /// Highest revenue first, ties by id
    pub fn top_performers(&self, n: usize) -> Vec<TopPerformer> {
        let mut ranked: Vec<_> = self
            .stores
            .iter()
            .map(|s| (s, self.metrics.metrics(s)))
            .collect();
        ranked.sort_by(|(a, ma), (b, mb)| mb.revenue.cmp(&ma.revenue).then_with(|| id_order(a, b)));

        ranked
            .into_iter()
            .take(n)
            .map(|(store, m)| TopPerformer {
                store_id: store.store_id.clone(),
                name: store.name.clone(),
                category: store.category,
                revenue: m.revenue,
                rating: m.rating,
                performance: m.performance,
            })
            .collect()
    }

    /// Soonest lease end first, ties by id
    pub fn lease_timeline(&self, n: usize, today: NaiveDate) -> Vec<LeaseEntry> {
        let mut entries: Vec<_> = self
            .stores
            .iter()
            .map(|s| {
                let lease_end = self.metrics.metrics(s).lease_end;
                (s, lease_end, (lease_end - today).num_days())
            })
            .collect();
        entries.sort_by(|(a, _, da), (b, _, db)| da.cmp(db).then_with(|| id_order(a, b)));

        entries
            .into_iter()
            .take(n)
            .map(|(store, lease_end, days_until)| LeaseEntry {
                store_id: store.store_id.clone(),
                name: store.name.clone(),
                lease_end,
                days_until,
                urgency: LeaseUrgency::from_days(days_until),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{FixedMetrics, StoreMetrics};
    use shared::models::{StoreCreate, StoreLocation};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn metrics(revenue: u64, rating: f64, lease_end: NaiveDate) -> StoreMetrics {
        StoreMetrics {
            size: 1000,
            monthly_rent: 50_000,
            revenue,
            rating,
            performance: Performance::from_revenue(revenue),
            lease_end,
        }
    }

    fn store(id: &str, name: &str, category: &str) -> Store {
        StoreCreate {
            name: Some(name.into()),
            category: Some(category.into()),
            location: Some(StoreLocation::GroundNorth.code().into()),
            ..Default::default()
        }
        .validate()
        .unwrap()
        .into_store(id.into(), 1_700_000_000_000)
    }

    fn provider() -> FixedMetrics {
        FixedMetrics::new(metrics(500_000, 4.0, date(2026, 12, 31)))
            .with("ST001", metrics(2_000_000, 4.5, date(2026, 1, 20)))
            .with("ST002", metrics(4_000_000, 3.5, date(2026, 2, 20)))
            .with("ST003", metrics(2_000_000, 5.0, date(2026, 1, 20)))
    }

    fn stores() -> Vec<Store> {
        vec![
            store("ST001", "A", "food"),
            store("ST002", "B", "fashion"),
            store("ST003", "C", "food"),
            store("ST004", "D", "other"),
        ]
    }

    #[test]
    fn test_summary_counts_and_occupancy() {
        let mut stores = stores();
        stores[1].status = StoreStatus::Inactive;
        stores[2].status = StoreStatus::Maintenance;
        stores[0].size = Some(1000);
        stores[3].size = Some(2000);
        stores[0].monthly_rent = Some(40_000);

        let provider = provider();
        let summary = StatsAggregator::new(&stores, &provider, 60).summary();
        assert_eq!(summary.total_stores, 4);
        assert_eq!(summary.active_stores, 2);
        assert_eq!(summary.inactive_stores, 1);
        assert_eq!(summary.maintenance_stores, 1);
        assert_eq!(summary.occupancy_rate, 6.7);
        // persisted 1000 and 2000, provider 1000 for the other two
        assert_eq!(summary.average_size, 1250.0);
        assert_eq!(summary.average_rent, 47_500.0);
        assert_eq!(summary.avg_rating, 4.3);
    }

    #[test]
    fn test_summary_of_nothing() {
        let provider = provider();
        let summary = StatsAggregator::new(&[], &provider, 0).summary();
        assert_eq!(summary.total_stores, 0);
        assert_eq!(summary.occupancy_rate, 0.0);
        assert_eq!(summary.average_size, 0.0);
        assert_eq!(summary.avg_rating, 0.0);
    }

    #[test]
    fn test_category_distribution_omits_empty() {
        let stores = stores();
        let provider = provider();
        let stats = StatsAggregator::new(&stores, &provider, 60);

        let distribution = stats.category_distribution();
        assert_eq!(distribution.len(), 3);
        assert_eq!(distribution[&StoreCategory::Food], 2);
        assert!(!distribution.contains_key(&StoreCategory::Books));
        assert_eq!(distribution.values().sum::<usize>(), stores.len());

        let revenue = stats.category_revenue();
        assert_eq!(revenue[&StoreCategory::Food], 2.0 * BASE_REVENUE_PER_STORE * 0.85);
        assert_eq!(revenue[&StoreCategory::Other], BASE_REVENUE_PER_STORE);
    }

    #[test]
    fn test_top_performers_ties_by_id() {
        let stores = stores();
        let provider = provider();
        let top = StatsAggregator::new(&stores, &provider, 60).top_performers(3);
        let ids: Vec<_> = top.iter().map(|t| t.store_id.as_str()).collect();
        assert_eq!(ids, ["ST002", "ST001", "ST003"]);
        assert_eq!(top[0].performance, Performance::VeryHigh);

        let all = StatsAggregator::new(&stores, &provider, 60).top_performers(10);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_lease_timeline_urgency() {
        let stores = stores();
        let provider = provider();
        let timeline =
            StatsAggregator::new(&stores, &provider, 60).lease_timeline(DEFAULT_RANK_LIMIT, date(2026, 1, 1));

        let ids: Vec<_> = timeline.iter().map(|e| e.store_id.as_str()).collect();
        assert_eq!(ids, ["ST001", "ST003", "ST002", "ST004"]);
        assert_eq!(timeline[0].days_until, 19);
        assert_eq!(timeline[0].urgency, LeaseUrgency::Danger);
        assert_eq!(timeline[2].days_until, 50);
        assert_eq!(timeline[2].urgency, LeaseUrgency::Warning);
        assert_eq!(timeline[3].urgency, LeaseUrgency::Normal);
    }

    #[test]
    fn test_urgency_boundaries() {
        assert_eq!(LeaseUrgency::from_days(-3), LeaseUrgency::Danger);
        assert_eq!(LeaseUrgency::from_days(30), LeaseUrgency::Danger);
        assert_eq!(LeaseUrgency::from_days(31), LeaseUrgency::Warning);
        assert_eq!(LeaseUrgency::from_days(60), LeaseUrgency::Warning);
        assert_eq!(LeaseUrgency::from_days(61), LeaseUrgency::Normal);
    }
}
