//! Store -> JSON view conversions

use crate::metrics::{Performance, StoreMetrics};
use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{OpeningHours, Store, StoreCategory, StoreStatus};

/// Store as shown by the dashboard, with its placeholder metrics flattened in
#[derive(Debug, Clone, Serialize)]
pub struct StoreView<M> {
    pub id: String,
    pub name: String,
    pub category: StoreCategory,
    pub category_label: &'static str,
    /// Display label (`Ground Floor, North Wing`)
    pub location: &'static str,
    pub location_code: &'static str,
    pub manager: String,
    pub contact: String,
    pub phone: String,
    pub description: String,
    pub hours: OpeningHours,
    pub status: StoreStatus,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(flatten)]
    pub metrics: M,
}

/// Metrics keyed the way the detail dialog reads them
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailMetrics {
    pub size: u32,
    pub monthly_rent: u64,
    pub revenue: u64,
    pub rating: f64,
    pub performance: Performance,
    pub lease_end: NaiveDate,
}

impl From<StoreMetrics> for DetailMetrics {
    fn from(m: StoreMetrics) -> Self {
        Self {
            size: m.size,
            monthly_rent: m.monthly_rent,
            revenue: m.revenue,
            rating: m.rating,
            performance: m.performance,
            lease_end: m.lease_end,
        }
    }
}

pub type StoreListItem = StoreView<StoreMetrics>;
pub type StoreDetail = StoreView<DetailMetrics>;

pub fn store_view<M>(store: &Store, metrics: M) -> StoreView<M> {
    StoreView {
        id: store.store_id.clone(),
        name: store.name.clone(),
        category: store.category,
        category_label: store.category.label(),
        location: store.location.label(),
        location_code: store.location.code(),
        manager: store.owner.clone(),
        contact: store.contact_email.clone(),
        phone: store.contact_phone.clone(),
        description: store.description_or_default(),
        hours: store.opening_hours.clone(),
        status: store.status,
        created_at: store.created_at,
        updated_at: store.updated_at,
        metrics,
    }
}

/// Identity echo returned after an update
#[derive(Debug, Clone, Serialize)]
pub struct StoreRef {
    pub id: String,
    pub name: String,
}

impl From<&Store> for StoreRef {
    fn from(store: &Store) -> Self {
        Self {
            id: store.store_id.clone(),
            name: store.name.clone(),
        }
    }
}
