use super::{MetricsProvider, Performance, StoreMetrics};
use chrono::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use shared::models::Store;
use shared::util::{millis_to_date, today};

/// Deterministic stand-in metrics
///
/// Every value is drawn from an RNG seeded with the SHA-256 of the store id,
/// so the same store always gets the same numbers. Persisted `size` and
/// `monthly_rent` take precedence over the drawn ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticMetrics;

fn rng_for(store_id: &str) -> StdRng {
    let seed: [u8; 32] = Sha256::digest(store_id.as_bytes()).into();
    StdRng::from_seed(seed)
}

impl MetricsProvider for SyntheticMetrics {
    fn metrics(&self, store: &Store) -> StoreMetrics {
        let mut rng = rng_for(&store.store_id);

        // 固定抽取顺序，持久化字段不影响其余数值
        let size = rng.gen_range(600..=5000u32);
        let monthly_rent = rng.gen_range(35_000..=250_000u64);
        let revenue = rng.gen_range(300_000..=5_000_000u64);
        let rating = f64::from(rng.gen_range(35..=50u32)) / 10.0;
        let lease_days = rng.gen_range(30..=365i64);

        let opened = millis_to_date(store.created_at).unwrap_or_else(today);

        StoreMetrics {
            size: store.size.unwrap_or(size),
            monthly_rent: store.monthly_rent.unwrap_or(monthly_rent),
            revenue,
            rating,
            performance: Performance::from_revenue(revenue),
            lease_end: opened + Duration::days(lease_days),
        }
    }
}
