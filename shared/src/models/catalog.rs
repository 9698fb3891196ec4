//! Static catalog tables
//!
//! Single source of truth for the display labels and placeholder revenue
//! weighting of the closed store enumerations. Validation, rendering and
//! aggregation all read from here.

use super::store::{OpeningHours, StoreCategory, StoreLocation, StoreStatus};

/// Placeholder revenue attributed to a single store before weighting
pub const BASE_REVENUE_PER_STORE: f64 = 1_000_000.0;

/// Default mall capacity used for the occupancy rate
pub const DEFAULT_CAPACITY: u32 = 60;

/// Display labels for every category
pub const CATEGORY_LABELS: &[(StoreCategory, &str)] = &[
    (StoreCategory::Electronics, "Electronics"),
    (StoreCategory::Fashion, "Fashion & Apparel"),
    (StoreCategory::Food, "Food & Beverage"),
    (StoreCategory::Home, "Home & Living"),
    (StoreCategory::Beauty, "Beauty & Cosmetics"),
    (StoreCategory::Sports, "Sports & Fitness"),
    (StoreCategory::Entertainment, "Entertainment"),
    (StoreCategory::Books, "Books & Stationery"),
    (StoreCategory::Jewelry, "Jewelry & Accessories"),
    (StoreCategory::Other, "Other"),
];

/// Revenue weighting per category. Categories missing here weigh 1.0.
pub const REVENUE_MULTIPLIERS: &[(StoreCategory, f64)] = &[
    (StoreCategory::Electronics, 2.5),
    (StoreCategory::Fashion, 1.25),
    (StoreCategory::Food, 0.85),
    (StoreCategory::Home, 1.1),
    (StoreCategory::Beauty, 0.95),
    (StoreCategory::Sports, 1.35),
    (StoreCategory::Entertainment, 4.2),
    (StoreCategory::Books, 0.65),
    (StoreCategory::Jewelry, 1.85),
];

/// Display labels for every floor/wing code
pub const LOCATION_LABELS: &[(StoreLocation, &str)] = &[
    (StoreLocation::GroundNorth, "Ground Floor, North Wing"),
    (StoreLocation::GroundSouth, "Ground Floor, South Wing"),
    (StoreLocation::GroundEast, "Ground Floor, East Wing"),
    (StoreLocation::GroundWest, "Ground Floor, West Wing"),
    (StoreLocation::FirstNorth, "First Floor, North Wing"),
    (StoreLocation::FirstSouth, "First Floor, South Wing"),
    (StoreLocation::FirstEast, "First Floor, East Wing"),
    (StoreLocation::FirstWest, "First Floor, West Wing"),
    (StoreLocation::SecondNorth, "Second Floor, North Wing"),
    (StoreLocation::SecondSouth, "Second Floor, South Wing"),
    (StoreLocation::SecondEast, "Second Floor, East Wing"),
    (StoreLocation::SecondWest, "Second Floor, West Wing"),
];

/// Display labels for store status
pub const STATUS_LABELS: &[(StoreStatus, &str)] = &[
    (StoreStatus::Active, "Active"),
    (StoreStatus::Inactive, "Inactive"),
    (StoreStatus::Maintenance, "Under Maintenance"),
];

/// Standard weekly opening hours applied when a store is created without any
pub const WEEKDAY_HOURS: &str = "10:00 AM - 9:00 PM";
pub const WEEKEND_HOURS: &str = "10:00 AM - 10:00 PM";
pub const SUNDAY_HOURS: &str = "11:00 AM - 8:00 PM";

pub fn category_label(category: StoreCategory) -> &'static str {
    CATEGORY_LABELS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, label)| *label)
        .unwrap_or("Other")
}

pub fn location_label(location: StoreLocation) -> &'static str {
    LOCATION_LABELS
        .iter()
        .find(|(l, _)| *l == location)
        .map(|(_, label)| *label)
        .unwrap_or_else(|| location.code())
}

pub fn status_label(status: StoreStatus) -> &'static str {
    STATUS_LABELS
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, label)| *label)
        .unwrap_or_else(|| status.as_str())
}

/// Revenue multiplier for a category (1.0 when the table has no entry)
pub fn revenue_multiplier(category: StoreCategory) -> f64 {
    REVENUE_MULTIPLIERS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, m)| *m)
        .unwrap_or(1.0)
}

/// Location codes whose display label contains `needle` (lowercase)
pub fn locations_labelled_like(needle: &str) -> Vec<StoreLocation> {
    LOCATION_LABELS
        .iter()
        .filter(|(_, label)| label.to_lowercase().contains(needle))
        .map(|(l, _)| *l)
        .collect()
}

/// Standard weekly template
pub fn standard_hours() -> OpeningHours {
    OpeningHours {
        monday: Some(WEEKDAY_HOURS.to_string()),
        tuesday: Some(WEEKDAY_HOURS.to_string()),
        wednesday: Some(WEEKDAY_HOURS.to_string()),
        thursday: Some(WEEKDAY_HOURS.to_string()),
        friday: Some(WEEKEND_HOURS.to_string()),
        saturday: Some(WEEKEND_HOURS.to_string()),
        sunday: Some(SUNDAY_HOURS.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_label() {
        for category in StoreCategory::ALL {
            assert!(CATEGORY_LABELS.iter().any(|(c, _)| *c == category));
        }
        assert_eq!(category_label(StoreCategory::Food), "Food & Beverage");
    }

    #[test]
    fn test_every_location_has_a_label() {
        for location in StoreLocation::ALL {
            assert!(LOCATION_LABELS.iter().any(|(l, _)| *l == location));
        }
        assert_eq!(
            location_label(StoreLocation::FirstSouth),
            "First Floor, South Wing"
        );
    }

    #[test]
    fn test_multiplier_defaults_to_one() {
        assert_eq!(revenue_multiplier(StoreCategory::Other), 1.0);
        assert_eq!(revenue_multiplier(StoreCategory::Entertainment), 4.2);
    }

    #[test]
    fn test_locations_labelled_like() {
        let hits = locations_labelled_like("second floor");
        assert_eq!(hits.len(), 4);
        assert!(hits.contains(&StoreLocation::SecondWest));

        let hits = locations_labelled_like("north wing");
        assert_eq!(
            hits,
            vec![
                StoreLocation::GroundNorth,
                StoreLocation::FirstNorth,
                StoreLocation::SecondNorth
            ]
        );
    }

    #[test]
    fn test_standard_hours_covers_the_week() {
        let hours = standard_hours();
        assert_eq!(hours.days().count(), 7);
        assert_eq!(hours.sunday.as_deref(), Some(SUNDAY_HOURS));
    }
}
