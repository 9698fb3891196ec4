//! HTML rendering for the stores page

use std::fmt::Write;

use crate::metrics::MetricsProvider;
use crate::stats::StoreSummary;
use shared::models::{Store, StoreCategory, StoreFilter, StoreStatus};

/// Escape text for use in element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn stat_card(out: &mut String, label: &str, value: &str) {
    let _ = write!(
        out,
        r#"<div class="stat-card"><span class="stat-label">{}</span><span class="stat-value">{}</span></div>"#,
        escape(label),
        escape(value)
    );
}

fn option(out: &mut String, value: &str, label: &str, selected: bool) {
    let _ = write!(
        out,
        r#"<option value="{}"{}>{}</option>"#,
        escape(value),
        if selected { " selected" } else { "" },
        escape(label)
    );
}

fn filter_form(out: &mut String, filter: &StoreFilter) {
    out.push_str(r#"<form class="filters" method="get" action="/stores/">"#);

    out.push_str(r#"<select name="category">"#);
    option(out, "all", "All Categories", filter.category.is_none());
    for category in StoreCategory::ALL {
        option(out, category.as_str(), category.label(), filter.category == Some(category));
    }
    out.push_str("</select>");

    out.push_str(r#"<select name="status">"#);
    option(out, "all", "All Statuses", filter.status.is_none());
    for status in StoreStatus::ALL {
        option(out, status.as_str(), status.label(), filter.status == Some(status));
    }
    out.push_str("</select>");

    let _ = write!(
        out,
        r#"<input type="search" name="search" placeholder="Search stores" value="{}"><button type="submit">Filter</button></form>"#,
        escape(filter.search.as_deref().unwrap_or(""))
    );
}

fn store_row(out: &mut String, store: &Store, metrics: &dyn MetricsProvider) {
    let m = metrics.metrics(store);
    let _ = write!(
        out,
        r#"<tr data-store-id="{id}"><td>{id}</td><td>{name}</td><td>{category}</td><td>{location}</td><td>{manager}</td><td>{contact}</td><td><span class="status status-{status}">{status_label}</span></td><td>{rating:.1}</td><td class="performance-{performance}">{performance}</td></tr>"#,
        id = escape(&store.store_id),
        name = escape(&store.name),
        category = escape(store.category.label()),
        location = escape(store.location.label()),
        manager = escape(&store.owner),
        contact = escape(&store.contact_email),
        status = store.status.as_str(),
        status_label = escape(store.status.label()),
        rating = m.rating,
        performance = m.performance.as_str(),
    );
}

/// Full stores page: summary cards, filter form and the store table
pub fn stores_page(
    stores: &[Store],
    summary: &StoreSummary,
    filter: &StoreFilter,
    metrics: &dyn MetricsProvider,
) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><title>Stores - Mall Back Office</title></head><body><h1>Stores</h1>"#,
    );

    out.push_str(r#"<section class="stats">"#);
    stat_card(&mut out, "Total Stores", &summary.total_stores.to_string());
    stat_card(&mut out, "Open Stores", &summary.active_stores.to_string());
    stat_card(&mut out, "Closed Stores", &summary.inactive_stores.to_string());
    stat_card(&mut out, "Under Maintenance", &summary.maintenance_stores.to_string());
    stat_card(&mut out, "Occupancy Rate", &format!("{:.1}%", summary.occupancy_rate));
    stat_card(&mut out, "Average Rating", &format!("{:.1}", summary.avg_rating));
    out.push_str("</section>");

    filter_form(&mut out, filter);

    if stores.is_empty() {
        out.push_str(r#"<p class="empty">No stores found.</p>"#);
    } else {
        out.push_str(
            "<table class=\"stores\"><thead><tr><th>ID</th><th>Name</th><th>Category</th><th>Location</th><th>Manager</th><th>Contact</th><th>Status</th><th>Rating</th><th>Performance</th></tr></thead><tbody>",
        );
        for store in stores {
            store_row(&mut out, store, metrics);
        }
        out.push_str("</tbody></table>");
    }

    out.push_str("</body></html>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SyntheticMetrics;
    use crate::stats::StatsAggregator;
    use shared::models::StoreCreate;

    fn store(name: &str) -> Store {
        StoreCreate {
            name: Some(name.into()),
            category: Some("books".into()),
            location: Some("2F-E".into()),
            manager: Some("Dana".into()),
            ..Default::default()
        }
        .validate()
        .unwrap()
        .into_store("ST001".into(), 1_700_000_000_000)
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_page_lists_escaped_stores() {
        let stores = vec![store("<Pages & Co>")];
        let summary = StatsAggregator::new(&stores, &SyntheticMetrics, 60).summary();
        let html = stores_page(&stores, &summary, &StoreFilter::default(), &SyntheticMetrics);

        assert!(html.contains("&lt;Pages &amp; Co&gt;"));
        assert!(!html.contains("<Pages"));
        assert!(html.contains("Second Floor, East Wing"));
        assert!(html.contains("Books &amp; Stationery"));
        assert!(html.contains("1.7%"));
    }

    #[test]
    fn test_empty_page() {
        let summary = StatsAggregator::new(&[], &SyntheticMetrics, 60).summary();
        let html = stores_page(&[], &summary, &StoreFilter::default(), &SyntheticMetrics);
        assert!(html.contains("No stores found."));
    }
}
