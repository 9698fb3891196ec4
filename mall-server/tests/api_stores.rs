//! HTTP-level tests for the store catalog API
//! Run: cargo test -p mall-server --test api_stores

use axum::Router;
use axum::body::Body;
use chrono::Duration;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use mall_server::metrics::Performance;
use mall_server::{Config, FixedMetrics, ServerState, StoreMetrics, SyntheticMetrics, build_router};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn metrics(revenue: u64, lease_in_days: i64) -> StoreMetrics {
    StoreMetrics {
        size: 1200,
        monthly_rent: 80_000,
        revenue,
        rating: 4.4,
        performance: Performance::from_revenue(revenue),
        lease_end: shared::util::today() + Duration::days(lease_in_days),
    }
}

async fn app_with(metrics: Arc<dyn mall_server::MetricsProvider>) -> Router {
    let state = ServerState::in_memory(Config::for_tests(), metrics)
        .await
        .unwrap();
    build_router(state)
}

async fn app() -> Router {
    app_with(Arc::new(SyntheticMetrics)).await
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create(app: &Router, name: &str, category: &str, location: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/stores/",
        Some(json!({
            "name": name,
            "category": category,
            "location": location,
            "manager": "Mei Ling",
            "contact": "mei@example.com",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body
}

#[tokio::test]
async fn test_store_lifecycle() {
    let app = app().await;

    let created = create(&app, "Gadget Hub", "electronics", "GF-North").await;
    assert_eq!(created["success"], true);
    assert_eq!(created["message"], "Store created successfully");
    assert_eq!(created["store_id"], "ST001");
    assert_eq!(created["store"]["location_code"], "GF-N");
    assert_eq!(created["store"]["hours"]["Sunday"], "11:00 AM - 8:00 PM");

    let (status, detail) = send(&app, Method::GET, "/api/stores/ST001/", None).await;
    assert_eq!(status, StatusCode::OK);
    let store = &detail["store"];
    assert_eq!(store["id"], "ST001");
    assert_eq!(store["name"], "Gadget Hub");
    assert_eq!(store["location"], "Ground Floor, North Wing");
    assert_eq!(store["manager"], "Mei Ling");
    assert_eq!(store["contact"], "mei@example.com");
    assert_eq!(store["status"], "active");
    assert_eq!(store["description"], "Gadget Hub - electronics store");
    for key in ["size", "monthlyRent", "revenue", "rating", "performance", "leaseEnd"] {
        assert!(!store[key].is_null(), "missing {key}");
    }

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/stores/ST001",
        Some(json!({ "name": "Gadget Hub Plus", "status": "maintenance" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["message"], "Store updated successfully");
    assert_eq!(updated["store"], json!({ "id": "ST001", "name": "Gadget Hub Plus" }));

    let (_, detail) = send(&app, Method::GET, "/api/stores/ST001", None).await;
    assert_eq!(detail["store"]["status"], "maintenance");
    assert_eq!(detail["store"]["category"], "electronics");
    assert!(detail["store"]["updated_at"].as_i64() > detail["store"]["created_at"].as_i64());

    let (status, deleted) = send(&app, Method::DELETE, "/api/stores/ST001/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "success": true, "message": "Store deleted successfully" }));

    let (status, missing) = send(&app, Method::GET, "/api/stores/ST001/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["success"], false);
    assert_eq!(missing["error"], "Store ST001 not found");
    assert_eq!(missing["code"], 6001);

    let (status, _) = send(&app, Method::DELETE, "/api/stores/ST001/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_filters_and_search() {
    let app = app().await;
    create(&app, "A", "food", "GF-N").await;
    create(&app, "B", "fashion", "1F-S").await;

    let (status, all) = send(&app, Method::GET, "/api/stores/?category=all&status=all&search=", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all["count"], 2);
    assert_eq!(all["stores"][0]["id"], "ST001");
    assert!(all["stores"][0]["monthly_rent"].is_number());

    let (_, food) = send(&app, Method::GET, "/api/stores?category=food", None).await;
    assert_eq!(food["count"], 1);
    assert_eq!(food["stores"][0]["name"], "A");

    let (_, found) = send(&app, Method::GET, "/api/stores/?search=south", None).await;
    assert_eq!(found["count"], 1);
    assert_eq!(found["stores"][0]["name"], "B");

    let (_, found) = send(&app, Method::GET, "/api/stores/?search=MEI", None).await;
    assert_eq!(found["count"], 2);

    let (status, bad) = send(&app, Method::GET, "/api/stores/?status=closed", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(bad["code"], 6004);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_creates_get_distinct_ids() {
    let app = app().await;

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                send(
                    &app,
                    Method::POST,
                    "/api/stores/",
                    Some(json!({
                        "name": format!("Kiosk {i}"),
                        "category": "food",
                        "location": "GF-E",
                        "manager": "Ravi",
                        "contact": "ravi@example.com",
                    })),
                )
                .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK, "{body}");
        ids.push(body["store_id"].as_str().unwrap().to_string());
    }
    ids.sort();
    let expected: Vec<String> = (1..=10).map(|n| format!("ST{n:03}")).collect();
    assert_eq!(ids, expected);

    let (_, all) = send(&app, Method::GET, "/api/stores/", None).await;
    assert_eq!(all["count"], 10);
}

#[tokio::test]
async fn test_create_validation_errors() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/stores/",
        Some(json!({ "category": "food", "location": "GF-N" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "name is required");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/stores/",
        Some(json!({ "name": "X", "category": "weapons", "location": "GF-N" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6002);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/stores/",
        Some(json!({ "name": "X", "category": "food", "location": "3F-N" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6003);

    let (status, body) = send(&app, Method::POST, "/api/stores/", Some(json!("not an object"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 5);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/stores/ST404/",
        Some(json!({ "status": "inactive" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);

    let (_, list) = send(&app, Method::GET, "/api/stores/", None).await;
    assert_eq!(list["count"], 0);
}

#[tokio::test]
async fn test_stats_follow_updates() {
    let app = app().await;
    create(&app, "A", "food", "GF-N").await;
    create(&app, "B", "fashion", "1F-S").await;

    let (status, body) = send(&app, Method::GET, "/api/store-stats/", None).await;
    assert_eq!(status, StatusCode::OK);
    let stats = &body["stats"];
    assert_eq!(stats["total_stores"], 2);
    assert_eq!(stats["open_stores"], 2);
    assert_eq!(stats["closed_stores"], 0);
    assert_eq!(stats["occupancy_rate"], 3.3);
    assert_eq!(stats["capacity"], 60);
    assert_eq!(stats["categories"], json!({ "fashion": 1, "food": 1 }));
    assert_eq!(stats["category_revenue"]["food"], 850_000.0);

    send(&app, Method::PUT, "/api/stores/ST001/", Some(json!({ "status": "inactive" }))).await;

    let (_, body) = send(&app, Method::GET, "/api/store-stats", None).await;
    assert_eq!(body["stats"]["open_stores"], 1);
    assert_eq!(body["stats"]["closed_stores"], 1);
}

#[tokio::test]
async fn test_stats_averages_match_detail_view() {
    let app = app().await;
    create(&app, "Solo", "home", "1F-W").await;

    let (_, detail) = send(&app, Method::GET, "/api/stores/ST001/", None).await;
    let (_, stats) = send(&app, Method::GET, "/api/store-stats/", None).await;
    assert_eq!(stats["stats"]["average_size"].as_f64(), detail["store"]["size"].as_f64());
    assert_eq!(
        stats["stats"]["average_rent"].as_f64(),
        detail["store"]["monthlyRent"].as_f64()
    );
}

#[tokio::test]
async fn test_rankings_use_injected_metrics() {
    let provider = FixedMetrics::new(metrics(500_000, 300))
        .with("ST001", metrics(1_500_000, 90))
        .with("ST002", metrics(4_800_000, 45))
        .with("ST003", metrics(2_200_000, 10));
    let app = app_with(Arc::new(provider)).await;
    for name in ["A", "B", "C", "D"] {
        create(&app, name, "sports", "2F-W").await;
    }

    let (status, body) = send(&app, Method::GET, "/api/top-stores/", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body["top_stores"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["ST002", "ST003", "ST001", "ST004"]);
    assert_eq!(body["top_stores"][0]["revenue"], 4_800_000);
    assert_eq!(body["top_stores"][0]["category"], "sports");

    let (_, body) = send(&app, Method::GET, "/api/top-stores/?limit=2", None).await;
    assert_eq!(body["top_stores"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, Method::GET, "/api/lease-timeline/", None).await;
    let timeline = body["lease_timeline"].as_array().unwrap();
    assert_eq!(timeline[0]["id"], "ST003");
    assert_eq!(timeline[0]["days_until"], 10);
    assert_eq!(timeline[0]["urgency"], "danger");
    assert_eq!(timeline[1]["id"], "ST002");
    assert_eq!(timeline[1]["urgency"], "warning");
    assert_eq!(timeline[2]["urgency"], "normal");
}

#[tokio::test]
async fn test_unknown_route_and_method() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/api/nothing-here", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, body) = send(&app, Method::PATCH, "/api/stores/", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Invalid method");

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_pages() {
    let app = app().await;
    create(&app, "Tea & Toast", "food", "1F-East").await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/stores/");

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/stores/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Tea &amp; Toast"));
    assert!(html.contains("First Floor, East Wing"));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/stores/?category=books")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("No stores found."));
}
