use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use sitewarden_api::router;
use sitewarden_store::Store;
use sitewarden_store::persist::Ephemeral;

fn app() -> Router {
    router(Arc::new(Store::open(Box::new(Ephemeral))))
}

async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn review_lifecycle() {
    let app = app();

    let (status, _) = request(
        &app,
        Method::POST,
        "/review",
        Some(json!({"site": "a.com", "rating": 4, "review": "solid"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    for (rating, text) in [(5, "great"), (3, "okay")] {
        let (status, _) = request(
            &app,
            Method::POST,
            "/review",
            Some(json!({"site": "a.com", "rating": rating, "review": text})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // [4, 5, 3] averages to 4.00.
    let (status, body) = request(&app, Method::GET, "/reviews?site=a.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], json!(4.0));
    assert_eq!(body["reviews"].as_array().unwrap().len(), 3);

    let (status, body) = request(
        &app,
        Method::DELETE,
        "/review",
        Some(json!({"site": "a.com", "index": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Review deleted");

    let (_, body) = request(&app, Method::GET, "/total-reviews-count", None).await;
    assert_eq!(body["count"], 2);

    let (_, body) = request(&app, Method::GET, "/all-reviews", None).await;
    assert_eq!(body["reviews"]["a.com"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unreviewed_site_has_null_score() {
    let app = app();
    let (status, body) = request(&app, Method::GET, "/reviews?site=nobody.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], Value::Null);
    assert_eq!(body["reviews"], json!([]));
}

#[tokio::test]
async fn review_validation_failures() {
    let app = app();

    let (status, _) = request(&app, Method::GET, "/reviews", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = request(
        &app,
        Method::POST,
        "/review",
        Some(json!({"site": "a.com", "rating": 9, "review": "too high"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = request(
        &app,
        Method::DELETE,
        "/review",
        Some(json!({"site": "a.com", "index": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_body_fields_are_bad_requests() {
    let app = app();

    // Required field absent from the body: 400, not a deserialization 422.
    let (status, body) = request(
        &app,
        Method::POST,
        "/review",
        Some(json!({"rating": 4, "review": "no site"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = request(
        &app,
        Method::POST,
        "/report",
        Some(json!({"site": "a.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(
        &app,
        Method::DELETE,
        "/review",
        Some(json!({"site": "a.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Same for a body that is not JSON at all.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/review")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn report_lifecycle() {
    let app = app();

    let (status, body) = request(
        &app,
        Method::POST,
        "/report",
        Some(json!({"site": "a.com", "reason": "scam"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["report"]["id"], 1);
    assert_eq!(body["report"]["site"], "a.com");

    let (_, body) = request(&app, Method::GET, "/reports", None).await;
    assert_eq!(body["reports"].as_array().unwrap().len(), 1);

    let (status, _) = request(&app, Method::DELETE, "/report/1", None).await;
    assert_eq!(status, StatusCode::OK);

    // Deleted ids never come back, and deleting again is a 404.
    let (_, body) = request(&app, Method::GET, "/reports", None).await;
    assert!(body["reports"].as_array().unwrap().is_empty());
    let (status, _) = request(&app, Method::DELETE, "/report/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn report_then_blacklist_shows_in_insights() {
    let app = app();

    let (status, _) = request(
        &app,
        Method::POST,
        "/report",
        Some(json!({"site": "a.com", "reason": "scam"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = request(&app, Method::GET, "/flagged-sites", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["flaggedSites"]["a.com"]["flags"], 1);
    assert_eq!(body["flaggedSites"]["a.com"]["isBlacklisted"], false);

    let (status, body) = request(
        &app,
        Method::POST,
        "/flagged-site/a.com",
        Some(json!({"isBlacklisted": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["site"]["isBlacklisted"], true);
    assert_eq!(body["site"]["flags"], 1);

    let (status, body) = request(&app, Method::GET, "/insights", None).await;
    assert_eq!(status, StatusCode::OK);
    let top = body["topFlaggedSites"].as_array().unwrap();
    assert_eq!(top[0]["site"], "a.com");
    assert_eq!(top[0]["isBlacklisted"], true);
}

#[tokio::test]
async fn marking_safe_resets_flags() {
    let app = app();

    for _ in 0..3 {
        request(
            &app,
            Method::POST,
            "/report",
            Some(json!({"site": "a.com", "reason": "spam"})),
        )
        .await;
    }

    let (status, body) = request(
        &app,
        Method::POST,
        "/flagged-site/a.com",
        Some(json!({"isRisky": false, "isBlacklisted": false, "flags": 7})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["site"], json!({"isBlacklisted": false, "isRisky": false, "flags": 0}));
}

#[tokio::test]
async fn unblock_clears_site_reports() {
    let app = app();

    request(
        &app,
        Method::POST,
        "/report",
        Some(json!({"site": "a.com", "reason": "scam"})),
    )
    .await;
    request(
        &app,
        Method::POST,
        "/report",
        Some(json!({"site": "b.com", "reason": "spam"})),
    )
    .await;

    let (status, body) = request(&app, Method::POST, "/unblock-site/a.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["site"], json!({"isBlacklisted": false, "isRisky": false, "flags": 0}));

    let (_, body) = request(&app, Method::GET, "/reports", None).await;
    let reports = body["reports"].as_array().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["site"], "b.com");

    // Never-flagged site: still a 200, with no `site` field in the body.
    let (status, body) = request(&app, Method::POST, "/unblock-site/nobody.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("site").is_none());
}

#[tokio::test]
async fn delete_site_is_idempotent() {
    let app = app();

    request(
        &app,
        Method::POST,
        "/review",
        Some(json!({"site": "a.com", "rating": 2, "review": "meh"})),
    )
    .await;
    request(
        &app,
        Method::POST,
        "/report",
        Some(json!({"site": "a.com", "reason": "scam"})),
    )
    .await;

    let (status, body) = request(&app, Method::DELETE, "/site/a.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["site"], "a.com");

    let (_, body) = request(&app, Method::GET, "/flagged-sites", None).await;
    assert_eq!(body["flaggedSites"], json!({}));
    let (_, body) = request(&app, Method::GET, "/reports", None).await;
    assert_eq!(body["reports"], json!([]));

    let (status, _) = request(&app, Method::DELETE, "/site/a.com", None).await;
    assert_eq!(status, StatusCode::OK);
}
