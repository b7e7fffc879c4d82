mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{API_KEY, HOST};
use kv_url_shortener::domain::entities::ItemFields;
use kv_url_shortener::domain::repositories::ItemRepository;
use kv_url_shortener::routes::build_router;
use serde_json::{Value, json};

fn make_server(items: Vec<ItemFields>) -> TestServer {
    let (state, _repo, _rx) = common::create_test_state(items);
    TestServer::new(build_router(state)).unwrap()
}

// ─── GET /api/all ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_items_sorted_by_param() {
    let server = make_server(vec![
        common::item("zeta", "https://z.example"),
        common::item("alpha", "https://a.example"),
        common::disabled_item("mid", "https://m.example"),
    ]);

    let response = server
        .get("/api/all")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .await;

    response.assert_status_ok();

    let body = response.json::<Vec<ItemFields>>();
    let params: Vec<&str> = body.iter().map(|i| i.param.as_str()).collect();
    assert_eq!(params, vec!["alpha", "mid", "zeta"]);
    assert!(body[1].unavailable);
    assert_eq!(body[1].url, "https://m.example");
}

#[tokio::test]
async fn test_list_items_unknown_host_is_empty() {
    let server = make_server(vec![common::item("a", "https://a.example")]);

    let response = server
        .get("/api/all")
        .add_header("Host", "other.example.com")
        .add_header("X-API-Key", API_KEY)
        .await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_host_port_and_case_are_ignored() {
    let server = make_server(vec![common::item("a", "https://a.example")]);

    let response = server
        .get("/api/items/a")
        .add_header("Host", "S.Example.com:8080")
        .add_header("X-API-Key", API_KEY)
        .await;

    response.assert_status_ok();
}

// ─── GET /api/items/{param} ──────────────────────────────────────────────────

#[tokio::test]
async fn test_get_item() {
    let server = make_server(vec![ItemFields {
        description: Some("Docs".to_string()),
        count: 4,
        ..common::item("docs", "https://docs.example")
    }]);

    let response = server
        .get("/api/items/docs")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "param": "docs",
        "description": "Docs",
        "url": "https://docs.example",
        "count": 4,
        "unavailable": false
    }));
}

#[tokio::test]
async fn test_get_item_without_description_omits_field() {
    let server = make_server(vec![common::item("bare", "https://bare.example")]);

    let response = server
        .get("/api/items/bare")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .await;

    let body = response.json::<Value>();
    assert!(body.get("description").is_none());
}

#[tokio::test]
async fn test_get_item_not_found_has_empty_body() {
    let server = make_server(vec![]);

    let response = server
        .get("/api/items/missing")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .await;

    response.assert_status_not_found();
    assert!(response.text().is_empty());
}

// ─── PUT /api/items/{param} ──────────────────────────────────────────────────

#[tokio::test]
async fn test_put_creates_item() {
    let (state, repo, _rx) = common::create_test_state(vec![]);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .put("/api/items/new")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "url": "https://new.example" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "param": "new",
        "url": "https://new.example",
        "count": 0,
        "unavailable": false
    }));

    let stored = repo.find(HOST, "new").await.unwrap().unwrap();
    assert_eq!(stored.raw_url(), "https://new.example");
}

#[tokio::test]
async fn test_put_keeps_existing_description_and_count_and_reenables() {
    let server = make_server(vec![ItemFields {
        description: Some("Keep me".to_string()),
        count: 9,
        unavailable: true,
        ..common::item("com", "https://old.example")
    }]);

    let response = server
        .put("/api/items/com")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "url": "https://new.example" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "param": "com",
        "description": "Keep me",
        "url": "https://new.example",
        "count": 9,
        "unavailable": false
    }));
}

#[tokio::test]
async fn test_put_missing_url_is_bad_request() {
    let server = make_server(vec![]);

    let response = server
        .put("/api/items/new")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "description": "no url" }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["details"]["fields"]["url"].is_array());
}

#[tokio::test]
async fn test_put_rejects_non_http_url() {
    let server = make_server(vec![]);

    let response = server
        .put("/api/items/new")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "url": "javascript:alert(1)" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_put_rejects_negative_and_fractional_count() {
    let server = make_server(vec![]);

    for count in [json!(-1), json!(1.5), json!("3")] {
        let response = server
            .put("/api/items/new")
            .add_header("Host", HOST)
            .add_header("X-API-Key", API_KEY)
            .json(&json!({ "url": "https://ok.example", "count": count }))
            .await;

        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn test_put_malformed_json_is_bad_request() {
    let server = make_server(vec![]);

    let response = server
        .put("/api/items/new")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .add_header("Content-Type", "application/json")
        .text("{not json")
        .await;

    response.assert_status_bad_request();
}

// ─── PATCH /api/items/{param} ────────────────────────────────────────────────

#[tokio::test]
async fn test_patch_merges_over_stored_item() {
    let server = make_server(vec![ItemFields {
        description: Some("Original".to_string()),
        count: 3,
        ..common::item("p", "https://p.example")
    }]);

    let response = server
        .patch("/api/items/p")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "count": 10, "unavailable": true }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "param": "p",
        "description": "Original",
        "url": "https://p.example",
        "count": 10,
        "unavailable": true
    }));
}

#[tokio::test]
async fn test_patch_missing_item_is_not_found() {
    let (state, repo, _rx) = common::create_test_state(vec![]);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .patch("/api/items/ghost")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "url": "https://ghost.example" }))
        .await;

    response.assert_status_not_found();
    assert!(repo.find(HOST, "ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn test_patch_invalid_url_is_bad_request() {
    let server = make_server(vec![common::item("p", "https://p.example")]);

    let response = server
        .patch("/api/items/p")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();
}

// ─── DELETE /api/items/{param} ───────────────────────────────────────────────

#[tokio::test]
async fn test_delete_disables_by_default() {
    let (state, repo, _rx) = common::create_test_state(vec![ItemFields {
        count: 2,
        ..common::item("d", "https://d.example")
    }]);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .delete("/api/items/d")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "param": "d",
        "url": "https://d.example",
        "count": 2,
        "unavailable": true
    }));

    let stored = repo.find(HOST, "d").await.unwrap().unwrap();
    assert!(stored.is_unavailable());
}

#[tokio::test]
async fn test_delete_permanently() {
    let (state, repo, _rx) = common::create_test_state(vec![common::item("d", "https://d.example")]);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .delete("/api/items/d")
        .add_query_param("permanently", "true")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());
    assert!(repo.find(HOST, "d").await.unwrap().is_none());

    // Gone for good.
    server
        .delete("/api/items/d")
        .add_query_param("permanently", "true")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_permanently_false_disables() {
    let (state, repo, _rx) = common::create_test_state(vec![common::item("d", "https://d.example")]);
    let server = TestServer::new(build_router(state)).unwrap();

    server
        .delete("/api/items/d")
        .add_query_param("permanently", "false")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .await
        .assert_status_ok();

    assert!(repo.find(HOST, "d").await.unwrap().unwrap().is_unavailable());
}

#[tokio::test]
async fn test_delete_missing_item_is_not_found() {
    let server = make_server(vec![]);

    server
        .delete("/api/items/none")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .await
        .assert_status_not_found();

    server
        .delete("/api/items/none")
        .add_query_param("permanently", "true")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_bad_permanently_flag_is_bad_request() {
    let server = make_server(vec![common::item("d", "https://d.example")]);

    server
        .delete("/api/items/d")
        .add_query_param("permanently", "maybe")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_disabled_item_can_be_reenabled_with_patch() {
    let server = make_server(vec![common::disabled_item("r", "https://r.example")]);

    server
        .patch("/api/items/r")
        .add_header("Host", HOST)
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "unavailable": false }))
        .await
        .assert_status_ok();

    let response = server.get("/r").add_header("Host", HOST).await;
    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://r.example");
}
