//! HTTP contract tests for the tunables admin endpoint
//!
//! Drives the full router in-process: status codes, error messages,
//! evaluation order, and merge/remove semantics.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use tunables_admin::admin::TunablesAdmin;
use tunables_admin::http_server::build_router;
use tunables_admin::tunable::{
    DecoderRegistry, FnRegistry, TunableCollection, TunableMap, TunableRegistry, TunableValue,
};

const STRING: &str = "java.lang.String";

fn string(s: &str) -> TunableValue {
    TunableValue::String(s.to_string())
}

/// Router over a registry holding one empty collection, `test_map`
fn setup() -> (Router, Arc<TunableMap>) {
    let registry = Arc::new(TunableRegistry::new());
    let map = registry.get_or_create("test_map").unwrap();
    (build_router(TunablesAdmin::new(registry)), map)
}

fn body_for(entries: &[(&str, &str)]) -> String {
    let tunables: Vec<Value> = entries
        .iter()
        .map(|(id, value)| json!({"id": id, "type": STRING, "value": value}))
        .collect();
    json!({ "tunables": tunables }).to_string()
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder
        .body(body.into())
        .unwrap_or_else(|err| panic!("failed to build request: {err}"));

    router
        .clone()
        .oneshot(request)
        .await
        .unwrap_or_else(|err| panic!("router request failed: {err}"))
}

async fn send_json(router: &Router, method: Method, uri: &str, body: String) -> Response {
    send(router, method, uri, Some("application/json"), body).await
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap_or_else(|err| panic!("failed to read response body: {err}"));
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_other_methods_are_405() {
    let (router, map) = setup();

    for method in [Method::GET, Method::POST, Method::PATCH, Method::OPTIONS] {
        for content_type in [None, Some("text/plain"), Some("application/json")] {
            let response = send(
                &router,
                method.clone(),
                "/admin/tunables/test_map",
                content_type,
                body_for(&[("a", "b")]),
            )
            .await;

            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
            assert_eq!(response.headers()[header::ALLOW], "PUT, DELETE");
        }
    }
    assert!(map.is_empty());
}

#[tokio::test]
async fn test_non_json_content_type() {
    let (router, map) = setup();

    for method in [Method::PUT, Method::DELETE] {
        for content_type in [None, Some("text/plain"), Some("application/x-www-form-urlencoded")] {
            let response = send(
                &router,
                method.clone(),
                "/admin/tunables/test_map",
                content_type,
                body_for(&[("a", "b")]),
            )
            .await;

            assert!(response.status().is_client_error());
            assert!(body_text(response).await.contains("Expected Content-Type"));
        }
    }
    assert!(map.is_empty());
}

#[tokio::test]
async fn test_json_content_type_with_charset_accepted() {
    let (router, map) = setup();

    let response = send(
        &router,
        Method::PUT,
        "/admin/tunables/test_map",
        Some("application/json; charset=utf-8"),
        body_for(&[("test_id", "hello")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(map.value("test_id"), Some(string("hello")));
}

#[tokio::test]
async fn test_unparseable_body() {
    let (router, _) = setup();

    for method in [Method::PUT, Method::DELETE] {
        for body in ["", "{", "not json", r#"{"tunables": 5}"#, r#"{"tunables":[{"id":"a"}]}"#] {
            let response =
                send_json(&router, method.clone(), "/admin/tunables/test_map", body.to_string())
                    .await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body:?}");
            assert!(body_text(response).await.contains("Failed to parse JSON"));
        }
    }
}

#[tokio::test]
async fn test_unknown_type_is_parse_error_and_nothing_applied() {
    let (router, map) = setup();
    let body = json!({"tunables": [
        {"id": "first", "type": STRING, "value": "ok"},
        {"id": "second", "type": "java.util.UUID", "value": "?"}
    ]})
    .to_string();

    let response = send_json(&router, Method::PUT, "/admin/tunables/test_map", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Failed to parse JSON"));
    assert!(map.is_empty());
}

#[tokio::test]
async fn test_unregistered_collection_is_404() {
    let (router, _) = setup();

    for method in [Method::PUT, Method::DELETE] {
        let response = send_json(
            &router,
            method,
            "/admin/tunables/nonexistent",
            body_for(&[("a", "b")]),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response)
            .await
            .contains("TunableMap not found for id: nonexistent"));
    }
}

#[tokio::test]
async fn test_parse_error_wins_over_not_found() {
    let (router, _) = setup();

    let response =
        send_json(&router, Method::PUT, "/admin/tunables/nonexistent", "{".to_string()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Failed to parse JSON"));
}

#[tokio::test]
async fn test_put_creates_entry() {
    let (router, map) = setup();
    assert!(map.get("test_id").is_none());

    let response = send_json(
        &router,
        Method::PUT,
        "/admin/tunables/test_map",
        body_for(&[("test_id", "hello")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(map.value("test_id"), Some(string("hello")));
    assert_eq!(map.get("test_id").unwrap().type_name, STRING);

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body, json!({"id": "test_map", "method": "PUT", "applied": 1}));
}

#[tokio::test]
async fn test_put_overwrites_entry() {
    let (router, map) = setup();
    map.put("test_id", STRING, string("hello")).unwrap();

    let response = send_json(
        &router,
        Method::PUT,
        "/admin/tunables/test_map",
        body_for(&[("test_id", "goodbye")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(map.value("test_id"), Some(string("goodbye")));
}

#[tokio::test]
async fn test_put_leaves_unnamed_entries() {
    let (router, map) = setup();
    map.put("test_id1", STRING, string("hello")).unwrap();
    map.put("test_id2", STRING, string("stick around")).unwrap();

    let response = send_json(
        &router,
        Method::PUT,
        "/admin/tunables/test_map",
        body_for(&[("test_id1", "goodbye")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(map.value("test_id1"), Some(string("goodbye")));
    assert_eq!(map.value("test_id2"), Some(string("stick around")));
    assert_eq!(map.len(), 2);
}

#[tokio::test]
async fn test_delete_removes_only_named_entries() {
    let (router, map) = setup();
    map.put("test_id1", STRING, string("hello")).unwrap();
    map.put("test_id2", STRING, string("stick around")).unwrap();

    let response = send_json(
        &router,
        Method::DELETE,
        "/admin/tunables/test_map",
        body_for(&[("test_id1", "whatever")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(map.get("test_id1").is_none());
    assert_eq!(map.value("test_id2"), Some(string("stick around")));
}

#[tokio::test]
async fn test_delete_of_absent_id_is_ok() {
    let (router, map) = setup();
    map.put("keep", STRING, string("me")).unwrap();

    let response = send_json(
        &router,
        Method::DELETE,
        "/admin/tunables/test_map",
        body_for(&[("never_set", "x")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(map.value("keep"), Some(string("me")));
}

#[tokio::test]
async fn test_put_is_idempotent() {
    let (router, map) = setup();
    map.put("untouched", STRING, string("same")).unwrap();
    let body = body_for(&[("a", "1"), ("b", "2")]);

    let snapshot = |map: &TunableMap| -> Vec<(String, String, TunableValue)> {
        map.entries()
            .into_iter()
            .map(|t| (t.id, t.type_name, t.value))
            .collect()
    };

    send_json(&router, Method::PUT, "/admin/tunables/test_map", body.clone()).await;
    let once = snapshot(map.as_ref());

    send_json(&router, Method::PUT, "/admin/tunables/test_map", body).await;
    let twice = snapshot(map.as_ref());

    assert_eq!(once, twice);
    assert_eq!(once.len(), 3);
}

#[tokio::test]
async fn test_empty_list_is_noop() {
    let (router, map) = setup();
    map.put("keep", STRING, string("me")).unwrap();

    for method in [Method::PUT, Method::DELETE] {
        let response = send_json(
            &router,
            method,
            "/admin/tunables/test_map",
            r#"{"tunables":[]}"#.to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
    }
    assert_eq!(map.len(), 1);
    assert_eq!(map.value("keep"), Some(string("me")));
}

#[tokio::test]
async fn test_put_with_new_type_overwrites_type() {
    let (router, map) = setup();
    map.put("limit", STRING, string("ten")).unwrap();

    let body = json!({"tunables": [
        {"id": "limit", "type": "java.lang.Integer", "value": 10}
    ]})
    .to_string();
    let response = send_json(&router, Method::PUT, "/admin/tunables/test_map", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let entry = map.get("limit").unwrap();
    assert_eq!(entry.type_name, "java.lang.Integer");
    assert_eq!(entry.value, TunableValue::Int(10));
}

#[tokio::test]
async fn test_collections_registered_later_are_visible() {
    let registry = Arc::new(TunableRegistry::new());
    let router = build_router(TunablesAdmin::new(registry.clone()));

    let response =
        send_json(&router, Method::PUT, "/admin/tunables/late", body_for(&[("a", "b")])).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let map = registry.get_or_create("late").unwrap();
    let response =
        send_json(&router, Method::PUT, "/admin/tunables/late", body_for(&[("a", "b")])).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(map.value("a"), Some(string("b")));
}

#[tokio::test]
async fn test_percent_encoded_collection_id() {
    let registry = Arc::new(TunableRegistry::new());
    let map = registry.get_or_create("my svc").unwrap();
    let router = build_router(TunablesAdmin::new(registry));

    let response = send_json(
        &router,
        Method::PUT,
        "/admin/tunables/my%20svc",
        body_for(&[("a", "b")]),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(map.value("a"), Some(string("b")));

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["id"], "my svc");
}

#[tokio::test]
async fn test_custom_decoder_through_endpoint() {
    let registry = Arc::new(TunableRegistry::new());
    let map = registry.get_or_create("test_map").unwrap();

    let mut decoders = DecoderRegistry::new();
    decoders.register("com.example.RetryPolicy", |raw: &Value| {
        match raw.get("attempts").and_then(Value::as_u64) {
            Some(_) => Ok(TunableValue::Json(raw.clone())),
            None => Err("expected an object with numeric \"attempts\"".to_string()),
        }
    });
    let router = build_router(TunablesAdmin::new(registry).with_decoders(decoders));

    let policy = json!({"attempts": 3, "backoff": "100.milliseconds"});
    let body = json!({"tunables": [
        {"id": "retry", "type": "com.example.RetryPolicy", "value": policy}
    ]})
    .to_string();
    let response = send_json(&router, Method::PUT, "/admin/tunables/test_map", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(map.value("retry"), Some(TunableValue::Json(policy.clone())));

    let bad = json!({"tunables": [
        {"id": "retry", "type": "com.example.RetryPolicy", "value": {"attempts": "many"}}
    ]})
    .to_string();
    let response = send_json(&router, Method::PUT, "/admin/tunables/test_map", bad).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Failed to parse JSON"));

    let response = send(&router, Method::GET, "/admin/tunables", None, Body::empty()).await;
    let listing: Value = serde_json::from_str(&body_text(response).await).unwrap();
    let entry = &listing["collections"][0]["tunables"][0];
    assert_eq!(entry["id"], "retry");
    assert_eq!(entry["type"], "com.example.RetryPolicy");
    assert_eq!(entry["value"], policy);
}

#[tokio::test]
async fn test_out_of_range_float_rejected() {
    let (router, map) = setup();
    let body = json!({"tunables": [
        {"id": "ratio", "type": "java.lang.Float", "value": 1e300}
    ]})
    .to_string();

    let response = send_json(&router, Method::PUT, "/admin/tunables/test_map", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("32-bit float"));
    assert!(map.is_empty());
}

#[tokio::test]
async fn test_injected_lookup_registry() {
    let fixed: Arc<TunableMap> = Arc::new(TunableMap::new());
    let target = fixed.clone();
    let registry = FnRegistry::new(move |id: &str| {
        (id == "fixed").then(|| target.clone() as Arc<dyn TunableCollection>)
    });
    let router = build_router(TunablesAdmin::new(Arc::new(registry)));

    let response =
        send_json(&router, Method::PUT, "/admin/tunables/fixed", body_for(&[("k", "v")])).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(fixed.value("k"), Some(string("v")));

    let response =
        send_json(&router, Method::PUT, "/admin/tunables/other", body_for(&[("k", "v")])).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_listing_shows_current_values() {
    let (router, map) = setup();
    map.put("greeting", STRING, string("hello")).unwrap();
    map.put(
        "timeout",
        "com.twitter.util.Duration",
        TunableValue::Duration(std::time::Duration::from_secs(3)),
    )
    .unwrap();

    let response = send(&router, Method::GET, "/admin/tunables", None, Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["total"], 1);
    let collection = &body["collections"][0];
    assert_eq!(collection["id"], "test_map");
    assert_eq!(collection["tunables"][0]["id"], "greeting");
    assert_eq!(collection["tunables"][0]["type"], STRING);
    assert_eq!(collection["tunables"][0]["value"], "hello");
    assert_eq!(collection["tunables"][1]["value"], "3.seconds");
}

#[tokio::test]
async fn test_metrics_endpoint_counts_requests() {
    let (router, _) = setup();

    send(&router, Method::GET, "/admin/tunables/test_map", None, Body::empty()).await;
    send_json(&router, Method::PUT, "/admin/tunables/nope", body_for(&[])).await;
    send_json(
        &router,
        Method::PUT,
        "/admin/tunables/test_map",
        body_for(&[("a", "1"), ("b", "2")]),
    )
    .await;

    let response = send(&router, Method::GET, "/admin/metrics.json", None, Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let metrics: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(metrics["requests"], 3);
    assert_eq!(metrics["method_not_allowed"], 1);
    assert_eq!(metrics["collection_not_found"], 1);
    assert_eq!(metrics["updates_succeeded"], 1);
    assert_eq!(metrics["tunables_put"], 2);
}

#[tokio::test]
async fn test_health() {
    let (router, _) = setup();

    let response = send(&router, Method::GET, "/health", None, Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
}
