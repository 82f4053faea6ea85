//! Tests de integración del relay de Traccar
//!
//! Levantan un servidor Traccar falso en un puerto efímero y verifican
//! el passthrough del JSON, las credenciales basic auth salientes y el
//! mapeo de fallos upstream a 502 sin filtrar detalle interno.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use fleet_tracking::create_app;
use serde_json::{json, Value};
use tower::ServiceExt;

fn devices_fixture() -> Value {
    json!([
        {
            "id": 1,
            "name": "Camion 7",
            "uniqueId": "867530901234567",
            "status": "online",
            "lastUpdate": "2024-05-01T10:00:00.000+00:00"
        },
        {
            "id": 2,
            "name": "Camion 12",
            "uniqueId": "867530907654321",
            "status": "offline",
            "lastUpdate": "2024-04-30T22:15:00.000+00:00"
        }
    ])
}

fn positions_fixture() -> Value {
    json!([
        {
            "id": 101,
            "deviceId": 1,
            "latitude": 14.5995,
            "longitude": 120.9842,
            "speed": 12.5,
            "course": 80.0,
            "fixTime": "2024-05-01T10:00:00.000+00:00",
            "attributes": { "ignition": true, "distance": 153.2 }
        }
    ])
}

#[derive(Clone)]
struct MockState {
    devices: Value,
    positions: Value,
    hits: Arc<AtomicUsize>,
    last_auth: Arc<Mutex<Option<String>>>,
}

struct MockTraccar {
    url: String,
    hits: Arc<AtomicUsize>,
    last_auth: Arc<Mutex<Option<String>>>,
}

async fn mock_devices(State(state): State<MockState>, headers: HeaderMap) -> Json<Value> {
    record_hit(&state, &headers);
    Json(state.devices.clone())
}

async fn mock_positions(State(state): State<MockState>, headers: HeaderMap) -> Json<Value> {
    record_hit(&state, &headers);
    Json(state.positions.clone())
}

fn record_hit(state: &MockState, headers: &HeaderMap) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_auth.lock().unwrap() = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
}

/// Servidor upstream en un puerto efímero; devuelve la URL base.
async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    format!("http://{}", addr)
}

async fn start_mock_traccar() -> MockTraccar {
    let state = MockState {
        devices: devices_fixture(),
        positions: positions_fixture(),
        hits: Arc::new(AtomicUsize::new(0)),
        last_auth: Arc::new(Mutex::new(None)),
    };

    let app = Router::new()
        .route("/api/devices", get(mock_devices))
        .route("/api/positions", get(mock_positions))
        .with_state(state.clone());

    MockTraccar {
        url: spawn_upstream(app).await,
        hits: state.hits,
        last_auth: state.last_auth,
    }
}

/// Upstream que responde 500 con un cuerpo que jamás debe llegar al cliente.
async fn start_failing_traccar() -> String {
    async fn failing() -> (StatusCode, Json<Value>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "secret-internal-detail" })),
        )
    }

    let app = Router::new()
        .route("/api/devices", get(failing))
        .route("/api/positions", get(failing));
    spawn_upstream(app).await
}

/// Upstream que tarda más que el timeout configurado en los tests (1s).
async fn start_slow_traccar() -> String {
    async fn slow() -> Json<Value> {
        tokio::time::sleep(Duration::from_secs(2)).await;
        Json(json!([]))
    }

    let app = Router::new().route("/api/positions", get(slow));
    spawn_upstream(app).await
}

/// Upstream que responde 200 con un cuerpo que no es JSON.
async fn start_non_json_traccar() -> String {
    let app = Router::new().route("/api/devices", get(|| async { "esto no es JSON" }));
    spawn_upstream(app).await
}

async fn relay_get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_devices_relay_is_verbatim_passthrough() {
    let mock = start_mock_traccar().await;
    let app = create_app(common::offline_state(&mock.url));

    let (status, body) = relay_get(app, "/api/traccar/devices").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, devices_fixture());
    assert_eq!(mock.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_positions_relay_passes_body_through_and_sends_basic_auth() {
    let mock = start_mock_traccar().await;
    let app = create_app(common::offline_state(&mock.url));

    let (status, body) = relay_get(app, "/api/traccar/positions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, positions_fixture());

    // admin:admin en base64; las credenciales viajan solo hacia el upstream
    let auth = mock.last_auth.lock().unwrap().clone();
    assert_eq!(auth.as_deref(), Some("Basic YWRtaW46YWRtaW4="));
}

// Con Redis apuntando a un puerto cerrado el snapshot no se puede
// guardar; el relay exitoso debe responder 200 de todas formas.
#[tokio::test]
async fn test_positions_relay_succeeds_with_cache_down() {
    let mock = start_mock_traccar().await;
    let app = create_app(common::offline_state(&mock.url));

    let (status, body) = relay_get(app, "/api/traccar/positions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, positions_fixture());
}

#[tokio::test]
async fn test_devices_are_relayed_fresh_on_every_call() {
    let mock = start_mock_traccar().await;
    let app = create_app(common::offline_state(&mock.url));

    let (first_status, first_body) = relay_get(app.clone(), "/api/traccar/devices").await;
    let (second_status, second_body) = relay_get(app, "/api/traccar/devices").await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first_body, second_body);
    // Cada llamada debe golpear el upstream: los dispositivos no se cachean
    assert_eq!(mock.hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_upstream_failure_maps_to_502_without_leaking_detail() {
    let url = start_failing_traccar().await;
    let app = create_app(common::offline_state(&url));

    let (status, body) = relay_get(app, "/api/traccar/devices").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "UPSTREAM_ERROR");
    assert_eq!(
        body["message"],
        "An error occurred while communicating with the tracking provider"
    );

    let raw = body.to_string();
    assert!(!raw.contains("secret-internal-detail"));
    assert!(!raw.contains("admin"));
}

#[tokio::test]
async fn test_upstream_timeout_maps_to_502() {
    let url = start_slow_traccar().await;
    let app = create_app(common::offline_state(&url));

    let (status, body) = relay_get(app, "/api/traccar/positions").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_non_json_upstream_body_maps_to_502() {
    let url = start_non_json_traccar().await;
    let app = create_app(common::offline_state(&url));

    let (status, body) = relay_get(app, "/api/traccar/devices").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "UPSTREAM_ERROR");
}

// Proveedor inalcanzable y sin snapshot en cache: el error upstream
// se propaga en lugar de inventar una respuesta.
#[tokio::test]
async fn test_positions_without_provider_or_snapshot_is_502() {
    let app = create_app(common::offline_state("http://127.0.0.1:1"));

    let (status, body) = relay_get(app, "/api/traccar/positions").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_relay_handles_concurrent_calls() {
    let mock = start_mock_traccar().await;
    let app = create_app(common::offline_state(&mock.url));

    let calls = (0..8).map(|_| relay_get(app.clone(), "/api/traccar/devices"));
    let results = futures::future::join_all(calls).await;

    for (status, body) in results {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, devices_fixture());
    }
    assert_eq!(mock.hits.load(Ordering::SeqCst), 8);
}
