//! In-process stand-in for the flasky backend.
//!
//! Serves canned JSON on an ephemeral port and records every request it
//! receives so tests can assert on method, path, headers and body.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }
}

type Log = Arc<Mutex<Vec<RecordedRequest>>>;

pub struct FakeBackend {
    pub base_url: String,
    log: Log,
}

impl FakeBackend {
    /// Start a backend whose API lives under `prefix` (e.g. `/api`).
    pub async fn start(prefix: &str) -> Self {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new().fallback(handle).with_state(log.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake backend");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake backend crashed");
        });

        Self {
            base_url: format!("http://{}{}", addr, prefix),
            log,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.log.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("backend should have received a request")
    }
}

/// A base URL nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

pub fn product(id: i64) -> Value {
    json!({"id": id, "name": "Galaxy 26 Ultra", "price": 1299.99, "stock": 4})
}

pub fn order(id: i64, paid: bool) -> Value {
    json!({
        "id": id,
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "payment_status": if paid { "paid" } else { "pending" },
        "shipping_status": "pending",
        "payment_reference": if paid { json!("Ref_AB12CD34EF") } else { Value::Null },
        "total_amount": 2599.98,
        "items": [{"id": 1, "order_id": id, "product_id": 1, "quantity": 2}]
    })
}

async fn handle(State(log): State<Log>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let path = parts.uri.path().to_string();

    log.lock().unwrap().push(RecordedRequest {
        method: parts.method.to_string(),
        path: path.clone(),
        content_type: parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.to_vec(),
    });

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let resource = segments
        .iter()
        .position(|s| *s == "products" || *s == "orders")
        .map(|i| &segments[i..])
        .unwrap_or(&[]);
    let sent: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    match (parts.method.as_str(), resource) {
        ("GET", ["products"]) => Json(json!([product(1), product(2)])).into_response(),
        ("POST", ["products"]) => {
            let mut created = sent;
            created["id"] = json!(11);
            (StatusCode::CREATED, Json(created)).into_response()
        }
        ("GET", ["orders"]) => Json(json!([order(42, false), order(7, true)])).into_response(),
        ("POST", ["orders"]) => (StatusCode::CREATED, Json(order(43, false))).into_response(),
        ("GET", ["orders", "404"]) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Order with ID 404 not found."})),
        )
            .into_response(),
        ("GET", ["orders", "malformed"]) => Json(json!({"unexpected": true})).into_response(),
        ("GET", ["orders", "7"]) => Json(order(7, true)).into_response(),
        ("GET", ["orders", id]) => Json(order(id.parse().unwrap_or(99), false)).into_response(),
        ("POST", ["orders", id, "items"]) => (
            StatusCode::CREATED,
            Json(json!({
                "id": 5,
                "order_id": id.parse::<i64>().ok(),
                "product_id": sent["product_id"],
                "quantity": sent["quantity"]
            })),
        )
            .into_response(),
        ("POST", ["orders", "7", "pay"]) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Order already paid"})),
        )
            .into_response(),
        ("POST", ["orders", id, "pay"]) => {
            let id = id.parse().unwrap_or(99);
            Json(json!({
                "message": "Payment successful",
                "payment_reference": "Ref_AB12CD34EF",
                "order": order(id, true)
            }))
            .into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
