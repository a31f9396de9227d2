//! Shared utilities for integration testing.
//!
//! Hosts a mock content service on a loopback port that answers the two
//! query operations the gateway consumes: targeted single-document lookup
//! and untargeted listing.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use cms_gateway::config::GatewayConfig;
use cms_gateway::content::HttpContentClient;
use cms_gateway::pages::PageResolver;
use cms_gateway::HttpServer;

/// Handle to a running mock content service.
#[derive(Clone)]
pub struct MockCms {
    pub addr: SocketAddr,
    /// Number of content queries received.
    pub hits: Arc<AtomicU32>,
}

struct CmsState {
    documents: Vec<Value>,
    hits: Arc<AtomicU32>,
    fail: bool,
    delay: Duration,
}

/// Start a mock content service holding the given page documents.
pub async fn start_mock_cms(documents: Vec<Value>) -> MockCms {
    start(documents, false, Duration::ZERO).await
}

/// Start a mock content service that answers every query with a 500.
#[allow(dead_code)]
pub async fn start_failing_cms() -> MockCms {
    start(Vec::new(), true, Duration::ZERO).await
}

/// Start a mock content service that delays every answer.
#[allow(dead_code)]
pub async fn start_slow_cms(documents: Vec<Value>, delay: Duration) -> MockCms {
    start(documents, false, delay).await
}

async fn start(documents: Vec<Value>, fail: bool, delay: Duration) -> MockCms {
    let hits = Arc::new(AtomicU32::new(0));
    let state = Arc::new(CmsState {
        documents,
        hits: hits.clone(),
        fail,
        delay,
    });

    // The gateway queries {api_base}/{model}; the default model is "page"
    let app = Router::new()
        .route("/page", get(query_handler))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockCms { addr, hits }
}

async fn query_handler(
    State(state): State<Arc<CmsState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    if state.fail {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream down").into_response();
    }

    // Untargeted listing returns every document
    if params.get("noTargeting").map(String::as_str) == Some("true") {
        return Json(json!({ "results": state.documents })).into_response();
    }

    // Targeted lookup: reconstruct the published URL from the locale and
    // content path attributes and match it against data.url
    let url_path = params
        .get("userAttributes.urlPath")
        .cloned()
        .unwrap_or_else(|| "/".to_string());
    let full_path = match params.get("userAttributes.locale") {
        Some(locale) if url_path == "/" => format!("/{}", locale),
        Some(locale) => format!("/{}{}", locale, url_path),
        None => url_path,
    };

    let matched = state.documents.iter().find(|doc| {
        doc.get("data")
            .and_then(|data| data.get("url"))
            .and_then(Value::as_str)
            == Some(full_path.as_str())
    });

    match matched {
        Some(doc) => Json(json!({ "results": [doc] })).into_response(),
        None => Json(json!({ "results": [] })).into_response(),
    }
}

/// Build a page document fixture published at `url`.
pub fn page_doc(url: &str, title: &str) -> Value {
    json!({
        "id": format!("doc{}", url.replace('/', "-")),
        "data": {
            "url": url,
            "title": title,
            "blocks": [{ "component": "text", "text": title }]
        }
    })
}

/// Gateway configuration pointed at a mock content service.
pub fn gateway_config(cms: &MockCms) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.content.api_base = format!("http://{}", cms.addr);
    config.content.api_key = "test-key".to_string();
    config
}

/// Build the resolver a gateway or prerenderer runs on.
pub fn resolver_for(config: &GatewayConfig) -> PageResolver {
    let client = HttpContentClient::new(&config.content).unwrap();
    PageResolver::new(client, config.content.list_limit)
}

/// Start a gateway server for the given config, returning its address.
#[allow(dead_code)]
pub async fn start_gateway(config: GatewayConfig) -> SocketAddr {
    let resolver = resolver_for(&config);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config, resolver);
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    addr
}
