//! Loopback HTTP servers for exercising the outbound clients in tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::HeaderMap;


/// What a test handler saw of the last request it served.
#[derive(Debug, Clone, Default)]
pub(crate) struct SeenRequest {
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

pub(crate) type SeenSlot = Arc<Mutex<Option<SeenRequest>>>;

pub(crate) fn seen_slot() -> SeenSlot {
    Arc::new(Mutex::new(None))
}

/// Serve `app` on `127.0.0.1:0` for the rest of the test and return its base URL.
pub(crate) async fn spawn_router(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("test listener addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

/// Base URL of a port nothing listens on.
pub(crate) async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("test listener addr");
    drop(listener);
    format!("http://{addr}")
}
