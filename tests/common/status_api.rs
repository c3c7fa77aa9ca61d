//! A stub of the notebooks status API for the probe to run against.
use std::net::SocketAddr;

use axum::routing::get;
use axum::{Json, Router};
use notebooks_status_probe::checker::resources::StatusReport;
use tokio::net::TcpListener;

/// Starts a status API stub with the given routes on an ephemeral port.
///
/// The stub serves until the test process ends; each test starts its own.
pub async fn start(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("a free ephemeral port");

    let addr = listener.local_addr().expect("a local address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("the stub status API to serve");
    });

    addr
}

/// Starts a stub serving the given report at the default status path.
pub async fn start_with_report(report: StatusReport) -> SocketAddr {
    let router = Router::new().route(
        "/services/status/",
        get(move || async move { Json(report) }),
    );

    start(router).await
}
