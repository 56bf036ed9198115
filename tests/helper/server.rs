//! HTTP server test utilities

use mockito::{Mock, Server, ServerGuard};

/// Starts a server answering GET `path` with `body`
pub async fn serve(path: &str, content_type: &str, body: &str) -> (ServerGuard, Mock) {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", content_type)
        .with_body(body)
        .create_async()
        .await;

    (server, mock)
}

/// Starts a server whose mock fails the test if it is ever requested
pub async fn serve_nothing(path: &str) -> (ServerGuard, Mock) {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", path)
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    (server, mock)
}
