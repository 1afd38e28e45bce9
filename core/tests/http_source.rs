// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

use roomview_core::config::RoomViewConfig;
use roomview_core::source::{HttpRoomSource, RoomSource};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves a single canned response and hands back the raw request it received
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request_head(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {status_line}\r\n\
             content-type: application/json\r\n\
             content-length: {}\r\n\
             connection: close\r\n\r\n\
             {body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        request
    });

    (base_url, handle)
}

async fn read_request_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
        if request.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }
    String::from_utf8_lossy(&request).into_owned()
}

fn source_for(base_url: &str) -> HttpRoomSource {
    HttpRoomSource::new(&RoomViewConfig::new(base_url).unwrap()).unwrap()
}

#[tokio::test]
async fn fetches_rooms_in_response_order() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"[
            {"id": 2, "room_number": "102", "type": "Double", "price": "80.00"},
            {"id": 1, "room_number": "101", "type": "Single", "price": 50}
        ]"#,
    )
    .await;

    let rooms = source_for(&base_url).fetch_rooms().await.unwrap();
    let labels: Vec<String> = rooms.iter().map(ToString::to_string).collect();
    assert_eq!(labels, ["102 - Double - $80.00", "101 - Single - $50"]);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/rooms/ HTTP/1.1\r\n"));
}

#[tokio::test]
async fn empty_array_is_an_empty_collection() {
    let (base_url, server) = serve_once("200 OK", "[]").await;

    let rooms = source_for(&base_url).fetch_rooms().await.unwrap();
    assert!(rooms.is_empty());

    server.await.unwrap();
}

#[tokio::test]
async fn error_status_is_a_fetch_failure() {
    let (base_url, server) =
        serve_once("500 Internal Server Error", r#"{"detail": "boom"}"#).await;
    let source = source_for(&base_url);

    let failure = source.fetch_rooms().await.unwrap_err();
    assert_eq!(failure.url(), source.url());
    assert!(failure.reason().contains("500"));

    server.await.unwrap();
}

#[tokio::test]
async fn malformed_payloads_are_fetch_failures() {
    for body in ["not json", r#"{"id": 1}"#, r#"[{"id": 1, "room_number": "1"}]"#] {
        let (base_url, server) = serve_once("200 OK", body).await;

        let failure = source_for(&base_url).fetch_rooms().await.unwrap_err();
        assert!(failure.reason().contains("malformed"), "{failure}");

        server.await.unwrap();
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_fetch_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    assert!(source_for(&base_url).fetch_rooms().await.is_err());
}

#[tokio::test]
async fn configured_timeout_is_a_fetch_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(socket);
    });

    let config = RoomViewConfig::new(&base_url)
        .unwrap()
        .with_request_timeout(Duration::from_millis(200));
    let source = HttpRoomSource::new(&config).unwrap();

    assert!(source.fetch_rooms().await.is_err());
    server.abort();
}

#[tokio::test]
async fn https_base_url_opens_a_tls_handshake() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("https://{}", listener.local_addr().unwrap());
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut record_type = [0u8; 1];
        socket.read_exact(&mut record_type).await.unwrap();
        record_type[0]
    });

    let failure = source_for(&base_url).fetch_rooms().await.unwrap_err();
    assert_eq!(failure.url(), format!("{base_url}/api/rooms/"));

    // 0x16 is a TLS handshake record
    assert_eq!(server.await.unwrap(), 0x16);
}
