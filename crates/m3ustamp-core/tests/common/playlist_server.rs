//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single static text body on every GET, with a configurable status
//! line (e.g. to simulate a 404).

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// Starts a server in a background thread serving `body` with `200 OK`.
/// Returns the base URL plus `path` (e.g. "http://127.0.0.1:12345/m3u/Sky").
/// The server runs until the process exits.
pub fn start(body: &str, path: &str) -> String {
    start_with_status(body, path, "200 OK")
}

/// Like `start` but with an explicit status line for every response.
pub fn start_with_status(body: &str, path: &str, status: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body: Arc<String> = Arc::new(body.to_string());
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, status));
        }
    });
    format!("http://127.0.0.1:{}{}", port, path)
}

/// Returns a URL on a port that nothing listens on, for connection-refused
/// scenarios.
pub fn refused_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}{}", port, path)
}

fn handle(mut stream: std::net::TcpStream, body: &str, status: &str) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: audio/x-mpegurl\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
