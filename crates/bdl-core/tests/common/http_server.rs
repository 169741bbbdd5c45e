//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed table of routes keyed by request path. Each connection
//! handles one GET and is closed afterwards.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Route {
    /// Status line (e.g. "200 OK") and full body.
    Body { status: &'static str, body: Vec<u8> },
    /// 200 OK announcing `declared` bytes but sending only `body` before closing.
    Truncated { body: Vec<u8>, declared: usize },
    /// 302 Found pointing at another path on this server.
    Redirect { location: &'static str },
}

impl Route {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Route::Body {
            status: "200 OK",
            body: body.into(),
        }
    }

    pub fn status(status: &'static str) -> Self {
        Route::Body {
            status,
            body: status.as_bytes().to_vec(),
        }
    }
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Unknown paths get 404.
pub fn start(routes: Vec<(&'static str, Route)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<&'static str, Route>> = Arc::new(routes.into_iter().collect());
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, routes: &HashMap<&'static str, Route>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let Some(path) = read_request_path(&mut stream) else {
        return;
    };
    match routes.get(path.as_str()) {
        Some(Route::Body { status, body }) => respond(&mut stream, status, "", body, body.len()),
        Some(Route::Truncated { body, declared }) => respond(&mut stream, "200 OK", "", body, *declared),
        Some(Route::Redirect { location }) => {
            let header = format!("Location: {}\r\n", location);
            respond(&mut stream, "302 Found", &header, b"", 0)
        }
        None => respond(&mut stream, "404 Not Found", "", b"missing", 7),
    }
}

fn respond(stream: &mut TcpStream, status: &str, extra_headers: &str, body: &[u8], declared: usize) {
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        status, declared, extra_headers
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}

/// Reads the request head and returns the path of the request line.
fn read_request_path(stream: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let head = String::from_utf8_lossy(&buf);
    let request_line = head.lines().next()?;
    let mut parts = request_line.split_whitespace();
    let _method = parts.next()?;
    let target = parts.next()?;
    Some(target.split('?').next().unwrap_or(target).to_string())
}
