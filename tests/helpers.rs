// Local HTTP server for integration tests.
//
// Serves a single canned response per call so lookups can run end to end
// through the real reqwest transport without touching the network.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Installs a test logger so `RUST_LOG=debug` shows the client's logging.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Starts a server that answers one request with `status` and `body`.
///
/// Returns the base URL and a handle yielding the request line received.
pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Failed to accept");
        let mut reader = BufReader::new(stream.try_clone().expect("Failed to clone stream"));
        let mut request_line = String::new();
        reader.read_line(&mut request_line).expect("Failed to read request");
        loop {
            let mut line = String::new();
            let read = reader.read_line(&mut line).expect("Failed to read headers");
            if read == 0 || line == "\r\n" {
                break;
            }
        }
        stream
            .write_all(response.as_bytes())
            .expect("Failed to write response");
        request_line.trim_end().to_owned()
    });

    (format!("http://{}", addr), handle)
}

/// Starts a server that accepts one connection and never answers.
pub fn serve_silence(hold: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            thread::sleep(hold);
            drop(stream);
        }
    });
    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on.
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    drop(listener);
    format!("http://{}", addr)
}
