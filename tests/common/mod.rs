//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Records every request the mock upstream receives.
#[derive(Default)]
pub struct UpstreamLog {
    hits: AtomicU32,
    paths: Mutex<Vec<String>>,
}

impl UpstreamLog {
    /// Number of requests received so far.
    pub fn hits(&self) -> u32 {
        self.hits.load(Ordering::SeqCst)
    }

    /// Request paths in arrival order.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    fn record(&self, path: String) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        self.paths.lock().unwrap().push(path);
    }
}

/// Start a mock upstream feed answering every request with a fixed
/// status and body, recording request paths as they arrive.
pub async fn start_mock_upstream(
    status: u16,
    body: &'static str,
) -> (SocketAddr, Arc<UpstreamLog>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let log = Arc::new(UpstreamLog::default());
    let task_log = log.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let log = task_log.clone();
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 4096];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        if let Some(path) = request_path(&buf[..n]) {
                            log.record(path);
                        }

                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, log)
}

/// Extract the path from the request line ("GET /path HTTP/1.1").
fn request_path(raw: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(raw).ok()?;
    let line = text.lines().next()?;
    line.split_whitespace().nth(1).map(str::to_owned)
}
