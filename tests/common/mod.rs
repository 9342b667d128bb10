//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use flight_gateway::config::{GatewayConfig, ProviderCredentials};
use flight_gateway::http::HttpServer;
use flight_gateway::lifecycle::Shutdown;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const TEST_API_KEY: &str = "test-api-key";

/// Request heads received by a mock provider, in arrival order.
pub type Received = Arc<Mutex<Vec<String>>>;

async fn read_request_head(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn status_line(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        401 => "401 Unauthorized",
        404 => "404 Not Found",
        429 => "429 Too Many Requests",
        500 => "500 Internal Server Error",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    }
}

/// Start a programmable mock provider on an ephemeral port.
///
/// `f` decides the status and body for every request.
pub async fn start_provider<F, Fut>(f: F) -> (SocketAddr, Received)
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let log = received.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let log = log.clone();
                    tokio::spawn(async move {
                        let head = read_request_head(&mut socket).await;
                        log.lock().unwrap().push(head);

                        let (status, body) = f().await;
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_line(status),
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

    (addr, received)
}

/// Start a mock provider that always returns `status` with `body`.
pub async fn start_fixed_provider(status: u16, body: String) -> (SocketAddr, Received) {
    start_provider(move || {
        let body = body.clone();
        async move { (status, body) }
    })
    .await
}

/// Start a provider that accepts connections but never answers.
pub async fn start_silent_provider() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });

    addr
}

/// An address nothing listens on.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Gateway config that talks plain HTTP to a mock provider.
pub fn test_config() -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.provider.scheme = "http".into();
    config.provider.timeout_secs = 2;
    config.provider.use_system_proxy = false;
    config
}

pub fn credentials_for(provider: SocketAddr) -> ProviderCredentials {
    ProviderCredentials::new(Some(TEST_API_KEY.into()), Some(provider.to_string()))
}

/// Start the gateway on an ephemeral port.
pub async fn start_gateway(
    config: GatewayConfig,
    credentials: ProviderCredentials,
) -> (SocketAddr, Shutdown) {
    let server = HttpServer::new(config, credentials).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Provider payload with one departure per `(number, arrival_iata)` pair.
pub fn departures(flights: &[(&str, &str)]) -> String {
    let records: Vec<_> = flights
        .iter()
        .map(|(number, to)| {
            serde_json::json!({
                "number": number,
                "status": "Expected",
                "airline": { "name": "JetBlue" },
                "departure": {
                    "airport": { "iata": "JFK" },
                    "scheduledTime": { "local": "2023-12-25 08:00-05:00" }
                },
                "arrival": {
                    "airport": { "iata": to },
                    "scheduledTime": { "local": "2023-12-25 11:30-08:00" }
                }
            })
        })
        .collect();

    serde_json::json!({ "departures": records }).to_string()
}
