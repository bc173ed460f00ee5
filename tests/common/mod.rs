// Common test utilities and fixtures

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use camouflage_torrent::config::structs::configuration::Configuration;
use camouflage_torrent::transmission::structs::transmission_director::TransmissionDirector;
use reqwest::{Method, Request};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use url::Url;

/// The escaped form of the 20-byte test info hash.
pub const INFO_HASH_ESCAPED: &str = "%A9%BFz%B1%BB%05%91%9A%23J5%13Y%95%14%89f%08_9";

/// Builds the raw query the host engine would send for a starting torrent.
pub fn started_query() -> String {
    format!(
        "compact=1&downloaded=0&event=started&info_hash={}&key=OLD_KEY&left=7159086&peer_id=OLD_PEER_ID&port=3456&supportcrypto=1&uploaded=0",
        INFO_HASH_ESCAPED
    )
}

/// Builds an announce request for the given endpoint and raw query.
pub fn announce_request(announce: &str, raw_query: &str) -> Request {
    let url = Url::parse(&format!("{}?{}", announce, raw_query)).unwrap();
    Request::new(Method::GET, url)
}

/// Builds a director whose scrape tasks stay idle for the whole test.
///
/// Lifecycle and wire-shape tests only inspect the rewritten request and
/// the task registry; pushing the first fire far out keeps them from
/// producing real scrape traffic.
pub fn test_director() -> TransmissionDirector {
    let mut config = Configuration::init();
    config.scrape.jitter_minimum = 60_000;
    config.scrape.jitter_maximum = 120_000;
    TransmissionDirector::new(Arc::new(config))
}

/// Builds a director whose scrape tasks fire almost immediately.
pub fn fast_director() -> TransmissionDirector {
    let mut config = Configuration::init();
    config.scrape.jitter_minimum = 10;
    config.scrape.jitter_maximum = 50;
    TransmissionDirector::new(Arc::new(config))
}

/// One parsed HTTP request head as received on the wire.
pub struct ReceivedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
}

impl ReceivedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header_name, _)| header_name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Binds an ephemeral listener that answers every connection with an empty
/// 200 response and reports each parsed request head.
pub async fn spawn_http_responder() -> (SocketAddr, mpsc::UnboundedReceiver<ReceivedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let (mut stream, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => break,
            };
            let tx = tx.clone();
            tokio::spawn(async move {
                let mut buffer = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    match stream.read(&mut chunk).await {
                        Ok(0) => break,
                        Ok(read) => {
                            buffer.extend_from_slice(&chunk[..read]);
                            if buffer.windows(4).any(|window| window == b"\r\n\r\n") {
                                break;
                            }
                        }
                        Err(_) => return,
                    }
                }

                let head = String::from_utf8_lossy(&buffer).to_string();
                let mut lines = head.split("\r\n");
                let request_line = lines.next().unwrap_or("");
                let mut parts = request_line.split(' ');
                let method = parts.next().unwrap_or("").to_string();
                let target = parts.next().unwrap_or("").to_string();
                let mut headers = Vec::new();
                for line in lines {
                    if line.is_empty() {
                        break;
                    }
                    if let Some((name, value)) = line.split_once(':') {
                        headers.push((name.trim().to_string(), value.trim().to_string()));
                    }
                }

                let _ = stream
                    .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                    .await;
                let _ = stream.flush().await;
                let _ = tx.send(ReceivedRequest { method, target, headers });
            });
        }
    });

    (addr, rx)
}
