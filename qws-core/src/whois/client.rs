use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, instrument};

use super::parser::WhoisRecord;
use super::servers::{query_for, whois_server};
use crate::error::{QwsError, Result};
use crate::validation::normalize_domain;

const WHOIS_PORT: u16 = 43;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_RESPONSE_SIZE: usize = 1024 * 1024; // 1MB

/// WHOIS client: one TCP connect, one query line, read to EOF, parse.
///
/// No retries and no referral chasing; a failure at any stage aborts the
/// lookup.
#[derive(Debug, Clone)]
pub struct WhoisClient {
    timeout: Duration,
}

impl Default for WhoisClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WhoisClient {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Looks up a domain against the server derived from its TLD.
    #[instrument(skip(self), fields(domain = %domain))]
    pub async fn lookup(&self, domain: &str) -> Result<WhoisRecord> {
        let domain = normalize_domain(domain)?;
        let server = whois_server(&domain);
        self.lookup_with_server(&domain, &server).await
    }

    /// Looks up a domain against an explicit WHOIS server.
    pub async fn lookup_with_server(&self, domain: &str, server: &str) -> Result<WhoisRecord> {
        let raw = self.query_server(server, &query_for(domain)).await?;
        WhoisRecord::parse(&raw)
    }

    async fn query_server(&self, server: &str, query: &str) -> Result<String> {
        // Servers are usually given as a bare host; port 43 is implied.
        let addr = if server.contains(':') {
            server.to_string()
        } else {
            format!("{}:{}", server, WHOIS_PORT)
        };
        debug!(server = %addr, query = %query, "Querying WHOIS server");

        let mut stream = timeout(self.timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| QwsError::Timeout(format!("Connection to {} timed out", server)))?
            .map_err(|e| {
                QwsError::ConnectionFailed(format!("failed to connect to {}: {}", addr, e))
            })?;

        // Query lines are CRLF-terminated on the wire.
        let query_bytes = format!("{}\r\n", query);
        timeout(self.timeout, stream.write_all(query_bytes.as_bytes()))
            .await
            .map_err(|_| QwsError::Timeout("Write timed out".to_string()))??;

        // Read until the server closes the connection.
        let mut response = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = timeout(self.timeout, stream.read(&mut buf))
                .await
                .map_err(|_| QwsError::Timeout("Read timed out".to_string()))??;
            if n == 0 {
                break;
            }
            response.extend_from_slice(&buf[..n]);
            if response.len() > MAX_RESPONSE_SIZE {
                return Err(QwsError::ResponseTooLarge);
            }
        }

        // Try UTF-8, fall back to Latin-1.
        Ok(String::from_utf8(response.clone())
            .unwrap_or_else(|_| response.iter().map(|&c| c as char).collect()))
    }
}
