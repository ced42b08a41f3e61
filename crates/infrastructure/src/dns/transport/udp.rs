use async_trait::async_trait;
use bytes::Bytes;
use iterdns_application::ports::DnsTransport;
use iterdns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP with one socket bound for the life of the process.
///
/// Strictly sequential: one query in flight, one receive loop until the
/// matching response arrives or the timeout elapses. Datagrams from an
/// unexpected source or carrying a stale transaction id are discarded and
/// the receive continues against the original deadline.
pub struct UdpTransport {
    socket: UdpSocket,
    timeout: Duration,
}

impl UdpTransport {
    /// Bind an ephemeral local port. Failing to bind is fatal to the
    /// caller; it happens once, before any resolution is attempted.
    pub async fn bind(timeout: Duration) -> Result<Self, DomainError> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| DomainError::IoError(format!("failed to bind UDP socket: {}", e)))?;

        Ok(Self { socket, timeout })
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn exchange(&self, query: &[u8], server: SocketAddr) -> Result<Bytes, DomainError> {
        let deadline = Instant::now() + self.timeout;

        let bytes_sent = tokio::time::timeout_at(deadline, self.socket.send_to(query, server))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| {
                DomainError::IoError(format!("failed to send query to {}: {}", server, e))
            })?;

        debug!(server = %server, bytes_sent = bytes_sent, "query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        loop {
            let (bytes_received, from_addr) =
                tokio::time::timeout_at(deadline, self.socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| DomainError::QueryTimeout)?
                    .map_err(|e| {
                        DomainError::IoError(format!(
                            "failed to receive response from {}: {}",
                            server, e
                        ))
                    })?;

            if from_addr.ip() != server.ip() {
                warn!(
                    expected = %server,
                    received_from = %from_addr,
                    "response from unexpected source, discarding"
                );
                continue;
            }

            if bytes_received < 2 || recv_buf[..2] != query[..2] {
                warn!(server = %server, "response id mismatch, discarding");
                continue;
            }

            debug!(server = %server, bytes_received = bytes_received, "response received");

            return Ok(Bytes::copy_from_slice(&recv_buf[..bytes_received]));
        }
    }
}
