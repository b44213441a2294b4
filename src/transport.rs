use crate::error::{AgentError, AgentResult};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::warn;

/// Datagram channel to the soccer server.
#[async_trait]
pub trait Transport: Send {
    async fn send_to(&mut self, payload: &[u8], dest: SocketAddr) -> AgentResult<()>;

    /// Waits for one datagram of at most `max_size` bytes.
    async fn receive(&mut self, max_size: usize) -> AgentResult<(Vec<u8>, SocketAddr)>;
}

pub struct UdpTransport {
    socket: UdpSocket,
    timeout: Duration,
    buf: Vec<u8>,
}

impl UdpTransport {
    pub async fn bind(local_port: u16, timeout: Duration) -> AgentResult<UdpTransport> {
        let socket = UdpSocket::bind(("0.0.0.0", local_port)).await?;
        Ok(UdpTransport {
            socket,
            timeout,
            buf: Vec::new(),
        })
    }

    pub fn local_port(&self) -> AgentResult<u16> {
        Ok(self.socket.local_addr()?.port())
    }
}

#[async_trait]
impl Transport for UdpTransport {
    async fn send_to(&mut self, payload: &[u8], dest: SocketAddr) -> AgentResult<()> {
        let n = self.socket.send_to(payload, dest).await?;
        if n != payload.len() {
            return Err(AgentError::Io(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                format!("sent {} of {} bytes", n, payload.len()),
            )));
        }
        Ok(())
    }

    async fn receive(&mut self, max_size: usize) -> AgentResult<(Vec<u8>, SocketAddr)> {
        self.buf.resize(max_size, 0);
        match tokio::time::timeout(self.timeout, self.socket.recv_from(&mut self.buf)).await {
            Ok(res) => {
                let (n, sender) = res?;
                if n == max_size {
                    warn!(
                        "Datagram from {} filled the {} byte buffer and may be truncated",
                        sender, max_size
                    );
                }
                Ok((self.buf[..n].to_vec(), sender))
            }
            Err(_) => Err(AgentError::Timeout {
                millis: self.timeout.as_millis() as u64,
            }),
        }
    }
}
