#![allow(dead_code)]
use super::wire::{build_response, ResponseSpec};
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// A local DNS server answering every query with a fixed response over UDP
/// and, optionally, a different one over TCP on the same port.
pub struct MockTxtServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockTxtServer {
    pub async fn start(udp: ResponseSpec, tcp: Option<ResponseSpec>) -> std::io::Result<Self> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = match tcp {
            Some(_) => Some(TcpListener::bind(addr).await?),
            None => None,
        };

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let response = build_response(&buf[..len], &udp);
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                    accepted = accept(listener.as_ref()) => {
                        if let (Ok(mut stream), Some(spec)) = (accepted, tcp.as_ref()) {
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                continue;
                            }
                            let mut query = vec![0u8; usize::from(u16::from_be_bytes(len_buf))];
                            if stream.read_exact(&mut query).await.is_err() {
                                continue;
                            }
                            let response = build_response(&query, spec);
                            let _ = stream.write_all(&(response.len() as u16).to_be_bytes()).await;
                            let _ = stream.write_all(&response).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

async fn accept(listener: Option<&TcpListener>) -> std::io::Result<tokio::net::TcpStream> {
    match listener {
        Some(l) => l.accept().await.map(|(stream, _)| stream),
        None => std::future::pending().await,
    }
}

impl Drop for MockTxtServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// A UDP socket that never answers.
pub async fn silent_server() -> std::io::Result<(UdpSocket, SocketAddr)> {
    let socket = UdpSocket::bind("127.0.0.1:0").await?;
    let addr = socket.local_addr()?;
    Ok((socket, addr))
}
