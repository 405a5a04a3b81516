use crate::config::ServerConfig;
use crate::errors::{Result, ServerError};
use crate::http::parse::parse_request;
use crate::http::router::Router;
use crate::http::{BUFFER_SIZE, serialize_response};
use bytes::BytesMut;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{Instrument, debug, error, info};

pub struct Server {
    listener: TcpListener,
    router: Arc<Router>,
}

impl Server {
    pub async fn bind(config: ServerConfig) -> Result<Server> {
        let listener = TcpListener::bind(config.bind_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: config.bind_addr,
                source,
            })?;

        Ok(Server {
            listener,
            router: Arc::new(Router::new(config.directory)),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections until accepting fails, spawning one task per
    /// connection. An accept error ends the loop and is returned.
    pub async fn run(self) -> Result<()> {
        let address = self.local_addr()?;
        info!(
            %address,
            directory = %self.router.directory().display(),
            "Listening"
        );

        loop {
            let (stream, addr) = self.listener.accept().await.map_err(ServerError::Accept)?;
            info!(%addr, "Accepted connection");

            let router = Arc::clone(&self.router);
            let span = tracing::info_span!("connection", %addr);
            tokio::spawn(
                async move {
                    if let Err(e) = process_incoming(stream, &router).await {
                        error!(error = %e, "Error handling connection");
                    }
                    debug!("Connection closed");
                }
                .instrument(span),
            );
        }
    }
}

/// One read, one dispatch, one write. Anything beyond the first
/// `BUFFER_SIZE` bytes is never read.
async fn process_incoming(mut stream: TcpStream, router: &Router) -> Result<()> {
    let mut buf = BytesMut::zeroed(BUFFER_SIZE);
    let n = stream.read(&mut buf).await?;
    if n == 0 {
        debug!("Client closed before sending a request");
        return Ok(());
    }
    buf.truncate(n);

    let request = parse_request(&buf.freeze());
    debug!(
        method = request.method.as_str(),
        path = %request.path,
        headers = ?request.headers,
        body = %request.body_text(),
        "Parsed request"
    );

    let response = router.dispatch(&request).await;
    info!(
        method = request.method.as_str(),
        path = %request.path,
        status = %response.status,
        "Responding"
    );

    stream.write_all(&serialize_response(&response)).await?;
    if let Err(e) = stream.shutdown().await {
        debug!(error = %e, "Shutdown after write failed");
    }
    Ok(())
}
