use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
    time::Duration,
};

use http_body_util::Full;
use hyper::{
    body::{self, Bytes, Incoming},
    header::{HeaderValue, CONTENT_TYPE},
    server::conn::http1::Builder as HyperHttpBuilder,
    service::service_fn,
    Request, Response, StatusCode,
};
use hyper_util::rt::TokioIo;
use ipnet::IpNet;
use quanta::Clock;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, warn};

use crate::collector::Collector;
use crate::common::{BuildError, ScrapeError};
use crate::source::StatusSource;

use super::{ExporterError, ExporterFuture};

const TEXT_FORMAT: &str = "text/plain; version=0.0.4; charset=utf-8";

struct HttpListeningExporter<S> {
    inner: Arc<Inner<S>>,
}

struct Inner<S> {
    collector: Collector<S>,
    clock: Clock,
    telemetry_path: String,
    scrape_timeout: Option<Duration>,
    allowed_addresses: Option<Vec<IpNet>>,
}

impl<S> Inner<S> {
    fn is_allowed(&self, remote_address: IpAddr) -> bool {
        match &self.allowed_addresses {
            Some(addresses) => addresses.iter().any(|address| address.contains(&remote_address)),
            None => true,
        }
    }
}

impl<S> HttpListeningExporter<S>
where
    S: StatusSource + 'static,
{
    async fn serve(&self, listener: std::net::TcpListener) -> Result<(), ExporterError> {
        let listener = TcpListener::from_std(listener)?;

        loop {
            let stream = match listener.accept().await {
                Ok((stream, _)) => stream,
                Err(e) => {
                    warn!("Error accepting connection. Ignoring request. Error: {:?}", e);
                    continue;
                }
            };

            let remote_addr = match stream.peer_addr() {
                Ok(remote_address) => remote_address.ip(),
                Err(e) => {
                    warn!("Error obtaining remote address. Ignoring request. Error: {:?}", e);
                    continue;
                }
            };

            self.process_stream(stream, remote_addr);
        }
    }

    fn process_stream(&self, stream: TcpStream, remote_address: IpAddr) {
        let inner = self.inner.clone();
        let service = service_fn(move |req: Request<body::Incoming>| {
            let inner = inner.clone();
            async move { Self::handle_http_request(inner, remote_address, req).await }
        });

        tokio::task::spawn(async move {
            if let Err(err) =
                HyperHttpBuilder::new().serve_connection(TokioIo::new(stream), service).await
            {
                warn!("Error serving connection.  Error: {:?}", err);
            };
        });
    }

    async fn handle_http_request(
        inner: Arc<Inner<S>>,
        remote_address: IpAddr,
        req: Request<Incoming>,
    ) -> Result<Response<Full<Bytes>>, hyper::Error> {
        if !inner.is_allowed(remote_address) {
            debug!(%remote_address, "rejecting request from address outside the allowlist");
            return Ok(new_response(StatusCode::FORBIDDEN, None, Bytes::new()));
        }

        let path = req.uri().path();
        let response = if path == inner.telemetry_path {
            match Self::scrape(&inner).await {
                Ok(output) => new_response(StatusCode::OK, Some(TEXT_FORMAT), output.into()),
                Err(e) => {
                    warn!(error = %e, "scrape failed");
                    new_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Some("text/plain; charset=utf-8"),
                        format!("{e}\n").into(),
                    )
                }
            }
        } else if path == "/health" {
            new_response(StatusCode::OK, None, Bytes::from_static(b"OK"))
        } else if path == "/" {
            new_response(
                StatusCode::OK,
                Some("text/html; charset=utf-8"),
                landing_page(&inner.telemetry_path).into(),
            )
        } else {
            new_response(StatusCode::NOT_FOUND, None, Bytes::new())
        };

        Ok(response)
    }

    async fn scrape(inner: &Arc<Inner<S>>) -> Result<String, ScrapeError> {
        let task_inner = inner.clone();
        // The control command blocks, so it gets a thread of its own. If the scrape times out the
        // command is left to finish in the background.
        let task = tokio::task::spawn_blocking(move || {
            super::scrape(&task_inner.collector, &task_inner.clock)
        });

        let joined = match inner.scrape_timeout {
            Some(timeout) => tokio::time::timeout(timeout, task)
                .await
                .map_err(|_| ScrapeError::TimedOut(timeout))?,
            None => task.await,
        };

        joined.map_err(|e| ScrapeError::Aborted(e.to_string()))?
    }
}

fn new_response(
    status: StatusCode,
    content_type: Option<&'static str>,
    body: Bytes,
) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(body));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    response
}

fn landing_page(telemetry_path: &str) -> String {
    format!(
        "<html>\n<head><title>PowerDNS Recursor Exporter</title></head>\n<body>\n\
         <h1>PowerDNS Recursor Exporter</h1>\n\
         <p><a href=\"{telemetry_path}\">Metrics</a></p>\n</body>\n</html>\n"
    )
}

/// Creates an `ExporterFuture` implementing a http listener that serves resolver statistics.
///
/// # Errors
/// Will return Err if it cannot bind to the listen address
pub(crate) fn new_http_listener<S>(
    collector: Collector<S>,
    listen_address: SocketAddr,
    telemetry_path: String,
    scrape_timeout: Option<Duration>,
    allowed_addresses: Option<Vec<IpNet>>,
) -> Result<ExporterFuture, BuildError>
where
    S: StatusSource + 'static,
{
    let listener = std::net::TcpListener::bind(listen_address)
        .and_then(|listener| {
            listener.set_nonblocking(true)?;
            Ok(listener)
        })
        .map_err(|e| BuildError::FailedToCreateHTTPListener(e.to_string()))?;

    let exporter = HttpListeningExporter {
        inner: Arc::new(Inner {
            collector,
            clock: Clock::new(),
            telemetry_path,
            scrape_timeout,
            allowed_addresses,
        }),
    };

    Ok(Box::pin(async move { exporter.serve(listener).await }))
}
