use std::future::Future;
use std::io;
use std::pin::Pin;

use quanta::Clock;
use thiserror::Error as ThisError;
use tracing::debug;

use crate::collector::Collector;
use crate::common::ScrapeError;
use crate::formatting::render;
use crate::source::StatusSource;

/// Error types possible from an exporter
#[derive(Debug, ThisError)]
pub enum ExporterError {
    /// The HTTP listener could not be registered with the runtime.
    #[error("HTTP listener failed: {0}")]
    HttpListener(#[from] io::Error),
}

/// Convenience type for Future implementing an exporter.
pub type ExporterFuture = Pin<Box<dyn Future<Output = Result<(), ExporterError>> + Send + 'static>>;

/// Runs one complete scrape: collection, rendering, and the scrape duration gauge.
pub(crate) fn scrape<S>(collector: &Collector<S>, clock: &Clock) -> Result<String, ScrapeError>
where
    S: StatusSource,
{
    let start = clock.now();
    let observations = collector.collect()?;
    let elapsed = clock.now() - start;

    debug!(observations = observations.len(), ?elapsed, "collected resolver statistics");

    Ok(render(&observations, elapsed))
}

mod http_listener;

pub(crate) mod builder;
