//! Exposes PowerDNS Recursor statistics in the Prometheus exposition format.
//!
//! Every scrape runs the resolver's control command (by default `rec_control get-all`), translates
//! each `key value` line it prints through a [`Catalog`] of known statistics, and renders the
//! result. Nothing is kept between scrapes.
#![deny(missing_docs)]
mod common;
pub use self::common::{BuildError, ScrapeError};

pub mod catalog;
pub use self::catalog::{Catalog, MetricDescriptor, MetricKind};

pub mod collector;
pub use self::collector::{Collector, Observation, RawStatLine};

pub mod config;

mod exporter;
pub use self::exporter::builder::ExporterBuilder;
pub use self::exporter::{ExporterError, ExporterFuture};

pub mod formatting;

pub mod source;
pub use self::source::{ControlCommand, StatusSource};
