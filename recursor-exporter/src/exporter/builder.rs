use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use ipnet::IpNet;

use crate::catalog::Catalog;
use crate::collector::Collector;
use crate::common::BuildError;
use crate::source::StatusSource;

use super::ExporterFuture;

/// Default port the scrape endpoint listens on.
pub const DEFAULT_PORT: u16 = 9199;

/// Builder for creating the resolver statistics exporter.
pub struct ExporterBuilder {
    listen_address: SocketAddr,
    telemetry_path: String,
    scrape_timeout: Option<Duration>,
    allowed_addresses: Option<Vec<IpNet>>,
    catalog: Option<Arc<Catalog>>,
}

impl ExporterBuilder {
    /// Creates a new [`ExporterBuilder`].
    pub fn new() -> Self {
        Self {
            listen_address: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            telemetry_path: "/metrics".to_owned(),
            scrape_timeout: Some(Duration::from_secs(10)),
            allowed_addresses: None,
            catalog: None,
        }
    }

    /// Configures the address the HTTP listener binds to.
    ///
    /// Defaults to `0.0.0.0:9199`.
    #[must_use]
    pub fn with_http_listener(mut self, addr: impl Into<SocketAddr>) -> Self {
        self.listen_address = addr.into();
        self
    }

    /// Sets the request path that triggers a scrape.
    ///
    /// Requests to `/health` are always answered with `OK`, and `/` serves a small landing page,
    /// so the telemetry path should be neither of those.
    ///
    /// Defaults to `/metrics`.
    ///
    /// ## Errors
    ///
    /// If the path does not start with `/`, an error variant will be returned.
    pub fn with_telemetry_path(mut self, path: impl Into<String>) -> Result<Self, BuildError> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(BuildError::InvalidTelemetryPath(path));
        }
        self.telemetry_path = path;
        Ok(self)
    }

    /// Sets how long a scrape may take before the request is failed.
    ///
    /// The control command itself is not cancelled; it is left to finish in the background.
    /// `None` disables the timeout.
    ///
    /// Defaults to ten seconds.
    #[must_use]
    pub fn with_scrape_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.scrape_timeout = timeout;
        self
    }

    /// Adds an IP address or subnet to the allowlist for the scrape endpoint.
    ///
    /// If a client makes a request to the scrape endpoint and their IP is not present in the
    /// allowlist, either directly or within any of the allowed subnets, they will receive a 403
    /// Forbidden response.
    ///
    /// Defaults to allowing all IPs.
    ///
    /// ## Errors
    ///
    /// If the given address cannot be parsed into an IP address or subnet, an error variant will be
    /// returned describing the error.
    pub fn add_allowed_address<A>(mut self, address: A) -> Result<Self, BuildError>
    where
        A: AsRef<str>,
    {
        let address = parse_allowed_address(address.as_ref())?;
        self.allowed_addresses.get_or_insert(vec![]).push(address);

        Ok(self)
    }

    /// Replaces the catalog used to name and type statistics.
    ///
    /// Defaults to [`Catalog::recursor`].
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Builds the exporter, binding the HTTP listener.
    ///
    /// The returned future serves scrapes until dropped and must be driven by a Tokio runtime with
    /// both I/O and timers enabled.
    ///
    /// ## Errors
    ///
    /// If the listen address cannot be bound, an error variant will be returned describing the
    /// error.
    pub fn build<S>(self, source: S) -> Result<ExporterFuture, BuildError>
    where
        S: StatusSource + 'static,
    {
        let catalog = self.catalog.unwrap_or_else(|| Arc::new(Catalog::recursor()));
        let collector = Collector::new(source, catalog);

        super::http_listener::new_http_listener(
            collector,
            self.listen_address,
            self.telemetry_path,
            self.scrape_timeout,
            self.allowed_addresses,
        )
    }
}

impl Default for ExporterBuilder {
    fn default() -> Self {
        ExporterBuilder::new()
    }
}

/// Parses an allowlist entry, accepting both bare addresses and subnets.
fn parse_allowed_address(address: &str) -> Result<IpNet, BuildError> {
    address
        .parse::<IpNet>()
        .or_else(|_| address.parse::<IpAddr>().map(IpNet::from))
        .map_err(|e| BuildError::InvalidAllowlistAddress(format!("{address}: {e}")))
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, SocketAddr};
    use std::time::Duration;

    use ipnet::IpNet;

    use super::{parse_allowed_address, ExporterBuilder, DEFAULT_PORT};
    use crate::catalog::{Catalog, MetricDescriptor};
    use crate::common::BuildError;

    #[test]
    fn test_defaults() {
        let builder = ExporterBuilder::new();
        assert_eq!(builder.listen_address, SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)));
        assert_eq!(builder.telemetry_path, "/metrics");
        assert_eq!(builder.scrape_timeout, Some(Duration::from_secs(10)));
        assert!(builder.allowed_addresses.is_none());
        assert!(builder.catalog.is_none());
    }

    #[test]
    fn test_parse_allowed_address() {
        assert_eq!(parse_allowed_address("10.0.0.0/8").unwrap(), "10.0.0.0/8".parse::<IpNet>().unwrap());
        assert_eq!(
            parse_allowed_address("127.0.0.1").unwrap(),
            "127.0.0.1/32".parse::<IpNet>().unwrap()
        );
        assert_eq!(parse_allowed_address("::1").unwrap(), "::1/128".parse::<IpNet>().unwrap());
        assert!(matches!(
            parse_allowed_address("localhost"),
            Err(BuildError::InvalidAllowlistAddress(_))
        ));
    }

    #[test]
    fn test_allowlist_accumulates() {
        let builder = ExporterBuilder::new()
            .add_allowed_address("127.0.0.1")
            .and_then(|b| b.add_allowed_address("192.168.0.0/16"))
            .expect("addresses should parse");
        assert_eq!(builder.allowed_addresses.map(|a| a.len()), Some(2));
    }

    #[test]
    fn test_telemetry_path_must_be_absolute() {
        assert!(matches!(
            ExporterBuilder::new().with_telemetry_path("metrics"),
            Err(BuildError::InvalidTelemetryPath(_))
        ));

        let builder = ExporterBuilder::new().with_telemetry_path("/stats").unwrap();
        assert_eq!(builder.telemetry_path, "/stats");
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::from_descriptors([("questions", MetricDescriptor::gauge("q", "q"))]);
        let builder = ExporterBuilder::new().with_catalog(catalog);
        assert_eq!(builder.catalog.map(|c| c.len()), Some(1));
    }
}
