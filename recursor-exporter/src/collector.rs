//! Translation of a raw statistics report into typed observations.
use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::{Catalog, MetricDescriptor};
use crate::common::ScrapeError;
use crate::source::StatusSource;

/// One `key value` pair from a statistics report.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RawStatLine<'a> {
    /// Statistic key, as printed by the resolver.
    pub key: &'a str,
    /// Unparsed value.
    pub value: &'a str,
}

impl<'a> RawStatLine<'a> {
    /// Parses a single report line.
    ///
    /// The first whitespace-delimited token is the key and the second is the value. Any further
    /// tokens are ignored. Returns `None` if the line has fewer than two tokens.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let key = tokens.next()?;
        let value = tokens.next()?;
        Some(Self { key, value })
    }

    /// Coerces the value to a float, substituting NaN if it is not numeric.
    pub fn coerce(&self) -> f64 {
        self.value.parse().unwrap_or(f64::NAN)
    }
}

/// A single value for a known statistic, valid for one scrape.
#[derive(Clone, Copy, Debug)]
pub struct Observation<'a> {
    /// Descriptor of the statistic, borrowed from the catalog.
    pub descriptor: &'a MetricDescriptor,
    /// Observed value; NaN if the resolver reported something non-numeric.
    pub value: f64,
}

impl PartialEq for Observation<'_> {
    // NaN compares equal to NaN here so that snapshots can be compared as a whole.
    fn eq(&self, other: &Self) -> bool {
        self.descriptor == other.descriptor
            && (self.value == other.value || (self.value.is_nan() && other.value.is_nan()))
    }
}

/// Turns the report of a [`StatusSource`] into observations using a [`Catalog`].
///
/// The collector holds no mutable state, so [`collect`](Collector::collect) can be called
/// concurrently from any number of scrapes.
pub struct Collector<S> {
    source: S,
    catalog: Arc<Catalog>,
}

impl<S> Collector<S>
where
    S: StatusSource,
{
    /// Creates a new `Collector`.
    pub fn new(source: S, catalog: Arc<Catalog>) -> Self {
        Self { source, catalog }
    }

    /// Gets the catalog used to resolve keys.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Fetches a fresh report and translates it.
    ///
    /// Malformed lines and unknown keys are logged and skipped. Values that are not numeric are
    /// reported as NaN.
    ///
    /// ## Errors
    ///
    /// If the report cannot be fetched, the error is returned and no observations are produced.
    pub fn collect(&self) -> Result<Vec<Observation<'_>>, ScrapeError> {
        let report = self.source.fetch()?;
        Ok(self.translate(&report))
    }

    /// Translates an already fetched report.
    pub fn translate(&self, report: &str) -> Vec<Observation<'_>> {
        let mut observations = Vec::new();

        for line in report.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let Some(stat) = RawStatLine::parse(line) else {
                warn!(line, "malformed statistics line, skipping");
                continue;
            };

            let Some(descriptor) = self.catalog.lookup(stat.key) else {
                debug!(key = stat.key, line, "unknown statistic, skipping");
                continue;
            };

            let value = stat.coerce();
            if value.is_nan() {
                debug!(key = stat.key, value = stat.value, "statistic value is not numeric");
            }

            observations.push(Observation { descriptor, value });
        }

        observations
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::{Collector, Observation, RawStatLine};
    use crate::catalog::{Catalog, MetricDescriptor};
    use crate::common::ScrapeError;
    use crate::source::MockStatusSource;

    fn test_catalog() -> Arc<Catalog> {
        Arc::new(Catalog::from_descriptors([
            ("questions", MetricDescriptor::gauge("pdns_recursor_questions", "questions")),
            ("cache-hits", MetricDescriptor::gauge("pdns_recursor_cache_hits", "cache hits")),
            ("uptime", MetricDescriptor::counter("pdns_recursor_uptime", "uptime")),
        ]))
    }

    fn collector_for(report: &'static str) -> Collector<MockStatusSource> {
        let mut source = MockStatusSource::new();
        source.expect_fetch().returning(move || Ok(report.to_owned()));
        Collector::new(source, test_catalog())
    }

    fn values(observations: &[Observation<'_>]) -> Vec<(&'static str, f64)> {
        observations.iter().map(|o| (o.descriptor.name(), o.value)).collect()
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(
            RawStatLine::parse("questions 42"),
            Some(RawStatLine { key: "questions", value: "42" })
        );
        assert_eq!(
            RawStatLine::parse("\tquestions \t 42  trailing junk"),
            Some(RawStatLine { key: "questions", value: "42" })
        );
        assert_eq!(RawStatLine::parse("questions"), None);
        assert_eq!(RawStatLine::parse(""), None);
    }

    #[test]
    fn test_coerce() {
        let coerce = |value| RawStatLine { key: "k", value }.coerce();
        assert_eq!(coerce("42"), 42.0);
        assert_eq!(coerce("-1.5"), -1.5);
        assert_eq!(coerce("1e3"), 1000.0);
        assert!(coerce("notanumber").is_nan());
        assert!(coerce("").is_nan());
        assert!(coerce("12abc").is_nan());
    }

    #[test]
    fn test_known_unknown_and_malformed_values() {
        let collector = collector_for("questions 42\nunknown-key 7\ncache-hits notanumber\n");
        let observations = collector.collect().expect("scrape should succeed");

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].descriptor.name(), "pdns_recursor_questions");
        assert_eq!(observations[0].value, 42.0);
        assert_eq!(observations[1].descriptor.name(), "pdns_recursor_cache_hits");
        assert!(observations[1].value.is_nan());
    }

    #[test]
    fn test_empty_report() {
        let collector = collector_for("");
        let observations = collector.collect().expect("empty report is not an error");
        assert!(observations.is_empty());
    }

    #[test]
    fn test_malformed_lines_are_isolated() {
        let collector = collector_for("questions\n\n   \nuptime 3600\ncache-hits 12 extra\n");
        let observations = collector.collect().expect("scrape should succeed");

        assert_eq!(
            values(&observations),
            vec![("pdns_recursor_uptime", 3600.0), ("pdns_recursor_cache_hits", 12.0)]
        );
    }

    #[test]
    fn test_only_unknown_keys() {
        let collector = collector_for("foo 1\nbar 2\n");
        assert!(collector.collect().expect("scrape should succeed").is_empty());
    }

    #[test]
    fn test_duplicate_keys_are_not_deduplicated() {
        let collector = collector_for("questions 1\nquestions 2\n");
        let observations = collector.collect().expect("scrape should succeed");
        assert_eq!(
            values(&observations),
            vec![("pdns_recursor_questions", 1.0), ("pdns_recursor_questions", 2.0)]
        );
    }

    #[test]
    fn test_descriptors_come_from_catalog() {
        let collector = collector_for("questions 1\nuptime 2\ncache-hits 3\n");
        let observations = collector.collect().expect("scrape should succeed");

        for observation in &observations {
            let from_catalog = collector
                .catalog()
                .iter()
                .find(|(_, d)| d.name() == observation.descriptor.name())
                .map(|(_, d)| d as *const MetricDescriptor);
            assert_eq!(from_catalog, Some(observation.descriptor as *const MetricDescriptor));
        }
    }

    #[test]
    fn test_fetch_failure_propagates() {
        let mut source = MockStatusSource::new();
        source.expect_fetch().times(1).returning(|| {
            Err(ScrapeError::Spawn {
                command: "rec_control get-all".to_owned(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            })
        });
        let collector = Collector::new(source, test_catalog());

        assert!(matches!(collector.collect(), Err(ScrapeError::Spawn { .. })));
    }

    #[test]
    fn test_scrapes_are_independent() {
        let mut source = MockStatusSource::new();
        let mut calls = 0;
        source.expect_fetch().times(3).returning(move || {
            calls += 1;
            match calls {
                1 => Ok("questions 1\n".to_owned()),
                2 => Err(ScrapeError::TimedOut(std::time::Duration::from_secs(1))),
                _ => Ok("cache-hits 5\n".to_owned()),
            }
        });
        let collector = Collector::new(source, test_catalog());

        assert_eq!(values(&collector.collect().unwrap()), vec![("pdns_recursor_questions", 1.0)]);
        assert!(collector.collect().is_err());
        assert_eq!(values(&collector.collect().unwrap()), vec![("pdns_recursor_cache_hits", 5.0)]);
    }

    #[test]
    fn test_concurrent_collects() {
        let collector = Arc::new(collector_for("questions 42\nuptime 7\n"));

        let handles = (0..8)
            .map(|_| {
                let collector = Arc::clone(&collector);
                std::thread::spawn(move || {
                    let observations = collector.collect().expect("scrape should succeed");
                    values(&observations)
                })
            })
            .collect::<Vec<_>>();

        let expected = vec![("pdns_recursor_questions", 42.0), ("pdns_recursor_uptime", 7.0)];
        for handle in handles {
            assert_eq!(handle.join().expect("collect thread panicked"), expected);
        }
    }

    fn report_line() -> impl Strategy<Value = String> {
        let key = prop_oneof![
            Just("questions".to_owned()),
            Just("cache-hits".to_owned()),
            Just("uptime".to_owned()),
            "[a-z][a-z0-9-]{0,12}",
        ];
        let value = prop_oneof![
            any::<f64>().prop_map(|v| v.to_string()),
            any::<u64>().prop_map(|v| v.to_string()),
            "[a-z]{1,8}",
        ];
        (key, value).prop_map(|(key, value)| format!("{key} {value}"))
    }

    proptest! {
        #[test]
        fn test_identical_reports_yield_identical_observations(
            lines in prop::collection::vec(report_line(), 0..32)
        ) {
            let report = lines.join("\n");
            let catalog = test_catalog();
            let collector = Collector::new(MockStatusSource::new(), catalog);

            let first = collector.translate(&report);
            let second = collector.translate(&report);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_one_observation_per_known_line(
            lines in prop::collection::vec(report_line(), 0..32)
        ) {
            let report = lines.join("\n");
            let collector = Collector::new(MockStatusSource::new(), test_catalog());
            let observations = collector.translate(&report);

            let known = lines
                .iter()
                .filter_map(|line| RawStatLine::parse(line))
                .filter(|stat| collector.catalog().lookup(stat.key).is_some())
                .collect::<Vec<_>>();
            prop_assert_eq!(observations.len(), known.len());

            for (observation, stat) in observations.iter().zip(&known) {
                let expected = stat.value.parse::<f64>().unwrap_or(f64::NAN);
                prop_assert_eq!(Some(observation.descriptor), collector.catalog().lookup(stat.key));
                prop_assert!(
                    observation.value == expected || (observation.value.is_nan() && expected.is_nan())
                );
            }
        }
    }
}
