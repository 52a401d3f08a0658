//! The set of statistics the exporter knows how to name and type.
use std::collections::HashMap;

mod recursor;

/// The Prometheus metric type a statistic is exposed as.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MetricKind {
    /// A value that only goes up until the resolver restarts.
    Counter,
    /// A value that can arbitrarily go up or down between scrapes.
    Gauge,
}

impl MetricKind {
    /// Gets the name of this kind as used on `# TYPE` lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

/// The exported identity of a single statistic.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MetricDescriptor {
    name: &'static str,
    kind: MetricKind,
    help: &'static str,
}

impl MetricDescriptor {
    /// Creates a new `MetricDescriptor`.
    pub const fn new(name: &'static str, kind: MetricKind, help: &'static str) -> Self {
        Self { name, kind, help }
    }

    /// Creates a new `MetricDescriptor` of kind [`MetricKind::Gauge`].
    pub const fn gauge(name: &'static str, help: &'static str) -> Self {
        Self::new(name, MetricKind::Gauge, help)
    }

    /// Creates a new `MetricDescriptor` of kind [`MetricKind::Counter`].
    pub const fn counter(name: &'static str, help: &'static str) -> Self {
        Self::new(name, MetricKind::Counter, help)
    }

    /// Gets the exported metric name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Gets the metric kind.
    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    /// Gets the help text.
    pub fn help(&self) -> &'static str {
        self.help
    }
}

/// Immutable mapping from a statistic key, as printed by the resolver, to its descriptor.
///
/// A catalog is built once and then only read, so it can be shared freely between concurrent
/// scrapes.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    descriptors: HashMap<&'static str, MetricDescriptor>,
}

impl Catalog {
    /// Builds a catalog from `(key, descriptor)` pairs.
    ///
    /// If a key appears more than once, the last descriptor given for it wins.
    pub fn from_descriptors<I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, MetricDescriptor)>,
    {
        Self { descriptors: descriptors.into_iter().collect() }
    }

    /// Builds the catalog of statistics reported by `rec_control get-all`.
    ///
    /// Every entry is declared as a gauge, including the ones that behave like counters: the
    /// resolver resets them on restart and does not guarantee monotonicity.
    pub fn recursor() -> Self {
        Self::from_descriptors(recursor::DESCRIPTORS.iter().copied())
    }

    /// Looks up the descriptor for the given statistic key.
    pub fn lookup(&self, key: &str) -> Option<&MetricDescriptor> {
        self.descriptors.get(key)
    }

    /// Number of known keys.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether or not the catalog knows no keys at all.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Iterates over all `(key, descriptor)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &MetricDescriptor)> + '_ {
        self.descriptors.iter().map(|(key, descriptor)| (*key, descriptor))
    }
}
