//! Helpers for rendering observations in the Prometheus exposition format.

use std::time::Duration;

use indexmap::IndexMap;

use crate::catalog::{MetricDescriptor, MetricKind};
use crate::collector::Observation;

/// Name of the gauge holding how long the scrape took.
pub const SCRAPE_DURATION_METRIC: &str = "pdns_recursor_exporter_scrape_duration_seconds";

/// Renders a scrape in the Prometheus [exposition format].
///
/// Observations sharing an exported name are grouped under a single `# HELP`/`# TYPE` header, in
/// the order the names were first seen. The scrape duration is appended as its own gauge.
///
/// [exposition format]: https://github.com/prometheus/docs/blob/main/content/docs/instrumenting/exposition_formats.md#text-format-details
pub fn render(observations: &[Observation<'_>], scrape_duration: Duration) -> String {
    let mut grouped: IndexMap<&str, (&MetricDescriptor, Vec<f64>)> = IndexMap::new();
    for observation in observations {
        grouped
            .entry(observation.descriptor.name())
            .or_insert_with(|| (observation.descriptor, Vec::new()))
            .1
            .push(observation.value);
    }

    let mut output = String::new();
    for (name, (descriptor, values)) in grouped {
        write_help_line(&mut output, name, descriptor.help());
        write_type_line(&mut output, name, descriptor.kind());
        for value in values {
            write_metric_line(&mut output, name, value);
        }
    }

    write_help_line(
        &mut output,
        SCRAPE_DURATION_METRIC,
        "Time taken to collect and render the resolver statistics.",
    );
    write_type_line(&mut output, SCRAPE_DURATION_METRIC, MetricKind::Gauge);
    write_metric_line(&mut output, SCRAPE_DURATION_METRIC, scrape_duration.as_secs_f64());

    output
}

/// Writes a help (description) line in the Prometheus [exposition format].
///
/// [exposition format]: https://github.com/prometheus/docs/blob/main/content/docs/instrumenting/exposition_formats.md#text-format-details
pub fn write_help_line(buffer: &mut String, name: &str, desc: &str) {
    buffer.push_str("# HELP ");
    buffer.push_str(name);
    buffer.push(' ');
    let desc = sanitize_description(desc);
    buffer.push_str(&desc);
    buffer.push('\n');
}

/// Writes a metric type line in the Prometheus [exposition format].
///
/// [exposition format]: https://github.com/prometheus/docs/blob/main/content/docs/instrumenting/exposition_formats.md#text-format-details
pub fn write_type_line(buffer: &mut String, name: &str, kind: MetricKind) {
    buffer.push_str("# TYPE ");
    buffer.push_str(name);
    buffer.push(' ');
    buffer.push_str(kind.as_str());
    buffer.push('\n');
}

/// Writes an unlabeled sample in the Prometheus [exposition format].
///
/// [exposition format]: https://github.com/prometheus/docs/blob/main/content/docs/instrumenting/exposition_formats.md#text-format-details
pub fn write_metric_line(buffer: &mut String, name: &str, value: f64) {
    buffer.push_str(name);
    buffer.push(' ');
    write_value(buffer, value);
    buffer.push('\n');
}

fn write_value(buffer: &mut String, value: f64) {
    // Rust spells these `NaN`, `inf` and `-inf`; Prometheus wants `NaN`, `+Inf` and `-Inf`.
    if value.is_nan() {
        buffer.push_str("NaN");
    } else if value == f64::INFINITY {
        buffer.push_str("+Inf");
    } else if value == f64::NEG_INFINITY {
        buffer.push_str("-Inf");
    } else {
        buffer.push_str(value.to_string().as_str());
    }
}

/// Sanitizes a metric name to be valid under the Prometheus [data model].
///
/// [data model]: https://prometheus.io/docs/concepts/data_model/#metric-names-and-labels
pub fn sanitize_metric_name(name: &str) -> String {
    // The first character must be [a-zA-Z_:], and all subsequent characters must be [a-zA-Z0-9_:].
    name.chars()
        .enumerate()
        .map(|(i, c)| {
            if i == 0 && valid_metric_name_start_character(c)
                || i != 0 && valid_metric_name_character(c)
            {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Sanitizes a metric description to be valid under the Prometheus [exposition format].
///
/// [exposition format]: https://github.com/prometheus/docs/blob/main/content/docs/instrumenting/exposition_formats.md#text-format-details
pub fn sanitize_description(value: &str) -> String {
    // All Unicode characters are valid, but backslashes and line feeds must be escaped.
    let mut sanitized = String::with_capacity(value.len());

    let mut previous_backslash = false;
    for c in value.chars() {
        match c {
            '\n' => sanitized.push_str("\\n"),
            // A backslash either escapes the next character or is itself escaped by the previous
            // one. Hold it until we know which.
            '\\' => {
                if previous_backslash {
                    sanitized.push_str("\\\\");
                }
                previous_backslash = !previous_backslash;
            }
            c => {
                if previous_backslash {
                    previous_backslash = false;
                    sanitized.push_str("\\\\");
                }
                sanitized.push(c);
            }
        }
    }

    if previous_backslash {
        sanitized.push_str("\\\\");
    }

    sanitized
}

#[inline]
fn valid_metric_name_start_character(c: char) -> bool {
    // Essentially, needs to match the regex pattern of [a-zA-Z_:].
    c.is_ascii_alphabetic() || c == '_' || c == ':'
}

#[inline]
fn valid_metric_name_character(c: char) -> bool {
    // Essentially, needs to match the regex pattern of [a-zA-Z0-9_:].
    c.is_ascii_alphanumeric() || c == '_' || c == ':'
}
