//! Timestamped metric samples and their aggregated buckets.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// Metric names for the device inventory history family.
pub const METRIC_TOTAL: &str = "total";
pub const METRIC_ONLINE: &str = "online";
pub const METRIC_OFFLINE: &str = "offline";
pub const METRIC_NEW: &str = "new";

/// Metric names for the speed test history family.
pub const METRIC_DOWNLOAD: &str = "download";
pub const METRIC_UPLOAD: &str = "upload";
pub const METRIC_PING: &str = "ping";
pub const METRIC_JITTER: &str = "jitter";

/// The inventory history family, in chart order.
pub const INVENTORY_METRICS: [&str; 4] =
    [METRIC_TOTAL, METRIC_ONLINE, METRIC_OFFLINE, METRIC_NEW];

/// The speed history family, in chart order.
pub const SPEED_METRICS: [&str; 4] =
    [METRIC_DOWNLOAD, METRIC_UPLOAD, METRIC_PING, METRIC_JITTER];

/// One timestamped measurement: a fixed set of named numeric metrics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub timestamp: DateTime<Utc>,

    /// Metric values keyed by name. `BTreeMap` keeps iteration deterministic.
    pub metrics: BTreeMap<String, f64>,
}

impl Sample {
    /// Create an empty sample at a timestamp.
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            metrics: BTreeMap::new(),
        }
    }

    /// Add a metric value, chainable.
    pub fn metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    /// Look up a metric by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

/// An aggregated group of samples sharing a time label, reduced to
/// per-metric averages.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bucket {
    /// Time label, e.g. `"08:00"` for an hour-of-day bucket.
    pub label: String,

    /// Arithmetic mean per metric over the contributing samples.
    pub averages: BTreeMap<String, f64>,
}

impl Bucket {
    pub fn average(&self, name: &str) -> Option<f64> {
        self.averages.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sample_builder() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap();
        let sample = Sample::new(ts)
            .metric(METRIC_TOTAL, 12.0)
            .metric(METRIC_ONLINE, 9.0);

        assert_eq!(sample.get(METRIC_TOTAL), Some(12.0));
        assert_eq!(sample.get(METRIC_ONLINE), Some(9.0));
        assert_eq!(sample.get(METRIC_OFFLINE), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap();
        let sample = Sample::new(ts).metric(METRIC_DOWNLOAD, 184.2);

        let json = serde_json::to_string(&sample).unwrap();
        let parsed: Sample = serde_json::from_str(&json).unwrap();

        assert_eq!(sample, parsed);
    }
}
