//! Time-series bucketing and trailing synthesis.
//!
//! Two independent operations over metric samples: an hour-of-day profile
//! (hourly-bucketed averages for charting) and a synthesized trailing
//! series for when no real history exists yet. Synthesis is explicitly a
//! placeholder visualization, never telemetry - callers must only reach
//! for it after confirming the history collaborator has nothing.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Timelike, Utc};
use netscope_types::{Bucket, Sample};
use rand::Rng;
use tracing::debug;

use crate::error::EngineError;

/// Tunables for trailing-series synthesis.
///
/// The defaults reproduce the dashboard's historical look: earlier points
/// are damped to 70-105% of the current value with ±1 of noise so the
/// chart is not flat. They are presentation heuristics, not measurements.
#[derive(Debug, Clone)]
pub struct SynthesisConfig {
    /// Lower bound of the per-point damping factor.
    pub damping_min: f64,
    /// Upper bound (exclusive) of the per-point damping factor.
    pub damping_max: f64,
    /// Half-width of the additive noise interval.
    pub noise_amplitude: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            damping_min: 0.7,
            damping_max: 1.05,
            noise_amplitude: 1.0,
        }
    }
}

/// Synthesize a plausible trailing series from current-state counts.
///
/// Produces one sample per hour from `hours` ago up to `now`. The final
/// sample carries the exact current values; earlier points damp every
/// metric by a single per-point factor (plus one per-point noise draw),
/// so the internal proportions between metrics survive at each point.
/// Values are rounded and floored at zero.
///
/// Fails with [`EngineError::InvalidRange`] when `hours` is negative.
pub fn synthesize(
    current: &BTreeMap<String, u64>,
    now: DateTime<Utc>,
    hours: i64,
    config: &SynthesisConfig,
    rng: &mut impl Rng,
) -> Result<Vec<Sample>, EngineError> {
    if hours < 0 {
        return Err(EngineError::InvalidRange(hours));
    }

    let mut samples = Vec::with_capacity(hours as usize + 1);
    for i in (0..=hours).rev() {
        let timestamp = now - Duration::hours(i);
        let mut sample = Sample::new(timestamp);

        if i == 0 {
            for (name, &value) in current {
                sample.metrics.insert(name.clone(), value as f64);
            }
        } else {
            let factor = rng.gen_range(config.damping_min..config.damping_max);
            let noise = if config.noise_amplitude > 0.0 {
                rng.gen_range(-config.noise_amplitude..config.noise_amplitude)
            } else {
                0.0
            };
            for (name, &value) in current {
                let damped = (value as f64 * factor + noise).round().max(0.0);
                sample.metrics.insert(name.clone(), damped);
            }
        }

        samples.push(sample);
    }

    debug!(points = samples.len(), "synthesized trailing series");
    Ok(samples)
}

/// Aggregate samples into an hour-of-day profile.
///
/// Buckets are keyed by the hour of each sample's timestamp as `"HH:00"`
/// and sorted by label; samples from different calendar days sharing an
/// hour merge into one bucket. This is deliberately a profile, not a
/// calendar-anchored timeline. Each bucket's value per metric is the
/// arithmetic mean of the contributing samples, rounded to 2 decimals;
/// metrics absent from a sample simply do not contribute.
///
/// Timestamps are bucketed as given - callers that want wall-clock hours
/// localize before handing samples in.
pub fn bucket_hourly(samples: &[Sample], metrics: &[&str]) -> Vec<Bucket> {
    let mut sums: BTreeMap<String, BTreeMap<&str, (f64, u32)>> = BTreeMap::new();

    for sample in samples {
        let label = format!("{:02}:00", sample.timestamp.hour());
        let slot = sums.entry(label).or_default();
        for &metric in metrics {
            if let Some(value) = sample.get(metric) {
                let entry = slot.entry(metric).or_insert((0.0, 0));
                entry.0 += value;
                entry.1 += 1;
            }
        }
    }

    let buckets: Vec<Bucket> = sums
        .into_iter()
        .map(|(label, per_metric)| Bucket {
            label,
            averages: per_metric
                .into_iter()
                .map(|(metric, (sum, count))| (metric.to_string(), round2(sum / f64::from(count))))
                .collect(),
        })
        .collect();

    debug!(
        samples = samples.len(),
        buckets = buckets.len(),
        "bucketed samples by hour"
    );
    buckets
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use netscope_types::{METRIC_DOWNLOAD, METRIC_TOTAL, METRIC_UPLOAD};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    fn counts(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_synthesize_point_count_and_exact_tail() {
        let mut rng = StdRng::seed_from_u64(7);
        let current = counts(&[(METRIC_TOTAL, 10)]);

        let samples =
            synthesize(&current, now(), 2, &SynthesisConfig::default(), &mut rng).unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].timestamp, now() - Duration::hours(2));
        assert_eq!(samples[2].timestamp, now());
        // The last point is the real snapshot, undistorted.
        assert_eq!(samples[2].get(METRIC_TOTAL), Some(10.0));
        for sample in &samples {
            assert!(sample.get(METRIC_TOTAL).unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_synthesize_zero_hours_is_just_the_snapshot() {
        let mut rng = StdRng::seed_from_u64(7);
        let current = counts(&[(METRIC_TOTAL, 4)]);

        let samples =
            synthesize(&current, now(), 0, &SynthesisConfig::default(), &mut rng).unwrap();

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].get(METRIC_TOTAL), Some(4.0));
    }

    #[test]
    fn test_synthesize_negative_hours_is_invalid_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let current = counts(&[(METRIC_TOTAL, 10)]);

        assert_eq!(
            synthesize(&current, now(), -1, &SynthesisConfig::default(), &mut rng),
            Err(EngineError::InvalidRange(-1))
        );
    }

    #[test]
    fn test_synthesize_is_deterministic_under_a_seeded_rng() {
        let current = counts(&[(METRIC_TOTAL, 25), ("online", 19)]);
        let config = SynthesisConfig::default();

        let mut rng = StdRng::seed_from_u64(42);
        let first = synthesize(&current, now(), 24, &config, &mut rng).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let second = synthesize(&current, now(), 24, &config, &mut rng).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_synthesize_shares_the_damping_factor_across_metrics() {
        // With noise off, a shared per-point factor keeps proportions:
        // round(200f) stays within rounding distance of 2 * round(100f).
        let config = SynthesisConfig {
            noise_amplitude: 0.0,
            ..SynthesisConfig::default()
        };
        let current = counts(&[("a", 100), ("b", 200)]);
        let mut rng = StdRng::seed_from_u64(3);

        let samples = synthesize(&current, now(), 12, &config, &mut rng).unwrap();
        for sample in &samples {
            let a = sample.get("a").unwrap();
            let b = sample.get("b").unwrap();
            assert!((b - 2.0 * a).abs() <= 1.0, "proportion broken: a={a} b={b}");
        }
    }

    #[test]
    fn test_bucket_hourly_averages_one_hour() {
        let day = |hour, minute, total: f64| {
            Sample::new(Utc.with_ymd_and_hms(2024, 5, 10, hour, minute, 0).unwrap())
                .metric(METRIC_TOTAL, total)
        };
        let buckets = bucket_hourly(&[day(8, 15, 4.0), day(8, 45, 6.0)], &[METRIC_TOTAL]);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].label, "08:00");
        assert_eq!(buckets[0].average(METRIC_TOTAL), Some(5.0));
    }

    #[test]
    fn test_bucket_hourly_merges_across_days() {
        let sample = |day, value: f64| {
            Sample::new(Utc.with_ymd_and_hms(2024, 5, day, 8, 0, 0).unwrap())
                .metric(METRIC_DOWNLOAD, value)
        };
        let buckets =
            bucket_hourly(&[sample(10, 100.0), sample(11, 200.0)], &[METRIC_DOWNLOAD]);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].average(METRIC_DOWNLOAD), Some(150.0));
    }

    #[test]
    fn test_bucket_hourly_sorts_labels_ascending() {
        let at = |hour| Sample::new(Utc.with_ymd_and_hms(2024, 5, 10, hour, 0, 0).unwrap())
            .metric(METRIC_TOTAL, 1.0);
        let buckets = bucket_hourly(&[at(14), at(8), at(23)], &[METRIC_TOTAL]);

        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["08:00", "14:00", "23:00"]);
    }

    #[test]
    fn test_bucket_hourly_rounds_to_two_decimals() {
        let at = |minute, value: f64| {
            Sample::new(Utc.with_ymd_and_hms(2024, 5, 10, 9, minute, 0).unwrap())
                .metric("ping", value)
        };
        let buckets = bucket_hourly(&[at(0, 1.0), at(10, 2.0), at(20, 2.0)], &["ping"]);

        assert_eq!(buckets[0].average("ping"), Some(1.67));
    }

    #[test]
    fn test_bucket_hourly_skips_absent_metrics() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap();
        let with_both = Sample::new(ts)
            .metric(METRIC_DOWNLOAD, 100.0)
            .metric(METRIC_UPLOAD, 40.0);
        let download_only = Sample::new(ts).metric(METRIC_DOWNLOAD, 200.0);

        let buckets =
            bucket_hourly(&[with_both, download_only], &[METRIC_DOWNLOAD, METRIC_UPLOAD]);

        // Upload averages over the one sample that carries it.
        assert_eq!(buckets[0].average(METRIC_DOWNLOAD), Some(150.0));
        assert_eq!(buckets[0].average(METRIC_UPLOAD), Some(40.0));
    }

    #[test]
    fn test_bucket_hourly_ignores_unrequested_metrics() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap();
        let sample = Sample::new(ts)
            .metric(METRIC_DOWNLOAD, 100.0)
            .metric(METRIC_UPLOAD, 40.0);

        let buckets = bucket_hourly(&[sample], &[METRIC_DOWNLOAD]);
        assert_eq!(buckets[0].average(METRIC_UPLOAD), None);
    }

    #[test]
    fn test_bucket_hourly_empty_input_is_empty_output() {
        assert!(bucket_hourly(&[], &[METRIC_TOTAL]).is_empty());
    }
}
