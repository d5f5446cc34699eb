//! Latency and loss severity classification.
//!
//! Every consumer that colors by latency - topology edges, topology nodes,
//! result tables - goes through [`classify`], so the thresholds live here
//! and nowhere else.

use serde::{Deserialize, Serialize};

/// Latency at or below this many milliseconds is [`Severity::Good`].
pub const GOOD_MAX_MS: f64 = 50.0;

/// Latency at or below this many milliseconds (and above [`GOOD_MAX_MS`])
/// is [`Severity::Medium`]; anything higher is [`Severity::Bad`].
pub const MEDIUM_MAX_MS: f64 = 100.0;

/// Packet loss at or above this percentage is [`LossLevel::High`].
pub const HIGH_LOSS_PERCENT: f64 = 50.0;

/// Qualitative latency tier.
///
/// Ordered so that `Good < Medium < Bad`, which lets consumers reduce a
/// set of severities to the worst one with `max()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Good,
    Medium,
    Bad,
    /// No probe answered at all.
    Timeout,
    /// No latency value was available and the probe did not time out.
    /// Partial data is not a failure.
    None,
}

impl Severity {
    /// Stable identifier for renderers keying styles off the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::Medium => "medium",
            Severity::Bad => "bad",
            Severity::Timeout => "timeout",
            Severity::None => "none",
        }
    }
}

/// Map a latency value to its severity tier.
///
/// A timeout dominates any value; an absent value without a timeout is
/// [`Severity::None`]. Pure and total.
pub fn classify(value: Option<f64>, timed_out: bool) -> Severity {
    if timed_out {
        return Severity::Timeout;
    }
    match value {
        None => Severity::None,
        Some(v) if v > MEDIUM_MAX_MS => Severity::Bad,
        Some(v) if v > GOOD_MAX_MS => Severity::Medium,
        Some(_) => Severity::Good,
    }
}

/// Qualitative packet-loss tier for result tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LossLevel {
    None,
    Some,
    High,
}

/// Map a loss percentage to its tier: any loss is flagged, loss at or
/// above [`HIGH_LOSS_PERCENT`] escalates.
pub fn classify_loss(loss_percent: f64) -> LossLevel {
    if loss_percent >= HIGH_LOSS_PERCENT {
        LossLevel::High
    } else if loss_percent > 0.0 {
        LossLevel::Some
    } else {
        LossLevel::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(classify(Some(10.0), false), Severity::Good);
        assert_eq!(classify(Some(50.0), false), Severity::Good);
        assert_eq!(classify(Some(50.1), false), Severity::Medium);
        assert_eq!(classify(Some(100.0), false), Severity::Medium);
        assert_eq!(classify(Some(100.1), false), Severity::Bad);
        assert_eq!(classify(Some(450.0), false), Severity::Bad);
    }

    #[test]
    fn test_timeout_dominates() {
        assert_eq!(classify(Some(1.0), true), Severity::Timeout);
        assert_eq!(classify(None, true), Severity::Timeout);
    }

    #[test]
    fn test_absent_value_is_none_not_error() {
        assert_eq!(classify(None, false), Severity::None);
    }

    #[test]
    fn test_monotonic_over_values() {
        // For a < b, severity(a) <= severity(b) under Good < Medium < Bad.
        let mut prev = Severity::Good;
        for ms in 0..300 {
            let tier = classify(Some(ms as f64), false);
            assert!(tier >= prev, "severity regressed at {ms} ms");
            prev = tier;
        }
    }

    #[test]
    fn test_loss_levels() {
        assert_eq!(classify_loss(0.0), LossLevel::None);
        assert_eq!(classify_loss(10.0), LossLevel::Some);
        assert_eq!(classify_loss(50.0), LossLevel::High);
        assert_eq!(classify_loss(100.0), LossLevel::High);
    }
}
