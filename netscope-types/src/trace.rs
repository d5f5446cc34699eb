//! Trace results - one traced network path as reported by the probe service.

/// One measured or missing hop along a traced path.
///
/// A hop that never answered any probe has `timed_out` set and carries no
/// latency data; a hop may also respond without resolving to an address,
/// which is a valid partial result rather than a failure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HopRecord {
    /// Position in the chain, 1-based.
    pub hop_index: u32,

    /// Responding address, if any. `None` renders as a wildcard.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub address: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min_latency_ms: Option<f64>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub avg_latency_ms: Option<f64>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_latency_ms: Option<f64>,

    /// Packet loss over the probes sent to this hop, 0-100.
    pub loss_percent: f64,

    /// True when no probe for this hop received any reply.
    pub timed_out: bool,
}

impl HopRecord {
    /// Create a hop that responded to probing.
    pub fn measured(
        hop_index: u32,
        address: Option<String>,
        min_latency_ms: f64,
        avg_latency_ms: f64,
        max_latency_ms: f64,
        loss_percent: f64,
    ) -> Self {
        Self {
            hop_index,
            address,
            min_latency_ms: Some(min_latency_ms),
            avg_latency_ms: Some(avg_latency_ms),
            max_latency_ms: Some(max_latency_ms),
            loss_percent,
            timed_out: false,
        }
    }

    /// Create a hop that never answered.
    ///
    /// Upholds the invariant that a timed-out hop carries no latency data.
    pub fn unresponsive(hop_index: u32) -> Self {
        Self {
            hop_index,
            address: None,
            min_latency_ms: None,
            avg_latency_ms: None,
            max_latency_ms: None,
            loss_percent: 100.0,
            timed_out: true,
        }
    }

    /// True when the hop has no resolved address.
    pub fn is_wildcard(&self) -> bool {
        self.address.is_none()
    }
}

/// The outcome of one trace invocation: an ordered hop chain toward a target.
///
/// Constructed by the probe collaborator, consumed once by the topology
/// layout, then discarded. Hop ordering is path order; index 0 is nearest
/// to the source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceResult {
    /// The hostname or address the trace was requested for.
    pub target: String,

    /// The address the target resolved to, when resolution succeeded.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub resolved_address: Option<String>,

    /// Hops in path order.
    pub hops: Vec<HopRecord>,
}

impl TraceResult {
    /// Number of hops in the chain.
    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// The hop closest to the target, if the chain is non-empty.
    pub fn last_hop(&self) -> Option<&HopRecord> {
        self.hops.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresponsive_hop_has_no_latency() {
        let hop = HopRecord::unresponsive(4);
        assert!(hop.timed_out);
        assert!(hop.is_wildcard());
        assert!(hop.min_latency_ms.is_none());
        assert!(hop.avg_latency_ms.is_none());
        assert!(hop.max_latency_ms.is_none());
    }

    #[test]
    fn test_last_hop() {
        let trace = TraceResult {
            target: "example.com".into(),
            resolved_address: None,
            hops: vec![
                HopRecord::measured(1, Some("10.0.0.1".into()), 1.0, 1.5, 2.0, 0.0),
                HopRecord::measured(2, Some("10.0.0.2".into()), 8.0, 9.5, 11.0, 0.0),
            ],
        };
        assert_eq!(trace.hop_count(), 2);
        assert_eq!(trace.last_hop().unwrap().hop_index, 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let trace = TraceResult {
            target: "example.com".into(),
            resolved_address: Some("93.184.216.34".into()),
            hops: vec![
                HopRecord::measured(1, Some("192.168.1.1".into()), 1.2, 1.8, 2.9, 0.0),
                HopRecord::unresponsive(2),
            ],
        };

        let json = serde_json::to_string(&trace).unwrap();
        let parsed: TraceResult = serde_json::from_str(&json).unwrap();

        assert_eq!(trace, parsed);
    }
}
