//! # netscope-engine
//!
//! The visualization and aggregation engine of a network diagnostics
//! dashboard: pure, synchronous transformations from raw diagnostic
//! results to renderable models. No I/O, no retries, no persistence -
//! every operation is a deterministic function over immutable inputs,
//! safe to call repeatedly from any thread and from test harnesses
//! without a network in sight.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ collaborators (out of scope)          engine                 │
//! │                                                              │
//! │  trace service ──TraceResult───▶ topology ──▶ TopologyMap    │
//! │  inventory     ──DeviceRecord──▶ inventory ─▶ ordered view   │
//! │  history       ──Sample────────▶ series ────▶ Bucket series  │
//! │                                      │                       │
//! │                                  classify                    │
//! │                        (shared severity thresholds)          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`classify`]**: the one home of the latency/loss thresholds every
//!   severity-colored surface shares
//! - **[`topology`]**: hop chains to positioned zigzag node/edge diagrams
//! - **[`inventory`]**: multi-field sort/filter/search over device
//!   collections, plus current-state stats
//! - **[`series`]**: hour-of-day bucketing and trailing-series synthesis
//! - **[`source`]**: trait seams for the collaborators callers pull
//!   inputs from
//!
//! ## Example
//!
//! ```
//! use netscope_engine::topology::{layout, LayoutGeometry};
//! use netscope_types::{HopRecord, TraceResult};
//!
//! let trace = TraceResult {
//!     target: "example.com".into(),
//!     resolved_address: Some("93.184.216.34".into()),
//!     hops: vec![HopRecord::measured(1, Some("192.168.1.1".into()), 1.2, 1.8, 2.9, 0.0)],
//! };
//!
//! let map = layout(&trace, 800, &LayoutGeometry::default()).unwrap();
//! assert_eq!(map.nodes.len(), 3);
//! assert_eq!(map.edges.len(), 2);
//! ```

pub mod classify;
pub mod error;
pub mod inventory;
pub mod series;
pub mod source;
pub mod topology;

// Re-export the main types for convenience.
pub use classify::{classify, classify_loss, LossLevel, Severity};
pub use error::EngineError;
pub use inventory::{DeviceStats, FilterSpec, SortDirection, SortField, SortSpec, StatusFilter};
pub use series::{bucket_hourly, synthesize, SynthesisConfig};
pub use source::{DeviceProvider, SampleProvider, TraceProvider};
pub use topology::{
    LayoutGeometry, NodeKind, Position, TopologyEdge, TopologyMap, TopologyNode,
};
