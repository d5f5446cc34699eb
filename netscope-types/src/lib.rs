//! # netscope-types
//!
//! Core schema for network diagnostics. This crate defines the value objects
//! exchanged between the diagnostic collaborators (probe execution, device
//! inventory, sample history) and the netscope engine that turns them into
//! renderable models.
//!
//! ## Design Goals
//!
//! - **Immutable value objects**: records are created once per probe result
//!   or inventory snapshot and never mutated downstream
//! - **Absence is a domain state**: unresponsive hops, unnamed devices, and
//!   missing latencies are `Option`s, not errors
//! - **Optional serialization**: enable the `serde` feature to exchange
//!   these types as JSON with the remote diagnostics API
//! - **Closed enumerations**: loosely-typed upstream strings (device types,
//!   device statuses) normalize into closed enums with explicit defaults
//!
//! ## Example
//!
//! ```rust
//! use netscope_types::{HopRecord, TraceResult};
//!
//! let trace = TraceResult {
//!     target: "example.com".into(),
//!     resolved_address: Some("93.184.216.34".into()),
//!     hops: vec![
//!         HopRecord::measured(1, Some("192.168.1.1".into()), 1.2, 1.8, 2.9, 0.0),
//!         HopRecord::unresponsive(2),
//!         HopRecord::measured(3, Some("93.184.216.34".into()), 11.0, 12.4, 15.1, 0.0),
//!     ],
//! };
//!
//! assert_eq!(trace.hop_count(), 3);
//! assert!(trace.hops[1].is_wildcard());
//! ```

mod device;
mod sample;
mod trace;

pub use device::*;
pub use sample::*;
pub use trace::*;
