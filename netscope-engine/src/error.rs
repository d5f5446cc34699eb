//! Error types for the engine.

use thiserror::Error;

/// Failures raised at the engine's call boundary.
///
/// Well-formed collaborator data never triggers these; they signal bad
/// call-site usage (a trace with no target, an unrecognized column name,
/// a negative range) rather than expected runtime conditions. Absent
/// optional fields are valid domain states, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The trace carries no target to lay a path toward.
    #[error("trace has no target")]
    InvalidInput,

    /// A sort column name did not match any known field.
    #[error("unknown sort field: {0}")]
    InvalidSortField(String),

    /// A status filter name did not match any known filter.
    #[error("unknown status filter: {0}")]
    InvalidStatusFilter(String),

    /// A negative hour count was requested.
    #[error("invalid hour range: {0}")]
    InvalidRange(i64),
}
