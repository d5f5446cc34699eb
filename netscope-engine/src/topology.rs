//! Topology layout - hop chains to positioned node/edge diagrams.
//!
//! Converts one [`TraceResult`] into a grid of nodes (source, one per hop,
//! target) with deterministic pixel positions. Rows wrap at a width derived
//! from the viewport, and odd rows reverse column order so the path snakes
//! instead of jumping back to the left edge.

use netscope_types::TraceResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{classify, Severity};
use crate::error::EngineError;

/// Labels longer than this are truncated to [`LABEL_KEEP`] plus `".."`.
const LABEL_MAX: usize = 14;
const LABEL_KEEP: usize = 12;

/// Addresses longer than this are truncated to [`ADDRESS_KEEP`] plus `".."`.
const ADDRESS_MAX: usize = 16;
const ADDRESS_KEEP: usize = 14;

/// Rendered address for a hop that never resolved.
const WILDCARD_ADDRESS: &str = "* * *";

/// Grid geometry for the topology layout.
///
/// The defaults are the dashboard's fixed node box and spacing; they are
/// one struct so a renderer with different box art changes them in one
/// place.
#[derive(Debug, Clone)]
pub struct LayoutGeometry {
    /// Node box width in pixels.
    pub node_width: u32,
    /// Node box height in pixels.
    pub node_height: u32,
    /// Horizontal gap between node boxes.
    pub gap_x: u32,
    /// Vertical distance between row centres.
    pub row_height: u32,
    /// Space above the first row.
    pub top_margin: u32,
    /// Extra canvas height below the last row.
    pub canvas_pad: u32,
    /// Fewest nodes per row, regardless of viewport.
    pub min_per_row: u32,
    /// Most nodes per row, regardless of viewport.
    pub max_per_row: u32,
}

impl Default for LayoutGeometry {
    fn default() -> Self {
        Self {
            node_width: 120,
            node_height: 70,
            gap_x: 60,
            row_height: 130,
            top_margin: 30,
            canvas_pad: 40,
            min_per_row: 2,
            max_per_row: 6,
        }
    }
}

impl LayoutGeometry {
    /// Nodes per row for a viewport width: as many fixed-width boxes as
    /// fit, clamped so narrow viewports still get a path and wide ones
    /// stay readable.
    pub fn nodes_per_row(&self, viewport_width: u32) -> u32 {
        (viewport_width / (self.node_width + self.gap_x))
            .clamp(self.min_per_row, self.max_per_row)
    }
}

/// Role of a node in the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Source,
    Hop,
    Target,
}

/// Centre-point pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One positioned node of the diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyNode {
    pub kind: NodeKind,
    /// Display label, truncated to fit the node box.
    pub label: String,
    /// Display address, truncated to fit the node box.
    pub address: String,
    pub position: Position,
    pub severity: Severity,
}

/// Edge between consecutive nodes: edge `k` connects node `k` to `k + 1`.
///
/// Severity and label derive from the downstream node's latency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyEdge {
    pub severity: Severity,
    /// Formatted latency, e.g. `"12.4 ms"`; absent for timeouts and
    /// missing data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_label: Option<String>,
    /// Timed-out links render dashed.
    pub dashed: bool,
}

/// The positioned node/edge graph plus the canvas size it needs.
///
/// Purely derived output; holds no reference back to the trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyMap {
    pub nodes: Vec<TopologyNode>,
    pub edges: Vec<TopologyEdge>,
    pub width: u32,
    pub height: u32,
}

/// Intermediate per-node display data before positioning.
struct NodeSpec {
    kind: NodeKind,
    label: String,
    address: String,
    latency_ms: Option<f64>,
    timed_out: bool,
}

/// Lay out a trace as a zigzag grid of nodes and edges.
///
/// Produces exactly `hops + 2` nodes and `hops + 1` edges for any hop
/// chain, including the empty one. Fails only when the trace has no
/// target; every hop content (missing addresses, missing latencies,
/// timeouts) is a valid domain state.
pub fn layout(
    trace: &TraceResult,
    viewport_width: u32,
    geometry: &LayoutGeometry,
) -> Result<TopologyMap, EngineError> {
    if trace.target.is_empty() {
        return Err(EngineError::InvalidInput);
    }

    let specs = node_specs(trace);
    let per_row = geometry.nodes_per_row(viewport_width);
    let rows = (specs.len() as u32).div_ceil(per_row);

    let nodes: Vec<TopologyNode> = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let severity = match spec.kind {
                NodeKind::Source => Severity::None,
                _ => classify(spec.latency_ms, spec.timed_out),
            };
            TopologyNode {
                kind: spec.kind,
                label: truncate(&spec.label, LABEL_MAX, LABEL_KEEP),
                address: truncate(&spec.address, ADDRESS_MAX, ADDRESS_KEEP),
                position: position_for(i as u32, per_row, geometry),
                severity,
            }
        })
        .collect();

    let edges: Vec<TopologyEdge> = specs
        .windows(2)
        .map(|pair| {
            let next = &pair[1];
            let latency_label = match (next.latency_ms, next.timed_out) {
                (Some(ms), false) => Some(format!("{ms:.1} ms")),
                _ => None,
            };
            TopologyEdge {
                severity: classify(next.latency_ms, next.timed_out),
                latency_label,
                dashed: next.timed_out,
            }
        })
        .collect();

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        rows,
        per_row,
        "computed topology layout"
    );

    Ok(TopologyMap {
        nodes,
        edges,
        width: per_row * (geometry.node_width + geometry.gap_x) + geometry.gap_x,
        height: rows * geometry.row_height + geometry.canvas_pad,
    })
}

/// Flatten the trace into the display sequence: source, hops, target.
fn node_specs(trace: &TraceResult) -> Vec<NodeSpec> {
    let mut specs = Vec::with_capacity(trace.hop_count() + 2);

    specs.push(NodeSpec {
        kind: NodeKind::Source,
        label: "Source".to_string(),
        address: "Local network".to_string(),
        latency_ms: None,
        timed_out: false,
    });

    for hop in &trace.hops {
        specs.push(NodeSpec {
            kind: NodeKind::Hop,
            label: format!("Hop {}", hop.hop_index),
            address: hop
                .address
                .clone()
                .unwrap_or_else(|| WILDCARD_ADDRESS.to_string()),
            latency_ms: hop.avg_latency_ms,
            timed_out: hop.timed_out,
        });
    }

    specs.push(NodeSpec {
        kind: NodeKind::Target,
        label: trace.target.clone(),
        address: trace
            .resolved_address
            .clone()
            .unwrap_or_else(|| trace.target.clone()),
        latency_ms: trace.last_hop().and_then(|hop| hop.avg_latency_ms),
        timed_out: false,
    });

    specs
}

/// Grid position of the `index`-th node, with zigzag column reversal on
/// odd rows so consecutive nodes stay horizontally adjacent across row
/// boundaries.
fn position_for(index: u32, per_row: u32, geometry: &LayoutGeometry) -> Position {
    let row = index / per_row;
    let mut col = index % per_row;
    if row % 2 == 1 {
        col = per_row - 1 - col;
    }
    Position {
        x: f64::from(geometry.gap_x)
            + f64::from(col) * f64::from(geometry.node_width + geometry.gap_x)
            + f64::from(geometry.node_width) / 2.0,
        y: f64::from(geometry.top_margin)
            + f64::from(row) * f64::from(geometry.row_height)
            + f64::from(geometry.node_height) / 2.0,
    }
}

fn truncate(text: &str, max: usize, keep: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(keep).collect();
        format!("{head}..")
    } else {
        text.to_string()
    }
}
