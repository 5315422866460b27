//! All data types for the undigraph library.

pub mod edge;
pub mod error;

pub use edge::TreeEdge;
pub use error::{GraphError, GraphResult};

/// Numeric edge weight.
pub type Weight = f64;

/// Weight used when an edge is added without one.
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Format a weight the way it was most likely written: integral weights
/// without a fractional part, everything else as-is.
pub fn format_weight(weight: Weight) -> String {
    if weight.is_finite() && weight.fract() == 0.0 && weight.abs() < 1e15 {
        format!("{}", weight as i64)
    } else {
        format!("{}", weight)
    }
}
