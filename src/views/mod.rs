//! Rendering layer for the time column.
//!
//! The pure layout lives in `crate::layout`; this module owns the container
//! seam, the markup templates, and the thin `TimeColumn` adapter that wires
//! the two together.

pub mod container;
pub mod template;
pub mod time_column;

pub use container::{Container, FixedPanel};
pub use time_column::{ColumnError, TimeColumn};
