//! Guide position computation for column and row grids.
//!
//! This crate turns grid parameters into guide coordinates along one axis.
//!
//! # Architecture
//!
//! 1. **Alignment**: resolves where the grid starts on the canvas
//! 2. **Calculator**: enumerates the double guides around every gutter, and
//!    the optional single guides centered inside them
//! 3. **Planning**: dispatches a `GridRequest` to the typed axis routine
//!
//! # Example
//!
//! ```
//! use gridguide_core::{CanvasExtent, ColumnAlignment, GridAxisSpec, GridRequest};
//! use gridguide_layout::plan_guides;
//!
//! let spec = GridAxisSpec::new(ColumnAlignment::Left).with_cells(3, 10.0, 5.0);
//! let canvas = CanvasExtent::new(200.0, 100.0)?;
//! let plan = plan_guides(&GridRequest::Columns(spec), canvas)?;
//!
//! assert_eq!(plan.guides.len(), 8);
//! # Ok::<(), gridguide_core::ConfigurationError>(())
//! ```

mod alignment;
mod calculator;
mod plan;

pub use alignment::{resolve_start, resolve_start_named, AxisAlignment};
pub use calculator::{center_guides, enumerate_guides, total_extent, CenterPass};
pub use plan::{plan_axis, plan_guides, GuidePlan};
