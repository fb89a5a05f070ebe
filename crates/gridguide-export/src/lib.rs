//! Guide sinks and output formats for computed guide plans.
//!
//! Supported outputs:
//! - Any host implementing [`GuideSink`]
//! - An in-memory named view, serializable as `sodipodi:guide` elements or a
//!   standalone SVG document
//! - JSON

pub mod json;
pub mod named_view;
pub mod sink;

use gridguide_core::ExportError;
use gridguide_layout::GuidePlan;

pub use named_view::NamedView;
pub use sink::{apply_plan, ApplyReport, GuideSink};

/// Export a plan as JSON, flagging whether existing guides of its
/// orientation are to be deleted first.
pub fn export_json(plan: &GuidePlan, delete_existing: bool) -> Result<String, ExportError> {
    json::export(plan, delete_existing)
}
