//! JSON rendering of a guide plan.

use gridguide_core::ExportError;
use gridguide_layout::GuidePlan;
use serde_json::json;

/// Serialize a plan as pretty-printed JSON.
///
/// `delete_existing` tells the consumer to remove every guide of the plan's
/// orientation before adding the planned ones.
pub fn export(plan: &GuidePlan, delete_existing: bool) -> Result<String, ExportError> {
    let value = json!({
        "axis": plan.axis,
        "orientation": plan.orientation(),
        "delete_existing": delete_existing,
        "start": plan.start,
        "total_extent": plan.total_extent,
        "guides": plan.guides,
        "center_guides": plan.center_guides,
    });
    serde_json::to_string_pretty(&value).map_err(|e| ExportError::Json {
        reason: e.to_string(),
    })
}
