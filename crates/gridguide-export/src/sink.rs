//! Handing planned guides to the host that persists them.

use gridguide_core::{ExportError, GuidePosition, Orientation};
use gridguide_layout::GuidePlan;
use log::info;

/// Receiver of computed guides.
///
/// Implementations own the host's guide objects; the planner only produces
/// positions.
pub trait GuideSink {
    /// Remove every existing guide with the given orientation, returning how
    /// many were removed.
    fn delete_guides(&mut self, orientation: Orientation) -> Result<usize, ExportError>;

    /// Create one guide.
    fn add_guide(&mut self, guide: GuidePosition) -> Result<(), ExportError>;
}

impl GuideSink for Vec<GuidePosition> {
    fn delete_guides(&mut self, orientation: Orientation) -> Result<usize, ExportError> {
        let before = self.len();
        self.retain(|g| g.orientation != orientation);
        Ok(before - self.len())
    }

    fn add_guide(&mut self, guide: GuidePosition) -> Result<(), ExportError> {
        self.push(guide);
        Ok(())
    }
}

/// Outcome of [`apply_plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplyReport {
    /// Existing guides removed before emitting
    pub deleted: usize,
    /// Guides added from the plan
    pub added: usize,
}

/// Emit a plan into a sink.
///
/// With `delete_existing` set, every guide sharing the plan's orientation is
/// removed first. Guides are added in plan order, coincident ones included.
pub fn apply_plan<S: GuideSink + ?Sized>(
    plan: &GuidePlan,
    delete_existing: bool,
    sink: &mut S,
) -> Result<ApplyReport, ExportError> {
    let mut report = ApplyReport::default();

    if delete_existing {
        report.deleted = sink.delete_guides(plan.orientation())?;
    }

    for guide in plan.iter() {
        sink.add_guide(*guide)?;
        report.added += 1;
    }

    info!(
        "{}: removed {} {} guides, added {}",
        plan.axis,
        report.deleted,
        plan.orientation(),
        report.added
    );

    Ok(report)
}
