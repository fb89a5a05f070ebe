//! Per-axis guide planning.

use gridguide_core::{
    Axis, CanvasExtent, ConfigurationError, GridAxisSpec, GridRequest, GuidePosition, Orientation,
};
use log::{debug, warn};

use crate::alignment::AxisAlignment;
use crate::calculator::{center_guides, enumerate_guides, total_extent};

/// Guides computed for one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct GuidePlan {
    /// Axis the guides were computed for
    pub axis: Axis,
    /// Coordinate where the grid begins
    pub start: f64,
    /// Span of the whole grid, gutters included
    pub total_extent: f64,
    /// Double guides bounding every gutter
    pub guides: Vec<GuidePosition>,
    /// Single guides centered in each gutter, if requested
    pub center_guides: Vec<GuidePosition>,
}

impl GuidePlan {
    pub fn orientation(&self) -> Orientation {
        self.axis.orientation()
    }

    /// All guides in emission order: the gutter guides, then the center guides.
    pub fn iter(&self) -> impl Iterator<Item = &GuidePosition> {
        self.guides.iter().chain(self.center_guides.iter())
    }

    pub fn len(&self) -> usize {
        self.guides.len() + self.center_guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute the guides for whichever axis the request selects.
pub fn plan_guides(request: &GridRequest, canvas: CanvasExtent) -> Result<GuidePlan, ConfigurationError> {
    match request {
        GridRequest::Columns(spec) => plan_axis(spec, canvas),
        GridRequest::Rows(spec) => plan_axis(spec, canvas),
    }
}

/// Compute the guides for one axis.
///
/// The spec is validated first; invalid parameters produce an error and no
/// guides at all.
pub fn plan_axis<A: AxisAlignment>(
    spec: &GridAxisSpec<A>,
    canvas: CanvasExtent,
) -> Result<GuidePlan, ConfigurationError> {
    spec.validate()?;

    let axis = A::AXIS;
    let orientation = A::orientation();
    let cell_size = spec.scaled_cell_size();
    let gutter = spec.scaled_gutter();

    let total = total_extent(spec.count, cell_size, gutter, spec.include_outer_gutter);
    let start = spec
        .alignment
        .resolve_start(canvas.along(axis), total, spec.scaled_offset());
    debug!(
        "{} grid: {:?} alignment, total extent {}, start {}",
        axis, spec.alignment, total, start
    );

    let guides = enumerate_guides(
        spec.count,
        cell_size,
        gutter,
        start,
        spec.include_outer_gutter,
        orientation,
    );

    let center = if spec.include_center_guides {
        if gutter <= 0.0 {
            warn!("{} grid: center guides requested without a gutter, skipping", axis);
        }
        center_guides(
            spec.count,
            cell_size,
            gutter,
            start,
            spec.include_outer_gutter,
            orientation,
        )
    } else {
        Vec::new()
    };

    debug!(
        "{} grid: {} gutter guides, {} center guides",
        axis,
        guides.len(),
        center.len()
    );

    Ok(GuidePlan {
        axis,
        start,
        total_extent: total,
        guides,
        center_guides: center,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridguide_core::{ColumnAlignment, LengthUnit, RowAlignment};

    fn canvas() -> CanvasExtent {
        CanvasExtent::new(200.0, 300.0).unwrap()
    }

    fn coordinates<'a>(guides: impl IntoIterator<Item = &'a GuidePosition>) -> Vec<f64> {
        guides.into_iter().map(|g| g.coordinate).collect()
    }

    #[test]
    fn test_plan_left_columns() {
        let spec = GridAxisSpec::new(ColumnAlignment::Left).with_cells(3, 10.0, 5.0);
        let plan = plan_guides(&GridRequest::Columns(spec), canvas()).unwrap();

        assert_eq!(plan.axis, Axis::Columns);
        assert_eq!(plan.orientation(), Orientation::Vertical);
        assert_eq!(plan.start, 0.0);
        assert_eq!(plan.total_extent, 50.0);
        assert_eq!(
            coordinates(&plan.guides),
            vec![0.0, 5.0, 15.0, 20.0, 30.0, 35.0, 45.0, 50.0]
        );
        assert!(plan.center_guides.is_empty());
    }

    #[test]
    fn test_plan_with_center_guides() {
        let spec = GridAxisSpec::new(ColumnAlignment::Left)
            .with_cells(3, 10.0, 5.0)
            .with_center_guides(true);
        let plan = plan_guides(&GridRequest::Columns(spec), canvas()).unwrap();

        assert_eq!(coordinates(&plan.center_guides), vec![2.5, 17.5, 32.5, 47.5]);
        assert_eq!(plan.len(), 12);
        // Center guides follow the gutter guides
        assert_eq!(plan.iter().nth(8).map(|g| g.coordinate), Some(2.5));
    }

    #[test]
    fn test_plan_center_guides_need_gutter() {
        let spec = GridAxisSpec::new(ColumnAlignment::Left)
            .with_cells(3, 10.0, 0.0)
            .with_center_guides(true);
        let plan = plan_guides(&GridRequest::Columns(spec), canvas()).unwrap();

        assert_eq!(plan.guides.len(), 8);
        assert!(plan.center_guides.is_empty());
    }

    #[test]
    fn test_plan_right_columns_with_offset() {
        // 80 = 4 * 15 + 5 * 4
        let spec = GridAxisSpec::new(ColumnAlignment::Right)
            .with_offset(5.0)
            .with_cells(4, 15.0, 4.0);
        let plan = plan_axis(&spec, canvas()).unwrap();

        assert_eq!(plan.total_extent, 80.0);
        assert_eq!(plan.start, 125.0);
        assert_eq!(plan.guides.last().map(|g| g.coordinate), Some(205.0));
    }

    #[test]
    fn test_plan_top_rows() {
        // 100 = 4 * 20 + 5 * 4
        let spec = GridAxisSpec::new(RowAlignment::Top)
            .with_offset(10.0)
            .with_cells(4, 20.0, 4.0);
        let plan = plan_guides(&GridRequest::Rows(spec), canvas()).unwrap();

        assert_eq!(plan.axis, Axis::Rows);
        assert_eq!(plan.start, 190.0);
        assert!(plan.guides.iter().all(|g| g.orientation == Orientation::Horizontal));
        // Topmost guide sits one offset below the canvas top
        assert_eq!(plan.guides.last().map(|g| g.coordinate), Some(290.0));
    }

    #[test]
    fn test_plan_applies_unit_scale() {
        let spec = GridAxisSpec::new(ColumnAlignment::Left)
            .with_unit_scale(LengthUnit::In.scale())
            .with_offset(1.0)
            .with_cells(1, 2.0, 0.5)
            .with_outer_gutter(true);
        let plan = plan_axis(&spec, CanvasExtent::new(816.0, 1056.0).unwrap()).unwrap();

        assert_eq!(plan.start, 96.0);
        assert_eq!(coordinates(&plan.guides), vec![96.0, 144.0, 336.0, 384.0]);
    }

    #[test]
    fn test_plan_empty_grid() {
        for outer in [true, false] {
            let spec = GridAxisSpec::new(RowAlignment::Centered)
                .with_cells(0, 10.0, 5.0)
                .with_outer_gutter(outer)
                .with_center_guides(true);
            let plan = plan_axis(&spec, canvas()).unwrap();
            assert!(plan.is_empty());
        }
    }

    #[test]
    fn test_plan_rejects_invalid_spec() {
        let spec = GridAxisSpec::new(ColumnAlignment::Left).with_cells(3, 10.0, -5.0);
        assert!(matches!(
            plan_axis(&spec, canvas()),
            Err(ConfigurationError::Negative { field: "gutter", .. })
        ));

        let spec = GridAxisSpec::new(RowAlignment::Top).with_unit_scale(-1.0);
        assert!(plan_guides(&GridRequest::Rows(spec), canvas()).is_err());
    }

    #[test]
    fn test_plan_is_repeatable() {
        let spec = GridAxisSpec::new(ColumnAlignment::Centered)
            .with_cells(12, 13.3, 4.1)
            .with_center_guides(true);
        let request = GridRequest::Columns(spec);
        assert_eq!(
            plan_guides(&request, canvas()).unwrap(),
            plan_guides(&request, canvas()).unwrap()
        );
    }
}
