//! Starting coordinate of a grid along its axis.
//!
//! Columns run left to right. Rows run bottom-up: the canvas origin is its
//! bottom-left corner, so the row offset is subtracted rather than added.
//!
//! Only the canvas terms (and, for centering, the halved grid extent) are
//! rounded; the rounding is half-to-even, matching the host that defines
//! these placements. Non-integer canvases can therefore end up a fraction
//! of a unit off center, and that is the expected placement.

use std::fmt;

use gridguide_core::{Axis, ColumnAlignment, ConfigurationError, Orientation, RowAlignment};

/// An alignment mode tied to the axis it is valid for.
pub trait AxisAlignment: Copy + fmt::Debug {
    /// The axis this alignment applies to.
    const AXIS: Axis;

    /// Orientation of the guides produced along [`Self::AXIS`].
    fn orientation() -> Orientation {
        Self::AXIS.orientation()
    }

    /// Compute the coordinate where the grid begins.
    fn resolve_start(self, canvas_extent: f64, total_extent: f64, offset: f64) -> f64;
}

impl AxisAlignment for ColumnAlignment {
    const AXIS: Axis = Axis::Columns;

    fn resolve_start(self, canvas_extent: f64, total_extent: f64, offset: f64) -> f64 {
        match self {
            ColumnAlignment::Left => offset,
            ColumnAlignment::Centered => {
                round(canvas_extent / 2.0) - round(total_extent / 2.0) + offset
            }
            ColumnAlignment::Right => canvas_extent - total_extent + offset,
        }
    }
}

impl AxisAlignment for RowAlignment {
    const AXIS: Axis = Axis::Rows;

    fn resolve_start(self, canvas_extent: f64, total_extent: f64, offset: f64) -> f64 {
        match self {
            RowAlignment::Top => round(canvas_extent) - total_extent - offset,
            RowAlignment::Centered => {
                round(canvas_extent / 2.0) - round(total_extent / 2.0) - offset
            }
            RowAlignment::Bottom => 0.0 - offset,
        }
    }
}

/// Compute the starting coordinate for a typed alignment.
pub fn resolve_start<A: AxisAlignment>(
    alignment: A,
    canvas_extent: f64,
    total_extent: f64,
    offset: f64,
) -> f64 {
    alignment.resolve_start(canvas_extent, total_extent, offset)
}

/// Compute the starting coordinate from an alignment name on the given axis.
///
/// Fails if the name is not an alignment of that axis (`"top"` is not a
/// column alignment, for instance).
pub fn resolve_start_named(
    axis: Axis,
    alignment: &str,
    canvas_extent: f64,
    total_extent: f64,
    offset: f64,
) -> Result<f64, ConfigurationError> {
    Ok(match axis {
        Axis::Columns => resolve_start(
            alignment.parse::<ColumnAlignment>()?,
            canvas_extent,
            total_extent,
            offset,
        ),
        Axis::Rows => resolve_start(
            alignment.parse::<RowAlignment>()?,
            canvas_extent,
            total_extent,
            offset,
        ),
    })
}

fn round(value: f64) -> f64 {
    value.round_ties_even()
}
