//! Guide coordinates along one axis.
//!
//! Every gutter is bounded by a pair of guides ("double guide"): one at its
//! leading edge and one at its trailing edge. A zero gutter still yields both
//! guides, at the same coordinate.

use gridguide_core::{GuidePosition, Orientation};

/// Span consumed by the whole grid along its axis.
///
/// With outer gutters there is one gutter per cell plus one; without them
/// there is one fewer gutter than cells. For `count = 0` without outer
/// gutters the result is `-gutter`, which is what the alignment arithmetic
/// has always been fed in that case.
pub fn total_extent(count: u32, cell_size: f64, gutter: f64, include_outer_gutter: bool) -> f64 {
    let cells = f64::from(count);
    let gutters = if include_outer_gutter { cells + 1.0 } else { cells - 1.0 };
    cells * cell_size + gutters * gutter
}

/// Leading edge of every gutter in the grid, in ascending order.
fn gutter_edges(
    count: u32,
    cell_size: f64,
    gutter: f64,
    start: f64,
    include_outer_gutter: bool,
) -> impl Iterator<Item = f64> {
    let pitch = cell_size + gutter;
    let (first, edges) = match (count, include_outer_gutter) {
        (0, _) => (start, 0),
        (_, true) => (start, count + 1),
        (_, false) => (start + cell_size, count - 1),
    };
    (0..edges).map(move |k| first + f64::from(k) * pitch)
}

/// Enumerate the double guides bounding each gutter, starting at `start`.
///
/// Yields `2 * (count + 1)` positions with outer gutters and
/// `2 * (count - 1)` without; `count = 0` yields nothing either way.
pub fn enumerate_guides(
    count: u32,
    cell_size: f64,
    gutter: f64,
    start: f64,
    include_outer_gutter: bool,
    orientation: Orientation,
) -> Vec<GuidePosition> {
    gutter_edges(count, cell_size, gutter, start, include_outer_gutter)
        .flat_map(|edge| [edge, edge + gutter])
        .map(|coordinate| GuidePosition::new(coordinate, orientation))
        .collect()
}

/// Adjusted parameters for the center-guide pass.
///
/// The pass walks the grid with the gutter folded into the cell pitch and
/// a zero gutter, starting from the middle of the first gutter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterPass {
    /// Cell count for the pass; may be negative, which yields no guides
    pub count: i64,
    /// Cell size plus gutter
    pub cell_size: f64,
    /// Always zero
    pub gutter: f64,
    /// Midpoint of the first gutter
    pub start: f64,
}

impl CenterPass {
    /// Derive the pass from the main grid parameters.
    pub fn new(count: u32, cell_size: f64, gutter: f64, start: f64, include_outer_gutter: bool) -> Self {
        let (count, start) = if include_outer_gutter {
            (i64::from(count), start + gutter / 2.0)
        } else {
            (i64::from(count) - 2, start + gutter / 2.0 + cell_size)
        };
        Self {
            count,
            cell_size: cell_size + gutter,
            gutter: 0.0,
            start,
        }
    }

    /// One guide per gutter midpoint: `count + 1` positions, none if negative.
    pub fn positions(&self, orientation: Orientation) -> Vec<GuidePosition> {
        if self.count < 0 {
            return Vec::new();
        }
        (0..=self.count)
            .map(|k| GuidePosition::new(self.start + k as f64 * self.cell_size, orientation))
            .collect()
    }
}

/// Single guides centered inside every gutter of the grid.
///
/// The two outer gutters are included only when they exist. Nothing is
/// produced for a zero gutter or an empty grid.
pub fn center_guides(
    count: u32,
    cell_size: f64,
    gutter: f64,
    start: f64,
    include_outer_gutter: bool,
    orientation: Orientation,
) -> Vec<GuidePosition> {
    if gutter <= 0.0 || count == 0 {
        return Vec::new();
    }
    CenterPass::new(count, cell_size, gutter, start, include_outer_gutter).positions(orientation)
}
