//! Core value types for grid guide placement.

use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigurationError;

/// Upper bound on cells per axis.
pub const MAX_CELL_COUNT: u32 = 10_000;

/// Orientation of a guide line.
///
/// A vertical guide has an x coordinate, a horizontal guide a y coordinate
/// measured upward from the bottom-left corner of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The axis a grid is laid out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// Left-to-right, producing vertical guides.
    Columns,
    /// Bottom-up, producing horizontal guides.
    Rows,
}

impl Axis {
    /// The orientation of the guides drawn for this axis.
    pub fn orientation(&self) -> Orientation {
        match self {
            Axis::Columns => Orientation::Vertical,
            Axis::Rows => Orientation::Horizontal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Columns => "columns",
            Axis::Rows => "rows",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ConfigurationError;

    /// Parse a tab selector. Hosts pass the value wrapped in literal double
    /// quotes, so `"columns"` and `columns` are both accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(trimmed);
        match bare {
            "columns" => Ok(Axis::Columns),
            "rows" => Ok(Axis::Rows),
            _ => Err(ConfigurationError::UnknownAxis { value: s.to_string() }),
        }
    }
}

/// A single computed guide.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuidePosition {
    pub coordinate: f64,
    pub orientation: Orientation,
}

impl GuidePosition {
    pub fn new(coordinate: f64, orientation: Orientation) -> Self {
        Self { coordinate, orientation }
    }

    pub fn vertical(x: f64) -> Self {
        Self::new(x, Orientation::Vertical)
    }

    pub fn horizontal(y: f64) -> Self {
        Self::new(y, Orientation::Horizontal)
    }
}

/// Canvas dimensions, in the same user units as the scaled grid parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasExtent {
    pub width: f64,
    pub height: f64,
}

impl CanvasExtent {
    /// Create a canvas extent, rejecting non-positive or non-finite sizes.
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigurationError> {
        for (dimension, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigurationError::InvalidCanvas { dimension, value });
            }
        }
        Ok(Self { width, height })
    }

    /// The extent along the given axis: width for columns, height for rows.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Columns => self.width,
            Axis::Rows => self.height,
        }
    }
}

/// Horizontal placement of a column grid on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColumnAlignment {
    Left,
    #[default]
    Centered,
    Right,
}

impl FromStr for ColumnAlignment {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "left" => Ok(ColumnAlignment::Left),
            "centered" => Ok(ColumnAlignment::Centered),
            "right" => Ok(ColumnAlignment::Right),
            _ => Err(ConfigurationError::UnknownAlignment {
                axis: "column",
                value: s.to_string(),
            }),
        }
    }
}

/// Vertical placement of a row grid on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RowAlignment {
    Top,
    #[default]
    Centered,
    Bottom,
}

impl FromStr for RowAlignment {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "top" => Ok(RowAlignment::Top),
            "centered" => Ok(RowAlignment::Centered),
            "bottom" => Ok(RowAlignment::Bottom),
            _ => Err(ConfigurationError::UnknownAlignment {
                axis: "row",
                value: s.to_string(),
            }),
        }
    }
}

/// Grid parameters for one axis.
///
/// `offset`, `cell_size` and `gutter` are expressed in the option unit and
/// multiplied by `unit_scale` before use; `count` is never scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridAxisSpec<A> {
    pub unit_scale: f64,
    pub alignment: A,
    pub offset: f64,
    pub count: u32,
    pub cell_size: f64,
    pub gutter: f64,
    pub include_outer_gutter: bool,
    pub include_center_guides: bool,
}

impl<A: Default> Default for GridAxisSpec<A> {
    fn default() -> Self {
        Self::new(A::default())
    }
}

impl<A> GridAxisSpec<A> {
    /// An empty grid with unit scale 1 and outer gutters enabled.
    pub fn new(alignment: A) -> Self {
        Self {
            unit_scale: 1.0,
            alignment,
            offset: 0.0,
            count: 0,
            cell_size: 0.0,
            gutter: 0.0,
            include_outer_gutter: true,
            include_center_guides: false,
        }
    }

    pub fn with_unit_scale(mut self, unit_scale: f64) -> Self {
        self.unit_scale = unit_scale;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the number of cells, their size, and the gutter between them.
    pub fn with_cells(mut self, count: u32, cell_size: f64, gutter: f64) -> Self {
        self.count = count;
        self.cell_size = cell_size;
        self.gutter = gutter;
        self
    }

    pub fn with_outer_gutter(mut self, include: bool) -> Self {
        self.include_outer_gutter = include;
        self
    }

    pub fn with_center_guides(mut self, include: bool) -> Self {
        self.include_center_guides = include;
        self
    }

    /// Check the parameters before any computation uses them.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (field, value) in [
            ("unit scale", self.unit_scale),
            ("offset", self.offset),
            ("cell size", self.cell_size),
            ("gutter", self.gutter),
        ] {
            if !value.is_finite() {
                return Err(ConfigurationError::NonFinite { field });
            }
        }
        if self.count > MAX_CELL_COUNT {
            return Err(ConfigurationError::TooManyCells {
                count: self.count,
                max: MAX_CELL_COUNT,
            });
        }
        if self.unit_scale <= 0.0 {
            return Err(ConfigurationError::NonPositiveUnitScale { value: self.unit_scale });
        }
        if self.cell_size < 0.0 {
            return Err(ConfigurationError::Negative { field: "cell size", value: self.cell_size });
        }
        if self.gutter < 0.0 {
            return Err(ConfigurationError::Negative { field: "gutter", value: self.gutter });
        }
        Ok(())
    }

    pub fn scaled_offset(&self) -> f64 {
        self.offset * self.unit_scale
    }

    pub fn scaled_cell_size(&self) -> f64 {
        self.cell_size * self.unit_scale
    }

    pub fn scaled_gutter(&self) -> f64 {
        self.gutter * self.unit_scale
    }
}

/// One invocation's worth of grid parameters, tagged by axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "axis", rename_all = "lowercase"))]
pub enum GridRequest {
    Columns(GridAxisSpec<ColumnAlignment>),
    Rows(GridAxisSpec<RowAlignment>),
}

impl GridRequest {
    pub fn axis(&self) -> Axis {
        match self {
            GridRequest::Columns(_) => Axis::Columns,
            GridRequest::Rows(_) => Axis::Rows,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.axis().orientation()
    }
}
