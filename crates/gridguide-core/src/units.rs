//! Length units and their scale factors to user units.

use std::str::FromStr;

use crate::errors::ConfigurationError;

/// User units per inch.
pub const USER_UNITS_PER_INCH: f64 = 96.0;

/// Units an option value or canvas dimension may be given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthUnit {
    /// User units (pixels)
    Px,
    /// Points (1/72 inch)
    Pt,
    /// Picas (12 points)
    Pc,
    /// Millimeters
    Mm,
    /// Centimeters
    Cm,
    /// Meters
    M,
    /// Inches
    In,
    /// Feet
    Ft,
    /// Yards
    Yd,
}

impl LengthUnit {
    /// Number of user units in one of this unit.
    pub fn scale(&self) -> f64 {
        match self {
            LengthUnit::Px => 1.0,
            LengthUnit::Pt => USER_UNITS_PER_INCH / 72.0,
            LengthUnit::Pc => USER_UNITS_PER_INCH / 6.0,
            LengthUnit::Mm => USER_UNITS_PER_INCH / 25.4,
            LengthUnit::Cm => USER_UNITS_PER_INCH / 2.54,
            LengthUnit::M => USER_UNITS_PER_INCH / 0.0254,
            LengthUnit::In => USER_UNITS_PER_INCH,
            LengthUnit::Ft => USER_UNITS_PER_INCH * 12.0,
            LengthUnit::Yd => USER_UNITS_PER_INCH * 36.0,
        }
    }

    /// Convert a value in this unit to user units.
    pub fn to_user_units(&self, value: f64) -> f64 {
        value * self.scale()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
            LengthUnit::Mm => "mm",
            LengthUnit::Cm => "cm",
            LengthUnit::M => "m",
            LengthUnit::In => "in",
            LengthUnit::Ft => "ft",
            LengthUnit::Yd => "yd",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "px" => Ok(LengthUnit::Px),
            "pt" => Ok(LengthUnit::Pt),
            "pc" => Ok(LengthUnit::Pc),
            "mm" => Ok(LengthUnit::Mm),
            "cm" => Ok(LengthUnit::Cm),
            "m" => Ok(LengthUnit::M),
            "in" => Ok(LengthUnit::In),
            "ft" => Ok(LengthUnit::Ft),
            "yd" => Ok(LengthUnit::Yd),
            _ => Err(ConfigurationError::UnknownUnit { value: s.to_string() }),
        }
    }
}
