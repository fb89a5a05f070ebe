//! Length strings such as `210mm`, `8.5in` or a bare `800`.

use nom::{
    character::complete::{alpha0, multispace0},
    combinator::all_consuming,
    number::complete::double,
    sequence::{delimited, pair},
    IResult,
};

use gridguide_core::{ConfigurationError, LengthUnit};

/// Split a length into its number and (possibly empty) unit suffix.
fn length(input: &str) -> IResult<&str, (f64, &str)> {
    all_consuming(delimited(
        multispace0,
        pair(double, delimited(multispace0, alpha0, multispace0)),
        multispace0,
    ))(input)
}

/// Parse a length into user units. A bare number is already in user units.
pub fn parse_length(option: &str, value: &str) -> Result<f64, ConfigurationError> {
    let invalid = || ConfigurationError::InvalidLength {
        option: option.to_string(),
        value: value.to_string(),
    };

    let (_, (number, suffix)) = length(value).map_err(|_| invalid())?;
    if !number.is_finite() {
        return Err(invalid());
    }

    let unit = if suffix.is_empty() {
        LengthUnit::Px
    } else {
        suffix.parse::<LengthUnit>()?
    };
    Ok(unit.to_user_units(number))
}
