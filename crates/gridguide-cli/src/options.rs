//! Host-style `--key=value` options and their validation into a request.
//!
//! Option names and defaults follow the guide extension dialog the values
//! come from: one block of options per axis plus a `tab` selector choosing
//! which axis is processed.

use std::path::PathBuf;
use std::str::FromStr;

use gridguide_core::{
    Axis, CanvasExtent, ColumnAlignment, ConfigurationError, GridAxisSpec, GridRequest,
    LengthUnit, RowAlignment,
};
use log::debug;

use crate::length::parse_length;

/// How the computed guides are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Svg,
}

impl FromStr for OutputFormat {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(ConfigurationError::UnknownOption {
                name: format!("format={s}"),
            }),
        }
    }
}

/// Raw values for one axis, type-checked but not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisOptions {
    pub unit: LengthUnit,
    pub alignment: String,
    pub offset: f64,
    pub count: f64,
    pub size: f64,
    pub gutter: f64,
    pub include_center_guides: bool,
    pub include_outer_gutter: bool,
    pub delete_existing: bool,
}

impl AxisOptions {
    /// Column defaults: no center guides.
    pub fn columns() -> Self {
        Self {
            unit: LengthUnit::Mm,
            alignment: "centered".to_string(),
            offset: 0.0,
            count: 0.0,
            size: 0.0,
            gutter: 0.0,
            include_center_guides: false,
            include_outer_gutter: true,
            delete_existing: false,
        }
    }

    /// Row defaults: same as columns but with center guides on.
    pub fn rows() -> Self {
        Self {
            include_center_guides: true,
            ..Self::columns()
        }
    }

    /// Validate into a typed spec for alignment `A`.
    fn to_spec<A: FromStr<Err = ConfigurationError>>(
        &self,
    ) -> Result<GridAxisSpec<A>, ConfigurationError> {
        let alignment = self.alignment.parse::<A>()?;
        let spec = GridAxisSpec::new(alignment)
            .with_unit_scale(self.unit.scale())
            .with_offset(self.offset)
            .with_cells(parse_count(self.count)?, self.size, self.gutter)
            .with_outer_gutter(self.include_outer_gutter)
            .with_center_guides(self.include_center_guides);
        spec.validate()?;
        Ok(spec)
    }
}

/// Everything one invocation needs.
#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    pub tab: Option<Axis>,
    pub columns: AxisOptions,
    pub rows: AxisOptions,
    pub canvas_width: Option<f64>,
    pub canvas_height: Option<f64>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            tab: None,
            columns: AxisOptions::columns(),
            rows: AxisOptions::rows(),
            canvas_width: None,
            canvas_height: None,
            format: OutputFormat::default(),
            output: None,
        }
    }
}

impl GridOptions {
    /// Parse `--key=value` or `--key value` arguments (program name excluded).
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            let Some(stripped) = arg.strip_prefix("--") else {
                return Err(ConfigurationError::UnknownOption { name: arg.clone() });
            };
            let (key, value) = match stripped.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => {
                    let value = args.next().ok_or_else(|| ConfigurationError::MissingValue {
                        option: stripped.to_string(),
                    })?;
                    (stripped.to_string(), value)
                }
            };
            options.set(&key, &value)?;
        }

        Ok(options)
    }

    /// Apply a single option.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigurationError> {
        debug!("option {key}={value}");
        match key {
            "tab" => self.tab = Some(value.parse()?),
            "canvas_width" => self.canvas_width = Some(parse_length(key, value)?),
            "canvas_height" => self.canvas_height = Some(parse_length(key, value)?),
            "format" => self.format = value.parse()?,
            "output" => self.output = Some(PathBuf::from(value)),

            "column_unit" => self.columns.unit = value.parse()?,
            "column_alignment" => self.columns.alignment = value.trim().to_string(),
            "column_offset" => self.columns.offset = parse_number(key, value)?,
            "columns" => self.columns.count = parse_number(key, value)?,
            "column_width" => self.columns.size = parse_number(key, value)?,
            "column_gutter" => self.columns.gutter = parse_number(key, value)?,
            "include_center_col_guides" => {
                self.columns.include_center_guides = parse_bool(key, value)?
            }
            "include_outer_col_gutter" => self.columns.include_outer_gutter = parse_bool(key, value)?,
            "delete_vert_guides" => self.columns.delete_existing = parse_bool(key, value)?,

            "row_unit" => self.rows.unit = value.parse()?,
            "row_alignment" => self.rows.alignment = value.trim().to_string(),
            "row_offset" => self.rows.offset = parse_number(key, value)?,
            "rows" => self.rows.count = parse_number(key, value)?,
            "row_height" => self.rows.size = parse_number(key, value)?,
            "row_gutter" => self.rows.gutter = parse_number(key, value)?,
            "include_center_row_guides" => self.rows.include_center_guides = parse_bool(key, value)?,
            "include_outer_row_gutter" => self.rows.include_outer_gutter = parse_bool(key, value)?,
            "delete_hor_guides" => self.rows.delete_existing = parse_bool(key, value)?,

            _ => {
                return Err(ConfigurationError::UnknownOption {
                    name: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// The selected axis; columns unless a tab was given.
    pub fn axis(&self) -> Axis {
        self.tab.unwrap_or(Axis::Columns)
    }

    pub fn canvas(&self) -> Result<CanvasExtent, ConfigurationError> {
        let width = self
            .canvas_width
            .ok_or(ConfigurationError::MissingOption { name: "canvas_width" })?;
        let height = self
            .canvas_height
            .ok_or(ConfigurationError::MissingOption { name: "canvas_height" })?;
        CanvasExtent::new(width, height)
    }

    /// Build the request for the selected axis. Only that axis is validated.
    pub fn request(&self) -> Result<GridRequest, ConfigurationError> {
        Ok(match self.axis() {
            Axis::Columns => GridRequest::Columns(self.columns.to_spec::<ColumnAlignment>()?),
            Axis::Rows => GridRequest::Rows(self.rows.to_spec::<RowAlignment>()?),
        })
    }

    /// Whether existing guides of the selected axis' orientation are removed first.
    pub fn delete_existing(&self) -> bool {
        match self.axis() {
            Axis::Columns => self.columns.delete_existing,
            Axis::Rows => self.rows.delete_existing,
        }
    }
}

fn parse_number(option: &str, value: &str) -> Result<f64, ConfigurationError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigurationError::InvalidNumber {
            option: option.to_string(),
            value: value.to_string(),
        })
}

fn parse_bool(option: &str, value: &str) -> Result<bool, ConfigurationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigurationError::InvalidBool {
            option: option.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Counts arrive as floats; negative ones are rejected, the rest truncated.
fn parse_count(count: f64) -> Result<u32, ConfigurationError> {
    if !count.is_finite() {
        return Err(ConfigurationError::NonFinite { field: "count" });
    }
    if count < 0.0 {
        return Err(ConfigurationError::Negative { field: "count", value: count });
    }
    if count > f64::from(u32::MAX) {
        return Err(ConfigurationError::InvalidNumber {
            option: "count".to_string(),
            value: count.to_string(),
        });
    }
    Ok(count.trunc() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let options = GridOptions::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(options.axis(), Axis::Columns);
        assert_eq!(options.columns.unit, LengthUnit::Mm);
        assert_eq!(options.rows.alignment, "centered");
        assert!(options.columns.include_outer_gutter);
        assert!(!options.columns.include_center_guides);
        assert!(options.rows.include_center_guides);
        assert_eq!(options.format, OutputFormat::Json);

        let no_row_centers =
            GridOptions::from_args(args(&["--include_center_row_guides=false"])).unwrap();
        assert!(!no_row_centers.rows.include_center_guides);
    }

    #[test]
    fn test_parse_column_request() {
        let options = GridOptions::from_args(args(&[
            "--tab=\"columns\"",
            "--column_unit=px",
            "--column_alignment=left",
            "--columns=3",
            "--column_width=10",
            "--column_gutter",
            "5",
            "--include_center_col_guides=true",
            "--delete_vert_guides=True",
        ]))
        .unwrap();

        let GridRequest::Columns(spec) = options.request().unwrap() else {
            panic!("expected a column request");
        };
        assert_eq!(spec.alignment, ColumnAlignment::Left);
        assert_eq!(spec.count, 3);
        assert_eq!(spec.unit_scale, 1.0);
        assert!(spec.include_center_guides);
        assert!(options.delete_existing());
    }

    #[test]
    fn test_parse_row_request() {
        let options = GridOptions::from_args(args(&[
            "--tab=rows",
            "--row_unit=in",
            "--row_alignment=bottom",
            "--rows=2.9",
            "--row_height=1",
            "--include_outer_row_gutter=false",
            "--delete_vert_guides=true",
        ]))
        .unwrap();

        let GridRequest::Rows(spec) = options.request().unwrap() else {
            panic!("expected a row request");
        };
        assert_eq!(spec.alignment, RowAlignment::Bottom);
        assert_eq!(spec.count, 2);
        assert_eq!(spec.unit_scale, 96.0);
        assert!(!spec.include_outer_gutter);
        // The vertical delete flag belongs to the column tab
        assert!(!options.delete_existing());
    }

    #[test]
    fn test_only_selected_axis_is_validated() {
        let options = GridOptions::from_args(args(&[
            "--tab=columns",
            "--row_alignment=sideways",
            "--rows=-4",
        ]))
        .unwrap();
        assert!(options.request().is_ok());
    }

    #[test]
    fn test_configuration_errors() {
        assert!(matches!(
            GridOptions::from_args(args(&["--tab=grid"])),
            Err(ConfigurationError::UnknownAxis { .. })
        ));
        assert!(matches!(
            GridOptions::from_args(args(&["--columns=many"])),
            Err(ConfigurationError::InvalidNumber { .. })
        ));
        assert!(matches!(
            GridOptions::from_args(args(&["--include_outer_col_gutter=maybe"])),
            Err(ConfigurationError::InvalidBool { .. })
        ));
        assert!(matches!(
            GridOptions::from_args(args(&["--column_unit=parsec"])),
            Err(ConfigurationError::UnknownUnit { .. })
        ));
        assert!(matches!(
            GridOptions::from_args(args(&["--colour=red"])),
            Err(ConfigurationError::UnknownOption { .. })
        ));
        assert!(matches!(
            GridOptions::from_args(args(&["--columns"])),
            Err(ConfigurationError::MissingValue { .. })
        ));
        assert!(matches!(
            GridOptions::from_args(args(&["columns"])),
            Err(ConfigurationError::UnknownOption { .. })
        ));

        let negative = GridOptions::from_args(args(&["--columns=-1"])).unwrap();
        assert!(matches!(
            negative.request(),
            Err(ConfigurationError::Negative { field: "count", .. })
        ));

        let bad_alignment = GridOptions::from_args(args(&["--column_alignment=top"])).unwrap();
        assert!(matches!(
            bad_alignment.request(),
            Err(ConfigurationError::UnknownAlignment { .. })
        ));

        let negative_gutter = GridOptions::from_args(args(&["--column_gutter=-2"])).unwrap();
        assert!(matches!(
            negative_gutter.request(),
            Err(ConfigurationError::Negative { field: "gutter", .. })
        ));
    }

    #[test]
    fn test_canvas() {
        let options = GridOptions::from_args(args(&[
            "--canvas_width=210mm",
            "--canvas_height=297mm",
        ]))
        .unwrap();
        let canvas = options.canvas().unwrap();
        assert!((canvas.width - 210.0 * 96.0 / 25.4).abs() < 1e-9);
        assert!((canvas.height - 297.0 * 96.0 / 25.4).abs() < 1e-9);

        let missing = GridOptions::from_args(args(&["--canvas_width=10"])).unwrap();
        assert!(matches!(
            missing.canvas(),
            Err(ConfigurationError::MissingOption { name: "canvas_height" })
        ));

        let zero = GridOptions::from_args(args(&["--canvas_width=0", "--canvas_height=5"])).unwrap();
        assert!(matches!(zero.canvas(), Err(ConfigurationError::InvalidCanvas { .. })));
    }

    proptest! {
        #[test]
        fn prop_count_truncates(count in 0.0f64..100_000.0) {
            prop_assert_eq!(parse_count(count).unwrap(), count.trunc() as u32);
        }

        #[test]
        fn prop_negative_count_rejected(count in -100_000.0f64..-0.001) {
            prop_assert!(parse_count(count).is_err());
        }
    }
}
