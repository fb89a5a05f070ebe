//! Option source for grid guide placement.
//!
//! Reads host-style options, validates them into a [`GridRequest`], plans the
//! guides and renders them as JSON or as an SVG named view.
//!
//! [`GridRequest`]: gridguide_core::GridRequest

pub mod length;
pub mod options;

use gridguide_core::GuideError;
use gridguide_export::{apply_plan, export_json, NamedView};
use gridguide_layout::plan_guides;
use log::info;

pub use options::{AxisOptions, GridOptions, OutputFormat};

/// Plan the guides for the selected axis and render them.
pub fn run(options: &GridOptions) -> Result<String, GuideError> {
    let request = options.request()?;
    let canvas = options.canvas()?;
    let plan = plan_guides(&request, canvas)?;
    info!(
        "{} grid starts at {} and spans {}",
        plan.axis, plan.start, plan.total_extent
    );

    let rendered = match options.format {
        OutputFormat::Json => export_json(&plan, options.delete_existing())?,
        OutputFormat::Svg => {
            let mut view = NamedView::new();
            apply_plan(&plan, options.delete_existing(), &mut view)?;
            view.to_svg(canvas)
        }
    };
    Ok(rendered)
}
