//! Compute grid guides from host-style options.
//!
//! Usage:
//!   gridguide --canvas_width=210mm --canvas_height=297mm --columns=12 \
//!       --column_width=10 --column_gutter=5               # JSON to stdout
//!   gridguide ... --format=svg --output=guides.svg         # SVG named view to file
//!
//! Set `RUST_LOG=debug` to see every option and the computed start.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use gridguide_cli::{run, GridOptions};
use gridguide_core::{ExportError, GuideError};
use log::{error, info};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), GuideError> {
    let options = GridOptions::from_args(env::args().skip(1))?;
    let rendered = run(&options)?;

    match &options.output {
        Some(path) => {
            fs::write(path, &rendered).map_err(ExportError::from)?;
            info!("Written: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .map_err(ExportError::from)?;
        }
    }
    Ok(())
}
