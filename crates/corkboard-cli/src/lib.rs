//! CLI logic for the Corkboard board arranger.
//!
//! Loads a board file, arranges its panels, optionally fits the canvas, and
//! writes the arranged board back out.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use corkboard::{CorkboardError, Workspace, arrange::ArrangeStrategy};

/// Run the Corkboard CLI application
///
/// # Errors
///
/// Returns `CorkboardError` for:
/// - File I/O errors
/// - Configuration loading errors and unknown strategy names
/// - Rejected board files
/// - Export errors
pub fn run(args: &Args) -> Result<(), CorkboardError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing board"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;

    if let Some(name) = &args.strategy {
        let strategy: ArrangeStrategy = name
            .parse()
            .map_err(|err| CorkboardError::Config(format!("{err}: `{name}`")))?;
        let arrange = app_config.arrange().clone().with_strategy(strategy);
        app_config = app_config.with_arrange(arrange);
    }

    let source = fs::read_to_string(&args.input)?;

    let mut workspace = Workspace::new(app_config);
    let count = workspace.load_json(&source)?;
    workspace.auto_arrange_default();

    if args.fit {
        let viewport = workspace.config().canvas().viewport();
        if workspace.fit_to_content(viewport) {
            let canvas = workspace.canvas();
            info!(
                scale = canvas.scale(),
                offset_x = canvas.offset().x(),
                offset_y = canvas.offset().y();
                "Canvas fitted to content"
            );
        }
    }

    let json = workspace.export_json()?;
    fs::write(&args.output, json)?;

    info!(output_file = args.output, panels = count; "Board exported successfully");

    Ok(())
}
