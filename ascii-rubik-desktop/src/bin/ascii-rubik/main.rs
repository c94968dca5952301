//! Binary for playing the cube in a terminal.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

use clap::Parser as _;

use ascii_rubik_desktop::logging;
use ascii_rubik_desktop::terminal::{terminal_main_loop, terminal_print_once};

mod command_options;
use command_options::{AsciiRubikArgs, DisplaySizeArg, GraphicsType};

fn main() -> Result<(), anyhow::Error> {
    // Parse and transform command-line arguments.
    let options = AsciiRubikArgs::parse();
    // Destructure as a check that we're using/skipping all the args
    let AsciiRubikArgs {
        graphics: graphics_type,
        display_size: DisplaySizeArg(display_size),
        logging: logging_args,
        settings: settings_args,
    } = options;

    // Initialize logging -- telling it to stay off stderr in terminal mode.
    logging::install(&logging_args, graphics_type.uses_terminal())?;
    log::debug!(
        "ascii-rubik {} starting in {} mode",
        clap::crate_version!(),
        <&'static str>::from(graphics_type)
    );

    let settings = settings_args.build_settings()?;
    log::debug!("{settings:?}");

    match graphics_type {
        GraphicsType::Terminal => terminal_main_loop(&settings),
        GraphicsType::Print => terminal_print_once(&settings, display_size),
    }
}
