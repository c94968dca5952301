//! Terminal front end for [`ascii_rubik`]: settings, logging, and an interactive
//! full-screen session in a text terminal.
//!
//! This library exists mainly for the `ascii-rubik` binary in this package, and for the
//! convenience of testing its parts separately.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

mod config_files;
pub use config_files::{SettingsArgs, load_config};
mod glue;
pub mod logging;
mod settings;
pub use settings::{Settings, SettingsError};
pub mod terminal;
