//! Conversion functions for specific input sources.
//!
//! This module includes only straightforward mappings and excludes application behavior
//! choices.

pub(crate) mod crossterm;
