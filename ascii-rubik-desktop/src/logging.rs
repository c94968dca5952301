//! Logging to a file, and to stderr when that does not interfere with the display.

use std::fs::{File, OpenOptions};
use std::path::PathBuf;

use anyhow::Context as _;
use log::Log as _;

/// Log file used in interactive mode when no other is given.
pub const DEFAULT_LOG_FILE: &str = "cube.log";

/// A [`clap::Args`] struct for options controlling log output.
#[derive(Clone, Debug, clap::Args)]
pub struct LoggingArgs {
    /// Additional logging, and logging to stderr in non-interactive modes.
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// File to append log messages to. [default in terminal mode: cube.log]
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Do not write a log file.
    #[arg(long = "no-log-file", conflicts_with = "log_file")]
    pub no_log_file: bool,

    /// Remove timestamps from logs so that they are closer to deterministic.
    ///
    /// This option is intended for internal tests only.
    #[arg(long = "simplify-log-format", hide = true)]
    pub(crate) simplify_log_format: bool,
}

impl LoggingArgs {
    /// Where to write the log file, if anywhere.
    ///
    /// `uses_terminal` is whether the program is about to take over the terminal, in which
    /// case the log file is the only place logs can go.
    pub fn log_file_path(&self, uses_terminal: bool) -> Option<PathBuf> {
        if self.no_log_file {
            None
        } else if let Some(path) = &self.log_file {
            Some(path.clone())
        } else if uses_terminal {
            Some(PathBuf::from(DEFAULT_LOG_FILE))
        } else {
            None
        }
    }
}

/// Install a [`log`] global logger based on user-provided `options`.
///
/// If `uses_terminal` is true, nothing is written to stderr, since that would disturb the
/// full-screen display.
pub fn install(options: &LoggingArgs, uses_terminal: bool) -> Result<(), anyhow::Error> {
    use log::LevelFilter::{Debug, Error, Off, Trace};

    let &LoggingArgs {
        verbose,
        simplify_log_format,
        ..
    } = options;

    let level = match verbose {
        false => Debug,
        true => Trace,
    };
    // Note: This has no target filters because `CubeLogger` calls `standard_filter()`.
    let config = simplelog::ConfigBuilder::new()
        .set_target_level(Off)
        .set_location_level(Off)
        .set_time_level(if simplify_log_format { Off } else { Error })
        .build();

    let stderr_logger = (verbose && !uses_terminal)
        .then(|| *simplelog::WriteLogger::new(level, config.clone(), std::io::stderr()));

    let file_logger = match options.log_file_path(uses_terminal) {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Some(*simplelog::WriteLogger::new(level, config, file))
        }
        None => None,
    };

    let max_level = if stderr_logger.is_some() || file_logger.is_some() {
        level
    } else {
        Off
    };

    log::set_boxed_logger(Box::new(CubeLogger {
        stderr_logger,
        file_logger,
    }))
    .context("failed to initialize logging")?;
    log::set_max_level(max_level);

    Ok(())
}

/// [`log::Log`] implementation that [`install()`] registers globally.
struct CubeLogger {
    stderr_logger: Option<simplelog::WriteLogger<std::io::Stderr>>,
    file_logger: Option<simplelog::WriteLogger<File>>,
}

impl log::Log for CubeLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        standard_filter(metadata)
            && (self.stderr_logger.as_ref().is_some_and(|l| l.enabled(metadata))
                || self.file_logger.as_ref().is_some_and(|l| l.enabled(metadata)))
    }

    fn log(&self, record: &log::Record<'_>) {
        if !standard_filter(record.metadata()) {
            return;
        }
        if let Some(stderr_logger) = &self.stderr_logger {
            stderr_logger.log(record);
        }
        if let Some(file_logger) = &self.file_logger {
            file_logger.log(record);
        }
    }

    fn flush(&self) {
        if let Some(stderr_logger) = &self.stderr_logger {
            stderr_logger.flush();
        }
        if let Some(file_logger) = &self.file_logger {
            file_logger.flush();
        }
    }
}

/// Filters out low-level messages from libraries which are not interesting when
/// debugging the cube.
fn standard_filter(metadata: &log::Metadata<'_>) -> bool {
    metadata.level() <= log::Level::Info
        || !(metadata.target().starts_with("mio::") || metadata.target().starts_with("crossterm"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser as _;
    use pretty_assertions::assert_eq;

    #[derive(Debug, clap::Parser)]
    struct Args {
        #[command(flatten)]
        logging: LoggingArgs,
    }

    fn parse(args: &[&str]) -> LoggingArgs {
        Args::try_parse_from(std::iter::once("test").chain(args.iter().copied()))
            .unwrap()
            .logging
    }

    #[test]
    fn log_file_defaults_only_in_terminal() {
        let args = parse(&[]);
        assert_eq!(args.log_file_path(true), Some(PathBuf::from("cube.log")));
        assert_eq!(args.log_file_path(false), None);
    }

    #[test]
    fn log_file_explicit() {
        let args = parse(&["--log-file", "elsewhere.log"]);
        assert_eq!(args.log_file_path(true), Some(PathBuf::from("elsewhere.log")));
        assert_eq!(args.log_file_path(false), Some(PathBuf::from("elsewhere.log")));
    }

    #[test]
    fn no_log_file() {
        let args = parse(&["--no-log-file"]);
        assert_eq!(args.log_file_path(true), None);
        assert!(
            Args::try_parse_from(["test", "--no-log-file", "--log-file", "x.log"]).is_err()
        );
    }

    #[test]
    fn filter() {
        let metadata = |level, target| {
            log::Metadata::builder()
                .level(level)
                .target(target)
                .build()
        };
        assert!(standard_filter(&metadata(
            log::Level::Trace,
            "ascii_rubik::assembly"
        )));
        assert!(!standard_filter(&metadata(log::Level::Trace, "mio::poll")));
        assert!(standard_filter(&metadata(log::Level::Warn, "mio::poll")));
    }
}
