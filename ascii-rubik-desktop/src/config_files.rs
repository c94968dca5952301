use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use directories_next::ProjectDirs;
use serde::{Serialize, de::DeserializeOwned};

use crate::settings::{Settings, SettingsError};

// -------------------------------------------------------------------------------------------------

/// Load settings files from a platform-appropriate read/write location.
///
/// This does not respect command-line options. Use [`SettingsArgs`] for that.
pub fn load_config() -> Result<Settings, anyhow::Error> {
    if std::env::var("ASCII_RUBIK_DO_NOT_USE_CONFIG_FILES_IN_TESTS").is_ok() {
        anyhow::bail!(
            "tests should be hermetic and not touch user config files \
            (environment variable ASCII_RUBIK_DO_NOT_USE_CONFIG_FILES_IN_TESTS set, \
            but --no-config-files not passed)"
        );
    }

    let project_dirs = ProjectDirs::from("org", "robust-reindeers", "ascii-rubik")
        .ok_or_else(|| anyhow::anyhow!("could not find configuration directory"))?;
    load_config_from(project_dirs.config_dir())
}

/// Load settings from `settings.json` in `config_dir`, creating both if they are missing.
pub(crate) fn load_config_from(config_dir: &Path) -> Result<Settings, anyhow::Error> {
    fs::create_dir_all(config_dir).with_context(|| {
        format!(
            "could not create configuration directory {}",
            config_dir.display()
        )
    })?;

    let settings = read_or_create_default_json_file(
        "settings",
        &config_dir.join("settings.json"),
        Settings::default,
    );
    match settings.validate() {
        Ok(settings) => Ok(settings),
        Err(e) => {
            log::warn!("Ignoring settings file: {e}");
            Ok(Settings::default())
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// [`clap::Args`] argument group struct for args that affect what settings are used.
#[derive(Clone, Debug, clap::Args)]
pub struct SettingsArgs {
    /// Ignore all configuration files, using only defaults and command-line options.
    #[arg(long = "no-config-files")]
    pub(crate) no_config_files: bool,

    /// Override the value of a setting for this session, instead of taking it from files
    /// or defaults.
    ///
    /// The value is specified as a key-value pair where the key is an unquoted string, the
    /// separator is “=”, and the value is a JSON value (which, if a string, must be quoted);
    /// for example: -Scolors='"rgb"'
    #[arg(long = "set", short = 'S', value_parser = parse_configure, value_name="NAME=JSON")]
    pub(crate) set: Vec<(String, serde_json::Value)>,
}

impl SettingsArgs {
    /// Constructs the [`Settings`] a session with these args should use.
    pub fn build_settings(self) -> Result<Settings, anyhow::Error> {
        let persisted_settings = if self.no_config_files {
            Settings::default()
        } else {
            load_config().context("Error loading configuration files")?
        };
        self.apply_overrides(persisted_settings)
            .context("--set did not produce valid settings")
    }

    fn apply_overrides(self, settings: Settings) -> Result<Settings, SettingsError> {
        if self.set.is_empty() {
            return Ok(settings);
        }
        let mut current_settings = match serde_json::to_value(settings) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(_) => unreachable!("settings should appear as a json object"),
            Err(e) => return Err(SettingsError::Invalid(e)),
        };
        for (key, value) in self.set {
            current_settings.insert(key, value);
        }
        serde_json::from_value::<Settings>(serde_json::Value::Object(current_settings))
            .map_err(SettingsError::Invalid)?
            .validate()
    }
}

fn parse_configure(arg: &str) -> Result<(String, serde_json::Value), SettingsError> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| SettingsError::MissingEquals(arg.to_owned()))?;
    let value = serde_json::from_str(value).map_err(|source| SettingsError::ValueSyntax {
        name: key.to_owned(),
        source,
    })?;
    Ok((key.to_owned(), value))
}

// -------------------------------------------------------------------------------------------------

fn read_or_create_default_json_file<V: DeserializeOwned + Serialize>(
    description: &str,
    path: &Path,
    default: fn() -> V,
) -> V {
    match File::open(path) {
        Ok(file) => match serde_json::from_reader(BufReader::new(file)) {
            Ok(value) => {
                log::trace!("Loaded {description} from {path}", path = path.display());
                value
            }
            Err(e) => {
                log::warn!(
                    "Syntax error in {description} loaded from {path}; \
                    using default values. Error: {e}",
                    path = path.display(),
                );
                default()
            }
        },
        Err(open_for_read_error) if open_for_read_error.kind() == std::io::ErrorKind::NotFound => {
            log::info!(
                "No {description} file found; creating {path}",
                path = path.display()
            );
            let value = default();
            let written = serde_json::to_string_pretty(&value)
                .map_err(std::io::Error::from)
                .and_then(|json_text| fs::write(path, json_text.as_bytes()));
            match written {
                Ok(()) => log::trace!(
                    "Wrote default {description} to {path}",
                    path = path.display()
                ),
                Err(write_error) => {
                    log::error!(
                        "Error while writing default {description} file {path}: {write_error}",
                        path = path.display(),
                    );
                }
            }
            value
        }
        Err(e) => {
            log::error!(
                "Error while reading {description} file {path}: {e}",
                path = path.display(),
            );
            default()
        }
    }
}
