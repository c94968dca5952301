//! [`Settings`]: user preferences which persist between runs.

use ascii_rubik::render::RenderOptions;

use crate::terminal::ColorMode;

/// User preferences, as stored in `settings.json` and overridden by `--set`.
///
/// Fields missing from the file take their default values.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Color escapes supported by the terminal.
    pub colors: ColorMode,
    /// Outline every cubelet.
    pub wireframe: bool,
    /// Show the sticker net in the bottom right corner.
    pub face_net: bool,
    /// Show the status line and key summary.
    pub status_line: bool,
    /// How long to wait for input before drawing another frame anyway.
    pub frame_interval_ms: u64,
    /// Distance from the center of the cube to the camera.
    pub camera_distance: f64,
}

/// Nearest the camera may be to the center of the cube: just outside its corners.
const MINIMUM_CAMERA_DISTANCE: f64 = 2.6;

impl Default for Settings {
    fn default() -> Self {
        Self {
            colors: ColorMode::default(),
            wireframe: false,
            face_net: true,
            status_line: true,
            frame_interval_ms: 100,
            camera_distance: ascii_rubik::camera::DISTANCE_TO_CAMERA,
        }
    }
}

impl Settings {
    /// Checks the values which have limits beyond what their types express.
    pub fn validate(self) -> Result<Self, SettingsError> {
        if !(self.camera_distance.is_finite() && self.camera_distance >= MINIMUM_CAMERA_DISTANCE)
        {
            return Err(SettingsError::CameraDistance {
                value: self.camera_distance,
            });
        }
        if self.frame_interval_ms == 0 {
            return Err(SettingsError::FrameInterval);
        }
        Ok(self)
    }

    /// The parts of the settings which control drawing.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            wireframe: self.wireframe,
            face_net: self.face_net,
            status_line: self.status_line,
        }
    }
}

/// Errors in settings given on the command line or read from a file.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// A `--set` argument without `=`.
    #[error("setting must be in the form NAME=JSON, not {0:?}")]
    MissingEquals(String),

    /// A `--set` value which is not JSON.
    #[error("value for setting {name:?} is not valid JSON")]
    ValueSyntax {
        #[allow(missing_docs)]
        name: String,
        #[allow(missing_docs)]
        #[source]
        source: serde_json::Error,
    },

    /// Settings whose names or value types are wrong.
    #[error("invalid settings")]
    Invalid(#[source] serde_json::Error),

    #[allow(missing_docs)]
    #[error(
        "camera_distance must be a number no less than {min}, not {value}",
        min = MINIMUM_CAMERA_DISTANCE
    )]
    CameraDistance { value: f64 },

    #[allow(missing_docs)]
    #[error("frame_interval_ms must be at least 1")]
    FrameInterval,
}
