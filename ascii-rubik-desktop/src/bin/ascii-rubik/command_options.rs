//! Command line option parsing.

use std::fmt::Write as _;
use std::str::FromStr;
use std::sync::LazyLock;

use clap::{Parser, ValueEnum};

use ascii_rubik::math::{ScreenSize, size2};
use ascii_rubik_desktop::SettingsArgs;
use ascii_rubik_desktop::logging::LoggingArgs;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "ascii-rubik", author, about, version,
    help_template = "\
{name} {version}
{author}
{about-with-newline}
{usage-heading}
    {usage}

{all-args}{after-help}",
)]
pub(crate) struct AsciiRubikArgs {
    #[arg(
        long = "graphics",
        short = 'g',
        default_value = "terminal",
        value_name = "mode",
        hide_possible_values = true,
        help = "Graphics/UI mode",
        long_help = &**GRAPHICS_HELP_LONG,
    )]
    pub(crate) graphics: GraphicsType,

    /// Size of the drawing in character cells, for --graphics=print.
    #[arg(long = "display-size", value_name = "W×H", default_value = "80x24")]
    pub(crate) display_size: DisplaySizeArg,

    #[command(flatten)]
    pub(crate) logging: LoggingArgs,

    #[command(flatten)]
    pub(crate) settings: SettingsArgs,
}

/// clap doesn't automatically compile the possible value help
/// (<https://github.com/clap-rs/clap/issues/3312>), so do it ourselves.
/// This is in a static so that it can become an `&'static str`.
static GRAPHICS_HELP_LONG: LazyLock<String> = LazyLock::new(|| {
    let pv_iter = GraphicsType::value_variants()
        .iter()
        .filter_map(|v| v.to_possible_value())
        .filter(|pv| !pv.is_hide_set());

    let max_width = pv_iter
        .clone()
        .map(|pv| pv.get_name().len())
        .max()
        .unwrap_or(0);

    let mut text = String::from("Graphics/UI mode; one of the following keywords:\n");
    for pv in pv_iter {
        // Writing to a String cannot fail.
        let _ = write!(
            text,
            "\n* {:max_width$} — {}",
            pv.get_name(),
            pv.get_help().unwrap_or_default()
        );
    }
    text
});

#[derive(
    Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum, strum::EnumString, strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub(crate) enum GraphicsType {
    #[value(help = "Play in this terminal")]
    Terminal,

    #[value(help = "Non-interactive; print one frame like 'terminal' mode then exit")]
    Print,
}

impl GraphicsType {
    /// Whether this graphics type takes over the terminal, so that nothing else may
    /// print to stdout or stderr.
    pub(crate) fn uses_terminal(self) -> bool {
        match self {
            GraphicsType::Terminal => true,
            GraphicsType::Print => false,
        }
    }
}

/// Size of the text drawing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DisplaySizeArg(pub ScreenSize);

impl FromStr for DisplaySizeArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [width, height]: [u16; 2] = s
            .split(&['×', 'x', ',', ';', ' '][..])
            .map(|s| {
                s.parse::<u16>()
                    .map_err(|_| format!("{s:?} not an integer from 0 to 65535"))
            })
            .collect::<Result<Vec<u16>, String>>()?
            .try_into()
            .map_err(|_| String::from("must be two integers"))?;
        Ok(DisplaySizeArg(size2(width, height)))
    }
}
