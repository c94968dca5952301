use ratatui::crossterm::style::Color;

use ascii_rubik::StickerColor;

/// Which type of color control sequences to use.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// No color; faces are told apart by letters.
    None,
    /// The 8 basic terminal colors.
    #[default]
    Ansi,
    /// The 256-color palette.
    TwoFiftySix,
    /// 24-bit color.
    Rgb,
}

impl ColorMode {
    /// Convert a sticker color to a Crossterm [`Color`] value according to this mode.
    ///
    /// The input and output [`Option`]s have different meanings:
    ///
    /// * If the input color is [`None`] then the output is "reset"
    ///   (i.e. the "not colored" colors).
    /// * This function returns [`None`] if color is disabled and no color control
    ///   sequences should be produced; the input is ignored.
    pub fn convert(self, input: Option<StickerColor>) -> Option<Color> {
        match (input, self) {
            // Mode None produces no output no matter what.
            (_, ColorMode::None) => None,
            // Input None means Reset.
            (None, _) => Some(Color::Reset),
            (Some(color), ColorMode::Ansi) => Some(basic_color(color.ansi_index())),
            (Some(color), ColorMode::TwoFiftySix) => {
                // The 256-color palette consists of
                // * the original 16 "ANSI" colors,
                // * a 216-color 6×6×6 RGB color cube (unevenly divided) starting at index 16,
                // * and a grayscale ramp from index 232 to 255 (without black or white entries).
                // Sticker colors are all either saturated or white, so the cube suffices.
                fn srgb_to_216(x: u8) -> u8 {
                    match x {
                        0..=47 => 0,    // 0
                        48..=114 => 1,  // 95
                        115..=154 => 2, // 135
                        155..=194 => 3, // 175
                        195..=234 => 4, // 215
                        235..=255 => 5, // 255
                    }
                }

                let [r, g, b] = color.to_srgb8();
                Some(Color::AnsiValue(
                    16 + (srgb_to_216(r) * 6 + srgb_to_216(g)) * 6 + srgb_to_216(b),
                ))
            }
            (Some(color), ColorMode::Rgb) => {
                let [r, g, b] = color.to_srgb8();
                Some(Color::Rgb { r, g, b })
            }
        }
    }
}

/// Entry of the 8-color palette, as opposed to the bright variants which some terminals
/// also offer.
fn basic_color(index: u8) -> Color {
    match index {
        0 => Color::Black,
        1 => Color::DarkRed,
        2 => Color::DarkGreen,
        3 => Color::DarkYellow,
        4 => Color::DarkBlue,
        5 => Color::DarkMagenta,
        6 => Color::DarkCyan,
        _ => Color::Grey,
    }
}
