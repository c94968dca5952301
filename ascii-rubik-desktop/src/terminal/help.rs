//! The help screen, shown over the cube when the user presses `h`.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear, Paragraph, Tabs, Widget, Wrap};

use ascii_rubik::input::Key;

const TITLE: &str = "Robust Reindeers - Rubik's Cube Help";

/// One page of help.
#[derive(Clone, Copy, Debug)]
struct HelpSection {
    name: &'static str,
    text: &'static str,
}

const SECTIONS: [HelpSection; 4] = [
    HelpSection {
        name: "Overview",
        text: "A Rubik's cube drawn with text, right in your terminal.\n\n\
            Twist its layers with the keyboard and look at it from any side with the \
            mouse. The cube starts out solved, with one color on each face; the status \
            line says \"solved\" whenever you get it back to that state.\n\n\
            The small diagram in the bottom right corner shows all six faces unfolded, \
            so you can see the stickers which are facing away from you.",
    },
    HelpSection {
        name: "Mouse Movements",
        text: "Moving the mouse turns the view of the cube.\n\n\
            Moving across the whole width of the terminal takes you all the way around \
            the cube, and moving from the top to the bottom turns it upside down.\n\n\
            Click to stop following the mouse, so that you can move the pointer without \
            disturbing the view. Click again to start following it from where you \
            clicked.",
    },
    HelpSection {
        name: "Keyboard Commands",
        text: "Each layer of the cube has a letter. The lowercase letter turns the layer \
            a quarter turn counterclockwise and the uppercase letter turns it clockwise, \
            as seen when looking at that side of the cube.\n\n\
            f/F  Front\n\
            m/M  Middle (between front and back)\n\
            b/B  Back\n\
            t/T  Top\n\
            d/D  Bottom\n\
            l/L  Left\n\
            r/R  Right\n\n\
            z    Reset the view\n\
            h    Show this help\n\
            q/Q  Quit (so do Esc and Ctrl+C)",
    },
    HelpSection {
        name: "More Info",
        text: "Settings are kept in settings.json in your configuration directory, which \
            is created the first time you play. Any setting can be changed for one game \
            with --set NAME=JSON; for example, --set wireframe=true outlines every \
            cubelet.\n\n\
            Messages about what happened are written to cube.log, unless --log-file or \
            --no-log-file says otherwise.\n\n\
            Run ascii-rubik --help for all command-line options.",
    },
];

/// What to do after the help screen has handled a key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HelpAction {
    /// Keep showing help.
    Stay,
    /// Go back to the cube.
    Close,
    /// Stop the program.
    Quit,
}

/// State of the help screen: which section is showing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HelpScreen {
    selected: usize,
}

impl HelpScreen {
    /// Shows the first section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the section being shown.
    pub fn section_name(&self) -> &'static str {
        SECTIONS[self.selected].name
    }

    /// Responds to a key: arrows, Tab, and digits pick a section; Esc, Enter and `q` go
    /// back to the cube.
    pub fn handle_key(&mut self, key: Key) -> HelpAction {
        let count = SECTIONS.len();
        match key {
            Key::Escape | Key::Enter | Key::Character('q' | 'Q' | 'h') => {
                return HelpAction::Close;
            }
            Key::Interrupt => return HelpAction::Quit,
            Key::Right | Key::Down | Key::Tab => self.selected = (self.selected + 1) % count,
            Key::Left | Key::Up => self.selected = (self.selected + count - 1) % count,
            Key::Character(c) => {
                if let Some(index) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                    if index < count {
                        self.selected = index;
                    }
                }
            }
        }
        HelpAction::Stay
    }
}

impl Widget for &HelpScreen {
    /// Draws the help as a box covering the middle two thirds of `area`.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Rect::new(
            area.x + area.width / 6,
            area.y + area.height / 6,
            area.width * 2 / 3,
            area.height * 2 / 3,
        );
        Clear.render(popup, buf);
        let block = Block::bordered().title(TITLE);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let [tabs_rect, text_rect, footer_rect] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        Tabs::new(SECTIONS.iter().map(|section| section.name))
            .select(self.selected)
            .highlight_style(Style::new().add_modifier(Modifier::REVERSED))
            .render(tabs_rect, buf);
        let section = SECTIONS[self.selected];
        Paragraph::new(format!("{}::\n{}", section.name, section.text))
            .wrap(Wrap { trim: false })
            .render(text_rect, buf);
        Paragraph::new("←/→: choose a section    Esc: return to the cube")
            .render(footer_rect, buf);
    }
}
