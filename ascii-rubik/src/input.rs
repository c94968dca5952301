//! Input events, key bindings, and mouse drag tracking.

use core::fmt;

use crate::assembly::Layer;
use crate::math::{ScreenPoint, ScreenSize, ScreenVector, point2};

/// A platform-independent input event, as delivered to
/// [`Session::handle_event()`](crate::session::Session::handle_event).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InputEvent {
    /// A key was pressed.
    Key(Key),
    /// The mouse moved or a button was pressed or released.
    Mouse(MouseInput),
    /// The display changed size.
    Resize(ScreenSize),
    /// Nothing happened before the frame interval elapsed.
    Tick,
}

/// A key on the keyboard.
///
/// Unlike many key types, letters are case-sensitive, since the case of a twist key
/// selects the direction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Key {
    /// A key which produces a printable character.
    Character(char),
    /// Escape key.
    Escape,
    /// Control-C or another platform-specific request to stop.
    Interrupt,
    /// Enter or return key.
    Enter,
    /// Tab key.
    Tab,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Character(c) => write!(f, "{c:?}"),
            Key::Escape => f.pad("Esc"),
            Key::Interrupt => f.pad("^C"),
            Key::Enter => f.pad("Enter"),
            Key::Tab => f.pad("Tab"),
            Key::Left => f.pad("Left"),
            Key::Right => f.pad("Right"),
            Key::Up => f.pad("Up"),
            Key::Down => f.pad("Down"),
        }
    }
}

/// Mouse state reported by one mouse event.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct MouseInput {
    /// Column of the mouse pointer.
    pub x: u16,
    /// Row of the mouse pointer.
    pub y: u16,
    /// Bit mask of buttons which were just pressed; zero for movement and releases.
    pub buttons: u8,
}

impl MouseInput {
    /// Mouse position as a screen point.
    pub fn position(self) -> ScreenPoint {
        point2(f64::from(self.x), f64::from(self.y))
    }
}

/// What the user asked for by pressing a key.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Command {
    /// Turn a layer of the cube a quarter turn.
    Twist {
        #[allow(missing_docs)]
        layer: Layer,
        /// As seen from the positive end of the layer's axis.
        clockwise: bool,
    },
    /// Return the camera to its initial position.
    ResetView,
    /// Show the help screen.
    Help,
    /// Stop the program.
    Quit,
}

/// Letters which twist layers. The lowercase letter twists counterclockwise and the
/// uppercase letter twists clockwise.
pub const TWIST_KEYS: [(char, Layer); 7] = [
    ('f', Layer::FRONT),
    ('m', Layer::MIDDLE),
    ('b', Layer::BACK),
    ('t', Layer::TOP),
    ('d', Layer::BOTTOM),
    ('l', Layer::LEFT),
    ('r', Layer::RIGHT),
];

impl Command {
    /// Returns the command bound to `key`, if any.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Character('z') => Some(Command::ResetView),
            Key::Character('h') => Some(Command::Help),
            Key::Character('q' | 'Q') | Key::Escape | Key::Interrupt => Some(Command::Quit),
            Key::Character(c) => {
                let lower = c.to_ascii_lowercase();
                TWIST_KEYS
                    .iter()
                    .find(|&&(k, _)| k == lower)
                    .map(|&(_, layer)| Command::Twist {
                        layer,
                        clockwise: c.is_ascii_uppercase(),
                    })
            }
            _ => None,
        }
    }
}

/// Short summary of the controls, shown alongside the cube.
pub const BRIEF_HELP_TEXT: &str = "\
 Rotate Front: f/F;
 Rotate Middle: m/M;
 Rotate Back: b/B;
 Rotate Top: t/T;
 Rotate Bottom: d/D;
 Rotate Left: l/L;
 Rotate Right: r/R;
 Reset View: z;
 Show HELP: h;
 Quit: q/Q;
 Mouse Click: Enable/disable free rotation of the cube;
 Mouse Drag: Rotate the cube;";

/// Tracks mouse movement for orbiting the camera.
///
/// Clicking toggles whether movement is tracked. While it is, the movement since the
/// previous event is added to a running total, which is what
/// [`Camera::update_from_drag()`](crate::camera::Camera::update_from_drag) wants.
#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    enabled: bool,
    start: ScreenPoint,
    accumulated: ScreenVector,
}

impl DragState {
    /// Tracking starts out enabled, with no movement accumulated.
    pub fn new() -> Self {
        Self {
            enabled: true,
            start: ScreenPoint::origin(),
            accumulated: ScreenVector::zero(),
        }
    }

    /// Handles a button press at `at`: toggles tracking and makes `at` the point which
    /// later movement is measured from. Returns whether tracking is now enabled.
    pub fn press(&mut self, at: ScreenPoint) -> bool {
        self.enabled = !self.enabled;
        self.start = at;
        self.enabled
    }

    /// Handles movement to `to`. Returns the new running total if tracking is enabled,
    /// or [`None`] if the movement was ignored.
    pub fn motion(&mut self, to: ScreenPoint) -> Option<ScreenVector> {
        if !self.enabled {
            return None;
        }
        self.accumulated += to - self.start;
        self.start = to;
        Some(self.accumulated)
    }

    /// Forgets all accumulated movement.
    pub fn clear(&mut self) {
        self.accumulated = ScreenVector::zero();
    }

    /// Whether movement is currently being tracked.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Total tracked movement.
    pub fn accumulated(&self) -> ScreenVector {
        self.accumulated
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case('f', Layer::FRONT)]
    #[case('m', Layer::MIDDLE)]
    #[case('b', Layer::BACK)]
    #[case('t', Layer::TOP)]
    #[case('d', Layer::BOTTOM)]
    #[case('l', Layer::LEFT)]
    #[case('r', Layer::RIGHT)]
    fn twist_bindings(#[case] letter: char, #[case] layer: Layer) {
        assert_eq!(
            Command::from_key(Key::Character(letter)),
            Some(Command::Twist {
                layer,
                clockwise: false
            })
        );
        assert_eq!(
            Command::from_key(Key::Character(letter.to_ascii_uppercase())),
            Some(Command::Twist {
                layer,
                clockwise: true
            })
        );
    }

    #[rstest]
    #[case(Key::Character('z'), Some(Command::ResetView))]
    #[case(Key::Character('h'), Some(Command::Help))]
    #[case(Key::Character('q'), Some(Command::Quit))]
    #[case(Key::Character('Q'), Some(Command::Quit))]
    #[case(Key::Escape, Some(Command::Quit))]
    #[case(Key::Interrupt, Some(Command::Quit))]
    #[case(Key::Character('x'), None)]
    #[case(Key::Character('Z'), None)]
    #[case(Key::Character('1'), None)]
    #[case(Key::Up, None)]
    fn other_bindings(#[case] key: Key, #[case] expected: Option<Command>) {
        assert_eq!(Command::from_key(key), expected);
    }

    #[test]
    fn brief_help_mentions_every_twist_key() {
        for (letter, layer) in TWIST_KEYS {
            let name = layer.name().unwrap();
            let expected = format!(
                "Rotate {}{}: {letter}/{}",
                name[..1].to_ascii_uppercase(),
                &name[1..],
                letter.to_ascii_uppercase()
            );
            assert!(BRIEF_HELP_TEXT.contains(&expected), "{expected}");
        }
    }

    #[test]
    fn key_display() {
        assert_eq!(
            format!("{} {} {}", Key::Character('F'), Key::Escape, Key::Interrupt),
            "'F' Esc ^C"
        );
    }

    #[test]
    fn drag_accumulates_while_enabled() {
        let mut drag = DragState::new();
        assert!(drag.is_enabled());
        assert_eq!(drag.motion(point2(3., 1.)), Some(vec2(3., 1.)));
        assert_eq!(drag.motion(point2(5., 0.)), Some(vec2(5., 0.)));
        assert_eq!(drag.accumulated(), vec2(5., 0.));
    }

    #[test]
    fn press_toggles_and_restarts() {
        let mut drag = DragState::new();
        drag.motion(point2(4., 4.));

        assert!(!drag.press(point2(10., 10.)));
        assert_eq!(drag.motion(point2(20., 20.)), None);
        assert_eq!(drag.accumulated(), vec2(4., 4.));

        assert!(drag.press(point2(30., 30.)));
        assert_eq!(drag.motion(point2(31., 28.)), Some(vec2(5., 2.)));
    }

    #[test]
    fn clear_keeps_mode() {
        let mut drag = DragState::new();
        drag.motion(point2(4., 4.));
        drag.clear();
        assert_eq!(drag.accumulated(), vec2(0., 0.));
        assert!(drag.is_enabled());
        assert_eq!(drag.motion(point2(5., 4.)), Some(vec2(1., 0.)));
    }
}
