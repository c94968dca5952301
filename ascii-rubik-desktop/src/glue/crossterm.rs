#![allow(
    exported_private_dependencies,
    reason = "false positive on crossterm via ratatui"
)]

use ascii_rubik::input::{InputEvent, Key, MouseInput};
use ascii_rubik::math::size2;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Converts [`Event`] to [`InputEvent`].
///
/// Returns `None` if there is no corresponding value.
pub fn event_to_input(event: &Event) -> Option<InputEvent> {
    match *event {
        Event::Key(key_event) => event_to_key(key_event).map(InputEvent::Key),
        Event::Mouse(MouseEvent {
            kind, column, row, ..
        }) => {
            let buttons = match kind {
                MouseEventKind::Down(button) => 1 << map_mouse_button(button),
                MouseEventKind::Up(_) | MouseEventKind::Drag(_) | MouseEventKind::Moved => 0,
                _ => return None,
            };
            Some(InputEvent::Mouse(MouseInput {
                x: column,
                y: row,
                buttons,
            }))
        }
        Event::Resize(width, height) => Some(InputEvent::Resize(size2(width, height))),
        _ => None,
    }
}

fn event_to_key(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Key::Interrupt),
        // Shifted letters arrive already uppercase.
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => Some(Key::Character(c)),
        (_, KeyCode::Esc) => Some(Key::Escape),
        (_, KeyCode::Enter) => Some(Key::Enter),
        (_, KeyCode::Tab) => Some(Key::Tab),
        (_, KeyCode::Up) => Some(Key::Up),
        (_, KeyCode::Down) => Some(Key::Down),
        (_, KeyCode::Left) => Some(Key::Left),
        (_, KeyCode::Right) => Some(Key::Right),
        _ => None,
    }
}

pub fn map_mouse_button(button: MouseButton) -> u8 {
    match button {
        MouseButton::Left => 0,
        MouseButton::Right => 1,
        MouseButton::Middle => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 12,
            row: 5,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn letters_keep_case() {
        assert_eq!(
            event_to_input(&key(KeyCode::Char('f'), KeyModifiers::NONE)),
            Some(InputEvent::Key(Key::Character('f')))
        );
        assert_eq!(
            event_to_input(&key(KeyCode::Char('F'), KeyModifiers::SHIFT)),
            Some(InputEvent::Key(Key::Character('F')))
        );
        assert_eq!(
            event_to_input(&key(KeyCode::Char('f'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn control_c_interrupts() {
        assert_eq!(
            event_to_input(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Key(Key::Interrupt))
        );
        assert_eq!(
            event_to_input(&key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputEvent::Key(Key::Escape))
        );
    }

    #[test]
    fn key_release_ignored() {
        let mut event = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(event_to_input(&Event::Key(event)), None);
    }

    #[test]
    fn mouse_buttons() {
        assert_eq!(
            event_to_input(&mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(InputEvent::Mouse(MouseInput {
                x: 12,
                y: 5,
                buttons: 1
            }))
        );
        assert_eq!(
            event_to_input(&mouse(MouseEventKind::Down(MouseButton::Middle))),
            Some(InputEvent::Mouse(MouseInput {
                x: 12,
                y: 5,
                buttons: 4
            }))
        );
        assert_eq!(
            event_to_input(&mouse(MouseEventKind::Moved)),
            Some(InputEvent::Mouse(MouseInput {
                x: 12,
                y: 5,
                buttons: 0
            }))
        );
        assert_eq!(event_to_input(&mouse(MouseEventKind::ScrollUp)), None);
    }

    #[test]
    fn resize() {
        assert_eq!(
            event_to_input(&Event::Resize(100, 30)),
            Some(InputEvent::Resize(size2(100, 30)))
        );
    }
}
