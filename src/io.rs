use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::canvas::DOT;
use crate::events::InputEvent;
use crate::events::Key;

/// Converts a crossterm event into an [`InputEvent`]. Mouse positions are mapped to the surface
/// pixel at the centre of the clicked dot.
pub fn convert_event(event: CrossTermEvent) -> Option<InputEvent> {
    match event {
        CrossTermEvent::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(InputEvent::Quit),
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => Some(InputEvent::KeyDown(Key::Confirm)),
            KeyEvent {
                code: KeyCode::Char(' '),
                ..
            } => Some(InputEvent::KeyDown(Key::Space)),
            KeyEvent {
                code: KeyCode::Esc, ..
            } => Some(InputEvent::KeyDown(Key::Escape)),
            KeyEvent {
                code: KeyCode::Up, ..
            } => Some(InputEvent::KeyDown(Key::Up)),
            KeyEvent {
                code: KeyCode::Down,
                ..
            } => Some(InputEvent::KeyDown(Key::Down)),
            _ => Some(InputEvent::KeyDown(Key::Other)),
        },
        CrossTermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(InputEvent::PointerDown {
            x: column as u32 * DOT + DOT / 2,
            y: row as u32 * DOT + DOT / 2,
        }),
        _ => None,
    }
}
