//! Keyboard and mouse input handling

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::viewport::Viewport;

/// What the game loop should do with an input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Quit,
    Start,
    Pointer { y: f32 },
    /// Mouse press on a terminal cell
    Click { col: u16, row: u16 },
    Resize { cols: u16, rows: u16 },
}

/// Translate a terminal event into a command. Pointer heights are in court coordinates.
pub fn translate(event: &Event, viewport: &Viewport) -> Option<Command> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, viewport),
        Event::Resize(cols, rows) => Some(Command::Resize {
            cols: *cols,
            rows: *rows,
        }),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('s') | KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Start),
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent, viewport: &Viewport) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let (_x, y) = viewport.to_court(mouse.column, mouse.row);
            Some(Command::Pointer { y })
        }
        MouseEventKind::Down(_) => Some(Command::Click {
            col: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}
