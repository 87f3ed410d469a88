//! Key and resize handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything the loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePlay,
    PreviousPattern,
    NextPattern,
    ToggleGrid,
    Reset,
    Quit,
    Resize,
}

impl Command {
    /// Maps a terminal event to a command. Unbound keys, key releases,
    /// mouse and focus events give `None`.
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Resize(_, _) => Some(Command::Resize),
            _ => None,
        }
    }

    fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        // raw mode delivers the interrupt as a plain key press
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c' | 'C') => Some(Command::Quit),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char(' ') => Some(Command::TogglePlay),
            KeyCode::Left => Some(Command::PreviousPattern),
            KeyCode::Right => Some(Command::NextPattern),
            KeyCode::Char('g' | 'G') => Some(Command::ToggleGrid),
            KeyCode::Char('r' | 'R') => Some(Command::Reset),
            _ => None,
        }
    }
}
