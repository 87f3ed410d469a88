//! Terminal backends.
//!
//! [`CrosstermTerminal`] drives the real tty. [`ScriptedTerminal`] replays a
//! fixed list of events into an in-memory screen so the loop can run
//! without one.

use std::collections::{HashMap, VecDeque};
use std::io::{self, BufWriter, IsTerminal, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor::{self, MoveTo},
    event::{self, Event},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::error::LifeError;
use crate::ui::{Style, Surface};

/// Event source and lifecycle on top of a drawing surface.
pub trait Terminal: Surface {
    /// Enter raw mode and the alternate screen.
    fn enter(&mut self) -> Result<(), LifeError>;
    /// Restore the terminal. Best effort.
    fn leave(&mut self) -> Result<(), LifeError>;
    /// Whether an event is ready within `timeout`.
    fn poll(&mut self, timeout: Duration) -> Result<bool, LifeError>;
    /// Next event; blocks if none is pending.
    fn read_event(&mut self) -> Result<Event, LifeError>;
    /// Pick up a new screen size and wipe stale output.
    fn sync(&mut self) -> Result<(), LifeError>;
}

const DARK_VIOLET: Color = Color::Rgb { r: 148, g: 0, b: 211 };

fn colors(style: Style) -> (Color, Color) {
    match style {
        Style::Alive => (DARK_VIOLET, DARK_VIOLET),
        Style::Empty => (Color::Reset, Color::Reset),
        Style::GridLine => (Color::Grey, Color::Reset),
        Style::Text => (Color::White, Color::Reset),
    }
}

/// Real crossterm backend over stdout. Drawing is queued and written on `show`.
pub struct CrosstermTerminal {
    out: BufWriter<Stdout>,
    size: (u16, u16),
    entered: bool,
}

impl CrosstermTerminal {
    /// Takes over the terminal. Fails if stdout is not a tty.
    pub fn init() -> Result<Self, LifeError> {
        let stdout = io::stdout();
        if !stdout.is_terminal() {
            return Err(LifeError::TerminalNotAvailable);
        }
        let mut term = Self {
            out: BufWriter::new(stdout),
            size: terminal::size()?,
            entered: false,
        };
        term.enter()?;
        Ok(term)
    }
}

impl Surface for CrosstermTerminal {
    fn size(&self) -> Result<(u16, u16), LifeError> {
        Ok(self.size)
    }

    fn clear(&mut self) -> Result<(), LifeError> {
        queue!(self.out, ResetColor, Clear(ClearType::All))?;
        Ok(())
    }

    fn set_cell(&mut self, x: i32, y: i32, glyph: char, style: Style) -> Result<(), LifeError> {
        let (width, height) = self.size;
        let (Ok(col), Ok(row)) = (u16::try_from(x), u16::try_from(y)) else {
            return Ok(());
        };
        if col >= width || row >= height {
            return Ok(());
        }
        let (fg, bg) = colors(style);
        queue!(
            self.out,
            MoveTo(col, row),
            SetForegroundColor(fg),
            SetBackgroundColor(bg),
            Print(glyph)
        )?;
        Ok(())
    }

    fn show(&mut self) -> Result<(), LifeError> {
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Terminal for CrosstermTerminal {
    fn enter(&mut self) -> Result<(), LifeError> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        execute!(self.out, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))?;
        Ok(())
    }

    fn leave(&mut self) -> Result<(), LifeError> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        let _ = execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        Ok(())
    }

    fn poll(&mut self, timeout: Duration) -> Result<bool, LifeError> {
        Ok(event::poll(timeout)?)
    }

    fn read_event(&mut self) -> Result<Event, LifeError> {
        Ok(event::read()?)
    }

    fn sync(&mut self) -> Result<(), LifeError> {
        self.size = terminal::size()?;
        self.clear()
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

/// In-memory terminal fed from a script.
///
/// Each `poll` consumes one script entry: `Some(event)` is delivered by the
/// following `read_event`, `None` means nothing arrived that tick. Polling
/// past the end of the script is an error so a loop that never quits fails
/// instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    size: (u16, u16),
    script: VecDeque<Option<Event>>,
    pending: Option<Event>,
    screen: HashMap<(i32, i32), (char, Style)>,
    draws: usize,
    clears: usize,
    frames: usize,
    syncs: usize,
    entered: bool,
}

impl ScriptedTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: (width, height),
            ..Self::default()
        }
    }

    pub fn with_script(mut self, script: Vec<Option<Event>>) -> Self {
        self.script = script.into();
        self
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Option<(char, Style)> {
        self.screen.get(&(x, y)).copied()
    }

    /// `len` glyphs starting at `(x, y)`; undrawn positions read as spaces.
    pub fn text(&self, x: i32, y: i32, len: usize) -> String {
        (0..len as i32)
            .map(|dx| self.cell_at(x + dx, y).map_or(' ', |(glyph, _)| glyph))
            .collect()
    }

    /// On-screen `set_cell` calls since the last [`reset_draws`](Self::reset_draws).
    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn reset_draws(&mut self) {
        self.draws = 0;
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn syncs(&self) -> usize {
        self.syncs
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn remaining_script(&self) -> usize {
        self.script.len()
    }
}

impl Surface for ScriptedTerminal {
    fn size(&self) -> Result<(u16, u16), LifeError> {
        Ok(self.size)
    }

    fn clear(&mut self) -> Result<(), LifeError> {
        self.screen.clear();
        self.clears += 1;
        Ok(())
    }

    fn set_cell(&mut self, x: i32, y: i32, glyph: char, style: Style) -> Result<(), LifeError> {
        let (width, height) = self.size;
        if x < 0 || y < 0 || x >= i32::from(width) || y >= i32::from(height) {
            return Ok(());
        }
        self.screen.insert((x, y), (glyph, style));
        self.draws += 1;
        Ok(())
    }

    fn show(&mut self) -> Result<(), LifeError> {
        self.frames += 1;
        Ok(())
    }
}

impl Terminal for ScriptedTerminal {
    fn enter(&mut self) -> Result<(), LifeError> {
        self.entered = true;
        Ok(())
    }

    fn leave(&mut self) -> Result<(), LifeError> {
        self.entered = false;
        Ok(())
    }

    fn poll(&mut self, _timeout: Duration) -> Result<bool, LifeError> {
        match self.script.pop_front() {
            Some(entry) => {
                self.pending = entry;
                Ok(self.pending.is_some())
            }
            None => Err(LifeError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "event script exhausted",
            ))),
        }
    }

    fn read_event(&mut self) -> Result<Event, LifeError> {
        let event = self
            .pending
            .take()
            .ok_or_else(|| LifeError::Io(io::Error::new(io::ErrorKind::WouldBlock, "no events")))?;
        if let Event::Resize(width, height) = event {
            self.size = (width, height);
        }
        Ok(event)
    }

    fn sync(&mut self) -> Result<(), LifeError> {
        self.syncs += 1;
        self.clear()
    }
}
