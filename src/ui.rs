// ui.rs - Diff-aware projection of the game onto a character surface

use crate::app::{GameOfLife, Mode};
use crate::error::LifeError;
use crate::grid::{COLS, ROWS};

pub const ALIVE_GLYPH: char = '█';
pub const EMPTY_GLYPH: char = ' ';
pub const VLINE_GLYPH: char = '│';
pub const HLINE_GLYPH: char = '─';

/// Screen footprint of the board: one column/row per cell plus separators.
pub const GRID_WIDTH: i32 = COLS as i32 * 2 + 1;
pub const GRID_HEIGHT: i32 = ROWS as i32 * 2 + 1;
/// Width status lines are centered in.
pub const TEXT_WIDTH: usize = COLS * 2;

pub const QUIT_HINT: &str = "Press ESC to exit...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Alive,
    Empty,
    GridLine,
    Text,
}

/// Character-cell drawing target.
pub trait Surface {
    /// (width, height) in character cells.
    fn size(&self) -> Result<(u16, u16), LifeError>;
    fn clear(&mut self) -> Result<(), LifeError>;
    /// Coordinates outside the surface are dropped.
    fn set_cell(&mut self, x: i32, y: i32, glyph: char, style: Style) -> Result<(), LifeError>;
    /// Flush everything drawn since the last call.
    fn show(&mut self) -> Result<(), LifeError>;
}

/// Top-left corner of the board for a given screen size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub start_x: i32,
    pub start_y: i32,
}

impl Layout {
    pub fn for_size(width: u16, height: u16) -> Self {
        Self {
            start_x: (i32::from(width) - GRID_WIDTH) / 2,
            start_y: (i32::from(height) - GRID_HEIGHT - 3) / 2,
        }
    }

    pub const fn status_row(&self) -> i32 {
        self.start_y + GRID_HEIGHT + 1
    }

    pub const fn controls_row(&self) -> i32 {
        self.start_y + GRID_HEIGHT + 3
    }

    pub const fn quit_row(&self) -> i32 {
        self.start_y + GRID_HEIGHT + 5
    }
}

/// Draws only what changed since the previous frame.
#[derive(Debug)]
pub struct Renderer {
    previous_show_grid: Option<bool>,
    full_redraw: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            previous_show_grid: None,
            full_redraw: true,
        }
    }

    /// Next frame clears the screen and redraws every cell and separator.
    pub fn invalidate(&mut self) {
        self.full_redraw = true;
    }

    /// Draws one frame and returns its live-cell count.
    pub fn render<S, R>(&mut self, surface: &mut S, game: &GameOfLife<R>) -> Result<usize, LifeError>
    where
        S: Surface + ?Sized,
    {
        let (width, height) = surface.size()?;
        let layout = Layout::for_size(width, height);

        if self.full_redraw {
            surface.clear()?;
        }
        let overlay_dirty = self.full_redraw || self.previous_show_grid != Some(game.show_grid);

        self.draw_cells(surface, game, layout)?;
        if overlay_dirty {
            draw_overlay(surface, game.show_grid, layout)?;
        }

        let live = game.grid.live_count();
        draw_text(surface, &status_line(game, live), layout.start_x, layout.status_row())?;
        draw_text(
            surface,
            &controls_line(game.mode, game.show_grid),
            layout.start_x,
            layout.controls_row(),
        )?;
        draw_text(surface, QUIT_HINT, layout.start_x, layout.quit_row())?;
        surface.show()?;

        self.previous_show_grid = Some(game.show_grid);
        self.full_redraw = false;
        Ok(live)
    }

    fn draw_cells<S, R>(&self, surface: &mut S, game: &GameOfLife<R>, layout: Layout) -> Result<(), LifeError>
    where
        S: Surface + ?Sized,
    {
        for (row, col, cell) in game.grid.iter() {
            if !(cell.updated || self.full_redraw) {
                continue;
            }
            let x = layout.start_x + col as i32 * 2;
            let y = layout.start_y + row as i32 * 2;
            if cell.alive {
                surface.set_cell(x, y, ALIVE_GLYPH, Style::Alive)?;
            } else {
                surface.set_cell(x, y, EMPTY_GLYPH, Style::Empty)?;
            }
        }
        Ok(())
    }
}

// Separators sit between cells: vertical to the right of each cell on cell
// rows, horizontal below each cell column. The extra row/column closes the
// frame on the far edges.
fn draw_overlay<S>(surface: &mut S, show_grid: bool, layout: Layout) -> Result<(), LifeError>
where
    S: Surface + ?Sized,
{
    let (vline, hline, style) = if show_grid {
        (VLINE_GLYPH, HLINE_GLYPH, Style::GridLine)
    } else {
        (EMPTY_GLYPH, EMPTY_GLYPH, Style::Empty)
    };

    for row in 0..=ROWS {
        for col in 0..=COLS {
            let x = layout.start_x + col as i32 * 2;
            let y = layout.start_y + row as i32 * 2;
            if col < COLS {
                surface.set_cell(x + 1, y, vline, style)?;
            }
            if row < ROWS {
                surface.set_cell(x, y + 1, hline, style)?;
            }
        }
    }
    Ok(())
}

fn draw_text<S>(surface: &mut S, text: &str, x: i32, y: i32) -> Result<(), LifeError>
where
    S: Surface + ?Sized,
{
    for (offset, glyph) in center(text, TEXT_WIDTH).chars().enumerate() {
        surface.set_cell(x + offset as i32, y, glyph, Style::Text)?;
    }
    Ok(())
}

/// Pads `text` to `width` with the slack split evenly; longer text is returned as is.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Pattern, generation, population and mode. The pattern is bracketed while
/// it can still be changed.
pub fn status_line<R>(game: &GameOfLife<R>, live: usize) -> String {
    let pattern = match game.mode {
        Mode::Start => format!("Pattern: < {} >, ", game.pattern_name()),
        Mode::Running | Mode::Paused => format!("Pattern: {}, ", game.pattern_name()),
    };
    format!(
        "{pattern}Generation: {}, Live Cells: {live} | {}",
        game.generation, game.mode
    )
}

pub fn controls_line(mode: Mode, show_grid: bool) -> String {
    let hints = match mode {
        Mode::Start => "Right/Left -> Change Pattern | Space -> Play",
        Mode::Running => "Space -> Pause | R -> Reset",
        Mode::Paused => "Space -> Play | R -> Reset",
    };
    let grid = if show_grid { "G -> Hide Grid" } else { "G -> Show Grid" };
    format!("{hints} | {grid}")
}
