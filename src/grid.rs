// grid.rs - Grid types and the generation engine

// Compile-time grid size configuration
pub const ROWS: usize = 20;                           // Playing area height
pub const COLS: usize = 40;                           // Playing area width
pub const CELL_COUNT: usize = ROWS * COLS;            // Row-major backing length

/// One board cell.
///
/// `updated` means the glyph at this position differs from the previous
/// frame and has to be redrawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    pub updated: bool,
}

impl Cell {
    pub const DEAD: Cell = Cell { alive: false, updated: false };

    pub const fn new(alive: bool, updated: bool) -> Self {
        Self { alive, updated }
    }
}

pub type TCells = [Cell; CELL_COUNT];

/// Fixed 20x40 board, no wraparound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: TCells,
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// All cells dead, nothing to redraw.
    pub const fn empty() -> Self {
        Self { cells: [Cell::DEAD; CELL_COUNT] }
    }

    /// All cells dead, every position marked for redraw.
    pub const fn blank() -> Self {
        Self { cells: [Cell::new(false, true); CELL_COUNT] }
    }

    #[inline]
    const fn index(row: usize, col: usize) -> usize {
        row * COLS + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < ROWS && col < COLS {
            Some(&self.cells[Self::index(row, col)])
        } else {
            None
        }
    }

    /// Writes a cell; coordinates outside the board are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < ROWS && col < COLS {
            self.cells[Self::index(row, col)] = cell;
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|cell| cell.alive)
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Row-major iterator over `(row, col, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (i / COLS, i % COLS, cell))
    }

    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|(_, _, cell)| cell.alive)
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Live cells in the Moore neighborhood of `(row, col)`, clipped at the edges.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let row_lo = row.saturating_sub(1);
        let row_hi = (row + 1).min(ROWS - 1);
        let col_lo = col.saturating_sub(1);
        let col_hi = (col + 1).min(COLS - 1);

        let mut count = 0;
        for r in row_lo..=row_hi {
            for c in col_lo..=col_hi {
                if (r, c) != (row, col) && self.cells[Self::index(r, c)].alive {
                    count += 1;
                }
            }
        }
        count
    }
}

/// Computes the next generation (B3/S23).
///
/// Only births and deaths are flagged `updated`; survivors and cells that
/// stay dead keep their on-screen glyph.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::empty();
    for (row, col, cell) in grid.iter() {
        let count = grid.live_neighbors(row, col);
        let next_cell = match (cell.alive, count) {
            (true, 2) | (true, 3) => Cell::new(true, false),   // Survival
            (false, 3)            => Cell::new(true, true),    // Birth
            (true, _)             => Cell::new(false, true),   // Death
            (false, _)            => Cell::DEAD,               // Stays dead
        };
        next.cells[Grid::index(row, col)] = next_cell;
    }
    next
}
