use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Cost of stepping into any enterable cell other than a trap
pub const STEP_COST: u32 = 1;
/// Cost of stepping into a trap
pub const TRAP_COST: u32 = 3;
/// Cost of stepping through a portal to its partner
pub const PORTAL_COST: u32 = 1;

/// Kind of a single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Start,
    End,
    Trap,
    Monster,
    Portal,
    /// Blocks movement. Never produced by the generator.
    Wall,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Start => 'S',
            Cell::End => 'E',
            Cell::Trap => 'T',
            Cell::Monster => 'M',
            Cell::Portal => 'P',
            Cell::Wall => '#',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Empty),
            'S' => Some(Cell::Start),
            'E' => Some(Cell::End),
            'T' => Some(Cell::Trap),
            'M' => Some(Cell::Monster),
            'P' => Some(Cell::Portal),
            '#' => Some(Cell::Wall),
            _ => None,
        }
    }

    /// Cost of stepping into this cell, `None` if it cannot be entered
    pub fn entry_cost(self) -> Option<u32> {
        match self {
            Cell::Wall => None,
            Cell::Trap => Some(TRAP_COST),
            _ => Some(STEP_COST),
        }
    }

    pub fn is_monster(self) -> bool {
        self == Cell::Monster
    }
}

/// A position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Number of orthogonal steps between two positions
    pub fn manhattan(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid text is empty")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell symbol {symbol:?} at {row}:{col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
}

/// Rectangular maze grid stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell set to `Empty`
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Parse the textual rendering produced by `Display`.
    ///
    /// Blank lines are ignored so that rendered output can be pasted back in.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = 0;

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let mut found = 0;
            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                    symbol,
                    row: rows,
                    col,
                })?;
                cells.push(cell);
                found += 1;
            }

            if rows == 0 {
                cols = found;
            } else if found != cols {
                return Err(GridError::Ragged {
                    row: rows,
                    expected: cols,
                    found,
                });
            }
            rows += 1;
        }

        if rows == 0 {
            return Err(GridError::Empty);
        }

        Ok(Grid { rows, cols, cells })
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Cell at `pos`. Panics when out of bounds, like slice indexing.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        let id = self.index(pos);
        self.cells[id] = cell;
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// In-bounds orthogonal neighbours, in the order up, down, left, right
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        const MOVES: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

        MOVES.iter().filter_map(move |&(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            let next = Position::new(row, col);
            self.contains(next).then_some(next)
        })
    }

    /// Find the first cell of the given kind in row-major order
    pub fn find(&self, cell: Cell) -> Option<Position> {
        self.positions().find(|&pos| self.get(pos) == cell)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
