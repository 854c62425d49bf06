use crate::grid::{Cell, Grid, Position};
use crate::portal::PortalLinkage;
use crate::random::PyRandom;

/// Draws below this value turn a cell into a trap
pub const TRAP_CHANCE: f64 = 0.10;
/// Draws below this value (and not below `TRAP_CHANCE`) turn a cell into a monster
pub const MONSTER_CHANCE: f64 = 0.20;
/// Upper bound of the uniform portal pair count draw
pub const MAX_PORTAL_PAIRS: usize = 2;

/// A fully generated maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub start: Position,
    pub end: Position,
    pub portals: PortalLinkage,
}

/// Generate a maze from a seed.
///
/// Requires `rows * cols >= 2`, otherwise no end distinct from the start
/// exists and generation never returns. Portal pairs that cannot fit
/// (fewer than two `Empty` cells left) are skipped without drawing, so
/// tiny grids such as `1x2` always finish; any maze that has room for its
/// pairs consumes exactly the same draws as if the check were absent.
pub fn generate(rows: usize, cols: usize, seed: i64) -> Maze {
    let mut rng = PyRandom::seed(seed);
    generate_with(&mut rng, rows, cols)
}

/// Generate a maze by consuming draws from an existing stream
pub fn generate_with(rng: &mut PyRandom, rows: usize, cols: usize) -> Maze {
    let start = random_position(rng, rows, cols);
    let mut end = random_position(rng, rows, cols);
    while end == start {
        end = random_position(rng, rows, cols);
    }

    let mut grid = Grid::new(rows, cols);
    grid.set(start, Cell::Start);
    grid.set(end, Cell::End);

    // One draw per non-special cell, whatever it turns into
    for pos in (0..rows).flat_map(|row| (0..cols).map(move |col| Position::new(row, col))) {
        if matches!(grid.get(pos), Cell::Start | Cell::End) {
            continue;
        }
        let chance = rng.random();
        if chance < TRAP_CHANCE {
            grid.set(pos, Cell::Trap);
        } else if chance < MONSTER_CHANCE {
            grid.set(pos, Cell::Monster);
        }
    }

    let mut portals = PortalLinkage::new();
    let pairs = rng.randint(0, MAX_PORTAL_PAIRS);

    for _ in 0..pairs {
        // Both ends must land on distinct empty cells or the draws never stop
        if grid.count(Cell::Empty) < 2 {
            log::debug!("not enough empty cells for another portal pair");
            break;
        }

        let first = loop {
            let pos = random_position(rng, rows, cols);
            if grid.get(pos) == Cell::Empty {
                break pos;
            }
        };
        let second = loop {
            let pos = random_position(rng, rows, cols);
            if grid.get(pos) == Cell::Empty && pos != first {
                break pos;
            }
        };

        grid.set(first, Cell::Portal);
        grid.set(second, Cell::Portal);
        portals.link(first, second);
    }

    log::debug!(
        "generated {}x{} maze: start={} end={} traps={} monsters={} portal pairs={}",
        rows,
        cols,
        start,
        end,
        grid.count(Cell::Trap),
        grid.count(Cell::Monster),
        portals.len()
    );

    Maze {
        grid,
        start,
        end,
        portals,
    }
}

fn random_position(rng: &mut PyRandom, rows: usize, cols: usize) -> Position {
    let row = rng.randint(0, rows - 1);
    let col = rng.randint(0, cols - 1);
    Position::new(row, col)
}
