#![allow(dead_code)]

use mazecost::grid::PORTAL_COST;
use mazecost::{Cell, Grid, PortalLinkage, Position, Route, SearchResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const FIXTURES: &str = "./test_data/generated_mazes.json";
pub const RECORDED_RESULTS: &str = "./test_data/reference_results.json";

/// A recorded maze with its expected search result
#[derive(Debug, Clone, Deserialize)]
pub struct MazeFixture {
    pub rows: usize,
    pub cols: usize,
    pub seed: i64,
    pub grid: Vec<String>,
    pub start: (usize, usize),
    pub end: (usize, usize),
    pub portals: Vec<((usize, usize), (usize, usize))>,
    pub result: SearchResult,
}

impl MazeFixture {
    pub fn name(&self) -> String {
        format!("{}x{} seed={}", self.rows, self.cols, self.seed)
    }

    pub fn start(&self) -> Position {
        Position::new(self.start.0, self.start.1)
    }

    pub fn end(&self) -> Position {
        Position::new(self.end.0, self.end.1)
    }

    pub fn grid(&self) -> Grid {
        Grid::parse(&self.grid.join("\n")).expect("fixture grid parses")
    }

    pub fn portal_pairs(&self) -> Vec<(Position, Position)> {
        self.portals
            .iter()
            .map(|&((r1, c1), (r2, c2))| (Position::new(r1, c1), Position::new(r2, c2)))
            .collect()
    }

    pub fn linkage(&self) -> PortalLinkage {
        let mut linkage = PortalLinkage::new();
        for (a, b) in self.portal_pairs() {
            linkage.link(a, b);
        }
        linkage
    }
}

/// Load every fixture from the test data file
pub fn load_fixtures() -> Vec<MazeFixture> {
    load_fixtures_from(Path::new(FIXTURES)).expect("fixtures load")
}

pub fn load_fixtures_from(path: &Path) -> Result<Vec<MazeFixture>, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let fixtures: Vec<MazeFixture> = serde_json::from_str(&contents)?;
    Ok(fixtures)
}

/// Search outcome recorded for a seeded maze
#[derive(Debug, Clone, Deserialize)]
pub struct RecordedResult {
    pub rows: usize,
    pub cols: usize,
    pub seed: i64,
    pub start: (usize, usize),
    pub end: (usize, usize),
    pub result: SearchResult,
}

impl RecordedResult {
    pub fn name(&self) -> String {
        format!("{}x{} seed={}", self.rows, self.cols, self.seed)
    }
}

pub fn load_recorded_results() -> Vec<RecordedResult> {
    let contents = fs::read_to_string(RECORDED_RESULTS).expect("recorded results load");
    serde_json::from_str(&contents).expect("recorded results parse")
}

/// Parse a grid and locate its start and end cells
pub fn parse_grid(text: &str) -> (Grid, Position, Position) {
    let grid = Grid::parse(text).expect("grid parses");
    let start = grid.find(Cell::Start).expect("grid has a start");
    let end = grid.find(Cell::End).expect("grid has an end");
    (grid, start, end)
}

/// Random grid without walls. `trap_chance` and `monster_chance` are
/// independent probabilities per cell.
pub fn random_grid(
    rng: &mut StdRng,
    rows: usize,
    cols: usize,
    trap_chance: f64,
    monster_chance: f64,
) -> (Grid, Position, Position) {
    let mut grid = Grid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            let roll: f64 = rng.gen();
            let cell = if roll < trap_chance {
                Cell::Trap
            } else if roll < trap_chance + monster_chance {
                Cell::Monster
            } else {
                Cell::Empty
            };
            grid.set(Position::new(row, col), cell);
        }
    }

    let start = Position::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
    let mut end = start;
    while end == start {
        end = Position::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
    }
    grid.set(start, Cell::Start);
    grid.set(end, Cell::End);

    (grid, start, end)
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Recompute cost and monsters by walking a route step by step
pub fn walk_route(grid: &Grid, portals: &PortalLinkage, route: &Route) -> (u32, u32) {
    let mut cost = 0;
    let mut monsters = 0;

    for pair in route.steps.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if from.manhattan(&to) == 1 {
            let cell = grid.get(to);
            cost += cell.entry_cost().expect("route never enters a wall");
            if cell.is_monster() {
                monsters += 1;
            }
        } else {
            assert_eq!(grid.get(from), Cell::Portal, "teleport from {} starts on a portal", from);
            assert_eq!(portals.partner(from), Some(to), "teleport {} -> {} is linked", from, to);
            cost += PORTAL_COST;
        }
    }

    (cost, monsters)
}

/// Visualize a route on a grid, marking the cells it passes through
pub fn visualize_route(grid: &Grid, route: &Route) -> String {
    let mut result = String::new();

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let pos = Position::new(row, col);
            let cell = grid.get(pos);
            let symbol = if matches!(cell, Cell::Start | Cell::End) {
                cell.symbol()
            } else if route.steps.contains(&pos) {
                '*'
            } else {
                cell.symbol()
            };
            result.push(symbol);
        }
        result.push('\n');
    }

    result
}
