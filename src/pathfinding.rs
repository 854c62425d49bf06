use crate::grid::{Cell, Grid, Position, PORTAL_COST};
use crate::portal::PortalLinkage;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Outcome of a cost search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResult {
    Found { cost: u32, monsters: u32 },
    Unreachable,
}

/// Cheapest route together with the cells it passes through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub cost: u32,
    pub monsters: u32,
    /// Start and end inclusive. Consecutive steps are either orthogonal
    /// neighbours or the two ends of a portal.
    pub steps: Vec<Position>,
}

/// A frontier entry
#[derive(Debug, Clone, Copy)]
struct QueueNode {
    cost: u32,
    monsters: u32,
    position: Position,
}

impl PartialEq for QueueNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueNode {}

impl PartialOrd for QueueNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default).
        // Equal costs pop fewer monsters first, then the row-major smaller position.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.monsters.cmp(&self.monsters))
            .then_with(|| other.position.cmp(&self.position))
    }
}

struct Search<'a> {
    grid: &'a Grid,
    portals: &'a PortalLinkage,
    queue: BinaryHeap<QueueNode>,
    best: HashMap<Position, u32>,
    came_from: HashMap<Position, Position>,
    settled: HashSet<Position>,
}

impl<'a> Search<'a> {
    fn new(grid: &'a Grid, portals: &'a PortalLinkage) -> Self {
        Search {
            grid,
            portals,
            queue: BinaryHeap::new(),
            best: HashMap::new(),
            came_from: HashMap::new(),
            settled: HashSet::new(),
        }
    }

    fn push(&mut self, position: Position, cost: u32, monsters: u32) {
        self.queue.push(QueueNode {
            cost,
            monsters,
            position,
        });
    }

    /// Record a candidate only if it strictly improves the best known cost
    fn relax(&mut self, from: Position, to: Position, cost: u32, monsters: u32) {
        if self.settled.contains(&to) {
            return;
        }

        let improves = match self.best.get(&to) {
            Some(&best) => cost < best,
            None => true,
        };

        if improves {
            log::trace!("relax {} -> {} cost={} monsters={}", from, to, cost, monsters);
            self.best.insert(to, cost);
            self.came_from.insert(to, from);
            self.push(to, cost, monsters);
        }
    }

    /// Run until `end` is settled, returning its cost and monster count
    fn run(&mut self, start: Position, end: Position) -> Option<(u32, u32)> {
        self.best.insert(start, 0);
        self.push(start, 0, 0);

        while let Some(node) = self.queue.pop() {
            let pos = node.position;

            // Stale entry for an already settled cell
            if !self.settled.insert(pos) {
                continue;
            }

            if pos == end {
                log::debug!(
                    "reached {} cost={} monsters={} after settling {} cells",
                    end,
                    node.cost,
                    node.monsters,
                    self.settled.len()
                );
                return Some((node.cost, node.monsters));
            }

            let grid = self.grid;
            for next in grid.neighbors(pos) {
                let cell = grid.get(next);
                let Some(step) = cell.entry_cost() else {
                    continue;
                };
                let monsters = node.monsters + u32::from(cell.is_monster());
                self.relax(pos, next, node.cost + step, monsters);
            }

            if grid.get(pos) == Cell::Portal {
                if let Some(partner) = self.portals.partner(pos) {
                    self.relax(pos, partner, node.cost + PORTAL_COST, node.monsters);
                }
            }
        }

        log::debug!("no path to {} after settling {} cells", end, self.settled.len());
        None
    }

    fn steps_to(&self, start: Position, end: Position) -> Vec<Position> {
        let mut steps = vec![end];
        let mut current = end;
        while current != start {
            match self.came_from.get(&current) {
                Some(&prev) => {
                    steps.push(prev);
                    current = prev;
                }
                None => break,
            }
        }
        steps.reverse();
        steps
    }
}

/// Minimum cost from `start` to `end` and the monsters met along that path.
///
/// The frontier pops equal costs by fewer monsters first, then by row-major
/// position, so the reported count is the one carried by the first entry for
/// `end` in that order. The grid and linkage are only read.
pub fn search(
    grid: &Grid,
    start: Position,
    end: Position,
    portals: &PortalLinkage,
) -> SearchResult {
    match Search::new(grid, portals).run(start, end) {
        Some((cost, monsters)) => SearchResult::Found { cost, monsters },
        None => SearchResult::Unreachable,
    }
}

/// Same search as [`search`], also reconstructing the chosen path
pub fn find_route(
    grid: &Grid,
    start: Position,
    end: Position,
    portals: &PortalLinkage,
) -> Option<Route> {
    let mut search = Search::new(grid, portals);
    let (cost, monsters) = search.run(start, end)?;

    Some(Route {
        cost,
        monsters,
        steps: search.steps_to(start, end),
    })
}

/// Format a route for display
pub fn format_route(route: &Route) -> String {
    route
        .steps
        .iter()
        .map(|pos| pos.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
