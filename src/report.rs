use crate::config::OutputConfig;
use crate::input::CaseSpec;
use crate::maze::{generate, Maze};
use crate::pathfinding::{find_route, format_route, search, Route, SearchResult};
use crate::grid::Position;
use serde::Serialize;

/// Generated maze and search outcome for one test case
#[derive(Debug, Clone)]
pub struct CaseReport {
    /// 1-based case number
    pub index: usize,
    pub spec: CaseSpec,
    pub maze: Maze,
    pub result: SearchResult,
    /// Only filled in when routes were requested
    pub route: Option<Route>,
}

/// Machine readable form of a `CaseReport`
#[derive(Debug, Serialize)]
pub struct CaseRecord<'a> {
    pub case: usize,
    #[serde(flatten)]
    pub spec: CaseSpec,
    pub start: Position,
    pub end: Position,
    pub grid: Vec<String>,
    pub result: SearchResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<&'a Route>,
}

impl CaseReport {
    /// Generate and solve a single case
    pub fn run(index: usize, spec: CaseSpec, with_route: bool) -> Self {
        let maze = generate(spec.rows, spec.cols, spec.seed);

        let (result, route) = if with_route {
            let route = find_route(&maze.grid, maze.start, maze.end, &maze.portals);
            let result = match &route {
                Some(route) => SearchResult::Found {
                    cost: route.cost,
                    monsters: route.monsters,
                },
                None => SearchResult::Unreachable,
            };
            (result, route)
        } else {
            (search(&maze.grid, maze.start, maze.end, &maze.portals), None)
        };

        log::info!("case {}: {:?} -> {:?}", index, spec, result);

        CaseReport {
            index,
            spec,
            maze,
            result,
            route,
        }
    }

    /// Text block for this case, ending with a blank line
    pub fn render(&self, output: &OutputConfig) -> String {
        let mut out = String::new();

        if output.show_maze {
            out.push_str(&format!("Test Case {} Maze:\n", self.index));
            out.push_str(&format!("{}\n", self.maze.grid));
        }

        match self.result {
            SearchResult::Found { cost, monsters } => {
                out.push_str(&format!("Case {}: Cost = {}, Monsters = {}\n", self.index, cost, monsters));
            }
            SearchResult::Unreachable => {
                out.push_str(&format!("Case {}: No path found\n", self.index));
            }
        }

        if output.show_route {
            if let Some(route) = &self.route {
                out.push_str(&format!("Route: {}\n", format_route(route)));
            }
        }

        out.push('\n');
        out
    }

    pub fn record(&self) -> CaseRecord<'_> {
        CaseRecord {
            case: self.index,
            spec: self.spec,
            start: self.maze.start,
            end: self.maze.end,
            grid: self.maze.grid.to_string().lines().map(str::to_string).collect(),
            result: self.result,
            route: self.route.as_ref(),
        }
    }
}

/// Running totals across all cases
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    pub cases: usize,
    pub total_cost: u64,
    pub total_monsters: u64,
}

impl Summary {
    /// Count a case. Unreachable cases count but add nothing to the totals.
    pub fn add(&mut self, result: &SearchResult) {
        self.cases += 1;
        if let SearchResult::Found { cost, monsters } = *result {
            self.total_cost += u64::from(cost);
            self.total_monsters += u64::from(monsters);
        }
    }

    /// `(average cost, average monsters)`, `None` without cases
    pub fn averages(&self) -> Option<(f64, f64)> {
        if self.cases == 0 {
            return None;
        }
        let n = self.cases as f64;
        Some((self.total_cost as f64 / n, self.total_monsters as f64 / n))
    }

    pub fn render(&self) -> Option<String> {
        let (cost, monsters) = self.averages()?;
        Some(format!(
            "Average Cost: {:.2}, Average Monsters: {:.2}",
            cost, monsters
        ))
    }
}

/// Run every case in order, each with its own freshly seeded stream
pub fn run_cases(cases: &[CaseSpec], output: &OutputConfig) -> (Vec<CaseReport>, Summary) {
    let mut summary = Summary::default();
    let reports = cases
        .iter()
        .enumerate()
        .map(|(i, &spec)| {
            let report = CaseReport::run(i + 1, spec, output.show_route);
            summary.add(&report.result);
            report
        })
        .collect();

    (reports, summary)
}
