pub mod config;
pub mod grid;
pub mod input;
pub mod logger;
pub mod maze;
pub mod pathfinding;
pub mod portal;
pub mod random;
pub mod report;

pub use grid::{Cell, Grid, Position};
pub use maze::{generate, Maze};
pub use pathfinding::{find_route, search, Route, SearchResult};
pub use portal::PortalLinkage;
