use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
    ops::ControlFlow,
    str::FromStr,
};

mod frontier;
mod search;

pub use frontier::{Frontier, Record};

use crate::maze::{Maze, Position};

/// Ordered cells from the start to wherever a branch ended.
pub type Path = Vec<Position>;

/// Progress notifications emitted while a search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent<'a> {
    /// An edge was followed to queue `to` for expansion.
    Explored { from: Position, to: Position },
    /// One cell finished expanding.
    Step,
    /// The end was reached along this path. Always the last event.
    Found(&'a [Position]),
    /// The frontier ran dry. Carries every dead-end path in the order it was recorded.
    /// Always the last event.
    Exhausted(&'a [Path]),
}

/// Receives search events. Returning `ControlFlow::Break` from an
/// `Explored` or `Step` event cancels the search.
pub trait SearchObserver {
    fn on_event(&mut self, event: SearchEvent<'_>) -> ControlFlow<()>;
}

/// Headless observer that ignores every event.
impl SearchObserver for () {
    fn on_event(&mut self, _event: SearchEvent<'_>) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

impl<T: SearchObserver + ?Sized> SearchObserver for &mut T {
    fn on_event(&mut self, event: SearchEvent<'_>) -> ControlFlow<()> {
        (**self).on_event(event)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Path from start to end, both included.
    Found(Path),
    /// No route to the end. Dead-end paths in the order they were recorded.
    Exhausted(Vec<Path>),
    /// The observer asked to stop.
    Cancelled,
}

/// Everything one search run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub solver: Solver,
    /// Cells in the order they were expanded.
    pub expanded: Vec<Position>,
    pub outcome: SearchOutcome,
}

impl SearchReport {
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found(_))
    }

    /// The solution path, if the end was reached.
    pub fn path(&self) -> Option<&[Position]> {
        match &self.outcome {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Dead ends collected by a search that could not reach the end.
    pub fn dead_ends(&self) -> &[Path] {
        match &self.outcome {
            SearchOutcome::Exhausted(paths) => paths,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Dfs,
    Bfs,
    GreedyBestFirst,
    AStar,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::GreedyBestFirst => write!(f, "Greedy Best-First Search (GBFS)"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown solver '{0}', expected one of: dfs, bfs, gbfs, astar")]
pub struct UnknownSolver(pub String);

impl FromStr for Solver {
    type Err = UnknownSolver;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(Solver::Dfs),
            "bfs" => Ok(Solver::Bfs),
            "gbfs" | "greedy" => Ok(Solver::GreedyBestFirst),
            "astar" | "a*" => Ok(Solver::AStar),
            _ => Err(UnknownSolver(s.to_string())),
        }
    }
}

/// Sum of absolute row and column differences.
pub fn manhattan(a: Position, b: Position) -> usize {
    a.0.abs_diff(b.0) as usize + a.1.abs_diff(b.1) as usize
}

impl Solver {
    pub const ALL: [Solver; 4] = [
        Solver::Dfs,
        Solver::Bfs,
        Solver::GreedyBestFirst,
        Solver::AStar,
    ];

    /// Frontier key of a record for `pos`, reached after `depth` cells.
    /// The stack and queue strategies ignore it.
    pub fn key(&self, pos: Position, end: Position, depth: usize) -> usize {
        match self {
            Solver::Dfs | Solver::Bfs => 0,
            Solver::GreedyBestFirst => manhattan(pos, end),
            // Every step costs one, so the distance is admissible and depth is the exact cost so far
            Solver::AStar => manhattan(pos, end) + depth,
        }
    }

    /// Searches `maze` from its start to its end, reporting progress to `observer`.
    pub fn run<O: SearchObserver + ?Sized>(&self, maze: &Maze, observer: &mut O) -> SearchReport {
        tracing::debug!(
            "[solver] {} from {:?} to {:?}",
            self,
            maze.start(),
            maze.end()
        );

        let report = match self {
            Solver::Dfs => search::search(maze, *self, Vec::<Record>::new(), observer),
            Solver::Bfs => search::search(maze, *self, VecDeque::<Record>::new(), observer),
            Solver::GreedyBestFirst | Solver::AStar => search::search(
                maze,
                *self,
                BinaryHeap::<Reverse<Record>>::new(),
                observer,
            ),
        };

        match &report.outcome {
            SearchOutcome::Found(path) => tracing::info!(
                "[solver] {} reached the end in {} steps after expanding {} cells",
                self,
                path.len() - 1,
                report.expanded.len()
            ),
            SearchOutcome::Exhausted(dead_ends) => tracing::info!(
                "[solver] {} found no path; {} dead ends after expanding {} cells",
                self,
                dead_ends.len(),
                report.expanded.len()
            ),
            SearchOutcome::Cancelled => tracing::info!("[solver] {} was cancelled", self),
        }

        report
    }
}
