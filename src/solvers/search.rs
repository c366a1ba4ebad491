use std::ops::ControlFlow;

use crate::maze::{Grid, Maze};

use super::{
    Path, SearchEvent, SearchObserver, SearchOutcome, SearchReport, Solver,
    frontier::{Frontier, Record},
};

/// Walks the maze from start to end, expanding records in whatever order `frontier` yields them.
///
/// Every expansion clones the route so far into each new record, so memory per
/// record grows with the depth of the search.
pub(super) fn search<F, O>(
    maze: &Maze,
    solver: Solver,
    mut frontier: F,
    observer: &mut O,
) -> SearchReport
where
    F: Frontier,
    O: SearchObserver + ?Sized,
{
    let (start, end) = (maze.start(), maze.end());
    let mut closed = Grid::new(maze.rows(), maze.cols(), false);
    let mut dead_ends: Vec<Path> = Vec::new();
    let mut expanded = Vec::new();

    let report = |expanded, outcome| SearchReport {
        solver,
        expanded,
        outcome,
    };

    frontier.push(Record::new(solver.key(start, end, 0), start, Vec::new()));

    while let Some(Record {
        position, mut path, ..
    }) = frontier.pop()
    {
        if path.contains(&position) || closed[position] {
            continue;
        }

        path.push(position);
        closed[position] = true;
        expanded.push(position);

        if position == end {
            // Nothing is left to cancel once the goal is reached
            let _ = observer.on_event(SearchEvent::Found(&path));
            return report(expanded, SearchOutcome::Found(path));
        }

        let cell = &maze[position];
        if cell.is_dead_end() {
            dead_ends.push(path);
        } else {
            let depth = path.len();
            for direction in cell.connections() {
                let Some(neighbor) = maze.neighbor(position, direction) else {
                    continue;
                };
                let explored = SearchEvent::Explored {
                    from: position,
                    to: neighbor,
                };
                if let ControlFlow::Break(()) = observer.on_event(explored) {
                    return report(expanded, SearchOutcome::Cancelled);
                }
                frontier.push(Record::new(
                    solver.key(neighbor, end, depth),
                    neighbor,
                    path.clone(),
                ));
            }
        }

        if let ControlFlow::Break(()) = observer.on_event(SearchEvent::Step) {
            return report(expanded, SearchOutcome::Cancelled);
        }
    }

    let _ = observer.on_event(SearchEvent::Exhausted(&dead_ends));
    report(expanded, SearchOutcome::Exhausted(dead_ends))
}
