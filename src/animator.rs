//! Turns search events into drawing calls.
//!
//! A [`Canvas`] only knows how to draw a move between two cells and how to
//! advance one frame. [`PathAnimator`] sits between a running search and a
//! canvas: exploratory edges are forwarded as they happen, and once the search
//! ends the winning path, or every dead end when there is none, is replayed as
//! final moves.

use std::ops::ControlFlow;

use crate::{
    maze::{Maze, Position},
    solvers::{SearchEvent, SearchObserver, SearchReport, Solver},
};

/// Rendering collaborator driven by a search.
pub trait Canvas {
    /// Draw the move between two adjacent cells. `is_final` marks solution and
    /// dead-end trails as opposed to exploration.
    fn draw_move(&mut self, from: Position, to: Position, is_final: bool);

    /// One unit of progress happened. Return `ControlFlow::Break` to stop the search.
    fn step(&mut self) -> ControlFlow<()>;
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw_move(&mut self, from: Position, to: Position, is_final: bool) {
        (**self).draw_move(from, to, is_final);
    }

    fn step(&mut self) -> ControlFlow<()> {
        (**self).step()
    }
}

/// Canvas made of two plain callbacks.
pub struct HookCanvas<D, S> {
    draw: D,
    step: S,
}

impl<D, S> HookCanvas<D, S>
where
    D: FnMut(Position, Position, bool),
    S: FnMut(),
{
    pub fn new(draw: D, step: S) -> Self {
        HookCanvas { draw, step }
    }
}

impl<D, S> Canvas for HookCanvas<D, S>
where
    D: FnMut(Position, Position, bool),
    S: FnMut(),
{
    fn draw_move(&mut self, from: Position, to: Position, is_final: bool) {
        (self.draw)(from, to, is_final);
    }

    fn step(&mut self) -> ControlFlow<()> {
        (self.step)();
        ControlFlow::Continue(())
    }
}

/// Search observer that animates onto a [`Canvas`].
pub struct PathAnimator<C> {
    canvas: C,
}

impl<C: Canvas> PathAnimator<C> {
    pub fn new(canvas: C) -> Self {
        PathAnimator { canvas }
    }

    pub fn into_inner(self) -> C {
        self.canvas
    }

    /// Draws every consecutive pair of `path` as a final move, start first.
    pub fn replay(&mut self, path: &[Position]) {
        for pair in path.windows(2) {
            self.canvas.draw_move(pair[0], pair[1], true);
        }
    }
}

impl<C: Canvas> SearchObserver for PathAnimator<C> {
    fn on_event(&mut self, event: SearchEvent<'_>) -> ControlFlow<()> {
        match event {
            SearchEvent::Explored { from, to } => {
                self.canvas.draw_move(from, to, false);
                ControlFlow::Continue(())
            }
            SearchEvent::Step => self.canvas.step(),
            SearchEvent::Found(path) => {
                self.replay(path);
                self.canvas.step()
            }
            SearchEvent::Exhausted(dead_ends) => {
                for path in dead_ends {
                    self.replay(path);
                }
                self.canvas.step()
            }
        }
    }
}

/// Runs `solver` on `maze`, animating exploration and the outcome on `canvas`.
pub fn solve<C: Canvas>(maze: &Maze, solver: Solver, canvas: C) -> SearchReport {
    let mut animator = PathAnimator::new(canvas);
    solver.run(maze, &mut animator)
}

/// [`solve`] with the canvas given as a draw callback `(from, to, is_final)` and a step callback.
pub fn solve_with_hooks<D, S>(maze: &Maze, solver: Solver, draw: D, step: S) -> SearchReport
where
    D: FnMut(Position, Position, bool),
    S: FnMut(),
{
    solve(maze, solver, HookCanvas::new(draw, step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::MazeConfig;

    #[derive(Default)]
    struct Tape {
        moves: Vec<(Position, Position, bool)>,
        steps: usize,
    }

    impl Canvas for Tape {
        fn draw_move(&mut self, from: Position, to: Position, is_final: bool) {
            self.moves.push((from, to, is_final));
        }

        fn step(&mut self) -> ControlFlow<()> {
            self.steps += 1;
            ControlFlow::Continue(())
        }
    }

    fn open_3x3() -> Maze {
        let config = MazeConfig::new(3, 3, 10.0, 10.0)
            .with_opening_probability(1.0)
            .with_start((0, 1))
            .with_end((2, 1));
        Maze::generate(&config, Some(0)).unwrap()
    }

    #[test]
    fn test_found_path_is_replayed_last_as_final() {
        let maze = open_3x3();
        let mut tape = Tape::default();
        let report = solve(&maze, Solver::AStar, &mut tape);
        assert!(report.is_found());

        let finals = tape
            .moves
            .iter()
            .filter(|m| m.2)
            .map(|m| (m.0, m.1))
            .collect::<Vec<_>>();
        assert_eq!(finals, vec![((0, 1), (1, 1)), ((1, 1), (2, 1))]);
        // Final moves come after every exploratory move
        let first_final = tape.moves.iter().position(|m| m.2).unwrap();
        assert!(tape.moves[first_final..].iter().all(|m| m.2));
        // Two expansions plus the completion step
        assert_eq!(tape.steps, 3);
    }

    #[test]
    fn test_exhausted_replays_each_dead_end() {
        let config = MazeConfig::new(4, 4, 10.0, 10.0).with_opening_probability(0.0);
        let maze = Maze::generate(&config, Some(2)).unwrap();
        let mut tape = Tape::default();
        let report = solve(&maze, Solver::Dfs, &mut tape);
        assert_eq!(report.dead_ends(), &[vec![maze.start()]]);
        // A single-cell trail has no edge to draw
        assert!(tape.moves.is_empty());
        // One expansion plus the completion step
        assert_eq!(tape.steps, 2);
    }

    #[test]
    fn test_replay_in_order() {
        let mut animator = PathAnimator::new(Tape::default());
        animator.replay(&[(0, 0), (0, 1), (1, 1)]);
        animator.replay(&[(2, 2)]);
        let tape = animator.into_inner();
        assert_eq!(
            tape.moves,
            vec![((0, 0), (0, 1), true), ((0, 1), (1, 1), true)]
        );
    }

    #[test]
    fn test_hooks_receive_moves() {
        let maze = open_3x3();
        let mut moves = Vec::new();
        let mut steps = 0;
        let report = solve_with_hooks(
            &maze,
            Solver::Bfs,
            |from, to, is_final| moves.push((from, to, is_final)),
            || steps += 1,
        );
        assert!(report.is_found());
        assert_eq!(moves.first(), Some(&((0, 1), (0, 0), false)));
        assert_eq!(moves.last(), Some(&((1, 1), (2, 1), true)));
        assert!(steps > 0);
    }
}
