//! Random grid mazes and four interchangeable ways to solve them.
//!
//! [`generators::generate_maze`] builds a [`maze::Maze`] whose walls are
//! decided cell by cell. [`solvers::Solver`] runs depth-first, breadth-first,
//! greedy best-first or A* search over it and reports progress as a stream of
//! [`solvers::SearchEvent`]s, which [`animator::PathAnimator`] turns into
//! drawing calls on any [`animator::Canvas`].

pub mod animator;
pub mod app;
pub mod generators;
pub mod maze;
pub mod solvers;
