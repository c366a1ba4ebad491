use std::ops::ControlFlow;

use maze_solver::{
    animator,
    generators::{generate_maze, get_rng},
    maze::{Direction, Maze, MazeConfig, Position},
    solvers::{SearchEvent, SearchObserver, SearchOutcome, Solver},
};

fn maze_with_seed(rows: u16, cols: u16, seed: u64) -> Maze {
    let config = MazeConfig::new(rows, cols, 10.0, 10.0);
    generate_maze(&config, &mut get_rng(Some(seed))).unwrap()
}

#[test]
fn shared_walls_agree_between_neighbors() {
    for seed in 0..20 {
        let maze = maze_with_seed(9, 13, seed);
        for (pos, cell) in maze.cells() {
            for direction in Direction::ALL {
                if let Some(other) = maze.neighbor(pos, direction) {
                    assert_eq!(
                        cell.has_wall(direction),
                        maze[other].has_wall(direction.opposite()),
                        "seed {seed}, {pos:?} facing {direction}"
                    );
                }
            }
        }
    }
}

#[test]
fn outer_border_is_always_closed() {
    for seed in 0..20 {
        let maze = maze_with_seed(7, 11, seed);
        for (pos, cell) in maze.cells() {
            for direction in Direction::ALL {
                if maze.neighbor(pos, direction).is_none() {
                    assert!(cell.has_wall(direction), "seed {seed}, {pos:?} opens {direction}");
                }
            }
        }
    }
}

#[test]
fn same_seed_gives_same_maze_and_trace() {
    #[derive(Default)]
    struct Trace(Vec<(Position, Position, bool)>);

    impl animator::Canvas for Trace {
        fn draw_move(&mut self, from: Position, to: Position, is_final: bool) {
            self.0.push((from, to, is_final));
        }

        fn step(&mut self) -> ControlFlow<()> {
            ControlFlow::Continue(())
        }
    }

    let a = maze_with_seed(20, 30, 1234);
    let b = maze_with_seed(20, 30, 1234);
    assert_eq!(a, b);

    for solver in Solver::ALL {
        let mut trace_a = Trace::default();
        let mut trace_b = Trace::default();
        let report_a = animator::solve(&a, solver, &mut trace_a);
        let report_b = animator::solve(&b, solver, &mut trace_b);
        assert_eq!(report_a, report_b);
        assert_eq!(trace_a.0, trace_b.0);
    }
}

#[test]
fn found_paths_are_valid_and_astar_is_shortest() {
    let mut solved = 0;
    for seed in 0..200 {
        let maze = maze_with_seed(10, 14, seed);
        let reports = Solver::ALL.map(|solver| solver.run(&maze, &mut ()));

        // Every strategy explores the same connected component
        let found = reports.iter().filter(|r| r.is_found()).count();
        assert!(found == 0 || found == reports.len(), "seed {seed}");
        if found == 0 {
            continue;
        }
        solved += 1;

        for report in &reports {
            let path = report.path().unwrap();
            assert_eq!(path.first(), Some(&maze.start()));
            assert_eq!(path.last(), Some(&maze.end()));
            for pair in path.windows(2) {
                assert!(
                    maze.open_neighbors(pair[0]).any(|n| n == pair[1]),
                    "seed {seed}: {:?} -> {:?} is not an open edge",
                    pair[0],
                    pair[1]
                );
            }
            let mut unique = path.to_vec();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), path.len(), "seed {seed}: repeated cell");
        }

        let lengths = reports.map(|r| r.path().unwrap().len());
        let astar = lengths[3];
        assert!(lengths.iter().all(|&len| astar <= len), "seed {seed}: {lengths:?}");
        // BFS is shortest too on unit-cost edges
        assert_eq!(lengths[1], astar, "seed {seed}");
    }
    assert!(solved > 0, "no solvable maze among the sampled seeds");
}

#[test]
fn every_search_terminates_and_expands_each_cell_once() {
    for seed in 0..30 {
        let maze = maze_with_seed(12, 12, seed);
        for solver in Solver::ALL {
            let report = solver.run(&maze, &mut ());
            let mut expanded = report.expanded.clone();
            expanded.sort();
            expanded.dedup();
            assert_eq!(expanded.len(), report.expanded.len());
            assert!(!matches!(report.outcome, SearchOutcome::Cancelled));
        }
    }
}

#[test]
fn walled_in_start_falls_back_to_dead_end() {
    let config = MazeConfig::new(6, 6, 10.0, 10.0).with_opening_probability(0.0);
    let maze = Maze::generate(&config, Some(77)).unwrap();
    for solver in Solver::ALL {
        let mut final_moves = 0;
        let report = animator::solve_with_hooks(
            &maze,
            solver,
            |_, _, is_final| final_moves += is_final as usize,
            || {},
        );
        assert_eq!(report.dead_ends(), &[vec![maze.start()]], "{solver}");
        assert_eq!(final_moves, 0);
    }
}

#[test]
fn open_three_by_three_example() {
    let config = MazeConfig::new(3, 3, 10.0, 10.0)
        .with_opening_probability(1.0)
        .with_start((0, 1))
        .with_end((2, 1));
    let maze = Maze::generate(&config, None).unwrap();
    for solver in Solver::ALL {
        let report = solver.run(&maze, &mut ());
        assert!(report.is_found(), "{solver}");
    }
    for solver in [Solver::Bfs, Solver::AStar] {
        assert_eq!(solver.run(&maze, &mut ()).path().map(<[_]>::len), Some(3));
    }
}

#[test]
fn observer_sees_terminal_event_last() {
    struct Last(Option<&'static str>);

    impl SearchObserver for Last {
        fn on_event(&mut self, event: SearchEvent<'_>) -> ControlFlow<()> {
            assert!(self.0.is_none(), "event after the terminal one");
            match event {
                SearchEvent::Found(_) => self.0 = Some("found"),
                SearchEvent::Exhausted(_) => self.0 = Some("exhausted"),
                _ => {}
            }
            ControlFlow::Continue(())
        }
    }

    for seed in 0..10 {
        let maze = maze_with_seed(8, 8, seed);
        let mut last = Last(None);
        let report = Solver::GreedyBestFirst.run(&maze, &mut last);
        let expected = if report.is_found() { "found" } else { "exhausted" };
        assert_eq!(last.0, Some(expected));
    }
}
