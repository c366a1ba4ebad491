use maze_solver::{app, maze::MazeConfig, solvers::Solver};

fn main() -> Result<(), maze_solver::maze::ConfigError> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);

    let config = MazeConfig::new(u8::MAX as u16, u8::MAX as u16, 1.0, 1.0);
    for (solver, elapsed) in app::profile(&config, &Solver::ALL, num_iters)? {
        println!("{solver}: {elapsed:?} over {num_iters} iterations");
    }
    Ok(())
}
