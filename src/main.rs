use std::{path::PathBuf, process::ExitCode, time::Duration};

use clap::Parser;
use maze_solver::{
    app::{self, App, AppError},
    maze::{Maze, MazeConfig},
    solvers::Solver,
};
use tracing_appender::non_blocking::WorkerGuard;

/// Generate a random maze and watch DFS, BFS, greedy best-first and A* solve it.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of maze rows
    #[arg(short, long, default_value_t = 12)]
    rows: u16,
    /// Number of maze columns
    #[arg(short, long, default_value_t = 20)]
    cols: u16,
    /// Seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,
    /// Chance that an interior wall is left open
    #[arg(short = 'p', long, default_value_t = MazeConfig::DEFAULT_OPENING_PROBABILITY)]
    opening_probability: f64,
    /// Solver run on Enter: dfs, bfs, gbfs or astar
    #[arg(short, long, default_value = "astar")]
    solver: Solver,
    /// Pause after each search step, in milliseconds
    #[arg(long, default_value_t = 20)]
    delay_ms: u64,
    /// Solve once and print the result instead of opening the terminal UI
    #[arg(long)]
    headless: bool,
    /// Where to write logs
    #[arg(long, default_value = "maze-solver.log")]
    log_file: PathBuf,
    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

/// Logs go to a file since the terminal belongs to the UI.
fn init_logging(cli: &Cli) -> WorkerGuard {
    let directory = cli
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = cli
        .log_file
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("maze-solver.log"));
    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}

fn run_headless(app: &App, cli: &Cli) -> Result<(), AppError> {
    let maze = Maze::generate(app.config(), cli.seed)?;
    println!(
        "{}x{} maze, start {:?}, end {:?}",
        maze.rows(),
        maze.cols(),
        maze.start(),
        maze.end()
    );
    let report = cli.solver.run(&maze, &mut ());
    println!("{}", app::summarize(&report));
    Ok(())
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let app = App::new(
        cli.rows,
        cli.cols,
        cli.opening_probability,
        cli.seed,
        cli.solver,
        Duration::from_millis(cli.delay_ms),
    );
    app.config().validate()?;

    if cli.headless {
        return run_headless(&app, cli);
    }

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = app.run(&mut stdout);
    // Restore the terminal even if the app failed
    App::restore_terminal(&mut stdout)?;
    result
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_logging(&cli);
    tracing::info!("[main] starting with {:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("[main] {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
