mod renderer;

use std::{
    io::{Stdout, Write},
    time::{Duration, Instant},
};

use crossterm::{
    cursor,
    event::{self, KeyCode},
    queue,
    terminal::{self, ClearType},
};
use rand::rngs::StdRng;
use thiserror::Error;

use crate::{
    animator,
    generators::{generate_maze, get_rng},
    maze::{ConfigError, Maze, MazeConfig, Padding},
    solvers::{SearchOutcome, SearchReport, Solver},
};

pub use renderer::{COL_SIZE, ROW_SIZE, TerminalCanvas};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid maze configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(
        "terminal is {term_width}x{term_height} but the maze needs {width}x{height}; resize the terminal or use fewer rows/columns"
    )]
    TerminalTooSmall {
        term_width: u16,
        term_height: u16,
        width: u16,
        height: u16,
    },
}

/// Terminal front-end: draws the maze and animates solvers chosen by key press.
pub struct App {
    config: MazeConfig,
    seed: Option<u64>,
    solver: Solver,
    /// Pause after each search step
    step_delay: Duration,
}

impl App {
    /// Lines kept free under the maze for the status line.
    const STATUS_LINES: u16 = 2;
    const CONTROLS: &'static str =
        "Enter: run | 1 DFS  2 BFS  3 GBFS  4 A* | r: new maze | Esc: stop/quit";

    /// Builds an app for a `rows` x `cols` maze laid out in terminal cells.
    pub fn new(
        rows: u16,
        cols: u16,
        opening_probability: f64,
        seed: Option<u64>,
        solver: Solver,
        step_delay: Duration,
    ) -> Self {
        // One extra column and row for the closing right and bottom walls
        let config = MazeConfig::new(rows, cols, ROW_SIZE, COL_SIZE)
            .with_padding(Padding {
                right: 1.0,
                bottom: 1.0,
                ..Padding::default()
            })
            .with_opening_probability(opening_probability);
        Self {
            config,
            seed,
            solver,
            step_delay,
        }
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode and enter alternate screen
    /// Also sets a panic hook to restore terminal on panic
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Leave alternate screen and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
        stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn check_terminal_size(&self) -> Result<(), AppError> {
        let (term_width, term_height) = terminal::size()?;
        let width = self.config.width().ceil() as u16;
        let height = self.config.height().ceil() as u16 + App::STATUS_LINES;
        if term_width < width || term_height < height {
            return Err(AppError::TerminalTooSmall {
                term_width,
                term_height,
                width,
                height,
            });
        }
        Ok(())
    }

    fn redraw(stdout: &mut Stdout, maze: &Maze, status: &str) -> std::io::Result<()> {
        renderer::draw_maze(stdout, maze)?;
        renderer::draw_status(stdout, maze, status)
    }

    /// Clears previous animation and runs `solver` on `maze`.
    fn animate(
        &self,
        stdout: &mut Stdout,
        maze: &Maze,
        solver: Solver,
    ) -> Result<SearchReport, AppError> {
        App::redraw(stdout, maze, &format!("Running {solver}... (Esc to stop)"))?;
        let mut canvas = TerminalCanvas::new(stdout, maze, self.step_delay);
        let report = animator::solve(maze, solver, &mut canvas);
        canvas.finish()?;
        Ok(report)
    }

    /// Main application loop
    pub fn run(&self, stdout: &mut Stdout) -> Result<(), AppError> {
        self.check_terminal_size()?;

        let mut rng: StdRng = get_rng(self.seed);
        let mut maze = generate_maze(&self.config, &mut rng)?;
        let mut solver = self.solver;
        App::redraw(stdout, &maze, App::CONTROLS)?;
        tracing::info!("[app] Started main app loop");

        loop {
            let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? else {
                continue;
            };
            if kind != event::KeyEventKind::Press {
                // Only handle key press events
                continue;
            }
            match code {
                KeyCode::Enter | KeyCode::Char(' ') => {}
                KeyCode::Char(c @ '1'..='4') => {
                    solver = Solver::ALL[c as usize - '1' as usize];
                }
                KeyCode::Char('r') => {
                    maze = generate_maze(&self.config, &mut rng)?;
                    tracing::info!("[app] Regenerated maze");
                    App::redraw(stdout, &maze, App::CONTROLS)?;
                    continue;
                }
                KeyCode::Esc | KeyCode::Char('q') => break,
                _ => continue,
            }

            let report = self.animate(stdout, &maze, solver)?;
            let status = format!("{} | {}", summarize(&report), App::CONTROLS);
            renderer::draw_status(stdout, &maze, &status)?;
        }

        tracing::info!("[app] Exiting main app loop");
        Ok(())
    }
}

/// One-line description of a search result.
pub fn summarize(report: &SearchReport) -> String {
    let expanded = report.expanded.len();
    match &report.outcome {
        SearchOutcome::Found(path) => format!(
            "{}: path of {} steps, {} cells expanded",
            report.solver,
            path.len() - 1,
            expanded
        ),
        SearchOutcome::Exhausted(dead_ends) => format!(
            "{}: no path, {} dead ends, {} cells expanded",
            report.solver,
            dead_ends.len(),
            expanded
        ),
        SearchOutcome::Cancelled => format!("{}: stopped after {} cells", report.solver, expanded),
    }
}

/// Profiling mode: generate and solve headlessly, without touching the terminal.
/// Each iteration uses a maze seeded by its index so runs are comparable.
pub fn profile(
    config: &MazeConfig,
    solvers: &[Solver],
    num_iterations: usize,
) -> Result<Vec<(Solver, Duration)>, ConfigError> {
    let mut timings = Vec::with_capacity(solvers.len());
    for &solver in solvers {
        let mut elapsed = Duration::ZERO;
        for i in 0..num_iterations {
            let maze = Maze::generate(config, Some(i as u64))?;
            let started = Instant::now();
            solver.run(&maze, &mut ());
            elapsed += started.elapsed();
        }
        tracing::info!(
            "[profile] {} took {:?} over {} iterations",
            solver,
            elapsed,
            num_iterations
        );
        timings.push((solver, elapsed));
    }
    Ok(timings)
}
