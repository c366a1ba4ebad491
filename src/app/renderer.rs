use std::{
    io::{Stdout, Write},
    ops::ControlFlow,
    time::Duration,
};

use crossterm::{
    cursor,
    event::{self, KeyCode},
    queue,
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    animator::Canvas,
    maze::{Direction, Maze, Point, Position},
};

/// Terminal columns per maze column. Terminal glyphs are about twice as tall as wide.
pub const COL_SIZE: f64 = 4.0;
/// Terminal rows per maze row.
pub const ROW_SIZE: f64 = 2.0;

const WALL_COLOR: Color = Color::DarkGrey;
const EXPLORE_COLOR: Color = Color::Cyan;
const FINAL_COLOR: Color = Color::Red;

fn to_terminal(point: Point) -> (u16, u16) {
    (point.x.round().max(0.0) as u16, point.y.round().max(0.0) as u16)
}

/// Queue `glyph` on every terminal cell along the segment from `a` to `b`.
fn plot(stdout: &mut Stdout, a: Point, b: Point, glyph: char, color: Color) -> std::io::Result<()> {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let steps = dx.abs().max(dy.abs()).round() as u32;
    for i in 0..=steps {
        let t = if steps == 0 {
            0.0
        } else {
            i as f64 / steps as f64
        };
        let (x, y) = to_terminal(Point::new(a.x + dx * t, a.y + dy * t));
        queue!(
            stdout,
            cursor::MoveTo(x, y),
            style::PrintStyledContent(glyph.with(color))
        )?;
    }
    Ok(())
}

/// Clear the screen and draw every wall plus the two entry markers.
pub fn draw_maze(stdout: &mut Stdout, maze: &Maze) -> std::io::Result<()> {
    queue!(stdout, terminal::Clear(ClearType::All))?;
    for (_, cell) in maze.cells() {
        for direction in Direction::ALL {
            if !cell.has_wall(direction) {
                continue;
            }
            let (a, b) = cell.wall_segment(direction);
            let glyph = match direction {
                Direction::Left | Direction::Right => '|',
                Direction::Up | Direction::Down => '-',
            };
            plot(stdout, a, b, glyph, WALL_COLOR)?;
        }
    }
    // Corners last so they are not overwritten by wall segments
    for (_, cell) in maze.cells() {
        for corner in cell.corners() {
            plot(stdout, corner, corner, '+', WALL_COLOR)?;
        }
    }
    draw_entries(stdout, maze)?;
    stdout.flush()
}

/// Draw the start and end markers on top of whatever is at their centers.
pub fn draw_entries(stdout: &mut Stdout, maze: &Maze) -> std::io::Result<()> {
    let start = maze[maze.start()].center();
    let end = maze[maze.end()].center();
    plot(stdout, start, start, 'S', Color::Green)?;
    plot(stdout, end, end, 'E', Color::Red)
}

/// Print a single line of text right below the maze.
pub fn draw_status(stdout: &mut Stdout, maze: &Maze, text: &str) -> std::io::Result<()> {
    let y = maze.height().ceil() as u16 + 1;
    queue!(
        stdout,
        cursor::MoveTo(0, y),
        terminal::Clear(ClearType::CurrentLine),
        style::PrintStyledContent(text.with(Color::Yellow))
    )?;
    stdout.flush()
}

/// Canvas drawing search moves as lines between cell centers.
///
/// Hooks cannot return I/O errors, so the first one is kept and the search is
/// stopped on the next step. Pressing Esc while animating also stops it.
pub struct TerminalCanvas<'a> {
    stdout: &'a mut Stdout,
    maze: &'a Maze,
    step_delay: Duration,
    error: Option<std::io::Error>,
}

impl<'a> TerminalCanvas<'a> {
    pub fn new(stdout: &'a mut Stdout, maze: &'a Maze, step_delay: Duration) -> Self {
        Self {
            stdout,
            maze,
            step_delay,
            error: None,
        }
    }

    /// The first I/O error hit while drawing, if any.
    pub fn finish(self) -> std::io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Flush pending draws and wait for the frame delay.
    /// Returns Ok(false) if the user asked to cancel.
    fn frame(&mut self) -> std::io::Result<bool> {
        draw_entries(self.stdout, self.maze)?;
        self.stdout.flush()?;
        if !self.step_delay.is_zero() {
            std::thread::sleep(self.step_delay);
        }
        while event::poll(Duration::ZERO)? {
            if let event::Event::Key(event::KeyEvent {
                code: KeyCode::Esc,
                kind: event::KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Canvas for TerminalCanvas<'_> {
    fn draw_move(&mut self, from: Position, to: Position, is_final: bool) {
        if self.error.is_some() {
            return;
        }
        let (Some(a), Some(b)) = (self.maze.cell(from), self.maze.cell(to)) else {
            return;
        };
        let (glyph, color) = if is_final {
            ('#', FINAL_COLOR)
        } else {
            ('.', EXPLORE_COLOR)
        };
        if let Err(e) = plot(self.stdout, a.center(), b.center(), glyph, color) {
            self.error = Some(e);
        }
    }

    fn step(&mut self) -> ControlFlow<()> {
        if self.error.is_some() {
            return ControlFlow::Break(());
        }
        match self.frame() {
            Ok(true) => ControlFlow::Continue(()),
            Ok(false) => {
                tracing::debug!("[render] Esc pressed, cancelling search");
                ControlFlow::Break(())
            }
            Err(e) => {
                tracing::debug!("[render] draw failed: {}", e);
                self.error = Some(e);
                ControlFlow::Break(())
            }
        }
    }
}
