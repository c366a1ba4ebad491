use thiserror::Error;

use super::{Position, geometry::Padding};

/// Reasons a maze cannot be built from a [`MazeConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(
        "a {rows}x{cols} maze has no border cell off the corners; need at least 2x2 and one side of 3 or more"
    )]
    TooSmall { rows: u16, cols: u16 },
    #[error("cell sizes must be finite and positive, got {row_size}x{col_size}")]
    InvalidCellSize { row_size: f64, col_size: f64 },
    #[error("padding must be finite and non-negative, got {0:?}")]
    InvalidPadding(Padding),
    #[error("wall opening probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("start {0:?} is not a non-corner cell on the top or left border")]
    InvalidStart(Position),
    #[error("end {0:?} is not a non-corner cell on the bottom or right border")]
    InvalidEnd(Position),
}

/// Everything needed to generate a maze: grid shape, drawing geometry,
/// wall bias and optionally pinned entry cells.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub rows: u16,
    pub cols: u16,
    /// Height of one cell in drawing units.
    pub row_size: f64,
    /// Width of one cell in drawing units.
    pub col_size: f64,
    pub padding: Padding,
    /// Chance that an interior right or bottom wall is left open.
    pub opening_probability: f64,
    /// Fixed start cell instead of a random one.
    pub start: Option<Position>,
    /// Fixed end cell instead of a random one.
    pub end: Option<Position>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 70,
            cols: 110,
            row_size: 14.0,
            col_size: 14.0,
            padding: Padding::uniform(10.0),
            opening_probability: Self::DEFAULT_OPENING_PROBABILITY,
            start: None,
            end: None,
        }
    }
}

impl MazeConfig {
    /// Same odds as opening only when a uniform draw exceeds 0.5625.
    pub const DEFAULT_OPENING_PROBABILITY: f64 = 0.4375;

    pub fn new(rows: u16, cols: u16, row_size: f64, col_size: f64) -> Self {
        Self {
            rows,
            cols,
            row_size,
            col_size,
            padding: Padding::default(),
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_opening_probability(mut self, probability: f64) -> Self {
        self.opening_probability = probability;
        self
    }

    pub fn with_start(mut self, start: Position) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: Position) -> Self {
        self.end = Some(end);
        self
    }

    /// Total drawing width: `cols * col_size + left + right`.
    pub fn width(&self) -> f64 {
        self.cols as f64 * self.col_size + self.padding.left + self.padding.right
    }

    /// Total drawing height: `rows * row_size + top + bottom`.
    pub fn height(&self) -> f64 {
        self.rows as f64 * self.row_size + self.padding.top + self.padding.bottom
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (rows, cols) = (self.rows, self.cols);
        if rows < 2 || cols < 2 || (rows == 2 && cols == 2) {
            return Err(ConfigError::TooSmall { rows, cols });
        }
        let valid_size = |s: f64| s.is_finite() && s > 0.0;
        if !valid_size(self.row_size) || !valid_size(self.col_size) {
            return Err(ConfigError::InvalidCellSize {
                row_size: self.row_size,
                col_size: self.col_size,
            });
        }
        if self
            .padding
            .values()
            .iter()
            .any(|p| !p.is_finite() || *p < 0.0)
        {
            return Err(ConfigError::InvalidPadding(self.padding));
        }
        if !(0.0..=1.0).contains(&self.opening_probability) {
            return Err(ConfigError::InvalidProbability(self.opening_probability));
        }
        if let Some(start) = self.start.filter(|&s| !self.is_start_border(s)) {
            return Err(ConfigError::InvalidStart(start));
        }
        if let Some(end) = self.end.filter(|&e| !self.is_end_border(e)) {
            return Err(ConfigError::InvalidEnd(end));
        }
        Ok(())
    }

    fn is_start_border(&self, (row, col): Position) -> bool {
        (col == 0 && (1..self.rows - 1).contains(&row))
            || (row == 0 && (1..self.cols - 1).contains(&col))
    }

    fn is_end_border(&self, (row, col): Position) -> bool {
        (col == self.cols - 1 && (1..self.rows - 1).contains(&row))
            || (row == self.rows - 1 && (1..self.cols - 1).contains(&col))
    }

    /// Non-corner cells of the left border, then of the top border.
    pub fn start_candidates(&self) -> Vec<Position> {
        (1..self.rows - 1)
            .map(|row| (row, 0))
            .chain((1..self.cols - 1).map(|col| (0, col)))
            .collect()
    }

    /// Non-corner cells of the right border, then of the bottom border.
    pub fn end_candidates(&self) -> Vec<Position> {
        (1..self.rows - 1)
            .map(|row| (row, self.cols - 1))
            .chain((1..self.cols - 1).map(|col| (self.rows - 1, col)))
            .collect()
    }
}
