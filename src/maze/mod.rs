pub mod cell;
pub mod config;
pub mod geometry;
pub mod grid;

pub use cell::{Cell, Direction, Walls};
pub use config::{ConfigError, MazeConfig};
pub use geometry::{Padding, Point};
pub use grid::Grid;

use crate::generators;

/// Grid coordinate as `(row, col)`.
pub type Position = (u16, u16);

/// A generated maze: cells with their walls, the two entry cells and the
/// drawing extent. Immutable once built; regenerate to get a new layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    cells: Grid<Cell>,
    start: Position,
    end: Position,
    width: f64,
    height: f64,
}

impl Maze {
    /// Lays out cells for the given wall flags using the geometry in `config`.
    /// Cell `(r, c)` has its top left corner at `(c * col_size + left, r * row_size + top)`.
    pub(crate) fn from_walls(
        walls: &Grid<Walls>,
        config: &MazeConfig,
        start: Position,
        end: Position,
    ) -> Self {
        let cells = walls
            .iter()
            .map(|((row, col), &walls)| {
                let top_left = Point::new(
                    col as f64 * config.col_size + config.padding.left,
                    row as f64 * config.row_size + config.padding.top,
                );
                let bottom_right =
                    Point::new(top_left.x + config.col_size, top_left.y + config.row_size);
                Cell::new(walls, top_left, bottom_right)
            })
            .collect::<Vec<_>>();

        Maze {
            cells: Grid::from_vec(walls.rows(), walls.cols(), cells),
            start,
            end,
            width: config.width(),
            height: config.height(),
        }
    }

    /// Generates a maze from `config`, seeded for reproducibility when `seed` is given.
    pub fn generate(config: &MazeConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        let mut rng = generators::get_rng(seed);
        generators::generate_maze(config, &mut rng)
    }

    /// Number of cell rows.
    pub fn rows(&self) -> u16 {
        self.cells.rows()
    }

    /// Number of cell columns.
    pub fn cols(&self) -> u16 {
        self.cells.cols()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Total drawing width including padding.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Total drawing height including padding.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        self.cells.is_in_bounds(pos)
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.cells.iter()
    }

    /// The position one step from `pos` in `direction`, if it lies inside the grid.
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let next = (
            pos.0.checked_add_signed(dr)?,
            pos.1.checked_add_signed(dc)?,
        );
        self.is_in_bounds(next).then_some(next)
    }

    /// In-bounds neighbors reachable through an open side of `pos`.
    pub fn open_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        self.cell(pos)
            .into_iter()
            .flat_map(|cell| cell.connections())
            .filter_map(move |direction| self.neighbor(pos, direction))
    }
}

impl std::ops::Index<Position> for Maze {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos]
    }
}
