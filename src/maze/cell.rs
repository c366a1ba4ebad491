use std::fmt;

use super::geometry::Point;

/// One of the four sides of a cell, and the step towards the neighbor on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Order in which a cell reports its open sides.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Relative `(row, col)` offset of the neighbor in this direction.
    pub const fn offset(self) -> (i16, i16) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Wall presence on each side of a cell. `true` means the wall is there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Walls {
    pub const CLOSED: Walls = Walls {
        top: true,
        bottom: true,
        left: true,
        right: true,
    };

    pub const fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.top,
            Direction::Down => self.bottom,
        }
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::CLOSED
    }
}

/// A single maze square: its wall state plus the rectangle it occupies when drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    walls: Walls,
    top_left: Point,
    bottom_right: Point,
}

impl Cell {
    pub fn new(walls: Walls, top_left: Point, bottom_right: Point) -> Self {
        Cell {
            walls,
            top_left,
            bottom_right,
        }
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.has(direction)
    }

    /// Sides without a wall, in left, right, up, down order.
    /// This is the cell's adjacency list expressed as directions.
    pub fn connections(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|&direction| !self.walls.has(direction))
    }

    pub fn is_dead_end(&self) -> bool {
        self.connections().next().is_none()
    }

    /// Corners as `[top_left, top_right, bottom_left, bottom_right]`.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left,
            Point::new(self.bottom_right.x, self.top_left.y),
            Point::new(self.top_left.x, self.bottom_right.y),
            self.bottom_right,
        ]
    }

    pub fn center(&self) -> Point {
        self.top_left.midpoint(self.bottom_right)
    }

    /// End points of the wall segment on the given side.
    pub fn wall_segment(&self, direction: Direction) -> (Point, Point) {
        let [top_left, top_right, bottom_left, bottom_right] = self.corners();
        match direction {
            Direction::Left => (top_left, bottom_left),
            Direction::Right => (top_right, bottom_right),
            Direction::Up => (top_left, top_right),
            Direction::Down => (bottom_left, bottom_right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cell(walls: Walls) -> Cell {
        Cell::new(walls, Point::new(10.0, 20.0), Point::new(24.0, 34.0))
    }

    #[test]
    fn test_connections_follow_missing_walls() {
        let cell = unit_cell(Walls {
            top: false,
            bottom: true,
            left: false,
            right: true,
        });
        let open = cell.connections().collect::<Vec<_>>();
        assert_eq!(open, vec![Direction::Left, Direction::Up]);
        assert!(!cell.is_dead_end());
    }

    #[test]
    fn test_closed_cell_is_dead_end() {
        let cell = unit_cell(Walls::CLOSED);
        assert_eq!(cell.connections().count(), 0);
        assert!(cell.is_dead_end());
    }

    #[test]
    fn test_geometry() {
        let cell = unit_cell(Walls::CLOSED);
        let [tl, tr, bl, br] = cell.corners();
        assert_eq!(tl, Point::new(10.0, 20.0));
        assert_eq!(tr, Point::new(24.0, 20.0));
        assert_eq!(bl, Point::new(10.0, 34.0));
        assert_eq!(br, Point::new(24.0, 34.0));
        assert_eq!(cell.center(), Point::new(17.0, 27.0));
        assert_eq!(cell.wall_segment(Direction::Right), (tr, br));
    }

    #[test]
    fn test_opposite_offsets_cancel() {
        for direction in Direction::ALL {
            let (dr, dc) = direction.offset();
            let (or, oc) = direction.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }
}
