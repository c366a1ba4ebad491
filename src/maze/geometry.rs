/// A point in the rendering plane. Carries no graph meaning; cells expose
/// their corners and centers as points for whoever draws them.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Midpoint of the segment between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Outer margin around the grid, in the same units as the cell sizes.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub const fn uniform(value: f64) -> Self {
        Padding {
            left: value,
            right: value,
            top: value,
            bottom: value,
        }
    }

    pub(crate) fn values(&self) -> [f64; 4] {
        [self.left, self.right, self.top, self.bottom]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 2.0);
        assert_eq!(a.midpoint(b), Point::new(2.0, 1.0));
    }
}
