use rand::Rng;

use crate::maze::{Grid, Walls};

/// Decides every wall in a single row-major pass.
///
/// Each cell draws whether its right and bottom walls are open. Its left and
/// top walls are not drawn again but copied from the decisions made by the
/// cell to the left and the cell above, so both sides of a shared wall always
/// agree. The outer border is never opened.
pub fn row_scan<R: Rng + ?Sized>(
    rows: u16,
    cols: u16,
    opening_probability: f64,
    rng: &mut R,
) -> Grid<Walls> {
    let mut walls = Grid::new(rows, cols, Walls::CLOSED);
    // Bottom decision of the previous row, per column. Row 0 sits under the closed border.
    let mut top_open = vec![false; cols as usize];

    for row in 0..rows {
        // The left border is closed for the first cell of every row
        let mut left_open = false;
        for col in 0..cols {
            // Both draws happen for every cell so the draw sequence only depends on the shape
            let bottom_open = rng.random_bool(opening_probability) && row + 1 < rows;
            let right_open = rng.random_bool(opening_probability) && col + 1 < cols;

            walls[(row, col)] = Walls {
                top: !top_open[col as usize],
                bottom: !bottom_open,
                left: !left_open,
                right: !right_open,
            };

            top_open[col as usize] = bottom_open;
            left_open = right_open;
        }
    }

    walls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_shared_walls_agree() {
        let mut rng = get_rng(Some(7));
        let walls = row_scan(12, 17, 0.4375, &mut rng);
        for ((row, col), w) in walls.iter() {
            if col + 1 < walls.cols() {
                assert_eq!(w.right, walls[(row, col + 1)].left, "at {:?}", (row, col));
            }
            if row + 1 < walls.rows() {
                assert_eq!(w.bottom, walls[(row + 1, col)].top, "at {:?}", (row, col));
            }
        }
    }

    #[test]
    fn test_border_is_closed_even_when_always_open() {
        let mut rng = get_rng(Some(3));
        let walls = row_scan(4, 5, 1.0, &mut rng);
        for ((row, col), w) in walls.iter() {
            if row == 0 {
                assert!(w.top);
            }
            if row == 3 {
                assert!(w.bottom);
            }
            if col == 0 {
                assert!(w.left);
            }
            if col == 4 {
                assert!(w.right);
            }
        }
        // Every interior wall is open
        assert!(!walls[(1, 1)].top && !walls[(1, 1)].bottom);
        assert!(!walls[(1, 1)].left && !walls[(1, 1)].right);
    }

    #[test]
    fn test_never_open_closes_everything() {
        let mut rng = get_rng(Some(3));
        let walls = row_scan(4, 4, 0.0, &mut rng);
        assert!(walls.iter().all(|(_, w)| *w == Walls::CLOSED));
    }
}
