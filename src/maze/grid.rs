use super::Position;

/// Row-major 2-D storage addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    data: Box<[T]>,
    rows: u16,
    cols: u16,
}

impl<T: Clone> Grid<T> {
    pub fn new(rows: u16, cols: u16, value: T) -> Self {
        let data = vec![value; rows as usize * cols as usize].into_boxed_slice();
        Grid { data, rows, cols }
    }
}

impl<T> Grid<T> {
    /// Builds a grid from row-major data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    pub fn from_vec(rows: u16, cols: u16, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            rows as usize * cols as usize,
            "Grid data must hold exactly rows * cols values"
        );
        Grid {
            data: data.into_boxed_slice(),
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.0 < self.rows && pos.1 < self.cols
    }

    pub fn is_boundary(&self, pos: Position) -> bool {
        pos.0 == 0 || pos.1 == 0 || pos.0 == self.rows - 1 || pos.1 == self.cols - 1
    }

    fn ravel_index(&self, pos: Position) -> usize {
        // Overflow-safe since rows and cols are u16 (assuming usize is at least 32 bits)
        pos.0 as usize * self.cols as usize + pos.1 as usize
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        self.is_in_bounds(pos)
            .then(|| &self.data[self.ravel_index(pos)])
    }

    /// Cells together with their position, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        let cols = self.cols as usize;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, value)| (((i / cols) as u16, (i % cols) as u16), value))
    }
}

impl<T> std::ops::Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.data[self.ravel_index(pos)]
    }
}

impl<T> std::ops::IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let idx = self.ravel_index(pos);
        &mut self.data[idx]
    }
}
