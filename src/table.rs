//! Flat two-dimensional arena backing the DP.
//!
//! A `DpTable` is indexed by `(row, col)` and stored row-major in a single
//! `Vec`. The solver uses rows for "partitions used" and columns for
//! "prefix length"; row 0 and column 0 are allocated but left unused.

/// Row-major table of `rows x cols` cells.
#[derive(Debug, Clone)]
pub struct DpTable<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy> DpTable<T> {
    /// Allocate a table with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = value;
    }

    /// Borrow a full row.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Mutably borrow a full row.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    /// Split out `row - 1` (shared) and `row` (mutable) so a row can be
    /// filled from its predecessor without copying.
    ///
    /// # Panics
    /// Panics if `row == 0` or `row >= rows`.
    pub fn prev_and_row_mut(&mut self, row: usize) -> (&[T], &mut [T]) {
        assert!(row > 0 && row < self.rows, "row {row} has no predecessor");
        let (head, tail) = self.cells.split_at_mut(row * self.cols);
        let prev = &head[(row - 1) * self.cols..];
        (prev, &mut tail[..self.cols])
    }
}
