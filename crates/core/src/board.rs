//! Board module - the occupancy grid of settled cells
//!
//! A `rows x cols` grid of filled/empty cells, row 0 at the top, stored as a
//! flat row-major vector. Dimensions are fixed when the board is created.
//! Coordinates are `(row, col)`; out-of-range coordinates never panic.

/// The settled-block playing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<bool>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows as usize * cols as usize],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i8, col: i8) -> Option<usize> {
        if row < 0 || col < 0 || row as u8 >= self.rows || col as u8 >= self.cols {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Cell state at (row, col), `None` when out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<bool> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Whether (row, col) is blocked: filled, or outside the board.
    pub fn test(&self, row: i8, col: i8) -> bool {
        self.get(row, col).unwrap_or(true)
    }

    /// Mark (row, col) filled.
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = true;
                true
            }
            None => false,
        }
    }

    /// Cells of one row, `None` when out of bounds.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.rows as usize {
            return None;
        }
        let start = row * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|&filled| filled))
            .unwrap_or(false)
    }

    /// Delete a row, shift every row above it down by one and insert an empty
    /// row at the top.
    /// Returns false (and changes nothing) if the row is out of bounds
    pub fn remove_row(&mut self, row: usize) -> bool {
        if row >= self.rows as usize {
            return false;
        }
        let width = self.cols as usize;

        // Shifting rows 0..row down by one is one overlapping move.
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(false);
        true
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Scans bottom-up. After a removal the rows above have shifted into the
    /// current index, so the same index is examined again before moving up.
    /// A zero-width board has no rows to clear.
    pub fn clear_full_rows(&mut self) -> u32 {
        if self.cols == 0 {
            return 0;
        }
        let mut cleared = 0;
        let mut row = self.rows as usize;
        while row > 0 {
            if self.is_row_full(row - 1) {
                self.remove_row(row - 1);
                cleared += 1;
            } else {
                row -= 1;
            }
        }
        cleared
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Rows rendered as `#` (filled) and `.` (empty).
    pub fn to_strings(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols.max(1) as usize)
            .map(|row| row.iter().map(|&f| if f { '#' } else { '.' }).collect())
            .collect()
    }

    /// Build a board from `#`/`.` rows, for tests.
    #[cfg(test)]
    pub fn from_strings(rows: &[&str]) -> Self {
        let cols = rows[0].len();
        assert!(rows.iter().all(|r| r.len() == cols));
        let mut board = Self::new(rows.len() as u8, cols as u8);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' {
                    board.set(r as i8, c as i8);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_ROWS, crate::types::DEFAULT_COLS)
    }
}
