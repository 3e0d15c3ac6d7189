//! Shape catalog - the seven piece matrices and clockwise rotation
//!
//! Shapes are small boolean matrices (at most 4x4) stored inline, so they are
//! `Copy` and never allocate. Only the default orientation of each piece is
//! stored; other orientations are derived with [`rotate_cw`].

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest width or height of any shape.
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of a filled cell from the shape's top-left corner, as `(row, col)`.
pub type CellOffset = (i8, i8);

/// Filled cells of a shape, row-major.
pub type FilledCells = ArrayVec<CellOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// An immutable rectangular boolean matrix (one rotation state of a piece).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    const fn from_table(
        width: u8,
        height: u8,
        table: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    ) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < MAX_SHAPE_DIM {
            let mut c = 0;
            while c < MAX_SHAPE_DIM {
                cells[r][c] = table[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns `None` for an empty matrix, ragged rows, or anything larger
    /// than 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_SHAPE_DIM || width == 0 || width > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }
        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether `(row, col)` is a filled cell. Outside the matrix is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height as usize && col < self.width as usize && self.cells[row][col]
    }

    /// Offsets of every filled cell, row-major.
    pub fn filled_cells(&self) -> FilledCells {
        let mut out = FilledCells::new();
        for r in 0..self.height as usize {
            for c in 0..self.width as usize {
                if self.cells[r][c] {
                    out.push((r as i8, c as i8));
                }
            }
        }
        out
    }

    /// Rows rendered as `#` (filled) and `.` (empty).
    pub fn to_strings(&self) -> Vec<String> {
        (0..self.height as usize)
            .map(|r| {
                (0..self.width as usize)
                    .map(|c| if self.cells[r][c] { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

/// Rotate a shape 90° clockwise.
///
/// An `h x w` matrix becomes `w x h`; the cell at `(r, c)` moves to
/// `(c, h - 1 - r)`. The input is left untouched.
pub fn rotate_cw(shape: &Shape) -> Shape {
    let h = shape.height as usize;
    let w = shape.width as usize;
    let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
    for r in 0..h {
        for c in 0..w {
            cells[c][h - 1 - r] = shape.cells[r][c];
        }
    }
    Shape {
        width: shape.height,
        height: shape.width,
        cells,
    }
}

const I_SHAPE: Shape = Shape::from_table(4, 1, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]);
const O_SHAPE: Shape = Shape::from_table(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const T_SHAPE: Shape = Shape::from_table(3, 2, [[0, 1, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const J_SHAPE: Shape = Shape::from_table(3, 2, [[1, 0, 0, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const L_SHAPE: Shape = Shape::from_table(3, 2, [[0, 0, 1, 0], [1, 1, 1, 0], [0; 4], [0; 4]]);
const S_SHAPE: Shape = Shape::from_table(3, 2, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const Z_SHAPE: Shape = Shape::from_table(3, 2, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]);

/// Default (spawn) orientation of a piece kind.
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}
