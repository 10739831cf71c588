//! Dynamic-programming grids shared by the fill and both tracebacks.
//!
//! Both grids have `len(seq2) + 1` rows and `len(seq1) + 1` columns and are
//! stored row-major in a single buffer. Cell `(row, col)` covers the prefixes
//! `seq2[..row]` and `seq1[..col]`.

use serde::Serialize;
use std::fmt;

/// Cells visited by a traceback, as `(row, col)` pairs from the final cell to `(0, 0)`.
pub type CoordinatePath = Vec<(usize, usize)>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreMatrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Optimal global score, held in the bottom-right cell.
    pub fn final_score(&self) -> i32 {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// Iterate rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[i32]> {
        self.data.chunks(self.cols)
    }
}

impl fmt::Display for ScoreMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        for row in self.row_slices() {
            let line: Vec<String> = row.iter().map(|v| format!("{:>width$}", v)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Set of recurrence terms that reached a cell's maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Directions(u8);

impl Directions {
    pub const NONE: Directions = Directions(0);
    pub const DIAG: Directions = Directions(1);
    pub const LEFT: Directions = Directions(1 << 1);
    pub const UP: Directions = Directions(1 << 2);

    #[inline]
    pub fn contains(self, other: Directions) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    #[inline]
    pub fn insert(&mut self, other: Directions) {
        self.0 |= other.0;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of outgoing edges from this cell.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl std::ops::BitOr for Directions {
    type Output = Directions;

    fn bitor(self, rhs: Directions) -> Directions {
        Directions(self.0 | rhs.0)
    }
}

/// Per-cell direction flags for the all-paths traceback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionMatrix {
    data: Vec<Directions>,
    rows: usize,
    cols: usize,
}

impl DirectionMatrix {
    /// Grid with the boundary already set: row 0 points left, column 0 points up,
    /// and the origin has no flags.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut matrix = Self {
            data: vec![Directions::NONE; rows * cols],
            rows,
            cols,
        };
        for col in 1..cols {
            matrix.set(0, col, Directions::LEFT);
        }
        for row in 1..rows {
            matrix.set(row, 0, Directions::UP);
        }
        matrix
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Directions {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Directions) {
        self.data[row * self.cols + col] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_flags() {
        let mut dirs = Directions::NONE;
        assert!(dirs.is_empty());
        assert!(!dirs.contains(Directions::DIAG));

        dirs.insert(Directions::DIAG);
        dirs.insert(Directions::UP);
        assert!(dirs.contains(Directions::DIAG));
        assert!(!dirs.contains(Directions::LEFT));
        assert!(dirs.contains(Directions::UP));
        assert_eq!(dirs.len(), 2);
        assert_eq!(dirs.bits(), 0b101);
        assert_eq!(Directions::DIAG | Directions::LEFT, Directions(0b011));
    }

    #[test]
    fn test_direction_matrix_boundary() {
        let matrix = DirectionMatrix::new(3, 4);

        assert!(matrix.get(0, 0).is_empty());
        for col in 1..4 {
            assert_eq!(matrix.get(0, col), Directions::LEFT);
        }
        for row in 1..3 {
            assert_eq!(matrix.get(row, 0), Directions::UP);
        }
        assert!(matrix.get(2, 3).is_empty());
    }

    #[test]
    fn test_score_matrix_display() {
        let mut matrix = ScoreMatrix::new(2, 2);
        matrix.set(0, 1, -1);
        matrix.set(1, 0, -1);
        matrix.set(1, 1, 1);

        assert_eq!(matrix.final_score(), 1);
        assert_eq!(matrix.to_string(), " 0 -1\n-1  1\n");
    }
}
