//! Traceback over filled matrices.
//!
//! `single_path` re-derives each move from the score matrix with a fixed
//! DIAG > LEFT > UP preference. `all_paths` walks the direction matrix as a DAG
//! and yields every route from the final cell back to the origin.

use crate::alignment::error::{add_score, AlignError};
use crate::alignment::limits::CancellationToken;
use crate::alignment::matrix::{CoordinatePath, DirectionMatrix, Directions, ScoreMatrix};
use crate::alignment::result::Alignment;
use crate::alignment::scoring::ScoringScheme;
use needle_core::GAP_SYMBOL;
use std::collections::VecDeque;
use tracing::trace;

/// Walk back from the bottom-right cell, returning the alignment and the cells visited.
pub(crate) fn single_path<S: ScoringScheme>(
    scheme: &S,
    matrix: &ScoreMatrix,
    seq1: &[u8],
    seq2: &[u8],
) -> Result<(Alignment, CoordinatePath), AlignError> {
    let gap = scheme.gap();
    let (mut row, mut col) = (seq2.len(), seq1.len());

    let capacity = seq1.len() + seq2.len();
    let mut aligned1 = Vec::with_capacity(capacity);
    let mut aligned2 = Vec::with_capacity(capacity);
    let mut path = Vec::with_capacity(capacity + 1);
    path.push((row, col));

    while (row, col) != (0, 0) {
        let here = matrix.get(row, col);

        if row == 0 {
            col -= 1;
            aligned1.push(seq1[col]);
            aligned2.push(GAP_SYMBOL);
        } else if col == 0 {
            row -= 1;
            aligned1.push(GAP_SYMBOL);
            aligned2.push(seq2[row]);
        } else if add_score(
            matrix.get(row - 1, col - 1),
            scheme.cost(seq1[col - 1], seq2[row - 1])?,
            row,
            col,
        )? == here
        {
            row -= 1;
            col -= 1;
            aligned1.push(seq1[col]);
            aligned2.push(seq2[row]);
        } else if add_score(matrix.get(row, col - 1), gap, row, col)? == here {
            col -= 1;
            aligned1.push(seq1[col]);
            aligned2.push(GAP_SYMBOL);
        } else {
            debug_assert_eq!(matrix.get(row - 1, col).checked_add(gap), Some(here));
            row -= 1;
            aligned1.push(GAP_SYMBOL);
            aligned2.push(seq2[row]);
        }

        path.push((row, col));
    }

    aligned1.reverse();
    aligned2.reverse();

    Ok((Alignment::new(aligned1, aligned2, matrix.final_score()), path))
}

/// In-progress route: current cell plus the aligned symbols collected so far, in reverse.
#[derive(Debug, Clone)]
struct Frame {
    row: usize,
    col: usize,
    rev_seq1: Vec<u8>,
    rev_seq2: Vec<u8>,
}

impl Frame {
    fn advance(&mut self, step: Step) {
        self.row = step.row;
        self.col = step.col;
        self.rev_seq1.push(step.symbol1);
        self.rev_seq2.push(step.symbol2);
    }

    fn into_alignment(mut self, score: i32) -> Alignment {
        self.rev_seq1.reverse();
        self.rev_seq2.reverse();
        Alignment::new(self.rev_seq1, self.rev_seq2, score)
    }
}

#[derive(Debug, Clone, Copy)]
struct Step {
    row: usize,
    col: usize,
    symbol1: u8,
    symbol2: u8,
}

fn step(direction: Directions, row: usize, col: usize, seq1: &[u8], seq2: &[u8]) -> Step {
    if direction == Directions::DIAG {
        Step {
            row: row - 1,
            col: col - 1,
            symbol1: seq1[col - 1],
            symbol2: seq2[row - 1],
        }
    } else if direction == Directions::LEFT {
        Step {
            row,
            col: col - 1,
            symbol1: seq1[col - 1],
            symbol2: GAP_SYMBOL,
        }
    } else {
        Step {
            row: row - 1,
            col,
            symbol1: GAP_SYMBOL,
            symbol2: seq2[row - 1],
        }
    }
}

/// Enumerate every co-optimal alignment recorded in `directions`.
///
/// Work items are processed first-in first-out. The front item is walked to
/// the origin; at each cell the first set flag in DIAG, LEFT, UP order extends
/// it and every other set flag forks a copy onto the back of the queue.
/// Alignments are returned in completion order.
pub(crate) fn all_paths(
    directions: &DirectionMatrix,
    seq1: &[u8],
    seq2: &[u8],
    score: i32,
    cancel: Option<&CancellationToken>,
) -> Result<Vec<Alignment>, AlignError> {
    let capacity = seq1.len() + seq2.len();
    let mut queue = VecDeque::new();
    queue.push_back(Frame {
        row: seq2.len(),
        col: seq1.len(),
        rev_seq1: Vec::with_capacity(capacity),
        rev_seq2: Vec::with_capacity(capacity),
    });

    let mut output = Vec::new();

    while let Some(mut frame) = queue.pop_front() {
        if let Some(token) = cancel {
            token.check()?;
        }

        while (frame.row, frame.col) != (0, 0) {
            let flags = directions.get(frame.row, frame.col);
            let mut continuation = None;

            for direction in [Directions::DIAG, Directions::LEFT, Directions::UP] {
                if !flags.contains(direction) {
                    continue;
                }
                let next = step(direction, frame.row, frame.col, seq1, seq2);
                if continuation.is_none() {
                    continuation = Some(next);
                } else {
                    trace!(row = frame.row, col = frame.col, "forking traceback");
                    let mut fork = frame.clone();
                    fork.advance(next);
                    queue.push_back(fork);
                }
            }

            match continuation {
                Some(next) => frame.advance(next),
                // Every cell except the origin has at least one flag
                None => unreachable!("cell ({}, {}) has no direction", frame.row, frame.col),
            }
        }

        output.push(frame.into_alignment(score));
    }

    Ok(output)
}

/// Number of distinct routes from the final cell to the origin, saturating at `u128::MAX`.
pub fn count_paths(directions: &DirectionMatrix) -> u128 {
    let (rows, cols) = (directions.rows(), directions.cols());
    let mut counts = vec![0u128; rows * cols];
    counts[0] = 1;

    for row in 0..rows {
        for col in 0..cols {
            if row == 0 && col == 0 {
                continue;
            }
            let flags = directions.get(row, col);
            let mut total = 0u128;
            if flags.contains(Directions::DIAG) {
                total = total.saturating_add(counts[(row - 1) * cols + col - 1]);
            }
            if flags.contains(Directions::LEFT) {
                total = total.saturating_add(counts[row * cols + col - 1]);
            }
            if flags.contains(Directions::UP) {
                total = total.saturating_add(counts[(row - 1) * cols + col]);
            }
            counts[row * cols + col] = total;
        }
    }

    counts[rows * cols - 1]
}
