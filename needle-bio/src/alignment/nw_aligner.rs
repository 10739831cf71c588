/// Needleman-Wunsch global alignment algorithm
use crate::alignment::error::{add_score, AlignError};
use crate::alignment::limits::{CancellationToken, TracebackLimits};
use crate::alignment::matrix::{DirectionMatrix, Directions, ScoreMatrix};
use crate::alignment::result::{Alignment, VerboseAlignment};
use crate::alignment::scoring::{ScoringModel, ScoringScheme};
use crate::alignment::traceback;
use tracing::{debug, warn};

pub struct NeedlemanWunsch<S: ScoringScheme> {
    scoring: S,
    limits: TracebackLimits,
    cancel: Option<CancellationToken>,
}

impl<S: ScoringScheme> NeedlemanWunsch<S> {
    pub fn new(scoring: S) -> Self {
        Self {
            scoring,
            limits: TracebackLimits::default(),
            cancel: None,
        }
    }

    pub fn with_limits(mut self, limits: TracebackLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    pub fn limits(&self) -> TracebackLimits {
        self.limits
    }

    /// Fill the score matrix for `seq1` (columns) against `seq2` (rows).
    pub fn fill(&self, seq1: &[u8], seq2: &[u8]) -> Result<ScoreMatrix, AlignError> {
        self.fill_matrices(seq1, seq2, None)
    }

    /// Fill the score matrix and record every recurrence term reaching each cell's maximum.
    pub fn fill_with_directions(
        &self,
        seq1: &[u8],
        seq2: &[u8],
    ) -> Result<(ScoreMatrix, DirectionMatrix), AlignError> {
        let mut directions = DirectionMatrix::new(seq2.len() + 1, seq1.len() + 1);
        let scores = self.fill_matrices(seq1, seq2, Some(&mut directions))?;
        Ok((scores, directions))
    }

    /// One optimal alignment, chosen by the DIAG > LEFT > UP tie-break.
    pub fn align(&self, seq1: &[u8], seq2: &[u8]) -> Result<Alignment, AlignError> {
        let scores = self.fill(seq1, seq2)?;
        let (alignment, _) = traceback::single_path(&self.scoring, &scores, seq1, seq2)?;
        Ok(alignment)
    }

    /// Like [`align`](Self::align), also returning the score matrix and the traceback path.
    pub fn align_verbose(&self, seq1: &[u8], seq2: &[u8]) -> Result<VerboseAlignment, AlignError> {
        let matrix = self.fill(seq1, seq2)?;
        let (alignment, path) = traceback::single_path(&self.scoring, &matrix, seq1, seq2)?;
        Ok(VerboseAlignment {
            alignment,
            matrix,
            path,
        })
    }

    /// Every alignment reaching the optimal score.
    ///
    /// Fails with [`AlignError::PathLimitExceeded`] before enumerating anything
    /// when the number of co-optimal alignments is over the configured limit.
    pub fn align_all(&self, seq1: &[u8], seq2: &[u8]) -> Result<Vec<Alignment>, AlignError> {
        let (scores, directions) = self.fill_with_directions(seq1, seq2)?;

        let estimated = traceback::count_paths(&directions);
        debug!(paths = %estimated, "co-optimal alignments found");
        if let Err(e) = self.limits.check(estimated) {
            warn!("{}", e);
            return Err(e);
        }

        traceback::all_paths(
            &directions,
            seq1,
            seq2,
            scores.final_score(),
            self.cancel.as_ref(),
        )
    }

    /// Number of co-optimal alignments, without enumerating them.
    pub fn count_paths(&self, seq1: &[u8], seq2: &[u8]) -> Result<u128, AlignError> {
        let (_, directions) = self.fill_with_directions(seq1, seq2)?;
        Ok(traceback::count_paths(&directions))
    }

    fn fill_matrices(
        &self,
        seq1: &[u8],
        seq2: &[u8],
        mut directions: Option<&mut DirectionMatrix>,
    ) -> Result<ScoreMatrix, AlignError> {
        self.scoring.check_sequence(seq1)?;
        self.scoring.check_sequence(seq2)?;

        let cols = seq1.len() + 1;
        let rows = seq2.len() + 1;
        debug!(rows, cols, "filling score matrix");

        let gap = self.scoring.gap();
        let mut scores = ScoreMatrix::new(rows, cols);

        // Initialize first row and column with cumulative gap penalties
        for col in 1..cols {
            scores.set(0, col, add_score(scores.get(0, col - 1), gap, 0, col)?);
        }
        for row in 1..rows {
            scores.set(row, 0, add_score(scores.get(row - 1, 0), gap, row, 0)?);
        }

        for row in 1..rows {
            if let Some(token) = &self.cancel {
                token.check()?;
            }
            for col in 1..cols {
                let cost = self.scoring.cost(seq1[col - 1], seq2[row - 1])?;
                let diag = add_score(scores.get(row - 1, col - 1), cost, row, col)?;
                let left = add_score(scores.get(row, col - 1), gap, row, col)?;
                let up = add_score(scores.get(row - 1, col), gap, row, col)?;
                let best = diag.max(left).max(up);
                scores.set(row, col, best);

                if let Some(directions) = directions.as_deref_mut() {
                    let mut flags = Directions::NONE;
                    if diag == best {
                        flags.insert(Directions::DIAG);
                    }
                    if left == best {
                        flags.insert(Directions::LEFT);
                    }
                    if up == best {
                        flags.insert(Directions::UP);
                    }
                    directions.set(row, col, flags);
                }
            }
        }

        Ok(scores)
    }
}

/// Align two sequences, returning one optimal alignment.
pub fn align(seq1: &[u8], seq2: &[u8], scoring: &ScoringModel) -> Result<Alignment, AlignError> {
    NeedlemanWunsch::new(scoring).align(seq1, seq2)
}

/// Align two sequences, also returning the score matrix and traceback path.
pub fn align_verbose(
    seq1: &[u8],
    seq2: &[u8],
    scoring: &ScoringModel,
) -> Result<VerboseAlignment, AlignError> {
    NeedlemanWunsch::new(scoring).align_verbose(seq1, seq2)
}

/// Enumerate every co-optimal alignment under the default path limit.
pub fn align_all(
    seq1: &[u8],
    seq2: &[u8],
    scoring: &ScoringModel,
) -> Result<Vec<Alignment>, AlignError> {
    NeedlemanWunsch::new(scoring).align_all(seq1, seq2)
}
