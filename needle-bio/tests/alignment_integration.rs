/// Integration tests for global alignment and co-optimal enumeration
use needle_bio::alignment::{
    align, align_all, align_verbose, AlignError, Alignment, ConfigError, NeedlemanWunsch,
    ScoringModel, ScoringScheme, TracebackLimits,
};
use needle_bio::stats::Summary;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashSet;

fn unit_scoring() -> ScoringModel {
    ScoringModel::configure(Some(&[1, -1, -1][..]), None, None).unwrap()
}

fn pair(seq1: &str, seq2: &str, score: i32) -> Alignment {
    Alignment::new(seq1.as_bytes().to_vec(), seq2.as_bytes().to_vec(), score)
}

/// Independent quadratic fill used as the reference score.
fn reference_score(seq1: &[u8], seq2: &[u8], scoring: &ScoringModel) -> i32 {
    let gap = scoring.gap();
    let mut m = vec![vec![0i32; seq1.len() + 1]; seq2.len() + 1];
    for i in 1..=seq1.len() {
        m[0][i] = i as i32 * gap;
    }
    for j in 1..=seq2.len() {
        m[j][0] = j as i32 * gap;
    }
    for j in 1..=seq2.len() {
        for i in 1..=seq1.len() {
            let diag = m[j - 1][i - 1] + scoring.cost(seq1[i - 1], seq2[j - 1]).unwrap();
            m[j][i] = diag.max(m[j][i - 1] + gap).max(m[j - 1][i] + gap);
        }
    }
    m[seq2.len()][seq1.len()]
}

#[test]
fn test_gattaca() {
    let scoring = unit_scoring();

    let single = align(b"GATTACA", b"GCATGCU", &scoring).unwrap();
    assert_eq!(single, pair("G-ATTACA", "GCA-TGCU", 0));

    let all = align_all(b"GATTACA", b"GCATGCU", &scoring).unwrap();
    assert_eq!(
        all,
        vec![
            pair("G-ATTACA", "GCA-TGCU", 0),
            pair("G-ATTACA", "GCATG-CU", 0),
            pair("G-ATTACA", "GCAT-GCU", 0),
        ]
    );
}

#[test]
fn test_empty_first_sequence() {
    let result = align(b"", b"ABC", &unit_scoring()).unwrap();
    assert_eq!(result, pair("---", "ABC", -3));

    let all = align_all(b"", b"ABC", &unit_scoring()).unwrap();
    assert_eq!(all, vec![pair("---", "ABC", -3)]);
}

#[test]
fn test_matrix_mode() {
    let scoring =
        ScoringModel::configure(None, Some(&[2, -1, -1, 2, -2][..]), Some(&b"AC"[..])).unwrap();

    let result = align(b"AC", b"AC", &scoring).unwrap();
    assert_eq!(result, pair("AC", "AC", 4));

    let all = align_all(b"AC", b"AC", &scoring).unwrap();
    assert_eq!(all, vec![pair("AC", "AC", 4)]);
}

#[test]
fn test_matrix_mode_unknown_symbol() {
    let scoring =
        ScoringModel::configure(None, Some(&[2, -1, -1, 2, -2][..]), Some(&b"AC"[..])).unwrap();

    assert_eq!(
        align(b"AC", b"AG", &scoring),
        Err(AlignError::UnknownSymbol { symbol: 'G' })
    );
    assert_eq!(
        align_all(b"AT", b"AC", &scoring),
        Err(AlignError::UnknownSymbol { symbol: 'T' })
    );
}

#[test]
fn test_configuration_errors() {
    assert_eq!(
        ScoringModel::configure(
            Some(&[1, -1, -1][..]),
            Some(&[2, -1, -1, 2, -2][..]),
            Some(&b"AC"[..])
        )
        .unwrap_err(),
        ConfigError::ConflictingModes
    );
    assert_eq!(
        ScoringModel::configure(Some(&[1, -1][..]), None, None).unwrap_err(),
        ConfigError::InvalidTableLength { len: 2 }
    );
}

#[test]
fn test_single_gap_placement() {
    let scoring = unit_scoring();

    assert_eq!(align_all(b"ACGT", b"AGT", &scoring).unwrap(), vec![pair("ACGT", "A-GT", 2)]);
    assert_eq!(align(b"AGT", b"ACGT", &scoring).unwrap(), pair("A-GT", "ACGT", 2));

    let heavy_gap = ScoringModel::table(1, -1, -2);
    assert_eq!(align_all(b"CAT", b"CT", &heavy_gap).unwrap(), vec![pair("CAT", "C-T", 0)]);
}

#[test]
fn test_homopolymer_ties_in_fifo_order() {
    let all = align_all(b"AAA", b"AA", &unit_scoring()).unwrap();
    assert_eq!(
        all,
        vec![
            pair("AAA", "-AA", 1),
            pair("AAA", "AA-", 1),
            pair("AAA", "A-A", 1),
        ]
    );
}

#[test]
fn test_verbose_matrix_and_path() {
    let verbose = align_verbose(b"AAA", b"AA", &unit_scoring()).unwrap();

    assert_eq!(verbose.alignment, pair("AAA", "-AA", 1));
    let rows: Vec<Vec<i32>> = verbose.matrix.row_slices().map(|r| r.to_vec()).collect();
    assert_eq!(
        rows,
        vec![vec![0, -1, -2, -3], vec![-1, 1, 0, -1], vec![-2, 0, 2, 1]]
    );
    assert_eq!(verbose.path, vec![(2, 3), (1, 2), (0, 1), (0, 0)]);
}

#[test]
fn test_protein_alignment_with_blosum62() {
    let scoring = ScoringModel::blosum62(-4);
    let result = align(b"HEAGAWGHEE", b"PAWHEAE", &scoring).unwrap();

    assert_eq!(result.ungapped(), (b"HEAGAWGHEE".to_vec(), b"PAWHEAE".to_vec()));
    assert_eq!(result.score, 12);
    assert_eq!(result.score, reference_score(b"HEAGAWGHEE", b"PAWHEAE", &scoring));
    assert_eq!(result, pair("HEAGAWGHE-E", "--P-AW-HEAE", 12));

    let all = align_all(b"HEAGAWGHEE", b"PAWHEAE", &scoring).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0], result);
}

#[test]
fn test_path_limit_rejects_before_enumeration() {
    let scoring = ScoringModel::table(0, 0, 0);
    let aligner = NeedlemanWunsch::new(&scoring).with_limits(TracebackLimits::with_max_paths(100));

    match aligner.align_all(b"ACGTAC", b"TTGCA") {
        Err(AlignError::PathLimitExceeded { limit, estimated }) => {
            assert_eq!(limit, 100);
            assert!(estimated > 100);
        }
        other => panic!("Expected PathLimitExceeded, got {:?}", other),
    }
}

#[test]
fn test_score_summary_over_alignments() {
    let scoring = unit_scoring();
    let pairs: [(&[u8], &[u8]); 3] = [(b"ACGT", b"ACGT"), (b"ACGT", b"AGT"), (b"", b"AC")];
    let results: Vec<Alignment> = pairs
        .iter()
        .map(|(a, b)| align(a, b, &scoring).unwrap())
        .collect();

    let summary = Summary::of_scores(&results).unwrap();
    assert_eq!(summary.count, 3);
    assert_eq!(summary.median, 2.0);
    assert_eq!(summary.mean, (4.0 + 2.0 - 2.0) / 3.0);
}

proptest! {
    #[test]
    fn prop_single_path_score_is_optimal(s1 in "[ACGT]{0,8}", s2 in "[ACGT]{0,8}") {
        let scoring = unit_scoring();
        let result = align(s1.as_bytes(), s2.as_bytes(), &scoring).unwrap();

        prop_assert_eq!(result.score, reference_score(s1.as_bytes(), s2.as_bytes(), &scoring));
        prop_assert_eq!(result.aligned_seq1.len(), result.aligned_seq2.len());
        prop_assert!(result.len() >= s1.len().max(s2.len()));
        prop_assert_eq!(result.ungapped(), (s1.clone().into_bytes(), s2.clone().into_bytes()));
    }

    #[test]
    fn prop_all_paths_are_complete_and_distinct(s1 in "[ACG]{0,6}", s2 in "[ACG]{0,6}") {
        let scoring = ScoringModel::table(2, -1, -1);
        let aligner = NeedlemanWunsch::new(&scoring).with_limits(TracebackLimits::unlimited());

        let single = aligner.align(s1.as_bytes(), s2.as_bytes()).unwrap();
        let all = aligner.align_all(s1.as_bytes(), s2.as_bytes()).unwrap();

        prop_assert!(!all.is_empty());
        prop_assert!(all.contains(&single));
        prop_assert_eq!(all.len() as u128, aligner.count_paths(s1.as_bytes(), s2.as_bytes()).unwrap());

        let distinct: HashSet<(Vec<u8>, Vec<u8>)> = all
            .iter()
            .map(|a| (a.aligned_seq1.clone(), a.aligned_seq2.clone()))
            .collect();
        prop_assert_eq!(distinct.len(), all.len());

        for alignment in &all {
            prop_assert_eq!(alignment.score, single.score);
            prop_assert_eq!(alignment.ungapped(), (s1.clone().into_bytes(), s2.clone().into_bytes()));
        }
    }

    #[test]
    fn prop_symmetric_scoring_gives_symmetric_score(s1 in "[AC]{0,8}", s2 in "[AC]{0,8}") {
        let scoring =
            ScoringModel::configure(None, Some(&[3, -2, -2, 1, -2][..]), Some(&b"AC"[..])).unwrap();
        prop_assume!(scoring.is_symmetric());

        let forward = align(s1.as_bytes(), s2.as_bytes(), &scoring).unwrap();
        let backward = align(s2.as_bytes(), s1.as_bytes(), &scoring).unwrap();
        prop_assert_eq!(forward.score, backward.score);
    }
}
