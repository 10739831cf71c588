//! Descriptive statistics over alignment results and symbol composition.
//!
//! Every reduction returns `None` for an empty sample instead of a number.

use crate::alignment::Alignment;
use serde::Serialize;
use std::collections::BTreeMap;

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sorted = sorted(values);
    let n = sorted.len();
    if n % 2 == 0 {
        Some((sorted[n / 2] + sorted[n / 2 - 1]) / 2.0)
    } else {
        Some(sorted[(n - 1) / 2])
    }
}

/// First, second or third quartile. The second quartile is the median;
/// Q1 and Q3 are taken directly from the sorted sample without interpolation.
pub fn quartile(values: &[f64], q: u8) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    match q {
        2 => median(values),
        1 | 3 => {
            let sorted = sorted(values);
            let n = sorted.len();
            let index = match (q, n % 4 == 0) {
                (1, true) => n / 4 - 1,
                (1, false) => n / 4,
                (_, _) => 3 * n / 4,
            };
            Some(sorted[index])
        }
        _ => None,
    }
}

pub fn interquartile_range(values: &[f64]) -> Option<f64> {
    Some(quartile(values, 3)? - quartile(values, 1)?)
}

/// Population variance
pub fn variance(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (m - v).powi(2)).sum();
    Some(sum_sq / values.len() as f64)
}

pub fn std_dev(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}

/// Occurrences of each alphabet symbol in `seq`; symbols outside the alphabet are ignored.
pub fn counts(seq: &[u8], alphabet: &[u8]) -> BTreeMap<u8, usize> {
    let mut counts: BTreeMap<u8, usize> = alphabet.iter().map(|&s| (s, 0)).collect();
    for symbol in seq {
        if let Some(count) = counts.get_mut(symbol) {
            *count += 1;
        }
    }
    counts
}

/// Share of `seq` made up by each alphabet symbol; all zero for an empty sequence.
pub fn proportions(seq: &[u8], alphabet: &[u8]) -> BTreeMap<u8, f64> {
    let total = seq.len();
    counts(seq, alphabet)
        .into_iter()
        .map(|(symbol, count)| {
            let share = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            };
            (symbol, share)
        })
        .collect()
}

/// All reductions of one sample at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub variance: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
}

impl Summary {
    pub fn of(values: &[f64]) -> Option<Self> {
        Some(Self {
            count: values.len(),
            mean: mean(values)?,
            median: median(values)?,
            std_dev: std_dev(values)?,
            variance: variance(values)?,
            q1: quartile(values, 1)?,
            q3: quartile(values, 3)?,
            iqr: interquartile_range(values)?,
        })
    }

    /// Summary of the scores of a set of alignments.
    pub fn of_scores(alignments: &[Alignment]) -> Option<Self> {
        let scores: Vec<f64> = alignments.iter().map(|a| f64::from(a.score)).collect();
        Self::of(&scores)
    }
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
