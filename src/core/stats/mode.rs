//! Counting helpers shared by the reports.

use indexmap::IndexMap;
use std::hash::Hash;

/// Occurrences per distinct value, keyed in first-seen order.
pub fn value_counts<T, I>(values: I) -> IndexMap<T, u64>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut counts = IndexMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value with its count. Ties go to the value seen first.
pub fn mode_with_count<T, I>(values: I) -> Option<(T, u64)>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, u64)> = None;
    for (value, count) in value_counts(values) {
        // strict > keeps the earlier entry on a tie
        if best.as_ref().is_none_or(|(_, c)| count > *c) {
            best = Some((value, count));
        }
    }
    best
}

pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Hash + Eq,
    I: IntoIterator<Item = T>,
{
    mode_with_count(values).map(|(v, _)| v)
}
