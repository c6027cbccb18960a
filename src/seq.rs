//! Frequent sequence mining by recursive prefix projection.
//!
//! A sequence supports a pattern when the pattern occurs in it as a
//! subsequence, gaps allowed. Projecting the database on a prefix keeps, for
//! each entry, the suffix after the first occurrence of the last prefix
//! item; empty suffixes are dropped from the projection but were already
//! counted in the prefix's support.

use std::collections::{HashMap, HashSet};

use crate::Item;

/// Enumerates all sequences with support ≥ `min_support`, mapped to their
/// support.
pub fn mine_sequences<I: Item>(sequences: &[Vec<I>], min_support: u64) -> HashMap<Vec<I>, u64> {
    let database: Vec<&[I]> = sequences.iter().map(|s| s.as_slice()).collect();
    let mut found = HashMap::new();
    let mut prefix = Vec::new();
    freq_seq(&database, &mut prefix, 0, min_support, &mut found);
    found
}

fn freq_seq<I: Item>(
    database: &[&[I]],
    prefix: &mut Vec<I>,
    prefix_support: u64,
    min_support: u64,
    found: &mut HashMap<Vec<I>, u64>,
) {
    if !prefix.is_empty() {
        found.insert(prefix.clone(), prefix_support);
    }
    for (item, support) in local_frequent_items(database, min_support) {
        let projected = project(database, &item);
        prefix.push(item);
        freq_seq(&projected, prefix, support, min_support, found);
        prefix.pop();
    }
}

/// Items frequent in the projected database, each entry counted once.
fn local_frequent_items<I: Item>(database: &[&[I]], min_support: u64) -> Vec<(I, u64)> {
    let mut counts: HashMap<&I, u64> = HashMap::new();
    for entry in database {
        let mut seen = HashSet::new();
        for item in *entry {
            if seen.insert(item) {
                *counts.entry(item).or_insert(0) += 1;
            }
        }
    }
    let mut frequent: Vec<(I, u64)> = counts
        .into_iter()
        .filter(|(_, support)| *support >= min_support)
        .map(|(item, support)| (item.clone(), support))
        .collect();
    frequent.sort();
    frequent
}

fn project<'a, I: Item>(database: &[&'a [I]], item: &I) -> Vec<&'a [I]> {
    let mut projected = Vec::new();
    for entry in database {
        if let Some(position) = entry.iter().position(|e| e == item) {
            let suffix = &entry[position + 1..];
            if !suffix.is_empty() {
                projected.push(suffix);
            }
        }
    }
    projected
}
