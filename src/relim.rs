//! Recursive Elimination itemset mining, after the algorithm by Christian
//! Borgelt.
//!
//! Transactions are bucketed by their rarest item: one bucket per distinct
//! (frequency, item) pair, slots ordered by descending pair so the rarest
//! item sits in the last slot. Buckets are eliminated back to front; each
//! bucket's tails are redistributed into the slots of their own leading
//! items, which can only lie further towards the front.

use std::collections::{BTreeSet, HashMap};

use crate::encoding::{EncodedTransaction, Pair};
use crate::report::{record, Itemset, Report};
use crate::Item;

/// One elimination slot: the item it stands for, the accumulated count of
/// transactions whose rarest remaining item it is, and their tails grouped
/// by identical suffix.
#[derive(Debug, Clone)]
pub struct Bucket<I> {
    pub key: Pair<I>,
    pub count: u64,
    pub rests: Vec<(u64, Vec<Pair<I>>)>,
}

/// Mines all itemsets with support ≥ `min_support` from encoded transactions
/// (see [`crate::encode`]).
pub fn relim_mine<I: Item>(encoded: &[EncodedTransaction<I>], min_support: u64) -> Report<I> {
    // Slot order is the exact reverse of the ascending encoding order, so a
    // tail's leading pair always maps to a slot in front of its bucket.
    let distinct: BTreeSet<&Pair<I>> = encoded.iter().flatten().collect();
    let slots: Vec<Pair<I>> = distinct.into_iter().rev().cloned().collect();
    let key_map: HashMap<&Pair<I>, usize> =
        slots.iter().enumerate().map(|(slot, key)| (key, slot)).collect();

    let mut buckets = new_buckets(&slots, slots.len());
    for transaction in encoded {
        lodge(&mut buckets, &key_map, 1, transaction);
    }

    let mut report = Report::new();
    let mut prefix = Itemset::new();
    relim_recurse(buckets, &slots, &key_map, &mut prefix, &mut report, min_support);
    report
}

fn new_buckets<I: Item>(slots: &[Pair<I>], len: usize) -> Vec<Bucket<I>> {
    slots[..len]
        .iter()
        .map(|key| Bucket {
            key: key.clone(),
            count: 0,
            rests: Vec::new(),
        })
        .collect()
}

/// Files a tail under the slot of its leading pair. A tail of length one
/// contributes only to the slot's count; longer tails leave their suffix in
/// the rest list, merged with an identical suffix when one is already there.
fn lodge<I: Item>(
    buckets: &mut [Bucket<I>],
    key_map: &HashMap<&Pair<I>, usize>,
    count: u64,
    tail: &[Pair<I>],
) {
    let Some((head, rest)) = tail.split_first() else {
        return;
    };
    let bucket = &mut buckets[key_map[head]];
    bucket.count += count;
    if rest.is_empty() {
        return;
    }
    for (existing_count, existing) in bucket.rests.iter_mut() {
        if existing.as_slice() == rest {
            *existing_count += count;
            return;
        }
    }
    bucket.rests.push((count, rest.to_vec()));
}

fn relim_recurse<I: Item>(
    mut buckets: Vec<Bucket<I>>,
    slots: &[Pair<I>],
    key_map: &HashMap<&Pair<I>, usize>,
    prefix: &mut Itemset<I>,
    report: &mut Report<I>,
    min_support: u64,
) {
    while let Some(bucket) = buckets.pop() {
        if bucket.count >= min_support {
            record(report, prefix, &bucket.key.1, bucket.count);

            // Project the bucket into a one-slot-shorter array and search
            // for extensions of the itemset just reported.
            let mut sub = new_buckets(slots, buckets.len());
            for (count, tail) in &bucket.rests {
                lodge(&mut sub, key_map, *count, tail);
            }
            prefix.insert(bucket.key.1.clone());
            relim_recurse(sub, slots, key_map, prefix, report, min_support);
            prefix.remove(&bucket.key.1);
        }

        // Eliminate the bucket: its tails move to the slots still pending.
        for (count, tail) in &bucket.rests {
            lodge(&mut buckets, key_map, *count, tail);
        }
    }
}
