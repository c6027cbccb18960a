use std::collections::{BTreeSet, HashMap};

use crate::Item;

/// A (frequency, item) pair. Frequency comes first so that the derived tuple
/// ordering ranks items by how often they occur, with the item's natural
/// order breaking ties.
pub type Pair<I> = (u64, I);

/// A transaction re-expressed as (frequency, item) pairs.
pub type EncodedTransaction<I> = Vec<Pair<I>>;

/// Item → number of transactions containing it.
pub type Frequencies<I> = HashMap<I, u64>;

/// Counts, for every item, the number of transactions containing it.
/// Duplicates inside a single transaction count once.
pub fn frequencies<I: Item>(transactions: &[Vec<I>]) -> Frequencies<I> {
    let mut counts = Frequencies::new();
    for transaction in transactions {
        let items: BTreeSet<&I> = transaction.iter().collect();
        for item in items {
            *counts.entry(item.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Encodes transactions for SAM and RElim: each transaction is deduplicated
/// and rewritten as (frequency, item) pairs sorted ascending, so the rarest
/// item leads; the whole collection is then sorted lexicographically.
/// Transactions that become empty are dropped. Encoding an already encoded
/// collection again is a no-op.
pub fn encode<I: Item>(transactions: &[Vec<I>]) -> (Vec<EncodedTransaction<I>>, Frequencies<I>) {
    let frequencies = frequencies(transactions);
    let mut encoded: Vec<EncodedTransaction<I>> = transactions
        .iter()
        .filter_map(|transaction| {
            let items: BTreeSet<&I> = transaction.iter().collect();
            let mut pairs: EncodedTransaction<I> = items
                .into_iter()
                .map(|item| (frequencies[item], item.clone()))
                .collect();
            pairs.sort();
            (!pairs.is_empty()).then_some(pairs)
        })
        .collect();
    encoded.sort();
    (encoded, frequencies)
}

/// FP-Growth variant: pairs sorted by descending frequency (ties ascending by
/// item), items below `min_support` dropped up front. The collection keeps
/// its input order; the prefix tree does the sharing.
pub(crate) fn encode_desc<I: Item>(
    transactions: &[Vec<I>],
    min_support: u64,
) -> Vec<EncodedTransaction<I>> {
    let frequencies = frequencies(transactions);
    transactions
        .iter()
        .filter_map(|transaction| {
            let items: BTreeSet<&I> = transaction.iter().collect();
            let mut pairs: EncodedTransaction<I> = items
                .into_iter()
                .map(|item| (frequencies[item], item.clone()))
                .filter(|(frequency, _)| *frequency >= min_support)
                .collect();
            pairs.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
            (!pairs.is_empty()).then_some(pairs)
        })
        .collect()
}
