//! Split-And-Merge itemset mining, after the algorithm by Christian Borgelt.
//!
//! The working state is a list of runs: grouped encoded transactions in
//! ascending lexicographic order. Each step splits off the runs led by the
//! globally smallest remaining (frequency, item) pair, strips that pair, and
//! merges the stripped runs back into the remainder for the sibling search,
//! while a saved copy of the stripped group drives the recursion into longer
//! itemsets.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::encoding::{EncodedTransaction, Pair};
use crate::report::{record, Itemset, Report};
use crate::Item;

/// A grouped encoded transaction: `count` identical transactions collapsed
/// into one entry.
#[derive(Debug, Clone)]
pub struct Run<I> {
    pub count: u64,
    pub items: VecDeque<Pair<I>>,
}

/// Mines all itemsets with support ≥ `min_support` from encoded transactions
/// (see [`crate::encode`]).
pub fn sam_mine<I: Item>(encoded: &[EncodedTransaction<I>], min_support: u64) -> Report<I> {
    let runs = group_runs(encoded);
    let mut report = Report::new();
    let mut prefix = Itemset::new();
    sam_recurse(runs, &mut prefix, &mut report, min_support);
    report
}

/// Collapses identical encoded transactions into runs, keeping the list in
/// ascending lexicographic order.
fn group_runs<I: Item>(encoded: &[EncodedTransaction<I>]) -> VecDeque<Run<I>> {
    let mut transactions: Vec<&EncodedTransaction<I>> =
        encoded.iter().filter(|t| !t.is_empty()).collect();
    transactions.sort();

    let mut runs: VecDeque<Run<I>> = VecDeque::new();
    for transaction in transactions {
        match runs.back_mut() {
            Some(run) if run.items.iter().eq(transaction.iter()) => run.count += 1,
            _ => runs.push_back(Run {
                count: 1,
                items: transaction.iter().cloned().collect(),
            }),
        }
    }
    runs
}

fn sam_recurse<I: Item>(
    mut a: VecDeque<Run<I>>,
    prefix: &mut Itemset<I>,
    report: &mut Report<I>,
    min_support: u64,
) {
    // The leading pair of the first run is the smallest remaining key.
    while let Some(lead) = a.front().and_then(|run| run.items.front().cloned()) {
        let mut b: VecDeque<Run<I>> = VecDeque::new();
        let mut support = 0;

        // Split: collect every run led by `lead`, stripping the pair. Runs
        // that become empty still count but take no further part.
        while a.front().is_some_and(|run| run.items.front() == Some(&lead)) {
            let mut run = a.pop_front().unwrap();
            support += run.count;
            run.items.pop_front();
            if !run.items.is_empty() {
                b.push_back(run);
            }
        }

        // The stripped group recurses; a copy of it is merged back into the
        // remainder so the sibling loop sees the suffixes as well.
        let c = b.clone();
        let mut d: VecDeque<Run<I>> = VecDeque::with_capacity(a.len() + b.len());
        while !a.is_empty() && !b.is_empty() {
            match a[0].items.cmp(&b[0].items) {
                Ordering::Less => d.push_back(a.pop_front().unwrap()),
                Ordering::Greater => d.push_back(b.pop_front().unwrap()),
                Ordering::Equal => {
                    // Identical suffixes: combine multiplicities.
                    let extra = a.pop_front().unwrap().count;
                    let mut run = b.pop_front().unwrap();
                    run.count += extra;
                    d.push_back(run);
                }
            }
        }
        d.append(&mut a);
        d.append(&mut b);
        a = d;

        if support >= min_support {
            record(report, prefix, &lead.1, support);
            prefix.insert(lead.1.clone());
            sam_recurse(c, prefix, report, min_support);
            prefix.remove(&lead.1);
        }
    }
}
