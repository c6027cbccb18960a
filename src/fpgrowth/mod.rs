//! FP-Growth itemset mining over a shared prefix tree, after Han, Pei and
//! Yin. Transactions are inserted in descending frequency order so common
//! items share prefixes; mining recurses over per-item conditional trees.

pub mod tree;

use rayon::prelude::*;

use crate::encoding::encode_desc;
use crate::report::{record, Itemset, Report};
use crate::Item;
use tree::Tree;

/// Mines all itemsets with support ≥ `min_support` from raw transactions.
/// With `pruning` enabled, conditional trees are compacted by merging out
/// nodes of conditionally infrequent items; the result is identical either
/// way.
pub fn fpgrowth_mine<I: Item>(
    transactions: &[Vec<I>],
    min_support: u64,
    pruning: bool,
) -> Report<I> {
    let tree = build_tree(transactions, min_support);
    let mut report = Report::new();
    let mut prefix = Itemset::new();
    mine_tree(&tree, min_support, pruning, &mut prefix, &mut report);
    report
}

/// Like [`fpgrowth_mine`], but fans the top-level head items out across a
/// rayon pool. Sibling subtrees are disjoint, so each task mines into a
/// local report and the results are merged at the end.
pub fn fpgrowth_mine_parallel<I: Item + Send + Sync>(
    transactions: &[Vec<I>],
    min_support: u64,
    pruning: bool,
) -> Report<I> {
    let tree = build_tree(transactions, min_support);
    let locals: Vec<Report<I>> = tree
        .heads_by_support()
        .into_par_iter()
        .filter(|(_, support)| *support >= min_support)
        .map(|(item, support)| {
            let mut report = Report::new();
            let mut prefix = Itemset::new();
            record(&mut report, &prefix, &item, support);
            let mut cond = tree.conditional(&item);
            if pruning {
                cond.prune(min_support);
            }
            prefix.insert(item);
            mine_tree(&cond, min_support, pruning, &mut prefix, &mut report);
            report
        })
        .collect();

    let mut report = Report::new();
    for local in locals {
        report.extend(local);
    }
    report
}

/// Builds the root tree: descending-encoded transactions, items below
/// `min_support` dropped up front, one path insertion per transaction.
pub fn build_tree<I: Item>(transactions: &[Vec<I>], min_support: u64) -> Tree<I> {
    let encoded = encode_desc(transactions, min_support);
    let mut tree = Tree::new();
    let mut last = std::collections::HashMap::new();
    for pairs in encoded {
        let items: Vec<I> = pairs.into_iter().map(|(_, item)| item).collect();
        tree.insert(&items, 1, &mut last);
    }
    tree
}

fn mine_tree<I: Item>(
    tree: &Tree<I>,
    min_support: u64,
    pruning: bool,
    prefix: &mut Itemset<I>,
    report: &mut Report<I>,
) {
    // Least frequent first, so recursion depth tracks itemset rarity.
    for (item, support) in tree.heads_by_support() {
        if support < min_support {
            continue;
        }
        record(report, prefix, &item, support);
        let mut cond = tree.conditional(&item);
        if pruning {
            cond.prune(min_support);
        }
        prefix.insert(item.clone());
        mine_tree(&cond, min_support, pruning, prefix, report);
        prefix.remove(&item);
    }
}
