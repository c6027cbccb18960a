use std::collections::{BTreeSet, HashMap};

use crate::Item;

/// A set of items, ordered so reports are comparable across algorithms.
pub type Itemset<I> = BTreeSet<I>;

/// Mining result: each frequent itemset mapped to its support, i.e. the
/// number of input transactions containing the itemset as a subset.
pub type Report<I> = HashMap<Itemset<I>, u64>;

/// Records `prefix ∪ {item}` with the given support.
pub(crate) fn record<I: Item>(report: &mut Report<I>, prefix: &Itemset<I>, item: &I, support: u64) {
    let mut itemset = prefix.clone();
    itemset.insert(item.clone());
    report.insert(itemset, support);
}
