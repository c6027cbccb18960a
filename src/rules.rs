//! Association rule mining over an itemset report.
//!
//! For each frequent itemset the search starts from singleton antecedents
//! and grows the antecedent by moving items over from the consequent,
//! stopping as soon as a split fails the confidence threshold. Visited
//! (antecedent, consequent) splits are memoized globally because the search
//! graph is a DAG on subset pairs, not a tree.

use std::collections::HashSet;

use crate::report::{Itemset, Report};
use crate::Item;

/// An association rule `antecedent ⇒ consequent`, with the support of the
/// union and the confidence support(union) / support(antecedent).
#[derive(Debug, Clone, PartialEq)]
pub struct Rule<I> {
    pub antecedent: Itemset<I>,
    pub consequent: Itemset<I>,
    pub support: u64,
    pub confidence: f64,
}

/// Derives all rules with confidence ≥ `min_confidence` from itemsets of
/// size ≥ 2 and support ≥ `min_support` in the report.
pub fn mine_rules<I: Item>(
    report: &Report<I>,
    min_support: u64,
    min_confidence: f64,
) -> Vec<Rule<I>> {
    let mut itemsets: Vec<&Itemset<I>> = report.keys().filter(|key| key.len() >= 2).collect();
    // Largest itemsets first; ties in a fixed order so output is stable.
    itemsets.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut rules = Vec::new();
    let mut visited: HashSet<(Itemset<I>, Itemset<I>)> = HashSet::new();
    for itemset in itemsets {
        let support = report[itemset];
        if support < min_support {
            continue;
        }
        for item in itemset {
            let mut antecedent = Itemset::new();
            antecedent.insert(item.clone());
            let mut consequent = itemset.clone();
            consequent.remove(item);
            grow(
                antecedent,
                consequent,
                support,
                &mut visited,
                report,
                min_confidence,
                &mut rules,
            );
        }
    }
    rules
}

fn grow<I: Item>(
    antecedent: Itemset<I>,
    consequent: Itemset<I>,
    support: u64,
    visited: &mut HashSet<(Itemset<I>, Itemset<I>)>,
    report: &Report<I>,
    min_confidence: f64,
    rules: &mut Vec<Rule<I>>,
) {
    if consequent.is_empty() || !visited.insert((antecedent.clone(), consequent.clone())) {
        return;
    }
    // Miner-produced reports always contain the antecedent; hand-built
    // ones may not.
    let Some(&antecedent_support) = report.get(&antecedent) else {
        return;
    };
    let confidence = support as f64 / antecedent_support as f64;
    if confidence < min_confidence {
        return;
    }
    rules.push(Rule {
        antecedent: antecedent.clone(),
        consequent: consequent.clone(),
        support,
        confidence,
    });
    for item in &consequent {
        let mut next_antecedent = antecedent.clone();
        next_antecedent.insert(item.clone());
        let mut next_consequent = consequent.clone();
        next_consequent.remove(item);
        grow(
            next_antecedent,
            next_consequent,
            support,
            visited,
            report,
            min_confidence,
            rules,
        );
    }
}
