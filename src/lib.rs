//! Frequent itemset mining over in-memory transaction collections.
//!
//! Three independent engines, Split-And-Merge ([`sam_mine`]), Recursive
//! Elimination ([`relim_mine`]) and FP-Growth ([`fpgrowth_mine`]), solve
//! the same search problem with different data layouts and produce
//! identical reports. On top of the report, [`mine_rules`] derives
//! association rules; [`mine_sequences`] mines frequent subsequences of
//! ordered sequences.
//!
//! ```
//! use patmine::{encode, fpgrowth_mine, mine_rules, sam_mine};
//!
//! let transactions = vec![
//!     vec!["a", "b", "d"],
//!     vec!["b", "c"],
//!     vec!["b", "d"],
//! ];
//! let (encoded, _frequencies) = encode(&transactions);
//! let report = sam_mine(&encoded, 2);
//! assert_eq!(report, fpgrowth_mine(&transactions, 2, false));
//!
//! let rules = mine_rules(&report, 2, 0.5);
//! assert!(!rules.is_empty());
//! ```

use std::hash::Hash;

pub mod encoding;
pub mod fpgrowth;
pub mod relim;
pub mod report;
pub mod rules;
pub mod sam;
pub mod seq;


pub use encoding::{encode, frequencies, EncodedTransaction, Frequencies, Pair};
pub use fpgrowth::{fpgrowth_mine, fpgrowth_mine_parallel};
pub use relim::relim_mine;
pub use report::{Itemset, Report};
pub use rules::{mine_rules, Rule};
pub use sam::sam_mine;
pub use seq::mine_sequences;

/// Anything the engines can mine over: the items themselves are opaque
/// beyond cloning, ordering and hashing.
pub trait Item: Clone + Ord + Hash {}

impl<T: Clone + Ord + Hash> Item for T {}

/// Algorithm-agnostic mining capability, so call sites can pick an engine
/// at runtime.
pub trait ItemsetMiner<I: Item> {
    fn mine(&self, transactions: &[Vec<I>], min_support: u64) -> Report<I>;
}

/// Split-And-Merge engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sam;

/// Recursive Elimination engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Relim;

/// FP-Growth engine, optionally compacting conditional trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct FpGrowth {
    pub pruning: bool,
}

impl<I: Item> ItemsetMiner<I> for Sam {
    fn mine(&self, transactions: &[Vec<I>], min_support: u64) -> Report<I> {
        let (encoded, _) = encode(transactions);
        sam_mine(&encoded, min_support)
    }
}

impl<I: Item> ItemsetMiner<I> for Relim {
    fn mine(&self, transactions: &[Vec<I>], min_support: u64) -> Report<I> {
        let (encoded, _) = encode(transactions);
        relim_mine(&encoded, min_support)
    }
}

impl<I: Item> ItemsetMiner<I> for FpGrowth {
    fn mine(&self, transactions: &[Vec<I>], min_support: u64) -> Report<I> {
        fpgrowth_mine(transactions, min_support, self.pruning)
    }
}
