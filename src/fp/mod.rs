pub mod builder;
pub mod combinations;
pub mod counting;
pub mod mining;
pub mod patterns;
pub mod tree;


use std::hash::Hash;

pub use builder::{build_conditional_fp_tree, build_fp_tree};
pub use counting::{FrequencyTable, FrequentItems, count_items};
pub use mining::{FpGrowth, fp_growth};
pub use patterns::{FrequentPatterns, Itemset};
pub use tree::{FPNode, FPTree};

/// Anything usable as an item: compared for equality, hashed, and totally
/// ordered for deterministic tie-breaking.
pub trait Item: Clone + Eq + Hash + Ord {}

impl<T: Clone + Eq + Hash + Ord> Item for T {}
