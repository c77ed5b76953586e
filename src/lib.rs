//! Frequent itemset mining with FP-Growth.
//!
//! Transactions are compressed into an [`FPTree`](fp::FPTree) and mined by
//! recursively building conditional trees, one per item, without generating
//! candidate itemsets.
//!
//! ```
//! use fpgrowth::fp_growth;
//!
//! let transactions = vec![vec!["a", "b"], vec!["a"], vec!["a", "b", "c"], vec!["b", "c"]];
//! let patterns = fp_growth(&transactions, 2).unwrap();
//!
//! assert_eq!(patterns.support_of(&["a", "b"]), Some(2));
//! assert_eq!(patterns.support_of(&["a", "c"]), None);
//! ```

pub mod cli;
pub mod error;
pub mod fp;
pub mod input;
pub mod report;

pub use error::{FpError, FpResult};
pub use fp::{FpGrowth, FrequentPatterns, Item, Itemset, fp_growth};
