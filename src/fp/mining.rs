use super::Item;
use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::combinations::generate_combinations_from_path;
use super::patterns::{FrequentPatterns, Itemset};
use super::tree::FPTree;
use crate::error::{FpError, FpResult};
use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Mine every itemset of `transactions` whose support is at least
/// `min_support`, using the default miner settings.
pub fn fp_growth<I, T>(transactions: &[T], min_support: usize) -> FpResult<FrequentPatterns<I>>
where
    I: Item,
    T: AsRef<[I]>,
{
    Ok(FpGrowth::new(min_support)?.mine(transactions))
}

/// FP-Growth miner configuration.
#[derive(Debug, Clone, Copy)]
pub struct FpGrowth {
    min_support: usize,
    single_path_shortcut: bool,
}

impl FpGrowth {
    /// A miner keeping itemsets that occur in at least `min_support`
    /// transactions. Zero is rejected.
    pub fn new(min_support: usize) -> FpResult<Self> {
        if min_support < 1 {
            return Err(FpError::InvalidArgument(format!(
                "min_support must be at least 1, got {}",
                min_support
            )));
        }
        Ok(Self {
            min_support,
            single_path_shortcut: true,
        })
    }

    /// Enumerate single-path trees directly instead of recursing into them.
    pub fn with_single_path_shortcut(mut self, enabled: bool) -> Self {
        self.single_path_shortcut = enabled;
        self
    }

    pub fn min_support(&self) -> usize {
        self.min_support
    }

    pub fn mine<I, T>(&self, transactions: &[T]) -> FrequentPatterns<I>
    where
        I: Item,
        T: AsRef<[I]>,
    {
        let fp_tree = self.build_tree(transactions);

        let mut patterns = FrequentPatterns::new();
        self.mine_tree(&fp_tree, &Itemset::default(), &mut patterns);
        debug!("found {} frequent itemsets", patterns.len());
        patterns
    }

    /// Like [`mine`](Self::mine), with the top-level header items mined on
    /// the rayon pool. Every task builds its own conditional trees and the
    /// per-task results are merged afterwards.
    #[cfg(feature = "parallel")]
    pub fn mine_par<I, T>(&self, transactions: &[T]) -> FrequentPatterns<I>
    where
        I: Item + Send + Sync,
        T: AsRef<[I]>,
    {
        let fp_tree = self.build_tree(transactions);

        if self.single_path_shortcut && fp_tree.has_single_path() {
            let mut patterns = FrequentPatterns::new();
            self.mine_tree(&fp_tree, &Itemset::default(), &mut patterns);
            return patterns;
        }

        let items: Vec<&I> = fp_tree.header_items().collect();
        let prefix = Itemset::default();

        let patterns = items
            .par_iter()
            .map(|&item| {
                let mut local = FrequentPatterns::new();
                self.mine_item(&fp_tree, item, &prefix, &mut local);
                local
            })
            .reduce(FrequentPatterns::new, |mut merged, local| {
                merged.merge(local);
                merged
            });
        debug!("found {} frequent itemsets", patterns.len());
        patterns
    }

    fn build_tree<I, T>(&self, transactions: &[T]) -> FPTree<I>
    where
        I: Item,
        T: AsRef<[I]>,
    {
        debug!(
            "mining {} transactions with min_support {}",
            transactions.len(),
            self.min_support
        );
        let fp_tree = build_fp_tree(
            transactions.iter().map(|tx| (tx.as_ref(), 1usize)),
            self.min_support,
        );
        debug!(
            "fp-tree has {} nodes over {} frequent items",
            fp_tree.len(),
            fp_tree.header_items().count()
        );
        fp_tree
    }

    /// Record `prefix ∪ {item}` for every header item of `tree`, then recurse
    /// into each item's conditional tree. Returns at once on an empty tree.
    pub fn mine_tree<I: Item>(
        &self,
        tree: &FPTree<I>,
        prefix: &Itemset<I>,
        result: &mut FrequentPatterns<I>,
    ) {
        if tree.is_empty() {
            return;
        }

        if self.single_path_shortcut && tree.has_single_path() {
            generate_combinations_from_path(&tree.single_path(), prefix, result);
            return;
        }

        for item in tree.header_items() {
            self.mine_item(tree, item, prefix, result);
        }
    }

    fn mine_item<I: Item>(
        &self,
        tree: &FPTree<I>,
        item: &I,
        prefix: &Itemset<I>,
        result: &mut FrequentPatterns<I>,
    ) {
        let new_pattern = prefix.with(item.clone());
        let support = tree.item_support(item);
        debug_assert!(support >= self.min_support);
        result.insert(new_pattern.clone(), support);

        let prefix_paths = tree.prefix_paths(item);
        if !prefix_paths.is_empty() {
            let cond_tree = build_conditional_fp_tree(&prefix_paths, self.min_support);
            if !cond_tree.is_empty() {
                trace!(
                    "descending below a {}-itemset: conditional tree has {} nodes",
                    new_pattern.len(),
                    cond_tree.len()
                );
                self.mine_tree(&cond_tree, &new_pattern, result);
            }
        }
    }
}
