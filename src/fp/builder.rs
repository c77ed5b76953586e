use super::Item;
use super::counting::{FrequentItems, count_items};
use super::tree::FPTree;
use log::trace;

/// Build an FP-tree from weighted transactions.
///
/// Items below `min_support` are dropped, the rest are ordered by
/// [`FrequentItems`] and every non-empty projection is inserted with its
/// weight. The tree is empty when no item is frequent.
pub fn build_fp_tree<'a, I, T>(transactions: T, min_support: usize) -> FPTree<I>
where
    I: Item + 'a,
    T: IntoIterator<Item = (&'a [I], usize)> + Clone,
{
    let frequent_items = FrequentItems::from_counts(count_items(transactions.clone()), min_support);
    let mut fp_tree = FPTree::new();

    if frequent_items.is_empty() {
        return fp_tree;
    }

    for (transaction, weight) in transactions {
        let tx_items = frequent_items.project(transaction);
        if !tx_items.is_empty() {
            fp_tree.insert_transaction(&tx_items, weight);
        }
    }

    trace!(
        "built fp-tree: {} frequent items, {} nodes",
        frequent_items.len(),
        fp_tree.len()
    );
    fp_tree
}

/// Build the conditional FP-tree of a conditional pattern base.
pub fn build_conditional_fp_tree<I: Item>(
    prefix_paths: &[(Vec<I>, usize)],
    min_support: usize,
) -> FPTree<I> {
    build_fp_tree(
        prefix_paths
            .iter()
            .map(|(path, count)| (path.as_slice(), *count)),
        min_support,
    )
}
