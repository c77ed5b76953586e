use super::Item;
use std::collections::{HashMap, HashSet};

/// Per-item transaction counts.
pub type FrequencyTable<I> = HashMap<I, usize>;

/// Count, for each item, the total weight of the transactions containing it.
/// An item repeated inside one transaction is counted once for it.
pub fn count_items<'a, I, T>(transactions: T) -> FrequencyTable<I>
where
    I: Item + 'a,
    T: IntoIterator<Item = (&'a [I], usize)>,
{
    let mut item_counts: FrequencyTable<I> = HashMap::new();
    let mut seen: HashSet<&'a I> = HashSet::new();

    for (transaction, weight) in transactions {
        seen.clear();
        for item in transaction {
            if seen.insert(item) {
                *item_counts.entry(item.clone()).or_insert(0) += weight;
            }
        }
    }

    item_counts
}

/// Items meeting the support threshold, ranked by descending count with ties
/// broken by ascending item. The same ranking is applied at every level.
#[derive(Debug, Clone)]
pub struct FrequentItems<I> {
    ordered: Vec<(I, usize)>,
    ranks: HashMap<I, usize>,
}

impl<I: Item> FrequentItems<I> {
    pub fn from_counts(item_counts: FrequencyTable<I>, min_support: usize) -> Self {
        let mut ordered: Vec<(I, usize)> = item_counts
            .into_iter()
            .filter(|&(_, count)| count >= min_support)
            .collect();

        ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let ranks = ordered
            .iter()
            .enumerate()
            .map(|(rank, (item, _))| (item.clone(), rank))
            .collect();

        Self { ordered, ranks }
    }

    /// No item reached the threshold; the caller stops at this branch.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn as_slice(&self) -> &[(I, usize)] {
        &self.ordered
    }

    pub fn rank(&self, item: &I) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    pub fn count(&self, item: &I) -> Option<usize> {
        self.rank(item).map(|rank| self.ordered[rank].1)
    }

    /// Keep the frequent items of `transaction`, once each, in rank order.
    pub fn project(&self, transaction: &[I]) -> Vec<I> {
        let mut ranked: Vec<usize> = transaction
            .iter()
            .filter_map(|item| self.rank(item))
            .collect();

        ranked.sort_unstable();
        ranked.dedup();
        ranked
            .into_iter()
            .map(|rank| self.ordered[rank].0.clone())
            .collect()
    }
}
