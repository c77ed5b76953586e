use super::Item;
use serde::Serialize;
use std::collections::HashMap;
use std::collections::hash_map;

/// A set of items, stored sorted and without duplicates so that two itemsets
/// holding the same members compare and hash equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Itemset<I>(Vec<I>);

impl<I: Item> Itemset<I> {
    pub fn new(mut items: Vec<I>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    /// This itemset plus `item`.
    pub fn with(&self, item: I) -> Self {
        let mut items = self.0.clone();
        if let Err(pos) = items.binary_search(&item) {
            items.insert(pos, item);
        }
        Self(items)
    }

    pub fn contains(&self, item: &I) -> bool {
        self.0.binary_search(item).is_ok()
    }

    pub fn is_subset_of(&self, other: &Itemset<I>) -> bool {
        self.0.iter().all(|item| other.contains(item))
    }
}

impl<I> Itemset<I> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[I] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.0.iter()
    }
}

impl<I> Default for Itemset<I> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<I: Item> From<Vec<I>> for Itemset<I> {
    fn from(items: Vec<I>) -> Self {
        Self::new(items)
    }
}

impl<I: Item> FromIterator<I> for Itemset<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Frequent itemsets and their supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentPatterns<I: Item> {
    supports: HashMap<Itemset<I>, usize>,
}

impl<I: Item> Default for FrequentPatterns<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> FrequentPatterns<I> {
    pub fn new() -> Self {
        Self {
            supports: HashMap::new(),
        }
    }

    /// Record `itemset` with `support`, returning the previous support if the
    /// itemset was already present. Empty itemsets are ignored.
    pub fn insert(&mut self, itemset: Itemset<I>, support: usize) -> Option<usize> {
        if itemset.is_empty() {
            return None;
        }
        self.supports.insert(itemset, support)
    }

    pub fn get(&self, itemset: &Itemset<I>) -> Option<usize> {
        self.supports.get(itemset).copied()
    }

    /// Support of the itemset made of `items`, in any order.
    pub fn support_of(&self, items: &[I]) -> Option<usize> {
        self.get(&Itemset::new(items.to_vec()))
    }

    pub fn contains(&self, itemset: &Itemset<I>) -> bool {
        self.supports.contains_key(itemset)
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Itemset<I>, usize> {
        self.supports.iter()
    }

    /// Move every entry of `other` into `self`.
    pub fn merge(&mut self, other: FrequentPatterns<I>) {
        self.supports.extend(other.supports);
    }

    /// Size of the largest itemset, zero when empty.
    pub fn max_itemset_len(&self) -> usize {
        self.supports.keys().map(Itemset::len).max().unwrap_or(0)
    }

    /// Entries grouped by itemset size; index `k` holds the `k + 1`-itemsets,
    /// each level sorted by itemset.
    pub fn by_level(&self) -> Vec<Vec<(&Itemset<I>, usize)>> {
        let mut levels: Vec<Vec<(&Itemset<I>, usize)>> = vec![Vec::new(); self.max_itemset_len()];
        for (itemset, &support) in &self.supports {
            if let Some(level) = itemset.len().checked_sub(1) {
                levels[level].push((itemset, support));
            }
        }
        for level in &mut levels {
            level.sort_unstable_by(|a, b| a.0.cmp(b.0));
        }
        levels
    }
}

impl<I: Item> IntoIterator for FrequentPatterns<I> {
    type Item = (Itemset<I>, usize);
    type IntoIter = hash_map::IntoIter<Itemset<I>, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.supports.into_iter()
    }
}

impl<'a, I: Item> IntoIterator for &'a FrequentPatterns<I> {
    type Item = (&'a Itemset<I>, &'a usize);
    type IntoIter = hash_map::Iter<'a, Itemset<I>, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.supports.iter()
    }
}
