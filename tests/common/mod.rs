//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

/// Number of transactions containing every item of `itemset`.
pub fn brute_force_support<T: Ord>(transactions: &[Vec<T>], itemset: &[T]) -> usize {
    transactions
        .iter()
        .filter(|tx| itemset.iter().all(|item| tx.contains(item)))
        .count()
}

/// Every non-empty itemset occurring in at least `min_support` transactions,
/// found by enumerating the subsets of each transaction.
pub fn brute_force_frequent<T: Ord + Clone>(
    transactions: &[Vec<T>],
    min_support: usize,
) -> BTreeSet<Vec<T>> {
    let mut candidates = BTreeSet::new();
    for tx in transactions {
        let items: Vec<T> = tx.iter().cloned().collect::<BTreeSet<T>>().into_iter().collect();
        for mask in 1u32..(1 << items.len()) {
            let subset: Vec<T> = items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, item)| item.clone())
                .collect();
            candidates.insert(subset);
        }
    }
    candidates
        .into_iter()
        .filter(|itemset| brute_force_support(transactions, itemset) >= min_support)
        .collect()
}

pub fn strings(transactions: &[&[&str]]) -> Vec<Vec<String>> {
    transactions
        .iter()
        .map(|tx| tx.iter().map(|item| item.to_string()).collect())
        .collect()
}
