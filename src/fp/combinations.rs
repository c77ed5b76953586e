use super::Item;
use super::patterns::{FrequentPatterns, Itemset};

/// Record every non-empty combination of a single-path tree's items, each
/// joined with `prefix`.
///
/// `path` runs from the root downwards, so counts never increase along it and
/// the support of a combination is the count of its deepest member.
pub fn generate_combinations_from_path<I: Item>(
    path: &[(I, usize)],
    prefix: &Itemset<I>,
    result: &mut FrequentPatterns<I>,
) {
    let indices: Vec<usize> = (0..path.len()).collect();
    let mut callback = |combination: &[usize]| {
        let Some(&deepest) = combination.last() else {
            return;
        };
        let pattern: Itemset<I> = prefix
            .iter()
            .cloned()
            .chain(combination.iter().map(|&idx| path[idx].0.clone()))
            .collect();
        result.insert(pattern, path[deepest].1);
    };

    for k in 1..=path.len() {
        generate_combinations_recursive(&indices, k, 0, &mut Vec::new(), &mut callback);
    }
}

/// Call `callback` with every `k`-combination of `items`, in lexicographic
/// order of positions.
pub fn generate_combinations_recursive<F>(
    items: &[usize],
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    for i in start..items.len() {
        current.push(items[i]);
        generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}
