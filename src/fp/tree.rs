use super::Item;
use std::collections::HashMap;

/// A node in the FP-tree arena. The root is the only node with `item == None`.
#[derive(Debug, Clone)]
pub struct FPNode<I> {
    pub item: Option<I>,
    pub count: usize,
    pub parent: Option<usize>,
    pub children: HashMap<I, usize>,
}

/// Prefix tree of projected transactions.
///
/// Nodes live in `nodes` and refer to each other by index; `parent` links are
/// back-references only. The header table maps each item to the indices of
/// every node carrying it, in creation order.
#[derive(Debug, Clone)]
pub struct FPTree<I> {
    pub nodes: Vec<FPNode<I>>,
    pub header_table: HashMap<I, Vec<usize>>,
    header_order: Vec<I>,
    pub root_index: usize,
}

impl<I: Item> FPNode<I> {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
        }
    }

    pub fn new_item(item: I, count: usize, parent: Option<usize>) -> Self {
        Self {
            item: Some(item),
            count,
            parent,
            children: HashMap::new(),
        }
    }
}

impl<I: Item> Default for FPTree<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> FPTree<I> {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HashMap::new(),
            header_order: Vec::new(),
            root_index: 0,
        }
    }

    /// Insert an already filtered and ordered transaction carrying `weight`
    /// occurrences, sharing any existing prefix.
    pub fn insert_transaction(&mut self, transaction: &[I], weight: usize) {
        let mut current_index = self.root_index;

        for item in transaction {
            if let Some(&child_index) = self.nodes[current_index].children.get(item) {
                self.nodes[child_index].count += weight;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes
                    .push(FPNode::new_item(item.clone(), weight, Some(current_index)));
                self.nodes[current_index]
                    .children
                    .insert(item.clone(), new_index);
                match self.header_table.get_mut(item) {
                    Some(indices) => indices.push(new_index),
                    None => {
                        self.header_order.push(item.clone());
                        self.header_table.insert(item.clone(), vec![new_index]);
                    }
                }
                current_index = new_index;
            }
        }
    }

    /// True when the tree holds nothing but its root.
    pub fn is_empty(&self) -> bool {
        self.header_order.is_empty()
    }

    /// Number of non-root nodes.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Header items in the order they were first inserted.
    pub fn header_items(&self) -> impl Iterator<Item = &I> {
        self.header_order.iter()
    }

    pub fn node_indices(&self, item: &I) -> &[usize] {
        self.header_table
            .get(item)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Sum of the counts of every node carrying `item`.
    pub fn item_support(&self, item: &I) -> usize {
        self.node_indices(item)
            .iter()
            .map(|&idx| self.nodes[idx].count)
            .sum()
    }

    /// Conditional pattern base of `item`: for every node carrying it, the
    /// items on the path from the root down to its parent, weighted by the
    /// node's count. Nodes hanging directly off the root contribute nothing.
    pub fn prefix_paths(&self, item: &I) -> Vec<(Vec<I>, usize)> {
        self.node_indices(item)
            .iter()
            .filter_map(|&idx| {
                let mut path = Vec::new();
                let mut current = self.nodes[idx].parent;

                while let Some(i) = current {
                    if let Some(parent_item) = &self.nodes[i].item {
                        path.push(parent_item.clone());
                    }
                    current = self.nodes[i].parent;
                }

                path.reverse();
                (!path.is_empty()).then_some((path, self.nodes[idx].count))
            })
            .collect()
    }

    pub fn has_single_path(&self) -> bool {
        let mut current_index = self.root_index;

        loop {
            let children = &self.nodes[current_index].children;
            if children.len() > 1 {
                return false;
            }
            match children.values().next() {
                Some(&child_index) => current_index = child_index,
                None => return true,
            }
        }
    }

    /// Items and counts along the chain below the root, root side first.
    /// Only meaningful when [`has_single_path`](Self::has_single_path) holds.
    pub fn single_path(&self) -> Vec<(I, usize)> {
        let mut path = Vec::new();
        let mut current_index = self.root_index;

        while let Some(&child_index) = self.nodes[current_index].children.values().next() {
            let child = &self.nodes[child_index];
            if let Some(item) = &child.item {
                path.push((item.clone(), child.count));
            }
            current_index = child_index;
        }
        path
    }
}
