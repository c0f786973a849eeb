use crate::data::{Category, Table};
use serde::{Deserialize, Serialize};

/// A node of the decision tree, owning the slice of the data it represents
/// and its children in the order they were added.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node<V = String> {
    pub table: Table<V>,
    pub children: Vec<Node<V>>,
}

impl<V: Category> Node<V> {
    pub fn new(table: Table<V>) -> Self {
        Node {
            table,
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, child: Node<V>) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn n_nodes(&self) -> usize {
        1 + self.children.iter().map(|c| c.n_nodes()).sum::<usize>()
    }

    pub fn n_leaves(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(|c| c.n_leaves()).sum()
        }
    }

    /// Length of the longest path from this node down to a leaf, in splits.
    pub fn height(&self) -> usize {
        self.children.iter().map(|c| c.height() + 1).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tests::weather_table;

    #[test]
    fn test_node_structure() {
        let table = weather_table();
        let mut root = Node::new(table.clone());
        assert!(root.is_leaf());
        assert_eq!(root.n_leaves(), 1);
        assert_eq!(root.height(), 0);

        let mut parts = table.partition_on_attribute("Weather").into_iter();
        let mut sunny = Node::new(parts.next().unwrap());
        let rainy = Node::new(parts.next().unwrap());
        sunny.add(Node::new(sunny.table.clone()));
        root.add(sunny);
        root.add(rainy);

        assert!(!root.is_leaf());
        assert_eq!(root.n_nodes(), 4);
        assert_eq!(root.n_leaves(), 2);
        assert_eq!(root.height(), 2);
        assert_eq!(root.children[1].table.split().unwrap().to_string(), "Weather=Rainy");
    }
}
