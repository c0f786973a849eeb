//! Decision Tree
//!
//! Growing a tree over a categorical `Table`, reading decision rules off it,
//! classifying rows and saving fitted trees as json.
use crate::config::TreeConfig;
use crate::constants::TARGET_VALUE_SEPARATOR;
use crate::data::{Category, Table};
use crate::entropy::SplitCriterion;
use crate::errors::C45Error;
use crate::node::Node;
use crate::rules::{emit, write_rules, Rule};
use crate::splitter::best_split;
use hashbrown::HashSet;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Decision tree over categorical attributes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecisionTree<V = String> {
    pub cfg: TreeConfig,
    pub root: Option<Node<V>>,
}

impl<V: Category> DecisionTree<V> {
    /// Create an unfitted tree predicting `target`, with default parameters.
    pub fn new(target: &str) -> Self {
        Self::from_config(TreeConfig::new(target))
    }

    pub fn from_config(cfg: TreeConfig) -> Self {
        DecisionTree { cfg, root: None }
    }

    /// Set the maximum depth on the tree.
    /// * `max_depth` - Tables deeper than this become leaves, the root table is at depth 1.
    pub fn set_max_depth(mut self, max_depth: usize) -> Self {
        self.cfg.max_depth = max_depth;
        self
    }

    /// Set the split criterion on the tree.
    /// * `criterion` - Score used to rank candidate attributes.
    pub fn set_criterion(mut self, criterion: SplitCriterion) -> Self {
        self.cfg.criterion = criterion;
        self
    }

    /// Grow the tree on `table`.
    ///
    /// Fails without growing anything if the configured target is not an
    /// attribute of `table`.
    pub fn fit(&mut self, table: Table<V>) -> Result<(), C45Error> {
        self.cfg.validate()?;
        if !table.contains(&self.cfg.target) {
            return Err(C45Error::InvalidTargetColumn(self.cfg.target.clone()));
        }
        info!(
            "Growing a tree for {} on {} rows and {} attributes, maximum depth {}.",
            self.cfg.target,
            table.size(),
            table.n_attributes(),
            self.cfg.max_depth
        );
        let root = build_tree(table, &self.cfg.target, self.cfg.max_depth, self.cfg.criterion, &HashSet::new());
        info!(
            "Finished growing the tree with {} nodes, {} leaves and height {}.",
            root.n_nodes(),
            root.n_leaves(),
            root.height()
        );
        self.root = Some(root);
        Ok(())
    }

    /// Build the table from rows of `(attribute, value)` pairs and grow the tree on it.
    pub fn fit_rows<I, R>(&mut self, rows: I) -> Result<(), C45Error>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (String, V)>,
    {
        self.fit(Table::from_rows(rows)?)
    }

    pub fn root(&self) -> Result<&Node<V>, C45Error> {
        self.root.as_ref().ok_or(C45Error::NotFitted)
    }

    pub fn n_leaves(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.n_leaves())
    }

    /// Number of splits on the longest decision path.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.height())
    }

    /// One rule per leaf, in depth first order.
    pub fn rules(&self) -> Result<Vec<Rule<V>>, C45Error> {
        let mut rules = Vec::new();
        emit(self.root()?, &self.cfg.target, Vec::new(), &mut rules);
        Ok(rules)
    }

    /// Write the rules as tab separated text, preceded by a header line.
    pub fn write_rules<W: Write>(&self, out: &mut W) -> Result<(), C45Error> {
        let rules = self.rules()?;
        write_rules(&rules, out).map_err(|e| C45Error::UnableToWrite(e.to_string()))
    }

    /// Follow the branches matching `row` down to a leaf and return the target
    /// values seen there.
    ///
    /// Returns `None` if the row lacks a split attribute or holds a value no
    /// branch was grown for.
    pub fn predict_row(&self, row: &HashMap<String, V>) -> Result<Option<Vec<&V>>, C45Error> {
        let mut node = self.root()?;
        while !node.is_leaf() {
            let next = node.children.iter().find(|child| match child.table.split() {
                Some(split) => row.get(&split.attribute) == Some(&split.value),
                None => false,
            });
            match next {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        Ok(Some(node.table.unique_values(&self.cfg.target)))
    }
}

impl<V> DecisionTree<V>
where
    V: Category + Serialize + DeserializeOwned,
{
    /// Save a tree as a json object to a file.
    ///
    /// * `path` - Path to save the tree.
    pub fn save_tree<P: AsRef<Path>>(&self, path: P) -> Result<(), C45Error> {
        let model = self.json_dump()?;
        fs::write(path, model).map_err(|e| C45Error::UnableToWrite(e.to_string()))
    }

    /// Dump a tree as a json object
    pub fn json_dump(&self) -> Result<String, C45Error> {
        serde_json::to_string(self).map_err(|e| C45Error::UnableToWrite(e.to_string()))
    }

    /// Load a tree from Json string
    pub fn from_json(json_str: &str) -> Result<Self, C45Error> {
        serde_json::from_str::<DecisionTree<V>>(json_str).map_err(|e| C45Error::UnableToRead(e.to_string()))
    }

    /// Load a tree from a path to a json tree object.
    pub fn load_tree<P: AsRef<Path>>(path: P) -> Result<Self, C45Error> {
        let json_str = fs::read_to_string(path).map_err(|e| C45Error::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

/// Grow the subtree rooted at `table`.
///
/// `excluded` holds the attributes already split on above this table.
fn build_tree<V: Category>(
    table: Table<V>,
    target: &str,
    max_depth: usize,
    criterion: SplitCriterion,
    excluded: &HashSet<String>,
) -> Node<V> {
    if table.depth() > max_depth {
        if !table.is_homogeneous(target) {
            warn!(
                "Maximum depth {} reached with {} rows of mixed {} values.",
                max_depth,
                table.size(),
                target
            );
        }
        return Node::new(table);
    }

    let split = match best_split(&table, target, criterion, excluded) {
        Some(s) => s,
        None => return Node::new(table),
    };
    debug!(
        "Splitting {} rows at depth {} on {}, {} {}.",
        table.size(),
        table.depth(),
        split.split_feature,
        criterion,
        split.split_gain
    );

    let partitions = table.partition_on_attribute(&split.split_feature);
    let mut excluded_below = excluded.clone();
    excluded_below.insert(split.split_feature);

    let mut node = Node::new(table);
    for sub in partitions {
        if sub.is_homogeneous(target) {
            node.add(Node::new(sub));
        } else {
            node.add(build_tree(sub, target, max_depth, criterion, &excluded_below));
        }
    }
    node
}

impl<V: Category> Display for DecisionTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let root = match &self.root {
            Some(r) => r,
            None => return write!(f, "unfitted tree for {}", self.cfg.target),
        };
        let mut print_buffer: Vec<&Node<V>> = vec![root];
        let mut r = String::new();
        while let Some(node) = print_buffer.pop() {
            let indent = "      ".repeat(node.table.depth().saturating_sub(1));
            let label = match node.table.split() {
                Some(split) => split.to_string(),
                None => "root".to_string(),
            };
            if node.is_leaf() {
                let values: Vec<String> = node
                    .table
                    .unique_values(&self.cfg.target)
                    .iter()
                    .map(|v| v.to_string())
                    .collect();
                r += format!(
                    "{}{}:leaf={},count={}\n",
                    indent,
                    label,
                    values.join(TARGET_VALUE_SEPARATOR),
                    node.table.size()
                )
                .as_str();
            } else {
                r += format!("{}{}:count={}\n", indent, label, node.table.size()).as_str();
                print_buffer.extend(node.children.iter().rev());
            }
        }
        write!(f, "{}", r)
    }
}
