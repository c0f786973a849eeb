//! Data
//!
//! The column oriented `Table` the tree is grown on. Every attribute maps to
//! one value per row, and every slice of the data produced while growing the
//! tree is a `Table` of its own, which remembers its depth and the predicate
//! that produced it.
use crate::constants::ROOT_DEPTH;
use crate::errors::C45Error;
use crate::rules::Predicate;
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Data trait used throughout the package
/// for categorical attribute values.
///
/// Values are opaque, they are only ever compared, hashed and printed.
pub trait Category: Clone + Eq + Hash + Ord + Display + Debug {}

impl<T: Clone + Eq + Hash + Ord + Display + Debug> Category for T {}

/// Column oriented slice of a categorical dataset.
///
/// Attributes are kept in lexicographic order, which is the order candidate
/// attributes are considered in when growing a tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Table<V = String> {
    columns: BTreeMap<String, Vec<V>>,
    size: usize,
    depth: usize,
    split: Option<Predicate<V>>,
}

impl<V: Category> Table<V> {
    /// Create a root table from columns of values.
    ///
    /// * `columns` - Pairs of attribute name and the values of that attribute, one per row.
    pub fn from_columns<I>(columns: I) -> Result<Self, C45Error>
    where
        I: IntoIterator<Item = (String, Vec<V>)>,
    {
        let mut by_name: BTreeMap<String, Vec<V>> = BTreeMap::new();
        for (name, values) in columns {
            if by_name.contains_key(&name) {
                return Err(C45Error::DuplicateAttribute(name));
            }
            by_name.insert(name, values);
        }
        let columns = by_name;
        let size = match columns.values().next() {
            Some(first) => first.len(),
            None => return Err(C45Error::NoAttributes),
        };
        if size == 0 {
            return Err(C45Error::EmptyTable);
        }
        for (name, values) in columns.iter() {
            if name.is_empty() {
                return Err(C45Error::EmptyAttributeName);
            }
            if values.len() != size {
                return Err(C45Error::ColumnLengthMismatch(name.clone(), size, values.len()));
            }
        }
        Ok(Table {
            columns,
            size,
            depth: ROOT_DEPTH,
            split: None,
        })
    }

    /// Create a root table from rows of `(attribute, value)` pairs.
    ///
    /// Values are grouped by attribute, keeping the row order within every
    /// attribute. Every row must expose exactly the attributes of the first row.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, C45Error>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (String, V)>,
    {
        let mut columns: BTreeMap<String, Vec<V>> = BTreeMap::new();
        for (i, row) in rows.into_iter().enumerate() {
            let mut n_seen = 0;
            for (name, value) in row {
                match columns.get_mut(&name) {
                    // A second value for the same attribute in one row also lands here.
                    Some(column) if column.len() != i => return Err(C45Error::InconsistentRow(i)),
                    Some(column) => column.push(value),
                    None if i == 0 => {
                        columns.insert(name, vec![value]);
                    }
                    None => return Err(C45Error::InconsistentRow(i)),
                }
                n_seen += 1;
            }
            if n_seen != columns.len() {
                return Err(C45Error::InconsistentRow(i));
            }
        }
        Self::from_columns(columns)
    }

    /// Build a slice of a parent table, the invariants hold by construction.
    pub(crate) fn slice(columns: BTreeMap<String, Vec<V>>, size: usize, depth: usize, split: Predicate<V>) -> Self {
        Table {
            columns,
            size,
            depth,
            split: Some(split),
        }
    }

    /// Number of rows.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn n_attributes(&self) -> usize {
        self.columns.len()
    }

    /// Attribute names, in lexicographic order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|k| k.as_str())
    }

    pub fn contains(&self, col: &str) -> bool {
        self.columns.contains_key(col)
    }

    pub fn column(&self, col: &str) -> Option<&[V]> {
        self.columns.get(col).map(|v| v.as_slice())
    }

    /// Depth of this table in the tree, the root is at depth 1.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The predicate that produced this table from its parent, `None` for the root.
    pub fn split(&self) -> Option<&Predicate<V>> {
        self.split.as_ref()
    }

    pub(crate) fn columns(&self) -> impl Iterator<Item = (&String, &Vec<V>)> {
        self.columns.iter()
    }

    // An attribute that is not in the table behaves like an empty column.
    fn values(&self, col: &str) -> &[V] {
        self.column(col).unwrap_or(&[])
    }

    /// Distinct values of `col`, in the order they first appear.
    pub fn unique_values(&self, col: &str) -> Vec<&V> {
        let mut seen = HashSet::new();
        self.values(col).iter().filter(|v| seen.insert(*v)).collect()
    }

    /// Distinct values of `col` with the number of rows holding them,
    /// in the order they first appear.
    pub fn value_counts(&self, col: &str) -> Vec<(&V, usize)> {
        count_values(self.values(col))
    }

    /// Number of rows where `col` equals `v`.
    pub fn frequency(&self, col: &str, v: &V) -> usize {
        self.values(col).iter().filter(|x| *x == v).count()
    }

    /// Returns true if all values in `col` are equal.
    pub fn is_homogeneous(&self, col: &str) -> bool {
        match self.values(col).split_first() {
            Some((first, rest)) => rest.iter().all(|v| v == first),
            None => true,
        }
    }

    /// Row indices where `col` equals `v`, ascending.
    pub fn indices_where(&self, col: &str, v: &V) -> Vec<usize> {
        self.values(col)
            .iter()
            .enumerate()
            .filter_map(|(i, x)| if x == v { Some(i) } else { None })
            .collect()
    }

    /// Values of `col` at `indices`, in the order of `indices`.
    pub fn values_at(&self, col: &str, indices: &[usize]) -> Vec<V> {
        let values = self.values(col);
        indices.iter().filter_map(|&i| values.get(i).cloned()).collect()
    }
}

/// Distinct values with the number of times they occur, in the order they first appear.
pub fn count_values<V: Category>(values: &[V]) -> Vec<(&V, usize)> {
    let mut position: HashMap<&V, usize> = HashMap::new();
    let mut counts: Vec<(&V, usize)> = Vec::new();
    for v in values {
        match position.get(v) {
            Some(&i) => counts[i].1 += 1,
            None => {
                position.insert(v, counts.len());
                counts.push((v, 1));
            }
        }
    }
    counts
}
