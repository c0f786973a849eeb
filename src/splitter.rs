use crate::constants::GAIN_TOLERANCE;
use crate::data::{Category, Table};
use crate::entropy::SplitCriterion;
use crate::rules::Predicate;
use hashbrown::HashSet;
use std::collections::BTreeMap;

impl<V: Category> Table<V> {
    /// Returns one sub table per distinct value of `col`, holding exactly the
    /// rows with that value.
    ///
    /// Sub tables come in the order the values first appear in `col`. Each one
    /// sits one level deeper than this table and records `col=value` as the
    /// predicate that produced it.
    pub fn partition_on_attribute(&self, col: &str) -> Vec<Table<V>> {
        self.unique_values(col)
            .into_iter()
            .map(|v| {
                let indices = self.indices_where(col, v);
                let columns: BTreeMap<String, Vec<V>> = self
                    .columns()
                    .map(|(name, _)| (name.clone(), self.values_at(name, &indices)))
                    .collect();
                Table::slice(columns, indices.len(), self.depth() + 1, Predicate::new(col, v.clone()))
            })
            .collect()
    }
}

/// The attribute chosen to split a table on, with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitInfo {
    pub split_feature: String,
    pub split_gain: f64,
}

/// Pick the attribute with the best score among all attributes other than
/// `target` and those in `excluded`.
///
/// Attributes are visited in lexicographic order and only a strictly better
/// score replaces the current best, so ties go to the smallest name.
/// Returns `None` when there is no candidate attribute.
pub fn best_split<V: Category>(
    table: &Table<V>,
    target: &str,
    criterion: SplitCriterion,
    excluded: &HashSet<String>,
) -> Option<SplitInfo> {
    let mut best: Option<SplitInfo> = None;
    for col in table.attributes().filter(|c| *c != target && !excluded.contains(*c)) {
        let score = criterion.score(table, col, target);
        let better = match &best {
            Some(b) => score > b.split_gain + GAIN_TOLERANCE,
            None => true,
        };
        if better {
            best = Some(SplitInfo {
                split_feature: col.to_string(),
                split_gain: score,
            });
        }
    }
    best
}
