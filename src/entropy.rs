//! Entropy
//!
//! Information theoretic scores used to pick the attribute a table is split on.
use crate::constants::GAIN_TOLERANCE;
use crate::data::{count_values, Category, Table};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Base 2 Shannon entropy of a distribution given as counts summing to `total`.
///
/// Zero counts contribute nothing.
pub fn entropy<I>(counts: I, total: usize) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let total = total as f64;
    counts.into_iter().filter(|&c| c > 0).fold(0.0, |s, c| {
        let p = c as f64 / total;
        s - p * p.log2()
    })
}

impl<V: Category> Table<V> {
    /// Entropy of the distribution of `target` values in this table.
    pub fn info(&self, target: &str) -> f64 {
        entropy(self.value_counts(target).into_iter().map(|(_, c)| c), self.size())
    }

    /// Entropy of `target` left after dividing the table by the values of `col`,
    /// each part weighted by its share of the rows.
    pub fn conditional_entropy(&self, col: &str, target: &str) -> f64 {
        let size = self.size() as f64;
        self.unique_values(col)
            .into_iter()
            .map(|v| {
                let indices = self.indices_where(col, v);
                let part = self.values_at(target, &indices);
                let counts = count_values(&part).into_iter().map(|(_, c)| c);
                (indices.len() as f64 / size) * entropy(counts, indices.len())
            })
            .sum()
    }

    /// Reduction in the entropy of `target` achieved by splitting on `col`.
    pub fn gain(&self, col: &str, target: &str) -> f64 {
        self.info(target) - self.conditional_entropy(col, target)
    }

    /// Entropy of `col` itself, the information carried by the split.
    pub fn split_info(&self, col: &str) -> f64 {
        self.info(col)
    }

    /// Gain normalized by split info, 0 when `col` has a single value.
    pub fn gain_ratio(&self, col: &str, target: &str) -> f64 {
        let split_info = self.split_info(col);
        if split_info <= GAIN_TOLERANCE {
            0.0
        } else {
            self.gain(col, target) / split_info
        }
    }
}

/// Score used to rank candidate split attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitCriterion {
    /// Information gain, as in ID3.
    #[default]
    InformationGain,
    /// Information gain divided by split info, as in C4.5.
    GainRatio,
}

impl SplitCriterion {
    pub fn score<V: Category>(&self, table: &Table<V>, col: &str, target: &str) -> f64 {
        match self {
            SplitCriterion::InformationGain => table.gain(col, target),
            SplitCriterion::GainRatio => table.gain_ratio(col, target),
        }
    }
}

impl Display for SplitCriterion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SplitCriterion::InformationGain => write!(f, "gain"),
            SplitCriterion::GainRatio => write!(f, "gain ratio"),
        }
    }
}
