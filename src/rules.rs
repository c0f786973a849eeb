//! Rules
//!
//! Decision rules read off a grown tree, one per leaf, and the tab separated
//! text format they are written in.
use crate::constants::{PREDICATE_SEPARATOR, RULES_HEADER, TARGET_VALUE_SEPARATOR};
use crate::data::Category;
use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::io::{self, Write};

/// An `attribute=value` condition on the path from the root to a node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Predicate<V = String> {
    pub attribute: String,
    pub value: V,
}

impl<V> Predicate<V> {
    pub fn new(attribute: &str, value: V) -> Self {
        Predicate {
            attribute: attribute.to_string(),
            value,
        }
    }
}

impl<V: Display> Display for Predicate<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}={}", self.attribute, self.value)
    }
}

/// The rule attached to one leaf of the tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rule<V = String> {
    /// Number of training rows that reached the leaf.
    pub count: usize,
    /// Name of the target attribute.
    pub target: String,
    /// Target values seen at the leaf, in the order they first appear.
    /// More than one value means growth stopped before the leaf was pure.
    pub target_values: Vec<V>,
    /// Conditions from the root down to the leaf.
    pub predicates: Vec<Predicate<V>>,
}

impl<V: Display> Rule<V> {
    /// Number of predicates from the root to the leaf.
    pub fn path_length(&self) -> usize {
        self.predicates.len()
    }

    /// The `target=v1~v2` representation of the leaf's outcome.
    pub fn result(&self) -> String {
        let values: Vec<String> = self.target_values.iter().map(|v| v.to_string()).collect();
        format!("{}={}", self.target, values.join(TARGET_VALUE_SEPARATOR))
    }

    pub fn is_pure(&self) -> bool {
        self.target_values.len() == 1
    }
}

impl<V: Display> Display for Rule<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let predicates: Vec<String> = self.predicates.iter().map(|p| p.to_string()).collect();
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.count,
            self.path_length(),
            self.result(),
            predicates.join(PREDICATE_SEPARATOR)
        )
    }
}

/// Walk the tree depth first and collect one rule per leaf.
///
/// `predicates` is owned by this branch, every child gets its own copy.
pub fn emit<V: Category>(node: &Node<V>, target: &str, mut predicates: Vec<Predicate<V>>, rules: &mut Vec<Rule<V>>) {
    if let Some(split) = node.table.split() {
        predicates.push(split.clone());
    }

    if node.is_leaf() {
        rules.push(Rule {
            count: node.table.size(),
            target: target.to_string(),
            target_values: node.table.unique_values(target).into_iter().cloned().collect(),
            predicates,
        });
    } else {
        for child in node.children.iter() {
            emit(child, target, predicates.clone(), rules);
        }
    }
}

/// Write the header line followed by one line per rule.
pub fn write_rules<V: Display, W: Write>(rules: &[Rule<V>], out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", RULES_HEADER)?;
    for rule in rules {
        writeln!(out, "{}", rule)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tests::weather_table;

    #[test]
    fn test_rule_line() {
        let rule = Rule {
            count: 2,
            target: "Play".to_string(),
            target_values: vec!["Yes".to_string()],
            predicates: vec![
                Predicate::new("Weather", "Sunny".to_string()),
                Predicate::new("Wind", "Weak".to_string()),
            ],
        };
        assert_eq!(rule.path_length(), 2);
        assert!(rule.is_pure());
        assert_eq!(rule.to_string(), "2\t2\tPlay=Yes\tWeather=Sunny & Wind=Weak");
    }

    #[test]
    fn test_root_leaf_has_no_predicates() {
        let root = Node::new(weather_table());
        let mut rules = Vec::new();
        emit(&root, "Play", Vec::new(), &mut rules);
        assert_eq!(rules.len(), 1);
        assert!(!rules[0].is_pure());
        assert_eq!(rules[0].to_string(), "4\t0\tPlay=Yes~No\t");
    }

    #[test]
    fn test_siblings_do_not_share_predicates() {
        let table = weather_table();
        let mut root = Node::new(table.clone());
        for sub in table.partition_on_attribute("Weather") {
            root.add(Node::new(sub));
        }
        let mut rules = Vec::new();
        emit(&root, "Play", Vec::new(), &mut rules);
        let lines: Vec<String> = rules.iter().map(|r| r.to_string()).collect();
        assert_eq!(lines, vec!["2\t1\tPlay=Yes\tWeather=Sunny", "2\t1\tPlay=No\tWeather=Rainy"]);
    }

    #[test]
    fn test_write_rules_always_writes_header() {
        let mut out = Vec::new();
        write_rules::<String, _>(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Count\tPath_Length\tResult\tPredicates\n");
    }
}
