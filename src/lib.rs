// Modules
pub mod config;
pub mod constants;
pub mod data;
pub mod entropy;
pub mod errors;
pub mod loader;
pub mod node;
pub mod rules;
pub mod splitter;
pub mod tree;

// Individual classes, and functions
pub use config::TreeConfig;
pub use data::Table;
pub use entropy::SplitCriterion;
pub use errors::C45Error;
pub use rules::{Predicate, Rule};
pub use tree::DecisionTree;
