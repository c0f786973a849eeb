//! Tree Configuration
//!
//! Parameters controlling how a `DecisionTree` is grown.
use crate::constants::DEFAULT_MAX_DEPTH;
use crate::entropy::SplitCriterion;
use crate::errors::C45Error;
use serde::{Deserialize, Serialize};

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}
fn default_criterion() -> SplitCriterion {
    SplitCriterion::InformationGain
}

/// Configuration for the `DecisionTree`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Name of the attribute the tree predicts.
    pub target: String,
    /// Tables deeper than this are not split any further. The root is at depth 1,
    /// so 0 keeps the whole table in a single leaf.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Score used to rank split attributes.
    #[serde(default = "default_criterion")]
    pub criterion: SplitCriterion,
}

impl TreeConfig {
    pub fn new(target: &str) -> Self {
        TreeConfig {
            target: target.to_string(),
            max_depth: default_max_depth(),
            criterion: default_criterion(),
        }
    }

    pub fn validate(&self) -> Result<(), C45Error> {
        if self.target.is_empty() {
            return Err(C45Error::InvalidParameter(
                "target".to_string(),
                "an attribute name".to_string(),
                "an empty string".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_json() {
        let cfg: TreeConfig = serde_json::from_str(r#"{"target": "Play"}"#).unwrap();
        assert_eq!(cfg, TreeConfig::new("Play"));
        assert_eq!(cfg.max_depth, 20);
        assert_eq!(cfg.criterion, SplitCriterion::InformationGain);

        let cfg: TreeConfig =
            serde_json::from_str(r#"{"target": "Play", "max_depth": 3, "criterion": "GainRatio"}"#).unwrap();
        assert_eq!(cfg.max_depth, 3);
        assert_eq!(cfg.criterion, SplitCriterion::GainRatio);
    }

    #[test]
    fn test_validate() {
        assert!(TreeConfig::new("Play").validate().is_ok());
        assert!(matches!(
            TreeConfig::new("").validate(),
            Err(C45Error::InvalidParameter(name, _, _)) if name == "target"
        ));
    }
}
