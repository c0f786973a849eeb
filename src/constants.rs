pub const DEFAULT_MAX_DEPTH: usize = 20;
pub const ROOT_DEPTH: usize = 1;
/// Scores closer than this are treated as a tie.
pub const GAIN_TOLERANCE: f64 = 1e-12;
pub const PREDICATE_SEPARATOR: &str = " & ";
pub const TARGET_VALUE_SEPARATOR: &str = "~";
pub const RULES_HEADER: &str = "Count\tPath_Length\tResult\tPredicates";
pub const DEFAULT_OUTPUT: &str = "decision.txt";
