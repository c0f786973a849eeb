//! Errors
//!
//! Custom error types used throughout the `c45` crate.
use thiserror::Error;

/// Errors that can occur while building or using a decision tree.
#[derive(Debug, Error, PartialEq)]
pub enum C45Error {
    /// A table was built without any attributes.
    #[error("A table needs at least one attribute.")]
    NoAttributes,
    /// A table was built without any rows.
    #[error("A table needs at least one row.")]
    EmptyTable,
    /// An attribute name was the empty string.
    #[error("Attribute names must not be empty.")]
    EmptyAttributeName,
    /// First value is the attribute, second is the table size, third is the column length.
    #[error("Attribute {0} has {2} values, but the table has {1} rows.")]
    ColumnLengthMismatch(String, usize, usize),
    /// Two columns share the same attribute name.
    #[error("Attribute {0} appears more than once.")]
    DuplicateAttribute(String),
    /// A row exposed a different attribute set than the first row.
    #[error("Row {0} does not have the same attributes as the first row.")]
    InconsistentRow(usize),
    /// The configured target attribute is not present in the table.
    #[error("{0} is not a valid column.")]
    InvalidTargetColumn(String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// The tree has not been fitted yet.
    #[error("The decision tree has not been fitted.")]
    NotFitted,
    /// Unable to write a tree or rules.
    #[error("Unable to write: {0}")]
    UnableToWrite(String),
    /// Unable to read a tree or an input table.
    #[error("Unable to read: {0}")]
    UnableToRead(String),
}
