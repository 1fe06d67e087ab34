//! Error types for designspace conversion and naming.

/// Result type for designspace operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a designspace or deriving names.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A location does not name exactly the axes it is checked against.
    #[error("{context}: location axes {found:?} do not match document axes {expected:?}")]
    SchemaMismatch {
        context: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// No axis label matches a location's value on an axis.
    #[error("document needs a label for axis '{axis}', user value {value}")]
    MissingAxisLabel { axis: String, value: f64 },

    /// Every matched label is elidable and nothing supplies a style name.
    #[error(
        "cannot infer style name for instance '{instance}': all labels are elidable and no fallback name is set"
    )]
    UnresolvableStyleName { instance: String },

    /// Some axes declare a STAT ordering rank and others do not.
    #[error("all or none of the axes must specify a STAT ordering")]
    InconsistentAxisOrdering,

    /// A range subset lies entirely outside its axis.
    #[error("subset of axis '{axis}' does not overlap the axis range")]
    EmptyAxisSubset { axis: String },

    /// A variable font names an axis the document does not have.
    #[error("axis not found: {0}")]
    UnknownAxis(String),

    /// An instance refers to a location label the document does not have.
    #[error("location label not found: {0}")]
    UnknownLocationLabel(String),

    /// An axis tag is not four valid characters.
    #[error("axis tag must be 4 characters: {0}")]
    InvalidAxisTag(String),
}
