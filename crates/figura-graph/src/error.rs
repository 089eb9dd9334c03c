use std::fmt;

/// Error returned by the fallible `Group` mutations.
///
/// Drawing, rotating and counting never fail on a well-formed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// `index` is past the end of a group holding `len` children.
    OutOfBounds { index: usize, len: usize },
    /// No direct child of `group` carries `id`.
    NotFound { group: String, id: String },
    /// Slot `index` of `group` is a shared child mutably borrowed elsewhere,
    /// so it cannot be inspected.
    Busy { group: String, index: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::OutOfBounds { index, len } => {
                write!(f, "child index {index} out of bounds (group has {len} children)")
            }
            GraphError::NotFound { group, id } => {
                write!(f, "group {group:?} has no child with id {id:?}")
            }
            GraphError::Busy { group, index } => {
                write!(f, "child {index} of group {group:?} is mutably borrowed elsewhere")
            }
        }
    }
}

impl std::error::Error for GraphError {}
