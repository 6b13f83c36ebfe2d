//! Builder and binding misuse errors.
//!
//! Every error here is a programmer-usage error raised synchronously at the
//! point of misuse and propagated to the immediate caller. Nothing is
//! transient, so there is no retry or recovery path anywhere in the crate.

/// Errors from binding construction and element building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// `map` was constructed over an observable whose current value is not
    /// a list.
    MapSourceNotList {
        /// Kind of the value actually found.
        found: &'static str,
    },
    /// A `dataset` property was given a value that is not a key-value map.
    DatasetNotMap {
        /// Kind of the value actually found.
        found: &'static str,
    },
    /// Both a `children` property and trailing child arguments were
    /// supplied; the two mechanisms are mutually exclusive.
    ChildrenConflict,
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MapSourceNotList { found } => {
                write!(f, "map binding requires a list-valued observable, found {found}")
            }
            Self::DatasetNotMap { found } => {
                write!(f, "dataset requires a key-value map, found {found}")
            }
            Self::ChildrenConflict => write!(
                f,
                "children property and trailing children are mutually exclusive"
            ),
        }
    }
}

impl std::error::Error for ViewError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ViewError::MapSourceNotList { found: "int" }.to_string(),
            "map binding requires a list-valued observable, found int"
        );
        assert_eq!(
            ViewError::DatasetNotMap { found: "string" }.to_string(),
            "dataset requires a key-value map, found string"
        );
        assert!(ViewError::ChildrenConflict.to_string().contains("mutually exclusive"));
    }
}
