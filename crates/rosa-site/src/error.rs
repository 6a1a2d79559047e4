//! Error types for navigation projection and image descriptors.

use std::fmt::Write;

/// The content tree cannot be projected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedTreeError {
    /// Nesting goes deeper than the projector allows.
    #[error("content tree exceeds maximum depth of {max_depth} at {}", describe_path(.path))]
    DepthExceeded {
        /// Configured depth limit.
        max_depth: usize,
        /// Child indices from the root to the offending node.
        path: Vec<usize>,
    },
}

/// An image reference was rejected by strict validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidImageRefError {
    /// The image has no URL to resize.
    #[error("image reference has no url")]
    MissingUrl,
}

/// Render a child-index path as `root.children[1].children[0]`.
fn describe_path(path: &[usize]) -> String {
    let mut out = String::from("root");
    for index in path {
        let _ = write!(out, ".children[{index}]");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_exceeded_message_names_path() {
        let err = MalformedTreeError::DepthExceeded {
            max_depth: 2,
            path: vec![1, 0, 3],
        };

        assert_eq!(
            err.to_string(),
            "content tree exceeds maximum depth of 2 at root.children[1].children[0].children[3]"
        );
    }

    #[test]
    fn test_describe_empty_path_is_root() {
        assert_eq!(describe_path(&[]), "root");
    }
}
