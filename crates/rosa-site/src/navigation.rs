//! Navigation projection.
//!
//! Derives the site menu from the content tree by keeping only container
//! nodes. The walk is post-order: every child list is projected and compacted
//! before its parent is judged. A node whose `type` is set to anything other
//! than the container marker is removed together with its whole subtree;
//! surviving descendants are not hoisted. Untyped nodes pass through.
//!
//! # Example
//!
//! ```
//! use rosa_site::{ContentNode, project};
//!
//! let tree = ContentNode::typed("containerDirectory").with_children([
//!     ContentNode::typed("page"),
//!     ContentNode::typed("containerDirectory").with_children([]),
//! ]);
//!
//! let nav = project(&tree).unwrap().unwrap();
//! assert_eq!(nav.child_nodes().len(), 1);
//! ```

use crate::content::{ContentNode, NavigationNode};
use crate::error::MalformedTreeError;

/// Type tag of nodes that make up the navigation.
pub const CONTAINER_DIRECTORY: &str = "containerDirectory";

/// Default nesting limit for a content tree.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Largest usable nesting limit.
///
/// `serde_json` stops at 128 nested containers and every tree level costs
/// two of them (the node object and its `children` array). A node one level
/// past this limit, with its own `children` array and an object attribute,
/// still parses, so a JSON tree that is too deep for any allowed limit is
/// rejected by the depth check rather than by the parser.
pub const MAX_SUPPORTED_DEPTH: usize = 60;

/// Projects content trees onto navigation trees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationProjector {
    container_type: String,
    max_depth: usize,
}

impl Default for NavigationProjector {
    fn default() -> Self {
        Self::new(CONTAINER_DIRECTORY, DEFAULT_MAX_DEPTH)
    }
}

impl NavigationProjector {
    /// Create a projector keeping nodes of `container_type`.
    ///
    /// `max_depth` is the deepest level a node may sit at; the root is level 0.
    #[must_use]
    pub fn new(container_type: impl Into<String>, max_depth: usize) -> Self {
        Self {
            container_type: container_type.into(),
            max_depth,
        }
    }

    /// Replace the type tag of retained nodes.
    #[must_use]
    pub fn with_container_type(mut self, container_type: impl Into<String>) -> Self {
        self.container_type = container_type.into();
        self
    }

    /// Replace the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Type tag of retained nodes.
    #[must_use]
    pub fn container_type(&self) -> &str {
        &self.container_type
    }

    /// Deepest level a node may sit at.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether `node` survives the type filter on its own.
    #[must_use]
    pub fn is_retained(&self, node: &ContentNode) -> bool {
        node.node_type
            .as_deref()
            .is_none_or(|node_type| node_type == self.container_type)
    }

    /// Project `tree` onto its navigation tree.
    ///
    /// Returns `Ok(None)` when the root itself is filtered out.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedTreeError::DepthExceeded`] if any node sits deeper
    /// than the configured limit.
    pub fn project(&self, tree: &ContentNode) -> Result<Option<NavigationNode>, MalformedTreeError> {
        let mut path = Vec::new();
        let projected = self.project_node(tree, &mut path)?;

        match &projected {
            Some(nav) => tracing::debug!(
                container_type = %self.container_type,
                node_count = nav.count(),
                depth = nav.depth(),
                "Navigation projected"
            ),
            None => tracing::debug!(
                container_type = %self.container_type,
                "Navigation root removed by type filter"
            ),
        }

        Ok(projected)
    }

    fn project_node(
        &self,
        node: &ContentNode,
        path: &mut Vec<usize>,
    ) -> Result<Option<NavigationNode>, MalformedTreeError> {
        if path.len() > self.max_depth {
            tracing::warn!(max_depth = self.max_depth, ?path, "Content tree too deep");
            return Err(MalformedTreeError::DepthExceeded {
                max_depth: self.max_depth,
                path: path.clone(),
            });
        }

        let children = match &node.children {
            Some(entries) => {
                let mut retained = Vec::with_capacity(entries.len());
                for (index, entry) in entries.iter().enumerate() {
                    let Some(child) = entry else {
                        continue;
                    };
                    path.push(index);
                    let projected = self.project_node(child, path);
                    path.pop();
                    if let Some(nav) = projected? {
                        retained.push(nav);
                    }
                }
                Some(retained)
            }
            None => None,
        };

        if !self.is_retained(node) {
            return Ok(None);
        }

        Ok(Some(NavigationNode {
            node_type: node.node_type.clone(),
            children,
            attributes: node.attributes.clone(),
        }))
    }
}

/// Project `tree` with the default container marker and depth limit.
///
/// # Errors
///
/// Returns [`MalformedTreeError::DepthExceeded`] for trees nested deeper
/// than [`DEFAULT_MAX_DEPTH`].
pub fn project(tree: &ContentNode) -> Result<Option<NavigationNode>, MalformedTreeError> {
    NavigationProjector::default().project(tree)
}
