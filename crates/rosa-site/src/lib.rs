//! Site content helpers for Rosa.
//!
//! This crate provides:
//! - [`NavigationProjector`]: derives the navigation menu from the CMS
//!   content tree by keeping only container nodes
//! - [`build_srcset`] and [`SrcSetBuilder`]: responsive `srcset` values for
//!   pictures
//!
//! Both are pure functions over caller-supplied data.
//!
//! # Quick Start
//!
//! ```
//! use rosa_site::{ContentNode, ImageRef, build_srcset, project};
//!
//! let tree: ContentNode = serde_json::from_str(
//!     r#"{"type": "containerDirectory", "children": [{"type": "page"}, null]}"#,
//! )
//! .unwrap();
//! let nav = project(&tree).unwrap().unwrap();
//! assert!(nav.child_nodes().is_empty());
//!
//! let srcset = build_srcset(&ImageRef::new("img.jpg"));
//! assert!(srcset.starts_with("img.jpg?resize=300x189 300w,"));
//! ```

mod content;
mod error;
mod navigation;
mod srcset;

pub use content::{ContentNode, NavigationNode};
pub use error::{InvalidImageRefError, MalformedTreeError};
pub use navigation::{
    CONTAINER_DIRECTORY, DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH, NavigationProjector, project,
};
pub use srcset::{
    ImageRef, ImageValidation, RESIZE_PROFILES, ResizeProfile, ResponsiveImage, SrcSetBuilder,
    build_srcset,
};
