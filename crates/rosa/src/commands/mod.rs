//! CLI command implementations.

pub(crate) mod nav;
pub(crate) mod srcset;

pub(crate) use nav::NavArgs;
pub(crate) use srcset::SrcsetArgs;
