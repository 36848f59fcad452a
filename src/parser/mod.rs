//! Documentation block parsing and merging.

pub mod block;
pub mod merge;
