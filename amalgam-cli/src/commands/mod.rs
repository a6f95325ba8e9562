//! CLI command implementations.
//!
//! - `expand`: resolve the run settings, open the sink, and expand the root

pub mod expand;

pub use expand::ExpandCommand;
