//! # Services Module
//!
//! Implements blockchain access: the EVM provider seam and read-only
//! datatoken queries.

mod provider;
pub use provider::*;

mod datatoken;
pub use datatoken::*;
