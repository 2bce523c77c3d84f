//! Configuration system for the Ocean marketplace.
//!
//! This module handles:
//! - Injected configuration sources (process environment by default)
//! - Preset and allow-list data tables
//! - Development-sandbox override merging
//! - Network configuration resolution
//!
//! # Structure
//!
//! Resolution is organized into layers:
//! - Sources: Where override values come from
//! - Tables: Preset records and the no-credential network set
//! - Providers: The registry of known network deployments
//! - Resolver: Assembly of the final configuration record
mod source;
pub use source::*;

mod tables;
pub use tables::*;

mod sanitize;
pub use sanitize::*;

mod development;
pub use development::*;

mod registry;
pub use registry::*;

mod resolver;
pub use resolver::*;
