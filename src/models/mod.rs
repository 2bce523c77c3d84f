//! # Models Module
//!
//! Contains core data structures and type definitions for network
//! configuration and datatoken access.

mod config_record;
pub use config_record::*;

mod network_id;
pub use network_id::*;

mod error;
pub use error::*;
