//! Ocean Market Network Configuration Library
//!
//! This library resolves network configuration for the Ocean data-marketplace
//! frontend and exposes read-only datatoken queries. It includes:
//!
//! - Network configuration records and selector types
//! - Configuration resolution with source-driven development overrides
//! - A built-in registry of known networks
//! - Read-only EVM contract access (payment collector lookup)
//!
//! # Module Structure
//!
//! - `config`: Configuration sources, data tables and resolution
//! - `logging`: Logging setup
//! - `models`: Data structures for networks and configuration records
//! - `services`: EVM provider and datatoken queries

pub mod config;
pub mod logging;
pub mod models;
pub mod services;
