mod config;
pub use config::*;

mod provider;
pub use provider::*;
