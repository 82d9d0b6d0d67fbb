//! Configuration management for template renaming
//!
//! - `loader`: rename configuration types and file loading

pub mod loader;


pub use loader::{RenameConfig, RenameRules};
