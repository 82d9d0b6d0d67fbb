/// Handles argument parsing and the renaming workflow.
pub mod cli;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Rename configuration of a template.
pub mod config;

/// Sample credentials file seeding.
pub mod credentials;

/// User input and interaction handling.
pub mod dialoguer;

/// Extension traits for standard library types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Process-wide parameters of a run.
pub mod params;

/// Name maps, tree walking and template materialization.
pub mod rename;
