/// Extension traits for built-in Rust types.
///
/// Each extension trait lives in its own file named after the type it extends:
/// - `path.rs` - Extensions for `std::path::Path`
pub mod path;

pub use path::{from_posix_str, PathExt};
