use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Extension trait for Path to provide convenient string conversion methods
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use template_rename::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("test");
    /// assert_eq!(path.to_str_checked().unwrap(), "test");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Renders a relative path with `/` separators regardless of platform, so it
    /// can be matched against skip lists and rename tables.
    ///
    /// # Examples
    /// ```
    /// use template_rename::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("meta").join("README.md");
    /// assert_eq!(path.to_posix_string().unwrap(), "meta/README.md");
    /// ```
    fn to_posix_string(&self) -> Result<String>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str()
            .ok_or_else(|| Error::InvalidUnicodePath { path: self.display().to_string() })
    }

    fn to_posix_string(&self) -> Result<String> {
        let parts = self
            .components()
            .filter(|component| !matches!(component, Component::CurDir))
            .map(|component| Path::new(component.as_os_str()).to_str_checked())
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join("/"))
    }
}

/// Builds a platform path from a `/`-separated relative path string.
pub fn from_posix_str(posix: &str) -> PathBuf {
    posix.split('/').filter(|part| !part.is_empty()).collect()
}
