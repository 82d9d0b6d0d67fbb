use std::path::PathBuf;

/// What the copy pass does with one source file.
#[derive(Debug, PartialEq, Eq)]
pub enum RenameOperation {
    /// Listed in the skip files, not copied.
    Skip { source: PathBuf },
    /// Listed in the rename table, copied to its literal destination.
    Rename { source: PathBuf, target: PathBuf },
    /// Copied to the destination computed by name substitution.
    Copy { source: PathBuf, target: PathBuf },
}

impl RenameOperation {
    /// Returns the destination path, or None for skipped files.
    pub fn target_path(&self) -> Option<&PathBuf> {
        match self {
            RenameOperation::Skip { .. } => None,
            RenameOperation::Rename { target, .. } | RenameOperation::Copy { target, .. } => {
                Some(target)
            }
        }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            RenameOperation::Skip { source } => {
                format!("{}Skipping '{}' (listed in skip files)", prefix, source.display())
            }
            RenameOperation::Rename { source, target } => format!(
                "{}Copying '{}' to '{}' (rename table)",
                prefix,
                source.display(),
                target.display()
            ),
            RenameOperation::Copy { source, target } => format!(
                "{}Copying '{}' to '{}'",
                prefix,
                source.display(),
                target.display()
            ),
        }
    }
}
