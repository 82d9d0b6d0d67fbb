use std::path::{Path, PathBuf};

use log::info;

use crate::constants::credentials::{CRED_DIR, ENV_FILE, SAMPLE_VALUE, SAMPLE_VAR_SUFFIX};
use crate::error::{Error, Result};
use crate::ioutils::write_file;

/// Returns `<base_dir>/cred/<repo_name>/.env`.
pub fn credentials_path<P: AsRef<Path>>(base_dir: P, repo_name: &str) -> PathBuf {
    base_dir.as_ref().join(CRED_DIR).join(repo_name).join(ENV_FILE)
}

/// Resolves the credentials base directory, defaulting to the user's home.
pub fn get_cred_base_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir.to_path_buf()),
        None => dirs::home_dir().ok_or(Error::HomeDirNotFound),
    }
}

/// Fails if the credentials file for `repo_name` already exists.
pub fn check_credentials_absent<P: AsRef<Path>>(base_dir: P, repo_name: &str) -> Result<()> {
    let cred_path = credentials_path(base_dir, repo_name);
    if cred_path.exists() {
        return Err(Error::CredentialsExistError {
            cred_path: cred_path.display().to_string(),
        });
    }
    Ok(())
}

/// The single line written to a fresh credentials file.
pub fn sample_credentials(upper_snake_name: &str) -> String {
    format!("{upper_snake_name}{SAMPLE_VAR_SUFFIX}={SAMPLE_VALUE}")
}

/// Writes the sample credentials file, creating parent directories.
///
/// # Returns
/// * `Result<PathBuf>` - The path of the written file
pub fn seed_credentials<P: AsRef<Path>>(
    base_dir: P,
    repo_name: &str,
    upper_snake_name: &str,
) -> Result<PathBuf> {
    let base_dir = base_dir.as_ref();
    check_credentials_absent(base_dir, repo_name)?;

    let cred_path = credentials_path(base_dir, repo_name);
    write_file(&sample_credentials(upper_snake_name), &cred_path)?;
    info!("Created credentials file {}", cred_path.display());
    Ok(cred_path)
}
