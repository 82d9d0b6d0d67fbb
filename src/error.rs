use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read user input. Original error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("Failed to walk the directory tree. Original error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Failed to build the placeholder pattern. Original error: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Failed to parse JSON config file. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML config file. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Cannot proceed: destination directory '{output_dir}' already exists.")]
    DestinationExistsError { output_dir: String },

    #[error("Cannot proceed: credentials file '{cred_path}' already exists.")]
    CredentialsExistError { cred_path: String },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Cannot determine the home directory, pass --cred-dir explicitly.")]
    HomeDirNotFound,

    /// When the user declines the pre-flight confirmation.
    #[error("Aborted by user.")]
    Aborted,

    /// A copied file could not be read as UTF-8 text during content substitution.
    #[error("Cannot substitute names in '{path}': the file is not valid UTF-8 text.")]
    DecodeError { path: String },

    #[error("Path '{path}' contains invalid Unicode characters.")]
    InvalidUnicodePath { path: String },

    #[error("Parameters were already initialized.")]
    ParamsAlreadyInitialized,

    #[error("Parameters are not initialized.")]
    ParamsNotInitialized,
}

/// Convenience type alias for Results with the crate's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(exit_codes::FAILURE);
}
