//! Constants used throughout the template-rename application

/// Rename configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["rename.yaml", "rename.yml", "rename.json"];

/// Name the template uses for itself, in snake_case
pub const DEFAULT_TEMPLATE_NAME: &str = "project_name";

/// Repository name the template uses for itself
pub const DEFAULT_TEMPLATE_REPO: &str = "python-project-template";

/// Directories never descended into while copying
pub const DEFAULT_SKIP_DIRS: &[&str] =
    &["__pycache__", ".pytest_cache", ".ruff_cache", ".git", ".venv"];

/// Root-relative files never copied
pub const DEFAULT_SKIP_FILES: &[&str] =
    &["README.md", "poetry.lock", "uv.lock", "meta/rename_project.py", "pyproject.toml"];

/// Root-relative files copied to a fixed destination instead of a substituted one
pub const DEFAULT_RENAME_TABLE: &[(&str, &str)] = &[
    ("final_resources/README.md", "README.md"),
    ("final_resources/pyproject.toml", "pyproject.toml"),
    ("meta/README.md", "README_POST_CREATE.md"),
];

/// Credentials layout: `<base>/cred/<repo_name>/.env`
pub mod credentials {
    pub const CRED_DIR: &str = "cred";
    pub const ENV_FILE: &str = ".env";
    pub const SAMPLE_VAR_SUFFIX: &str = "_SAMPLE_ENV_VAR";
    pub const SAMPLE_VALUE: &str = "sample";
}

/// Folders of the templated project exposed through `ProjectPaths`
pub mod paths {
    pub const SRC_DIR: &str = "src";
    pub const DATA_DIR: &str = "data";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
