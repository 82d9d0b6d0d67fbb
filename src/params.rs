//! Process-wide parameters of a renaming run.
//!
//! A [`Params`] value is built once from the template directory. The binary
//! stores it with [`init`] and everything downstream receives `&Params`;
//! [`get`] exists for code that has no other way to reach it.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::info;

use crate::config::RenameConfig;
use crate::constants::paths::{DATA_DIR, SRC_DIR};
use crate::error::{Error, Result};

static PARAMS: OnceLock<Params> = OnceLock::new();

/// Well-known folders of the templated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root_fol: PathBuf,
    pub src_fol: PathBuf,
    pub data_fol: PathBuf,
}

impl ProjectPaths {
    pub fn new<P: AsRef<Path>>(root_fol: P, package_name: &str) -> Self {
        let root_fol = root_fol.as_ref().to_path_buf();
        Self {
            src_fol: root_fol.join(SRC_DIR).join(package_name),
            data_fol: root_fol.join(DATA_DIR),
            root_fol,
        }
    }
}

impl Display for ProjectPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ProjectPaths:")?;
        writeln!(f, "  root_fol: {}", self.root_fol.display())?;
        writeln!(f, "  src_fol: {}", self.src_fol.display())?;
        write!(f, "  data_fol: {}", self.data_fol.display())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub paths: ProjectPaths,
    pub config: RenameConfig,
}

impl Params {
    pub fn new(paths: ProjectPaths, config: RenameConfig) -> Self {
        Self { paths, config }
    }

    /// Resolves `template_dir` and reads its rename configuration.
    pub fn load<P: AsRef<Path>>(template_dir: P) -> Result<Self> {
        let template_dir = template_dir.as_ref();
        let root_fol = template_dir.canonicalize().map_err(|_| {
            Error::TemplateDoesNotExistsError {
                template_dir: template_dir.display().to_string(),
            }
        })?;
        if !root_fol.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: template_dir.display().to_string(),
            });
        }

        let config = RenameConfig::load_config(&root_fol)?;
        let paths = ProjectPaths::new(&root_fol, &config.template_name);
        info!("Loaded params for template {}", root_fol.display());
        Ok(Self::new(paths, config))
    }
}

impl Display for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Params:")?;
        write!(f, "{}", self.paths)
    }
}

/// Stores the process-wide parameters. Fails if called twice.
pub fn init(params: Params) -> Result<&'static Params> {
    PARAMS.set(params).map_err(|_| Error::ParamsAlreadyInitialized)?;
    get()
}

/// Returns the parameters stored by [`init`].
pub fn get() -> Result<&'static Params> {
    PARAMS.get().ok_or(Error::ParamsNotInitialized)
}
