use crate::{
    cli::Args,
    credentials::{check_credentials_absent, credentials_path, get_cred_base_dir, seed_credentials},
    dialoguer::{Confirmer, TerminalConfirmer},
    error::{Error, Result},
    params::Params,
    rename::{build_name_map_for, Materializer, NameMap, NameVariants, Roots, Substituter},
};
use cruet::case::snake::to_snake_case;
use std::path::Path;

/// Main CLI runner that orchestrates the whole renaming workflow
pub struct Runner<'a> {
    args: Args,
    params: &'a Params,
    confirmer: &'a dyn Confirmer,
}

impl<'a> Runner<'a> {
    pub fn new(args: Args, params: &'a Params, confirmer: &'a dyn Confirmer) -> Self {
        Self { args, params, confirmer }
    }

    /// Validates inputs, asks for confirmation, then copies the template,
    /// rewrites its contents and seeds the credentials file.
    pub fn run(self) -> Result<()> {
        self.validate_project_name()?;

        let config = &self.params.config;
        let (name_map, repo_name) = build_name_map_for(
            &config.template_names(),
            &self.args.project_name,
            self.args.repo_name.as_deref(),
        );
        let roots = Roots::sibling(&self.params.paths.root_fol, &repo_name)?;
        let cred_base = get_cred_base_dir(self.args.cred_dir.as_deref())?;

        self.print_plan(&name_map, &roots, &credentials_path(&cred_base, &repo_name));

        let substituter = Substituter::new(&name_map)?;
        let materializer =
            Materializer::new(&roots, &substituter, &config.rules, self.args.dry_run);

        // Nothing is written unless both targets are free.
        materializer.check_destination()?;
        check_credentials_absent(&cred_base, &repo_name)?;

        if !self.confirmer.confirm("Is the above information correct?")? {
            println!("Exiting.");
            return Err(Error::Aborted);
        }

        materializer.copy_files()?;
        materializer.update_files()?;
        self.create_credentials(&cred_base, &repo_name)?;

        println!("Done. Project initialized in {}.", roots.destination.display());
        Ok(())
    }

    /// Rejects empty names and warns about names that are not snake_case
    fn validate_project_name(&self) -> Result<()> {
        let project_name = self.args.project_name.as_str();
        if project_name.trim().is_empty() {
            return Err(Error::ValidationError("project name must not be empty".into()));
        }
        if to_snake_case(project_name) != project_name {
            log::warn!(
                "Project name '{project_name}' is not snake_case, derived names may look odd"
            );
        }
        Ok(())
    }

    /// Shows what is about to happen before anything is touched
    fn print_plan(&self, name_map: &NameMap, roots: &Roots, cred_path: &Path) {
        println!("Name map:");
        print!("{name_map}");
        println!("Will init the project in {}", roots.destination.display());
        println!("Will create the credentials file {}", cred_path.display());
    }

    fn create_credentials(&self, cred_base: &Path, repo_name: &str) -> Result<()> {
        let upper_snake = NameVariants::derive(&self.args.project_name).upper_snake;
        if self.args.dry_run {
            log::info!(
                "[DRY RUN] Creating credentials file {}",
                credentials_path(cred_base, repo_name).display()
            );
            return Ok(());
        }
        seed_credentials(cred_base, repo_name, &upper_snake)?;
        Ok(())
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args, params: &Params) -> Result<()> {
    let confirmer = TerminalConfirmer::new(args.yes);
    run_with_confirmer(args, params, &confirmer)
}

/// Runs the workflow, taking the pre-flight answer from `confirmer`
pub fn run_with_confirmer(args: Args, params: &Params, confirmer: &dyn Confirmer) -> Result<()> {
    Runner::new(args, params, confirmer).run()
}
