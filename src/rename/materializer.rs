use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::RenameRules;
use crate::error::{Error, Result};
use crate::ext::{from_posix_str, PathExt};
use crate::ioutils::{copy_file, get_output_dir, read_text, write_file};

use super::name_map::{NameMap, Substituter};
use super::operation::RenameOperation;
use super::walker::TreeWalker;

/// Source template root and the destination it is materialized into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Roots {
    /// Places the destination next to `source`, named `repo_name`.
    pub fn sibling<P: AsRef<Path>>(source: P, repo_name: &str) -> Result<Self> {
        let source = source.as_ref();
        let parent = source.parent().ok_or_else(|| {
            Error::ValidationError(format!(
                "template root '{}' has no parent directory",
                source.display()
            ))
        })?;
        Ok(Self { source: source.to_path_buf(), destination: parent.join(repo_name) })
    }
}

/// Produces the renamed copy of a template tree.
///
/// The copy pass walks the source in [`TreeWalker`] order and decides a
/// [`RenameOperation`] per file. The update pass then rewrites the contents of
/// every file under the destination.
pub struct Materializer<'a> {
    roots: &'a Roots,
    substituter: &'a Substituter,
    rules: &'a RenameRules,
    dry_run: bool,
}

impl<'a> Materializer<'a> {
    pub fn new(
        roots: &'a Roots,
        substituter: &'a Substituter,
        rules: &'a RenameRules,
        dry_run: bool,
    ) -> Self {
        Self { roots, substituter, rules, dry_run }
    }

    /// Fails if the destination root exists already.
    pub fn check_destination(&self) -> Result<()> {
        get_output_dir(&self.roots.destination).map(|_| ())
    }

    /// Decides what happens to one source file.
    pub fn plan(&self, source: &Path) -> Result<RenameOperation> {
        let relative = source.strip_prefix(&self.roots.source).map_err(|_| {
            Error::ValidationError(format!(
                "'{}' is outside of '{}'",
                source.display(),
                self.roots.source.display()
            ))
        })?;
        let relative = relative.to_posix_string()?;

        if self.rules.is_skipped(&relative) {
            return Ok(RenameOperation::Skip { source: source.to_path_buf() });
        }

        if let Some(renamed) = self.rules.renamed(&relative) {
            return Ok(RenameOperation::Rename {
                source: source.to_path_buf(),
                target: self.roots.destination.join(from_posix_str(renamed)),
            });
        }

        let substituted = self.substituter.replace(&relative);
        Ok(RenameOperation::Copy {
            source: source.to_path_buf(),
            target: self.roots.destination.join(from_posix_str(&substituted)),
        })
    }

    /// Copies every non-skipped source file to its destination.
    pub fn copy_files(&self) -> Result<()> {
        info!("Copying files...");
        let walker = TreeWalker::new(&self.roots.source, &self.rules.skip_dirs);
        for source in walker.walk() {
            let source = source?;
            let operation = self.plan(&source)?;
            if let Some(target) = operation.target_path() {
                if !self.dry_run {
                    copy_file(&source, target)?;
                }
            }
            info!("{}", operation.get_message(self.dry_run));
        }
        Ok(())
    }

    /// Substitutes names in the contents of every destination file.
    pub fn update_files(&self) -> Result<()> {
        info!("Updating files...");
        if self.dry_run {
            return Ok(());
        }
        let walker = TreeWalker::new(&self.roots.destination, &[]);
        for target in walker.walk() {
            let target = target?;
            let contents = read_text(&target)?;
            write_file(&self.substituter.replace(&contents), &target)?;
            debug!("Updated {}", target.display());
        }
        Ok(())
    }

    /// Checks the destination, then runs the copy and update passes.
    pub fn materialize(&self) -> Result<()> {
        self.check_destination()?;
        self.copy_files()?;
        self.update_files()
    }
}

/// Materializes `roots.source` into `roots.destination` with `name_map`.
pub fn materialize(roots: &Roots, name_map: &NameMap, rules: &RenameRules) -> Result<()> {
    let substituter = Substituter::new(name_map)?;
    Materializer::new(roots, &substituter, rules, false).materialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rename::build_name_map;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        _tmp: TempDir,
        roots: Roots,
    }

    fn fixture(files: &[(&str, &str)]) -> Fixture {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("python-project-template");
        for (relative, content) in files {
            let path = source.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        let roots = Roots::sibling(&source, "my-app").unwrap();
        Fixture { _tmp: tmp, roots }
    }

    fn run(roots: &Roots, rules: &RenameRules) -> Result<()> {
        let (name_map, _) = build_name_map("my_app", None);
        materialize(roots, &name_map, rules)
    }

    #[test]
    fn sibling_destination() {
        let roots = Roots::sibling("/work/python-project-template", "my-app").unwrap();
        assert_eq!(roots.destination, PathBuf::from("/work/my-app"));
    }

    #[test]
    fn single_token_round_trip() {
        let fx = fixture(&[("token.txt", "ProjectName")]);
        run(&fx.roots, &RenameRules::default()).unwrap();
        assert_eq!(
            fs::read_to_string(fx.roots.destination.join("token.txt")).unwrap(),
            "MyApp"
        );
    }

    #[test]
    fn renames_paths_and_contents() {
        let fx = fixture(&[("src/project_name/x.py", "ProjectName")]);
        run(&fx.roots, &RenameRules::default()).unwrap();

        let target = fx.roots.destination.join("src/my_app/x.py");
        assert_eq!(fs::read_to_string(target).unwrap(), "MyApp");
        assert!(!fx.roots.destination.join("src/project_name").exists());
    }

    #[test]
    fn skipped_files_are_absent() {
        let fx = fixture(&[
            ("README.md", "# python-project-template"),
            ("meta/rename_project.py", "print('project_name')"),
            ("keep.txt", "kept"),
        ]);
        run(&fx.roots, &RenameRules::default()).unwrap();

        assert!(!fx.roots.destination.join("README.md").exists());
        assert!(!fx.roots.destination.join("meta/rename_project.py").exists());
        assert!(!fx.roots.destination.join("meta/rename_my_app.py").exists());
        assert!(fx.roots.destination.join("keep.txt").exists());
    }

    #[test]
    fn rename_table_takes_precedence() {
        let mut rules = RenameRules::default();
        rules.rename_table.insert(
            "project_name/setup.cfg".to_string(),
            "project_name.cfg".to_string(),
        );
        let fx = fixture(&[("project_name/setup.cfg", "name = project-name")]);
        run(&fx.roots, &rules).unwrap();

        // the literal target path is not substituted
        let target = fx.roots.destination.join("project_name.cfg");
        assert_eq!(fs::read_to_string(target).unwrap(), "name = my-app");
        assert!(!fx.roots.destination.join("my_app.cfg").exists());
        assert!(!fx.roots.destination.join("my_app").exists());
    }

    #[test]
    fn skipped_directories_are_not_copied() {
        let fx = fixture(&[
            ("src/__pycache__/x.cpython-312.pyc", "cache"),
            (".git/HEAD", "ref: refs/heads/main"),
            ("src/project_name/__init__.py", ""),
        ]);
        run(&fx.roots, &RenameRules::default()).unwrap();

        assert!(!fx.roots.destination.join(".git").exists());
        assert!(!fx.roots.destination.join("src/__pycache__").exists());
        assert!(fx.roots.destination.join("src/my_app/__init__.py").exists());
    }

    #[test]
    fn existing_destination_aborts_before_copying() {
        let fx = fixture(&[("src/project_name/x.py", "ProjectName")]);
        fs::create_dir_all(&fx.roots.destination).unwrap();

        let result = run(&fx.roots, &RenameRules::default());
        assert!(matches!(result, Err(Error::DestinationExistsError { .. })));
        assert!(!fx.roots.destination.join("src").exists());
        assert_eq!(
            fs::read_to_string(fx.roots.source.join("src/project_name/x.py")).unwrap(),
            "ProjectName"
        );
    }

    #[test]
    fn binary_file_is_a_decode_error() {
        let fx = fixture(&[("logo.txt", "ok")]);
        fs::write(fx.roots.source.join("logo.png"), [0x89, 0x50, 0xff, 0xfe]).unwrap();

        let result = run(&fx.roots, &RenameRules::default());
        assert!(matches!(result, Err(Error::DecodeError { .. })));
        // copied before the update pass failed
        assert!(fx.roots.destination.join("logo.png").exists());
    }

    #[test]
    fn dry_run_touches_nothing() {
        let fx = fixture(&[("src/project_name/x.py", "ProjectName")]);
        let (name_map, _) = build_name_map("my_app", None);
        let substituter = Substituter::new(&name_map).unwrap();
        let rules = RenameRules::default();

        Materializer::new(&fx.roots, &substituter, &rules, true).materialize().unwrap();
        assert!(!fx.roots.destination.exists());
    }

    #[test]
    fn plans_each_kind_of_operation() {
        let fx = fixture(&[]);
        let (name_map, _) = build_name_map("my_app", None);
        let substituter = Substituter::new(&name_map).unwrap();
        let rules = RenameRules::default();
        let materializer = Materializer::new(&fx.roots, &substituter, &rules, true);

        let readme = fx.roots.source.join("README.md");
        assert_eq!(
            materializer.plan(&readme).unwrap(),
            RenameOperation::Skip { source: readme.clone() }
        );

        let meta = fx.roots.source.join("meta").join("README.md");
        assert_eq!(
            materializer.plan(&meta).unwrap(),
            RenameOperation::Rename {
                source: meta.clone(),
                target: fx.roots.destination.join("README_POST_CREATE.md"),
            }
        );

        let test = fx.roots.source.join("tests").join("test_project_name_paths.py");
        assert_eq!(
            materializer.plan(&test).unwrap(),
            RenameOperation::Copy {
                source: test.clone(),
                target: fx.roots.destination.join("tests").join("test_my_app_paths.py"),
            }
        );
    }
}
