//! Block file generator
//!
//! Derives the output layout from the block name and writes every file:
//!
//! ```text
//! blocks/{name}/block.json
//! blocks/{name}/callback.php
//! views/blocks/{name}.twig
//! blocks/{name}/{name}.js    (optional)
//! blocks/{name}/{name}.css   (optional)
//! ```
//!
//! Existing files are overwritten. A failure part-way leaves earlier files
//! in place.

use std::fs;
use std::path::{Path, PathBuf};

use crate::block::BlockSpec;
use crate::error::{ParkourError, ParkourResult};
use crate::templates::{BlockTemplates, TemplateKind};

/// Directory (relative to the project root) holding block sources
pub const BLOCKS_DIR: &str = "blocks";

/// Directory (relative to the project root) holding block views
pub const VIEWS_DIR: &str = "views/blocks";

/// Render callback extension
pub const CALLBACK_EXT: &str = "php";

/// View extension
pub const VIEW_EXT: &str = "twig";

/// Script extension
pub const SCRIPT_EXT: &str = "js";

/// Stylesheet extension
pub const STYLE_EXT: &str = "css";

/// A file the generator will write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Which template produces it
    pub kind: TemplateKind,
    /// Relative path from project root
    pub path: PathBuf,
}

/// Represents a generated file
#[derive(Debug)]
pub struct GeneratedFile {
    /// Which template produced it
    pub kind: TemplateKind,
    /// Relative path from project root
    pub path: PathBuf,
    /// Whether an existing file was replaced
    pub overwritten: bool,
}

/// The planned output paths for `spec`, in write order.
#[must_use]
pub fn plan(spec: &BlockSpec) -> Vec<PlannedFile> {
    let name = spec.name();
    let block_dir = block_dir(name);

    let mut files = vec![
        PlannedFile {
            kind: TemplateKind::BlockJson,
            path: block_dir.join("block.json"),
        },
        PlannedFile {
            kind: TemplateKind::Callback,
            path: block_dir.join(format!("callback.{CALLBACK_EXT}")),
        },
        PlannedFile {
            kind: TemplateKind::View,
            path: Path::new(VIEWS_DIR).join(format!("{name}.{VIEW_EXT}")),
        },
    ];

    if spec.include_script() {
        files.push(PlannedFile {
            kind: TemplateKind::Script,
            path: block_dir.join(format!("{name}.{SCRIPT_EXT}")),
        });
    }

    if spec.include_style() {
        files.push(PlannedFile {
            kind: TemplateKind::Style,
            path: block_dir.join(format!("{name}.{STYLE_EXT}")),
        });
    }

    files
}

fn block_dir(name: &str) -> PathBuf {
    Path::new(BLOCKS_DIR).join(name)
}

/// Writes a block's files under a project root
pub struct BlockGenerator {
    /// Project (theme) root directory
    project_root: PathBuf,
    /// Compiled templates
    templates: BlockTemplates,
}

impl BlockGenerator {
    /// Create a generator writing under `project_root`.
    pub fn new(project_root: impl Into<PathBuf>, templates: BlockTemplates) -> Self {
        Self {
            project_root: project_root.into(),
            templates,
        }
    }

    /// Project root this generator writes under
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Generate all files for `spec`.
    ///
    /// Creates `blocks/{name}/` and `views/blocks/` first, then renders and
    /// writes each planned file in order.
    ///
    /// # Errors
    ///
    /// Returns an error naming the failed step if a directory cannot be
    /// created, a template fails to render, or a file cannot be written.
    pub fn generate(&self, spec: &BlockSpec) -> ParkourResult<Vec<GeneratedFile>> {
        tracing::info!(
            block = %spec.name(),
            root = %self.project_root.display(),
            "generating block"
        );

        self.create_dir(&block_dir(spec.name()))?;
        self.create_dir(Path::new(VIEWS_DIR))?;

        plan(spec)
            .into_iter()
            .map(|planned| self.write_file(spec, planned))
            .collect()
    }

    fn create_dir(&self, relative: &Path) -> ParkourResult<()> {
        let path = self.project_root.join(relative);
        fs::create_dir_all(&path).map_err(|source| ParkourError::Generation {
            step: "create directory",
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "directory ready");
        Ok(())
    }

    fn write_file(&self, spec: &BlockSpec, planned: PlannedFile) -> ParkourResult<GeneratedFile> {
        let content = self.templates.render_kind(planned.kind, spec)?;
        let full_path = self.project_root.join(&planned.path);
        let overwritten = full_path.exists();

        fs::write(&full_path, content).map_err(|source| ParkourError::Generation {
            step: "write",
            path: full_path.clone(),
            source,
        })?;

        if overwritten {
            tracing::debug!(path = %full_path.display(), "overwrote existing file");
        } else {
            tracing::debug!(path = %full_path.display(), "wrote file");
        }

        Ok(GeneratedFile {
            kind: planned.kind,
            path: planned.path,
            overwritten,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn generator(root: &Path) -> BlockGenerator {
        BlockGenerator::new(root, BlockTemplates::bundled().unwrap())
    }

    fn paths(files: &[PlannedFile]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_plan_required_files_only() {
        let spec = BlockSpec::new("hero-section", "herdpress").unwrap();
        assert_eq!(
            paths(&plan(&spec)),
            [
                "blocks/hero-section/block.json",
                "blocks/hero-section/callback.php",
                "views/blocks/hero-section.twig",
            ]
        );
    }

    #[test]
    fn test_plan_script_without_style() {
        let spec = BlockSpec::new("hero-section", "herdpress")
            .unwrap()
            .with_assets(true, false);
        assert_eq!(
            paths(&plan(&spec)),
            [
                "blocks/hero-section/block.json",
                "blocks/hero-section/callback.php",
                "views/blocks/hero-section.twig",
                "blocks/hero-section/hero-section.js",
            ]
        );
    }

    #[test]
    fn test_plan_with_style() {
        let spec = BlockSpec::new("faq", "herdpress")
            .unwrap()
            .with_assets(false, true);
        let planned = plan(&spec);
        assert_eq!(planned.last().unwrap().kind, TemplateKind::Style);
        assert!(paths(&planned).contains(&"blocks/faq/faq.css".to_string()));
        assert!(!planned.iter().any(|f| f.kind == TemplateKind::Script));
    }

    #[test]
    fn test_generate_writes_files() {
        let temp_dir = tempdir().unwrap();
        let spec = BlockSpec::new("hero-section", "herdpress")
            .unwrap()
            .with_assets(true, true);

        let files = generator(temp_dir.path()).generate(&spec).unwrap();
        assert_eq!(files.len(), 5);
        assert!(files.iter().all(|f| !f.overwritten));

        for file in &files {
            assert!(temp_dir.path().join(&file.path).is_file(), "{}", file.path.display());
        }

        let callback =
            fs::read_to_string(temp_dir.path().join("blocks/hero-section/callback.php")).unwrap();
        assert!(callback.contains("herdpress_hero_section_block"));
        assert!(callback.contains("wp_enqueue_script"));
        assert!(callback.contains("wp_enqueue_style"));
    }

    #[test]
    fn test_generate_twice_overwrites() {
        let temp_dir = tempdir().unwrap();
        let spec = BlockSpec::new("hero-section", "herdpress").unwrap();
        let json_path = temp_dir.path().join("blocks/hero-section/block.json");

        generator(temp_dir.path()).generate(&spec).unwrap();
        fs::write(&json_path, "hand edited").unwrap();

        let files = generator(temp_dir.path()).generate(&spec).unwrap();
        assert!(files.iter().all(|f| f.overwritten));
        assert_ne!(fs::read_to_string(&json_path).unwrap(), "hand edited");
    }

    #[test]
    fn test_generate_into_existing_directories() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("views/blocks")).unwrap();
        fs::write(temp_dir.path().join("views/blocks/other.twig"), "keep").unwrap();

        let spec = BlockSpec::new("hero", "herdpress").unwrap();
        generator(temp_dir.path()).generate(&spec).unwrap();

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("views/blocks/other.twig")).unwrap(),
            "keep"
        );
    }

    #[test]
    fn test_generate_reports_failed_step() {
        let temp_dir = tempdir().unwrap();
        // A plain file named "views" makes the views directory impossible to create
        fs::write(temp_dir.path().join("views"), "not a directory").unwrap();

        let spec = BlockSpec::new("hero", "herdpress").unwrap();
        let err = generator(temp_dir.path()).generate(&spec).unwrap_err();

        match err {
            ParkourError::Generation { step, path, .. } => {
                assert_eq!(step, "create directory");
                assert!(path.ends_with("views/blocks"));
            }
            other => panic!("unexpected error: {other}"),
        }

        // The block directory was created before the failure and is left behind
        assert!(temp_dir.path().join("blocks/hero").is_dir());
    }

    #[test]
    fn test_write_failure_keeps_earlier_files() {
        let temp_dir = tempdir().unwrap();
        // A directory where callback.php should go makes that write fail
        fs::create_dir_all(temp_dir.path().join("blocks/hero/callback.php")).unwrap();

        let spec = BlockSpec::new("hero", "herdpress").unwrap();
        let err = generator(temp_dir.path()).generate(&spec).unwrap_err();

        assert!(matches!(err, ParkourError::Generation { step: "write", .. }));
        assert!(temp_dir.path().join("blocks/hero/block.json").is_file());
        assert!(!temp_dir.path().join("views/blocks/hero.twig").exists());
    }
}
