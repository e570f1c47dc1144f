//! Block creation command
//!
//! # Example
//!
//! ```bash
//! # Interactive mode (recommended)
//! parkour create
//!
//! # Quick mode with block name
//! parkour create hero-section --skip-prompts
//!
//! # Specify everything
//! parkour create hero-section --theme=herdpress --path ./wp-content/themes/herdpress
//! ```

use anyhow::{Context, Result};
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

use crate::block::BlockSpec;
use crate::collector::{CollectMode, InputCollector};
use crate::config::ParkourConfig;
use crate::error::{ParkourError, ParkourResult};
use crate::prompt::{Prompter, TerminalPrompter};
use crate::scaffold::{BlockGenerator, GeneratedFile};
use crate::templates::BlockTemplates;

static RUNNER: Emoji = Emoji("🏃 ", "");
static SUCCESS: Emoji = Emoji("✅ ", "");
static FOLDER: Emoji = Emoji("📁 ", "");
static PARTY: Emoji = Emoji("🎉 ", "");

/// Create a new block
pub struct CreateCommand {
    name: Option<String>,
    theme: Option<String>,
    skip_prompts: bool,
    path: Option<PathBuf>,
}

/// A collected block ready to be written
pub struct PreparedBlock {
    /// What will be generated
    pub spec: BlockSpec,
    generator: BlockGenerator,
}

impl PreparedBlock {
    /// Project root the files will be written under
    #[must_use]
    pub fn project_root(&self) -> &Path {
        self.generator.project_root()
    }

    /// Write the block's files.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be written.
    pub fn generate(&self) -> ParkourResult<Vec<GeneratedFile>> {
        self.generator.generate(&self.spec)
    }
}

impl CreateCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `name` - Block name (kebab-case); prompted for when missing
    /// * `theme` - Project slug override
    /// * `skip_prompts` - Use defaults instead of asking
    /// * `path` - Project root override
    pub const fn new(
        name: Option<String>,
        theme: Option<String>,
        skip_prompts: bool,
        path: Option<PathBuf>,
    ) -> Self {
        Self {
            name,
            theme,
            skip_prompts,
            path,
        }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The project root does not exist
    /// - The block name is missing or invalid
    /// - Configuration or templates cannot be loaded
    /// - A file cannot be written
    pub fn execute(&self) -> Result<()> {
        println!(
            "{}{}",
            RUNNER,
            style("PARKOUR! Let's create a block...").cyan().bold()
        );
        println!();

        let mut prompter = TerminalPrompter::new();
        let prepared = match self.prepare(&mut prompter) {
            Ok(prepared) => prepared,
            Err(ParkourError::UserAbort) => {
                println!("{}", style("Block creation cancelled.").yellow());
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Writing block files...");

        let result = prepared.generate();
        spinner.finish_and_clear();
        let files = result.context("Failed to create block")?;

        Self::print_success(&prepared.spec, &files);

        Ok(())
    }

    /// Resolve the project, collect the block and load its templates.
    ///
    /// Nothing is written to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the project root does not exist, configuration or
    /// templates cannot be loaded, input is invalid, or the user cancels.
    pub fn prepare<P: Prompter>(&self, prompter: &mut P) -> ParkourResult<PreparedBlock> {
        let global = ParkourConfig::load_global()?;
        let project_root = self.project_root(&global)?;
        let config = ParkourConfig::load_for_project(&project_root)?;
        let project_slug = self.project_slug(&config, &project_root);
        tracing::debug!(
            root = %project_root.display(),
            project = %project_slug,
            "resolved project"
        );

        let templates = BlockTemplates::load(config.templates_dir.as_deref())?;

        let mode = CollectMode::from_skip_prompts(self.skip_prompts);
        let spec = InputCollector::new(prompter, project_slug, mode).collect(self.name.as_deref())?;

        Ok(PreparedBlock {
            spec,
            generator: BlockGenerator::new(project_root, templates),
        })
    }

    /// `--path`, then configured root, then the current directory
    fn project_root(&self, config: &ParkourConfig) -> ParkourResult<PathBuf> {
        let root = match self.path.as_ref().or(config.project_root.as_ref()) {
            Some(path) => path.clone(),
            None => std::env::current_dir().map_err(|_| ParkourError::ProjectNotFound(PathBuf::from(".")))?,
        };

        if !root.is_dir() {
            return Err(ParkourError::ProjectNotFound(root));
        }

        fs::canonicalize(&root).map_err(|_| ParkourError::ProjectNotFound(root))
    }

    /// `--theme`, then configured theme, then the project directory name
    fn project_slug(&self, config: &ParkourConfig, project_root: &Path) -> String {
        self.theme
            .clone()
            .or_else(|| config.theme.clone())
            .unwrap_or_else(|| {
                project_root
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
    }

    /// Print success message with created files
    fn print_success(spec: &BlockSpec, files: &[GeneratedFile]) {
        println!();
        println!("{}{}", SUCCESS, style("Block created successfully!").green().bold());
        println!();
        println!("{}{}", FOLDER, style("Files created:").bold());
        for file in files {
            let path = file.path.to_string_lossy().replace('\\', "/");
            if file.overwritten {
                println!("  - {} {}", style(path).cyan(), style("(overwritten)").dim());
            } else {
                println!("  - {}", style(path).cyan());
            }
        }
        println!();
        println!(
            "{}{}",
            PARTY,
            style(format!("PARKOUR! Block '{}' is ready to use!", spec.title()))
                .green()
                .bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use tempfile::tempdir;

    #[test]
    fn test_missing_project_root() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing");
        let cmd = CreateCommand::new(Some("hero".into()), None, true, Some(missing.clone()));

        let err = cmd.prepare(&mut ScriptedPrompter::default()).err().unwrap();
        assert!(matches!(err, ParkourError::ProjectNotFound(path) if path == missing));
    }

    #[test]
    fn test_theme_flag_wins() {
        let temp_dir = tempdir().unwrap();
        let cmd = CreateCommand::new(
            Some("hero".into()),
            Some("flockpress".into()),
            true,
            Some(temp_dir.path().to_path_buf()),
        );

        let prepared = cmd.prepare(&mut ScriptedPrompter::default()).unwrap();
        assert_eq!(prepared.spec.project_slug(), "flockpress");
        assert_eq!(prepared.spec.category(), "flockpress");
    }

    #[test]
    fn test_slug_defaults_to_directory_name() {
        let temp_dir = tempdir().unwrap();
        let theme_dir = temp_dir.path().join("herdpress");
        fs::create_dir(&theme_dir).unwrap();
        let cmd = CreateCommand::new(Some("hero".into()), None, true, Some(theme_dir));

        let prepared = cmd.prepare(&mut ScriptedPrompter::default()).unwrap();
        assert_eq!(prepared.spec.function_name(), "herdpress_hero_block");
    }
}
