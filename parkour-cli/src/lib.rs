//! parkour: scaffold ACF blocks for Timber themes
//!
//! Collects a [`BlockSpec`] (interactively or from defaults) and renders the
//! block's `block.json`, render callback, Twig view and optional script and
//! stylesheet into a theme.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod block;
pub mod collector;
pub mod commands;
pub mod config;
pub mod error;
pub mod observability;
pub mod prompt;
pub mod scaffold;
pub mod templates;

pub use block::{BlockIcon, BlockSpec};
pub use collector::{CollectMode, InputCollector};
pub use config::ParkourConfig;
pub use error::{ParkourError, ParkourResult};
pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
pub use scaffold::{BlockGenerator, GeneratedFile, PlannedFile};
pub use templates::{BlockTemplates, TemplateKind};
