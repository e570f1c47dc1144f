//! Block template rendering
//!
//! One typed render function per output file kind. Each builds a context
//! holding exactly the fields its template uses, so a misspelled key is a
//! compile error here and a strict-mode render error in an override.

use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::block::BlockSpec;
use crate::error::{ParkourError, ParkourResult};

pub mod files;
pub use files::*;

/// The five kinds of generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Block metadata descriptor
    BlockJson,
    /// Server-side render callback
    Callback,
    /// Twig view
    View,
    /// Optional front-end script
    Script,
    /// Optional stylesheet
    Style,
}

impl TemplateKind {
    /// Every kind, in generation order.
    pub const ALL: [Self; 5] = [
        Self::BlockJson,
        Self::Callback,
        Self::View,
        Self::Script,
        Self::Style,
    ];

    /// Template name used for registration and error reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BlockJson => "block.json",
            Self::Callback => "callback",
            Self::View => "view",
            Self::Script => "script",
            Self::Style => "style",
        }
    }

    /// File name looked up in a template override directory
    #[must_use]
    pub const fn override_file(self) -> &'static str {
        match self {
            Self::BlockJson => "block.json.hbs",
            Self::Callback => "callback.hbs",
            Self::View => "view.hbs",
            Self::Script => "script.hbs",
            Self::Style => "style.hbs",
        }
    }

    /// Template compiled into the binary
    #[must_use]
    pub const fn bundled(self) -> &'static str {
        match self {
            Self::BlockJson => BLOCK_JSON,
            Self::Callback => CALLBACK_PHP,
            Self::View => VIEW_TWIG,
            Self::Script => SCRIPT_JS,
            Self::Style => STYLE_CSS,
        }
    }
}

handlebars_helper!(json: |value: Json| serde_json::to_string(value).unwrap_or_default());

#[derive(Serialize)]
struct BlockJsonContext<'a> {
    name: &'a str,
    title: &'a str,
    description: &'a str,
    category: &'a str,
    icon: &'static str,
    keywords: String,
    theme_slug: &'a str,
    function_name: String,
    supports_anchor: bool,
    supports_classname: bool,
}

#[derive(Serialize)]
struct CallbackContext<'a> {
    name: &'a str,
    title: &'a str,
    theme_slug: &'a str,
    function_name: String,
    class_prefix: String,
    include_js: bool,
    include_css: bool,
}

#[derive(Serialize)]
struct ViewContext<'a> {
    name: &'a str,
    title: &'a str,
    theme_slug: &'a str,
}

#[derive(Serialize)]
struct ScriptContext<'a> {
    name: &'a str,
    title: &'a str,
}

#[derive(Serialize)]
struct StyleContext<'a> {
    name: &'a str,
    title: &'a str,
    theme_slug: &'a str,
}

/// Compiled block templates
pub struct BlockTemplates {
    handlebars: Handlebars<'static>,
}

impl BlockTemplates {
    /// Compile the bundled templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a bundled template fails to compile.
    pub fn bundled() -> ParkourResult<Self> {
        Self::load(None)
    }

    /// Compile templates, preferring files in `override_dir` when present.
    ///
    /// # Errors
    ///
    /// Returns an error if an override file cannot be read or any template
    /// fails to compile.
    pub fn load(override_dir: Option<&Path>) -> ParkourResult<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);
        handlebars.register_helper("json", Box::new(json));

        for kind in TemplateKind::ALL {
            let source = match override_dir.map(|dir| dir.join(kind.override_file())) {
                Some(path) if path.is_file() => {
                    tracing::debug!(template = kind.name(), path = %path.display(), "using template override");
                    fs::read_to_string(&path).map_err(|e| ParkourError::Template {
                        template: kind.name(),
                        reason: format!("{}: {e}", path.display()),
                    })?
                }
                _ => kind.bundled().to_string(),
            };

            handlebars
                .register_template_string(kind.name(), source)
                .map_err(|e| ParkourError::Template {
                    template: kind.name(),
                    reason: e.to_string(),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Render `block.json`.
    ///
    /// Keywords become a JSON array literal, or nothing when there are none.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_block_json(&self, spec: &BlockSpec) -> ParkourResult<String> {
        let keywords = if spec.keywords().is_empty() {
            String::new()
        } else {
            serde_json::to_string(spec.keywords()).unwrap_or_default()
        };

        self.render(
            TemplateKind::BlockJson,
            &BlockJsonContext {
                name: spec.name(),
                title: spec.title(),
                description: spec.description(),
                category: spec.category(),
                icon: spec.icon().slug(),
                keywords,
                theme_slug: spec.project_slug(),
                function_name: spec.function_name(),
                supports_anchor: spec.supports_anchor(),
                supports_classname: spec.supports_class_name(),
            },
        )
    }

    /// Render the PHP render callback.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_callback(&self, spec: &BlockSpec) -> ParkourResult<String> {
        self.render(
            TemplateKind::Callback,
            &CallbackContext {
                name: spec.name(),
                title: spec.title(),
                theme_slug: spec.project_slug(),
                function_name: spec.function_name(),
                class_prefix: spec.class_prefix(),
                include_js: spec.include_script(),
                include_css: spec.include_style(),
            },
        )
    }

    /// Render the Twig view.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_view(&self, spec: &BlockSpec) -> ParkourResult<String> {
        self.render(
            TemplateKind::View,
            &ViewContext {
                name: spec.name(),
                title: spec.title(),
                theme_slug: spec.project_slug(),
            },
        )
    }

    /// Render the block script.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_script(&self, spec: &BlockSpec) -> ParkourResult<String> {
        self.render(
            TemplateKind::Script,
            &ScriptContext {
                name: spec.name(),
                title: spec.title(),
            },
        )
    }

    /// Render the block stylesheet.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_style(&self, spec: &BlockSpec) -> ParkourResult<String> {
        self.render(
            TemplateKind::Style,
            &StyleContext {
                name: spec.name(),
                title: spec.title(),
                theme_slug: spec.project_slug(),
            },
        )
    }

    /// Dispatch to the typed render function for `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_kind(&self, kind: TemplateKind, spec: &BlockSpec) -> ParkourResult<String> {
        match kind {
            TemplateKind::BlockJson => self.render_block_json(spec),
            TemplateKind::Callback => self.render_callback(spec),
            TemplateKind::View => self.render_view(spec),
            TemplateKind::Script => self.render_script(spec),
            TemplateKind::Style => self.render_style(spec),
        }
    }

    fn render<T: Serialize>(&self, kind: TemplateKind, context: &T) -> ParkourResult<String> {
        self.handlebars
            .render(kind.name(), context)
            .map_err(|e| ParkourError::Render {
                template: kind.name(),
                source: Box::new(e),
            })
    }
}
