//! Block model
//!
//! [`BlockSpec`] is the single record describing one block. Every output path
//! and every derived name is a pure function of the block name and the
//! project slug.

use std::fmt;

use crate::error::{ParkourError, ParkourResult};

/// Dashicon shown for the block in the editor inserter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockIcon {
    /// `admin-customizer`
    #[default]
    AdminCustomizer,
    /// `editor-justify`
    EditorJustify,
    /// `grid-view`
    GridView,
    /// `columns`
    Columns,
    /// `layout`
    Layout,
    /// `admin-post`
    AdminPost,
    /// `media-default`
    MediaDefault,
    /// `format-gallery`
    FormatGallery,
    /// `format-image`
    FormatImage,
    /// `format-video`
    FormatVideo,
}

impl BlockIcon {
    /// Every icon, in the order they are offered.
    pub const ALL: [Self; 10] = [
        Self::AdminCustomizer,
        Self::EditorJustify,
        Self::GridView,
        Self::Columns,
        Self::Layout,
        Self::AdminPost,
        Self::MediaDefault,
        Self::FormatGallery,
        Self::FormatImage,
        Self::FormatVideo,
    ];

    /// Dashicon slug written to `block.json`
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::AdminCustomizer => "admin-customizer",
            Self::EditorJustify => "editor-justify",
            Self::GridView => "grid-view",
            Self::Columns => "columns",
            Self::Layout => "layout",
            Self::AdminPost => "admin-post",
            Self::MediaDefault => "media-default",
            Self::FormatGallery => "format-gallery",
            Self::FormatImage => "format-image",
            Self::FormatVideo => "format-video",
        }
    }

    /// Human label used in the icon picker
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AdminCustomizer => "Customizer (default)",
            Self::EditorJustify => "Justify",
            Self::GridView => "Grid",
            Self::Columns => "Columns",
            Self::Layout => "Layout",
            Self::AdminPost => "Post",
            Self::MediaDefault => "Media",
            Self::FormatGallery => "Gallery",
            Self::FormatImage => "Image",
            Self::FormatVideo => "Video",
        }
    }

    /// Position of this icon in [`BlockIcon::ALL`]
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|icon| *icon == self).unwrap_or(0)
    }
}

impl fmt::Display for BlockIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Everything needed to generate one block's files.
///
/// Built once per invocation by the collector and consumed by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpec {
    name: String,
    title: String,
    description: String,
    category: String,
    icon: BlockIcon,
    keywords: Vec<String>,
    project_slug: String,
    include_script: bool,
    include_style: bool,
}

impl BlockSpec {
    /// Create a spec with the non-interactive defaults.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` is not a valid block name or the
    /// derived render function name is not a valid identifier.
    pub fn new(name: &str, project_slug: &str) -> ParkourResult<Self> {
        validate_block_name(name)?;
        if name.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(ParkourError::validation(
                "Block name must be lowercase letters, numbers, and hyphens only",
            ));
        }
        validate_function_name(&function_name(project_slug, name))?;

        Ok(Self {
            name: name.to_string(),
            title: name_to_title(name),
            description: String::new(),
            category: project_slug.to_string(),
            icon: BlockIcon::default(),
            keywords: Vec::new(),
            project_slug: project_slug.to_string(),
            include_script: false,
            include_style: false,
        })
    }

    /// Replace the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Replace the icon.
    #[must_use]
    pub const fn with_icon(mut self, icon: BlockIcon) -> Self {
        self.icon = icon;
        self
    }

    /// Replace the keyword set.
    #[must_use]
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Toggle the optional script and style files.
    #[must_use]
    pub const fn with_assets(mut self, include_script: bool, include_style: bool) -> Self {
        self.include_script = include_script;
        self.include_style = include_style;
        self
    }

    /// Block slug
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description (may be empty)
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Inserter category
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Inserter icon
    #[must_use]
    pub const fn icon(&self) -> BlockIcon {
        self.icon
    }

    /// Search keywords
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Owning project (theme) slug
    #[must_use]
    pub fn project_slug(&self) -> &str {
        &self.project_slug
    }

    /// Whether a script file is generated
    #[must_use]
    pub const fn include_script(&self) -> bool {
        self.include_script
    }

    /// Whether a stylesheet is generated
    #[must_use]
    pub const fn include_style(&self) -> bool {
        self.include_style
    }

    /// Always enabled.
    #[must_use]
    pub const fn supports_anchor(&self) -> bool {
        true
    }

    /// Always enabled.
    #[must_use]
    pub const fn supports_class_name(&self) -> bool {
        true
    }

    /// Name of the render callback function
    #[must_use]
    pub fn function_name(&self) -> String {
        function_name(&self.project_slug, &self.name)
    }

    /// Block name with hyphens replaced by underscores
    #[must_use]
    pub fn class_prefix(&self) -> String {
        self.name.replace('-', "_")
    }
}

/// Check a block name as typed or supplied.
///
/// # Errors
///
/// Returns a validation error naming the violated rule.
pub fn validate_block_name(name: &str) -> ParkourResult<()> {
    if name.is_empty() {
        return Err(ParkourError::validation("Block name is required"));
    }

    let lowered = name.to_lowercase();
    if !lowered
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ParkourError::validation(
            "Block name must be lowercase letters, numbers, and hyphens only",
        ));
    }

    Ok(())
}

/// Lowercase, trim, and replace anything outside `[a-z0-9-]` with a hyphen.
#[must_use]
pub fn normalize_block_name(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// `hero-section` -> `Hero Section`
#[must_use]
pub fn name_to_title(name: &str) -> String {
    name.replace('-', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `{project_slug}_{name with underscores}_block`
#[must_use]
pub fn function_name(project_slug: &str, name: &str) -> String {
    format!("{project_slug}_{}_block", name.replace('-', "_"))
}

/// Split comma-separated keyword input into trimmed, unique, non-empty tokens.
#[must_use]
pub fn parse_keywords(input: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !keywords.iter().any(|k| k == token) {
            keywords.push(token.to_string());
        }
    }
    keywords
}

fn validate_function_name(candidate: &str) -> ParkourResult<()> {
    let mut chars = candidate.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(ParkourError::validation(format!(
            "Render callback name '{candidate}' is not a valid function name; \
             pass --theme with a slug made of letters, numbers, and underscores"
        )))
    }
}
