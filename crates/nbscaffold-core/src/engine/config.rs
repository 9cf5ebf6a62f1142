use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Optional extras beyond the chapter tree itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Write an empty `.gitkeep` into every chapter directory.
    pub gitkeep: bool,
    /// Write generic template notebooks into `<volume>/templates/`.
    pub volume_templates: bool,
    /// Add an examples-and-code notebook to every chapter.
    pub chapter_examples: bool,
    /// Write the root-level `learning-tools/` tree.
    pub learning_tools: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Every path the scaffolder touches is resolved against this root.
    pub root: PathBuf,
    pub layout: LayoutOptions,
}

#[derive(Default)]
pub struct ScaffoldConfigBuilder {
    root: Option<PathBuf>,
    gitkeep: Option<bool>,
    volume_templates: Option<bool>,
    chapter_examples: Option<bool>,
    learning_tools: Option<bool>,
}

impl ScaffoldConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }
    pub fn gitkeep(mut self, enabled: bool) -> Self {
        self.gitkeep = Some(enabled);
        self
    }
    pub fn volume_templates(mut self, enabled: bool) -> Self {
        self.volume_templates = Some(enabled);
        self
    }
    pub fn chapter_examples(mut self, enabled: bool) -> Self {
        self.chapter_examples = Some(enabled);
        self
    }
    pub fn learning_tools(mut self, enabled: bool) -> Self {
        self.learning_tools = Some(enabled);
        self
    }

    pub fn build(self) -> Result<ScaffoldConfig, ConfigError> {
        Ok(ScaffoldConfig {
            root: self.root.ok_or(ConfigError::MissingParameter("root"))?,
            layout: LayoutOptions {
                gitkeep: self.gitkeep.unwrap_or(false),
                volume_templates: self.volume_templates.unwrap_or(false),
                chapter_examples: self.chapter_examples.unwrap_or(false),
                learning_tools: self.learning_tools.unwrap_or(false),
            },
        })
    }
}
