pub struct DefaultsConfig {
    pub root: String,
    pub fallback_root: String,
    pub volumes: Vec<String>,
    pub gitkeep: bool,
    pub volume_templates: bool,
    pub chapter_examples: bool,
    pub learning_tools: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            root: "/workspaces/The_Feynman_Lectures_on_Physics".to_string(),
            fallback_root: ".".to_string(),
            volumes: vec!["feynman-vol3".to_string()],
            gitkeep: false,
            volume_templates: false,
            chapter_examples: false,
            learning_tools: false,
        }
    }
}
