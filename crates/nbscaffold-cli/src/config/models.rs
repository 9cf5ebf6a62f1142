use nbscaffold::engine::config::ScaffoldConfig;

pub struct AppConfig {
    /// Table of contents references, in the order they will be scaffolded.
    pub volumes: Vec<String>,
    pub used_fallback_root: bool,
    pub core_config: ScaffoldConfig,
}
