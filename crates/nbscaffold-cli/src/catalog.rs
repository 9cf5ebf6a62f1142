use crate::error::{CliError, Result};
use crate::utils::parser::{self, TocReference};
use nbscaffold::core::io::toc;
use nbscaffold::core::models::toc::Volume;
use nbscaffold::engine::error::ScaffoldError;
use phf::{Map, phf_map};
use tracing::debug;

static BUILTIN_TOCS: Map<&'static str, &'static str> = phf_map! {
    "feynman-vol1" => include_str!("../data/feynman-vol1.toml"),
    "feynman-vol3" => include_str!("../data/feynman-vol3.toml"),
};

/// Built-in table of contents names, sorted.
pub fn builtin_names() -> Vec<&'static str> {
    let mut names: Vec<_> = BUILTIN_TOCS.keys().copied().collect();
    names.sort_unstable();
    names
}

pub fn load_builtin(name: &str) -> Result<Volume> {
    let content = BUILTIN_TOCS.get(name).ok_or_else(|| {
        CliError::Catalog(format!(
            "Unknown table of contents '{}'. Available: {}.",
            name,
            builtin_names().join(", ")
        ))
    })?;
    toc::parse_volume(content, name)
        .map_err(|e| CliError::Catalog(format!("Built-in table '{}' is malformed: {}", name, e)))
}

/// Loads a volume from a built-in name or a TOML file path.
pub fn resolve(name_or_path: &str) -> Result<Volume> {
    match parser::parse_toc_reference(name_or_path)
        .map_err(|e| CliError::Argument(e.to_string()))?
    {
        TocReference::Builtin(name) => {
            debug!("Resolving '{}' from the built-in catalog.", name);
            load_builtin(name)
        }
        TocReference::File(path) => {
            debug!("Resolving '{}' as a file path.", name_or_path);
            toc::load_volume(path).map_err(|e| CliError::ScaffoldCore(ScaffoldError::from(e)))
        }
    }
}

pub fn resolve_all(names_or_paths: &[String]) -> Result<Vec<Volume>> {
    names_or_paths.iter().map(|n| resolve(n)).collect()
}
