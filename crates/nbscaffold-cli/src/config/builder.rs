use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::BuildArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use nbscaffold::engine::config::ScaffoldConfigBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Merges defaults, the optional config file, CLI flags, and `--set` overrides, in that
/// order of increasing precedence.
pub fn build_config(args: &BuildArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let file_config = apply_cli_args(file_config, args);
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let layout_file = file_config.layout.take().unwrap_or_default();
    let gitkeep = layout_file.gitkeep.unwrap_or(defaults.gitkeep);
    let volume_templates = layout_file
        .volume_templates
        .unwrap_or(defaults.volume_templates);
    let chapter_examples = layout_file
        .chapter_examples
        .unwrap_or(defaults.chapter_examples);
    let learning_tools = layout_file
        .learning_tools
        .unwrap_or(defaults.learning_tools);

    let volumes = match file_config.volumes {
        Some(volumes) if volumes.is_empty() => {
            return Err(CliError::Config(
                "`volumes` must name at least one table of contents.".to_string(),
            ));
        }
        Some(volumes) => volumes,
        None => defaults.volumes,
    };

    let primary = file_config
        .root
        .unwrap_or_else(|| PathBuf::from(&defaults.root));
    let fallback = file_config
        .fallback_root
        .unwrap_or_else(|| PathBuf::from(&defaults.fallback_root));
    let (root, used_fallback_root) = resolve_root(&primary, &fallback);
    debug!("Resolved scaffold root: {:?}", root);

    let core_config = ScaffoldConfigBuilder::new()
        .root(root)
        .gitkeep(gitkeep)
        .volume_templates(volume_templates)
        .chapter_examples(chapter_examples)
        .learning_tools(learning_tools)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        volumes,
        used_fallback_root,
        core_config,
    })
}

fn apply_cli_args(mut config: FileConfig, args: &BuildArgs) -> FileConfig {
    if let Some(root) = &args.root {
        config.root = Some(root.clone());
    }
    if !args.volumes.is_empty() {
        config.volumes = Some(args.volumes.clone());
    }
    if args.gitkeep {
        config.layout.get_or_insert_with(Default::default).gitkeep = Some(true);
    }
    if args.volume_templates {
        config
            .layout
            .get_or_insert_with(Default::default)
            .volume_templates = Some(true);
    }
    if args.chapter_examples {
        config
            .layout
            .get_or_insert_with(Default::default)
            .chapter_examples = Some(true);
    }
    if args.learning_tools {
        config
            .layout
            .get_or_insert_with(Default::default)
            .learning_tools = Some(true);
    }
    config
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
        let parse_bool = |key: &str, value: &str| {
            parser::parse_bool(key, value).map_err(|e| CliError::Config(e.to_string()))
        };

        match key {
            "root" => config.root = Some(PathBuf::from(value_str)),
            "fallback-root" => config.fallback_root = Some(PathBuf::from(value_str)),
            "layout.gitkeep" => {
                config.layout.get_or_insert_with(Default::default).gitkeep =
                    Some(parse_bool(key, value_str)?);
            }
            "layout.volume-templates" => {
                config
                    .layout
                    .get_or_insert_with(Default::default)
                    .volume_templates = Some(parse_bool(key, value_str)?);
            }
            "layout.chapter-examples" => {
                config
                    .layout
                    .get_or_insert_with(Default::default)
                    .chapter_examples = Some(parse_bool(key, value_str)?);
            }
            "layout.learning-tools" => {
                config
                    .layout
                    .get_or_insert_with(Default::default)
                    .learning_tools = Some(parse_bool(key, value_str)?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

/// Picks the primary root when it is usable, the fallback otherwise.
///
/// Nothing is written here: the scaffold run creates the root only after the tables of
/// contents have been validated. A missing primary counts as usable when its nearest
/// existing ancestor is a writable directory.
fn resolve_root(primary: &Path, fallback: &Path) -> (PathBuf, bool) {
    if root_is_usable(primary) {
        return (primary.to_path_buf(), false);
    }
    warn!(
        "Root {:?} is not usable; falling back to {:?}.",
        primary, fallback
    );
    (fallback.to_path_buf(), true)
}

fn root_is_usable(path: &Path) -> bool {
    if path.exists() {
        return path.is_dir();
    }
    path.ancestors()
        .skip(1)
        .map(|a| if a.as_os_str().is_empty() { Path::new(".") } else { a })
        .find(|a| a.exists())
        .and_then(|a| std::fs::metadata(a).ok())
        .is_some_and(|meta| meta.is_dir() && !meta.permissions().readonly())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("nbscaffold.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults_fill_everything_when_nothing_is_given() {
        let args = BuildArgs {
            dry_run: true,
            ..Default::default()
        };

        let app = build_config(&args).unwrap();
        let defaults = DefaultsConfig::default();

        assert_eq!(app.volumes, defaults.volumes);
        assert!(!app.core_config.layout.gitkeep);
        assert!(!app.core_config.layout.volume_templates);
        if !app.used_fallback_root {
            assert_eq!(app.core_config.root, PathBuf::from(defaults.root));
        }
    }

    #[test]
    fn file_values_are_used_when_no_flags_are_given() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("tree");
        let config = write_config(
            dir.path(),
            &format!(
                "root = {:?}\nvolumes = [\"feynman-vol1\"]\n[layout]\ngitkeep = true\n",
                root.to_string_lossy()
            ),
        );
        let args = BuildArgs {
            config: Some(config),
            ..Default::default()
        };

        let app = build_config(&args).unwrap();

        assert_eq!(app.core_config.root, root);
        assert!(!root.exists());
        assert!(!app.used_fallback_root);
        assert_eq!(app.volumes, vec!["feynman-vol1"]);
        assert!(app.core_config.layout.gitkeep);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let dir = tempdir().unwrap();
        let config = write_config(
            dir.path(),
            "root = \"/somewhere/else\"\nvolumes = [\"feynman-vol1\"]\n",
        );
        let args = BuildArgs {
            config: Some(config),
            root: Some(dir.path().to_path_buf()),
            volumes: vec!["feynman-vol3".into()],
            volume_templates: true,
            chapter_examples: true,
            ..Default::default()
        };

        let app = build_config(&args).unwrap();

        assert_eq!(app.core_config.root, dir.path());
        assert_eq!(app.volumes, vec!["feynman-vol3"]);
        assert!(app.core_config.layout.volume_templates);
        assert!(app.core_config.layout.chapter_examples);
    }

    #[test]
    fn set_values_override_flags_and_file() {
        let dir = tempdir().unwrap();
        let config = write_config(dir.path(), "[layout]\ngitkeep = true\n");
        let args = BuildArgs {
            config: Some(config),
            root: Some(PathBuf::from("/ignored")),
            set_values: vec![
                format!("root={}", dir.path().display()),
                "layout.gitkeep=false".into(),
                "layout.volume-templates=yes".into(),
                "layout.learning-tools=on".into(),
            ],
            ..Default::default()
        };

        let app = build_config(&args).unwrap();

        assert_eq!(app.core_config.root, dir.path());
        assert!(!app.core_config.layout.gitkeep);
        assert!(app.core_config.layout.volume_templates);
        assert!(app.core_config.layout.learning_tools);
        assert!(!app.core_config.layout.chapter_examples);
    }

    #[test]
    fn unsupported_set_key_is_a_config_error() {
        let args = BuildArgs {
            set_values: vec!["layout.colour=blue".into()],
            ..Default::default()
        };
        let err = build_config(&args).err().unwrap();
        assert!(matches!(err, CliError::Config(msg) if msg.contains("layout.colour")));
    }

    #[test]
    fn malformed_set_value_is_a_config_error() {
        for bad in ["layout.gitkeep", "layout.gitkeep=perhaps"] {
            let args = BuildArgs {
                set_values: vec![bad.into()],
                ..Default::default()
            };
            assert!(matches!(build_config(&args), Err(CliError::Config(_))), "{}", bad);
        }
    }

    #[test]
    fn empty_volume_list_is_rejected() {
        let dir = tempdir().unwrap();
        let config = write_config(dir.path(), "volumes = []\n");
        let args = BuildArgs {
            config: Some(config),
            ..Default::default()
        };
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn fallback_root_is_used_when_primary_is_a_file() {
        let dir = tempdir().unwrap();
        let occupied = dir.path().join("occupied");
        fs::write(&occupied, "").unwrap();
        let fallback = dir.path().join("fallback");

        let (root, used_fallback) = resolve_root(&occupied, &fallback);

        assert_eq!(root, fallback);
        assert!(used_fallback);
    }

    #[test]
    fn missing_primary_is_accepted_without_being_created() {
        let dir = tempdir().unwrap();
        let primary = dir.path().join("a/b");

        let (root, used_fallback) = resolve_root(&primary, Path::new("."));

        assert_eq!(root, primary);
        assert!(!used_fallback);
        assert!(!dir.path().join("a").exists());
    }

    #[test]
    fn falls_back_when_an_ancestor_is_a_file() {
        let dir = tempdir().unwrap();
        let occupied = dir.path().join("occupied");
        fs::write(&occupied, "").unwrap();

        let (root, used_fallback) = resolve_root(&occupied.join("tree"), dir.path());

        assert_eq!(root, dir.path());
        assert!(used_fallback);
    }
}
