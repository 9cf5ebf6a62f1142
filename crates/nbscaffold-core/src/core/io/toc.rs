use crate::core::models::toc::Volume;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TocLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{origin}': {source}")]
    Toml {
        origin: String,
        source: toml::de::Error,
    },
}

/// Loads a volume (number, topic, and table of contents) from a TOML file.
pub fn load_volume(path: &Path) -> Result<Volume, TocLoadError> {
    debug!("Loading table of contents from {:?}", path);
    let content = std::fs::read_to_string(path).map_err(|e| TocLoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    parse_volume(&content, &path.to_string_lossy())
}

/// Parses a volume from TOML text; `origin` names the source in error messages.
pub fn parse_volume(content: &str, origin: &str) -> Result<Volume, TocLoadError> {
    toml::from_str(content).map_err(|e| TocLoadError::Toml {
        origin: origin.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_volume_reads_file_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vol.toml");
        fs::write(
            &path,
            r#"
            number = 2
            topic = "Electromagnetism"
            slug = "em"
            [[chapters]]
            number = 1
            title = "Electromagnetism"
            sections = ["Electrical forces", "Electric and magnetic fields"]
            "#,
        )
        .unwrap();

        let volume = load_volume(&path).unwrap();
        assert_eq!(volume.number, 2);
        assert_eq!(volume.slug.as_deref(), Some("em"));
        assert_eq!(volume.chapters.len(), 1);
        assert_eq!(volume.chapters.section_count(), 2);
    }

    #[test]
    fn load_volume_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_volume(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, TocLoadError::Io { .. }));
    }

    #[test]
    fn parse_volume_rejects_unknown_fields() {
        let err = parse_volume("number = 1\ntopic = \"x\"\ncolour = \"red\"\n", "inline").unwrap_err();
        match err {
            TocLoadError::Toml { origin, .. } => assert_eq!(origin, "inline"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
