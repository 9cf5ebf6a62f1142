use super::traits::DocumentFile;
use crate::core::models::notebook::{Cell, CellKind, Notebook};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const NBFORMAT: u32 = 4;
pub const NBFORMAT_MINOR: u32 = 5;

#[derive(Debug, Error)]
pub enum IpynbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid notebook JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported notebook format version {major}.{minor}")]
    UnsupportedVersion { major: u32, minor: u32 },
}

// Field order is alphabetical so the output matches nbformat's sorted-key writer.
#[derive(Debug, Serialize, Deserialize)]
struct RawNotebook {
    cells: Vec<RawCell>,
    #[serde(default)]
    metadata: Map<String, Value>,
    nbformat: u32,
    nbformat_minor: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
enum RawCell {
    Code {
        execution_count: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default)]
        metadata: Map<String, Value>,
        #[serde(default)]
        outputs: Vec<Value>,
        source: RawSource,
    },
    Markdown {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default)]
        metadata: Map<String, Value>,
        source: RawSource,
    },
    Raw {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default)]
        metadata: Map<String, Value>,
        source: RawSource,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawSource {
    Lines(Vec<String>),
    Text(String),
}

impl RawSource {
    fn from_text(text: &str) -> Self {
        RawSource::Lines(text.split_inclusive('\n').map(str::to_owned).collect())
    }

    fn into_text(self) -> String {
        match self {
            RawSource::Lines(lines) => lines.concat(),
            RawSource::Text(text) => text,
        }
    }
}

fn cell_id(position: usize) -> String {
    format!("cell-{}", position + 1)
}

/// Jupyter notebook format, version 4.5.
pub struct IpynbFile;

impl IpynbFile {
    fn to_raw(notebook: &Notebook) -> RawNotebook {
        let cells = notebook
            .cells()
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let id = Some(cell_id(i));
                let source = RawSource::from_text(&cell.source);
                match cell.kind {
                    CellKind::Markdown => RawCell::Markdown {
                        id,
                        metadata: Map::new(),
                        source,
                    },
                    CellKind::Code => RawCell::Code {
                        execution_count: None,
                        id,
                        metadata: Map::new(),
                        outputs: Vec::new(),
                        source,
                    },
                }
            })
            .collect();

        RawNotebook {
            cells,
            metadata: Map::new(),
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }
}

impl DocumentFile for IpynbFile {
    type Error = IpynbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Notebook, Self::Error> {
        let raw: RawNotebook = serde_json::from_reader(reader)?;
        if raw.nbformat != NBFORMAT {
            return Err(IpynbError::UnsupportedVersion {
                major: raw.nbformat,
                minor: raw.nbformat_minor,
            });
        }
        // Raw cells have no counterpart in the document model and are dropped.
        Ok(raw
            .cells
            .into_iter()
            .filter_map(|cell| match cell {
                RawCell::Markdown { source, .. } => Some(Cell::markdown(source.into_text())),
                RawCell::Code { source, .. } => Some(Cell::code(source.into_text())),
                RawCell::Raw { .. } => None,
            })
            .collect())
    }

    fn write_to(notebook: &Notebook, writer: &mut impl Write) -> Result<(), Self::Error> {
        let raw = Self::to_raw(notebook);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut *writer, formatter);
        raw.serialize(&mut serializer)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
