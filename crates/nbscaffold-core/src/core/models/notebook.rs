#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Markdown,
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    pub source: String,
}

impl Cell {
    pub fn markdown(source: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Markdown,
            source: source.into(),
        }
    }

    pub fn code(source: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Code,
            source: source.into(),
        }
    }
}

/// An ordered list of narrative and executable cells.
///
/// The notebook carries no file-format details; see [`crate::core::io::ipynb`] for the
/// on-disk representation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    cells: Vec<Cell>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_markdown(&mut self, source: impl Into<String>) -> &mut Self {
        self.push(Cell::markdown(source))
    }

    pub fn push_code(&mut self, source: impl Into<String>) -> &mut Self {
        self.push(Cell::code(source))
    }

    pub fn push(&mut self, cell: Cell) -> &mut Self {
        self.cells.push(cell);
        self
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<Cell> for Notebook {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
