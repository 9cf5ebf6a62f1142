use crate::core::models::notebook::Notebook;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Defines the interface for reading and writing notebook file formats.
///
/// Implementors handle format-specific parsing and serialization; callers only see
/// the format-independent [`Notebook`].
pub trait DocumentFile {
    /// The error type for I/O and format operations.
    type Error: Error + From<io::Error>;

    /// Parses a notebook from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a valid document of this format.
    fn read_from(reader: &mut impl BufRead) -> Result<Notebook, Self::Error>;

    /// Serializes a notebook to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying write fails.
    fn write_to(notebook: &Notebook, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Serializes a notebook into an owned byte buffer.
    fn to_bytes(notebook: &Notebook) -> Result<Vec<u8>, Self::Error> {
        let mut buffer = Vec::new();
        Self::write_to(notebook, &mut buffer)?;
        Ok(buffer)
    }

    /// Reads a notebook from a file path.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Notebook, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
