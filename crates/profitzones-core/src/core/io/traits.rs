use crate::core::models::structure::Structure;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing structure file formats.
///
/// Implementors return the parsed [`Structure`] together with format-specific
/// metadata that lets them write the file back with only the annotation field
/// changed.
pub trait StructureFile {
    /// The type of metadata associated with the file format.
    type Metadata;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a structure from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<(Structure, Self::Metadata), Self::Error>;

    /// Writes a structure back using the metadata captured when it was read.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or the metadata does not match the structure.
    fn write_to(
        structure: &Structure,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Reads a structure from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<(Structure, Self::Metadata), Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a structure and metadata to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        structure: &Structure,
        metadata: &Self::Metadata,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(structure, metadata, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
