use crate::core::io::traits::StructureFile;
use crate::core::models::atom::{Atom, RecordKind};
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

const B_FACTOR_COLUMNS: std::ops::Range<usize> = 60..66;
const MIN_ATOM_RECORD_LEN: usize = 54;

/// One line of the source file, kept so the file can be written back verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum PdbLine {
    /// An atom record that was parsed into `Structure::atoms()[atom_index]`.
    Atom { atom_index: usize, raw: String },
    /// Any other record, including atoms of models after the first.
    Other(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbMetadata {
    pub lines: Vec<PdbLine>,
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
    #[error("No ATOM/HETATM records found")]
    NoAtoms,
    #[error("Columns 61-66 of the record for atom {index} do not fall on character boundaries")]
    UnsplicableRecord { index: usize },
    #[error("Metadata refers to atom {index}, but the structure has only {len} atoms")]
    Inconsistency { index: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: &'static str, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: &'static str, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: &'static str },
    #[error("Line is too short for ATOM/HETATM record (must be at least 54 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn column_char(line: &str, index: usize) -> char {
    line.as_bytes()
        .get(index)
        .map_or(' ', |&b| if b.is_ascii() { b as char } else { ' ' })
}

fn parse_int(
    line: &str,
    start: usize,
    end: usize,
    columns: &'static str,
) -> Result<i64, PdbParseErrorKind> {
    let value = slice_and_trim(line, start, end);
    if value.is_empty() {
        return Err(PdbParseErrorKind::MissingRequiredField { columns });
    }
    value.parse().map_err(|_| PdbParseErrorKind::InvalidInt {
        columns,
        value: value.into(),
    })
}

fn parse_float(
    line: &str,
    start: usize,
    end: usize,
    columns: &'static str,
) -> Result<f64, PdbParseErrorKind> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbParseErrorKind::InvalidFloat {
        columns,
        value: value.into(),
    })
}

fn parse_optional_float(
    line: &str,
    start: usize,
    end: usize,
    columns: &'static str,
    default: f64,
) -> Result<f64, PdbParseErrorKind> {
    if slice_and_trim(line, start, end).is_empty() {
        Ok(default)
    } else {
        parse_float(line, start, end, columns)
    }
}

fn parse_atom_record(line: &str, record: RecordKind) -> Result<Atom, PdbParseErrorKind> {
    if line.len() < MIN_ATOM_RECORD_LEN {
        return Err(PdbParseErrorKind::LineTooShort);
    }

    let name = slice_and_trim(line, 12, 16);
    if name.is_empty() {
        return Err(PdbParseErrorKind::MissingRequiredField { columns: "13-16" });
    }
    let serial = parse_int(line, 6, 11, "7-11")?;
    let residue_number = parse_int(line, 22, 26, "23-26")? as isize;
    let x = parse_float(line, 30, 38, "31-38")?;
    let y = parse_float(line, 38, 46, "39-46")?;
    let z = parse_float(line, 46, 54, "47-54")?;
    let occupancy = parse_optional_float(line, 54, 60, "55-60", 1.0)?;
    let b_factor = parse_optional_float(line, 60, 66, "61-66", 0.0)?;

    Ok(Atom {
        record,
        serial,
        name: name.to_string(),
        alt_loc: column_char(line, 16),
        residue_name: slice_and_trim(line, 17, 20).to_string(),
        chain_id: column_char(line, 21),
        residue_number,
        insertion_code: column_char(line, 26),
        position: Point3::new(x, y, z),
        occupancy,
        b_factor,
    })
}

/// Replaces the temperature-factor columns of a raw atom line with `b_factor`.
fn splice_b_factor(raw: &str, b_factor: f64) -> Option<String> {
    let mut line = raw.to_string();
    if line.len() < B_FACTOR_COLUMNS.end {
        line.extend(std::iter::repeat_n(' ', B_FACTOR_COLUMNS.end - line.len()));
    }
    if !line.is_char_boundary(B_FACTOR_COLUMNS.start)
        || !line.is_char_boundary(B_FACTOR_COLUMNS.end)
    {
        return None;
    }
    line.replace_range(B_FACTOR_COLUMNS, &format!("{:6.2}", b_factor));
    Some(line)
}

/// Reader and writer for the fixed-column PDB format.
///
/// Only the first model is parsed into atoms. Everything else in the file is
/// kept line by line so that writing a structure back changes nothing but the
/// temperature-factor columns of its atoms.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Metadata = PdbMetadata;
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<(Structure, Self::Metadata), Self::Error> {
        let mut structure = Structure::new();
        let mut metadata = PdbMetadata::default();
        let mut first_model_done = false;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let record_type = slice_and_trim(&line, 0, 6);

            if record_type == "ENDMDL" {
                first_model_done = true;
            }

            match record_type.parse::<RecordKind>() {
                Ok(kind) if !first_model_done => {
                    let atom = parse_atom_record(&line, kind).map_err(|kind| PdbError::Parse {
                        line: line_num,
                        kind,
                    })?;
                    metadata.lines.push(PdbLine::Atom {
                        atom_index: structure.len(),
                        raw: line,
                    });
                    structure.push(atom);
                }
                _ => metadata.lines.push(PdbLine::Other(line)),
            }
        }

        if structure.is_empty() {
            return Err(PdbError::NoAtoms);
        }
        Ok((structure, metadata))
    }

    fn write_to(
        structure: &Structure,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        let atoms = structure.atoms();
        for line in &metadata.lines {
            match line {
                PdbLine::Atom { atom_index, raw } => {
                    let atom = atoms.get(*atom_index).ok_or(PdbError::Inconsistency {
                        index: *atom_index,
                        len: atoms.len(),
                    })?;
                    let record = splice_b_factor(raw, atom.b_factor).ok_or(
                        PdbError::UnsplicableRecord {
                            index: *atom_index,
                        },
                    )?;
                    writeln!(writer, "{}", record)?;
                }
                PdbLine::Other(raw) => writeln!(writer, "{}", raw)?,
            }
        }
        Ok(())
    }
}
