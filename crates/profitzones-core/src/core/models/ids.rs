use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A durable identifier for a residue within one structure.
///
/// Unlike a positional index into the C-alpha sequence, a specifier stays valid
/// when residues are renumbered, skipped, or reordered in the source file. Two
/// specifiers are equal only when chain, sequence number and insertion code all
/// match exactly; a blank insertion code is stored as `' '` and is never
/// normalized away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResidueSpecifier {
    pub chain_id: char,
    pub residue_number: isize,
    pub insertion_code: char,
}

impl ResidueSpecifier {
    pub fn new(chain_id: char, residue_number: isize, insertion_code: char) -> Self {
        Self {
            chain_id,
            residue_number,
            insertion_code,
        }
    }
}

impl fmt::Display for ResidueSpecifier {
    /// Writes the canonical `<chain><number><insert>` form, e.g. `A112 ` or `L27A`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.chain_id, self.residue_number, self.insertion_code
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseResidueSpecifierError {
    #[error("Residue specifier is empty")]
    Empty,
    #[error("Residue specifier '{0}' has no residue number")]
    MissingNumber(String),
    #[error("Residue specifier '{0}' has trailing characters after the insertion code")]
    TrailingCharacters(String),
}

impl FromStr for ResidueSpecifier {
    type Err = ParseResidueSpecifierError;

    /// Parses the canonical form produced by [`fmt::Display`].
    ///
    /// The first character is the chain, followed by an optionally signed
    /// residue number and at most one insertion-code character. A missing
    /// insertion code is read as `' '`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let chain_id = chars.next().ok_or(ParseResidueSpecifierError::Empty)?;
        let rest = chars.as_str();

        let digits_end = rest
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
            .map_or(rest.len(), |(i, _)| i);
        let residue_number: isize = rest[..digits_end]
            .parse()
            .map_err(|_| ParseResidueSpecifierError::MissingNumber(s.to_string()))?;

        let mut tail = rest[digits_end..].chars();
        let insertion_code = tail.next().unwrap_or(' ');
        if tail.next().is_some() {
            return Err(ParseResidueSpecifierError::TrailingCharacters(
                s.to_string(),
            ));
        }

        Ok(Self::new(chain_id, residue_number, insertion_code))
    }
}

/// One of the two structures a zone relates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureSlot {
    First,
    Second,
}

impl StructureSlot {
    pub const ALL: [StructureSlot; 2] = [StructureSlot::First, StructureSlot::Second];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            StructureSlot::First => 0,
            StructureSlot::Second => 1,
        }
    }
}

impl fmt::Display for StructureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureSlot::First => write!(f, "first structure"),
            StructureSlot::Second => write!(f, "second structure"),
        }
    }
}
