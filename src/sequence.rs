use std::fmt;

use serde::Deserialize;

use crate::error::{GenvarError, SequenceErrorKind, TypeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    Dna,
    Rna,
}

impl Alphabet {
    pub fn contains(&self, c: char) -> bool {
        match self {
            Alphabet::Dna => matches!(c, 'A' | 'C' | 'G' | 'T'),
            Alphabet::Rna => matches!(c, 'A' | 'C' | 'G' | 'U'),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Dna => "DNA",
                Self::Rna => "RNA",
            }
        )
    }
}

/// Check that `sequence` is non-empty and only uses uppercase letters of `alphabet`
///
/// Returns the sequence unchanged, so that it can be used as a guard:
/// `let seq = validate(seq, Alphabet::Dna)?;`
pub fn validate(sequence: &str, alphabet: Alphabet) -> Result<&str, GenvarError> {
    if sequence.is_empty() {
        return Err(SequenceErrorKind::Empty.into());
    }
    if let Some((offset, found)) = sequence
        .chars()
        .enumerate()
        .find(|(_, c)| !alphabet.contains(*c))
    {
        return Err(SequenceErrorKind::InvalidAlphabet {
            found,
            offset,
            alphabet,
        }
        .into());
    }
    Ok(sequence)
}

/// Base pairing of the template strand with the RNA that is transcribed from it
fn transcribe_base(nuc: char) -> char {
    match nuc {
        'A' => 'U',
        'C' => 'G',
        'G' => 'C',
        'T' => 'A',
        _ => panic!("Unsupported nucleotide {}", nuc),
    }
}

/// Transcribe a DNA template strand into RNA
///
/// Every base is replaced by its RNA pairing partner (A->U, T->A, G->C, C->G).
/// The length and order of the sequence are preserved.
pub fn transcribe(sequence: &str) -> Result<String, GenvarError> {
    let sequence = validate(sequence, Alphabet::Dna)?;
    Ok(sequence.chars().map(transcribe_base).collect())
}

/// A loosely typed cell of a sequence table
///
/// Tables that are assembled from untyped data may hold numbers, booleans or
/// missing values where sequences are expected. These are only rejected once
/// the cell is used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Missing,
}

impl Field {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Missing => "missing value",
        }
    }

    pub fn as_sequence(&self) -> Result<&str, TypeError> {
        match self {
            Self::Text(s) => Ok(s),
            other => Err(TypeError::somewhere(
                "a nucleotide sequence",
                other.type_name(),
            )),
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::Missing
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Field {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Field {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}
