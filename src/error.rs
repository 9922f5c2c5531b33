use std::fmt;

use thiserror::Error;

use crate::gene_id::GeneId;
use crate::sequence::Alphabet;

#[derive(Debug, Error)]
#[error("Expected {expected} {location} but observed: {observed}")]
pub struct ParseError {
    expected: &'static str,
    observed: String,
    location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Unknown,
    Item { type_: &'static str, index: usize },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Unknown => write!(f, "at unknown location"),
            Location::Item { type_, index } => {
                write!(f, "for item of type {} at index {}", type_, index)
            }
        }
    }
}

impl ParseError {
    pub fn somewhere(expected: &'static str, observed: String) -> Self {
        Self {
            expected,
            observed,
            location: Location::Unknown,
        }
    }
}

/// A value of the wrong type was found where a sequence or identifier was expected
#[derive(Debug, Error)]
#[error("Expected {expected} {location} but got a value of type {observed}")]
pub struct TypeError {
    expected: &'static str,
    observed: &'static str,
    location: Location,
}

impl TypeError {
    pub fn somewhere(expected: &'static str, observed: &'static str) -> Self {
        Self {
            expected,
            observed,
            location: Location::Unknown,
        }
    }

    /// Attach a table location to an error that was raised without one
    pub fn at_item(mut self, type_: &'static str, index: usize) -> Self {
        self.location = Location::Item { type_, index };
        self
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceErrorKind {
    Empty,
    InvalidAlphabet {
        found: char,
        offset: usize,
        alphabet: Alphabet,
    },
    LengthMismatch {
        cancer: usize,
        normal: usize,
    },
    Frame {
        length: usize,
    },
}

#[derive(Debug, Error)]
pub struct SequenceError {
    kind: SequenceErrorKind,
}

impl SequenceError {
    pub fn new(kind: SequenceErrorKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &SequenceErrorKind {
        &self.kind
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            SequenceErrorKind::Empty => write!(f, "Sequence is empty"),
            SequenceErrorKind::InvalidAlphabet {
                found,
                offset,
                alphabet,
            } => write!(
                f,
                "Unexpected character {:?} at offset {} in {} sequence",
                found, offset, alphabet
            ),
            SequenceErrorKind::LengthMismatch { cancer, normal } => write!(
                f,
                "Cancer and normal sequences differ in length: {} != {}",
                cancer, normal
            ),
            SequenceErrorKind::Frame { length } => write!(
                f,
                "Sequence length {} is not a multiple of the codon length",
                length
            ),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown gene identifier: {id}")]
pub struct UnknownIdentifierError {
    pub id: GeneId,
}

/// Flat discriminant of every failure a caller can observe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    EmptySequence,
    InvalidAlphabet,
    LengthMismatch,
    Frame,
    UnknownIdentifier,
    Parse,
}

/// Catch-all error for top-level API
#[derive(Debug, Error)]
pub enum GenvarError {
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[error(transparent)]
    TypeError(#[from] TypeError),
    #[error(transparent)]
    SequenceError(#[from] SequenceError),
    #[error(transparent)]
    UnknownIdentifierError(#[from] UnknownIdentifierError),
}

impl GenvarError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ParseError(_) => ErrorKind::Parse,
            Self::TypeError(_) => ErrorKind::Type,
            Self::UnknownIdentifierError(_) => ErrorKind::UnknownIdentifier,
            Self::SequenceError(e) => match e.kind() {
                SequenceErrorKind::Empty => ErrorKind::EmptySequence,
                SequenceErrorKind::InvalidAlphabet { .. } => ErrorKind::InvalidAlphabet,
                SequenceErrorKind::LengthMismatch { .. } => ErrorKind::LengthMismatch,
                SequenceErrorKind::Frame { .. } => ErrorKind::Frame,
            },
        }
    }
}

impl From<SequenceErrorKind> for GenvarError {
    fn from(kind: SequenceErrorKind) -> Self {
        SequenceError::new(kind).into()
    }
}
