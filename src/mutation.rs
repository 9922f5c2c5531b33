use serde::Serialize;

use crate::error::{GenvarError, SequenceErrorKind};
use crate::sequence::{validate, Alphabet};

/// A single nucleotide that differs between the cancer and the normal sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snv {
    pub position: usize, // zero-based offset
    pub cancer: char,
    pub normal: char,
}

impl Snv {
    pub fn new(position: usize, cancer: char, normal: char) -> Self {
        Self {
            position,
            cancer,
            normal,
        }
    }
}

/// Make sure that two sequences can be compared position by position
pub(crate) fn check_same_length(cancer: &str, normal: &str) -> Result<(), GenvarError> {
    if cancer.len() != normal.len() {
        Err(SequenceErrorKind::LengthMismatch {
            cancer: cancer.len(),
            normal: normal.len(),
        }
        .into())
    } else {
        Ok(())
    }
}

/// Find all single nucleotide variants between two DNA sequences of equal length
///
/// The result is ordered by position. Identical sequences yield no variants.
pub fn find_snvs(cancer: &str, normal: &str) -> Result<Vec<Snv>, GenvarError> {
    let cancer = validate(cancer, Alphabet::Dna)?;
    let normal = validate(normal, Alphabet::Dna)?;
    check_same_length(cancer, normal)?;

    Ok(cancer
        .chars()
        .zip(normal.chars())
        .enumerate()
        .filter(|(_, (c, n))| c != n)
        .map(|(i, (c, n))| Snv::new(i, c, n))
        .collect())
}
