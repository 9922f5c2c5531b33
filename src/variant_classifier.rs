use std::collections::HashMap;

use serde::Serialize;

use crate::amino_acid::{translate, AminoAcid};
use crate::error::{GenvarError, SequenceErrorKind};
use crate::mutation::check_same_length;
use crate::sequence::{transcribe, validate, Alphabet};
use crate::VariantClass;

/// An amino acid that differs between the cancer and the normal protein
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProteinVariant {
    pub codon_number: usize, // zero-based codon offset
    pub cancer: char,
    pub normal: char,
}

impl ProteinVariant {
    pub fn new(codon_number: usize, cancer: char, normal: char) -> Self {
        Self {
            codon_number,
            cancer,
            normal,
        }
    }

    /// Classify the effect of the variant, treating the normal residue as reference
    pub fn classify(&self) -> VariantClass {
        let old_aa = AminoAcid::from_symbol(self.normal);
        let new_aa = AminoAcid::from_symbol(self.cancer);

        if old_aa == new_aa {
            VariantClass::Synonymous
        } else if old_aa == Some(AminoAcid::Stop) {
            VariantClass::StopLoss
        } else if new_aa == Some(AminoAcid::Stop) {
            VariantClass::Nonsense
        } else {
            VariantClass::Missense
        }
    }

    /// A stop codon in the cancer protein where the normal protein has none
    pub fn is_nonsense(&self) -> bool {
        self.classify() == VariantClass::Nonsense
    }
}

/// Find the amino acids that change between a cancer and a normal DNA sequence
///
/// Both sequences are transcribed and translated in full. The proteins are then
/// compared codon by codon and every difference is reported, ordered by
/// codon number.
pub fn protein_variant(cancer: &str, normal: &str) -> Result<Vec<ProteinVariant>, GenvarError> {
    let cancer = validate(cancer, Alphabet::Dna)?;
    let normal = validate(normal, Alphabet::Dna)?;
    check_same_length(cancer, normal)?;
    if cancer.len() % 3 != 0 {
        return Err(SequenceErrorKind::Frame {
            length: cancer.len(),
        }
        .into());
    }

    let cancer_protein = translate(&transcribe(cancer)?)?;
    let normal_protein = translate(&transcribe(normal)?)?;
    debug_assert_eq!(cancer_protein.len(), normal_protein.len());

    Ok(cancer_protein
        .chars()
        .zip(normal_protein.chars())
        .enumerate()
        .filter(|(_, (c, n))| c != n)
        .map(|(i, (c, n))| ProteinVariant::new(i, c, n))
        .collect())
}

/// Count how many variants fall into each class
pub fn tally_variant_classes(variants: &[ProteinVariant]) -> HashMap<VariantClass, usize> {
    let mut result = HashMap::new();
    for variant in variants {
        *result.entry(variant.classify()).or_insert(0) += 1;
    }
    result
}
