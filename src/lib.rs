mod amino_acid;
pub mod error;
mod gene_id;
mod mutation;
mod nonsense;
mod sequence;
mod variant_classifier;

use std::convert::TryFrom;
use std::fmt;

use serde_repr::{Deserialize_repr, Serialize_repr};

pub use crate::amino_acid::{translate, translate_codon, AminoAcid};
use crate::error::ParseError;
pub use crate::error::{ErrorKind, GenvarError};
pub use crate::gene_id::{resolve, GeneId, GeneTable};
pub use crate::mutation::{find_snvs, Snv};
pub use crate::nonsense::{find_nonsense, find_nonsense_with, NonsenseRecord, SequenceRow};
pub use crate::sequence::{transcribe, validate, Alphabet, Field};
pub use crate::variant_classifier::{protein_variant, tally_variant_classes, ProteinVariant};

/// Effect of an amino acid change on the protein
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum VariantClass {
    Synonymous = 0,
    Missense = 1,
    Nonsense = 2,
    StopLoss = 3,
}

impl VariantClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Synonymous => "synonymous",
            Self::Missense => "missense",
            Self::Nonsense => "nonsense",
            Self::StopLoss => "stop_loss",
        }
    }

    pub fn iter() -> VariantClassIter {
        VariantClassIter { index: 0 }
    }
}

impl fmt::Display for VariantClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let string = match self {
            Self::Synonymous => "Synonymous",
            Self::Missense => "Missense",
            Self::Nonsense => "Nonsense",
            Self::StopLoss => "StopLoss",
        };
        write!(f, "{}", string)
    }
}

impl TryFrom<&str> for VariantClass {
    type Error = ParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Ok(match s.to_lowercase().as_str() {
            "synonymous" => Self::Synonymous,
            "missense" => Self::Missense,
            "nonsense" => Self::Nonsense,
            "stoploss" | "stop_loss" => Self::StopLoss,
            _ => {
                return Err(ParseError::somewhere(
                    "name of variant class",
                    s.to_string(),
                ))
            }
        })
    }
}

impl TryFrom<u8> for VariantClass {
    type Error = ParseError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Synonymous),
            1 => Ok(Self::Missense),
            2 => Ok(Self::Nonsense),
            3 => Ok(Self::StopLoss),
            _ => Err(ParseError::somewhere("0, 1, 2 or 3", n.to_string())),
        }
    }
}

pub struct VariantClassIter {
    index: u8,
}

impl std::iter::Iterator for VariantClassIter {
    type Item = VariantClass;

    fn next(&mut self) -> Option<Self::Item> {
        let result = VariantClass::try_from(self.index).ok()?;
        self.index += 1;
        Some(result)
    }
}
