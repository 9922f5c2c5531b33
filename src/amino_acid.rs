use crate::error::{GenvarError, SequenceErrorKind};
use crate::sequence::{validate, Alphabet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    Alanine,
    Arginine,
    Asparagine,
    AsparticAcid,
    Cysteine,
    GlutamicAcid,
    Glutamine,
    Glycine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Proline,
    Serine,
    Threonine,
    Tryptophan,
    Tyrosine,
    Valine,
    Stop,
}

impl AminoAcid {
    /// One-letter IUPAC code. Stop codons are written as `*`.
    pub fn symbol(&self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Arginine => 'R',
            Self::Asparagine => 'N',
            Self::AsparticAcid => 'D',
            Self::Cysteine => 'C',
            Self::GlutamicAcid => 'E',
            Self::Glutamine => 'Q',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Leucine => 'L',
            Self::Lysine => 'K',
            Self::Methionine => 'M',
            Self::Phenylalanine => 'F',
            Self::Proline => 'P',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
            Self::Valine => 'V',
            Self::Stop => '*',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        Some(match c {
            'A' => Self::Alanine,
            'R' => Self::Arginine,
            'N' => Self::Asparagine,
            'D' => Self::AsparticAcid,
            'C' => Self::Cysteine,
            'E' => Self::GlutamicAcid,
            'Q' => Self::Glutamine,
            'G' => Self::Glycine,
            'H' => Self::Histidine,
            'I' => Self::Isoleucine,
            'L' => Self::Leucine,
            'K' => Self::Lysine,
            'M' => Self::Methionine,
            'F' => Self::Phenylalanine,
            'P' => Self::Proline,
            'S' => Self::Serine,
            'T' => Self::Threonine,
            'W' => Self::Tryptophan,
            'Y' => Self::Tyrosine,
            'V' => Self::Valine,
            '*' => Self::Stop,
            _ => return None,
        })
    }

    pub fn is_stop(&self) -> bool {
        *self == Self::Stop
    }
}

// Indexed by codon in base 4 with A=0, C=1, G=2, U=3
const GENETIC_CODE: [AminoAcid; 64] = [
    AminoAcid::Lysine,        //AAA
    AminoAcid::Asparagine,    //AAC
    AminoAcid::Lysine,        //AAG
    AminoAcid::Asparagine,    //AAU
    AminoAcid::Threonine,     //ACA
    AminoAcid::Threonine,     //ACC
    AminoAcid::Threonine,     //ACG
    AminoAcid::Threonine,     //ACU
    AminoAcid::Arginine,      //AGA
    AminoAcid::Serine,        //AGC
    AminoAcid::Arginine,      //AGG
    AminoAcid::Serine,        //AGU
    AminoAcid::Isoleucine,    //AUA
    AminoAcid::Isoleucine,    //AUC
    AminoAcid::Methionine,    //AUG
    AminoAcid::Isoleucine,    //AUU
    AminoAcid::Glutamine,     //CAA
    AminoAcid::Histidine,     //CAC
    AminoAcid::Glutamine,     //CAG
    AminoAcid::Histidine,     //CAU
    AminoAcid::Proline,       //CCA
    AminoAcid::Proline,       //CCC
    AminoAcid::Proline,       //CCG
    AminoAcid::Proline,       //CCU
    AminoAcid::Arginine,      //CGA
    AminoAcid::Arginine,      //CGC
    AminoAcid::Arginine,      //CGG
    AminoAcid::Arginine,      //CGU
    AminoAcid::Leucine,       //CUA
    AminoAcid::Leucine,       //CUC
    AminoAcid::Leucine,       //CUG
    AminoAcid::Leucine,       //CUU
    AminoAcid::GlutamicAcid,  //GAA
    AminoAcid::AsparticAcid,  //GAC
    AminoAcid::GlutamicAcid,  //GAG
    AminoAcid::AsparticAcid,  //GAU
    AminoAcid::Alanine,       //GCA
    AminoAcid::Alanine,       //GCC
    AminoAcid::Alanine,       //GCG
    AminoAcid::Alanine,       //GCU
    AminoAcid::Glycine,       //GGA
    AminoAcid::Glycine,       //GGC
    AminoAcid::Glycine,       //GGG
    AminoAcid::Glycine,       //GGU
    AminoAcid::Valine,        //GUA
    AminoAcid::Valine,        //GUC
    AminoAcid::Valine,        //GUG
    AminoAcid::Valine,        //GUU
    AminoAcid::Stop,          //UAA
    AminoAcid::Tyrosine,      //UAC
    AminoAcid::Stop,          //UAG
    AminoAcid::Tyrosine,      //UAU
    AminoAcid::Serine,        //UCA
    AminoAcid::Serine,        //UCC
    AminoAcid::Serine,        //UCG
    AminoAcid::Serine,        //UCU
    AminoAcid::Stop,          //UGA
    AminoAcid::Cysteine,      //UGC
    AminoAcid::Tryptophan,    //UGG
    AminoAcid::Cysteine,      //UGU
    AminoAcid::Leucine,       //UUA
    AminoAcid::Phenylalanine, //UUC
    AminoAcid::Leucine,       //UUG
    AminoAcid::Phenylalanine, //UUU
];

fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let mut index = 0;
    for b in codon {
        let v = match b {
            b'A' | b'a' => 0,
            b'C' | b'c' => 1,
            b'G' | b'g' => 2,
            b'T' | b't' | b'U' | b'u' => 3,
            _ => return None,
        };
        index <<= 2; // times 4
        index += v;
    }
    Some(index)
}

/// Look up a single codon in the standard genetic code
///
/// DNA and RNA letters are both accepted, in either case. Returns `None` for
/// anything that is not exactly three nucleotides long.
pub fn translate_codon(codon: &str) -> Option<AminoAcid> {
    codon_index(codon.as_bytes()).map(|i| GENETIC_CODE[i])
}

/// Translate an RNA sequence into a protein sequence of one-letter codes
///
/// Translation does not halt at stop codons; they show up as `*` and the
/// following codons are translated as usual.
pub fn translate(sequence: &str) -> Result<String, GenvarError> {
    let sequence = validate(sequence, Alphabet::Rna)?;
    if sequence.len() % 3 != 0 {
        return Err(SequenceErrorKind::Frame {
            length: sequence.len(),
        }
        .into());
    }
    sequence
        .as_bytes()
        .chunks(3)
        .enumerate()
        .map(|(i, codon)| {
            codon_index(codon)
                .map(|index| GENETIC_CODE[index].symbol())
                .ok_or_else(|| {
                    GenvarError::from(SequenceErrorKind::InvalidAlphabet {
                        found: codon[0] as char,
                        offset: i * 3,
                        alphabet: Alphabet::Rna,
                    })
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_translate_codon() {
        assert_eq!(translate_codon(""), None);
        assert_eq!(translate_codon("A"), None);
        assert_eq!(translate_codon("AU"), None);
        assert_eq!(translate_codon("UAGA"), None);
        assert_eq!(translate_codon("NOP"), None);

        assert_eq!(translate_codon("AUG"), Some(AminoAcid::Methionine));
        assert_eq!(translate_codon("ATG"), Some(AminoAcid::Methionine));
        assert_eq!(translate_codon("ugg"), Some(AminoAcid::Tryptophan));
        assert_eq!(translate_codon("UUU"), Some(AminoAcid::Phenylalanine));
        assert_eq!(translate_codon("GCU"), Some(AminoAcid::Alanine));
        assert_eq!(translate_codon("UAA"), Some(AminoAcid::Stop));
        assert_eq!(translate_codon("UAG"), Some(AminoAcid::Stop));
        assert_eq!(translate_codon("UGA"), Some(AminoAcid::Stop));
    }

    #[test]
    fn test_genetic_code_is_complete() {
        let bases = ['A', 'C', 'G', 'U'];
        let mut stops = 0;
        for a in &bases {
            for b in &bases {
                for c in &bases {
                    let codon: String = [*a, *b, *c].iter().collect();
                    let aa = translate_codon(&codon).unwrap();
                    if aa.is_stop() {
                        stops += 1;
                    }
                    assert_eq!(AminoAcid::from_symbol(aa.symbol()), Some(aa));
                }
            }
        }
        assert_eq!(stops, 3);
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate("UUUCAGCUCCACAUCUAGUUUGGG").unwrap(), "FQLHI*FG");
        assert_eq!(translate("AUG").unwrap(), "M");
        assert_eq!(translate("UAAUAA").unwrap(), "**");

        // one residue per codon, no matter how many stops
        let rna = "UGA".repeat(10) + &"GCU".repeat(10);
        let protein = translate(&rna).unwrap();
        assert_eq!(protein.len(), 20);
        assert_eq!(protein, "*".repeat(10) + &"A".repeat(10));
    }

    #[test]
    fn test_translate_errors() {
        assert_eq!(
            translate("ATGCUU").unwrap_err().kind(),
            ErrorKind::InvalidAlphabet
        );
        assert_eq!(translate("AUGCC").unwrap_err().kind(), ErrorKind::Frame);
        assert_eq!(translate("").unwrap_err().kind(), ErrorKind::EmptySequence);
    }
}
