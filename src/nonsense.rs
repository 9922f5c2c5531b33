use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::GenvarError;
use crate::gene_id::{GeneId, GeneTable};
use crate::sequence::Field;
use crate::variant_classifier::protein_variant;

/// One row of a sequence table: a gene and its cancer and normal DNA
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SequenceRow {
    pub gene_id: GeneId,
    #[serde(default)]
    pub cancer: Field,
    #[serde(default)]
    pub normal: Field,
}

impl SequenceRow {
    pub fn new<G, C, N>(gene_id: G, cancer: C, normal: N) -> Self
    where
        G: Into<GeneId>,
        C: Into<Field>,
        N: Into<Field>,
    {
        Self {
            gene_id: gene_id.into(),
            cancer: cancer.into(),
            normal: normal.into(),
        }
    }
}

/// A premature stop codon found in the cancer sequence of a gene
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NonsenseRecord {
    pub gene_id: GeneId,
    pub symbol: String,
    pub codon_number: usize,
    pub cancer: char,
    pub normal: char,
}

/// Find nonsense mutations in every row of `rows` using the built-in gene table
pub fn find_nonsense(rows: &[SequenceRow]) -> Result<Vec<NonsenseRecord>, GenvarError> {
    find_nonsense_with(GeneTable::builtin(), rows)
}

/// Find nonsense mutations in every row of `rows`
///
/// The output follows the row order and, within a row, the codon order. A gene
/// with several symbols yields one record per symbol and variant. Any invalid
/// row makes the whole call fail.
pub fn find_nonsense_with(
    genes: &GeneTable,
    rows: &[SequenceRow],
) -> Result<Vec<NonsenseRecord>, GenvarError> {
    let mut result = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let symbols = genes.lookup(&row.gene_id)?;
        let cancer = row
            .cancer
            .as_sequence()
            .map_err(|e| e.at_item("sequence row", index))?;
        let normal = row
            .normal
            .as_sequence()
            .map_err(|e| e.at_item("sequence row", index))?;

        let variants = protein_variant(cancer, normal)?;
        debug!(
            "Row {} ({}): {} protein variants",
            index,
            row.gene_id,
            variants.len()
        );
        for variant in variants {
            if !variant.is_nonsense() {
                trace!("Skipping {:?} in gene {}", variant, row.gene_id);
                continue;
            }
            for symbol in symbols {
                result.push(NonsenseRecord {
                    gene_id: row.gene_id.clone(),
                    symbol: symbol.clone(),
                    codon_number: variant.codon_number,
                    cancer: variant.cancer,
                    normal: variant.normal,
                });
            }
        }
    }
    Ok(result)
}
