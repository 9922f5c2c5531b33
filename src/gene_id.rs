use std::collections::HashMap;
use std::fmt;
use std::iter::FromIterator;
use std::sync::OnceLock;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{GenvarError, UnknownIdentifierError};

/// Identifier of a gene, either an Ensembl gene id or a numeric Entrez id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneId {
    Entrez(u32),
    Ensembl(String),
}

impl fmt::Display for GeneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entrez(n) => write!(f, "{}", n),
            Self::Ensembl(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for GeneId {
    fn from(s: &str) -> Self {
        Self::Ensembl(s.to_string())
    }
}

impl From<String> for GeneId {
    fn from(s: String) -> Self {
        Self::Ensembl(s)
    }
}

impl From<u32> for GeneId {
    fn from(n: u32) -> Self {
        Self::Entrez(n)
    }
}

// (ensembl gene id, entrez id, symbol)
const BUILTIN_GENES: [(&str, u32, &str); 16] = [
    ("ENSG00000147889", 1029, "CDKN2A"),
    ("ENSG00000072501", 8243, "SMC1A"),
    ("ENSG00000139618", 675, "BRCA2"),
    ("ENSG00000012048", 672, "BRCA1"),
    ("ENSG00000141510", 7157, "TP53"),
    ("ENSG00000133703", 3845, "KRAS"),
    ("ENSG00000213281", 4893, "NRAS"),
    ("ENSG00000157764", 673, "BRAF"),
    ("ENSG00000146648", 1956, "EGFR"),
    ("ENSG00000121879", 5290, "PIK3CA"),
    ("ENSG00000171862", 5728, "PTEN"),
    ("ENSG00000134982", 324, "APC"),
    ("ENSG00000139687", 5925, "RB1"),
    ("ENSG00000136997", 4609, "MYC"),
    ("ENSG00000149311", 472, "ATM"),
    ("ENSG00000118058", 4297, "KMT2A"),
];

/// Read-only mapping from gene identifiers to gene symbols
///
/// One identifier may map to several symbols. Symbols keep the order in which
/// they were inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneTable {
    symbols: HashMap<GeneId, Vec<String>>,
}

impl GeneTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table that `resolve` and `find_nonsense` use
    pub fn builtin() -> &'static GeneTable {
        static TABLE: OnceLock<GeneTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let mut table = GeneTable::new();
            for (ensembl, entrez, symbol) in BUILTIN_GENES.iter() {
                table.insert(GeneId::from(*ensembl), *symbol);
                table.insert(GeneId::from(*entrez), *symbol);
            }
            table
        })
    }

    pub fn insert<S: Into<String>>(&mut self, id: GeneId, symbol: S) {
        let symbol = symbol.into();
        let symbols = self.symbols.entry(id).or_insert_with(Vec::new);
        if !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
    }

    pub fn symbols(&self, id: &GeneId) -> Option<&[String]> {
        self.symbols.get(id).map(|s| s.as_slice())
    }

    pub fn contains(&self, id: &GeneId) -> bool {
        self.symbols.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Look up the symbols of a single identifier
    pub fn lookup(&self, id: &GeneId) -> Result<&[String], UnknownIdentifierError> {
        self.symbols(id)
            .ok_or_else(|| UnknownIdentifierError { id: id.clone() })
    }

    /// Look up all `ids` at once
    ///
    /// Every distinct id appears once, in the order it was first seen. If any
    /// of them is unknown, the whole lookup fails.
    pub fn resolve<I>(&self, ids: I) -> Result<Vec<(GeneId, Vec<String>)>, GenvarError>
    where
        I: IntoIterator,
        I::Item: Into<GeneId>,
    {
        let mut result: Vec<(GeneId, Vec<String>)> = Vec::new();
        for id in ids {
            let id = id.into();
            if result.iter().any(|(seen, _)| seen == &id) {
                continue;
            }
            let symbols = self.lookup(&id)?.to_vec();
            debug!("Resolved gene {} to {:?}", id, symbols);
            result.push((id, symbols));
        }
        Ok(result)
    }
}

impl FromIterator<(GeneId, String)> for GeneTable {
    fn from_iter<T: IntoIterator<Item = (GeneId, String)>>(iter: T) -> Self {
        let mut table = GeneTable::new();
        for (id, symbol) in iter {
            table.insert(id, symbol);
        }
        table
    }
}

/// Resolve gene identifiers to their symbols using the built-in gene table
pub fn resolve<I>(ids: I) -> Result<Vec<(GeneId, Vec<String>)>, GenvarError>
where
    I: IntoIterator,
    I::Item: Into<GeneId>,
{
    GeneTable::builtin().resolve(ids)
}
