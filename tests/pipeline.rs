//! End-to-end checks of the public API on paired cancer/normal sequences

use genvar::{
    find_nonsense, find_snvs, protein_variant, resolve, transcribe, translate, ErrorKind, GeneId,
    GenvarError, ProteinVariant, SequenceRow, Snv,
};

fn kind<T: std::fmt::Debug>(result: Result<T, GenvarError>) -> ErrorKind {
    result.unwrap_err().kind()
}

#[test]
fn resolve_mixed_identifiers() {
    let resolved = resolve(vec![GeneId::from("ENSG00000147889"), GeneId::from(8243u32)]).unwrap();
    assert_eq!(resolved[0].1, vec!["CDKN2A".to_string()]);
    assert_eq!(resolved[1].1, vec!["SMC1A".to_string()]);
    assert_eq!(
        kind(resolve(vec![GeneId::from("ABCD"), GeneId::from(0u32)])),
        ErrorKind::UnknownIdentifier
    );
}

#[test]
fn transcribe_then_translate() {
    let rna = transcribe("AAAGTCGAGGTGTAGATCAAACCC").unwrap();
    assert_eq!(rna, "UUUCAGCUCCACAUCUAGUUUGGG");
    assert_eq!(translate(&rna).unwrap(), "FQLHI*FG");
}

#[test]
fn rna_is_rejected_where_dna_is_expected() {
    assert_eq!(kind(transcribe("ATGCUU")), ErrorKind::InvalidAlphabet);
    assert_eq!(kind(find_snvs("ATGCUUUG", "ATGCTCTT")), ErrorKind::InvalidAlphabet);
    assert_eq!(kind(translate("ATGCUU")), ErrorKind::InvalidAlphabet);
}

#[test]
fn every_operation_rejects_empty_input() {
    assert_eq!(kind(transcribe("")), ErrorKind::EmptySequence);
    assert_eq!(kind(translate("")), ErrorKind::EmptySequence);
    assert_eq!(kind(find_snvs("", "")), ErrorKind::EmptySequence);
    assert_eq!(kind(protein_variant("", "")), ErrorKind::EmptySequence);
    assert_eq!(
        kind(find_nonsense(&[SequenceRow::new("ENSG00000147889", "", "")])),
        ErrorKind::EmptySequence
    );
}

#[test]
fn snvs_and_protein_variants_of_the_same_pair() {
    let cancer = "AAAGTGGAGGTGTAGATCAAACCC";
    let normal = "AAAGTCGAGGTGTAGATGAAACCC";
    assert_eq!(
        find_snvs(cancer, normal).unwrap(),
        vec![Snv::new(5, 'G', 'C'), Snv::new(17, 'C', 'G')]
    );
    assert_eq!(
        protein_variant(cancer, normal).unwrap(),
        vec![
            ProteinVariant::new(1, 'H', 'Q'),
            ProteinVariant::new(5, '*', 'Y')
        ]
    );
}

#[test]
fn repeated_calls_give_identical_results() {
    let rows = vec![SequenceRow::new(
        8243u32,
        "CATATCCTGATCGGCCTGATCGGGAGG",
        "CATAGCCTGATCGGCCTGAGCGGGAGG",
    )];
    assert_eq!(find_nonsense(&rows).unwrap(), find_nonsense(&rows).unwrap());
}

#[test]
fn sequence_table_from_json() {
    let rows: Vec<SequenceRow> = serde_json::from_str(
        r#"[
            {"gene_id": "ENSG00000147889",
             "cancer": "AAAGTGGAGGTGTAGATCAAACCC",
             "normal": "AAAGTCGAGGTGTAGATGAAACCC"},
            {"gene_id": 8243,
             "cancer": "CATATCCTGATCGGCCTGATCGGGAGG",
             "normal": "CATAGCCTGATCGGCCTGAGCGGGAGG"},
            {"gene_id": 675,
             "cancer": "AGGGCTTTTACCCAGCATTGA",
             "normal": "AGGGCTTTTACCCAGGATTGA"}
        ]"#,
    )
    .unwrap();

    let records = find_nonsense(&rows).unwrap();
    let json = serde_json::to_value(&records).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"gene_id": "ENSG00000147889", "symbol": "CDKN2A", "codon_number": 5, "cancer": "*", "normal": "Y"},
            {"gene_id": 8243, "symbol": "SMC1A", "codon_number": 1, "cancer": "*", "normal": "S"},
            {"gene_id": 8243, "symbol": "SMC1A", "codon_number": 6, "cancer": "*", "normal": "S"},
        ])
    );
}

#[test]
fn numbers_in_sequence_columns_are_type_errors() {
    let rows: Vec<SequenceRow> = serde_json::from_str(
        r#"[{"gene_id": "ENSG00000147889", "cancer": 1, "normal": 0}]"#,
    )
    .unwrap();
    assert_eq!(kind(find_nonsense(&rows)), ErrorKind::Type);

    let rows: Vec<SequenceRow> =
        serde_json::from_str(r#"[{"gene_id": "ABCD", "cancer": 1, "normal": 0}]"#).unwrap();
    assert_eq!(kind(find_nonsense(&rows)), ErrorKind::UnknownIdentifier);
}

#[test]
fn floats_and_missing_values_in_sequence_columns_are_type_errors() {
    for cell in &["1.5", "null", "true"] {
        let json = format!(
            r#"[{{"gene_id": "ENSG00000147889", "cancer": {}, "normal": "AAA"}}]"#,
            cell
        );
        let rows: Vec<SequenceRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(kind(find_nonsense(&rows)), ErrorKind::Type);
    }

    let rows: Vec<SequenceRow> = serde_json::from_str(
        r#"[{"gene_id": "ENSG00000147889", "cancer": "AAA", "normal": null}]"#,
    )
    .unwrap();
    match find_nonsense(&rows).unwrap_err() {
        GenvarError::TypeError(e) => assert_eq!(
            e.to_string(),
            "Expected a nucleotide sequence for item of type sequence row at index 0 \
             but got a value of type missing value"
        ),
        other => panic!("unexpected error: {}", other),
    }

    // an absent column counts as a missing value
    let rows: Vec<SequenceRow> =
        serde_json::from_str(r#"[{"gene_id": "ENSG00000147889", "cancer": "AAA"}]"#).unwrap();
    assert_eq!(kind(find_nonsense(&rows)), ErrorKind::Type);
}
