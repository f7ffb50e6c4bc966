use std::sync::Arc;

use hemeqc_core::models::{Columns, VariantType};
use hemeqc_core::utils::parse_position;

use crate::consts::*;

///
/// One data row of an exome table.
///
/// The named fields are the ones the joins need; every cell is still
/// available through [`ExomeRecord::get`], which answers `None` for columns
/// the source table does not have.
///
#[derive(Debug, Clone)]
pub struct ExomeRecord {
    pub filename: String,
    pub chromosome: String,
    /// Position as declared in the table.
    pub position: u32,
    /// Position the record is keyed under (see [`VariantType::normalized_position`]).
    pub indexed_position: u32,
    pub variant_type: VariantType,

    columns: Arc<Columns>,
    values: Vec<String>,
}

impl ExomeRecord {
    ///
    /// Build a record from a table row. Rows without a chromosome or without a
    /// numeric position give `None`.
    ///
    /// # Arguments:
    /// - columns: column names of the source table
    /// - values: the row's cells
    /// - filename: name of the source table
    /// - normalize_indels: shift insertion/deletion positions by one
    pub fn from_row(
        columns: Arc<Columns>,
        mut values: Vec<String>,
        filename: &str,
        normalize_indels: bool,
    ) -> Option<Self> {
        let chromosome = columns.get(&values, CHROM_FIELD)?.to_string();
        let position = parse_position(columns.get(&values, POS_FIELD)?)?;
        let variant_type = VariantType::from(columns.get(&values, TYPE_FIELD).unwrap_or_default());

        let indexed_position = match normalize_indels {
            true => variant_type.normalized_position(position),
            false => position,
        };

        // store the position in canonical form ("007" -> "7") for output
        if let Some(i) = columns.position(POS_FIELD) {
            values[i] = position.to_string();
        }

        Some(ExomeRecord {
            filename: filename.to_string(),
            chromosome,
            position,
            indexed_position,
            variant_type,
            columns,
            values,
        })
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(&self.values, column)
    }

    pub fn gene(&self) -> &str {
        self.get(GENE_FIELD).unwrap_or_default()
    }

    ///
    /// The calling allele, when the record carries a non-empty one.
    ///
    pub fn variant(&self) -> Option<&str> {
        self.get(VARIANT_FIELD).filter(|v| !v.is_empty())
    }

    /// Expected allele frequency; present-but-empty cells come back as `Some("")`.
    pub fn frequency(&self) -> Option<&str> {
        self.get(VAF_FIELD)
    }

    ///
    /// Cells for an arbitrary field list, empty where this record's table has
    /// no such column.
    ///
    pub fn values_for<'a>(&'a self, fields: &[String]) -> Vec<&'a str> {
        fields
            .iter()
            .map(|f| self.get(f).unwrap_or_default())
            .collect()
    }

    ///
    /// Identity of the variant for export: the leading required columns
    /// (gene through type), tab joined. Two records that differ only in the
    /// trailing descriptive columns share a key.
    ///
    pub fn dedupe_key(&self) -> String {
        REQUIRED_COLS[..DEDUPE_COLS]
            .iter()
            .map(|f| self.get(f).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn columns() -> Arc<Columns> {
        Arc::new(Columns::new(
            ["Gene", "Chromosome", "Position (GRCh37)", "Ref.", "Alt.", "Type", "Variant"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ))
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    fn test_snv_keeps_declared_position(columns: Arc<Columns>) {
        let record = ExomeRecord::from_row(
            columns,
            row(&["BRAF", "chr7", "140453136", "A", "T", "SNV", ""]),
            "a.txt",
            true,
        )
        .unwrap();

        assert_eq!(record.indexed_position, 140453136);
        assert_eq!(record.variant(), None);
        assert_eq!(record.frequency(), None);
    }

    #[rstest]
    fn test_deletion_is_shifted(columns: Arc<Columns>) {
        let record = ExomeRecord::from_row(
            columns.clone(),
            row(&["EGFR", "chr7", "100", "AGG", "-", "DEL", "EGFR del"]),
            "a.txt",
            true,
        )
        .unwrap();
        assert_eq!(record.position, 100);
        assert_eq!(record.indexed_position, 101);
        assert_eq!(record.variant(), Some("EGFR del"));

        let raw = ExomeRecord::from_row(
            columns,
            row(&["EGFR", "chr7", "100", "AGG", "-", "DEL", ""]),
            "a.txt",
            false,
        )
        .unwrap();
        assert_eq!(raw.indexed_position, 100);
    }

    #[rstest]
    #[case(&["KIT", "chr4", "n/a", "A", "T", "SNV", ""])]
    #[case(&["KIT", "chr4", "", "A", "T", "SNV", ""])]
    #[case(&["KIT", "chr4"])]
    fn test_rows_without_position_are_rejected(columns: Arc<Columns>, #[case] cells: &[&str]) {
        assert!(ExomeRecord::from_row(columns, row(cells), "a.txt", true).is_none());
    }

    #[rstest]
    fn test_dedupe_key_and_values(columns: Arc<Columns>) {
        let record = ExomeRecord::from_row(
            columns,
            row(&["KRAS", "chr12", "0025398284", "C", "T", "SNV", "KRAS G12D"]),
            "a.txt",
            true,
        )
        .unwrap();

        assert_eq!(record.dedupe_key(), "KRAS\tchr12\t25398284\tC\tT\tSNV");
        let fields: Vec<String> = vec!["Gene".into(), "Zygosity".into(), "Position (GRCh37)".into()];
        assert_eq!(record.values_for(&fields), vec!["KRAS", "", "25398284"]);
    }
}
