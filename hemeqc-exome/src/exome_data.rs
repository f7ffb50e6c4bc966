use std::collections::BTreeMap;
use std::path::Path;

use fxhash::FxHashMap as HashMap;
use log::{debug, info, warn};

use hemeqc_core::Result;
use hemeqc_core::models::TabularFile;

use crate::confirmation::Confirmation;
use crate::consts::*;
use crate::record::ExomeRecord;

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Key insertions and deletions one base to the right of their declared
    /// position.
    pub normalize_indels: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            normalize_indels: true,
        }
    }
}

/// A required column one of the loaded tables lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    pub filename: String,
    pub column: String,
}

///
/// Exome variant calls from one or more tables, keyed by chromosome and
/// (normalized) position.
///
/// Records sharing a key are kept in load order: file by file, row by row.
/// Lookups that pick "the first" matching record rely on that order.
///
#[derive(Debug, Clone, Default)]
pub struct ExomeData {
    index: HashMap<String, BTreeMap<u32, Vec<ExomeRecord>>>,
    rows_per_file: Vec<(String, usize)>,
    fields: Vec<String>,
    missing_fields: Vec<MissingField>,
    header_lines: Vec<String>,
    options: LoadOptions,
}

impl ExomeData {
    pub fn new(options: LoadOptions) -> Self {
        ExomeData {
            options,
            ..Default::default()
        }
    }

    ///
    /// Load every table in `files`, in order.
    ///
    /// An unreadable file fails the whole load. Bad rows and missing columns
    /// only produce warnings.
    ///
    pub fn from_files<P: AsRef<Path>>(files: &[P], options: LoadOptions) -> Result<Self> {
        let mut data = ExomeData::new(options);
        for file in files {
            data.load_file(file.as_ref())?;
        }
        Ok(data)
    }

    ///
    /// Load one more table. Returns the number of rows kept.
    ///
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        debug!("Parsing {}", path.display());
        let table = TabularFile::read(path, HEADER_MARKER)?;
        Ok(self.add_table(table))
    }

    ///
    /// Index the rows of an already parsed table. Returns the number of rows
    /// kept.
    ///
    pub fn add_table(&mut self, table: TabularFile) -> usize {
        let filename = table.name();
        self.header_lines.extend(table.header_lines);

        let Some(columns) = table.columns else {
            warn!("  {}: no column header line found", filename);
            self.rows_per_file.push((filename, 0));
            return 0;
        };

        debug!("{};", columns.names().join(","));

        for column in columns.missing(&REQUIRED_COLS) {
            warn!("  {}: missing {}", filename, column);
            self.missing_fields.push(MissingField {
                filename: filename.clone(),
                column: column.to_string(),
            });
        }

        // field list is the union over all tables, first seen first
        for name in columns.names() {
            if !self.fields.contains(name) {
                self.fields.push(name.clone());
            }
        }

        let mut kept = 0;
        for row in table.rows {
            let line = row.join(", ");
            match ExomeRecord::from_row(
                columns.clone(),
                row,
                &filename,
                self.options.normalize_indels,
            ) {
                Some(record) => {
                    self.index
                        .entry(record.chromosome.clone())
                        .or_default()
                        .entry(record.indexed_position)
                        .or_default()
                        .push(record);
                    kept += 1;
                }
                None => warn!("LINE: {}", line),
            }
        }

        info!("  {}: {} rows of data parsed", filename, kept);
        self.rows_per_file.push((filename, kept));
        kept
    }

    ///
    /// All records keyed at exactly (`chr`, `position`), in load order.
    ///
    pub fn lookup(&self, chr: &str, position: u32) -> &[ExomeRecord] {
        self.index
            .get(chr)
            .and_then(|positions| positions.get(&position))
            .map(|records| records.as_slice())
            .unwrap_or_default()
    }

    ///
    /// Confirmation status of a variant reported at (`chr`, `position`).
    ///
    /// Every record at the key is checked for a calling allele, not just the
    /// first one; the first record (in load order) that has one wins.
    ///
    pub fn confirm(&self, chr: &str, position: u32) -> Confirmation {
        let records = self.lookup(chr, position);
        if records.is_empty() {
            return Confirmation::Absent;
        }

        for record in records {
            if let Some(allele) = record.variant() {
                let frequency = record.frequency().map(|f| f.to_string());
                if frequency.is_none() {
                    warn!(
                        "no vaf field: {}:{} {} ({})",
                        chr, position, allele, record.filename
                    );
                }
                return Confirmation::Verified {
                    allele: allele.to_string(),
                    frequency,
                };
            }
        }

        Confirmation::Present
    }

    /// Union of column names over all loaded tables, in first-seen order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn missing_fields(&self) -> &[MissingField] {
        &self.missing_fields
    }

    pub fn header_lines(&self) -> &[String] {
        &self.header_lines
    }

    /// Rows kept per table, in load order.
    pub fn rows_per_file(&self) -> &[(String, usize)] {
        &self.rows_per_file
    }

    /// Rows kept from the table named `file` (as given when loading).
    pub fn rows_in(&self, file: &str) -> Option<usize> {
        self.rows_per_file
            .iter()
            .find(|(name, _)| name == file)
            .map(|(_, n)| *n)
    }

    pub fn len(&self) -> usize {
        self.rows_per_file.iter().map(|(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn chromosome_map(&self) -> &HashMap<String, BTreeMap<u32, Vec<ExomeRecord>>> {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/exome")
            .join(file_name)
    }

    fn table(name: &str, text: &str) -> TabularFile {
        let mut table = TabularFile::from_reader(Cursor::new(text), HEADER_MARKER).unwrap();
        table.path = Some(PathBuf::from(name));
        table
    }

    const HEADER: &str = "Gene\tChromosome\tPosition (GRCh37)\tRef.\tAlt.\tType\tVariant\tHGVS DNA change\tHGVS AA change\n";

    #[fixture]
    fn exome() -> ExomeData {
        ExomeData::from_files(
            &[get_test_path("exome_a.txt"), get_test_path("exome_b.txt")],
            LoadOptions::default(),
        )
        .unwrap()
    }

    #[rstest]
    fn test_rows_loaded(exome: ExomeData) {
        let counts: Vec<usize> = exome.rows_per_file().iter().map(|(_, n)| *n).collect();
        // the row with a non-numeric position is dropped
        assert_eq!(counts, vec![5, 3]);
        assert_eq!(exome.len(), 8);
        assert!(exome.missing_fields().is_empty());
        assert_eq!(exome.header_lines().len(), 3);

        let name = get_test_path("exome_b.txt").display().to_string();
        assert_eq!(exome.rows_in(&name), Some(3));
        assert_eq!(exome.rows_in("nope.txt"), None);
    }

    #[rstest]
    fn test_field_union_keeps_first_seen_order(exome: ExomeData) {
        assert_eq!(
            exome.fields(),
            &[
                "Gene",
                "Chromosome",
                "Position (GRCh37)",
                "Ref.",
                "Alt.",
                "Type",
                "Variant",
                "\"Expected Allelic Frequency, %\"",
                "HGVS DNA change",
                "HGVS AA change",
                "Zygosity",
            ]
        );
    }

    #[rstest]
    fn test_snv_indexed_at_declared_position(exome: ExomeData) {
        let hits = exome.lookup("chr7", 140453136);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].gene(), "BRAF");
    }

    #[rstest]
    fn test_indels_indexed_one_base_right(exome: ExomeData) {
        assert!(exome.lookup("chr5", 170837543).is_empty());
        assert_eq!(exome.lookup("chr5", 170837544).len(), 1);

        assert!(exome.lookup("chr7", 55242464).is_empty());
        assert_eq!(exome.lookup("chr7", 55242465)[0].gene(), "EGFR");
    }

    #[rstest]
    fn test_raw_positions_option() {
        let exome = ExomeData::from_files(
            &[get_test_path("exome_a.txt")],
            LoadOptions {
                normalize_indels: false,
            },
        )
        .unwrap();
        assert_eq!(exome.lookup("chr5", 170837543).len(), 1);
    }

    #[rstest]
    fn test_lookup_misses_are_empty(exome: ExomeData) {
        assert!(exome.lookup("chr1", 1).is_empty());
        assert!(exome.lookup("chr22", 500).is_empty());
    }

    #[rstest]
    fn test_collisions_keep_load_order(exome: ExomeData) {
        let hits = exome.lookup("chr12", 25398284);
        let files: Vec<bool> = hits.iter().map(|r| r.filename.ends_with("exome_a.txt")).collect();
        assert_eq!(files, vec![true, false]);
    }

    #[rstest]
    fn test_confirm(exome: ExomeData) {
        assert_eq!(
            exome.confirm("chr12", 25398284),
            Confirmation::Verified {
                allele: "KRAS G12D".to_string(),
                frequency: Some("6.0".to_string()),
            }
        );
        assert_eq!(exome.confirm("chr5", 170837544), Confirmation::Present);
        assert_eq!(exome.confirm("chr5", 170837543), Confirmation::Absent);
    }

    #[rstest]
    fn test_confirming_row_found_after_plain_row(exome: ExomeData) {
        // exome_a has the TP53 row without a calling allele, exome_b with one
        assert_eq!(
            exome.confirm("chr17", 7577120),
            Confirmation::Verified {
                allele: "TP53 R273C".to_string(),
                frequency: None,
            }
        );
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn test_confirmation_regardless_of_file_order(#[case] confirming_first: bool) {
        let plain = table("plain.txt", &format!("{HEADER}GENE1\tchr1\t500\tA\tG\tSNV\t\tc.1A>G\tp.X\n"));
        let confirming = table(
            "confirming.txt",
            &format!("{HEADER}GENE1\tchr1\t500\tA\tG\tSNV\tGENE1 A>G\tc.1A>G\tp.X\n"),
        );

        let mut exome = ExomeData::new(LoadOptions::default());
        if confirming_first {
            exome.add_table(confirming);
            exome.add_table(plain);
        } else {
            exome.add_table(plain);
            exome.add_table(confirming);
        }

        assert_eq!(exome.lookup("chr1", 500).len(), 2);
        assert_eq!(
            exome.confirm("chr1", 500),
            Confirmation::Verified {
                allele: "GENE1 A>G".to_string(),
                frequency: None,
            }
        );
    }

    #[rstest]
    fn test_missing_required_columns_are_recorded() {
        let exome = ExomeData::from_files(&[get_test_path("exome_missing.txt")], LoadOptions::default())
            .unwrap();

        let missing: Vec<&str> = exome.missing_fields().iter().map(|m| m.column.as_str()).collect();
        assert_eq!(missing, vec!["Type", "HGVS DNA change"]);
        assert_eq!(exome.len(), 1);
    }

    #[rstest]
    fn test_table_without_header_line() {
        let mut exome = ExomeData::new(LoadOptions::default());
        let kept = exome.add_table(table("junk.txt", "just\tsome\ttext\n1\t2\t3\n"));

        assert_eq!(kept, 0);
        assert!(exome.fields().is_empty());
    }

    #[rstest]
    fn test_missing_file_is_fatal() {
        let result = ExomeData::from_files(&[get_test_path("nope.txt")], LoadOptions::default());
        assert!(result.is_err());
    }
}
