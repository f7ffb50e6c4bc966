use std::cmp::Reverse;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};

use hemeqc_core::Result;
use hemeqc_core::models::{Columns, TabularFile};
use hemeqc_core::utils::parse_position;
use hemeqc_exome::{Confirmation, ExomeData};

use crate::consts::*;

///
/// One data row of a panel report.
///
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub chromosome: String,
    /// `None` when the position cell is missing or not a number; such rows
    /// never match anything in the exome data.
    pub position: Option<u32>,
    values: Vec<String>,
}

///
/// A targeted-panel mutation report.
///
#[derive(Debug, Clone)]
pub struct VariantReport {
    pub path: Option<PathBuf>,
    pub header_lines: Vec<String>,
    columns: Arc<Columns>,
    rows: Vec<ReportRow>,
    missing_fields: Vec<String>,
}

impl VariantReport {
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn missing_fields(&self) -> &[String] {
        &self.missing_fields
    }

    /// Cell of `row` for `field`; empty when the report has no such column.
    pub fn value<'a>(&'a self, row: &'a ReportRow, field: &str) -> &'a str {
        self.columns.get(&row.values, field).unwrap_or_default()
    }

    ///
    /// Look every row up in the exome data, in report order.
    ///
    pub fn annotate(&self, exome: &ExomeData) -> Vec<Confirmation> {
        self.rows
            .iter()
            .map(|row| match row.position {
                Some(position) => exome.confirm(&row.chromosome, position),
                None => Confirmation::Absent,
            })
            .collect()
    }

    ///
    /// Write the report back out with one extra column holding each row's
    /// annotation (`""`, `IN_EXOME` or `VERIFIED - ...`). Returns the number
    /// of data rows written.
    ///
    pub fn write_annotated_report<W: Write>(
        &self,
        writer: &mut W,
        exome: &ExomeData,
    ) -> std::io::Result<usize> {
        let mut header: Vec<&str> = self.columns.names().iter().map(|s| s.as_str()).collect();
        header.push(ANNOTATION_FIELD);
        writeln!(writer, "{}", header.join("\t"))?;

        for (row, confirmation) in self.rows.iter().zip(self.annotate(exome)) {
            let mut values: Vec<&str> = self
                .columns
                .names()
                .iter()
                .map(|f| self.value(row, f))
                .collect();
            let annotation = confirmation.annotation();
            values.push(&annotation);
            writeln!(writer, "{}", values.join("\t"))?;
        }

        Ok(self.rows.len())
    }

    ///
    /// Columns of the truth file, before renaming: the required report
    /// columns, the annotation, the truth tier, and the artifact flag when
    /// the report has one.
    ///
    pub fn truth_fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = REQUIRED_COLS.to_vec();
        fields.push(ANNOTATION_FIELD);
        fields.push(EXPECTED_FIELD);
        if self.columns.contains(ARTIFACT_FIELD) {
            fields.push(ARTIFACT_FIELD);
        }
        fields
    }

    ///
    /// Write the truth file: renamed header, then every row ranked by truth
    /// tier (highest first), gene name, and position.
    ///
    pub fn write_truth_file<W: Write>(
        &self,
        writer: &mut W,
        exome: &ExomeData,
    ) -> std::io::Result<usize> {
        let fields = self.truth_fields();
        let header: Vec<&str> = fields.iter().map(|f| truth_field_name(f)).collect();
        writeln!(writer, "{}", header.join("\t"))?;

        let mut ranked: Vec<(&ReportRow, Confirmation)> =
            self.rows.iter().zip(self.annotate(exome)).collect();
        ranked.sort_by_cached_key(|(row, confirmation)| {
            (
                Reverse(confirmation.tier()),
                self.value(row, GENE_FIELD).to_string(),
                row.position.unwrap_or(u32::MAX),
            )
        });

        for (row, confirmation) in &ranked {
            let values: Vec<String> = fields
                .iter()
                .map(|f| match *f {
                    ANNOTATION_FIELD => confirmation.truth_label(),
                    EXPECTED_FIELD => confirmation.tier().to_string(),
                    other => self.value(row, other).to_string(),
                })
                .collect();
            writeln!(writer, "{}", values.join("\t"))?;
        }

        Ok(ranked.len())
    }
}

impl From<TabularFile> for VariantReport {
    fn from(table: TabularFile) -> Self {
        let name = table.name();

        let columns = match table.columns {
            Some(columns) => columns,
            None => {
                warn!("  {}: no column header line found", name);
                Arc::new(Columns::new(Vec::new()))
            }
        };

        let missing_fields: Vec<String> = match columns.is_empty() {
            true => Vec::new(),
            false => columns
                .missing(&REQUIRED_COLS)
                .into_iter()
                .map(|c| c.to_string())
                .collect(),
        };
        for column in &missing_fields {
            warn!("  missing {}", column);
        }

        let rows: Vec<ReportRow> = table
            .rows
            .into_iter()
            .map(|values| {
                let chromosome = columns.get(&values, CHROM_FIELD).unwrap_or_default().to_string();
                let raw_position = columns.get(&values, POS_FIELD).unwrap_or_default();
                let position = parse_position(raw_position.trim());
                if position.is_none() {
                    warn!(
                        "  {}: position {:?} is not a number, row left unannotated",
                        name, raw_position
                    );
                }
                ReportRow {
                    chromosome,
                    position,
                    values,
                }
            })
            .collect();

        info!("  {}: {} variants", name, rows.len());

        VariantReport {
            path: table.path,
            header_lines: table.header_lines,
            columns,
            rows,
            missing_fields,
        }
    }
}

impl TryFrom<&Path> for VariantReport {
    type Error = hemeqc_core::HemeQcError;

    ///
    /// Read a panel report (tab separated text, optionally gzip'd).
    ///
    fn try_from(value: &Path) -> Result<Self> {
        let table = TabularFile::read(value, HEADER_MARKER)?;
        Ok(VariantReport::from(table))
    }
}

impl TryFrom<&str> for VariantReport {
    type Error = hemeqc_core::HemeQcError;

    fn try_from(value: &str) -> Result<Self> {
        VariantReport::try_from(Path::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use hemeqc_exome::LoadOptions;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data")
            .join(file_name)
    }

    #[fixture]
    fn exome() -> ExomeData {
        ExomeData::from_files(
            &[
                get_test_path("exome/exome_a.txt"),
                get_test_path("exome/exome_b.txt"),
            ],
            LoadOptions::default(),
        )
        .unwrap()
    }

    #[fixture]
    fn report() -> VariantReport {
        VariantReport::try_from(get_test_path("report/hd701_report.txt").as_path()).unwrap()
    }

    #[rstest]
    fn test_read_report(report: VariantReport) {
        assert_eq!(report.len(), 6);
        assert!(report.missing_fields().is_empty());
        assert_eq!(report.header_lines.len(), 3);
        assert_eq!(report.rows()[5].position, None);
    }

    #[rstest]
    fn test_annotate(report: VariantReport, exome: ExomeData) {
        let labels: Vec<String> = report
            .annotate(&exome)
            .iter()
            .map(|c| c.annotation())
            .collect();

        assert_eq!(
            labels,
            vec![
                "VERIFIED - KRAS G12D, 6.0%",
                "IN_EXOME",
                "",
                "VERIFIED - TP53 R273C",
                "VERIFIED - BRAF V600E, 10.5%",
                "",
            ]
        );
    }

    #[rstest]
    fn test_write_annotated_report(report: VariantReport, exome: ExomeData) {
        let mut out = Vec::new();
        let n = report.write_annotated_report(&mut out, &exome).unwrap();
        assert_eq!(n, 6);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Gene\tChr\tPosition\tRef Transcript\tRef\tVar\tCDS Change\tAA Change\tWhitelist\tArtifact?\tDepth\tHorizon"
        );
        assert_eq!(
            lines[2],
            "NPM1\tchr5\t170837544\tNM_002520\t-\tTCTG\tc.860_863dupTCTG\tp.W288fs\tyes\t\t900\tIN_EXOME"
        );
    }

    #[rstest]
    fn test_write_truth_file(report: VariantReport, exome: ExomeData) {
        let mut out = Vec::new();
        report.write_truth_file(&mut out, &exome).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "gene\tchr\tposition\tref_transcript\tref\tvar\tHGVS\tprotein\twhitelist\thorizon\tis_expected\tartifact"
        );

        let order: Vec<&str> = lines[1..]
            .iter()
            .map(|l| l.split('\t').next().unwrap())
            .collect();
        assert_eq!(order, vec!["BRAF", "KRAS", "TP53", "NPM1", "ASXL1", "FLT3"]);

        assert_eq!(
            lines[1],
            "BRAF\tchr7\t140453136\tNM_004333\tA\tT\tc.1799T>A\tp.V600E\tyes\tVerified - 10.5%\t3\t"
        );
        assert_eq!(
            lines[3],
            "TP53\tchr17\t7577120\tNM_000546\tC\tT\tc.817C>T\tp.R273C\tyes\tVerified\t3\t"
        );
        assert_eq!(
            lines[4],
            "NPM1\tchr5\t170837544\tNM_002520\t-\tTCTG\tc.860_863dupTCTG\tp.W288fs\tyes\tconfirmed in parental cell line\t2\t"
        );
        assert_eq!(
            lines[5],
            "ASXL1\tchr20\t31022441\tNM_015338\t-\tG\tc.1934dupG\tp.G646fs\tno\t\t0\tyes"
        );
    }

    #[rstest]
    fn test_truth_ties_sort_by_position(exome: ExomeData) {
        let text = "Gene\tChr\tPosition\n\
                    GATA2\tchr3\t128200100\n\
                    GATA2\tchr3\t9\n\
                    ABL1\tchr9\t133738300\n";
        let report = VariantReport::from(TabularFile::from_reader(Cursor::new(text), "Gene").unwrap());

        let mut out = Vec::new();
        report.write_truth_file(&mut out, &exome).unwrap();
        let text = String::from_utf8(out).unwrap();
        let positions: Vec<&str> = text
            .lines()
            .skip(1)
            .map(|l| l.split('\t').nth(2).unwrap())
            .collect();

        assert_eq!(positions, vec!["133738300", "9", "128200100"]);
        // no artifact column in this report
        assert_eq!(text.lines().next().unwrap().split('\t').count(), 11);
        assert_eq!(report.missing_fields().len(), 6);
    }

    #[rstest]
    fn test_report_without_header_line(exome: ExomeData) {
        let report =
            VariantReport::from(TabularFile::from_reader(Cursor::new("no\tcolumns\n"), "Gene").unwrap());
        assert!(report.is_empty());

        let mut out = Vec::new();
        report.write_annotated_report(&mut out, &exome).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Horizon\n");
    }
}
