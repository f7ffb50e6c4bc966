use std::collections::HashMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::errors::Result;
use crate::utils::{get_dynamic_reader, is_blank_row, read_lines_lossy, split_header, split_row};

///
/// Column names of one table, with a name to index lookup.
///
/// Rows are kept as plain `Vec<String>` aligned with these names; use
/// [`Columns::get`] to read a cell by name. A column the table does not have
/// reads as `None`, a column it has but whose cell is empty reads as
/// `Some("")`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Columns {
    pub fn new(names: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(names.len());
        // a repeated name resolves to its last occurrence
        for (i, name) in names.iter().enumerate() {
            index.insert(name.clone(), i);
        }
        Columns { names, index }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    ///
    /// Read the cell for `name` out of a row. Rows shorter than the column
    /// list behave as if the missing trailing cells were absent.
    ///
    pub fn get<'a>(&self, row: &'a [String], name: &str) -> Option<&'a str> {
        self.position(name)
            .and_then(|i| row.get(i))
            .map(|s| s.as_str())
    }

    ///
    /// Which of the `required` names this table lacks, in the given order.
    ///
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .filter(|name| !self.contains(name))
            .copied()
            .collect()
    }
}

///
/// A tab-delimited table preceded by a free-form header block.
///
/// The column-name line is the first line containing `marker`; everything
/// before it is kept verbatim in `header_lines`. Blank data rows are dropped.
/// When no line contains the marker, `columns` is `None` and there are no
/// rows.
///
#[derive(Debug, Clone)]
pub struct TabularFile {
    pub path: Option<PathBuf>,
    pub header_lines: Vec<String>,
    pub columns: Option<Arc<Columns>>,
    pub rows: Vec<Vec<String>>,
}

impl TabularFile {
    ///
    /// Read a table from disk (plain or gzip'd).
    ///
    /// # Arguments:
    /// - path: path to the table
    /// - marker: a column name that only appears on the column-name line
    pub fn read(path: &Path, marker: &str) -> Result<Self> {
        let reader = get_dynamic_reader(path)?;
        let mut table = TabularFile::from_reader(reader, marker)?;
        table.path = Some(path.to_owned());
        Ok(table)
    }

    pub fn from_reader<R: BufRead>(reader: R, marker: &str) -> Result<Self> {
        let mut header_lines = Vec::new();
        let mut columns: Option<Arc<Columns>> = None;
        let mut rows = Vec::new();

        for line in read_lines_lossy(reader) {
            let line = line?;

            if columns.is_some() {
                let cells = split_row(&line);
                if !is_blank_row(&cells) {
                    rows.push(cells);
                }
            } else if line.contains(marker) {
                columns = Some(Arc::new(Columns::new(split_header(&line))));
            } else {
                header_lines.push(line);
            }
        }

        Ok(TabularFile {
            path: None,
            header_lines,
            columns,
            rows,
        })
    }

    pub fn has_columns(&self) -> bool {
        self.columns.is_some()
    }

    /// Display name of the source, the path when there is one.
    pub fn name(&self) -> String {
        self.path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{Cursor, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn table_text() -> &'static str {
        "Sample HD701\nRun date 2018-04-24\n\nGene\tChr\tPosition\t\n\nBRAF\tchr7\t140453136\nKRAS\tchr12\t25398284\t\n\t\t\n"
    }

    #[rstest]
    fn test_read_table_from_reader(table_text: &str) {
        let table = TabularFile::from_reader(Cursor::new(table_text), "Gene").unwrap();

        assert_eq!(
            table.header_lines,
            vec!["Sample HD701", "Run date 2018-04-24", ""]
        );
        let columns = table.columns.unwrap();
        assert_eq!(columns.names(), &["Gene", "Chr", "Position"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(columns.get(&table.rows[1], "Position"), Some("25398284"));
    }

    #[rstest]
    fn test_table_without_marker_has_no_rows() {
        let table = TabularFile::from_reader(Cursor::new("a\tb\n1\t2\n"), "Gene").unwrap();
        assert!(!table.has_columns());
        assert!(table.rows.is_empty());
        assert_eq!(table.header_lines.len(), 2);
    }

    #[rstest]
    fn test_absent_and_empty_cells_differ() {
        let columns = Columns::new(vec!["Gene".to_string(), "Variant".to_string()]);
        let row = vec!["BRAF".to_string(), "".to_string()];

        assert_eq!(columns.get(&row, "Variant"), Some(""));
        assert_eq!(columns.get(&row, "Type"), None);
        assert_eq!(columns.get(&row[..1], "Variant"), None);
    }

    #[rstest]
    fn test_missing_required_columns() {
        let columns = Columns::new(vec!["Gene".to_string(), "Chr".to_string()]);
        assert_eq!(columns.missing(&["Gene", "Position", "Ref"]), vec!["Position", "Ref"]);
    }

    #[rstest]
    fn test_table_with_latin1_cells() {
        let bytes = b"Lab: K\xF6ln\nGene\tComment\nTP53\tnach R\xFCcksprache\n".to_vec();
        let table = TabularFile::from_reader(Cursor::new(bytes), "Gene").unwrap();

        assert_eq!(table.header_lines, vec!["Lab: K\u{FFFD}ln"]);
        let columns = table.columns.unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(
            columns.get(&table.rows[0], "Comment"),
            Some("nach R\u{FFFD}cksprache")
        );
    }

    #[rstest]
    fn test_read_gzipped_table(table_text: &str) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt.gz");

        let mut encoder = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
        encoder.write_all(table_text.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let table = TabularFile::read(&path, "Gene").unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.path.as_deref(), Some(path.as_path()));
    }
}
