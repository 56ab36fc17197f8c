//! Tabular report model and the generic generator behind both exports.

use crate::error::ReportError;
use crate::layout::{self, Page, TableStyle};
use crate::pdf::{self, PdfOptions};

/// An exported file: fixed name plus its bytes.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One titled table, ready to be laid out and serialized.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportDocument {
    title: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    file_name: String,
}

impl ReportDocument {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Body rows in input order, each exactly `columns().len()` cells wide.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Split the table over A4 pages.
    pub fn layout(&self) -> Vec<Page> {
        layout::layout_table(&self.title, &self.columns, &self.rows, &TableStyle::default())
    }

    /// Serialize to PDF bytes.
    pub fn to_pdf(&self, options: &PdfOptions) -> Result<Vec<u8>, ReportError> {
        let pages = self.layout();
        tracing::debug!(
            "rendering {:?}: {} rows on {} page(s)",
            self.title,
            self.rows.len(),
            pages.len()
        );
        pdf::write_document(&self.title, &pages, options)
    }

    /// Serialize with default options and attach the file name.
    pub fn to_file(&self) -> Result<ReportFile, ReportError> {
        Ok(ReportFile {
            file_name: self.file_name.clone(),
            bytes: self.to_pdf(&PdfOptions::default())?,
        })
    }
}

/// Build a report table from any ordered records.
///
/// `row_mapper` turns one record into one display string per column, in header
/// order. Rows are not validated: short rows are padded with empty cells and
/// surplus cells are dropped, so a malformed record never fails the report.
pub fn generate_report<I, F>(
    title: &str,
    columns: &[&str],
    records: I,
    mut row_mapper: F,
) -> ReportDocument
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Vec<String>,
{
    let width = columns.len();
    let rows = records
        .into_iter()
        .map(|record| {
            let mut cells = row_mapper(record);
            cells.resize(width, String::new());
            cells
        })
        .collect();

    ReportDocument {
        title: title.to_string(),
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows,
        file_name: "report.pdf".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_input_order() {
        let records = ["b", "a", "c"];
        let doc = generate_report("Letters", &["Letter", "Upper"], records, |r| {
            vec![r.to_string(), r.to_uppercase()]
        });
        assert_eq!(doc.title(), "Letters");
        assert_eq!(doc.columns(), ["Letter", "Upper"]);
        assert_eq!(
            doc.rows(),
            [
                vec!["b".to_string(), "B".to_string()],
                vec!["a".to_string(), "A".to_string()],
                vec!["c".to_string(), "C".to_string()],
            ]
        );
    }

    #[test]
    fn test_ragged_rows_are_normalized() {
        let doc = generate_report("T", &["A", "B", "C"], [1, 2], |n| {
            if n == 1 {
                vec!["only".to_string()]
            } else {
                vec!["1".into(), "2".into(), "3".into(), "4".into()]
            }
        });
        assert_eq!(doc.rows()[0], ["only", "", ""]);
        assert_eq!(doc.rows()[1], ["1", "2", "3"]);
    }

    #[test]
    fn test_empty_records_give_header_only() {
        let doc = generate_report("Empty", &["A"], Vec::<u8>::new(), |_| vec![]);
        assert!(doc.rows().is_empty());
        let pages = doc.layout();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].body_rows, 0..0);

        let file = doc.with_file_name("empty.pdf").to_file().unwrap();
        assert_eq!(file.file_name, "empty.pdf");
        assert!(file.bytes.starts_with(b"%PDF-"));
    }
}
