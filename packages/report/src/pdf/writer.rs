//! Low-level PDF 1.4 serialization: numbered objects, streams, xref and trailer.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::ReportError;

/// Appends objects to a byte buffer and remembers where each one starts.
///
/// Ids are handed out by [`reserve`](Self::reserve) so that objects can refer to
/// each other before they are written; the body order in the file is free.
pub struct PdfWriter {
    buf: Vec<u8>,
    offsets: Vec<Option<usize>>,
}

impl PdfWriter {
    pub fn new() -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    /// Allocate the next object id.
    pub fn reserve(&mut self) -> usize {
        self.offsets.push(None);
        self.offsets.len()
    }

    /// Write `id 0 obj <body> endobj`.
    pub fn object(&mut self, id: usize, body: &str) {
        self.begin(id);
        self.buf.extend_from_slice(body.as_bytes());
        self.buf.extend_from_slice(b"\nendobj\n");
    }

    /// Write a stream object, Flate-compressed when `compress` is set.
    pub fn stream(&mut self, id: usize, data: &[u8], compress: bool) -> Result<(), ReportError> {
        let (data, filter) = if compress {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(data).map_err(ReportError::Compress)?;
            (encoder.finish().map_err(ReportError::Compress)?, " /Filter /FlateDecode")
        } else {
            (data.to_vec(), "")
        };

        self.begin(id);
        self.buf
            .extend_from_slice(format!("<< /Length {}{} >>\nstream\n", data.len(), filter).as_bytes());
        self.buf.extend_from_slice(&data);
        self.buf.extend_from_slice(b"\nendstream\nendobj\n");
        Ok(())
    }

    fn begin(&mut self, id: usize) {
        if let Some(slot) = id.checked_sub(1).and_then(|i| self.offsets.get_mut(i)) {
            *slot = Some(self.buf.len());
        }
        self.buf.extend_from_slice(format!("{id} 0 obj\n").as_bytes());
    }

    /// Append the cross-reference table and trailer.
    pub fn finish(mut self, root: usize, info: usize) -> Result<Vec<u8>, ReportError> {
        let xref_offset = self.buf.len();
        let size = self.offsets.len() + 1;

        let mut xref = format!("xref\n0 {size}\n0000000000 65535 f \n");
        for (i, offset) in self.offsets.iter().enumerate() {
            let offset = offset.ok_or(ReportError::MissingObject(i + 1))?;
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {size} /Root {root} 0 R /Info {info} 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n"
        ));
        self.buf.extend_from_slice(xref.as_bytes());
        Ok(self.buf)
    }
}

/// Encode bytes as a PDF literal string, escaping delimiters and non-ASCII.
pub fn literal_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('(');
    for &b in bytes {
        match b {
            b'(' | b')' | b'\\' => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7E => out.push(b as char),
            _ => out.push_str(&format!("\\{b:03o}")),
        }
    }
    out.push(')');
    out
}

/// Compact decimal for content streams: `12.5`, `40`, `0.161`.
pub fn number(value: f32) -> String {
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_string_escapes() {
        assert_eq!(literal_string(b"plain"), "(plain)");
        assert_eq!(literal_string(b"(a)\\b"), "(\\(a\\)\\\\b)");
        assert_eq!(literal_string(b"Caf\xE9"), "(Caf\\351)");
    }

    #[test]
    fn test_number() {
        assert_eq!(number(40.0), "40");
        assert_eq!(number(12.5), "12.5");
        assert_eq!(number(0.16078), "0.161");
        assert_eq!(number(-0.0001), "0");
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).rposition(|w| w == needle)
    }

    #[test]
    fn test_xref_offsets() {
        let mut writer = PdfWriter::new();
        let catalog = writer.reserve();
        let pages = writer.reserve();
        assert_eq!((catalog, pages), (1, 2));
        // Written out of order on purpose.
        writer.object(pages, "<< /Type /Pages /Kids [] /Count 0 >>");
        writer.object(catalog, "<< /Type /Catalog /Pages 2 0 R >>");
        let bytes = writer.finish(catalog, pages).unwrap();
        assert!(bytes.ends_with(b"%%EOF\n"));

        let marker = find(&bytes, b"startxref\n").unwrap() + b"startxref\n".len();
        let tail = std::str::from_utf8(&bytes[marker..]).unwrap();
        let start: usize = tail.lines().next().unwrap().parse().unwrap();
        assert!(bytes[start..].starts_with(b"xref\n0 3\n"));

        let entries = start + b"xref\n0 3\n".len();
        for (n, entry) in bytes[entries..].chunks(20).take(3).enumerate().skip(1) {
            let offset: usize = std::str::from_utf8(&entry[..10]).unwrap().parse().unwrap();
            assert!(bytes[offset..].starts_with(format!("{n} 0 obj").as_bytes()));
        }
    }

    #[test]
    fn test_unwritten_object_is_an_error() {
        let mut writer = PdfWriter::new();
        let catalog = writer.reserve();
        let dangling = writer.reserve();
        writer.object(catalog, "<< /Type /Catalog >>");
        assert!(matches!(
            writer.finish(catalog, catalog),
            Err(ReportError::MissingObject(id)) if id == dangling
        ));
    }
}
