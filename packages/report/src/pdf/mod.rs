//! # PDF output
//!
//! Turns laid-out [`Page`]s into a PDF 1.4 file without any external PDF
//! library.
//!
//! - `writer`: object table, streams, xref and trailer
//! - `fonts`: the two standard Type1 fonts used (metrics + WinAnsi encoding)
//!
//! Object layout of a document with `n` pages:
//!
//! | Id | Object |
//! |----|--------|
//! | 1 | Catalog |
//! | 2 | Pages tree |
//! | 3, 4 | Helvetica, Helvetica-Bold |
//! | 5 | Info dictionary (title, producer) |
//! | 6.. | per page: page dictionary, then its content stream |

pub mod fonts;
mod writer;

use crate::error::ReportError;
use crate::layout::{DrawOp, Page, Rgb};
use fonts::{encode_win_ansi, Font};
use writer::{literal_string, number, PdfWriter};

const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const PRODUCER: &str = "bookings-admin report";

/// Serialization switches.
#[derive(Clone, Debug, PartialEq)]
pub struct PdfOptions {
    /// Flate-compress page content streams.
    pub compress: bool,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self { compress: true }
    }
}

/// Write every page into one PDF file.
pub fn write_document(title: &str, pages: &[Page], options: &PdfOptions) -> Result<Vec<u8>, ReportError> {
    let mut pdf = PdfWriter::new();
    let catalog = pdf.reserve();
    let pages_root = pdf.reserve();
    let regular = pdf.reserve();
    let bold = pdf.reserve();
    let info = pdf.reserve();

    let page_ids: Vec<(usize, usize)> = pages.iter().map(|_| (pdf.reserve(), pdf.reserve())).collect();

    pdf.object(catalog, &format!("<< /Type /Catalog /Pages {pages_root} 0 R >>"));

    let kids: Vec<String> = page_ids.iter().map(|(page, _)| format!("{page} 0 R")).collect();
    pdf.object(
        pages_root,
        &format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_ids.len()
        ),
    );

    for (id, font) in [(regular, Font::Helvetica), (bold, Font::HelveticaBold)] {
        pdf.object(
            id,
            &format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                font.base_font()
            ),
        );
    }

    pdf.object(
        info,
        &format!(
            "<< /Title {} /Producer {} >>",
            literal_string(&encode_win_ansi(title)),
            literal_string(PRODUCER.as_bytes())
        ),
    );

    for (page, (page_id, content_id)) in pages.iter().zip(&page_ids) {
        pdf.object(
            *page_id,
            &format!(
                "<< /Type /Page /Parent {pages_root} 0 R /MediaBox [0 0 {} {}] \
                 /Resources << /Font << /{} {regular} 0 R /{} {bold} 0 R >> >> \
                 /Contents {content_id} 0 R >>",
                number(PAGE_WIDTH),
                number(PAGE_HEIGHT),
                Font::Helvetica.resource_name(),
                Font::HelveticaBold.resource_name(),
            ),
        );
        pdf.stream(*content_id, content_stream(page).as_bytes(), options.compress)?;
    }

    pdf.finish(catalog, info)
}

/// Page drawing operators; flips the layout's top-left origin to PDF's bottom-left.
fn content_stream(page: &Page) -> String {
    let mut out = String::new();
    for op in &page.ops {
        match op {
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                out.push_str(&format!(
                    "{} rg\n{} {} {} {} re\nf\n",
                    rgb(*color),
                    number(*x),
                    number(PAGE_HEIGHT - y - height),
                    number(*width),
                    number(*height)
                ));
            }
            DrawOp::Text {
                x,
                y,
                size,
                font,
                color,
                text,
            } => {
                out.push_str(&format!(
                    "BT\n/{} {} Tf\n{} rg\n{} {} Td\n{} Tj\nET\n",
                    font.resource_name(),
                    number(*size),
                    rgb(*color),
                    number(*x),
                    number(PAGE_HEIGHT - y),
                    literal_string(&encode_win_ansi(text))
                ));
            }
        }
    }
    out
}

fn rgb(Rgb(r, g, b): Rgb) -> String {
    format!(
        "{} {} {}",
        number(r as f32 / 255.0),
        number(g as f32 / 255.0),
        number(b as f32 / 255.0)
    )
}
