//! # Table layout
//!
//! Places a titled table on A4 portrait pages, the way a striped auto-table does:
//!
//! - title in 16 pt Helvetica at (14 mm, 15 mm) on the first page;
//! - the table starts at 20 mm on the first page and at the top margin on later ones;
//! - column widths are proportional to each column's widest content, stretched or
//!   shrunk to span the width between the margins, never narrower than the longest
//!   word when there is room for that;
//! - cell text wraps on spaces and breaks words that still do not fit;
//! - a row that does not fit above the bottom margin moves to a new page, and the
//!   header row is repeated at the top of every page; a row taller than a whole
//!   page is split at the bottom margin and continues on the next page.
//!
//! Coordinates are PDF points with the origin at the **top-left** corner; the
//! writer flips them.

use std::ops::Range;

use crate::pdf::fonts::Font;

pub const PT_PER_MM: f32 = 72.0 / 25.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    /// `y` is the baseline.
    Text {
        x: f32,
        y: f32,
        size: f32,
        font: Font,
        color: Rgb,
        text: String,
    },
}

/// One laid-out page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
    /// Indexes of the body rows drawn on this page.
    pub body_rows: Range<usize>,
}

impl Page {
    /// Every text run on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::FillRect { .. } => None,
        })
    }
}

/// Page geometry and cell styling.
#[derive(Clone, Debug, PartialEq)]
pub struct TableStyle {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub title_x: f32,
    pub title_y: f32,
    pub title_size: f32,
    pub start_y: f32,
    pub font_size: f32,
    pub line_height: f32,
    pub cell_padding: f32,
    pub head_fill: Rgb,
    pub head_text: Rgb,
    pub body_text: Rgb,
    pub stripe_fill: Rgb,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            page_width: 595.28,
            page_height: 841.89,
            margin: 40.0,
            title_x: 14.0 * PT_PER_MM,
            title_y: 15.0 * PT_PER_MM,
            title_size: 16.0,
            start_y: 20.0 * PT_PER_MM,
            font_size: 10.0,
            line_height: 1.15,
            cell_padding: 5.0,
            head_fill: Rgb(41, 128, 185),
            head_text: Rgb::WHITE,
            body_text: Rgb(80, 80, 80),
            stripe_fill: Rgb(245, 245, 245),
        }
    }
}

impl TableStyle {
    fn table_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    fn line_advance(&self) -> f32 {
        self.font_size * self.line_height
    }

    fn row_height(&self, lines: usize) -> f32 {
        lines.max(1) as f32 * self.line_advance() + 2.0 * self.cell_padding
    }

    /// Text lines that fit in `space` points of row height.
    fn lines_fitting(&self, space: f32) -> usize {
        let room = space - 2.0 * self.cell_padding;
        if room <= 0.0 {
            0
        } else {
            (room / self.line_advance()).floor() as usize
        }
    }
}

/// Lay out `rows` under `columns`, spilling onto as many pages as needed.
pub fn layout_table(
    title: &str,
    columns: &[String],
    rows: &[Vec<String>],
    style: &TableStyle,
) -> Vec<Page> {
    let widths = column_widths(columns, rows, style);
    let head = wrap_row(columns, &widths, Font::HelveticaBold, style);

    let mut pages = Vec::new();
    let mut page = Page::default();
    page.ops.push(DrawOp::Text {
        x: style.title_x,
        y: style.title_y,
        size: style.title_size,
        font: Font::Helvetica,
        color: Rgb::BLACK,
        text: title.to_string(),
    });
    let mut y = draw_row(&mut page, &head, &widths, style.start_y, RowKind::Head, style);
    let bottom = style.page_height - style.margin;
    let fresh_page_space = bottom - style.margin - style.row_height(max_lines(&head));

    for (index, cells) in rows.iter().enumerate() {
        let mut lines = wrap_row(cells, &widths, Font::Helvetica, style);

        loop {
            let height = style.row_height(max_lines(&lines));
            let page_has_rows = !page.body_rows.is_empty();

            if y + height <= bottom {
                if !page_has_rows {
                    page.body_rows = index..index;
                }
                y = draw_row(&mut page, &lines, &widths, y, RowKind::Body(index), style);
                page.body_rows.end = index + 1;
                break;
            }

            // Rows that fit on a page of their own move there whole; taller
            // rows are split at the bottom margin and continue overleaf.
            let fits = style.lines_fitting(bottom - y);
            if page_has_rows && (height <= fresh_page_space || fits == 0) {
                y = next_page(&mut pages, &mut page, &head, &widths, style);
                continue;
            }

            let rest = split_lines(&mut lines, fits.max(1));
            if !page_has_rows {
                page.body_rows = index..index;
            }
            draw_row(&mut page, &lines, &widths, y, RowKind::Body(index), style);
            page.body_rows.end = index + 1;
            lines = rest;
            y = next_page(&mut pages, &mut page, &head, &widths, style);
        }
    }

    pages.push(page);
    pages
}

/// Close `page` and start the next one under a repeated header.
fn next_page(
    pages: &mut Vec<Page>,
    page: &mut Page,
    head: &[Vec<String>],
    widths: &[f32],
    style: &TableStyle,
) -> f32 {
    pages.push(std::mem::take(page));
    draw_row(page, head, widths, style.margin, RowKind::Head, style)
}

/// Keep the first `keep` lines of every cell and return the remainder.
fn split_lines(lines: &mut [Vec<String>], keep: usize) -> Vec<Vec<String>> {
    lines
        .iter_mut()
        .map(|cell| cell.split_off(keep.min(cell.len())))
        .collect()
}

#[derive(Clone, Copy)]
enum RowKind {
    Head,
    Body(usize),
}

/// Draw one row whose top edge is at `top`; returns the bottom edge.
fn draw_row(
    page: &mut Page,
    lines: &[Vec<String>],
    widths: &[f32],
    top: f32,
    kind: RowKind,
    style: &TableStyle,
) -> f32 {
    let height = style.row_height(max_lines(lines));
    let (fill, font, color) = match kind {
        RowKind::Head => (Some(style.head_fill), Font::HelveticaBold, style.head_text),
        RowKind::Body(i) if i % 2 == 0 => (Some(style.stripe_fill), Font::Helvetica, style.body_text),
        RowKind::Body(_) => (None, Font::Helvetica, style.body_text),
    };

    if let Some(color) = fill {
        page.ops.push(DrawOp::FillRect {
            x: style.margin,
            y: top,
            width: style.table_width(),
            height,
            color,
        });
    }

    let first_baseline = top + style.cell_padding + style.line_advance() - 0.3 * style.font_size;
    let mut x = style.margin;
    for (cell, width) in lines.iter().zip(widths) {
        for (n, line) in cell.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            page.ops.push(DrawOp::Text {
                x: x + style.cell_padding,
                y: first_baseline + n as f32 * style.line_advance(),
                size: style.font_size,
                font,
                color,
                text: line.clone(),
            });
        }
        x += width;
    }

    top + height
}

fn max_lines(lines: &[Vec<String>]) -> usize {
    lines.iter().map(Vec::len).max().unwrap_or(1)
}

fn wrap_row(cells: &[String], widths: &[f32], font: Font, style: &TableStyle) -> Vec<Vec<String>> {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| wrap_text(cell, width - 2.0 * style.cell_padding, font, style.font_size))
        .collect()
}

/// Greedy word wrap; explicit newlines are kept and over-long words are split.
pub fn wrap_text(text: &str, max_width: f32, font: Font, size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if font.text_width(&candidate, size) <= max_width {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if font.text_width(word, size) <= max_width {
                current = word.to_string();
            } else {
                let mut pieces = break_word(word, max_width, font, size);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }
        lines.push(current);
    }
    lines
}

fn break_word(word: &str, max_width: f32, font: Font, size: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for c in word.chars() {
        current.push(c);
        if font.text_width(&current, size) > max_width && current.chars().count() > 1 {
            current.pop();
            pieces.push(std::mem::replace(&mut current, c.to_string()));
        }
    }
    pieces.push(current);
    pieces
}

/// Column widths summing to the table width.
fn column_widths(columns: &[String], rows: &[Vec<String>], style: &TableStyle) -> Vec<f32> {
    if columns.is_empty() {
        return Vec::new();
    }
    let padding = 2.0 * style.cell_padding;
    let measure = |text: &str, font: Font| {
        text.split('\n')
            .map(|line| font.text_width(line, style.font_size))
            .fold(0.0_f32, f32::max)
    };
    let longest_word = |text: &str, font: Font| {
        text.split_whitespace()
            .map(|word| font.text_width(word, style.font_size))
            .fold(0.0_f32, f32::max)
    };

    let mut natural: Vec<f32> = columns
        .iter()
        .map(|c| measure(c, Font::HelveticaBold) + padding)
        .collect();
    let mut minimum: Vec<f32> = columns
        .iter()
        .map(|c| longest_word(c, Font::HelveticaBold) + padding)
        .collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns.len()) {
            natural[i] = natural[i].max(measure(cell, Font::Helvetica) + padding);
            minimum[i] = minimum[i].max(longest_word(cell, Font::Helvetica) + padding);
        }
    }

    distribute(&natural, &minimum, style.table_width())
}

/// Scale `natural` to `total`, holding columns at `minimum` where possible.
fn distribute(natural: &[f32], minimum: &[f32], total: f32) -> Vec<f32> {
    let natural_sum: f32 = natural.iter().sum();
    if natural_sum <= total {
        return natural.iter().map(|w| w * total / natural_sum).collect();
    }

    let minimum_sum: f32 = minimum.iter().sum();
    if minimum_sum >= total {
        return minimum.iter().map(|w| w * total / minimum_sum).collect();
    }

    let mut pinned = vec![false; natural.len()];
    loop {
        let pinned_width: f32 = (0..natural.len())
            .filter(|&i| pinned[i])
            .map(|i| minimum[i])
            .sum();
        let free_natural: f32 = (0..natural.len())
            .filter(|&i| !pinned[i])
            .map(|i| natural[i])
            .sum();
        let scale = (total - pinned_width) / free_natural;

        let mut changed = false;
        for i in 0..natural.len() {
            if !pinned[i] && natural[i] * scale < minimum[i] {
                pinned[i] = true;
                changed = true;
            }
        }
        if !changed {
            return (0..natural.len())
                .map(|i| if pinned[i] { minimum[i] } else { natural[i] * scale })
                .collect();
        }
    }
}
