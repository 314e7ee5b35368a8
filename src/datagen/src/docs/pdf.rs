use std::path::Path;

use lopdf::content::Content;
use lopdf::content::Operation;
use lopdf::dictionary;
use lopdf::Object;
use lopdf::Stream;

use crate::docs::content::Block;
use crate::docs::content::Document;
use crate::error::Result;

// A4 in points.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 50;
const CONTENT_WIDTH: i64 = PAGE_WIDTH - 2 * MARGIN;
// lowest baseline usable for content, the footer sits below it
const BOTTOM: i64 = MARGIN + 20;

const HEADER: &str = "Entertainment Co. - Business Documentation";

const TITLE_SIZE: i64 = 18;
const SECTION_SIZE: i64 = 13;
const BODY_SIZE: i64 = 10;
const TABLE_SIZE: i64 = 8;
const HEADER_SIZE: i64 = 8;
const ROW_HEIGHT: i64 = 16;

#[derive(Clone, Copy)]
enum Face {
    Regular,
    Bold,
    Italic,
}

impl Face {
    fn resource(self) -> &'static str {
        match self {
            Face::Regular => "F1",
            Face::Bold => "F2",
            Face::Italic => "F3",
        }
    }
}

/// Rough Helvetica advance, good enough for wrapping and truncation.
fn text_width(text: &str, size: i64) -> i64 {
    (text.chars().count() as i64 * size * 11) / 20
}

fn chars_fitting(width: i64, size: i64) -> usize {
    ((width * 20) / (size * 11)).max(1) as usize
}

/// Greedy word wrap. Blank lines are kept, overlong words are split.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            out.push(String::new());
            continue;
        }

        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word = word.to_string();
            while word.chars().count() > max_chars {
                if !line.is_empty() {
                    out.push(std::mem::take(&mut line));
                }
                let head: String = word.chars().take(max_chars).collect();
                word = word.chars().skip(max_chars).collect();
                out.push(head);
            }
            if word.is_empty() {
                continue;
            }

            let needed = if line.is_empty() {
                word.chars().count()
            } else {
                line.chars().count() + 1 + word.chars().count()
            };
            if needed > max_chars {
                out.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&word);
        }
        if !line.is_empty() {
            out.push(line);
        }
    }

    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(2);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("..");
    out
}

struct PageWriter {
    pages: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    y: i64,
}

impl PageWriter {
    fn new() -> Self {
        let mut writer = PageWriter {
            pages: Vec::new(),
            ops: Vec::new(),
            y: 0,
        };
        writer.start_page();
        writer
    }

    fn start_page(&mut self) {
        self.y = PAGE_HEIGHT - MARGIN;
        self.text(Face::Italic, HEADER_SIZE, MARGIN, PAGE_HEIGHT - 30, HEADER);
        self.line(MARGIN, PAGE_HEIGHT - 35, PAGE_WIDTH - MARGIN, PAGE_HEIGHT - 35);
    }

    fn finish_page(&mut self) {
        let number = format!("Page {}", self.pages.len() + 1);
        let x = (PAGE_WIDTH - text_width(&number, HEADER_SIZE)) / 2;
        self.text(Face::Italic, HEADER_SIZE, x, 30, &number);
        self.pages.push(std::mem::take(&mut self.ops));
    }

    /// Moves to a fresh page unless `height` still fits above the footer.
    fn ensure(&mut self, height: i64) {
        if self.y - height < BOTTOM {
            self.finish_page();
            self.start_page();
        }
    }

    fn advance(&mut self, height: i64) {
        self.ensure(height);
        self.y -= height;
    }

    fn text(&mut self, face: Face, size: i64, x: i64, y: i64, text: &str) {
        self.ops.push(Operation::new("BT", vec![]));
        self.ops
            .push(Operation::new("Tf", vec![face.resource().into(), size.into()]));
        self.ops.push(Operation::new("Td", vec![x.into(), y.into()]));
        self.ops
            .push(Operation::new("Tj", vec![Object::string_literal(text)]));
        self.ops.push(Operation::new("ET", vec![]));
    }

    fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.ops.push(Operation::new("m", vec![x1.into(), y1.into()]));
        self.ops.push(Operation::new("l", vec![x2.into(), y2.into()]));
        self.ops.push(Operation::new("S", vec![]));
    }

    fn rect(&mut self, x: i64, y: i64, width: i64, height: i64) {
        self.ops.push(Operation::new("re", vec![
            x.into(),
            y.into(),
            width.into(),
            height.into(),
        ]));
        self.ops.push(Operation::new("S", vec![]));
    }

    fn title(&mut self, title: &str) {
        self.advance(TITLE_SIZE + 10);
        let x = ((PAGE_WIDTH - text_width(title, TITLE_SIZE)) / 2).max(MARGIN);
        self.text(Face::Bold, TITLE_SIZE, x, self.y, title);
        self.y -= 20;
    }

    fn section(&mut self, title: &str, body: &str) {
        // keep the heading together with its first body line
        self.ensure(SECTION_SIZE + 8 + BODY_SIZE + 4);
        self.y -= SECTION_SIZE + 4;
        self.text(Face::Bold, SECTION_SIZE, MARGIN, self.y, title);
        let underline = self.y - 3;
        self.line(MARGIN, underline, PAGE_WIDTH - MARGIN, underline);
        self.y -= 6;

        for line in wrap(body, chars_fitting(CONTENT_WIDTH, BODY_SIZE)) {
            self.advance(BODY_SIZE + 4);
            if !line.is_empty() {
                self.text(Face::Regular, BODY_SIZE, MARGIN, self.y, &line);
            }
        }
        self.y -= 10;
    }

    fn table_row(&mut self, cells: &[String], widths: &[i64], face: Face) {
        self.ensure(ROW_HEIGHT);
        let top = self.y;
        let bottom = top - ROW_HEIGHT;
        let mut x = MARGIN;
        for (cell, width) in cells.iter().zip(widths) {
            self.rect(x, bottom, *width, ROW_HEIGHT);
            let text = truncate(cell, chars_fitting(width - 6, TABLE_SIZE));
            self.text(face, TABLE_SIZE, x + 3, bottom + 5, &text);
            x += width;
        }
        self.y = bottom;
    }

    fn table(&mut self, header: &[String], rows: &[Vec<String>], widths: &[u32]) {
        let total: i64 = widths.iter().map(|w| *w as i64).sum::<i64>().max(1);
        let widths: Vec<i64> = widths
            .iter()
            .map(|w| *w as i64 * CONTENT_WIDTH / total)
            .collect();

        self.y -= 6;
        self.table_row(header, &widths, Face::Bold);
        for row in rows {
            if self.y - ROW_HEIGHT < BOTTOM {
                self.ensure(ROW_HEIGHT);
                self.table_row(header, &widths, Face::Bold);
            }
            self.table_row(row, &widths, Face::Regular);
        }
        self.y -= 14;
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        self.finish_page();
        self.pages
    }
}

fn layout(document: &Document) -> Vec<Vec<Operation>> {
    let mut writer = PageWriter::new();
    writer.title(document.title);
    for block in &document.blocks {
        match block {
            Block::Section { title, body } => writer.section(title, body),
            Block::Table {
                header,
                rows,
                widths,
            } => writer.table(header, rows, widths),
        }
    }
    writer.finish()
}

/// Renders `document` as a standalone PDF and returns the number of pages.
pub fn render(document: &Document, path: &Path) -> Result<usize> {
    let pages = layout(document);

    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font = |doc: &mut lopdf::Document, base: &str| {
        doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base,
            "Encoding" => "WinAnsiEncoding",
        })
    };
    let regular = font(&mut doc, "Helvetica");
    let bold = font(&mut doc, "Helvetica-Bold");
    let italic = font(&mut doc, "Helvetica-Oblique");
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular,
            "F2" => bold,
            "F3" => italic,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len();
    let media_box: Vec<Object> = vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()];
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count as i64,
            "Resources" => resources_id,
            "MediaBox" => media_box,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();
    doc.save(path)?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        let lines = wrap("aa bb cc\n\ndddddddddd", 5);
        assert_eq!(lines, vec!["aa bb", "cc", "", "ddddd", "ddddd"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long cell value", 8), "a long..");
    }

    #[test]
    fn test_page_break() {
        let body = vec!["line"; 200].join("\n");
        let document = Document {
            file_name: "x.pdf",
            title: "Long",
            blocks: vec![Block::Section {
                title: "Many lines".to_string(),
                body,
            }],
        };
        assert!(layout(&document).len() > 1);
    }
}
