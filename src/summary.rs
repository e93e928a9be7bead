use crate::domain::ProblemRecord;
use unicode_width::UnicodeWidthStr;

pub const SUMMARY_HEADERS: [&str; 5] = ["Problem ID", "Name", "Level", "Tier", "Tags"];

/// Turns a header and rows into a printable table.
pub trait SummaryTable {
    fn render(&self, headers: &[&str], rows: &[Vec<String>]) -> String;
}

/// One row per problem, in the order given.
pub fn summary_rows(problems: &[ProblemRecord]) -> Vec<Vec<String>> {
    problems
        .iter()
        .map(|problem| {
            vec![
                problem.id().to_string(),
                problem.name().to_owned(),
                problem.level().to_string(),
                problem.difficulty().to_owned(),
                problem.joined_tags(),
            ]
        })
        .collect()
}

/// GitHub-flavoured Markdown pipe table.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownTable {
    margin: usize,
}

impl Default for MarkdownTable {
    fn default() -> Self {
        Self { margin: 2 }
    }
}

impl MarkdownTable {
    pub fn with_margin(margin: usize) -> Self {
        Self { margin }
    }

    fn write_row<'a>(
        &self,
        out: &mut String,
        cells: impl Iterator<Item = &'a str>,
        widths: &[usize],
    ) {
        let pad = " ".repeat(self.margin);
        out.push('|');
        for (cell, &width) in cells.zip(widths) {
            let cell = cell.replace('|', "\\|");
            let fill = width.saturating_sub(display_width(&cell));
            out.push_str(&pad);
            out.push_str(&cell);
            out.push_str(&" ".repeat(fill));
            out.push_str(&pad);
            out.push('|');
        }
        out.push('\n');
    }
}

/// Terminal columns, so that wide Hangul glyphs count twice.
fn display_width(cell: &str) -> usize {
    UnicodeWidthStr::width(cell)
}

impl SummaryTable for MarkdownTable {
    fn render(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(display_width(&cell.replace('|', "\\|")));
            }
        }

        let mut out = String::new();
        self.write_row(&mut out, headers.iter().copied(), &widths);
        out.push('|');
        for &width in &widths {
            out.push_str(&"-".repeat(width + 2 * self.margin));
            out.push('|');
        }
        out.push('\n');
        for row in rows {
            self.write_row(&mut out, row.iter().map(String::as_str), &widths);
        }
        out
    }
}
