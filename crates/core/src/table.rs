//! Bordered table rendering.
//!
//! Rows are appended as named cells and normalized to display text
//! immediately, so column sizing always sees final strings. Rendering
//! computes one width per column (max of header and cells by display width,
//! rounded up to even, plus 4 cells of padding) and emits a double-line
//! bordered grid.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use itertools::Itertools;
use unicode_width::UnicodeWidthStr;

use crate::output::style;
use crate::value::Value;

const TOP: char = '═';
const TOP_MID: char = '╤';
const TOP_LEFT: char = '╔';
const TOP_RIGHT: char = '╗';
const BOTTOM: char = '═';
const BOTTOM_MID: char = '╧';
const BOTTOM_LEFT: char = '╚';
const BOTTOM_RIGHT: char = '╝';
const LEFT: char = '║';
const LEFT_MID: char = '╟';
const MID: char = '─';
const MID_MID: char = '┼';
const RIGHT: char = '║';
const RIGHT_MID: char = '╢';
const MIDDLE: char = '│';

/// Sentinel shown for absent cells and `Null` values.
const NULL_CELL: &str = "[NULL]";

/// An incrementally built, once-rendered bordered table.
#[derive(Default)]
pub struct Table {
    header_style: Vec<u8>,
    cell_style: Vec<u8>,
    border_style: Vec<u8>,
    column_styles: IndexMap<String, Vec<u8>>,
    rows: Vec<IndexMap<String, String>>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self {
            header_style: vec![style::BOLD],
            ..Self::default()
        }
    }

    pub fn set_header_style(&mut self, styles: &[u8]) -> &mut Self {
        self.header_style = styles.to_vec();
        self
    }

    pub fn set_cell_style(&mut self, styles: &[u8]) -> &mut Self {
        self.cell_style = styles.to_vec();
        self
    }

    pub fn set_border_style(&mut self, styles: &[u8]) -> &mut Self {
        self.border_style = styles.to_vec();
        self
    }

    /// Overrides the cell style for one column. Headers are not affected.
    pub fn set_column_style(&mut self, column: &str, styles: &[u8]) -> &mut Self {
        self.column_styles.insert(column.to_string(), styles.to_vec());
        self
    }

    /// Appends one row of named cells.
    ///
    /// Values are normalized to display text here, not at render time:
    /// `Null` becomes `[NULL]`, booleans become `[TRUE]`/`[FALSE]`, numbers
    /// are stringified, and strings are trimmed.
    pub fn row<'a, I>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        let mut row = IndexMap::new();
        for (column, value) in cells {
            row.insert(column.trim().to_string(), cell_text(&value));
        }
        self.rows.push(row);
        self
    }

    /// Renders the full grid to a string, one trailing newline per line.
    #[must_use]
    pub fn render(&self) -> String {
        let widths = self.column_widths();

        let mut grid = String::new();
        grid.push_str(&self.border_line(&widths, TOP_LEFT, TOP, TOP_MID, TOP_RIGHT));

        let header: IndexMap<String, String> = widths
            .keys()
            .map(|column| (column.clone(), column.clone()))
            .collect();
        grid.push_str(&self.content_line(&header, &widths, true));
        grid.push_str(&self.border_line(&widths, LEFT_MID, MID, MID_MID, RIGHT_MID));

        for row in &self.rows {
            grid.push_str(&self.content_line(row, &widths, false));
        }

        grid.push_str(&self.border_line(&widths, BOTTOM_LEFT, BOTTOM, BOTTOM_MID, BOTTOM_RIGHT));
        grid
    }

    /// Header width and cell widths feed one max per column, rounded up to
    /// even, plus 4 cells reserved for padding.
    fn column_widths(&self) -> IndexMap<String, usize> {
        let mut widths: IndexMap<String, usize> = IndexMap::new();
        for row in &self.rows {
            for column in row.keys() {
                widths
                    .entry(column.clone())
                    .or_insert_with(|| column.width());
            }
        }

        for row in &self.rows {
            for (column, width) in &mut widths {
                let cell = row.get(column).map_or(0, |text| text.width());
                let mut len = (*width).max(cell);
                if len % 2 != 0 {
                    len += 1;
                }
                *width = len;
            }
        }

        for width in widths.values_mut() {
            *width += 4;
        }
        widths
    }

    fn content_line(
        &self,
        row: &IndexMap<String, String>,
        widths: &IndexMap<String, usize>,
        is_header: bool,
    ) -> String {
        let base_style = if is_header {
            &self.header_style
        } else {
            &self.cell_style
        };

        let cells = widths
            .iter()
            .map(|(column, width)| {
                let text = row.get(column).map_or(NULL_CELL, String::as_str);
                let mut codes = base_style.clone();
                if !is_header {
                    if let Some(extra) = self.column_styles.get(column) {
                        codes.extend_from_slice(extra);
                    }
                }
                let padding = width.saturating_sub(text.width() + 2);
                format!("{}{}", styled(&codes, &format!(" {text}")), " ".repeat(padding))
            })
            .join(&format!("{} ", self.border(MIDDLE)));

        format!("{} {cells}{}\n", self.border(LEFT), self.border(RIGHT))
    }

    fn border_line(
        &self,
        widths: &IndexMap<String, usize>,
        left: char,
        fill: char,
        junction: char,
        right: char,
    ) -> String {
        let segments = widths
            .values()
            .map(|width| fill.to_string().repeat(*width))
            .join(&junction.to_string());
        format!(
            "{}\n",
            styled(
                &self.border_style,
                &format!("{left}{segments}{right}")
            )
        )
    }

    fn border(&self, glyph: char) -> String {
        styled(&self.border_style, &glyph.to_string())
    }
}

impl Display for Table {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.render())
    }
}

/// Wraps text in an SGR sequence; empty codes leave it unstyled.
fn styled(codes: &[u8], text: &str) -> String {
    if codes.is_empty() {
        text.to_string()
    } else {
        format!("\x1b[{}m{text}\x1b[0m", codes.iter().join(";"))
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => NULL_CELL.to_string(),
        Value::Bool(true) => "[TRUE]".to_string(),
        Value::Bool(false) => "[FALSE]".to_string(),
        Value::Int(_) | Value::Float(_) => value.to_string(),
        Value::Str(text) => text.trim().to_string(),
    }
}
