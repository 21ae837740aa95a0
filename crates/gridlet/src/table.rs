//! Table assembly: configuration and the render entry points.

use serde::Serialize;

use crate::columns::derive_columns;
use crate::error::TableError;
use crate::fragment::{Line, RenderedTable};
use crate::line::{build_line, BorderStyle, Cell};
use crate::record::{records_from, stringify, Record};
use crate::style::{self, FragmentStyle};
use crate::util::intersperse;

/// Table configuration: cell padding, border glyph set, and the three
/// style roles.
///
/// Defaults match the classic rendering: padding 1, light box-drawing
/// borders, bold-blue headers, plain cells, bold-white skeleton.
///
/// ```rust
/// use console::Style;
/// use gridlet::{BorderStyle, TableConfig};
/// use gridlet::style::styled;
///
/// let config = TableConfig::new()
///     .padding(2)
///     .border(BorderStyle::Rounded)
///     .header(styled(Style::new().magenta().bold()));
/// ```
pub struct TableConfig {
    padding: usize,
    border: BorderStyle,
    header: Box<dyn FragmentStyle>,
    cell: Box<dyn FragmentStyle>,
    skeleton: Box<dyn FragmentStyle>,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            padding: 1,
            border: BorderStyle::Light,
            header: Box::new(style::header),
            cell: Box::new(style::cell),
            skeleton: Box::new(style::skeleton),
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal padding inside every cell, applied on both sides.
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Border glyph set for the table frame.
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Style role for header cells.
    pub fn header(mut self, role: impl FragmentStyle + 'static) -> Self {
        self.header = Box::new(role);
        self
    }

    /// Style role for body cells.
    pub fn cell(mut self, role: impl FragmentStyle + 'static) -> Self {
        self.cell = Box::new(role);
        self
    }

    /// Style role for structural glyphs.
    pub fn skeleton(mut self, role: impl FragmentStyle + 'static) -> Self {
        self.skeleton = Box::new(role);
        self
    }
}

/// Lays out `records` as a fixed-width box-drawn table.
///
/// Emits, in order: top border, header row (column keys), header/body
/// separator, the body rows with a separator between each adjacent pair,
/// bottom border. Zero records degenerate to the top and bottom borders
/// alone.
///
/// Pure: the output depends only on the records and the configuration,
/// and rendering the same input twice gives identical trees.
///
/// ```rust
/// use gridlet::{render, TableConfig};
/// use serde_json::json;
///
/// let records = vec![json!({"name": "Foo"}).as_object().cloned().unwrap()];
/// let table = render(&records, &TableConfig::new());
/// assert_eq!(
///     table.plain(),
///     "┌──────┐\n│ name │\n├──────┤\n│ Foo  │\n└──────┘"
/// );
/// ```
pub fn render(records: &[Record], config: &TableConfig) -> RenderedTable {
    let columns = derive_columns(records, config.padding);

    let top = config.border.top(config.padding);
    let separator = config.border.separator(config.padding);
    let bottom = config.border.bottom(config.padding);
    let content = config.border.content(config.padding);

    // Structural rows render only fill chars, so a single empty cell row
    // serves the top border, every separator, and the bottom border.
    let frame: Vec<Cell> = columns
        .iter()
        .map(|col| Cell {
            width: col.width,
            key: col.key.clone(),
            value: None,
        })
        .collect();

    let skeleton = config.skeleton.as_ref();

    let mut lines: Vec<Line> = Vec::new();
    lines.push(build_line(&frame, skeleton, skeleton, &top));

    if !records.is_empty() {
        let header: Vec<Cell> = columns
            .iter()
            .map(|col| Cell {
                width: col.width,
                key: col.key.clone(),
                value: Some(col.key.clone()),
            })
            .collect();
        lines.push(build_line(&header, config.header.as_ref(), skeleton, &content));
        lines.push(build_line(&frame, skeleton, skeleton, &separator));

        let rows: Vec<Line> = records
            .iter()
            .map(|record| {
                let cells: Vec<Cell> = columns
                    .iter()
                    .map(|col| Cell {
                        width: col.width,
                        key: col.key.clone(),
                        value: record.get(&col.key).map(stringify),
                    })
                    .collect();
                build_line(&cells, config.cell.as_ref(), skeleton, &content)
            })
            .collect();
        lines.extend(intersperse(rows, |_| {
            build_line(&frame, skeleton, skeleton, &separator)
        }));
    }

    lines.push(build_line(&frame, skeleton, skeleton, &bottom));
    RenderedTable::new(lines)
}

/// Serializes typed rows into records and lays them out as a table.
///
/// Fails if a row does not serialize to a key/value object.
pub fn render_serialize<T: Serialize>(
    rows: &[T],
    config: &TableConfig,
) -> Result<RenderedTable, TableError> {
    let records = records_from(rows)?;
    Ok(render(&records, config))
}
