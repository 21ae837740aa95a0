//! The styled-fragment tree handed to the rendering boundary.
//!
//! A render produces a [`RenderedTable`]: one [`Line`] per structural,
//! header, or body row, each holding one [`Fragment`] per cell plus the
//! border glyphs. The core never interprets styles; it attaches a
//! `console::Style` to each fragment and leaves ANSI emission (and
//! terminal detection) to `console` at the `Display` boundary.

use std::fmt;

use console::Style;

/// A piece of text paired with the style that should render it.
#[derive(Clone, Debug)]
pub struct Fragment {
    text: String,
    style: Style,
}

impl Fragment {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Fragment {
            text: text.into(),
            style,
        }
    }

    /// The unstyled text payload.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The style annotation carried to the rendering boundary.
    pub fn style(&self) -> &Style {
        &self.style
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.style.apply_to(&self.text))
    }
}

/// One rendered row: border glyphs and cells in left-to-right order.
#[derive(Clone, Debug, Default)]
pub struct Line {
    fragments: Vec<Fragment>,
}

impl Line {
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Line { fragments }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The row's text with all styling stripped.
    pub fn plain(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// Total row width in chars.
    pub fn width(&self) -> usize {
        self.fragments
            .iter()
            .map(|f| f.text.chars().count())
            .sum()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{}", fragment)?;
        }
        Ok(())
    }
}

/// A fully laid-out table.
///
/// `Display` emits the styled form; [`plain`](RenderedTable::plain) is the
/// text-only form used by tests and non-terminal consumers.
#[derive(Clone, Debug, Default)]
pub struct RenderedTable {
    lines: Vec<Line>,
}

impl RenderedTable {
    pub fn new(lines: Vec<Line>) -> Self {
        RenderedTable { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The whole table with styling stripped, rows joined by newlines.
    pub fn plain(&self) -> String {
        self.lines
            .iter()
            .map(Line::plain)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for RenderedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
