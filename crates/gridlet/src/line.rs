//! Row construction: one builder for border, header, and body rows.
//!
//! Every row shape a table needs (top border, header, mid separator,
//! body row, bottom border) comes out of the same [`build_line`] call,
//! varied only by its [`LineSpec`] and style roles. Border rows are the
//! case where the fill char is a horizontal rule and every value is empty.

use crate::fragment::{Fragment, Line};
use crate::style::FragmentStyle;
use crate::util::{fill_to, intersperse};

/// A column paired with one record's value for it, ready to render.
///
/// `None` means the record does not define the key; the cell still
/// renders, as pure padding.
#[derive(Clone, Debug)]
pub struct Cell {
    pub width: usize,
    pub key: String,
    pub value: Option<String>,
}

/// How one row shape is framed: the fill char, the outer glyphs, the
/// glyph drawn between cells, and the horizontal padding inside each cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSpec {
    pub fill: char,
    pub left: char,
    pub right: char,
    pub cross: char,
    pub padding: usize,
}

/// Border glyph set used for the table frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    /// Light box-drawing characters: ┌, ─, ┬, ┐, │, ├, ┼, ┤, └, ┴, ┘
    #[default]
    Light,
    /// ASCII borders: +, -, |
    Ascii,
    /// Rounded corners with light lines: ╭, ╮, ╰, ╯
    Rounded,
    /// Heavy box-drawing characters: ┏, ━, ┳, ┓, ┃, ┣, ╋, ┫, ┗, ┻, ┛
    Heavy,
    /// Double-line box-drawing: ╔, ═, ╦, ╗, ║, ╠, ╬, ╣, ╚, ╩, ╝
    Double,
}

/// Box-drawing glyph catalogue for one border style.
#[derive(Clone, Copy, Debug)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    left_t: char,
    cross: char,
    right_t: char,
    top_t: char,
    bottom_t: char,
}

impl BorderStyle {
    fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                left_t: '┣',
                cross: '╋',
                right_t: '┫',
                top_t: '┳',
                bottom_t: '┻',
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                left_t: '╠',
                cross: '╬',
                right_t: '╣',
                top_t: '╦',
                bottom_t: '╩',
            },
        }
    }

    /// Line spec for the top border row.
    pub fn top(&self, padding: usize) -> LineSpec {
        let c = self.chars();
        LineSpec {
            fill: c.horizontal,
            left: c.top_left,
            right: c.top_right,
            cross: c.top_t,
            padding,
        }
    }

    /// Line spec for the header/body separator and for mid-row separators.
    pub fn separator(&self, padding: usize) -> LineSpec {
        let c = self.chars();
        LineSpec {
            fill: c.horizontal,
            left: c.left_t,
            right: c.right_t,
            cross: c.cross,
            padding,
        }
    }

    /// Line spec for the bottom border row.
    pub fn bottom(&self, padding: usize) -> LineSpec {
        let c = self.chars();
        LineSpec {
            fill: c.horizontal,
            left: c.bottom_left,
            right: c.bottom_right,
            cross: c.bottom_t,
            padding,
        }
    }

    /// Line spec shared by header and body rows: space-filled content
    /// between vertical rules.
    pub fn content(&self, padding: usize) -> LineSpec {
        let c = self.chars();
        LineSpec {
            fill: ' ',
            left: c.vertical,
            right: c.vertical,
            cross: c.vertical,
            padding,
        }
    }
}

/// Builds one rendered row from its cells.
///
/// Each cell renders as `fill × padding` followed by the value
/// left-justified with `fill` out to `width − padding` chars; an absent
/// value is the empty string. Oversized values clamp the fill count to
/// zero instead of failing. Structural glyphs (outer borders and the
/// glyph between cells) go through `skeleton_style`, cell content through
/// `content_style`.
pub fn build_line(
    cells: &[Cell],
    content_style: &dyn FragmentStyle,
    skeleton_style: &dyn FragmentStyle,
    spec: &LineSpec,
) -> Line {
    let columns: Vec<Fragment> = cells
        .iter()
        .map(|cell| {
            let value = cell.value.as_deref().unwrap_or("");
            let mut text = String::new();
            for _ in 0..spec.padding {
                text.push(spec.fill);
            }
            text.push_str(&fill_to(
                value,
                cell.width.saturating_sub(spec.padding),
                spec.fill,
            ));
            content_style.render(&text)
        })
        .collect();

    let mut fragments = Vec::with_capacity(columns.len() * 2 + 2);
    fragments.push(skeleton_style.render(&spec.left.to_string()));
    fragments.extend(intersperse(columns, |_| {
        skeleton_style.render(&spec.cross.to_string())
    }));
    fragments.push(skeleton_style.render(&spec.right.to_string()));
    Line::new(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;

    fn cell(width: usize, key: &str, value: Option<&str>) -> Cell {
        Cell {
            width,
            key: key.to_string(),
            value: value.map(str::to_string),
        }
    }

    fn body_spec() -> LineSpec {
        BorderStyle::Light.content(1)
    }

    #[test]
    fn content_row_pads_value() {
        let cells = [cell(6, "name", Some("Foo"))];
        let line = build_line(&cells, &style::cell, &style::skeleton, &body_spec());
        assert_eq!(line.plain(), "│ Foo  │");
    }

    #[test]
    fn absent_value_renders_blank_cell() {
        let cells = [cell(5, "age", None)];
        let line = build_line(&cells, &style::cell, &style::skeleton, &body_spec());
        assert_eq!(line.plain(), "│     │");
    }

    #[test]
    fn cells_are_separated_by_cross_glyph() {
        let cells = [cell(6, "name", Some("Foo")), cell(5, "age", Some("12"))];
        let line = build_line(&cells, &style::cell, &style::skeleton, &body_spec());
        assert_eq!(line.plain(), "│ Foo  │ 12  │");
    }

    #[test]
    fn border_row_is_all_fill() {
        let cells = [cell(6, "name", None), cell(5, "age", None)];
        let spec = BorderStyle::Light.top(1);
        let line = build_line(&cells, &style::skeleton, &style::skeleton, &spec);
        assert_eq!(line.plain(), "┌──────┬─────┐");
    }

    #[test]
    fn zero_cells_render_only_outer_glyphs() {
        let spec = BorderStyle::Light.top(1);
        let line = build_line(&[], &style::skeleton, &style::skeleton, &spec);
        assert_eq!(line.plain(), "┌┐");
    }

    #[test]
    fn single_cell_has_no_cross_glyph() {
        let cells = [cell(6, "name", None)];
        let spec = BorderStyle::Light.separator(1);
        let line = build_line(&cells, &style::skeleton, &style::skeleton, &spec);
        assert_eq!(line.plain(), "├──────┤");
    }

    #[test]
    fn fill_spec_still_renders_a_present_value() {
        // Structural rows come out empty because the assembler hands the
        // builder valueless cells, not because the builder drops values.
        let cells = [cell(6, "name", Some("Foo"))];
        let spec = BorderStyle::Light.separator(1);
        let line = build_line(&cells, &style::skeleton, &style::skeleton, &spec);
        assert_eq!(line.plain(), "├─Foo──┤");
    }

    #[test]
    fn oversized_value_clamps_fill_instead_of_failing() {
        // Width smaller than the value can only come from hand-built cells
        let cells = [cell(3, "k", Some("toolong"))];
        let line = build_line(&cells, &style::cell, &style::skeleton, &body_spec());
        assert_eq!(line.plain(), "│ toolong│");
    }

    #[test]
    fn structural_and_content_styles_hit_the_right_fragments() {
        let tag_content =
            |text: &str| crate::fragment::Fragment::new(format!("C[{}]", text), console::Style::new());
        let tag_skeleton =
            |text: &str| crate::fragment::Fragment::new(format!("S[{}]", text), console::Style::new());
        let cells = [cell(6, "name", Some("Foo"))];
        let line = build_line(&cells, &tag_content, &tag_skeleton, &body_spec());
        assert_eq!(line.plain(), "S[│]C[ Foo  ]S[│]");
    }

    #[test]
    fn ascii_border_glyphs() {
        let cells = [cell(4, "a", None), cell(4, "b", None)];
        let line = build_line(
            &cells,
            &style::skeleton,
            &style::skeleton,
            &BorderStyle::Ascii.top(1),
        );
        assert_eq!(line.plain(), "+----+----+");
    }

    #[test]
    fn rounded_corners() {
        let spec = BorderStyle::Rounded.top(1);
        assert_eq!(spec.left, '╭');
        assert_eq!(spec.right, '╮');
        let spec = BorderStyle::Rounded.bottom(1);
        assert_eq!(spec.left, '╰');
        assert_eq!(spec.right, '╯');
    }
}
