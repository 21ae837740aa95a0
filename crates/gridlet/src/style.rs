//! Style roles for header cells, body cells, and skeleton glyphs.
//!
//! A table render takes three independent roles. Each is anything that
//! wraps a text payload into a [`Fragment`]; any `Fn(&str) -> Fragment`
//! qualifies, including the default role functions here, so callers can
//! replace one role without touching the others.

use console::Style;

use crate::fragment::Fragment;

/// Wraps a text payload into a styled fragment.
///
/// Blanket-implemented for every `Fn(&str) -> Fragment`, so closures and
/// the default role functions can be used interchangeably.
pub trait FragmentStyle {
    fn render(&self, text: &str) -> Fragment;
}

impl<F> FragmentStyle for F
where
    F: Fn(&str) -> Fragment,
{
    fn render(&self, text: &str) -> Fragment {
        self(text)
    }
}

/// Default header role: bold blue.
pub fn header(text: &str) -> Fragment {
    Fragment::new(text, Style::new().blue().bold())
}

/// Default cell role: unstyled.
pub fn cell(text: &str) -> Fragment {
    Fragment::new(text, Style::new())
}

/// Default skeleton role: bold white.
pub fn skeleton(text: &str) -> Fragment {
    Fragment::new(text, Style::new().white().bold())
}

/// Adapts a bare `console::Style` into a fragment style.
///
/// ```rust
/// use console::Style;
/// use gridlet::style::{styled, FragmentStyle};
///
/// let accent = styled(Style::new().magenta().bold());
/// assert_eq!(accent.render("hi").text(), "hi");
/// ```
pub fn styled(style: Style) -> impl Fn(&str) -> Fragment {
    move |text: &str| Fragment::new(text, style.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roles_keep_the_text() {
        assert_eq!(header("name").text(), "name");
        assert_eq!(cell("Foo").text(), "Foo");
        assert_eq!(skeleton("│").text(), "│");
    }

    #[test]
    fn closure_is_a_fragment_style() {
        let upper = |text: &str| Fragment::new(text.to_uppercase(), Style::new());
        assert_eq!(upper.render("abc").text(), "ABC");
    }

    #[test]
    fn fn_item_is_a_fragment_style() {
        let role: &dyn FragmentStyle = &header;
        assert_eq!(role.render("x").text(), "x");
    }

    #[test]
    fn styled_wraps_a_console_style() {
        let role = styled(Style::new().red());
        assert_eq!(role.render("err").text(), "err");
    }
}
