//! Small sequence and text helpers shared by the layout code.

/// Inserts a separator between every adjacent pair of items.
///
/// The separator is produced per gap from the index of the item that
/// follows it, so callers that need to key or number separators can.
///
/// ```rust
/// use gridlet::util::intersperse;
///
/// let out = intersperse(vec!["a", "b", "c"], |_| "-");
/// assert_eq!(out, vec!["a", "-", "b", "-", "c"]);
/// ```
pub fn intersperse<T, F>(items: Vec<T>, mut separator: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    let mut out = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(separator(i));
        }
        out.push(item);
    }
    out
}

/// Left-justifies `text` to `width` chars, padding on the right with `fill`.
///
/// Width is a literal char count. Text already wider than `width` is
/// returned unclipped; the fill count clamps to zero.
pub fn fill_to(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    let mut out = String::with_capacity(width.max(len));
    out.push_str(text);
    for _ in 0..width.saturating_sub(len) {
        out.push(fill);
    }
    out
}
