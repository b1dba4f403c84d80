//! HTML entity escaping for values embedded in the generated Markdown

/// Escapes `&`, `<`, `>`, `"` and `'` as HTML entities.
///
/// `&` is handled in the same pass as the other characters, so existing
/// entities in the input are escaped rather than preserved.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
