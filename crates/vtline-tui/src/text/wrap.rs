//! Word wrapping for card descriptions.

/// Wrap a plain text string to the specified width.
///
/// Blank text produces no lines. A zero width returns the text unwrapped.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    if width == 0 {
        return vec![text.to_string()];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}
