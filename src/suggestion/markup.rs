//! Highlight markup helpers
//!
//! Providers mark the matched part of a label with `<B>...</B>`. The markup is
//! only for display and must not leak into the input box.

const OPEN_TAG: &str = "<b>";
const CLOSE_TAG: &str = "</b>";

/// Remove `<B>`/`</B>` tags (any case) from a label
pub fn strip_highlight_markup(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('<') {
        result.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(tag_len) = highlight_tag_len(tail) {
            rest = &tail[tag_len..];
        } else {
            result.push('<');
            rest = &tail[1..];
        }
    }
    result.push_str(rest);

    result
}

fn highlight_tag_len(s: &str) -> Option<usize> {
    [OPEN_TAG, CLOSE_TAG].into_iter().find_map(|tag| {
        s.get(..tag.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(tag))
            .map(|_| tag.len())
    })
}

/// Wrap the first ASCII case-insensitive occurrence of `term` in `<B>` tags
///
/// Returns the label unchanged when the term does not occur.
pub fn highlight_term(label: &str, term: &str) -> String {
    if term.is_empty() {
        return label.to_string();
    }

    // ASCII lowercasing keeps byte offsets aligned with the original
    let haystack = label.to_ascii_lowercase();
    match haystack.find(&term.to_ascii_lowercase()) {
        Some(start) => {
            let end = start + term.len();
            format!(
                "{}<B>{}</B>{}",
                &label[..start],
                &label[start..end],
                &label[end..]
            )
        }
        None => label.to_string(),
    }
}
