//! Whitespace normalisation for generated copy.

/// Collapse every whitespace run (spaces, tabs, newlines) into a single
/// space and trim both ends.
///
/// The byte-order mark U+FEFF counts as whitespace; NEL (U+0085) does not.
pub fn sanitize(text: &str) -> String {
    text.split(is_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_space(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}
