//! Escaping of reserved characters.
//!
//! RSQL lets values contain `(`, `)`, `,`, `;` and `=` when written as `\(`, `\)`, `\,`, `\;` and
//! `\=`. Before any splitting, each escape pair is replaced by a single private-use character, so
//! no later scan can mistake it for a live delimiter.

/// Escape pairs and their placeholders.
const ESCAPES: [(char, char); 5] = [
    ('(', '\u{E000}'),
    (')', '\u{E001}'),
    (',', '\u{E002}'),
    (';', '\u{E003}'),
    ('=', '\u{E004}'),
];

/// Returns the placeholder for an escapable character.
fn placeholder_for(c: char) -> Option<char> {
    ESCAPES
        .iter()
        .find(|(literal, _)| *literal == c)
        .map(|(_, placeholder)| *placeholder)
}

/// Returns the literal character a placeholder stands for.
fn literal_for(c: char) -> Option<char> {
    ESCAPES
        .iter()
        .find(|(_, placeholder)| *placeholder == c)
        .map(|(literal, _)| *literal)
}

/// Whether `input` still holds an encoded escape.
pub fn contains_placeholder(input: &str) -> bool {
    input.chars().any(|c| literal_for(c).is_some())
}

/// Replaces every escape pair with its placeholder.
pub fn encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        let placeholder = match c {
            '\\' => chars.peek().copied().and_then(placeholder_for),
            _ => None,
        };
        match placeholder {
            Some(placeholder) => {
                chars.next();
                out.push(placeholder);
            }
            None => out.push(c),
        }
    }

    out
}

/// Restores placeholders to their original escape pairs.
///
/// Exact inverse of [`encode`] for input that contains no placeholder characters.
pub fn decode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match literal_for(c) {
            Some(literal) => {
                out.push('\\');
                out.push(literal);
            }
            None => out.push(c),
        }
    }
    out
}

/// Restores placeholders to the bare literal characters.
///
/// This is what values embedded in rendered output go through: `foo\,bar` becomes `foo,bar`.
pub fn unescape(input: &str) -> String {
    input
        .chars()
        .map(|c| literal_for(c).unwrap_or(c))
        .collect()
}
