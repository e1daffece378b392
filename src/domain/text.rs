//! Cosmetic normalization of names and addresses.

/// Upper-case the first character and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Normalize a contact name.
///
/// Splits on whitespace, capitalizes every hyphen-delimited sub-word and
/// rejoins with single spaces.
///
/// ```
/// use assistant_bot::domain::normalize_name;
///
/// assert_eq!(normalize_name("  jean-paul   SMITH "), "Jean-Paul Smith");
/// ```
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| word.split('-').map(capitalize).collect::<Vec<_>>().join("-"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cosmetically format a free-text address.
///
/// Short abbreviations (up to 4 characters ending in `.`, e.g. `vul.`) are
/// lower-cased; every other word is capitalized.
pub fn format_address(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            if word.ends_with('.') && word.chars().count() <= 4 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
