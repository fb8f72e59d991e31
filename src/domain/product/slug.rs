//! Title → URL slug derivation.
//!
//! The slug is the routable identifier of a product detail page. It is a pure
//! function of the title and is recomputed on every lookup.

/// Derive a URL-safe slug from a product title.
///
/// The title is lowercased; everything other than ASCII letters, digits,
/// whitespace (the ECMAScript `\s` set) and `-` is dropped; every run of
/// whitespace and hyphens becomes a single `-`; a leading or trailing `-` is
/// stripped.
///
/// Titles made only of dropped characters yield an empty slug. Distinct
/// titles may yield the same slug: no disambiguation is performed, lookups
/// resolve such collisions to the first product in catalog order.
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch == '-' || is_separator_space(ch) {
            pending_separator = true;
        }
    }

    slug
}

/// ECMAScript `WhiteSpace` and `LineTerminator`: the Unicode `Zs` category
/// plus tab, LF, VT, FF, CR, U+2028, U+2029 and U+FEFF. Unlike
/// [`char::is_whitespace`] this includes U+FEFF and excludes U+0085, so
/// titles pasted with a byte-order mark keep their word break.
const fn is_separator_space(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Whether `value` is already in canonical slug form.
pub fn is_canonical_slug(value: &str) -> bool {
    !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
