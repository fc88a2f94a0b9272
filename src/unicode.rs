//! Character classification for word segmentation.
//!
//! Classification is locale-agnostic: letters are judged by the generic
//! Unicode case properties, digits by the numeric property. Anything
//! that is neither a cased letter nor a digit acts as a word boundary,
//! exactly like the fixed delimiter set does.

/// Per-character class. Derived on the fly, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    /// One of the fixed delimiter characters: space, `-`, `_`, `.`, `/`, `\`.
    Delimiter,
    /// Everything else without a letter/digit classification. Treated as
    /// a boundary, same as `Delimiter`.
    Other,
}

impl CharClass {
    /// Boundary classes are consumed by the segmenter and never appear
    /// inside a token.
    #[inline(always)]
    pub fn is_boundary(self) -> bool {
        matches!(self, CharClass::Delimiter | CharClass::Other)
    }
}

/// Classify one scalar. ASCII first — identifier text is overwhelmingly
/// ASCII — then the Unicode case/numeric properties.
#[inline(always)]
pub fn classify(c: char) -> CharClass {
    if c.is_ascii() {
        return match c {
            'A'..='Z' => CharClass::Upper,
            'a'..='z' => CharClass::Lower,
            '0'..='9' => CharClass::Digit,
            ' ' | '-' | '_' | '.' | '/' | '\\' => CharClass::Delimiter,
            _ => CharClass::Other,
        };
    }
    if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_lowercase() {
        CharClass::Lower
    } else if c.is_numeric() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}

/// `str.isupper` semantics: at least one cased letter and no lowercase
/// letter anywhere. An all-caps string must not split at every capital.
#[inline]
pub fn is_all_upper(text: &str) -> bool {
    let mut has_upper = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        has_upper |= c.is_uppercase();
    }
    has_upper
}

/// `str.islower` semantics: at least one cased letter, none uppercase.
#[inline]
pub fn is_all_lower(text: &str) -> bool {
    let mut has_lower = false;
    for c in text.chars() {
        if c.is_uppercase() {
            return false;
        }
        has_lower |= c.is_lowercase();
    }
    has_lower
}

/// First scalar uppercased, the rest lowercased. The uppercase mapping
/// of the first scalar may expand to more than one scalar (e.g. `ß`).
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
