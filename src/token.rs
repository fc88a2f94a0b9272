use smallvec::SmallVec;

/// Token sequence with inline capacity — identifiers rarely exceed
/// eight words, so segmentation usually never touches the heap for the
/// sequence itself (token text always borrows the input).
pub type TokenSeq<'a> = SmallVec<[Token<'a>; 8]>;

/// Casing shape of a token's original text, carried forward so the
/// renderer never has to re-inspect the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    AllUpper,
    AllLower,
    Capitalized,
    Digits,
    Mixed,
}

impl Shape {
    pub fn of(text: &str) -> Shape {
        debug_assert!(!text.is_empty(), "tokens are never empty");
        if text.chars().all(char::is_numeric) {
            return Shape::Digits;
        }
        if text.chars().all(char::is_uppercase) {
            return Shape::AllUpper;
        }
        if text.chars().all(char::is_lowercase) {
            return Shape::AllLower;
        }
        let mut chars = text.chars();
        if chars.next().is_some_and(char::is_uppercase) && chars.all(char::is_lowercase) {
            return Shape::Capitalized;
        }
        Shape::Mixed
    }
}

/// One segmented word. `text` is a contiguous slice of the original
/// input with its casing untouched; segmentation never copies token
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub shape: Shape,
    /// True when `text` equals a caller-supplied acronym under
    /// case-insensitive, normalization-insensitive comparison.
    pub is_acronym: bool,
}

impl<'a> Token<'a> {
    pub(crate) fn new(text: &'a str, is_acronym: bool) -> Self {
        Self {
            text,
            shape: Shape::of(text),
            is_acronym,
        }
    }
}
