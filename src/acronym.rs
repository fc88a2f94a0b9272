//! Caller-supplied acronym sets.
//!
//! Acronyms are canonicalized once at construction (uppercased, then
//! NFC-composed) and compared against candidate words in that canonical
//! form, so `http`, `Http` and an NFD-decomposed `HÓÓP` all behave the
//! same. The set is read-only after construction and freely shareable
//! across calls and threads.

use std::sync::LazyLock;

use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};

use crate::converter::CaseError;
use crate::unicode::classify;

// ── ICU4X ──
static NFC: LazyLock<ComposingNormalizerBorrowed> = LazyLock::new(ComposingNormalizer::new_nfc);

/// Canonical comparison form: uppercase first (case mapping may emit
/// decomposed sequences), then NFC-compose.
pub(crate) fn canonical(text: &str) -> String {
    let upper = text.to_uppercase();
    NFC.normalize(&upper).into_owned()
}

#[derive(Debug, Clone)]
struct Entry {
    canon: String,
    /// Scalar count of `canon`, cached for prefix extraction.
    chars: usize,
}

/// A validated, canonicalized set of acronyms to honor during
/// segmentation and rendering.
///
/// Entries are held sorted by descending length: the segmenter's greedy
/// matcher tries the longest candidate first. A plain linear scan over
/// the (small) list beats a trie here.
#[derive(Debug, Clone, Default)]
pub struct AcronymSet {
    entries: Vec<Entry>,
}

impl AcronymSet {
    /// Build a set from raw acronym strings.
    ///
    /// An acronym that is empty — or still contains a boundary
    /// character after canonicalization — is rejected with
    /// [`CaseError::InvalidAcronym`].
    pub fn new<I, S>(acronyms: I) -> Result<Self, CaseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        for acronym in acronyms {
            let acronym = acronym.as_ref();
            let canon = canonical(acronym);
            if canon.is_empty() || canon.chars().any(|c| classify(c).is_boundary()) {
                return Err(CaseError::InvalidAcronym(acronym.to_owned()));
            }
            let chars = canon.chars().count();
            entries.push(Entry { canon, chars });
        }
        // Stable sort: equal lengths keep caller order.
        entries.sort_by(|a, b| b.chars.cmp(&a.chars));
        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whole-word membership test in canonical form.
    pub fn contains(&self, word: &str) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let canon = canonical(word);
        self.entries.iter().any(|e| e.canon == canon)
    }

    /// Greedy longest match at the start of `run` (a slice of uppercase
    /// letters). Returns the byte length of the matched prefix.
    pub(crate) fn longest_prefix_match(&self, run: &str) -> Option<usize> {
        for entry in &self.entries {
            let Some(prefix) = prefix_of_chars(run, entry.chars) else {
                continue;
            };
            if canonical(prefix) == entry.canon {
                return Some(prefix.len());
            }
        }
        None
    }
}

/// The prefix of `s` holding exactly `n` scalars, or `None` if `s` is
/// shorter than that.
fn prefix_of_chars(s: &str, n: usize) -> Option<&str> {
    let mut count = 0;
    for (i, _) in s.char_indices() {
        if count == n {
            return Some(&s[..i]);
        }
        count += 1;
    }
    (count == n).then_some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_to_upper() {
        for raw in ["http", "HTTP", "Http", "httP"] {
            let set = AcronymSet::new([raw]).unwrap();
            assert!(set.contains("HTTP"));
            assert!(set.contains("http"));
        }
    }

    #[test]
    fn rejects_boundary_characters() {
        for bad in ["HT-TP", "NA SA", "SU.GAR", ""] {
            let err = AcronymSet::new([bad]).unwrap_err();
            assert_eq!(err, CaseError::InvalidAcronym(bad.to_owned()));
        }
    }

    #[test]
    fn longest_match_wins() {
        let set = AcronymSet::new(["HTTP", "HTTPS"]).unwrap();
        assert_eq!(set.longest_prefix_match("HTTPSERVER"), Some(5));
        assert_eq!(set.longest_prefix_match("HTTPX"), Some(4));
        assert_eq!(set.longest_prefix_match("XHTTP"), None);
    }

    #[test]
    fn prefix_extraction_is_scalar_aware() {
        assert_eq!(prefix_of_chars("HÓÓP", 3), Some("HÓÓ"));
        assert_eq!(prefix_of_chars("HÓ", 3), None);
        assert_eq!(prefix_of_chars("HÓÓ", 3), Some("HÓÓ"));
    }
}
