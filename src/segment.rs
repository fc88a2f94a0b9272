//! The word-segmentation engine.
//!
//! One left-to-right pass recovers word spans from delimiters, case
//! transitions and digit transitions; a second pass resolves runs of
//! free-standing capitals against the caller's acronym set. Token text
//! always borrows the input — the scanner only records span boundaries.
//!
//! Boundary rules:
//! - any non-letter, non-digit character ends the current word and is
//!   consumed (consecutive boundary characters collapse);
//! - every uppercase letter opens a new word, unless the whole input is
//!   caps-only (then uppercase is treated as lowercase, so `FOO_BAR`
//!   does not shatter);
//! - digits and letters never share a word.
//!
//! Under these rules `HTTPError` first splits into `H`, `T`, `T`, `P`,
//! `Error`; the acronym pass is what reassembles `HTTP` when the caller
//! asked for it. Without the hint the capitals stay shattered — there
//! is no way to attribute an unhinted caps run to a single word.
//!
//! Combining marks classify as boundaries, so input is expected in
//! composed (NFC) form; only acronym comparison is normalization-
//! insensitive.

use crate::acronym::AcronymSet;
use crate::token::{Shape, Token, TokenSeq};
use crate::unicode::{CharClass, classify, is_all_lower, is_all_upper};
use smallvec::SmallVec;

/// Whole-string casing detected during parsing.
///
/// `Camel`/`Pascal` tolerate separators (`foo_Bar` still detects as
/// camel); `Mixed` is any other mix of word casings; `Unknown` means
/// the input contained no words at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedCase {
    Unknown,
    Upper,
    Lower,
    Camel,
    Pascal,
    Mixed,
}

/// Everything the segmenter recovers from one input string.
#[derive(Debug, Clone)]
pub struct Parsed<'a> {
    pub tokens: TokenSeq<'a>,
    pub case: DetectedCase,
    /// First boundary character encountered, if any.
    pub separator: Option<char>,
}

/// Segment `text` into word tokens. Total: empty or boundary-only input
/// yields an empty sequence, and no input panics.
pub fn segment<'a>(text: &'a str, acronyms: &AcronymSet) -> TokenSeq<'a> {
    parse(text, acronyms).tokens
}

/// Segment `text` and also report the detected source casing and
/// separator.
pub fn parse<'a>(text: &'a str, acronyms: &AcronymSet) -> Parsed<'a> {
    let all_upper = is_all_upper(text);
    let (spans, separator) = raw_spans(text, all_upper);
    let tokens = resolve_tokens(text, &spans, acronyms);
    let case = detect_case(all_upper, &tokens, text);
    Parsed {
        tokens,
        case,
        separator,
    }
}

type Span = (usize, usize);

/// First pass: byte spans of raw words, plus the first boundary char.
fn raw_spans(text: &str, all_upper: bool) -> (SmallVec<[Span; 8]>, Option<char>) {
    let mut spans: SmallVec<[Span; 8]> = SmallVec::new();
    let mut separator = None;
    let mut start: Option<usize> = None;
    let mut prev: Option<CharClass> = None;

    for (i, c) in text.char_indices() {
        let mut class = classify(c);
        if all_upper && class == CharClass::Upper {
            // Boundary detection only; token text keeps original casing.
            class = CharClass::Lower;
        }
        if class.is_boundary() {
            if let Some(s) = start.take() {
                spans.push((s, i));
            }
            if separator.is_none() {
                separator = Some(c);
            }
            prev = None;
            continue;
        }
        let split = match prev {
            None => false,
            Some(p) => {
                class == CharClass::Upper
                    || (p == CharClass::Digit) != (class == CharClass::Digit)
            }
        };
        if split && let Some(s) = start.take() {
            spans.push((s, i));
        }
        if start.is_none() {
            start = Some(i);
        }
        prev = Some(class);
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    (spans, separator)
}

/// A raw span holding exactly one uppercase letter.
fn is_single_upper(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if classify(c) == CharClass::Upper
    )
}

/// Second pass: turn spans into tokens, resolving free-standing capital
/// runs against the acronym set and tagging whole-word matches.
fn resolve_tokens<'a>(text: &'a str, spans: &[Span], acronyms: &AcronymSet) -> TokenSeq<'a> {
    let mut tokens = TokenSeq::new();
    let mut i = 0;
    while i < spans.len() {
        let (start, end) = spans[i];
        let word = &text[start..end];

        if acronyms.is_empty() || !is_single_upper(word) {
            tokens.push(Token::new(word, false));
            i += 1;
            continue;
        }

        // Extend the run over adjacent single capitals. Adjacency breaks
        // at consumed boundaries and at digit words automatically: those
        // leave a gap or fail the single-capital test.
        let mut j = i;
        let mut run_end = end;
        while let Some(&(ns, ne)) = spans.get(j + 1) {
            if ns == run_end && is_single_upper(&text[ns..ne]) {
                run_end = ne;
                j += 1;
            } else {
                break;
            }
        }

        // The run's trailing capital rule: a directly following word that
        // opens with an uppercase letter contributes that letter to the
        // match window, so an acronym may claim it (`HTTPE` + `rror`).
        let mut window_end = run_end;
        let mut next_word: Option<Span> = None;
        if let Some(&(ns, ne)) = spans.get(j + 1)
            && ns == run_end
        {
            let first = text[ns..ne].chars().next().expect("spans are non-empty");
            if classify(first) == CharClass::Upper {
                window_end = ns + first.len_utf8();
                next_word = Some((ns, ne));
            }
        }

        let mut pos = start;
        let mut consumed_next = false;
        while pos < run_end {
            match acronyms.longest_prefix_match(&text[pos..window_end]) {
                Some(len) => {
                    tokens.push(Token::new(&text[pos..pos + len], true));
                    pos += len;
                    if pos > run_end {
                        // Claimed the next word's capital: its lowercase
                        // remainder stands alone.
                        let (_, ne) = next_word.expect("window extends only into next_word");
                        if pos < ne {
                            tokens.push(Token::new(&text[pos..ne], false));
                        }
                        consumed_next = true;
                    }
                }
                None => {
                    let ch = text[pos..].chars().next().expect("pos < run_end");
                    tokens.push(Token::new(&text[pos..pos + ch.len_utf8()], false));
                    pos += ch.len_utf8();
                }
            }
        }
        i = j + 1 + usize::from(consumed_next);
    }

    if !acronyms.is_empty() {
        for token in tokens.iter_mut() {
            if !token.is_acronym && acronyms.contains(token.text) {
                token.is_acronym = true;
            }
        }
    }
    tokens
}

fn detect_case(all_upper: bool, tokens: &[Token<'_>], text: &str) -> DetectedCase {
    if all_upper {
        return DetectedCase::Upper;
    }
    if is_all_lower(text) {
        return DetectedCase::Lower;
    }
    let Some(first) = tokens.first() else {
        return DetectedCase::Unknown;
    };
    let title = |t: &Token<'_>| matches!(t.shape, Shape::Capitalized | Shape::AllUpper);
    let mut camel = first.shape == Shape::AllLower;
    let mut pascal = title(first);
    if camel || pascal {
        for token in &tokens[1..] {
            let t = title(token);
            camel &= t;
            pascal &= t;
            if !t {
                break;
            }
        }
    }
    if camel {
        DetectedCase::Camel
    } else if pascal {
        DetectedCase::Pascal
    } else {
        DetectedCase::Mixed
    }
}
