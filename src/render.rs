//! Token-to-string rendering: one fold over the token sequence.

use crate::style::{CaseConfig, WordRule};
use crate::token::Token;
use crate::unicode::capitalize;

/// Render `tokens` per `config`. Total: an empty slice renders to an
/// empty string.
pub fn render(tokens: &[Token<'_>], config: &CaseConfig) -> String {
    let mut out = String::with_capacity(estimate(tokens, config));
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(config.delimiter);
        }
        if config.preserve_acronyms && token.is_acronym {
            // Canonical acronym form, independent of position.
            out.push_str(&token.text.to_uppercase());
            continue;
        }
        let rule = if i == 0 { config.first } else { config.rest };
        match rule {
            WordRule::Lower => out.push_str(&token.text.to_lowercase()),
            WordRule::Upper => out.push_str(&token.text.to_uppercase()),
            WordRule::Capitalize => out.push_str(&capitalize(token.text)),
            WordRule::Preserve => out.push_str(token.text),
        }
    }
    out
}

fn estimate(tokens: &[Token<'_>], config: &CaseConfig) -> usize {
    let text: usize = tokens.iter().map(|t| t.text.len()).sum();
    text + config.delimiter.len() * tokens.len().saturating_sub(1)
}
