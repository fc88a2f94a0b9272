//! Named target styles and their rendering configurations.
//!
//! The style table is static and immutable: one `CaseConfig` per named
//! style, generated from a single source-of-truth macro invocation and
//! shared by every call without synchronization.

use paste::paste;
use phf::{Map, phf_map};
use std::fmt;

/// Per-word casing rule applied by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordRule {
    Lower,
    Upper,
    /// First scalar uppercased, the rest lowercased.
    Capitalize,
    /// Emit the token text exactly as it appeared in the input.
    Preserve,
}

/// One target style: how tokens are cased and joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseConfig {
    pub delimiter: &'static str,
    pub first: WordRule,
    pub rest: WordRule,
    /// Acronym-tagged tokens keep their canonical upper-case form,
    /// regardless of position and of `first`/`rest`.
    pub preserve_acronyms: bool,
}

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_styles {
    ($(
        $variant:ident, $name:literal,
        delimiter: $delim:literal,
        first: $first:ident, rest: $rest:ident,
        preserve_acronyms: $pa:literal
    ),* $(,)?) => {
        /// Every named target style.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Style {
            $( $variant, )*
        }

        paste! {
            // Per-style static configs
            $(
                static [<$variant:upper _CONFIG>]: CaseConfig = CaseConfig {
                    delimiter: $delim,
                    first: WordRule::$first,
                    rest: WordRule::$rest,
                    preserve_acronyms: $pa,
                };
            )*

            /// Global name → style lookup table (public)
            pub static STYLE_TABLE: Map<&'static str, Style> = phf_map! {
                $( $name => Style::$variant, )*
            };

            impl Style {
                pub const ALL: &'static [Style] = &[ $( Style::$variant, )* ];

                /// Canonical style name, as accepted by [`Style::from_name`].
                pub fn name(self) -> &'static str {
                    match self {
                        $( Style::$variant => $name, )*
                    }
                }

                pub fn config(self) -> &'static CaseConfig {
                    match self {
                        $( Style::$variant => &[<$variant:upper _CONFIG>], )*
                    }
                }

                pub fn from_name(name: &str) -> Option<Style> {
                    STYLE_TABLE.get(name).copied()
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Style definitions (single source of truth)
// ---------------------------------------------------------------------------
define_styles! {
    Camel, "camel",
        delimiter: "", first: Lower, rest: Capitalize, preserve_acronyms: true,
    Pascal, "pascal",
        delimiter: "", first: Capitalize, rest: Capitalize, preserve_acronyms: true,
    Snake, "snake",
        delimiter: "_", first: Lower, rest: Lower, preserve_acronyms: false,
    Dash, "dash",
        delimiter: "-", first: Lower, rest: Lower, preserve_acronyms: false,
    Const, "const",
        delimiter: "_", first: Upper, rest: Upper, preserve_acronyms: false,
    Dot, "dot",
        delimiter: ".", first: Lower, rest: Lower, preserve_acronyms: false,
    SeparateWords, "separate_words",
        delimiter: " ", first: Preserve, rest: Preserve, preserve_acronyms: false,
    Slash, "slash",
        delimiter: "/", first: Preserve, rest: Preserve, preserve_acronyms: false,
    Backslash, "backslash",
        delimiter: "\\", first: Preserve, rest: Preserve, preserve_acronyms: false,
    Ada, "ada",
        delimiter: "_", first: Capitalize, rest: Capitalize, preserve_acronyms: true,
    Header, "header",
        delimiter: "-", first: Capitalize, rest: Capitalize, preserve_acronyms: true,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
