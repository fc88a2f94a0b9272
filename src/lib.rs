pub mod acronym;
pub mod converter;
pub mod render;
pub mod segment;
pub mod style;
pub mod token;
pub mod unicode;

pub use acronym::AcronymSet;
pub use converter::{CaseError, Converter, ConverterBuilder};
pub use converter::{
    ada, backslash, camel, capital, const_case, dash, dot, header, lower, pascal, separate_words,
    slash, snake, upper,
};
pub use render::render;
pub use segment::{DetectedCase, Parsed, parse, segment};
pub use style::{CaseConfig, STYLE_TABLE, Style, WordRule};
pub use token::{Shape, Token, TokenSeq};
