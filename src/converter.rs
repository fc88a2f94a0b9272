//! Public conversion surface: the [`Converter`] type and the per-style
//! free functions.

use thiserror::Error;

use crate::acronym::AcronymSet;
use crate::render::render;
use crate::segment::parse;
use crate::style::Style;
use crate::unicode::capitalize;

/// Public error type for every conversion entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("no input text: supply text at construction or call time")]
    MissingInput,

    #[error("invalid acronym `{0}`: acronyms must be non-empty and contain no boundary characters")]
    InvalidAcronym(String),
}

/// Reusable converter holding optional default text and an acronym set.
///
/// Both are read-only after construction; conversions segment fresh on
/// every call and share nothing mutable, so a `Converter` is safe to
/// use from many threads at once.
///
/// ```
/// use recase::Converter;
///
/// let converter = Converter::builder()
///     .text("fooBarHTTPError")
///     .acronym("HTTP")
///     .build()?;
/// assert_eq!(converter.snake(None)?, "foo_bar_http_error");
/// assert_eq!(converter.camel(Some("HELLO_HTTP_WORLD"))?, "helloHTTPWorld");
/// # Ok::<(), recase::CaseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    text: Option<String>,
    acronyms: AcronymSet,
}

impl Converter {
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::default()
    }

    /// Converter with no default text and no acronyms.
    pub fn new() -> Converter {
        Converter::default()
    }

    pub fn acronyms(&self) -> &AcronymSet {
        &self.acronyms
    }

    /// Convert into `style`. Call-site `text` overrides the stored
    /// default; with neither present this is [`CaseError::MissingInput`].
    pub fn convert(&self, style: Style, text: Option<&str>) -> Result<String, CaseError> {
        let text = text
            .or(self.text.as_deref())
            .ok_or(CaseError::MissingInput)?;
        let parsed = parse(text, &self.acronyms);
        Ok(render(&parsed.tokens, style.config()))
    }

    /// camelCase: `fooBarString`
    pub fn camel(&self, text: Option<&str>) -> Result<String, CaseError> {
        self.convert(Style::Camel, text)
    }

    /// PascalCase: `FooBarString` (also known as MixedCase)
    pub fn pascal(&self, text: Option<&str>) -> Result<String, CaseError> {
        self.convert(Style::Pascal, text)
    }

    /// snake_case: `foo_bar_string`
    pub fn snake(&self, text: Option<&str>) -> Result<String, CaseError> {
        self.convert(Style::Snake, text)
    }

    /// dash-case: `foo-bar-string` (also known as kebab-case, spinal-case)
    pub fn dash(&self, text: Option<&str>) -> Result<String, CaseError> {
        self.convert(Style::Dash, text)
    }

    /// CONST_CASE: `FOO_BAR_STRING` (also known as SCREAMING_SNAKE_CASE)
    pub fn const_case(&self, text: Option<&str>) -> Result<String, CaseError> {
        self.convert(Style::Const, text)
    }

    /// dot.case: `foo.bar.string`
    pub fn dot(&self, text: Option<&str>) -> Result<String, CaseError> {
        self.convert(Style::Dot, text)
    }

    /// Space-separated words, original casing preserved: `foo Bar String`
    pub fn separate_words(&self, text: Option<&str>) -> Result<String, CaseError> {
        self.convert(Style::SeparateWords, text)
    }

    /// slash/case, original casing preserved: `foo/Bar/String`
    pub fn slash(&self, text: Option<&str>) -> Result<String, CaseError> {
        self.convert(Style::Slash, text)
    }

    /// backslash\case, original casing preserved: `foo\Bar\String`
    pub fn backslash(&self, text: Option<&str>) -> Result<String, CaseError> {
        self.convert(Style::Backslash, text)
    }

    /// Ada_Case: `Foo_Bar_String` (also known as Camel_Snake)
    pub fn ada(&self, text: Option<&str>) -> Result<String, CaseError> {
        self.convert(Style::Ada, text)
    }

    /// Header-Case: `Foo-Bar-String`
    pub fn header(&self, text: Option<&str>) -> Result<String, CaseError> {
        self.convert(Style::Header, text)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConverterBuilder {
    text: Option<String>,
    acronyms: Vec<String>,
}

impl ConverterBuilder {
    /// Default text used when a conversion call supplies none.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn acronym(mut self, acronym: impl Into<String>) -> Self {
        self.acronyms.push(acronym.into());
        self
    }

    pub fn acronyms<I, S>(mut self, acronyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.acronyms.extend(acronyms.into_iter().map(Into::into));
        self
    }

    /// Validates and canonicalizes the acronym set.
    pub fn build(self) -> Result<Converter, CaseError> {
        Ok(Converter {
            text: self.text,
            acronyms: AcronymSet::new(&self.acronyms)?,
        })
    }
}

fn convert_with(style: Style, text: &str, acronyms: &[&str]) -> Result<String, CaseError> {
    let set = AcronymSet::new(acronyms.iter().copied())?;
    let parsed = parse(text, &set);
    Ok(render(&parsed.tokens, style.config()))
}

/// Return `text` in camelCase style.
///
/// ```
/// assert_eq!(recase::camel("hello world", &[])?, "helloWorld");
/// assert_eq!(recase::camel("HELLO_HTML_WORLD", &["HTML"])?, "helloHTMLWorld");
/// # Ok::<(), recase::CaseError>(())
/// ```
pub fn camel(text: &str, acronyms: &[&str]) -> Result<String, CaseError> {
    convert_with(Style::Camel, text, acronyms)
}

/// Return `text` in PascalCase style.
///
/// ```
/// assert_eq!(recase::pascal("hello_html_world", &["HTML"])?, "HelloHTMLWorld");
/// # Ok::<(), recase::CaseError>(())
/// ```
pub fn pascal(text: &str, acronyms: &[&str]) -> Result<String, CaseError> {
    convert_with(Style::Pascal, text, acronyms)
}

/// Return `text` in snake_case style.
///
/// ```
/// assert_eq!(recase::snake("HelloHTMLWorld", &["HTML"])?, "hello_html_world");
/// # Ok::<(), recase::CaseError>(())
/// ```
pub fn snake(text: &str, acronyms: &[&str]) -> Result<String, CaseError> {
    convert_with(Style::Snake, text, acronyms)
}

/// Return `text` in dash-case style.
pub fn dash(text: &str, acronyms: &[&str]) -> Result<String, CaseError> {
    convert_with(Style::Dash, text, acronyms)
}

/// Return `text` in CONST_CASE style.
pub fn const_case(text: &str, acronyms: &[&str]) -> Result<String, CaseError> {
    convert_with(Style::Const, text, acronyms)
}

/// Return `text` in dot.case style.
pub fn dot(text: &str, acronyms: &[&str]) -> Result<String, CaseError> {
    convert_with(Style::Dot, text, acronyms)
}

/// Return `text` as space-separated words, original casing preserved.
///
/// ```
/// assert_eq!(recase::separate_words("helloHTMLWorld", &["HTML"])?, "hello HTML World");
/// # Ok::<(), recase::CaseError>(())
/// ```
pub fn separate_words(text: &str, acronyms: &[&str]) -> Result<String, CaseError> {
    convert_with(Style::SeparateWords, text, acronyms)
}

/// Return `text` in slash/case style, original casing preserved.
pub fn slash(text: &str, acronyms: &[&str]) -> Result<String, CaseError> {
    convert_with(Style::Slash, text, acronyms)
}

/// Return `text` in backslash\case style, original casing preserved.
pub fn backslash(text: &str, acronyms: &[&str]) -> Result<String, CaseError> {
    convert_with(Style::Backslash, text, acronyms)
}

/// Return `text` in Ada_Case style.
///
/// ```
/// assert_eq!(recase::ada("helloHTMLWorld", &["HTML"])?, "Hello_HTML_World");
/// # Ok::<(), recase::CaseError>(())
/// ```
pub fn ada(text: &str, acronyms: &[&str]) -> Result<String, CaseError> {
    convert_with(Style::Ada, text, acronyms)
}

/// Return `text` in Header-Case style.
pub fn header(text: &str, acronyms: &[&str]) -> Result<String, CaseError> {
    convert_with(Style::Header, text, acronyms)
}

/// Whole-string lowercase. Acronyms and word boundaries play no part.
pub fn lower(text: &str) -> String {
    text.to_lowercase()
}

/// Whole-string uppercase. Acronyms and word boundaries play no part.
pub fn upper(text: &str) -> String {
    text.to_uppercase()
}

/// First scalar uppercased, the rest lowercased.
pub fn capital(text: &str) -> String {
    capitalize(text)
}
