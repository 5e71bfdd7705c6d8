use parse_display::Display;
use std::fmt;

mod args;
mod captures;
mod formatter;
mod grammar;
mod macros;
mod pattern;

mod tests_readme;

pub use args::Args;
pub use captures::Captures;
pub use formatter::{UrlFormatter, format_url, format_url_safe, try_format_url};
pub use grammar::{
    Keyword, REGEX_ALPHA, REGEX_ALPHANUMERIC, REGEX_ANY, REGEX_HEX, REGEX_INT, REGEX_UUID,
    VAR_DELIMITER, VAR_PREFIX, VAR_SUFFIX, VarType,
};
pub use pattern::{RoutePattern, match_path, try_match_path};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The pattern produced a regular expression that does not compile.
    #[display("invalid regex: {0}")]
    InvalidRegex(regex::Error),
    /// Fewer arguments than placeholders.
    #[display("not enough arguments for URL: no argument for placeholder {index}")]
    MissingArgument { index: usize },
    /// A formatted URL does not match its own pattern.
    #[display("invalid URL: {url}")]
    InvalidUrl { url: String },
}

#[derive(Clone, Debug)]
pub struct Error {
    source: String,
    kind: ErrorKind,
}

impl Error {
    fn new(source: &str, kind: ErrorKind) -> Self {
        Self {
            source: source.to_string(),
            kind,
        }
    }
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
    /// The pattern the error was raised for.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Returns `true` for errors caused by a misuse of the API rather than by
    /// the data: an invalid pattern, or too few arguments.
    ///
    /// The panicking entry points panic on exactly these errors.
    pub fn is_contract_violation(&self) -> bool {
        match self.kind {
            ErrorKind::InvalidRegex(_) | ErrorKind::MissingArgument { .. } => true,
            ErrorKind::InvalidUrl { .. } => false,
        }
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (pattern: \"{}\")", self.kind, self.source)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::InvalidRegex(e) => Some(e),
            _ => None,
        }
    }
}

fn fatal<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}
