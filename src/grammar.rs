use parse_display::{Display, FromStr};

/// Opens a placeholder segment.
pub const VAR_PREFIX: &str = "<<";
/// Closes a placeholder segment.
pub const VAR_SUFFIX: &str = ">>";
/// Separates the variable name from its type inside a placeholder.
pub const VAR_DELIMITER: &str = ":";

/// Patterns of this length or shorter cannot hold a placeholder.
pub(crate) const MIN_TEMPLATED_LEN: usize =
    VAR_PREFIX.len() + VAR_SUFFIX.len() + VAR_DELIMITER.len();

pub const REGEX_ANY: &str = ".+";
pub const REGEX_INT: &str = "[0-9]+";
pub const REGEX_ALPHA: &str = "[a-zA-Z]+";
pub const REGEX_HEX: &str = "[0-9a-fA-F]+";
pub const REGEX_UUID: &str =
    "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}";
pub const REGEX_ALPHANUMERIC: &str = "[0-9a-zA-Z_-]+";

const RAW_OPEN: &str = "raw(";
const RAW_CLOSE: &str = ")";

/// Built-in placeholder types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, FromStr)]
#[display(style = "lowercase")]
pub enum Keyword {
    Int,
    String,
    Slug,
    Uuid,
    Any,
    Hex,
}
impl Keyword {
    pub fn regex(self) -> &'static str {
        match self {
            Self::Int => REGEX_INT,
            Self::String | Self::Slug => REGEX_ALPHANUMERIC,
            Self::Uuid => REGEX_UUID,
            Self::Any => REGEX_ANY,
            Self::Hex => REGEX_HEX,
        }
    }
}

/// The type token of a placeholder.
///
/// Keywords are matched case-sensitively. `raw(...)` is recognized in any
/// letter case, and its body is used verbatim as the regex fragment.
/// Anything else is [`VarType::Unknown`] and matches letters only.
///
/// ```
/// use routevars::{Keyword, VarType};
///
/// assert_eq!(VarType::parse("int"), VarType::Keyword(Keyword::Int));
/// assert_eq!(VarType::parse("RAW([A-Z]{3})"), VarType::Raw("[A-Z]{3}"));
/// assert_eq!(VarType::parse("Int").regex(), "[a-zA-Z]+");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VarType<'a> {
    Keyword(Keyword),
    Raw(&'a str),
    Unknown(&'a str),
}
impl<'a> VarType<'a> {
    pub fn parse(token: &'a str) -> Self {
        if let Some(body) = raw_body(token) {
            return Self::Raw(body);
        }
        match token.parse() {
            Ok(keyword) => Self::Keyword(keyword),
            Err(_) => Self::Unknown(token),
        }
    }
    pub fn regex(&self) -> &'a str {
        match *self {
            Self::Keyword(keyword) => keyword.regex(),
            Self::Raw(body) => body,
            Self::Unknown(_) => REGEX_ALPHA,
        }
    }
}

fn raw_body(token: &str) -> Option<&str> {
    let open = token.get(..RAW_OPEN.len())?;
    if !open.eq_ignore_ascii_case(RAW_OPEN) {
        return None;
    }
    token[RAW_OPEN.len()..].strip_suffix(RAW_CLOSE)
}
