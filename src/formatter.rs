use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::grammar::MIN_TEMPLATED_LEN;
use crate::pattern::{Layout, match_path, placeholder_inner};
use crate::{Args, Captures, Error, ErrorKind, Result, RoutePattern, fatal};

/// A route pattern used to build and recognize URLs.
///
/// ```
/// use routevars::UrlFormatter;
///
/// const USER: UrlFormatter = UrlFormatter::from_static("/users/<<id:int>>/<<name:string>>");
///
/// assert_eq!(routevars::format_url!(USER.as_str(), 1234, "john"), "/users/1234/john");
/// assert_eq!(USER.format(&["1234", "john"]), "/users/1234/john");
/// assert!(USER.format_safe(&["john", "1234"]).is_err());
/// assert!(USER.match_path("/users/1234/john").is_some());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlFormatter(Cow<'static, str>);

impl UrlFormatter {
    pub fn new(pattern: impl Into<Cow<'static, str>>) -> Self {
        Self(pattern.into())
    }
    pub const fn from_static(pattern: &'static str) -> Self {
        Self(Cow::Borrowed(pattern))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// # Panics
    ///
    /// Panics if `args` has fewer values than the pattern has placeholders.
    pub fn format(&self, args: impl Args) -> String {
        format_url(&self.0, args)
    }
    pub fn try_format(&self, args: impl Args) -> Result<String> {
        try_format_url(&self.0, args)
    }
    /// See [`format_url_safe`].
    pub fn format_safe(&self, args: impl Args) -> Result<String> {
        format_url_safe(&self.0, args)
    }
    pub fn match_path(&self, candidate: &str) -> Option<Captures> {
        match_path(&self.0, candidate)
    }
    pub fn compile(&self) -> Result<RoutePattern> {
        RoutePattern::new(&self.0)
    }
}
impl fmt::Debug for UrlFormatter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}
impl fmt::Display for UrlFormatter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<&'static str> for UrlFormatter {
    fn from(pattern: &'static str) -> Self {
        Self::from_static(pattern)
    }
}
impl From<String> for UrlFormatter {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

/// Substitutes `args`, in order, for the placeholders of `pattern`.
///
/// Placeholder types are not checked; see [`format_url_safe`].
///
/// # Panics
///
/// Panics if `args` has fewer values than the pattern has placeholders. Use
/// [`try_format_url`] to get the error instead.
pub fn format_url(pattern: &str, args: impl Args) -> String {
    fatal(try_format_url(pattern, args))
}

pub fn try_format_url(pattern: &str, mut args: impl Args) -> Result<String> {
    if pattern.len() <= MIN_TEMPLATED_LEN {
        return Ok(pattern.to_string());
    }
    let layout = Layout::new(pattern);
    let mut parts = Vec::new();
    let mut index = 0;
    for segment in layout.segments() {
        if placeholder_inner(segment).is_none() {
            parts.push(Cow::Borrowed(segment));
            continue;
        }
        let Some(arg) = args.arg(index) else {
            return Err(Error::new(pattern, ErrorKind::MissingArgument { index }));
        };
        parts.push(Cow::Owned(arg.into_owned()));
        index += 1;
    }
    Ok(layout.assemble(parts))
}

/// Like [`format_url`], then checks that the result matches `pattern`.
///
/// Fails with [`ErrorKind::InvalidUrl`] when an argument does not satisfy the
/// type of its placeholder.
///
/// # Panics
///
/// Panics under the same conditions as [`format_url`] and [`match_path`].
///
/// ```
/// let pattern = "/users/<<id:int>>/<<name:string>>";
/// assert_eq!(routevars::format_url_safe!(pattern, 1234, "john").unwrap(), "/users/1234/john");
/// assert!(routevars::format_url_safe!(pattern, "john", 1234).is_err());
/// ```
pub fn format_url_safe(pattern: &str, args: impl Args) -> Result<String> {
    let url = format_url(pattern, args);
    if match_path(pattern, &url).is_none() {
        log::debug!("formatted url {url:?} does not match pattern {pattern:?}");
        return Err(Error::new(pattern, ErrorKind::InvalidUrl { url }));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("/a", "/a")]
    #[case("<<a>>", "<<a>>")]
    #[case("/<<a>>", "/x")]
    #[case("/about/us", "/about/us")]
    #[case("/<<a:b:c>>/", "/x/")]
    #[case("<<a>>/<<b>>", "x/y")]
    #[case("//<<a>>//", "//x//")]
    fn substitution(#[case] pattern: &str, #[case] expected: &str) {
        assert_eq!(format_url(pattern, &["x", "y"]), expected);
    }

    #[test]
    fn missing_argument() {
        let e = try_format_url("/a/<<x:int>>/<<y:int>>", &[1]).unwrap_err();
        assert!(matches!(e.kind(), ErrorKind::MissingArgument { index: 1 }));
        assert!(e.is_contract_violation());
    }

    #[test]
    #[should_panic(expected = "not enough arguments")]
    fn format_panics_on_missing_argument() {
        format_url("/a/<<x:int>>", ());
    }

    #[test]
    fn surplus_arguments_are_ignored() {
        assert_eq!(format_url("/a/<<x:int>>", &[1, 2, 3]), "/a/1");
    }

    #[test]
    fn safe_rejects_type_mismatch() {
        let e = format_url_safe("/n/<<x:int>>", &["abc"]).unwrap_err();
        match e.kind() {
            ErrorKind::InvalidUrl { url } => assert_eq!(url, "/n/abc"),
            kind => panic!("unexpected error kind: {kind}"),
        }
        assert!(!e.is_contract_violation());
    }

    #[test]
    fn formatter_text_forms() {
        let f = UrlFormatter::from("/users/<<id:int>>");
        assert_eq!(format!("{f:?}"), "\"/users/<<id:int>>\"");
        assert_eq!(f.to_string(), "/users/<<id:int>>");
        assert_eq!(UrlFormatter::new(String::from("/a")), UrlFormatter::from_static("/a"));
    }

    #[test]
    fn formatter_serde_is_transparent() {
        let f: UrlFormatter = serde_json::from_str("\"/users/<<id:int>>\"").unwrap();
        assert_eq!(f.as_str(), "/users/<<id:int>>");
        assert_eq!(serde_json::to_string(&f).unwrap(), "\"/users/<<id:int>>\"");
    }
}
