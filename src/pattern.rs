use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::str::Split;

use crate::grammar::{VAR_DELIMITER, VAR_PREFIX, VAR_SUFFIX, VarType};
use crate::{Captures, Error, ErrorKind, Result, fatal};

/// A route pattern compiled to a regular expression.
///
/// [`match_path`] compiles a fresh `RoutePattern` on every call. Build one
/// with [`RoutePattern::new`] and keep it to match the same route repeatedly.
#[derive(Clone)]
pub struct RoutePattern {
    source: String,
    var_names: Vec<String>,
    regex: Regex,
}
impl fmt::Debug for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\"", self.source)
    }
}
impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl RoutePattern {
    /// Compiles `pattern`.
    ///
    /// Fails with [`ErrorKind::InvalidRegex`] when the generated expression
    /// does not compile, e.g. a malformed `raw(...)` body or a variable name
    /// used twice.
    pub fn new(pattern: &str) -> Result<Self> {
        let layout = Layout::new(pattern);
        let mut var_names = Vec::new();
        let parts: Vec<Cow<str>> = layout
            .segments()
            .map(|s| match Segment::parse(s) {
                Segment::Literal(text) => Cow::Borrowed(text),
                Segment::Var { name, ty } => {
                    var_names.push(name.to_string());
                    Cow::Owned(format!("(?P<{name}>{})", ty.regex()))
                }
            })
            .collect();
        let re = layout.assemble(parts);
        let regex = Regex::new(&re).map_err(|e| Error::new(pattern, ErrorKind::InvalidRegex(e)))?;
        log::trace!("compiled route pattern {pattern:?} to {re:?}");
        Ok(Self {
            source: pattern.to_string(),
            var_names,
            regex,
        })
    }

    /// Matches the whole of `candidate` and returns the captured variables.
    pub fn captures(&self, candidate: &str) -> Option<Captures> {
        if self.source == candidate && !is_templated(&self.source) {
            return Some(Captures::empty());
        }
        let captures = self.regex.captures(candidate)?;
        if captures.len() != self.regex.captures_len() {
            return None;
        }
        if captures.get(0)?.as_str() != candidate {
            return None;
        }
        let mut vars = Captures::empty();
        for name in self.regex.capture_names().flatten() {
            vars.insert(name, captures.name(name).map_or("", |m| m.as_str()));
        }
        Some(vars)
    }
    pub fn is_match(&self, candidate: &str) -> bool {
        self.captures(candidate).is_some()
    }

    pub fn var_names(&self) -> impl Iterator<Item = &str> {
        self.var_names.iter().map(String::as_str)
    }
    pub fn find_var_name(&self, name: &str) -> Option<usize> {
        self.var_names.iter().position(|n| n == name)
    }
    pub fn as_str(&self) -> &str {
        &self.source
    }
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Matches `candidate` against `pattern`, compiling the pattern on the spot.
///
/// Returns `None` when the path does not fit the route.
///
/// # Panics
///
/// Panics if the pattern compiles to an invalid regular expression. Use
/// [`try_match_path`] to get the error instead.
///
/// ```
/// let vars = routevars::match_path("/users/<<id:int>>/<<name:string>>", "/users/1234/john").unwrap();
/// assert_eq!(vars.name("id"), Some("1234"));
/// assert_eq!(vars.name("name"), Some("john"));
///
/// assert!(routevars::match_path("/users/<<id:int>>/<<name:string>>", "/users/1234/johna/a").is_none());
/// ```
pub fn match_path(pattern: &str, candidate: &str) -> Option<Captures> {
    fatal(try_match_path(pattern, candidate))
}

pub fn try_match_path(pattern: &str, candidate: &str) -> Result<Option<Captures>> {
    if pattern == candidate && !is_templated(pattern) {
        return Ok(Some(Captures::empty()));
    }
    Ok(RoutePattern::new(pattern)?.captures(candidate))
}

fn is_templated(pattern: &str) -> bool {
    pattern.contains(VAR_PREFIX) && pattern.contains(VAR_SUFFIX)
}

pub(crate) fn placeholder_inner(segment: &str) -> Option<&str> {
    segment.strip_prefix(VAR_PREFIX)?.strip_suffix(VAR_SUFFIX)
}

/// A pattern with one leading and one trailing slash set aside.
pub(crate) struct Layout<'a> {
    leading: bool,
    body: &'a str,
    trailing: bool,
}
impl<'a> Layout<'a> {
    pub(crate) fn new(pattern: &'a str) -> Self {
        let (leading, rest) = match pattern.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, pattern),
        };
        // "//" keeps its second slash in the body
        let (trailing, body) = match rest.strip_suffix('/') {
            Some(body) if !(leading && rest.len() == 1) => (true, body),
            _ => (false, rest),
        };
        Self {
            leading,
            body,
            trailing,
        }
    }
    pub(crate) fn segments(&self) -> Split<'a, char> {
        self.body.split('/')
    }
    pub(crate) fn assemble<S: AsRef<str>>(&self, parts: impl IntoIterator<Item = S>) -> String {
        let mut out = String::new();
        if self.leading {
            out.push('/');
        }
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                out.push('/');
            }
            out.push_str(part.as_ref());
        }
        if self.trailing {
            out.push('/');
        }
        out
    }
}

#[derive(Debug, PartialEq)]
enum Segment<'a> {
    Literal(&'a str),
    Var { name: &'a str, ty: VarType<'a> },
}
impl<'a> Segment<'a> {
    fn parse(segment: &'a str) -> Self {
        let Some(inner) = placeholder_inner(segment) else {
            return Self::Literal(segment);
        };
        let mut tokens = inner.split(VAR_DELIMITER);
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(name), None, _) if !name.is_empty() => Self::Var {
                name,
                ty: VarType::parse(name),
            },
            (Some(name), Some(ty), None) => Self::Var {
                name,
                ty: VarType::parse(ty),
            },
            _ => {
                log::debug!("placeholder {segment:?} is not `name` or `name:type`, kept as literal");
                Self::Literal(inner)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::grammar::Keyword;

    fn regex_of(pattern: &str) -> String {
        RoutePattern::new(pattern).unwrap().regex().as_str().to_string()
    }

    #[rstest]
    #[case("/a/b/", true, "a/b", true)]
    #[case("a/b", false, "a/b", false)]
    #[case("/a", true, "a", false)]
    #[case("a/", false, "a", true)]
    #[case("/", true, "", false)]
    #[case("//", true, "/", false)]
    #[case("///", true, "/", true)]
    #[case("", false, "", false)]
    fn layout(
        #[case] pattern: &str,
        #[case] leading: bool,
        #[case] body: &str,
        #[case] trailing: bool,
    ) {
        let layout = Layout::new(pattern);
        assert_eq!(
            (layout.leading, layout.body, layout.trailing),
            (leading, body, trailing)
        );
    }

    #[rstest]
    #[case("/", "/")]
    #[case("//", "//")]
    #[case("/a//b/", "/a//b/")]
    #[case("a/b", "a/b")]
    fn layout_reassembles(#[case] pattern: &str, #[case] expected: &str) {
        let layout = Layout::new(pattern);
        assert_eq!(layout.assemble(layout.segments()), expected);
    }

    #[rstest]
    #[case("users", Segment::Literal("users"))]
    #[case("<<id>>", Segment::Var { name: "id", ty: VarType::Unknown("id") })]
    #[case("<<int>>", Segment::Var { name: "int", ty: VarType::Keyword(Keyword::Int) })]
    #[case("<<id:int>>", Segment::Var { name: "id", ty: VarType::Keyword(Keyword::Int) })]
    #[case("<<c:raw(x+)>>", Segment::Var { name: "c", ty: VarType::Raw("x+") })]
    #[case("<<a:b:c>>", Segment::Literal("a:b:c"))]
    #[case("<<>>", Segment::Literal(""))]
    #[case("<<id", Segment::Literal("<<id"))]
    #[case("id>>", Segment::Literal("id>>"))]
    #[case("x<<id>>", Segment::Literal("x<<id>>"))]
    fn parse_segment(#[case] segment: &str, #[case] expected: Segment) {
        assert_eq!(Segment::parse(segment), expected);
    }

    #[test]
    fn regex_generation() {
        assert_eq!(
            regex_of("/users/<<id:int>>/<<name:string>>"),
            "/users/(?P<id>[0-9]+)/(?P<name>[0-9a-zA-Z_-]+)"
        );
        assert_eq!(regex_of("<<name>>/"), "(?P<name>[a-zA-Z]+)/");
        assert_eq!(regex_of("/x/<<a:b:c>>"), "/x/a:b:c");
        assert_eq!(regex_of("/a.b"), "/a.b");
    }

    #[test]
    fn var_names_in_order() {
        let p = RoutePattern::new("/<<b:int>>/x/<<a>>/<<c:raw((?P<inner>z))>>").unwrap();
        assert_eq!(p.var_names().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(p.find_var_name("a"), Some(1));
        assert_eq!(p.find_var_name("inner"), None);
    }

    #[test]
    fn captures_include_named_groups_from_raw() {
        let p = RoutePattern::new("/<<c:raw(v(?P<major>[0-9]+))>>").unwrap();
        let vars = p.captures("/v12").unwrap();
        assert_eq!(vars.name("c"), Some("v12"));
        assert_eq!(vars.name("major"), Some("12"));
    }

    #[test]
    fn non_participating_group_is_empty() {
        let p = RoutePattern::new("/<<c:raw(a|(?P<b>b))>>").unwrap();
        assert_eq!(p.captures("/a").unwrap().name("b"), Some(""));
    }

    #[test]
    fn leftmost_first_match_must_cover_candidate() {
        let p = RoutePattern::new("/<<c:raw(a|ab)>>").unwrap();
        assert!(p.captures("/a").is_some());
        assert!(p.captures("/ab").is_none());
    }

    #[rstest]
    #[case("/<<c:raw([A-Z)>>")]
    #[case("/<<id:int>>/<<id:int>>")]
    #[case("/<<:int>>")]
    fn invalid_regex(#[case] pattern: &str) {
        let e = RoutePattern::new(pattern).unwrap_err();
        assert!(matches!(e.kind(), ErrorKind::InvalidRegex(_)));
        assert!(e.is_contract_violation());
    }

    #[test]
    #[should_panic(expected = "invalid regex")]
    fn match_path_panics_on_invalid_regex() {
        match_path("/<<c:raw(()>>", "/x");
    }

    #[test]
    fn static_pattern_skips_compilation() {
        // would not compile as a regex
        assert_eq!(try_match_path("/a(", "/a(").unwrap(), Some(Captures::empty()));
        assert!(try_match_path("/a(", "/b(").is_err());
    }
}
