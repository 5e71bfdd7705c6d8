/// Formats a URL from a pattern and arguments of any [`Display`](std::fmt::Display) types.
///
/// ```
/// let url = routevars::format_url!("/users/<<id:int>>/<<name:string>>", 1234, "john");
/// assert_eq!(url, "/users/1234/john");
/// ```
#[macro_export]
macro_rules! format_url {
    ($pattern:expr $(,)?) => {
        $crate::format_url($pattern, ())
    };
    ($pattern:expr, $($arg:expr),+ $(,)?) => {
        $crate::format_url($pattern, &[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Like [`format_url!`], checking the result with [`format_url_safe`](crate::format_url_safe).
#[macro_export]
macro_rules! format_url_safe {
    ($pattern:expr $(,)?) => {
        $crate::format_url_safe($pattern, ())
    };
    ($pattern:expr, $($arg:expr),+ $(,)?) => {
        $crate::format_url_safe($pattern, &[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}
