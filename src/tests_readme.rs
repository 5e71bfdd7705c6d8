// #![include_doc("../README.md", start)]
//! # routevars
//!
//! Typed URL path templates for HTTP routers.
//!
//! ## Overview
//!
//! `routevars` turns a route pattern such as `/users/<<id:int>>/<<name:string>>` into a regular expression that matches request paths and extracts named variables, and formats concrete URLs from positional arguments using the same pattern.
//!
//! ## Pattern syntax
//!
//! A placeholder takes up a whole path segment:
//!
//! - `<<name:type>>` captures a variable called `name` of type `type`
//! - `<<name>>` uses `name` both as the variable name and as its type
//!
//! | type          | matches                        |
//! | ------------- | ------------------------------ |
//! | `int`         | `[0-9]+`                       |
//! | `string`      | `[0-9a-zA-Z_-]+`               |
//! | `slug`        | `[0-9a-zA-Z_-]+`               |
//! | `uuid`        | 8-4-4-4-12 hex digits          |
//! | `any`         | `.+`                           |
//! | `hex`         | `[0-9a-fA-F]+`                 |
//! | `raw(REGEX)`  | `REGEX`, verbatim              |
//! | anything else | `[a-zA-Z]+`                    |
//!
//! Segments that are not placeholders are inserted into the regex as they are, so regex metacharacters in them are not escaped.
//!
//! ## Usage
//!
//! ### Matching a path
//!
//! ```rust
//! fn main() {
//!     let pattern = "/users/<<id:int>>/<<name:string>>";
//!
//!     let vars = routevars::match_path(pattern, "/users/1234/john").unwrap();
//!     assert_eq!(vars.name("id"), Some("1234"));
//!     assert_eq!(vars.name("name"), Some("john"));
//!
//!     assert!(routevars::match_path(pattern, "/users/1234/johna/a").is_none());
//! }
//! ```
//!
//! ### Formatting a URL
//!
//! ```rust
//! use routevars::UrlFormatter;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let user = UrlFormatter::from_static("/users/<<id:int>>/<<name:string>>");
//!     assert_eq!(user.format(&["1234", "john"]), "/users/1234/john");
//!
//!     let url = routevars::format_url_safe!(user.as_str(), 1234, "john")?;
//!     assert_eq!(url, "/users/1234/john");
//!
//!     // arguments in the wrong order do not satisfy `int`
//!     assert!(routevars::format_url_safe!(user.as_str(), "john", 1234).is_err());
//!     Ok(())
//! }
//! ```
//!
//! ### Compiling once
//!
//! ```rust
//! use routevars::RoutePattern;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let route = RoutePattern::new("/route/<<code:raw([A-Z]{3})>>")?;
//!     assert!(route.is_match("/route/ABC"));
//!     assert!(!route.is_match("/route/AB"));
//!     Ok(())
//! }
//! ```
//!
//! ## License
//!
//! This project is dual licensed under Apache-2.0/MIT. See the two LICENSE-\* files for details.
//!
//! ## Contribution
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.
// #![include_doc("../README.md", end)]
