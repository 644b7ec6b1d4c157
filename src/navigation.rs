//! Path-style routes between the list and detail screens

use percent_encoding::percent_decode_str;
use std::fmt;

const STATE_PREFIX: &str = "/state/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    /// Detail screen; the state name is the only parameter
    State(String),
}

impl Route {
    pub fn state(name: impl Into<String>) -> Self {
        Route::State(name.into())
    }

    /// Path form, e.g. "/state/New York"
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::State(name) => format!("{}{}", STATE_PREFIX, name),
        }
    }

    /// Inverse of [`Route::path`]. The name segment is percent-decoded;
    /// a decoded `/` or invalid UTF-8 is rejected.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Some(Route::List);
        }

        let raw = path.strip_prefix(STATE_PREFIX)?.trim_end_matches('/');
        if raw.contains('/') {
            return None;
        }
        let name = percent_decode_str(raw).decode_utf8().ok()?;
        if name.trim().is_empty() || name.contains('/') {
            return None;
        }
        Some(Route::State(name.into_owned()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::List.path(), "/");
        assert_eq!(Route::state("New York").path(), "/state/New York");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse("/"), Some(Route::List));
        assert_eq!(Route::parse(""), Some(Route::List));
        assert_eq!(Route::parse("/state/Wyoming"), Some(Route::state("Wyoming")));
        assert_eq!(
            Route::parse("/state/District%20of%20Columbia/"),
            Some(Route::state("District of Columbia"))
        );
        assert_eq!(Route::parse("/state/New York"), Some(Route::state("New York")));
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        assert_eq!(Route::parse("/state/"), None);
        assert_eq!(Route::parse("/county/Kings"), None);
        assert_eq!(Route::parse("/state/a/b"), None);
        assert_eq!(Route::parse("/state/a%2Fb"), None);
        assert_eq!(Route::parse("/state/%FF"), None);
        assert_eq!(Route::parse("/state/%20"), None);
    }

    #[test]
    fn test_parse_decodes_every_escape() {
        assert_eq!(Route::parse("/state/Wyoming%2C%20USA"), Some(Route::state("Wyoming, USA")));
        assert_eq!(Route::parse("/state/New%20york"), Some(Route::state("New york")));
        // malformed escapes stay literal
        assert_eq!(Route::parse("/state/100%"), Some(Route::state("100%")));
    }
}
