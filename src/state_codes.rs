//! State code mapping for flag images
//! Maps full state names to two-letter postal codes

use std::collections::HashMap;
use std::sync::LazyLock;

/// Image shown when a state has no entry in the code table
pub const PLACEHOLDER_FLAG: &str = "assets/images/placeholder.png";

const FLAG_URL_BASE: &str = "https://flagcdn.com/w80/us-";

/// Full state name -> lowercase postal code
pub static STATE_CODES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert("Alabama", "al");
    m.insert("Alaska", "ak");
    m.insert("Arizona", "az");
    m.insert("Arkansas", "ar");
    m.insert("California", "ca");
    m.insert("Colorado", "co");
    m.insert("Connecticut", "ct");
    m.insert("Delaware", "de");
    m.insert("District of Columbia", "dc");
    m.insert("Florida", "fl");
    m.insert("Georgia", "ga");
    m.insert("Hawaii", "hi");
    m.insert("Idaho", "id");
    m.insert("Illinois", "il");
    m.insert("Indiana", "in");
    m.insert("Iowa", "ia");
    m.insert("Kansas", "ks");
    m.insert("Kentucky", "ky");
    m.insert("Louisiana", "la");
    m.insert("Maine", "me");
    m.insert("Maryland", "md");
    m.insert("Massachusetts", "ma");
    m.insert("Michigan", "mi");
    m.insert("Minnesota", "mn");
    m.insert("Mississippi", "ms");
    m.insert("Missouri", "mo");
    m.insert("Montana", "mt");
    m.insert("Nebraska", "ne");
    m.insert("Nevada", "nv");
    m.insert("New Hampshire", "nh");
    m.insert("New Jersey", "nj");
    m.insert("New Mexico", "nm");
    m.insert("New York", "ny");
    m.insert("North Carolina", "nc");
    m.insert("North Dakota", "nd");
    m.insert("Ohio", "oh");
    m.insert("Oklahoma", "ok");
    m.insert("Oregon", "or");
    m.insert("Pennsylvania", "pa");
    m.insert("Rhode Island", "ri");
    m.insert("South Carolina", "sc");
    m.insert("South Dakota", "sd");
    m.insert("Tennessee", "tn");
    m.insert("Texas", "tx");
    m.insert("Utah", "ut");
    m.insert("Vermont", "vt");
    m.insert("Virginia", "va");
    m.insert("Washington", "wa");
    m.insert("West Virginia", "wv");
    m.insert("Wisconsin", "wi");
    m.insert("Wyoming", "wy");

    m
});

/// Flag image for a list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagImage {
    Remote(String),
    Placeholder,
}

impl FlagImage {
    /// URL of the remote image, `None` for the placeholder
    pub fn url(&self) -> Option<&str> {
        match self {
            FlagImage::Remote(url) => Some(url.as_str()),
            FlagImage::Placeholder => None,
        }
    }

    /// Where the image is loaded from, remote or bundled
    pub fn source(&self) -> &str {
        match self {
            FlagImage::Remote(url) => url.as_str(),
            FlagImage::Placeholder => PLACEHOLDER_FLAG,
        }
    }
}

/// Postal code for a full state name (exact, case-sensitive match)
pub fn get_state_code(name: &str) -> Option<&'static str> {
    STATE_CODES.get(name).copied()
}

/// Flag image URL (e.g., "https://flagcdn.com/w80/us-wy.png")
pub fn flag_url(name: &str) -> Option<String> {
    get_state_code(name).map(|code| format!("{}{}.png", FLAG_URL_BASE, code))
}

pub fn flag_image(name: &str) -> FlagImage {
    flag_url(name)
        .map(FlagImage::Remote)
        .unwrap_or(FlagImage::Placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        // 50 states plus DC
        assert_eq!(STATE_CODES.len(), 51);
        assert_eq!(get_state_code("District of Columbia"), Some("dc"));
    }

    #[test]
    fn test_known_state() {
        assert_eq!(get_state_code("Wyoming"), Some("wy"));
        assert_eq!(
            flag_url("New York").as_deref(),
            Some("https://flagcdn.com/w80/us-ny.png")
        );
    }

    #[test]
    fn test_every_entry_follows_template() {
        for (name, code) in STATE_CODES.iter() {
            assert_eq!(code.len(), 2);
            assert_eq!(
                flag_url(name),
                Some(format!("https://flagcdn.com/w80/us-{}.png", code))
            );
        }
    }

    #[test]
    fn test_unknown_state() {
        assert_eq!(get_state_code("Puerto Rico"), None);
        assert_eq!(get_state_code("wyoming"), None);
        assert_eq!(flag_image("Puerto Rico"), FlagImage::Placeholder);
        assert_eq!(flag_image("Puerto Rico").source(), PLACEHOLDER_FLAG);
        assert_eq!(flag_image("Puerto Rico").url(), None);
    }
}
