use regex::Regex;
use std::sync::LazyLock;

/// Longest accepted name, in characters.
pub const MAX_NAME_LEN: usize = 50;

// First name, optionally followed by more names separated by a space or hyphen.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-zA-Z]+[ -]?)+$").expect("name pattern is valid"));

/// Result of validating a player or stickman name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameCheck {
    pub well_formed: bool,
    pub within_length: bool,
}

impl NameCheck {
    pub fn is_valid(&self) -> bool {
        self.well_formed && self.within_length
    }
}

pub fn check_name(name: &str) -> NameCheck {
    NameCheck {
        well_formed: NAME_PATTERN.is_match(name),
        within_length: name.chars().count() <= MAX_NAME_LEN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_name_cases() {
        let cases = [
            ("alex shepherd", true, true),
            ("Sensyne Health", true, true),
            ("Katherine Double-Barrel", true, true),
            ("Keith Tri-ple-Barrel", true, true),
            ("Gary Middle Name", true, true),
            (
                "a ridiculously long name which should not pass-the-test",
                true,
                false,
            ),
            ("al3x ", false, true),
            ("hsjk3j22jd skjd3ks", false, true),
            ("my name", true, true),
        ];

        for (name, well_formed, within_length) in cases {
            let check = check_name(name);
            assert_eq!(check.well_formed, well_formed, "well_formed for {:?}", name);
            assert_eq!(check.within_length, within_length, "within_length for {:?}", name);
            assert_eq!(check.is_valid(), well_formed && within_length, "valid for {:?}", name);
        }
    }

    #[test]
    fn test_empty_and_separator_only_names() {
        assert!(!check_name("").is_valid());
        assert!(!check_name(" ").is_valid());
        assert!(!check_name("-joe").is_valid());
        assert!(!check_name("joe  blogs").is_valid());
    }
}
