use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

use crate::shared::constants::SLUG_SUFFIX_LEN;

lazy_static! {
    /// Anything that is not an ASCII letter, digit or whitespace
    static ref STRIP_REGEX: Regex = Regex::new(r"[^A-Za-z0-9\s]").unwrap();

    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Strict, lowercase, hyphen-delimited form of a title.
///
/// Punctuation (hyphens included) is removed rather than converted, so
/// `"Hello-World"` becomes `helloworld` while `"Hello World"` becomes
/// `hello-world`.
pub fn slugify(title: &str) -> String {
    let stripped = STRIP_REGEX.replace_all(title, "");
    WHITESPACE_REGEX
        .replace_all(stripped.trim(), "-")
        .to_lowercase()
}

/// Random `[0-9a-z]` suffix used to disambiguate colliding slugs
pub fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SLUG_SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect()
}

/// `base` plus a fresh random suffix. An empty base yields the suffix alone.
pub fn with_suffix(base: &str) -> String {
    if base.is_empty() {
        random_suffix()
    } else {
        format!("{}-{}", base, random_suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Rust: 2024   Edition! "), "rust-2024-edition");
        assert_eq!(slugify("Hello-World"), "helloworld");
        assert_eq!(slugify("Tabs\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("Café Menu"), "caf-menu");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_random_suffix_shape() {
        for _ in 0..50 {
            let suffix = random_suffix();
            assert_eq!(suffix.len(), SLUG_SUFFIX_LEN);
            assert!(suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_with_suffix() {
        let slug = with_suffix("hello-world");
        assert!(slug.starts_with("hello-world-"));
        assert_eq!(slug.len(), "hello-world-".len() + SLUG_SUFFIX_LEN);
        assert_eq!(with_suffix("").len(), SLUG_SUFFIX_LEN);
    }
}
