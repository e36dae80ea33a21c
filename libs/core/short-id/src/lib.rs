//! Human-readable public identifiers.
//!
//! Catalog entries are addressed by a "short id" rather than the storage
//! primary key: a slug composed from category, display position, and the
//! English title (`tea--03--hot-milk-tea`), or, for entries without a
//! meaningful title, a random alphanumeric suffix (`faq--4--x9k2pq`).
//!
//! Nothing here guarantees uniqueness. The owning repository enforces a
//! unique index on the identifier column and surfaces violations as
//! Conflict errors.

use rand::{distr::Alphanumeric, RngExt};

/// Reduce a title to a URL-safe slug.
///
/// Lowercases, keeps `[a-z0-9]`, collapses whitespace/underscore/hyphen
/// runs into single hyphens, and strips everything else (including any
/// leading or trailing hyphen).
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_hyphen = true;
        }
        // Any other character is dropped.
    }

    slug
}

/// Compose a deterministic slug identifier: `{prefix}--{position:02}--{slug}`.
///
/// The position is zero-padded to at least two digits so identifiers sort
/// naturally for typical menu sizes.
pub fn slug_id(prefix: &str, position: i32, title: &str) -> String {
    format!("{}--{:02}--{}", prefix, position, slugify(title))
}

/// Compose a random identifier: `{prefix}--{position}--{6-char suffix}`.
///
/// Collisions are possible and accepted; the unique index on the owning
/// collection is the backstop.
pub fn random_id(prefix: &str, position: i32) -> String {
    format!("{}--{}--{}", prefix, position, random_suffix(6))
}

/// A random lowercase-alphanumeric suffix of the given length.
pub fn random_suffix(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(|byte| (byte as char).to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_simple_title() {
        assert_eq!(slugify("Hot Milk Tea"), "hot-milk-tea");
    }

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slugify("Iced  -  Lemon_Tea"), "iced-lemon-tea");
    }

    #[test]
    fn slugify_strips_non_ascii_and_punctuation() {
        assert_eq!(slugify("Café \"Special\"! ☕"), "caf-special");
        assert_eq!(slugify("  --  "), "");
    }

    #[test]
    fn slug_id_pads_position_to_two_digits() {
        assert_eq!(slug_id("tea", 3, "Hot Milk Tea"), "tea--03--hot-milk-tea");
    }

    #[test]
    fn slug_id_keeps_wider_positions() {
        assert_eq!(slug_id("tea", 12, "Hot Milk Tea"), "tea--12--hot-milk-tea");
        assert_eq!(slug_id("tea", 123, "Hot Milk Tea"), "tea--123--hot-milk-tea");
    }

    #[test]
    fn random_id_has_expected_shape() {
        let id = random_id("faq", 4);
        let parts: Vec<&str> = id.split("--").collect();
        assert_eq!(parts[0], "faq");
        assert_eq!(parts[1], "4");
        assert_eq!(parts[2].len(), 6);
        assert!(parts[2].chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn random_suffix_varies() {
        // Two draws colliding is ~36^-6; treat equality as a failure.
        assert_ne!(random_suffix(6), random_suffix(6));
    }
}
