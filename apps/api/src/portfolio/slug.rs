#![allow(dead_code)]

//! Public-URL slug derivation.
//!
//! The character-class rule is literal: after lowercasing, every run of
//! characters outside `[a-z0-9]` collapses to a single hyphen and edge
//! hyphens are stripped. Non-ASCII letters are NOT transliterated —
//! "Ana López!!" derives "ana-l-pez", not "ana-lopez". Uniqueness is the
//! store's job (unique constraint + retry), not this module's.

use std::time::{SystemTime, UNIX_EPOCH};

/// Lowercases and collapses non-`[a-z0-9]` runs to single hyphens.
/// May return an empty string (e.g. for "!!!").
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

/// The base every candidate is derived from: the slugified name, or
/// "portfolio" when the name slugifies to nothing.
pub fn base_slug(full_name: &str) -> String {
    let slug = slugify(full_name);
    if slug.is_empty() {
        "portfolio".to_string()
    } else {
        slug
    }
}

/// The n-th collision candidate: `base`, then `base-1`, `base-2`, ...
pub fn candidate(base: &str, attempt: u32) -> String {
    if attempt == 0 {
        base.to_string()
    } else {
        format!("{base}-{attempt}")
    }
}

/// Last-resort slug for documents with no usable name, derived from the
/// current time so the record stays addressable.
pub fn fallback_slug(epoch_millis: u128) -> String {
    format!("portfolio-{}", to_base36(epoch_millis))
}

pub fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

fn to_base36(mut value: u128) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).expect("base36 digits are ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic_name() {
        assert_eq!(slugify("John Doe"), "john-doe");
    }

    #[test]
    fn test_slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("John -- Doe!!"), "john-doe");
    }

    #[test]
    fn test_slugify_follows_literal_character_class() {
        // 'ó' is outside [a-z0-9] and is replaced, not transliterated
        assert_eq!(slugify("Ana López!!"), "ana-l-pez");
    }

    #[test]
    fn test_slugify_strips_edge_hyphens() {
        assert_eq!(slugify("  --hello--  "), "hello");
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("Agent 007"), "agent-007");
    }

    #[test]
    fn test_slugify_empty_and_symbol_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_base_slug_falls_back_to_portfolio() {
        assert_eq!(base_slug("!!!"), "portfolio");
        assert_eq!(base_slug("Jane"), "jane");
    }

    #[test]
    fn test_candidate_sequence() {
        assert_eq!(candidate("jane", 0), "jane");
        assert_eq!(candidate("jane", 1), "jane-1");
        assert_eq!(candidate("jane", 2), "jane-2");
    }

    #[test]
    fn test_fallback_slug_is_base36_of_millis() {
        assert_eq!(fallback_slug(0), "portfolio-0");
        assert_eq!(fallback_slug(36), "portfolio-10");
        assert_eq!(fallback_slug(35), "portfolio-z");
    }

    #[test]
    fn test_to_base36_round_numbers() {
        assert_eq!(to_base36(1), "1");
        assert_eq!(to_base36(36 * 36), "100");
    }
}
