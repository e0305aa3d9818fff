//! Slug policy for content entries.
//!
//! Slugs are lowercase `a-z0-9-`: runs of anything else collapse into a
//! single dash, leading and trailing dashes are dropped, and the result is
//! bounded by [`SLUG_MAX_LEN`]. Uniqueness is the store's job, not ours.

pub const SLUG_MAX_LEN: usize = 64;

/// Normalizes free-form input into a URL-safe slug.
/// Returns `None` when nothing URL-safe remains or the result exceeds
/// [`SLUG_MAX_LEN`].
#[must_use]
pub fn normalize_slug(input: &str) -> Option<String> {
    let mut slug = String::with_capacity(input.len());
    for ch in input.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let normalized = slug.trim_end_matches('-');
    if normalized.is_empty() || normalized.len() > SLUG_MAX_LEN {
        return None;
    }
    Some(normalized.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_slug_table() {
        let cases = [
            ("Hello World", Some("hello-world")),
            ("  rust 2024, year in review  ", Some("rust-2024-year-in-review")),
            ("already-a-slug", Some("already-a-slug")),
            ("UPPER", Some("upper")),
            ("a__b--c", Some("a-b-c")),
            ("---", None),
            ("", None),
            ("!!!", None),
            ("émigré café", Some("migr-caf")),
            ("trailing dash-", Some("trailing-dash")),
            ("-leading dash", Some("leading-dash")),
        ];

        for (input, expected) in cases {
            assert_eq!(
                normalize_slug(input).as_deref(),
                expected,
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_normalize_slug_rejects_over_long_input() {
        let input = "x".repeat(SLUG_MAX_LEN + 1);
        assert_eq!(normalize_slug(&input), None);

        let at_limit = "x".repeat(SLUG_MAX_LEN);
        assert_eq!(normalize_slug(&at_limit).unwrap().len(), SLUG_MAX_LEN);
    }
}
