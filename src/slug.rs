// Slug generation for titles

pub const MAX_SLUG_LEN: usize = 50;

/// Turn a title into a URL-safe slug.
///
/// Lowercases, drops everything that is not an ASCII word character or
/// whitespace, joins whitespace runs with a single hyphen and cuts the
/// result at [`MAX_SLUG_LEN`] characters.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len().min(MAX_SLUG_LEN));
    let mut in_whitespace = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_whitespace() {
            in_whitespace = true;
            continue;
        }
        if !is_word_char(ch) {
            continue;
        }
        if in_whitespace {
            slug.push('-');
            in_whitespace = false;
        }
        slug.push(ch);
    }

    // Trailing whitespace still yields a hyphen
    if in_whitespace {
        slug.push('-');
    }

    // Only ASCII survives the filter, so byte length equals char count
    slug.truncate(MAX_SLUG_LEN);
    slug
}

const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_truncates() {
        let title = "word ".repeat(30);
        let slug = slugify(&title);
        assert_eq!(slug.len(), MAX_SLUG_LEN);
        assert!(slug.starts_with("word-word-"));
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("Rust \t and\n\nTokio"), "rust-and-tokio");
    }

    #[test]
    fn test_slugify_leading_whitespace() {
        assert_eq!(slugify("  Leading"), "-leading");
    }

    #[test]
    fn test_slugify_stripped_symbol_between_spaces() {
        // "a - b": the hyphen is stripped and both spaces form one run
        assert_eq!(slugify("a - b"), "a-b");
    }

    #[test]
    fn test_slugify_keeps_underscores_and_digits() {
        assert_eq!(slugify("Top_10 Tips"), "top_10-tips");
    }

    #[test]
    fn test_slugify_drops_non_ascii_letters() {
        assert_eq!(slugify("Café Culture"), "caf-culture");
    }

    #[test]
    fn test_slugify_output_is_url_safe() {
        let slug = slugify("What's New in C++ & Rust? (2024 Edition)");
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'));
        assert_eq!(slug, "whats-new-in-c-rust-2024-edition");
    }
}
