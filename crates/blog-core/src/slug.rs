//! Slug derivation and transliteration.
//!
//! `slugify` turns an arbitrary post title into a URL-safe identifier.
//! It performs no uniqueness check - two posts with the same title get the
//! same slug, and resolving that is the caller's problem.

/// Derive a URL-safe slug from arbitrary text.
///
/// Lowercases the input, replaces whitespace runs with a single hyphen,
/// drops everything that is not a word character or hyphen, collapses
/// hyphen runs, and trims hyphens from both ends. Idempotent.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            if !out.is_empty() {
                pending_hyphen = true;
            }
            continue;
        }
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_hyphen {
                out.push('-');
                pending_hyphen = false;
            }
            out.push(ch);
        }
    }

    out
}

/// Map Cyrillic letters to Latin equivalents, lowercasing as it goes.
///
/// Available as an optional pre-processing step for callers that want
/// ASCII slugs out of Cyrillic titles; `slugify` does not apply it.
/// Unmapped characters pass through unchanged.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.to_lowercase().chars() {
        match ch {
            'а' => out.push('a'),
            'б' => out.push('b'),
            'в' => out.push('v'),
            'г' => out.push('g'),
            'д' => out.push('d'),
            'е' | 'ё' | 'э' => out.push('e'),
            'ж' => out.push_str("zh"),
            'з' => out.push('z'),
            'и' => out.push('i'),
            'й' => out.push('j'),
            'к' => out.push('k'),
            'л' => out.push('l'),
            'м' => out.push('m'),
            'н' => out.push('n'),
            'о' => out.push('o'),
            'п' => out.push('p'),
            'р' => out.push('r'),
            'с' => out.push('s'),
            'т' => out.push('t'),
            'у' => out.push('u'),
            'ф' => out.push('f'),
            'х' => out.push('h'),
            'ц' => out.push('c'),
            'ч' => out.push_str("ch"),
            'ш' | 'щ' => out.push_str("sh"),
            'ъ' | 'ь' => out.push('\''),
            'ы' => out.push('y'),
            'ю' => out.push_str("yu"),
            'я' => out.push_str("ya"),
            other => out.push(other),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_title() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("Rust: 2024 edition?"), "rust-2024-edition");
    }

    #[test]
    fn test_collapses_hyphens_and_whitespace() {
        assert_eq!(slugify("a  -  b---c"), "a-b-c");
        assert_eq!(slugify("tabs\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(slugify("  --hello--  "), "hello");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_keeps_underscores() {
        assert_eq!(slugify("snake_case title"), "snake_case-title");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["Hello World", "a--b", " Mixed CASE 42 ", "уже-слаг"];
        for input in inputs {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_output_charset() {
        let inputs = ["So, what's UP?", "  weird   input \u{a0} here ", "---", "a_b-c d"];
        for input in inputs {
            let slug = slugify(input);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'),
                "bad char in {slug:?}"
            );
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
    }

    #[test]
    fn test_transliterate_basic() {
        assert_eq!(transliterate("Привет"), "privet");
        assert_eq!(transliterate("Жизнь"), "zhizn'");
        assert_eq!(transliterate("Ящик"), "yashik");
    }

    #[test]
    fn test_transliterate_passes_latin_through() {
        assert_eq!(transliterate("Rust и я"), "rust i ya");
    }

    #[test]
    fn test_transliterate_then_slugify() {
        assert_eq!(slugify(&transliterate("Привет, мир!")), "privet-mir");
    }
}
