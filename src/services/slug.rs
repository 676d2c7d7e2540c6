// src/services/slug.rs
// DOCUMENTATION: Slug derivation for place names
// PURPOSE: Single place where a name becomes its URL-safe form

use ::slug::slugify;

/// Derive the slug of a place name
/// DOCUMENTATION: Transliterates to ASCII, lowercases, collapses every run of
/// non-alphanumeric characters into one hyphen and trims hyphens at both ends
pub fn slugify_name(name: &str) -> String {
    slugify(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slug() {
        assert_eq!(slugify_name("Place A"), "place-a");
        assert_eq!(slugify_name("Parque Azul"), "parque-azul");
    }

    #[test]
    fn test_collapses_and_trims_separators() {
        assert_eq!(slugify_name("  --Hello,   World!!  "), "hello-world");
        assert_eq!(slugify_name("a_b.c/d"), "a-b-c-d");
    }

    #[test]
    fn test_transliterates_accents() {
        assert_eq!(slugify_name("São Paulo Café"), "sao-paulo-cafe");
        assert_eq!(slugify_name("Ñandú"), "nandu");
    }

    #[test]
    fn test_keeps_digits() {
        assert_eq!(slugify_name("Route 66 Diner"), "route-66-diner");
    }

    #[test]
    fn test_slug_is_idempotent() {
        for name in ["Place A", "São Paulo Café", "  x -- y  ", "Route 66"] {
            let once = slugify_name(name);
            assert_eq!(slugify_name(&once), once);
        }
    }

    #[test]
    fn test_slug_alphabet() {
        let slug = slugify_name("Joe's Bar & Grill (Downtown)");
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        assert!(!slug.contains("--"));
    }

    #[test]
    fn test_apostrophe_separates_words() {
        assert_eq!(slugify_name("Joe's Bar"), "joe-s-bar");
        assert_eq!(slugify_name("St. John's"), "st-john-s");
    }
}
