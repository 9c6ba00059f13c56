//! # Search Filter
//!
//! Case-insensitive substring match over book titles. An empty query is a
//! no-op; anything else, whitespace included, is matched literally.

use crate::core::book::Book;

/// Returns the books whose title contains `query`, in catalog order.
pub fn filter<'a>(catalog: &'a [Book], query: &str) -> Vec<&'a Book> {
    if query.is_empty() {
        return catalog.iter().collect();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|book| book.title().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books(titles: &[&str]) -> Vec<Book> {
        titles.iter().map(|t| Book::new(*t, None).unwrap()).collect()
    }

    fn titles<'a>(result: &[&'a Book]) -> Vec<&'a str> {
        result.iter().map(|b| b.title()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let catalog = books(&["Powerless", "Normal People", "The Bell Jar"]);
        let result = filter(&catalog, "");
        assert_eq!(result.len(), 3);
        for (found, original) in result.iter().zip(catalog.iter()) {
            assert_eq!(*found, original);
        }
    }

    #[test]
    fn test_the_matches_bell_jar_only() {
        let catalog = books(&[
            "Powerless by Lauren Roberts",
            "Normal People by Sally Rooney",
            "The Bell Jar by Sylvia Plath",
        ]);
        assert_eq!(
            titles(&filter(&catalog, "the")),
            vec!["The Bell Jar by Sylvia Plath"]
        );
    }

    #[test]
    fn test_match_is_case_insensitive_both_ways() {
        let catalog = books(&["bride by ali hazelwood", "PRETTY GIRLS"]);
        assert_eq!(titles(&filter(&catalog, "BRIDE")), vec!["bride by ali hazelwood"]);
        assert_eq!(titles(&filter(&catalog, "pretty")), vec!["PRETTY GIRLS"]);
    }

    #[test]
    fn test_unicode_case_folding() {
        let catalog = books(&["Éclair Über Alles", "Plain"]);
        assert_eq!(titles(&filter(&catalog, "éCLAIR")), vec!["Éclair Über Alles"]);
        assert_eq!(titles(&filter(&catalog, "über")), vec!["Éclair Über Alles"]);
    }

    #[test]
    fn test_relative_order_preserved() {
        let catalog = books(&["Bunny", "Powerless", "Binding 13", "Bride"]);
        assert_eq!(
            titles(&filter(&catalog, "b")),
            vec!["Bunny", "Binding 13", "Bride"]
        );
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let catalog = books(&["Bunny", "Normal People"]);
        assert_eq!(titles(&filter(&catalog, " ")), vec!["Normal People"]);
        assert!(filter(&catalog, "  ").is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(filter(&[], "anything").is_empty());
        assert!(filter(&[], "").is_empty());
    }

    #[test]
    fn test_no_match() {
        let catalog = books(&["Bunny"]);
        assert!(filter(&catalog, "zebra").is_empty());
    }
}
