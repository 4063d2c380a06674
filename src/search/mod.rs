//! Tag search over the catalog.

use tracing::debug;

use crate::entity::PromptRecord;

/// Normalize a raw search box value into the term matched against tags.
///
/// - Trims surrounding whitespace
/// - Lowercases
/// - Strips one leading `#`, so `#anime` and `anime` are the same search
pub fn normalize_term(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    match lowered.strip_prefix('#') {
        Some(rest) => rest.to_string(),
        None => lowered,
    }
}

/// True if any tag of the record contains the (already normalized) term.
pub fn matches_tags(record: &PromptRecord, term: &str) -> bool {
    record
        .tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(term))
}

/// Records whose tags match `raw_term`, in catalog order.
///
/// An empty term (after normalization) passes every record through.
pub fn filter<'a>(records: &'a [PromptRecord], raw_term: &str) -> Vec<&'a PromptRecord> {
    let term = normalize_term(raw_term);
    if term.is_empty() {
        return records.iter().collect();
    }

    let matched: Vec<&PromptRecord> = records
        .iter()
        .filter(|record| matches_tags(record, &term))
        .collect();

    debug!(term = %term, matched = matched.len(), total = records.len(), "filtered catalog");
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, title: &str, tags: &[&str]) -> PromptRecord {
        let mut r = PromptRecord::new(id, title);
        r.tags = tags.iter().map(|t| t.to_string()).collect();
        r
    }

    fn catalog() -> Vec<PromptRecord> {
        vec![
            record(1, "A", &["x"]),
            record(2, "B", &["y"]),
            record(3, "Cyber City", &["Cyberpunk", "Neon"]),
            record(4, "Portrait", &["portrait", "studio"]),
        ]
    }

    fn titles(records: &[&PromptRecord]) -> Vec<String> {
        records.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn test_normalize_term() {
        assert_eq!(normalize_term("  Neon "), "neon");
        assert_eq!(normalize_term("#Anime"), "anime");
        assert_eq!(normalize_term("  #tag  "), "tag");
        assert_eq!(normalize_term("#"), "");
        assert_eq!(normalize_term(""), "");
    }

    #[test]
    fn test_normalize_strips_only_leading_hash() {
        assert_eq!(normalize_term("c#"), "c#");
        assert_eq!(normalize_term("##x"), "#x");
    }

    #[test]
    fn test_empty_term_passes_everything_in_order() {
        let records = catalog();
        let result = filter(&records, "");
        assert_eq!(titles(&result), vec!["A", "B", "Cyber City", "Portrait"]);

        let result = filter(&records, "   ");
        assert_eq!(result.len(), records.len());
    }

    #[test]
    fn test_filter_by_single_tag() {
        let records = catalog();
        assert_eq!(titles(&filter(&records, "x")), vec!["A"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let records = catalog();
        assert_eq!(titles(&filter(&records, "PUNK")), vec!["Cyber City"]);
        assert_eq!(titles(&filter(&records, "eo")), vec!["Cyber City"]);
    }

    #[test]
    fn test_hash_prefix_is_equivalent() {
        let records = catalog();
        assert_eq!(
            titles(&filter(&records, "#portrait")),
            titles(&filter(&records, "portrait"))
        );
    }

    #[test]
    fn test_filter_matches_title_is_not_enough() {
        let records = catalog();
        // "city" appears only in a title, never in tags
        assert!(filter(&records, "city").is_empty());
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let records = vec![
            record(1, "first", &["shared"]),
            record(2, "skip", &["other"]),
            record(3, "second", &["Shared-tag"]),
        ];
        assert_eq!(titles(&filter(&records, "shared")), vec!["first", "second"]);
    }

    #[test]
    fn test_every_result_contains_term() {
        let records = catalog();
        for term in ["y", "n", "st", "o"] {
            let result = filter(&records, term);
            for r in &result {
                assert!(r.tags.iter().any(|t| t.to_lowercase().contains(term)));
            }
            let excluded = records
                .iter()
                .filter(|r| !result.iter().any(|m| m.id == r.id));
            for r in excluded {
                assert!(!r.tags.iter().any(|t| t.to_lowercase().contains(term)));
            }
        }
    }
}
