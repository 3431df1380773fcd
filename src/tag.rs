//! Tag ordering and labels.

use crate::naming;

/// Order a photo's tags for display.
///
/// Occurrences of the primary tag (the tag the visitor is browsing by) come
/// first; the rest follow alphabetically. Blank tags are dropped. Duplicates
/// are kept, since the record owns uniqueness.
pub fn sort_tags(tags: &[String], primary_tag: Option<&str>) -> Vec<String> {
    let primary = primary_tag.map(str::trim).filter(|t| !t.is_empty());
    let mut sorted: Vec<String> = tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();
    sorted.sort_by(|a, b| {
        let a_primary = Some(a.as_str()) == primary;
        let b_primary = Some(b.as_str()) == primary;
        b_primary.cmp(&a_primary).then_with(|| a.cmp(b))
    });
    sorted
}

/// Label shown on a tag chip.
pub fn tag_label(tag: &str) -> String {
    naming::label_from_slug(tag).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_tags_sort_to_empty() {
        assert!(sort_tags(&[], Some("street")).is_empty());
        assert!(sort_tags(&[], None).is_empty());
    }

    #[test]
    fn sorts_alphabetically_without_primary() {
        assert_eq!(
            sort_tags(&tags(&["tokyo", "night", "street"]), None),
            tags(&["night", "street", "tokyo"])
        );
    }

    #[test]
    fn primary_tag_comes_first() {
        assert_eq!(
            sort_tags(&tags(&["night", "street", "tokyo"]), Some("tokyo")),
            tags(&["tokyo", "night", "street"])
        );
    }

    #[test]
    fn primary_not_in_tags_has_no_effect() {
        assert_eq!(
            sort_tags(&tags(&["b", "a"]), Some("zzz")),
            tags(&["a", "b"])
        );
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(
            sort_tags(&tags(&["a", "b", "a"]), Some("a")),
            tags(&["a", "a", "b"])
        );
    }

    #[test]
    fn blank_tags_dropped() {
        assert_eq!(sort_tags(&tags(&["", "  ", "a"]), None), tags(&["a"]));
    }

    #[test]
    fn tag_label_is_uppercase_words() {
        assert_eq!(tag_label("street-photography"), "STREET PHOTOGRAPHY");
    }
}
