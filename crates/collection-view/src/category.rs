//! Category Derivation
//!
//! Groups items into categories keyed by a stable slug and counts them.

use std::collections::{HashMap, HashSet};

use crate::entity::Listable;

/// Id of the synthetic category holding every item
pub const ALL_CATEGORY_ID: &str = "all";

/// Translation key for the "all" tab label
pub const ALL_LABEL_KEY: &str = "categories.all";

/// A derived display grouping of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Tab id, unique among the derived categories
    pub id: String,
    /// Join key items are matched on (slug of the display name)
    pub slug: String,
    /// Display string, only used for rendering
    pub name: String,
    pub count: usize,
}

impl Category {
    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY_ID
    }
}

/// Build the stable key for a category display name.
///
/// Lower-cases and collapses each whitespace run into a single `-`:
/// `"Community  Events"` -> `"community-events"`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Derive category tabs with live counts.
///
/// "all" comes first with the total count, its label looked up through
/// `resolve(ALL_LABEL_KEY)`. The rest follow in first-seen order of `items`;
/// a category's display name is the first spelling seen for its slug.
///
/// Tab ids equal the slug unless that id is already taken (a backend
/// category named "All", say); those get the first free `-1`, `-2` suffix.
pub fn derive_categories<T, F>(items: &[T], resolve: F) -> Vec<Category>
where
    T: Listable,
    F: Fn(&str) -> String,
{
    let mut categories = vec![Category {
        id: ALL_CATEGORY_ID.to_string(),
        slug: ALL_CATEGORY_ID.to_string(),
        name: resolve(ALL_LABEL_KEY),
        count: items.len(),
    }];

    // slug -> index into `categories`
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut taken: HashSet<String> = HashSet::from([ALL_CATEGORY_ID.to_string()]);
    for item in items {
        let slug = slugify(item.category());
        match index.get(&slug) {
            Some(&i) => categories[i].count += 1,
            None => {
                index.insert(slug.clone(), categories.len());
                let id = free_id(&slug, &taken);
                taken.insert(id.clone());
                categories.push(Category {
                    id,
                    slug,
                    name: item.category().trim().to_string(),
                    count: 1,
                });
            }
        }
    }

    categories
}

fn free_id(slug: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(slug) {
        return slug.to_string();
    }
    (1..)
        .map(|n| format!("{}-{}", slug, n))
        .find(|id| !taken.contains(id))
        .unwrap_or_else(|| slug.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{label, photo};

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Events"), "events");
        assert_eq!(slugify("Community Events"), "community-events");
        assert_eq!(slugify("  Annual   General Meeting "), "annual-general-meeting");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_empty_list_has_only_all() {
        let categories = derive_categories::<crate::fixtures::Photo, _>(&[], label);
        assert_eq!(
            categories,
            vec![Category { id: "all".into(), slug: "all".into(), name: "All".into(), count: 0 }]
        );
    }

    #[test]
    fn test_counts_in_first_seen_order() {
        let items = vec![
            photo(1, "Training", false),
            photo(2, "Events", false),
            photo(3, "Training", false),
            photo(4, "Outreach", false),
        ];
        let categories = derive_categories(&items, label);
        let summary: Vec<(&str, &str, usize)> = categories
            .iter()
            .map(|c| (c.id.as_str(), c.name.as_str(), c.count))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("all", "All", 4),
                ("training", "Training", 2),
                ("events", "Events", 1),
                ("outreach", "Outreach", 1),
            ]
        );
    }

    #[test]
    fn test_spelling_variants_share_a_slug() {
        let items = vec![
            photo(1, "Youth Camp", false),
            photo(2, "youth  camp", false),
            photo(3, " Youth Camp", false),
        ];
        let categories = derive_categories(&items, label);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].id, "youth-camp");
        assert_eq!(categories[1].name, "Youth Camp");
        assert_eq!(categories[1].count, 3);
    }

    #[test]
    fn test_blank_category_is_still_counted() {
        let items = vec![photo(1, "", false), photo(2, "Events", false)];
        let categories = derive_categories(&items, label);
        let total: usize = categories.iter().filter(|c| !c.is_all()).map(|c| c.count).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_backend_all_category_gets_its_own_id() {
        let items = vec![
            photo(1, "All", false),
            photo(2, "Events", false),
            photo(3, "Events", false),
            photo(4, " ALL ", false),
            photo(5, "All 1", false),
        ];
        let categories = derive_categories(&items, label);
        let summary: Vec<(&str, &str, usize)> = categories
            .iter()
            .map(|c| (c.id.as_str(), c.slug.as_str(), c.count))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("all", "all", 5),
                ("all-1", "all", 2),
                ("events", "events", 2),
                ("all-1-1", "all-1", 1),
            ]
        );
        assert_eq!(categories.iter().filter(|c| c.is_all()).count(), 1);
        let total: usize = categories.iter().filter(|c| !c.is_all()).map(|c| c.count).sum();
        assert_eq!(total, items.len());
    }

    #[test]
    fn test_all_label_comes_from_resolver() {
        let categories = derive_categories(&[photo(1, "Events", false)], |key| format!("<{}>", key));
        assert_eq!(categories[0].name, "<categories.all>");
        assert!(categories[0].is_all());
    }
}
