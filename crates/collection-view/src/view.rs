//! Filtered and Featured Views
//!
//! Pure functions over a fetched list, plus `CollectionView`, an immutable
//! snapshot that keeps one list together with its derived categories.

use crate::category::{derive_categories, slugify, Category, ALL_CATEGORY_ID};
use crate::entity::Listable;

/// Items of the active category, in source order.
///
/// `"all"` yields every item. An id with no matching category yields an
/// empty subset. Items are joined on the category slug, never on the
/// display string.
pub fn filter_by_category<'a, T: Listable>(
    items: &'a [T],
    active_id: &str,
    categories: &[Category],
) -> Vec<&'a T> {
    if active_id == ALL_CATEGORY_ID {
        return items.iter().collect();
    }

    let Some(category) = categories.iter().find(|c| c.id == active_id) else {
        tracing::debug!("[VIEW] unknown category '{}', empty subset", active_id);
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| slugify(item.category()) == category.slug)
        .collect()
}

/// The first `limit` featured items, in source order
pub fn featured_subset<T: Listable>(items: &[T], limit: usize) -> Vec<&T> {
    items.iter().filter(|item| item.is_featured()).take(limit).collect()
}

/// One fetched list and everything derived from it.
///
/// A refetch builds a new snapshot; a snapshot is never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionView<T> {
    items: Vec<T>,
    categories: Vec<Category>,
}

impl<T> Default for CollectionView<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            categories: vec![Category {
                id: ALL_CATEGORY_ID.to_string(),
                slug: ALL_CATEGORY_ID.to_string(),
                name: ALL_CATEGORY_ID.to_string(),
                count: 0,
            }],
        }
    }
}

impl<T: Listable> CollectionView<T> {
    pub fn new<F>(items: Vec<T>, resolve: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        let categories = derive_categories(&items, resolve);
        Self { items, categories }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Category tabs, "all" first
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn filtered(&self, active_id: &str) -> Vec<&T> {
        filter_by_category(&self.items, active_id, &self.categories)
    }

    pub fn featured(&self, limit: usize) -> Vec<&T> {
        featured_subset(&self.items, limit)
    }

    pub fn find(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| &item.id() == id)
    }
}

impl<T: Listable + Clone> CollectionView<T> {
    /// Owned copy of the filtered subset, for handing to reactive views
    pub fn filtered_owned(&self, active_id: &str) -> Vec<T> {
        self.filtered(active_id).into_iter().cloned().collect()
    }

    /// Owned copy of the featured subset
    pub fn featured_owned(&self, limit: usize) -> Vec<T> {
        self.featured(limit).into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{events_and_training, label, photo, Photo};
    use proptest::prelude::*;

    fn ids(items: &[&Photo]) -> Vec<u32> {
        items.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_events_and_training_scenario() {
        let items = events_and_training();
        let view = CollectionView::new(items, label);

        let counts: Vec<(&str, usize)> =
            view.categories().iter().map(|c| (c.id.as_str(), c.count)).collect();
        assert_eq!(counts, vec![("all", 5), ("events", 2), ("training", 3)]);
        assert_eq!(view.categories()[1].name, "Events");

        assert_eq!(ids(&view.featured(3)), vec![1, 4]);
        assert_eq!(ids(&view.filtered("training")), vec![3, 4, 5]);
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let view = CollectionView::new(events_and_training(), label);
        assert_eq!(ids(&view.filtered("all")), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let view = CollectionView::new(events_and_training(), label);
        assert!(view.filtered("workshops").is_empty());
        assert!(view.category("workshops").is_none());
    }

    #[test]
    fn test_display_name_is_not_a_join_key() {
        let items = events_and_training();
        let categories = derive_categories(&items, label);
        // "Events" is a display string, not an id
        assert!(filter_by_category(&items, "Events", &categories).is_empty());
        assert_eq!(filter_by_category(&items, "events", &categories).len(), 2);
    }

    #[test]
    fn test_backend_all_category_is_selectable() {
        let items = vec![photo(1, "All", false), photo(2, "Events", false), photo(3, "all", false)];
        let view = CollectionView::new(items, label);
        assert_eq!(ids(&view.filtered("all")), vec![1, 2, 3]);
        assert_eq!(ids(&view.filtered("all-1")), vec![1, 3]);
        assert_eq!(view.category("all-1").map(|c| c.name.as_str()), Some("All"));
    }

    #[test]
    fn test_featured_limit() {
        let items = vec![
            photo(1, "A", true),
            photo(2, "A", true),
            photo(3, "B", true),
            photo(4, "B", true),
        ];
        assert_eq!(ids(&featured_subset(&items, 2)), vec![1, 2]);
        assert!(featured_subset(&items, 0).is_empty());
        assert!(featured_subset(&[photo(1, "A", false)], 3).is_empty());
    }

    #[test]
    fn test_default_snapshot() {
        let view = CollectionView::<Photo>::default();
        assert!(view.is_empty());
        assert_eq!(view.categories().len(), 1);
        assert!(view.categories()[0].is_all());
        assert!(view.filtered("all").is_empty());
    }

    #[test]
    fn test_find_and_owned_subsets() {
        let view = CollectionView::new(events_and_training(), label);
        assert_eq!(view.find(&4).map(|p| p.category.as_str()), Some("Training"));
        assert!(view.find(&42).is_none());
        assert_eq!(view.filtered_owned("events").len(), 2);
        assert_eq!(view.featured_owned(1), vec![photo(1, "Events", true)]);
    }

    fn arb_photos() -> impl Strategy<Value = Vec<Photo>> {
        let category = prop::sample::select(vec![
            "Events", "events", "Training", "Community Outreach", "community  outreach", "",
            "All", " all ", "all 1",
        ]);
        prop::collection::vec((category, any::<bool>()), 0..40).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (category, featured))| photo(i as u32, category, featured))
                .collect()
        })
    }

    proptest! {
        /// Non-"all" counts add up to the list length
        #[test]
        fn prop_category_counts_sum_to_len(items in arb_photos()) {
            let categories = derive_categories(&items, label);
            prop_assert_eq!(&categories[0].id, "all");
            prop_assert_eq!(categories[0].count, items.len());
            let total: usize = categories.iter().filter(|c| !c.is_all()).map(|c| c.count).sum();
            prop_assert_eq!(total, items.len());
            let ids: std::collections::HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
            prop_assert_eq!(ids.len(), categories.len());
        }

        /// Each tab's subset has exactly the advertised count
        #[test]
        fn prop_filtered_len_matches_count(items in arb_photos()) {
            let categories = derive_categories(&items, label);
            prop_assert_eq!(filter_by_category(&items, "all", &categories).len(), items.len());
            for category in categories.iter().filter(|c| !c.is_all()) {
                prop_assert_eq!(filter_by_category(&items, &category.id, &categories).len(), category.count);
            }
        }

        /// Featured subset is bounded and only holds featured items
        #[test]
        fn prop_featured_is_bounded(items in arb_photos(), limit in 0usize..5) {
            let featured = featured_subset(&items, limit);
            let available = items.iter().filter(|p| p.featured).count();
            prop_assert!(featured.len() <= limit);
            prop_assert_eq!(featured.len(), limit.min(available));
            prop_assert!(featured.iter().all(|p| p.featured));
        }
    }
}
