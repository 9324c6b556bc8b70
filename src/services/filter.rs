// Filter engine
//
// Computes the visible subsequence of the catalog for a category and search text.
// Pure: no state. Each field is lower-cased per comparison.

use crate::models::{Catalog, Category, Resource};

/// A normalized search term: trimmed and lower-cased once, up front.
///
/// An empty term (from an empty or whitespace-only query) matches everything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test against title, description, then category.
    pub fn matches(&self, resource: &Resource) -> bool {
        if self.is_empty() {
            return true;
        }

        [
            resource.title.as_str(),
            resource.description.as_str(),
            resource.category.as_str(),
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&self.0))
    }
}

/// True when `resource` belongs in the list for `active` ("All" admits everything).
pub fn matches_category(active: &Category, resource: &Resource) -> bool {
    active.is_all() || resource.category == *active
}

/// Return the resources that pass both the category and the search predicate,
/// in catalog order.
///
/// Never fails: an unknown category or an unmatched query yields an empty vector.
pub fn filter_resources<'a>(
    catalog: &'a Catalog,
    active: &Category,
    query: &str,
) -> Vec<&'a Resource> {
    let term = SearchTerm::new(query);

    let matches: Vec<&Resource> = catalog
        .resources()
        .iter()
        .filter(|r| matches_category(active, r) && term.matches(r))
        .collect();

    tracing::debug!(
        "Filtered catalog: category={}, query={:?}, matches={}/{}",
        active,
        term.as_str(),
        matches.len(),
        catalog.resources().len()
    );

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(resources: &[&Resource]) -> Vec<u32> {
        resources.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_all_with_empty_query_returns_everything() {
        let catalog = Catalog::builtin();
        let result = filter_resources(&catalog, &Category::all(), "");
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_health_query_matches_title_and_description() {
        let catalog = Catalog::builtin();
        let result = filter_resources(&catalog, &Category::all(), "health");
        assert_eq!(ids(&result), vec![1, 6]);
        assert_eq!(result[0].title, "Community Health Centers");
        assert_eq!(result[1].title, "Mental Health Support");
    }

    #[test]
    fn test_finance_category_only() {
        let catalog = Catalog::builtin();
        let result = filter_resources(&catalog, &Category::from("Finance"), "");
        assert_eq!(ids(&result), vec![4]);
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let catalog = Catalog::builtin();
        let result = filter_resources(&catalog, &Category::from("Education"), "  esl ");
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_whitespace_query_matches_everything_in_category() {
        let catalog = Catalog::builtin();
        let result = filter_resources(&catalog, &Category::from("Health"), " \t ");
        assert_eq!(ids(&result), vec![1, 6]);
    }

    #[test]
    fn test_query_matches_category_label() {
        let catalog = Catalog::builtin();
        let result = filter_resources(&catalog, &Category::all(), "LEGAL");
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = Catalog::builtin();
        let result = filter_resources(&catalog, &Category::from("Legal"), "zzz-no-match");
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let catalog = Catalog::builtin();
        let result = filter_resources(&catalog, &Category::from("Housing"), "");
        assert!(result.is_empty());
    }

    #[test]
    fn test_multi_word_query_is_a_single_substring() {
        let catalog = Catalog::builtin();
        assert_eq!(
            ids(&filter_resources(&catalog, &Category::all(), "food banks")),
            vec![5]
        );
        assert!(filter_resources(&catalog, &Category::all(), "food legal").is_empty());
    }

    fn arb_catalog() -> impl Strategy<Value = Catalog> {
        let labels = ["Health", "Education", "Legal"];
        prop::collection::vec(
            (0usize..3, "[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,24}"),
            0..12,
        )
        .prop_map(move |rows| {
            let resources = rows
                .into_iter()
                .enumerate()
                .map(|(i, (cat, title, description))| {
                    Resource::new(i as u32 + 1, title, description, labels[cat], "#")
                })
                .collect();
            let categories = std::iter::once("All")
                .chain(labels)
                .map(Category::from)
                .collect();
            Catalog::new(categories, resources).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_empty_query_is_category_subsequence(
            catalog in arb_catalog(),
            label in prop::sample::select(vec!["All", "Health", "Education", "Legal"]),
        ) {
            let active = Category::from(label);
            let result = filter_resources(&catalog, &active, "");
            let expected: Vec<u32> = catalog
                .resources()
                .iter()
                .filter(|r| active.is_all() || r.category == active)
                .map(|r| r.id)
                .collect();
            prop_assert_eq!(ids(&result), expected);
        }

        #[test]
        fn prop_filter_is_sound_and_complete(
            catalog in arb_catalog(),
            label in prop::sample::select(vec!["All", "Health", "Education", "Legal"]),
            query in "[a-zA-Z ]{0,4}",
        ) {
            let active = Category::from(label);
            let result = filter_resources(&catalog, &active, &query);
            let needle = query.trim().to_lowercase();

            let satisfies = |r: &Resource| {
                let category_ok = active.is_all() || r.category == active;
                let search_ok = needle.is_empty()
                    || r.title.to_lowercase().contains(&needle)
                    || r.description.to_lowercase().contains(&needle)
                    || r.category.as_str().to_lowercase().contains(&needle);
                category_ok && search_ok
            };

            for r in &result {
                prop_assert!(satisfies(*r));
            }
            let expected: Vec<u32> = catalog
                .resources()
                .iter()
                .filter(|r| satisfies(*r))
                .map(|r| r.id)
                .collect();
            prop_assert_eq!(ids(&result), expected);
        }
    }
}
