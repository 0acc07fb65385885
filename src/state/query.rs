/// Filtering and sorting for the browse grid
///
/// The engine is a pure function of (recipes, search term, selected tags,
/// sort order). It owns no state and is cheap enough to recompute on every
/// keystroke, tag toggle, or sort selection.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer};

use super::recipe::Recipe;

/// The four total orderings offered by the sort control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// `created_at` descending
    #[default]
    Newest,
    /// `created_at` ascending
    Oldest,
    /// Total time ascending
    Time,
    /// Shelf life descending
    Shelf,
}

impl SortOrder {
    /// All options, in the order the sort control lists them
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Newest,
        SortOrder::Oldest,
        SortOrder::Time,
        SortOrder::Shelf,
    ];

    /// Parse a sort key as it appears in exported documents.
    ///
    /// Unknown keys fall back to the default ordering instead of failing;
    /// a hand-edited document must never take the catalog down.
    pub fn from_key(key: &str) -> Self {
        match key {
            "oldest" => SortOrder::Oldest,
            "time" => SortOrder::Time,
            "shelf" => SortOrder::Shelf,
            _ => SortOrder::Newest,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortOrder::Newest => "Newest First",
            SortOrder::Oldest => "Oldest First",
            SortOrder::Time => "Quickest to Make",
            SortOrder::Shelf => "Longest Shelf Life",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Ok(SortOrder::from_key(&key))
    }
}

/// Compute the ordered list of recipes the grid should show.
///
/// Filters are conjunctive: a recipe must match the search term AND carry
/// every selected tag to remain visible. Search matches on titles only.
/// The sort is stable, so records that compare equal keep their relative
/// catalog order.
pub fn compute_visible_recipes<'a>(
    recipes: &'a [Recipe],
    search_term: &str,
    selected_tags: &BTreeSet<String>,
    sort_order: SortOrder,
) -> Vec<&'a Recipe> {
    let needle = search_term.to_lowercase();

    let mut visible: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| needle.is_empty() || recipe.title.to_lowercase().contains(&needle))
        .filter(|recipe| {
            selected_tags
                .iter()
                .all(|tag| recipe.tags.iter().any(|t| t == tag))
        })
        .collect();

    match sort_order {
        SortOrder::Newest => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => visible.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Time => visible.sort_by(|a, b| a.total_time().cmp(&b.total_time())),
        SortOrder::Shelf => {
            visible.sort_by(|a, b| b.shelf_life.unwrap_or(0).cmp(&a.shelf_life.unwrap_or(0)))
        }
    }

    visible
}

/// Every tag that appears on at least one recipe, deduplicated and sorted
/// lexicographically. Recomputed whenever the catalog changes.
pub fn available_tags(recipes: &[Recipe]) -> Vec<String> {
    let unique: BTreeSet<&str> = recipes
        .iter()
        .flat_map(|recipe| recipe.tags.iter())
        .map(String::as_str)
        .collect();

    unique.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn recipe(
        id: &str,
        title: &str,
        prep: u32,
        cook: u32,
        cool: Option<u32>,
        shelf: Option<u32>,
        tags: &[&str],
        created: &str,
    ) -> Recipe {
        Recipe {
            id: id.to_owned(),
            title: title.to_owned(),
            slug: title.to_lowercase().replace(' ', "-"),
            prep_time: prep,
            cook_time: cook,
            cool_time: cool,
            shelf_life: shelf,
            fridge_life: None,
            freezer_life: None,
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            created_at: created.parse::<DateTime<Utc>>().unwrap(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            tips: Vec::new(),
            thumbnail: None,
        }
    }

    fn catalog() -> Vec<Recipe> {
        vec![
            recipe(
                "1",
                "Newest Recipe",
                10,
                20,
                Some(5),
                Some(3),
                &["new"],
                "2023-01-02T00:00:00Z",
            ),
            recipe(
                "2",
                "Oldest Recipe",
                15,
                25,
                Some(10),
                Some(5),
                &["old"],
                "2023-01-01T00:00:00Z",
            ),
            recipe(
                "3",
                "Quickest Recipe",
                5,
                10,
                Some(0),
                Some(2),
                &["quick"],
                "2023-01-03T00:00:00Z",
            ),
            recipe(
                "4",
                "Longest Lasting Recipe",
                20,
                30,
                Some(15),
                Some(10),
                &["lasting"],
                "2023-01-04T00:00:00Z",
            ),
        ]
    }

    fn titles<'a>(visible: &'a [&'a Recipe]) -> Vec<&'a str> {
        visible.iter().map(|r| r.title.as_str()).collect()
    }

    fn no_tags() -> BTreeSet<String> {
        BTreeSet::new()
    }

    fn tag_set(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| (*t).to_owned()).collect()
    }

    #[test]
    fn default_query_sorts_newest_first_and_is_idempotent() {
        let recipes = catalog();
        let before = recipes.clone();

        let first = compute_visible_recipes(&recipes, "", &no_tags(), SortOrder::Newest);
        assert_eq!(
            titles(&first),
            vec![
                "Longest Lasting Recipe",
                "Quickest Recipe",
                "Newest Recipe",
                "Oldest Recipe",
            ]
        );

        let second = compute_visible_recipes(&recipes, "", &no_tags(), SortOrder::Newest);
        assert_eq!(titles(&first), titles(&second));
        // the engine returns views; the catalog itself is untouched
        assert_eq!(recipes, before);
    }

    #[test]
    fn oldest_reverses_the_chronological_order() {
        let recipes = catalog();
        let visible = compute_visible_recipes(&recipes, "", &no_tags(), SortOrder::Oldest);
        assert_eq!(
            titles(&visible),
            vec![
                "Oldest Recipe",
                "Newest Recipe",
                "Quickest Recipe",
                "Longest Lasting Recipe",
            ]
        );
    }

    #[test]
    fn time_sorts_by_total_time_ascending() {
        let recipes = catalog();
        let visible = compute_visible_recipes(&recipes, "", &no_tags(), SortOrder::Time);
        // totals: 15, 35, 50, 65
        assert_eq!(
            titles(&visible),
            vec![
                "Quickest Recipe",
                "Newest Recipe",
                "Oldest Recipe",
                "Longest Lasting Recipe",
            ]
        );
    }

    #[test]
    fn shelf_sorts_descending_and_defaults_missing_values_to_zero() {
        let mut recipes = catalog();
        recipes.push(recipe(
            "5",
            "Unshelved Recipe",
            1,
            1,
            None,
            None,
            &[],
            "2023-01-05T00:00:00Z",
        ));

        let visible = compute_visible_recipes(&recipes, "", &no_tags(), SortOrder::Shelf);
        // shelf lives: 10, 5, 3, 2, then the recipe with none at all
        assert_eq!(
            titles(&visible),
            vec![
                "Longest Lasting Recipe",
                "Oldest Recipe",
                "Newest Recipe",
                "Quickest Recipe",
                "Unshelved Recipe",
            ]
        );
    }

    #[test]
    fn stable_sort_keeps_catalog_order_on_ties() {
        let recipes = vec![
            recipe("1", "First Pie", 10, 10, None, None, &[], "2023-02-01T00:00:00Z"),
            recipe("2", "Second Pie", 5, 15, None, None, &[], "2023-02-02T00:00:00Z"),
        ];

        // both total 20 minutes; catalog order must survive
        let visible = compute_visible_recipes(&recipes, "", &no_tags(), SortOrder::Time);
        assert_eq!(titles(&visible), vec!["First Pie", "Second Pie"]);
    }

    #[test]
    fn search_is_a_case_insensitive_substring_match() {
        let recipes = catalog();
        let visible = compute_visible_recipes(&recipes, "qUICk", &no_tags(), SortOrder::Newest);
        assert_eq!(titles(&visible), vec!["Quickest Recipe"]);
    }

    #[test]
    fn search_matches_titles_not_tags() {
        let recipes = vec![
            recipe("1", "Lasagne", 30, 60, None, None, &["pasta"], "2023-01-01T00:00:00Z"),
            recipe("2", "Pasta Salad", 15, 0, None, None, &[], "2023-01-02T00:00:00Z"),
        ];

        let visible = compute_visible_recipes(&recipes, "pasta", &no_tags(), SortOrder::Newest);
        assert_eq!(titles(&visible), vec!["Pasta Salad"]);
    }

    #[test]
    fn search_narrows_monotonically() {
        let recipes = catalog();
        let term = "quickest recipe";

        let mut previous =
            compute_visible_recipes(&recipes, "", &no_tags(), SortOrder::Newest).len();
        for end in 1..=term.len() {
            let count =
                compute_visible_recipes(&recipes, &term[..end], &no_tags(), SortOrder::Newest)
                    .len();
            assert!(count <= previous, "result grew at prefix {:?}", &term[..end]);
            previous = count;
        }
    }

    #[test]
    fn selected_tags_are_a_conjunctive_filter() {
        let recipes = vec![
            recipe("a", "Chili", 10, 30, None, None, &["vegan", "quick"], "2023-01-01T00:00:00Z"),
            recipe("b", "Stew", 10, 90, None, None, &["vegan"], "2023-01-02T00:00:00Z"),
            recipe("c", "Toast", 2, 3, None, None, &[], "2023-01-03T00:00:00Z"),
        ];

        let both = compute_visible_recipes(
            &recipes,
            "",
            &tag_set(&["vegan", "quick"]),
            SortOrder::Oldest,
        );
        assert_eq!(titles(&both), vec!["Chili"]);

        let one = compute_visible_recipes(&recipes, "", &tag_set(&["vegan"]), SortOrder::Oldest);
        assert_eq!(titles(&one), vec!["Chili", "Stew"]);

        // no selection admits everything, including the tagless recipe
        let none = compute_visible_recipes(&recipes, "", &no_tags(), SortOrder::Oldest);
        assert_eq!(titles(&none), vec!["Chili", "Stew", "Toast"]);
    }

    #[test]
    fn search_and_tags_compose() {
        let recipes = vec![
            recipe("a", "Green Curry", 20, 25, None, None, &["thai"], "2023-01-01T00:00:00Z"),
            recipe("b", "Red Curry", 20, 25, None, None, &["thai"], "2023-01-02T00:00:00Z"),
            recipe("c", "Green Salad", 10, 0, None, None, &[], "2023-01-03T00:00:00Z"),
        ];

        let visible =
            compute_visible_recipes(&recipes, "green", &tag_set(&["thai"]), SortOrder::Newest);
        assert_eq!(titles(&visible), vec!["Green Curry"]);
    }

    #[test]
    fn empty_catalog_yields_empty_results() {
        for order in SortOrder::ALL {
            assert!(compute_visible_recipes(&[], "soup", &no_tags(), order).is_empty());
        }
    }

    #[test]
    fn unknown_sort_keys_fall_back_to_newest() {
        assert_eq!(SortOrder::from_key("shelf"), SortOrder::Shelf);
        assert_eq!(SortOrder::from_key("fridge"), SortOrder::Newest);
        assert_eq!(SortOrder::from_key("freezer"), SortOrder::Newest);
        assert_eq!(SortOrder::from_key(""), SortOrder::Newest);

        let parsed: SortOrder = serde_json::from_str("\"cellar\"").unwrap();
        assert_eq!(parsed, SortOrder::Newest);
    }

    #[test]
    fn sort_labels_match_the_control() {
        assert_eq!(SortOrder::Newest.to_string(), "Newest First");
        assert_eq!(SortOrder::Oldest.to_string(), "Oldest First");
        assert_eq!(SortOrder::Time.to_string(), "Quickest to Make");
        assert_eq!(SortOrder::Shelf.to_string(), "Longest Shelf Life");
    }

    #[test]
    fn available_tags_is_the_sorted_deduplicated_union() {
        let recipes = vec![
            recipe("a", "Chili", 10, 30, None, None, &["vegan", "spicy"], "2023-01-01T00:00:00Z"),
            recipe("b", "Stew", 10, 90, None, None, &["vegan", "winter"], "2023-01-02T00:00:00Z"),
            recipe("c", "Toast", 2, 3, None, None, &[], "2023-01-03T00:00:00Z"),
        ];

        assert_eq!(available_tags(&recipes), vec!["spicy", "vegan", "winter"]);
        assert!(available_tags(&[]).is_empty());
    }
}
