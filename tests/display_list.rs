//! Display list derivation: subset, ordering and the reference scenarios.

use recipe_deck::catalog::{builtin_recipes, Difficulty, Recipe, RecipeStore, Step};
use recipe_deck::view::{
    compute_display_list, flatten_steps, render_steps, toggle_favorite, FavoriteSet, Filter,
    SearchQuery, SortOrder,
};

fn salad_and_wellington() -> Vec<Recipe> {
    vec![
        Recipe::new(1, "Greek Salad", 15, Difficulty::Easy)
            .with_description("Fresh and bright.")
            .with_ingredients(["Tomatoes", "Cucumber", "Feta"]),
        Recipe::new(2, "Beef Wellington", 120, Difficulty::Hard)
            .with_description("A showpiece roast.")
            .with_ingredients(["Beef fillet", "Puff pastry"]),
    ]
}

fn titles(recipes: &[&Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.title.clone()).collect()
}

#[test]
fn scenario_a_quick_filter() {
    let recipes = salad_and_wellington();
    let list = compute_display_list(
        &recipes,
        Filter::Quick,
        SortOrder::None,
        &SearchQuery::default(),
        &FavoriteSet::new(),
    );
    assert_eq!(list.ids(), [1]);
}

#[test]
fn scenario_b_sort_by_name() {
    let recipes = salad_and_wellington();
    let list = compute_display_list(
        &recipes,
        Filter::All,
        SortOrder::Name,
        &SearchQuery::default(),
        &FavoriteSet::new(),
    );
    assert_eq!(titles(list.recipes()), ["Beef Wellington", "Greek Salad"]);
}

#[test]
fn scenario_c_search_matches_ingredient_only() {
    let recipes = salad_and_wellington();
    assert!(!recipes[0].title.to_lowercase().contains("feta"));
    assert!(!recipes[0].description.to_lowercase().contains("feta"));

    let list = compute_display_list(
        &recipes,
        Filter::All,
        SortOrder::None,
        &SearchQuery::new("feta"),
        &FavoriteSet::new(),
    );
    assert_eq!(list.ids(), [1]);
}

#[test]
fn scenario_d_favorites_filter_and_toggle_back() {
    let recipes = salad_and_wellington();
    let favorites: FavoriteSet = [2].into_iter().collect();
    let list = compute_display_list(
        &recipes,
        Filter::Favorites,
        SortOrder::None,
        &SearchQuery::default(),
        &favorites,
    );
    assert_eq!(list.ids(), [2]);

    let toggled = toggle_favorite(&favorites, 2);
    assert!(toggled.is_empty());
}

#[test]
fn scenario_e_two_level_steps_render_each_leaf_once() {
    let steps = vec![
        Step::leaf("Sear"),
        Step::composite(
            "Wrap",
            vec![
                Step::composite("Duxelles", vec![Step::leaf("Chop"), Step::leaf("Dry")]),
                Step::leaf("Prosciutto"),
            ],
        ),
        Step::leaf("Bake"),
    ];

    let rendered = render_steps(&steps);
    assert_eq!(rendered.len(), 3);
    let duxelles = &rendered[1].children[0];
    assert_eq!(duxelles.text, "Duxelles");
    assert_eq!(duxelles.depth, 1);
    assert_eq!(
        duxelles.children.iter().map(|c| (c.text, c.depth)).collect::<Vec<_>>(),
        [("Chop", 2), ("Dry", 2)]
    );

    let lines = flatten_steps(&rendered);
    let order: Vec<_> = lines.iter().map(|l| (l.depth, l.text)).collect();
    assert_eq!(
        order,
        [
            (0, "Sear"),
            (0, "Wrap"),
            (1, "Duxelles"),
            (2, "Chop"),
            (2, "Dry"),
            (1, "Prosciutto"),
            (0, "Bake"),
        ]
    );
}

#[test]
fn output_is_always_a_subset_of_the_catalog() {
    let recipes = builtin_recipes();
    let favorites: FavoriteSet = [1, 4, 99].into_iter().collect();
    let queries = ["", "pasta", "MUSHROOM", "zzz", "  e  "];

    for filter in Filter::all() {
        for sort in SortOrder::all() {
            for raw in queries {
                let list = compute_display_list(
                    &recipes,
                    *filter,
                    *sort,
                    &SearchQuery::new(raw),
                    &favorites,
                );
                assert!(list.len() <= recipes.len());
                assert_eq!(list.total(), recipes.len());
                for shown in list.recipes() {
                    assert!(
                        recipes.iter().any(|r| std::ptr::eq(r, *shown)),
                        "{} not from catalog",
                        shown.title
                    );
                }
                let mut ids = list.ids();
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), list.len(), "no recipe listed twice");
            }
        }
    }
}

#[test]
fn same_inputs_give_same_output() {
    let store = RecipeStore::builtin();
    let favorites: FavoriteSet = [2, 3].into_iter().collect();
    let query = SearchQuery::new("e");
    let first = compute_display_list(store.all(), Filter::All, SortOrder::Time, &query, &favorites);
    let second = compute_display_list(store.all(), Filter::All, SortOrder::Time, &query, &favorites);
    assert_eq!(first, second);
}

#[test]
fn time_sort_keeps_relative_order_of_ties() {
    let recipes = vec![
        Recipe::new(1, "Late tie", 30, Difficulty::Easy),
        Recipe::new(2, "Fast", 10, Difficulty::Easy),
        Recipe::new(3, "Early tie", 30, Difficulty::Medium),
        Recipe::new(4, "Another tie", 30, Difficulty::Hard),
    ];
    let list = compute_display_list(
        &recipes,
        Filter::All,
        SortOrder::Time,
        &SearchQuery::default(),
        &FavoriteSet::new(),
    );
    assert_eq!(list.ids(), [2, 1, 3, 4]);
}

#[test]
fn sort_none_keeps_catalog_order() {
    let recipes = builtin_recipes();
    let list = compute_display_list(
        &recipes,
        Filter::All,
        SortOrder::None,
        &SearchQuery::default(),
        &FavoriteSet::new(),
    );
    let catalog_ids: Vec<_> = recipes.iter().map(|r| r.id).collect();
    assert_eq!(list.ids(), catalog_ids);
}

#[test]
fn unknown_tags_behave_like_all_and_none() {
    let recipes = builtin_recipes();
    let fallback = compute_display_list(
        &recipes,
        Filter::parse("gluten-free"),
        SortOrder::parse("popularity"),
        &SearchQuery::default(),
        &FavoriteSet::new(),
    );
    assert_eq!(fallback.len(), recipes.len());
    assert_eq!(fallback.ids(), recipes.iter().map(|r| r.id).collect::<Vec<_>>());
}

#[test]
fn favorites_filter_with_no_favorites_is_empty() {
    let recipes = builtin_recipes();
    let list = compute_display_list(
        &recipes,
        Filter::Favorites,
        SortOrder::None,
        &SearchQuery::default(),
        &FavoriteSet::new(),
    );
    assert!(list.is_empty());
    assert_eq!(list.counter_text(), "Showing 0 of 6 recipes");
}

#[test]
fn name_sort_places_accented_titles_alphabetically() {
    let recipes = vec![
        Recipe::new(1, "Fudge", 30, Difficulty::Easy),
        Recipe::new(2, "Éclair", 60, Difficulty::Hard),
        Recipe::new(3, "Apple Pie", 90, Difficulty::Medium),
        Recipe::new(4, "Zucchini Bread", 70, Difficulty::Easy),
    ];
    let list = compute_display_list(
        &recipes,
        Filter::All,
        SortOrder::Name,
        &SearchQuery::default(),
        &FavoriteSet::new(),
    );
    assert_eq!(
        titles(list.recipes()),
        ["Apple Pie", "Éclair", "Fudge", "Zucchini Bread"]
    );
}

#[test]
fn name_sort_orders_case_variants_lower_first() {
    let recipes = vec![
        Recipe::new(1, "Apple pie", 90, Difficulty::Medium),
        Recipe::new(2, "apple pie", 60, Difficulty::Easy),
        Recipe::new(3, "banana bread", 45, Difficulty::Easy),
    ];
    let list = compute_display_list(
        &recipes,
        Filter::All,
        SortOrder::Name,
        &SearchQuery::default(),
        &FavoriteSet::new(),
    );
    assert_eq!(list.ids(), [2, 1, 3]);
}
