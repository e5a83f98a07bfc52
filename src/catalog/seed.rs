use crate::catalog::types::{Difficulty, Recipe, Step};

/// Catalog shipped with the binary, used when no catalog file is configured.
pub fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(1, "Classic Spaghetti Carbonara", 25, Difficulty::Easy)
            .with_description("A creamy Italian pasta dish.")
            .with_category("pasta")
            .with_ingredients(["Spaghetti", "Eggs", "Parmesan", "Pancetta", "Black pepper"])
            .with_steps(vec![
                Step::leaf("Boil pasta"),
                Step::leaf("Cook pancetta"),
                Step::composite(
                    "Prepare sauce",
                    vec![Step::leaf("Beat eggs"), Step::leaf("Mix with cheese")],
                ),
                Step::leaf("Combine and serve"),
            ]),
        Recipe::new(2, "Chicken Tikka Masala", 45, Difficulty::Medium)
            .with_description("Tender chicken in spiced sauce.")
            .with_category("curry")
            .with_ingredients(["Chicken", "Yogurt", "Spices"])
            .with_steps(vec![
                Step::leaf("Marinate chicken"),
                Step::leaf("Cook sauce"),
                Step::leaf("Combine"),
            ]),
        Recipe::new(3, "Greek Salad", 15, Difficulty::Easy)
            .with_description("Crisp vegetables with olives and a tangy dressing.")
            .with_category("salad")
            .with_ingredients([
                "Tomatoes",
                "Cucumber",
                "Red onion",
                "Kalamata olives",
                "Feta cheese",
                "Olive oil",
                "Oregano",
            ])
            .with_steps(vec![
                Step::leaf("Chop vegetables"),
                Step::leaf("Add olives and feta"),
                Step::leaf("Dress with oil and oregano"),
            ]),
        Recipe::new(4, "Beef Wellington", 120, Difficulty::Hard)
            .with_description("Beef fillet wrapped in mushroom duxelles and puff pastry.")
            .with_category("roast")
            .with_ingredients([
                "Beef fillet",
                "Mushrooms",
                "Prosciutto",
                "Puff pastry",
                "Dijon mustard",
                "Egg yolk",
            ])
            .with_steps(vec![
                Step::leaf("Sear the fillet"),
                Step::composite(
                    "Prepare the wrapping",
                    vec![
                        Step::composite(
                            "Make the duxelles",
                            vec![
                                Step::leaf("Finely chop mushrooms"),
                                Step::leaf("Cook until dry"),
                            ],
                        ),
                        Step::leaf("Lay out prosciutto"),
                        Step::leaf("Spread duxelles over prosciutto"),
                    ],
                ),
                Step::leaf("Roll in pastry and brush with yolk"),
                Step::leaf("Bake and rest"),
            ]),
        Recipe::new(5, "Vegetable Stir Fry", 20, Difficulty::Easy)
            .with_description("Quick wok-tossed vegetables in soy and ginger.")
            .with_category("wok")
            .with_ingredients(["Broccoli", "Bell pepper", "Carrot", "Soy sauce", "Ginger"])
            .with_steps(vec![
                Step::leaf("Slice vegetables"),
                Step::leaf("Stir fry on high heat"),
                Step::leaf("Season and serve"),
            ]),
        Recipe::new(6, "Mushroom Risotto", 40, Difficulty::Medium)
            .with_description("Slow-stirred arborio rice with mushrooms.")
            .with_category("rice")
            .with_ingredients(["Arborio rice", "Mushrooms", "Stock", "Parmesan", "Butter"])
            .with_steps(vec![
                Step::leaf("Saute mushrooms"),
                Step::composite(
                    "Cook the rice",
                    vec![
                        Step::leaf("Toast rice"),
                        Step::leaf("Add stock gradually"),
                    ],
                ),
                Step::leaf("Finish with butter and parmesan"),
            ]),
    ]
}
