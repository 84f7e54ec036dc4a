//! # Integration Tests
//!
//! End-to-end parsing of recipe ingredient lists, serialization of results, and
//! shared use of the parser across threads.

use ingredient_units::config::ParserConfig;
use ingredient_units::errors::ParseError;
use ingredient_units::ingredient_model::{Language, Quantity, UnitId};
use ingredient_units::modifiers::ModifierTable;
use ingredient_units::unit_aliases::{AliasTable, UnitAlias};
use ingredient_units::{parse, parse_ingredient_list, IngredientParser, ParseResult, UnitResolver};
use std::sync::Arc;
use std::thread;

#[test]
fn test_german_recipe_integration() {
    let recipe = r#"
    Zutaten:
    250 g Mehl
    2 gehäufte EL Zucker
    1 Prise Salz
    etwas Zitronenschale
    3 Eier
    1/2 Liter Milch
    2 Tropfen Vanille
    "#;

    let list = parse_ingredient_list(recipe);

    assert_eq!(list.parsed_count(), 8);
    assert_eq!(list.unparsed_count(), 0);

    // Header line is plain text
    assert_eq!(list.ingredients[0].unit, None);
    assert_eq!(list.ingredients[0].ingredient, "Zutaten");

    assert_eq!(list.ingredients[1].quantity, Some(Quantity::exact(250.0)));
    assert_eq!(list.ingredients[1].unit, Some(UnitId::Gram));
    assert_eq!(list.ingredients[1].ingredient, "Mehl");

    assert_eq!(list.ingredients[2].unit, Some(UnitId::Essloeffel));
    assert_eq!(list.ingredients[2].ingredient, "Zucker");

    assert_eq!(list.ingredients[3].unit, Some(UnitId::Prise));
    assert_eq!(list.ingredients[4].unit, Some(UnitId::Etwas));
    assert_eq!(list.ingredients[4].quantity, None);

    // Quantity-only ingredient
    assert_eq!(list.ingredients[5].quantity, Some(Quantity::exact(3.0)));
    assert_eq!(list.ingredients[5].unit, None);
    assert_eq!(list.ingredients[5].ingredient, "Eier");

    assert_eq!(list.ingredients[6].quantity, Some(Quantity::fraction(None, 1, 2)));
    assert_eq!(list.ingredients[6].unit, Some(UnitId::Liter));

    assert_eq!(list.ingredients[7].unit, Some(UnitId::Tropfen));
    assert_eq!(list.ingredients[7].ingredient, "Vanille");
}

#[test]
fn test_french_recipe_integration() {
    let recipe = "125 g de farine\n2 œufs\n1 cuillère à soupe de sucre\n1 pointe de couteau de cannelle\n2 c.c. d'huile";
    let list = parse_ingredient_list(recipe);

    assert_eq!(list.parsed_count(), 5);
    let units: Vec<Option<UnitId>> = list.ingredients.iter().map(|i| i.unit).collect();
    assert_eq!(
        units,
        vec![
            Some(UnitId::Gram),
            None,
            Some(UnitId::CuillereSoupe),
            Some(UnitId::PointeCouteau),
            Some(UnitId::CuillereCafe),
        ]
    );

    let names: Vec<&str> = list.ingredients.iter().map(|i| i.ingredient.as_str()).collect();
    assert_eq!(names, vec!["farine", "œufs", "sucre", "cannelle", "huile"]);
}

#[test]
fn test_english_recipe_integration() {
    let recipe = "2 1/4 cups all-purpose flour\n1 heaping tbsp cocoa\n1 fl. oz. rum\n2-3 cupcakes\n½ lb. butter, softened";
    let list = parse_ingredient_list(recipe);

    assert_eq!(list.parsed_count(), 5);

    assert_eq!(list.ingredients[0].quantity, Some(Quantity::fraction(Some(2), 1, 4)));
    assert_eq!(list.ingredients[0].ingredient, "all-purpose flour");

    assert_eq!(list.ingredients[1].unit, Some(UnitId::Tablespoon));
    assert_eq!(list.ingredients[1].ingredient, "cocoa");

    assert_eq!(list.ingredients[2].unit, Some(UnitId::FluidOunce));
    assert_eq!(list.ingredients[2].ingredient, "rum");

    assert_eq!(list.ingredients[3].quantity, Some(Quantity::range(2.0, 3.0)));
    assert_eq!(list.ingredients[3].unit, None);
    assert_eq!(list.ingredients[3].ingredient, "cupcakes");

    assert_eq!(list.ingredients[4].quantity, Some(Quantity::fraction(None, 1, 2)));
    assert_eq!(list.ingredients[4].unit, Some(UnitId::Pound));
    assert_eq!(list.ingredients[4].ingredient, "butter, softened");
}

#[test]
fn test_result_json_output() {
    let result = parse("2 gestr. EL Zucker").unwrap();
    let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();

    assert_eq!(json["unit"], "ESSLOEFFEL");
    assert_eq!(json["ingredient"], "Zucker");
    assert_eq!(json["quantity"]["Exact"], 2.0);

    let result = parse("2 coconuts").unwrap();
    let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
    assert!(json["unit"].is_null());
}

#[test]
fn test_parser_is_shared_across_threads() {
    let parser = Arc::new(IngredientParser::new());
    let lines = [
        ("2 cups flour", Some(UnitId::Cup)),
        ("1 gehäufter Teelöffel Zucker", Some(UnitId::Teeloeffel)),
        ("2 cuillère à café water", Some(UnitId::CuillereCafe)),
        ("2 coconuts", None),
    ];

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let parser = Arc::clone(&parser);
            thread::spawn(move || {
                let (text, expected) = lines[i % lines.len()];
                for _ in 0..100 {
                    assert_eq!(parser.parse(text).unwrap().unit, expected, "{}", text);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_custom_tables() {
    let aliases = AliasTable::new(vec![
        UnitAlias::new("Becher", UnitId::Cup, Language::De),
        UnitAlias::new("Bund", UnitId::Handful, Language::De),
    ])
    .unwrap();
    let modifiers = ModifierTable::empty();

    let resolver = UnitResolver::with_tables(&aliases, &modifiers);
    let parser = IngredientParser::with_resolver(resolver, ParserConfig::default()).unwrap();

    let result = parser.parse("1 Becher Sahne").unwrap();
    assert_eq!(result.unit, Some(UnitId::Cup));
    assert_eq!(result.ingredient, "Sahne");

    // Built-in words are unknown to this table
    assert_eq!(parser.parse("1 cup Sahne").unwrap().unit, None);
    // Without the modifier table "gestr." is ordinary text
    assert_eq!(parser.parse("1 gestr. Becher").unwrap().unit, None);
}

#[test]
fn test_conflicting_custom_table() {
    let err = AliasTable::new(vec![
        UnitAlias::new("T", UnitId::Tablespoon, Language::En),
        UnitAlias::new("t", UnitId::Teaspoon, Language::En),
    ])
    .unwrap_err();
    assert!(matches!(err, ParseError::AmbiguousAlias { .. }));
    assert!(err.to_string().contains("TABLESPOON"));
}

#[test]
fn test_display_of_parsed_line() {
    let result: ParseResult = parse("1 1/2 Tassen Mehl").unwrap();
    assert_eq!(result.to_string(), "1 1/2 Tasse Mehl");
}
