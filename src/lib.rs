//! # Ingredient Units
//!
//! Parses free-text recipe ingredient lines ("2 cups flour", "etwas Zucker",
//! "1 gehäufter Teelöffel Zucker", "2 pointe de couteau") into quantity, unit,
//! and ingredient name. Units are recognized from a multilingual alias table
//! (English, German, French, metric) with whole-word matching, so "2 cupcakes"
//! has no unit.

pub mod config;
pub mod errors;
pub mod ingredient_model;
pub mod ingredient_name;
pub mod ingredient_parser;
pub mod logging;
pub mod modifiers;
pub mod quantity;
pub mod unit_aliases;
pub mod unit_matcher;
pub mod unit_resolver;

pub use errors::ParseError;
pub use ingredient_model::{IngredientList, Language, ParseResult, Quantity, UnitId};
pub use ingredient_parser::{parse, parse_bytes, parse_ingredient_list, IngredientParser};
pub use unit_resolver::{UnitResolution, UnitResolver};
