//! # Ingredient and Unit Data Model
//!
//! This module defines the data structures produced by the parser: the canonical
//! unit identifiers, the quantity forms, and the structured result of parsing one
//! ingredient line.
//!
//! ## Core Concepts
//!
//! - **UnitId**: Canonical identity of a measurement unit word. Every distinct
//!   unit word is its own variant ("Tasse" is not "cup"), no conversion happens
//! - **Language**: The vocabulary an alias belongs to
//! - **Quantity**: A numeric amount that can be exact, fractional, or a range
//! - **ParseResult**: The (quantity, unit, ingredient) triple. An absent unit is
//!   ordinary data, not an error
//!
//! ## Usage
//!
//! ```rust
//! use ingredient_units::ingredient_model::{ParseResult, Quantity, UnitId};
//!
//! let flour = ParseResult::new("flour")
//!     .with_quantity(Quantity::exact(2.0))
//!     .with_unit(UnitId::Cup);
//!
//! assert_eq!(flour.to_string(), "2 cup flour");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical measurement units recognized by the alias table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitId {
    // English volume and weight units
    Cup,
    FluidOunce,
    Gallon,
    Ounce,
    Pint,
    Pound,
    Quart,
    Tablespoon,
    Teaspoon,

    // German units
    Tasse,
    Essloeffel,
    Teeloeffel,
    Pfund,
    Messerspitze,
    Prise,
    Etwas,
    Schuss,
    Tropfen,
    Spritzer,

    // French units
    PointeCouteau,
    CuillereCafe,
    CuillereSoupe,

    // Metric units
    Gram,
    Kilogram,
    Liter,
    Milligram,
    Milliliter,

    // Imprecise units
    Dash,
    Handful,
    Pinch,
    Touch,
}

impl UnitId {
    /// Every unit, in declaration order
    pub const ALL: [UnitId; 31] = [
        UnitId::Cup,
        UnitId::FluidOunce,
        UnitId::Gallon,
        UnitId::Ounce,
        UnitId::Pint,
        UnitId::Pound,
        UnitId::Quart,
        UnitId::Tablespoon,
        UnitId::Teaspoon,
        UnitId::Tasse,
        UnitId::Essloeffel,
        UnitId::Teeloeffel,
        UnitId::Pfund,
        UnitId::Messerspitze,
        UnitId::Prise,
        UnitId::Etwas,
        UnitId::Schuss,
        UnitId::Tropfen,
        UnitId::Spritzer,
        UnitId::PointeCouteau,
        UnitId::CuillereCafe,
        UnitId::CuillereSoupe,
        UnitId::Gram,
        UnitId::Kilogram,
        UnitId::Liter,
        UnitId::Milligram,
        UnitId::Milliliter,
        UnitId::Dash,
        UnitId::Handful,
        UnitId::Pinch,
        UnitId::Touch,
    ];

    /// Stable identifier, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitId::Cup => "CUP",
            UnitId::FluidOunce => "FLUID_OUNCE",
            UnitId::Gallon => "GALLON",
            UnitId::Ounce => "OUNCE",
            UnitId::Pint => "PINT",
            UnitId::Pound => "POUND",
            UnitId::Quart => "QUART",
            UnitId::Tablespoon => "TABLESPOON",
            UnitId::Teaspoon => "TEASPOON",
            UnitId::Tasse => "TASSE",
            UnitId::Essloeffel => "ESSLOEFFEL",
            UnitId::Teeloeffel => "TEELOEFFEL",
            UnitId::Pfund => "PFUND",
            UnitId::Messerspitze => "MESSERSPITZE",
            UnitId::Prise => "PRISE",
            UnitId::Etwas => "ETWAS",
            UnitId::Schuss => "SCHUSS",
            UnitId::Tropfen => "TROPFEN",
            UnitId::Spritzer => "SPRITZER",
            UnitId::PointeCouteau => "POINTE_COUTEAU",
            UnitId::CuillereCafe => "CUILLERE_CAFE",
            UnitId::CuillereSoupe => "CUILLERE_SOUPE",
            UnitId::Gram => "GRAM",
            UnitId::Kilogram => "KILOGRAM",
            UnitId::Liter => "LITER",
            UnitId::Milligram => "MILLIGRAM",
            UnitId::Milliliter => "MILLILITER",
            UnitId::Dash => "DASH",
            UnitId::Handful => "HANDFUL",
            UnitId::Pinch => "PINCH",
            UnitId::Touch => "TOUCH",
        }
    }

    /// Get a human-readable name of the unit
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitId::Cup => "cup",
            UnitId::FluidOunce => "fl oz",
            UnitId::Gallon => "gallon",
            UnitId::Ounce => "oz",
            UnitId::Pint => "pint",
            UnitId::Pound => "lb",
            UnitId::Quart => "quart",
            UnitId::Tablespoon => "tbsp",
            UnitId::Teaspoon => "tsp",
            UnitId::Tasse => "Tasse",
            UnitId::Essloeffel => "EL",
            UnitId::Teeloeffel => "TL",
            UnitId::Pfund => "Pfund",
            UnitId::Messerspitze => "Msp.",
            UnitId::Prise => "Prise",
            UnitId::Etwas => "etwas",
            UnitId::Schuss => "Schuss",
            UnitId::Tropfen => "Tropfen",
            UnitId::Spritzer => "Spritzer",
            UnitId::PointeCouteau => "pointe de couteau",
            UnitId::CuillereCafe => "c.c.",
            UnitId::CuillereSoupe => "c.s.",
            UnitId::Gram => "g",
            UnitId::Kilogram => "kg",
            UnitId::Liter => "l",
            UnitId::Milligram => "mg",
            UnitId::Milliliter => "ml",
            UnitId::Dash => "dash",
            UnitId::Handful => "handful",
            UnitId::Pinch => "pinch",
            UnitId::Touch => "touch",
        }
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Vocabulary an alias is registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
    Fr,
}

impl Language {
    /// Map a primary language subtag ("en", "de", "fr") to a vocabulary
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "de" => Some(Language::De),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
        }
    }
}

/// A numeric amount preceding the unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Quantity {
    /// Exact amount (e.g., "2", "1.5")
    Exact(f64),

    /// Fractional amount (e.g., "1/2", "2 1/4", "½")
    Fraction {
        /// Whole number part (optional)
        whole: Option<u32>,
        /// Numerator of the fraction
        numerator: u32,
        /// Denominator of the fraction
        denominator: u32,
    },

    /// Range of amounts (e.g., "2-3", "1 to 2")
    Range {
        /// Minimum amount
        min: f64,
        /// Maximum amount
        max: f64,
    },
}

impl Quantity {
    /// Create an exact quantity
    pub fn exact(amount: f64) -> Self {
        Quantity::Exact(amount)
    }

    /// Create a fractional quantity
    pub fn fraction(whole: Option<u32>, numerator: u32, denominator: u32) -> Self {
        Quantity::Fraction {
            whole,
            numerator,
            denominator,
        }
    }

    /// Create a range quantity
    pub fn range(min: f64, max: f64) -> Self {
        Quantity::Range { min, max }
    }

    /// Get an estimated numeric value for this quantity
    ///
    /// Ranges estimate to their midpoint.
    pub fn estimated_value(&self) -> f64 {
        match self {
            Quantity::Exact(amount) => *amount,
            Quantity::Fraction {
                whole,
                numerator,
                denominator,
            } => {
                let whole_part = whole.unwrap_or(0) as f64;
                whole_part + *numerator as f64 / *denominator as f64
            }
            Quantity::Range { min, max } => (min + max) / 2.0,
        }
    }

    /// Check if this quantity represents a range
    pub fn is_range(&self) -> bool {
        matches!(self, Quantity::Range { .. })
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Exact(amount) => write_amount(f, *amount),
            Quantity::Fraction {
                whole,
                numerator,
                denominator,
            } => {
                if let Some(w) = whole {
                    write!(f, "{} {}/{}", w, numerator, denominator)
                } else {
                    write!(f, "{}/{}", numerator, denominator)
                }
            }
            Quantity::Range { min, max } => {
                write_amount(f, *min)?;
                write!(f, "-")?;
                write_amount(f, *max)
            }
        }
    }
}

fn write_amount(f: &mut fmt::Formatter<'_>, amount: f64) -> fmt::Result {
    if amount.fract() == 0.0 {
        write!(f, "{}", amount as i64)
    } else {
        write!(f, "{}", amount)
    }
}

/// Structured result of parsing one ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Leading amount, if any
    pub quantity: Option<Quantity>,

    /// Canonical unit; `None` when no unit word was recognized
    pub unit: Option<UnitId>,

    /// Everything after quantity and unit (e.g., "flour", "Zucker")
    pub ingredient: String,
}

impl ParseResult {
    /// Create a result with just an ingredient name
    pub fn new(ingredient: &str) -> Self {
        Self {
            quantity: None,
            unit: None,
            ingredient: ingredient.to_string(),
        }
    }

    /// Add a quantity to this result
    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Add a unit to this result
    pub fn with_unit(mut self, unit: UnitId) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Check if a unit was recognized
    pub fn has_unit(&self) -> bool {
        self.unit.is_some()
    }

    /// Check if a quantity was recognized
    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(3);
        if let Some(quantity) = &self.quantity {
            parts.push(quantity.to_string());
        }
        if let Some(unit) = &self.unit {
            parts.push(unit.display_name().to_string());
        }
        if !self.ingredient.is_empty() {
            parts.push(self.ingredient.clone());
        }
        write!(f, "{}", parts.join(" "))
    }
}

/// Represents a collection of parsed ingredient lines
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IngredientList {
    /// Successfully parsed lines, in input order
    pub ingredients: Vec<ParseResult>,

    /// Lines rejected as invalid input
    pub unparsed_lines: Vec<String>,
}

impl IngredientList {
    /// Create a new empty ingredient list
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of successfully parsed ingredients
    pub fn parsed_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Get the number of unparsed lines
    pub fn unparsed_count(&self) -> usize {
        self.unparsed_lines.len()
    }

    /// Share of lines that carried a recognized unit
    pub fn unit_coverage(&self) -> f32 {
        if self.ingredients.is_empty() {
            return 0.0;
        }
        let with_unit = self.ingredients.iter().filter(|i| i.has_unit()).count();
        with_unit as f32 / self.ingredients.len() as f32
    }
}

impl fmt::Display for IngredientList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Ingredient List ({} parsed, {} unparsed):",
            self.parsed_count(),
            self.unparsed_count()
        )?;

        for ingredient in &self.ingredients {
            writeln!(f, "  • {}", ingredient)?;
        }

        if !self.unparsed_lines.is_empty() {
            writeln!(f, "Unparsed:")?;
            for line in &self.unparsed_lines {
                writeln!(f, "  ? {}", line)?;
            }
        }

        Ok(())
    }
}
