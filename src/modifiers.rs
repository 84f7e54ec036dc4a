//! # Modifier Table
//!
//! Descriptive qualifiers that may precede a unit ("gehäufter Teelöffel",
//! "gestr. EL", "heaping tablespoon"). They are consumed by the matcher but never
//! change or become the resolved unit.

use crate::ingredient_model::UnitId;
use crate::unit_matcher::Token;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Units a modifier may qualify
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliesTo {
    Any,
    Units(&'static [UnitId]),
}

/// A registered qualifier word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier {
    pub surface: &'static str,
    pub applies_to: AppliesTo,
}

impl Modifier {
    pub const fn new(surface: &'static str, applies_to: AppliesTo) -> Self {
        Self {
            surface,
            applies_to,
        }
    }

    /// Check whether this modifier may precede `unit`
    pub fn applies(&self, unit: UnitId) -> bool {
        match self.applies_to {
            AppliesTo::Any => true,
            AppliesTo::Units(units) => units.contains(&unit),
        }
    }
}

const GERMAN_SPOONS: &[UnitId] = &[UnitId::Essloeffel, UnitId::Teeloeffel];
const ENGLISH_SPOONS: &[UnitId] = &[UnitId::Tablespoon, UnitId::Teaspoon, UnitId::Cup];

/// Built-in qualifiers: German heaped/level, English heaping/level
pub static BUILTIN_MODIFIERS: &[Modifier] = &[
    Modifier::new("gehäuft", AppliesTo::Units(GERMAN_SPOONS)),
    Modifier::new("gehäufte", AppliesTo::Units(GERMAN_SPOONS)),
    Modifier::new("gehäufter", AppliesTo::Units(GERMAN_SPOONS)),
    Modifier::new("gehäuftes", AppliesTo::Units(GERMAN_SPOONS)),
    Modifier::new("gestrichen", AppliesTo::Units(GERMAN_SPOONS)),
    Modifier::new("gestrichene", AppliesTo::Units(GERMAN_SPOONS)),
    Modifier::new("gestrichener", AppliesTo::Units(GERMAN_SPOONS)),
    Modifier::new("gestrichenes", AppliesTo::Units(GERMAN_SPOONS)),
    Modifier::new("gestr.", AppliesTo::Units(GERMAN_SPOONS)),
    Modifier::new("gestr", AppliesTo::Units(GERMAN_SPOONS)),
    Modifier::new("heaping", AppliesTo::Units(ENGLISH_SPOONS)),
    Modifier::new("heaped", AppliesTo::Units(ENGLISH_SPOONS)),
    Modifier::new("level", AppliesTo::Units(ENGLISH_SPOONS)),
    Modifier::new("rounded", AppliesTo::Units(ENGLISH_SPOONS)),
];

lazy_static! {
    static ref BUILTIN_TABLE: ModifierTable = ModifierTable::new(BUILTIN_MODIFIERS.to_vec());
}

/// Case-insensitive index of qualifier words
#[derive(Debug, Clone, Default)]
pub struct ModifierTable {
    modifiers: Vec<Modifier>,
    index: HashMap<String, usize>,
}

impl ModifierTable {
    /// Build a table; a later entry with an already registered surface is ignored
    pub fn new(modifiers: Vec<Modifier>) -> Self {
        let mut index = HashMap::new();
        for (i, modifier) in modifiers.iter().enumerate() {
            index.entry(modifier.surface.to_lowercase()).or_insert(i);
        }
        Self { modifiers, index }
    }

    /// A table that recognizes no modifiers
    pub fn empty() -> Self {
        Self::default()
    }

    /// The process-wide built-in table
    pub fn builtin() -> &'static ModifierTable {
        &BUILTIN_TABLE
    }

    pub fn get(&self, token: &str) -> Option<&Modifier> {
        self.index
            .get(&token.to_lowercase())
            .map(|&i| &self.modifiers[i])
    }

    pub fn is_modifier(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    /// Number of leading tokens that are modifiers
    pub fn leading_count(&self, tokens: &[Token<'_>]) -> usize {
        tokens
            .iter()
            .take_while(|token| self.is_modifier(token.text))
            .count()
    }

    /// Tokens with leading modifiers removed
    pub fn strip<'t, 'a>(&self, tokens: &'t [Token<'a>]) -> &'t [Token<'a>] {
        &tokens[self.leading_count(tokens)..]
    }

    /// Check that every modifier token in `tokens` may precede `unit`
    pub fn all_apply(&self, tokens: &[Token<'_>], unit: UnitId) -> bool {
        tokens
            .iter()
            .all(|token| self.get(token.text).is_some_and(|m| m.applies(unit)))
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit_matcher::tokenize;

    #[test]
    fn test_is_modifier() {
        let table = ModifierTable::builtin();
        assert!(table.is_modifier("gehäufte"));
        assert!(table.is_modifier("Gehäufter"));
        assert!(table.is_modifier("gestr."));
        assert!(table.is_modifier("gestr"));
        assert!(table.is_modifier("GESTRICHENE"));
        assert!(table.is_modifier("heaping"));
        assert!(!table.is_modifier("Esslöffel"));
        assert!(!table.is_modifier("water"));
    }

    #[test]
    fn test_strip_leading_modifiers() {
        let table = ModifierTable::builtin();
        let tokens = tokenize("gestr. gehäufter EL Zucker");
        let rest = table.strip(&tokens);
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0].text, "EL");

        let tokens = tokenize("EL gestr.");
        assert_eq!(table.strip(&tokens).len(), 2);

        let tokens = tokenize("");
        assert!(table.strip(&tokens).is_empty());
    }

    #[test]
    fn test_applies_to_units() {
        let table = ModifierTable::builtin();
        let gestr = table.get("gestr.").unwrap();
        assert!(gestr.applies(UnitId::Essloeffel));
        assert!(gestr.applies(UnitId::Teeloeffel));
        assert!(!gestr.applies(UnitId::Pfund));

        let heaping = table.get("heaping").unwrap();
        assert!(heaping.applies(UnitId::Cup));
        assert!(!heaping.applies(UnitId::Essloeffel));

        // French spoons take no qualifier
        for modifier in BUILTIN_MODIFIERS {
            assert!(!modifier.applies(UnitId::CuillereSoupe), "{}", modifier.surface);
            assert!(!modifier.applies(UnitId::CuillereCafe), "{}", modifier.surface);
        }

        assert!(Modifier::new("very", AppliesTo::Any).applies(UnitId::Gram));
    }

    #[test]
    fn test_all_apply() {
        let table = ModifierTable::builtin();
        let tokens = tokenize("gehäufte gestrichene");
        assert!(table.all_apply(&tokens, UnitId::Essloeffel));
        assert!(!table.all_apply(&tokens, UnitId::Tablespoon));
    }

    #[test]
    fn test_empty_table() {
        let table = ModifierTable::empty();
        assert!(table.is_empty());
        assert!(!table.is_modifier("gestr."));
    }
}
