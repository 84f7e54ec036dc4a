//! # Unit Resolver
//!
//! Orchestrates unit recognition for one ingredient line: skip an optional
//! leading quantity, skip optional modifiers, try alias phrases longest first, and
//! report either the unit and the remaining text, or no unit.
//!
//! Both outcomes are successful: "2 coconuts" simply has no unit.
//!
//! ```rust
//! use ingredient_units::ingredient_model::UnitId;
//! use ingredient_units::unit_resolver::UnitResolver;
//!
//! let resolver = UnitResolver::new();
//!
//! let resolved = resolver.resolve("2 gestr. EL water");
//! assert_eq!(resolved.unit, Some(UnitId::Essloeffel));
//! assert_eq!(resolved.remainder, "water");
//!
//! let resolved = resolver.resolve("2 coconuts");
//! assert_eq!(resolved.unit, None);
//! assert_eq!(resolved.remainder, "2 coconuts");
//! ```

use crate::ingredient_model::{Language, UnitId};
use crate::modifiers::ModifierTable;
use crate::quantity::extract_quantity;
use crate::unit_aliases::AliasTable;
use crate::unit_matcher::{find_unit_span, UnitMatch};
use tracing::debug;

/// Outcome of resolving the unit of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitResolution<'a> {
    /// Recognized unit, `None` when the text carries no unit word
    pub unit: Option<UnitId>,
    /// Surface form that matched
    pub alias: Option<&'static str>,
    /// Text after the unit, trimmed; the whole input when no unit was found
    pub remainder: &'a str,
}

impl<'a> UnitResolution<'a> {
    fn matched(found: UnitMatch, remainder: &'a str) -> Self {
        Self {
            unit: Some(found.unit),
            alias: Some(found.alias),
            remainder: remainder.trim(),
        }
    }

    fn unmatched(text: &'a str) -> Self {
        Self {
            unit: None,
            alias: None,
            remainder: text.trim(),
        }
    }
}

/// Resolves units against an alias table and a modifier table
#[derive(Debug, Clone, Copy)]
pub struct UnitResolver<'t> {
    aliases: &'t AliasTable,
    modifiers: &'t ModifierTable,
    language: Option<Language>,
}

impl UnitResolver<'static> {
    /// Create a resolver over the built-in tables with no language preference
    pub fn new() -> Self {
        Self::with_tables(AliasTable::builtin(), ModifierTable::builtin())
    }
}

impl Default for UnitResolver<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> UnitResolver<'t> {
    /// Create a resolver over custom tables
    pub fn with_tables(aliases: &'t AliasTable, modifiers: &'t ModifierTable) -> Self {
        Self {
            aliases,
            modifiers,
            language: None,
        }
    }

    /// Prefer `language` for aliases registered in several languages
    pub fn with_language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn aliases(&self) -> &'t AliasTable {
        self.aliases
    }

    /// Find the unit span at the start of `text` without computing a remainder
    pub fn find_unit_span(&self, text: &str) -> Option<UnitMatch> {
        find_unit_span(text, self.aliases, self.modifiers, self.language)
    }

    /// Resolve the unit of a text whose quantity was already consumed
    ///
    /// On a match the remainder is the text after the unit; otherwise it is the
    /// whole input, trimmed.
    pub fn resolve_unit<'a>(&self, input_after_quantity: &'a str) -> UnitResolution<'a> {
        match self.find_unit_span(input_after_quantity) {
            Some(found) => {
                UnitResolution::matched(found, &input_after_quantity[found.consumed..])
            }
            None => {
                debug!(text = input_after_quantity, "No unit found");
                UnitResolution::unmatched(input_after_quantity)
            }
        }
    }

    /// Resolve the unit of a full ingredient line, skipping a leading quantity
    ///
    /// When no unit is found the remainder is the whole line, quantity included,
    /// so that quantity and ingredient extraction can see it unchanged.
    pub fn resolve<'a>(&self, text: &'a str) -> UnitResolution<'a> {
        let after_quantity = match extract_quantity(text) {
            Some(quantity) => &text[quantity.consumed..],
            None => text,
        };

        match self.find_unit_span(after_quantity) {
            Some(found) => UnitResolution::matched(found, &after_quantity[found.consumed..]),
            None => {
                debug!(text, "No unit found");
                UnitResolution::unmatched(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str) -> UnitResolution<'_> {
        UnitResolver::new().resolve(text)
    }

    #[test]
    fn test_cups_flour() {
        let resolved = resolve("2 cups flour");
        assert_eq!(resolved.unit, Some(UnitId::Cup));
        assert_eq!(resolved.alias, Some("cups"));
        assert_eq!(resolved.remainder, "flour");
    }

    #[test]
    fn test_nothing_follows_the_unit() {
        let resolved = resolve("1 lb");
        assert_eq!(resolved.unit, Some(UnitId::Pound));
        assert_eq!(resolved.remainder, "");
    }

    #[test]
    fn test_unit_without_quantity() {
        let resolved = resolve("etwas Zucker");
        assert_eq!(resolved.unit, Some(UnitId::Etwas));
        assert_eq!(resolved.remainder, "Zucker");
    }

    #[test]
    fn test_modifier_and_abbreviation() {
        let resolved = resolve("2 gestr. EL water");
        assert_eq!(resolved.unit, Some(UnitId::Essloeffel));
        assert_eq!(resolved.remainder, "water");
    }

    #[test]
    fn test_three_word_phrase_at_end() {
        let resolved = resolve("2 pointe de couteau");
        assert_eq!(resolved.unit, Some(UnitId::PointeCouteau));
        assert_eq!(resolved.remainder, "");
    }

    #[test]
    fn test_no_unit_leaves_text_unchanged() {
        let resolved = resolve("2 coconuts");
        assert_eq!(resolved.unit, None);
        assert_eq!(resolved.alias, None);
        assert_eq!(resolved.remainder, "2 coconuts");

        let resolved = resolve("2 cupcakes");
        assert_eq!(resolved.unit, None);
        assert_eq!(resolved.remainder, "2 cupcakes");
    }

    #[test]
    fn test_resolve_unit_after_quantity() {
        let resolver = UnitResolver::new();
        let resolved = resolver.resolve_unit(" gehäufter Esslöffel water ");
        assert_eq!(resolved.unit, Some(UnitId::Essloeffel));
        assert_eq!(resolved.remainder, "water");

        let resolved = resolver.resolve_unit(" coconuts ");
        assert_eq!(resolved.unit, None);
        assert_eq!(resolved.remainder, "coconuts");
    }

    #[test]
    fn test_unit_glued_to_quantity() {
        let resolved = resolve("500g butter");
        assert_eq!(resolved.unit, Some(UnitId::Gram));
        assert_eq!(resolved.remainder, "butter");
    }

    #[test]
    fn test_remainder_is_plain_text() {
        let resolver = UnitResolver::new();
        let first = resolver.resolve("2 cups flour");
        let again = resolver.resolve_unit(first.remainder);
        assert_eq!(again.unit, None);
        assert_eq!(again.remainder, "flour");

        // Ingredient text that independently starts with an alias is still found
        let first = resolver.resolve("1 dash pinch salt");
        assert_eq!(first.unit, Some(UnitId::Dash));
        assert_eq!(resolver.resolve_unit(first.remainder).unit, Some(UnitId::Pinch));
    }

    #[test]
    fn test_language_preference() {
        let german = UnitResolver::new().with_language(Some(Language::De));
        assert_eq!(german.language(), Some(Language::De));
        assert_eq!(german.resolve("2 T flour").unit, Some(UnitId::Tasse));
        assert_eq!(german.resolve("2 T. flour").unit, Some(UnitId::Tasse));
        assert_eq!(german.resolve("2 Tassen flour").unit, Some(UnitId::Tasse));

        let neutral = UnitResolver::new();
        assert_eq!(neutral.resolve("2 T flour").unit, Some(UnitId::Tablespoon));
    }
}
