//! # Unit Alias Table
//!
//! This module holds the registry of every recognized surface form of a unit
//! (words, abbreviations, with or without trailing period, multi-word phrases)
//! and maps it to a canonical [`UnitId`] and a [`Language`].
//!
//! ## Lookup rules
//!
//! - Keys compare with internal whitespace collapsed to a single space
//! - Matching is case-insensitive, except for aliases flagged case-sensitive
//!   ("t" is teaspoon, "T" is tablespoon). Case-sensitive aliases are checked first
//! - A key registered under several languages resolves to the entry of the
//!   hinted language, otherwise to the entry registered first
//!
//! The built-in table is constructed once and shared read-only.

use crate::errors::{ParseError, Result};
use crate::ingredient_model::{Language, UnitId};
use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::debug;

/// Longest phrase, in words, an alias may span
pub const MAX_PHRASE_WORDS: usize = 3;

/// A registered surface form of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitAlias {
    /// Text as it appears in recipes (e.g., "fl. oz.", "Esslöffel")
    pub surface: &'static str,
    /// Canonical unit this form denotes
    pub unit: UnitId,
    /// Vocabulary the form belongs to
    pub language: Language,
    /// Whether the form only matches with its exact casing
    pub case_sensitive: bool,
}

impl UnitAlias {
    pub const fn new(surface: &'static str, unit: UnitId, language: Language) -> Self {
        Self {
            surface,
            unit,
            language,
            case_sensitive: false,
        }
    }

    pub const fn case_sensitive(surface: &'static str, unit: UnitId, language: Language) -> Self {
        Self {
            surface,
            unit,
            language,
            case_sensitive: true,
        }
    }

    /// Number of whitespace-separated words in the surface form
    pub fn word_count(&self) -> usize {
        self.surface.split_whitespace().count()
    }

    /// Normalized lookup key
    pub fn key(&self) -> String {
        normalize_key(self.surface, self.case_sensitive)
    }
}

/// Collapse whitespace runs and, unless `case_sensitive`, lowercase the text
pub fn normalize_key(span: &str, case_sensitive: bool) -> String {
    let collapsed = span.split_whitespace().collect::<Vec<_>>().join(" ");
    if case_sensitive {
        collapsed
    } else {
        collapsed.to_lowercase()
    }
}

use Language::{De, En, Fr};
use UnitId::*;

const fn a(surface: &'static str, unit: UnitId, language: Language) -> UnitAlias {
    UnitAlias::new(surface, unit, language)
}

const fn cs(surface: &'static str, unit: UnitId, language: Language) -> UnitAlias {
    UnitAlias::case_sensitive(surface, unit, language)
}

/// Built-in vocabulary. English entries come first so they win shared keys
/// when no language hint is given.
pub static BUILTIN_ALIASES: &[UnitAlias] = &[
    // English
    a("cups", Cup, En),
    a("cup", Cup, En),
    a("c.", Cup, En),
    a("c", Cup, En),
    a("fluid ounces", FluidOunce, En),
    a("fluid ounce", FluidOunce, En),
    a("fluid oz.", FluidOunce, En),
    a("fluid oz", FluidOunce, En),
    a("fl. oz.", FluidOunce, En),
    a("fl oz.", FluidOunce, En),
    a("fl. oz", FluidOunce, En),
    a("fl oz", FluidOunce, En),
    a("fl ounces", FluidOunce, En),
    a("fl ounce", FluidOunce, En),
    a("fl. ounces", FluidOunce, En),
    a("fl. ounce", FluidOunce, En),
    a("gallons", Gallon, En),
    a("gallon", Gallon, En),
    a("gal.", Gallon, En),
    a("gal", Gallon, En),
    a("ounces", Ounce, En),
    a("ounce", Ounce, En),
    a("oz.", Ounce, En),
    a("oz", Ounce, En),
    a("pints", Pint, En),
    a("pint", Pint, En),
    a("pt.", Pint, En),
    a("pt", Pint, En),
    a("pounds", Pound, En),
    a("pound", Pound, En),
    a("lbs.", Pound, En),
    a("lbs", Pound, En),
    a("lb.", Pound, En),
    a("lb", Pound, En),
    a("quarts", Quart, En),
    a("quart", Quart, En),
    a("qts.", Quart, En),
    a("qts", Quart, En),
    a("qt.", Quart, En),
    a("qt", Quart, En),
    a("tablespoons", Tablespoon, En),
    a("tablespoon", Tablespoon, En),
    a("tbsp.", Tablespoon, En),
    a("tbsp", Tablespoon, En),
    a("tbs.", Tablespoon, En),
    a("tbs", Tablespoon, En),
    cs("T.", Tablespoon, En),
    cs("T", Tablespoon, En),
    a("teaspoons", Teaspoon, En),
    a("teaspoon", Teaspoon, En),
    a("tsp.", Teaspoon, En),
    a("tsp", Teaspoon, En),
    cs("t.", Teaspoon, En),
    cs("t", Teaspoon, En),
    a("dashes", Dash, En),
    a("dash", Dash, En),
    a("handfuls", Handful, En),
    a("handful", Handful, En),
    a("pinches", Pinch, En),
    a("pinch", Pinch, En),
    a("touches", Touch, En),
    a("touch", Touch, En),
    // Metric
    a("grams", Gram, En),
    a("gram", Gram, En),
    a("gr.", Gram, En),
    a("gr", Gram, En),
    a("g.", Gram, En),
    a("g", Gram, En),
    a("kilograms", Kilogram, En),
    a("kilogram", Kilogram, En),
    a("kg.", Kilogram, En),
    a("kg", Kilogram, En),
    a("liters", Liter, En),
    a("liter", Liter, En),
    a("litres", Liter, En),
    a("litre", Liter, En),
    a("l.", Liter, En),
    a("l", Liter, En),
    a("milligrams", Milligram, En),
    a("milligram", Milligram, En),
    a("mg.", Milligram, En),
    a("mg", Milligram, En),
    a("milliliters", Milliliter, En),
    a("milliliter", Milliliter, En),
    a("millilitres", Milliliter, En),
    a("millilitre", Milliliter, En),
    a("ml.", Milliliter, En),
    a("ml", Milliliter, En),
    // German
    a("Tassen", Tasse, De),
    a("Tasse", Tasse, De),
    cs("T.", Tasse, De),
    cs("T", Tasse, De),
    a("Esslöffel", Essloeffel, De),
    a("Eßlöffel", Essloeffel, De),
    a("EL.", Essloeffel, De),
    a("EL", Essloeffel, De),
    a("Teelöffel", Teeloeffel, De),
    a("TL.", Teeloeffel, De),
    a("TL", Teeloeffel, De),
    a("Pfunde", Pfund, De),
    a("Pfund", Pfund, De),
    a("Messerspitzen", Messerspitze, De),
    a("Messerspitze", Messerspitze, De),
    a("Msp.", Messerspitze, De),
    a("Msp", Messerspitze, De),
    a("Prisen", Prise, De),
    a("Prise", Prise, De),
    a("Pr.", Prise, De),
    a("Pr", Prise, De),
    a("etwas", Etwas, De),
    a("Schuss", Schuss, De),
    a("Tropfen", Tropfen, De),
    a("Spritzer", Spritzer, De),
    // French
    a("pointes de couteau", PointeCouteau, Fr),
    a("pointe de couteau", PointeCouteau, Fr),
    a("pc", PointeCouteau, Fr),
    a("cuillères à café", CuillereCafe, Fr),
    a("cuillère à café", CuillereCafe, Fr),
    a("cuilleres a cafe", CuillereCafe, Fr),
    a("cuillere a cafe", CuillereCafe, Fr),
    a("c.c.", CuillereCafe, Fr),
    a("cc", CuillereCafe, Fr),
    a("càc", CuillereCafe, Fr),
    a("cuillères à soupe", CuillereSoupe, Fr),
    a("cuillère à soupe", CuillereSoupe, Fr),
    a("cuilleres a soupe", CuillereSoupe, Fr),
    a("cuillere a soupe", CuillereSoupe, Fr),
    a("c.s.", CuillereSoupe, Fr),
    a("cs", CuillereSoupe, Fr),
    a("càs", CuillereSoupe, Fr),
];

lazy_static! {
    static ref BUILTIN_TABLE: AliasTable = AliasTable::new(BUILTIN_ALIASES.to_vec())
        .expect("Built-in unit alias table should be valid");
}

/// Validated, indexed set of aliases
#[derive(Debug, Clone)]
pub struct AliasTable {
    aliases: Vec<UnitAlias>,
    /// Case-sensitive aliases keyed by their exact collapsed surface
    exact: HashMap<String, Vec<usize>>,
    /// Case-insensitive aliases keyed by their lowercased surface
    folded: HashMap<String, Vec<usize>>,
    max_word_count: usize,
}

impl AliasTable {
    /// Build and validate a table
    ///
    /// Fails with [`ParseError::AmbiguousAlias`] when two aliases share a key and a
    /// language but name different units, and with [`ParseError::Config`] when an
    /// alias is empty or spans more than [`MAX_PHRASE_WORDS`] words.
    pub fn new(aliases: Vec<UnitAlias>) -> Result<Self> {
        let mut exact: HashMap<String, Vec<usize>> = HashMap::new();
        let mut folded: HashMap<String, Vec<usize>> = HashMap::new();
        let mut max_word_count = 0;

        for (index, alias) in aliases.iter().enumerate() {
            let words = alias.word_count();
            if words == 0 {
                return Err(ParseError::Config(format!(
                    "alias #{index} for {} is empty",
                    alias.unit.as_str()
                )));
            }
            if words > MAX_PHRASE_WORDS {
                return Err(ParseError::Config(format!(
                    "alias '{}' spans {words} words (max {MAX_PHRASE_WORDS})",
                    alias.surface
                )));
            }
            max_word_count = max_word_count.max(words);

            let key = alias.key();
            let index_map = if alias.case_sensitive {
                // An exact-case form must agree with any case-insensitive form it folds onto
                if let Some(ids) = folded.get(&key.to_lowercase()) {
                    check_conflict(&aliases, ids, alias, &key)?;
                }
                &mut exact
            } else {
                for (exact_key, ids) in &exact {
                    if exact_key.to_lowercase() == key {
                        check_conflict(&aliases, ids, alias, &key)?;
                    }
                }
                &mut folded
            };

            let ids = index_map.entry(key.clone()).or_default();
            check_conflict(&aliases, ids.as_slice(), alias, &key)?;
            if ids
                .iter()
                .any(|&i| aliases[i].language == alias.language)
            {
                debug!(key = %key, unit = alias.unit.as_str(), "Skipping duplicate alias");
                continue;
            }
            ids.push(index);
        }

        debug!(
            aliases = aliases.len(),
            max_word_count, "Built unit alias table"
        );

        Ok(Self {
            aliases,
            exact,
            folded,
            max_word_count,
        })
    }

    /// The process-wide built-in table
    pub fn builtin() -> &'static AliasTable {
        &BUILTIN_TABLE
    }

    /// Look up a token span, returning the alias it denotes
    ///
    /// `span` may contain several words; whitespace runs compare as one space.
    pub fn lookup(&self, span: &str, hint: Option<Language>) -> Option<&UnitAlias> {
        let collapsed = normalize_key(span, true);
        if collapsed.is_empty() {
            return None;
        }

        if let Some(ids) = self.exact.get(&collapsed) {
            return Some(self.pick(ids, hint));
        }

        self.folded
            .get(&collapsed.to_lowercase())
            .map(|ids| self.pick(ids, hint))
    }

    /// Look up a span and return only its unit
    pub fn lookup_unit(&self, span: &str, hint: Option<Language>) -> Option<UnitId> {
        self.lookup(span, hint).map(|alias| alias.unit)
    }

    /// Longest registered phrase, in words
    pub fn max_word_count(&self) -> usize {
        self.max_word_count
    }

    /// All registered aliases, in registration order
    pub fn aliases(&self) -> &[UnitAlias] {
        &self.aliases
    }

    /// Aliases registered for one unit
    pub fn aliases_for(&self, unit: UnitId) -> impl Iterator<Item = &UnitAlias> {
        self.aliases.iter().filter(move |alias| alias.unit == unit)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    fn pick(&self, ids: &[usize], hint: Option<Language>) -> &UnitAlias {
        // Index lists are never empty: entries are created together with their first id
        let preferred = hint.and_then(|language| {
            ids.iter()
                .map(|&i| &self.aliases[i])
                .find(|alias| alias.language == language)
        });
        preferred.unwrap_or(&self.aliases[ids[0]])
    }
}

fn check_conflict(aliases: &[UnitAlias], ids: &[usize], alias: &UnitAlias, key: &str) -> Result<()> {
    for &i in ids {
        let existing = &aliases[i];
        if existing.language == alias.language && existing.unit != alias.unit {
            return Err(ParseError::AmbiguousAlias {
                key: key.to_string(),
                language: alias.language,
                first: existing.unit,
                second: alias.unit,
            });
        }
    }
    Ok(())
}
