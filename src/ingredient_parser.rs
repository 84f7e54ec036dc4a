//! # Ingredient Parser
//!
//! This module parses free-text ingredient lines into a [`ParseResult`]: the
//! quantity, the canonical unit, and the ingredient name. It ties together the
//! quantity extractor, the unit resolver, and ingredient name cleanup.
//!
//! ## Features
//!
//! - Parse lines in English, German, and French ("2 cups flour", "etwas Zucker",
//!   "1 cuillère à soupe d'huile")
//! - Handle fractions (1/2, 2 1/4, ½) and ranges (2-3, 1 to 2)
//! - Skip heaped/level modifiers ("1 gehäufter Teelöffel")
//! - Report a missing unit as `unit: None`, never as an error
//!
//! ## Usage
//!
//! ```rust
//! use ingredient_units::ingredient_model::UnitId;
//! use ingredient_units::ingredient_parser::parse;
//!
//! let result = parse("2 cups flour")?;
//! assert_eq!(result.unit, Some(UnitId::Cup));
//! assert_eq!(result.ingredient, "flour");
//!
//! let result = parse("2 coconuts")?;
//! assert_eq!(result.unit, None);
//! assert_eq!(result.ingredient, "coconuts");
//! # Ok::<(), ingredient_units::errors::ParseError>(())
//! ```

use crate::config::ParserConfig;
use crate::errors::{ParseError, Result};
use crate::ingredient_model::{IngredientList, ParseResult};
use crate::ingredient_name::clean_ingredient_name;
use crate::quantity::extract_quantity;
use crate::unit_resolver::UnitResolver;
use lazy_static::lazy_static;
use tracing::{debug, info, trace, warn};

lazy_static! {
    static ref DEFAULT_PARSER: IngredientParser<'static> = IngredientParser::new();
}

/// Parser for ingredient lines
#[derive(Debug, Clone)]
pub struct IngredientParser<'t> {
    resolver: UnitResolver<'t>,
    config: ParserConfig,
}

impl IngredientParser<'static> {
    /// Create a parser over the built-in tables with the default configuration
    pub fn new() -> Self {
        Self {
            resolver: UnitResolver::new(),
            config: ParserConfig::default(),
        }
    }

    /// Create a parser over the built-in tables with a custom configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ingredient_units::config::ParserConfig;
    /// use ingredient_units::ingredient_model::{Language, UnitId};
    /// use ingredient_units::ingredient_parser::IngredientParser;
    ///
    /// let config = ParserConfig {
    ///     language: Some(Language::De),
    ///     ..Default::default()
    /// };
    /// let parser = IngredientParser::with_config(config)?;
    /// assert_eq!(parser.parse("2 T Mehl")?.unit, Some(UnitId::Tasse));
    /// # Ok::<(), ingredient_units::errors::ParseError>(())
    /// ```
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        Self::with_resolver(UnitResolver::new(), config)
    }
}

impl Default for IngredientParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> IngredientParser<'t> {
    /// Create a parser over a custom resolver
    ///
    /// The configured language overrides the resolver's when set.
    pub fn with_resolver(resolver: UnitResolver<'t>, config: ParserConfig) -> Result<Self> {
        config.validate()?;
        let resolver = match config.language {
            Some(language) => resolver.with_language(Some(language)),
            None => resolver,
        };
        debug!(
            language = ?resolver.language(),
            postprocessing = config.enable_ingredient_postprocessing,
            "Creating IngredientParser"
        );
        Ok(Self { resolver, config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn resolver(&self) -> &UnitResolver<'t> {
        &self.resolver
    }

    /// Parse a single ingredient line
    ///
    /// Fails only with [`ParseError::InvalidInput`]; a line without a unit parses
    /// with `unit: None` and everything after the quantity as ingredient.
    pub fn parse(&self, text: &str) -> Result<ParseResult> {
        self.validate_input(text)?;
        let text = self.truncate_input(text);
        trace!(text, "Parsing ingredient line");

        let quantity = extract_quantity(text);
        let after_quantity = match &quantity {
            Some(found) => &text[found.consumed..],
            None => text,
        };

        let resolution = self.resolver.resolve_unit(after_quantity);
        let ingredient = clean_ingredient_name(resolution.remainder, &self.config);

        let result = ParseResult {
            quantity: quantity.map(|found| found.quantity),
            unit: resolution.unit,
            ingredient,
        };
        debug!(
            unit = result.unit.map(|unit| unit.as_str()),
            ingredient = %result.ingredient,
            "Parsed ingredient line"
        );
        Ok(result)
    }

    /// Parse raw bytes, rejecting anything that is not UTF-8 text
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<ParseResult> {
        let text = std::str::from_utf8(bytes)?;
        self.parse(text)
    }

    /// Parse every non-empty line of a multi-line ingredient list
    pub fn parse_list(&self, text: &str) -> IngredientList {
        let mut list = IngredientList::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.parse(line) {
                Ok(ingredient) => list.ingredients.push(ingredient),
                Err(err) => {
                    warn!(error = %err, line, "Skipping unparseable line");
                    list.unparsed_lines.push(line.to_string());
                }
            }
        }

        info!(
            parsed = list.parsed_count(),
            unparsed = list.unparsed_count(),
            "Parsed ingredient list"
        );
        list
    }

    /// Cut input longer than `max_input_length` bytes at the last word boundary
    fn truncate_input<'a>(&self, text: &'a str) -> &'a str {
        let limit = self.config.max_input_length;
        if text.len() <= limit {
            return text;
        }

        let mut end = limit;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let cut = match text[..end].rfind(char::is_whitespace) {
            Some(space) if space > 0 => &text[..space],
            _ => &text[..end],
        };
        warn!(
            length = text.len(),
            limit,
            kept = cut.len(),
            "Input exceeds max_input_length, truncating"
        );
        cut
    }

    fn validate_input(&self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(ParseError::InvalidInput("input is empty".to_string()));
        }
        if let Some(c) = text.chars().find(|&c| c.is_control() && !c.is_whitespace()) {
            return Err(ParseError::InvalidInput(format!(
                "input contains control character {:?}",
                c
            )));
        }
        Ok(())
    }
}

/// Parse a single ingredient line with the default parser
pub fn parse(text: &str) -> Result<ParseResult> {
    DEFAULT_PARSER.parse(text)
}

/// Parse raw bytes with the default parser
pub fn parse_bytes(bytes: &[u8]) -> Result<ParseResult> {
    DEFAULT_PARSER.parse_bytes(bytes)
}

/// Parse a full ingredient list with the default parser
pub fn parse_ingredient_list(text: &str) -> IngredientList {
    DEFAULT_PARSER.parse_list(text)
}
