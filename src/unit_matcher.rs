//! # Tokenizer and Boundary Matcher
//!
//! Splits text on whitespace while keeping byte offsets into the original input,
//! and finds the longest alias phrase at the start of the text.
//!
//! Matching is done on whole tokens only, so a unit word is accepted only when it
//! is bounded by the start of the text or whitespace before, and by whitespace,
//! closing punctuation, or the end of the text after. "cup" never matches inside
//! "cupcakes".

use crate::ingredient_model::{Language, UnitId};
use crate::modifiers::ModifierTable;
use crate::unit_aliases::AliasTable;
use tracing::{debug, trace};

/// A whitespace-delimited word with its byte range in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Start byte index (inclusive)
    pub start: usize,
    /// End byte index (exclusive)
    pub end: usize,
}

impl<'a> Token<'a> {
    fn new(source: &'a str, start: usize, end: usize) -> Self {
        Self {
            text: &source[start..end],
            start,
            end,
        }
    }
}

/// A unit found at the start of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitMatch {
    /// Canonical unit
    pub unit: UnitId,
    /// Registered surface form that matched
    pub alias: &'static str,
    /// Number of modifier tokens consumed before the unit
    pub modifiers: usize,
    /// Byte offset where the unit phrase begins
    pub unit_start: usize,
    /// Bytes consumed from the start of the text (whitespace, modifiers, unit)
    pub consumed: usize,
}

/// Split text into whitespace-delimited tokens
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(Token::new(text, s, i));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(Token::new(text, s, text.len()));
    }

    tokens
}

/// Punctuation that may close a unit token ("2 cups, sifted")
fn is_closing_punctuation(c: char) -> bool {
    matches!(c, ',' | ';' | ':' | '!' | '?' | ')' | ']')
}

/// Find the unit at the start of `text`
///
/// Leading modifiers are skipped when the unit that follows accepts them. Phrases
/// are tried longest first, from the table's longest alias down to one word.
pub fn find_unit_span(
    text: &str,
    aliases: &AliasTable,
    modifiers: &ModifierTable,
    hint: Option<Language>,
) -> Option<UnitMatch> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return None;
    }

    let skipped = modifiers.leading_count(&tokens);
    if skipped > 0 {
        trace!(skipped, "Skipping leading modifiers");
        if let Some(found) = match_phrase(text, &tokens[skipped..], aliases, hint) {
            if modifiers.all_apply(&tokens[..skipped], found.unit) {
                return Some(UnitMatch {
                    modifiers: skipped,
                    ..found
                });
            }
            debug!(
                unit = found.unit.as_str(),
                "Modifier does not apply to unit, retrying without modifiers"
            );
        }
    }

    match_phrase(text, &tokens, aliases, hint)
}

/// Try the longest alias phrase starting at the first token
fn match_phrase(
    text: &str,
    tokens: &[Token<'_>],
    aliases: &AliasTable,
    hint: Option<Language>,
) -> Option<UnitMatch> {
    let longest = aliases.max_word_count().min(tokens.len());

    for words in (1..=longest).rev() {
        let first = tokens[0];
        let last = tokens[words - 1];
        let span = &text[first.start..last.end];
        trace!(words, span, "Trying alias phrase");

        let without_closing = span.trim_end_matches(is_closing_punctuation);
        let without_period = without_closing.trim_end_matches('.');
        let last_word_start = last.start - first.start;

        let candidates = [span, without_closing, without_period];
        for (i, candidate) in candidates.iter().enumerate() {
            // Skip repeats and candidates that ate the whole last word
            if i > 0 && (candidate.len() == candidates[i - 1].len() || candidate.len() <= last_word_start) {
                continue;
            }
            if let Some(alias) = aliases.lookup(candidate, hint) {
                debug!(
                    alias = alias.surface,
                    unit = alias.unit.as_str(),
                    words,
                    "Matched unit alias"
                );
                return Some(UnitMatch {
                    unit: alias.unit,
                    alias: alias.surface,
                    modifiers: 0,
                    unit_start: first.start,
                    consumed: last.end,
                });
            }
        }
    }

    None
}
