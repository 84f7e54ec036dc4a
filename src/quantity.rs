//! # Quantity Extraction
//!
//! This module contains the regex patterns used to read the numeric prefix of an
//! ingredient line: whole numbers, decimals, fractions, unicode vulgar fractions,
//! and ranges. The unit resolver runs on whatever text follows.

use crate::ingredient_model::Quantity;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

/// One amount: mixed fraction, fraction, vulgar fraction, or decimal (comma or point)
const NUMBER_PATTERN: &str =
    r"[0-9]+\s+[0-9]+[/⁄][0-9]+|[0-9]+[/⁄][0-9]+|[0-9]+\s+[½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞]|[0-9]*[½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞]|[0-9]+(?:[.,][0-9]+)?";

lazy_static! {
    static ref QUANTITY_REGEX: Regex = Regex::new(&format!(
        r"^\s*(?P<first>{NUMBER_PATTERN})(?:\s*(?:-|–|—|to|bis|à)\s*(?P<second>{NUMBER_PATTERN}))?"
    ))
    .expect("Quantity pattern should be valid");
    static ref FRACTION_REGEX: Regex =
        Regex::new(r"^(?:([0-9]+)\s+)?([0-9]+)[/⁄]([0-9]+)$").expect("Fraction pattern should be valid");
}

/// A quantity read from the start of a text
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityMatch {
    pub quantity: Quantity,
    /// Bytes consumed from the start of the text, including leading whitespace
    pub consumed: usize,
}

/// Read a quantity from the start of `text`
///
/// Returns `None` when the text does not start with a number, or when the number
/// is unusable (zero denominator, overflow).
pub fn extract_quantity(text: &str) -> Option<QuantityMatch> {
    let captures = QUANTITY_REGEX.captures(text)?;
    let whole = captures.get(0)?;
    let first = parse_amount(captures.name("first")?.as_str())?;

    let quantity = match captures.name("second") {
        Some(second) => {
            let second = parse_amount(second.as_str())?;
            Quantity::range(first.estimated_value(), second.estimated_value())
        }
        None => first,
    };

    trace!(text = whole.as_str(), "Extracted quantity");
    Some(QuantityMatch {
        quantity,
        consumed: whole.end(),
    })
}

fn parse_amount(amount: &str) -> Option<Quantity> {
    if let Some(captures) = FRACTION_REGEX.captures(amount) {
        let whole = match captures.get(1) {
            Some(m) => Some(m.as_str().parse::<u32>().ok()?),
            None => None,
        };
        let numerator: u32 = captures[2].parse().ok()?;
        let denominator: u32 = captures[3].parse().ok()?;
        if denominator == 0 {
            debug!(amount, "Ignoring fraction with zero denominator");
            return None;
        }
        return Some(Quantity::fraction(whole, numerator, denominator));
    }

    if let Some(last) = amount.chars().last() {
        if let Some((numerator, denominator)) = vulgar_fraction(last) {
            let digits = amount[..amount.len() - last.len_utf8()].trim();
            let whole = if digits.is_empty() {
                None
            } else {
                Some(digits.parse::<u32>().ok()?)
            };
            return Some(Quantity::fraction(whole, numerator, denominator));
        }
    }

    amount.replace(',', ".").parse::<f64>().ok().map(Quantity::exact)
}

fn vulgar_fraction(c: char) -> Option<(u32, u32)> {
    let fraction = match c {
        '½' => (1, 2),
        '⅓' => (1, 3),
        '⅔' => (2, 3),
        '¼' => (1, 4),
        '¾' => (3, 4),
        '⅕' => (1, 5),
        '⅖' => (2, 5),
        '⅗' => (3, 5),
        '⅘' => (4, 5),
        '⅙' => (1, 6),
        '⅚' => (5, 6),
        '⅛' => (1, 8),
        '⅜' => (3, 8),
        '⅝' => (5, 8),
        '⅞' => (7, 8),
        _ => return None,
    };
    Some(fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantity(text: &str) -> Option<Quantity> {
        extract_quantity(text).map(|m| m.quantity)
    }

    #[test]
    fn test_exact_amounts() {
        assert_eq!(quantity("2 cups flour"), Some(Quantity::exact(2.0)));
        assert_eq!(quantity("1.5 kg"), Some(Quantity::exact(1.5)));
        assert_eq!(quantity("1,5 kg"), Some(Quantity::exact(1.5)));
    }

    #[test]
    fn test_fractions() {
        assert_eq!(quantity("1/2 cup"), Some(Quantity::fraction(None, 1, 2)));
        assert_eq!(
            quantity("2 1/4 cups butter"),
            Some(Quantity::fraction(Some(2), 1, 4))
        );
        assert_eq!(quantity("½ TL"), Some(Quantity::fraction(None, 1, 2)));
        assert_eq!(quantity("1½ cups"), Some(Quantity::fraction(Some(1), 1, 2)));
        assert_eq!(quantity("1 ½ cups"), Some(Quantity::fraction(Some(1), 1, 2)));
        assert_eq!(quantity("2 ¾ TL"), Some(Quantity::fraction(Some(2), 3, 4)));
    }

    #[test]
    fn test_ranges() {
        assert_eq!(quantity("2-3 tbsp"), Some(Quantity::range(2.0, 3.0)));
        assert_eq!(quantity("2 – 3 EL"), Some(Quantity::range(2.0, 3.0)));
        assert_eq!(quantity("1 to 2 cups"), Some(Quantity::range(1.0, 2.0)));
        assert_eq!(quantity("2 bis 3 Prisen"), Some(Quantity::range(2.0, 3.0)));
        assert_eq!(quantity("1/2-1 cup"), Some(Quantity::range(0.5, 1.0)));
    }

    #[test]
    fn test_consumed_length() {
        let m = extract_quantity("  2 cups").unwrap();
        assert_eq!(m.consumed, 3);

        let m = extract_quantity("500g butter").unwrap();
        assert_eq!(m.consumed, 3);
        assert_eq!(&"500g butter"[m.consumed..], "g butter");

        // "to" only separates a range when a number follows
        let m = extract_quantity("2 tomatoes").unwrap();
        assert_eq!(m.consumed, 1);

        let m = extract_quantity("1 ½ cups milk").unwrap();
        assert_eq!(&"1 ½ cups milk"[m.consumed..], " cups milk");
    }

    #[test]
    fn test_no_quantity() {
        assert_eq!(quantity("etwas Zucker"), None);
        assert_eq!(quantity("coconuts"), None);
        assert_eq!(quantity(""), None);
    }

    #[test]
    fn test_zero_denominator_is_ignored() {
        assert_eq!(quantity("1/0 cup"), None);
    }
}
