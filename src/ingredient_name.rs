//! # Ingredient Name Cleanup
//!
//! Turns the text left after quantity and unit into an ingredient name: trims
//! punctuation, drops one leading article or preposition ("of", "de", "d'"),
//! collapses whitespace, and truncates overly long names at a word boundary.

use crate::config::ParserConfig;
use tracing::{debug, trace, warn};

/// Articles and prepositions removed from the start of a name (English, French, German)
const PREFIXES_TO_REMOVE: &[&str] = &[
    // English
    "of ", "the ", "a ", "an ", // French
    "de ", "d'", "d’", "du ", "des ", "la ", "le ", "les ", "l'", "l’", // German
    "der ", "die ", "das ",
];

/// Clean a raw remainder into an ingredient name
pub fn clean_ingredient_name(raw_name: &str, config: &ParserConfig) -> String {
    if !config.enable_ingredient_postprocessing || raw_name.trim().is_empty() {
        trace!("Post-processing disabled or empty name: '{}'", raw_name);
        return raw_name.trim().to_string();
    }

    let original_name = raw_name.trim();

    // Leading list punctuation and trailing punctuation
    let mut name = original_name
        .trim_start_matches(|c: char| matches!(c, ',' | ';' | ':' | '-' | '–' | '•' | '*'))
        .trim_end_matches(|c: char| !c.is_alphanumeric() && c != ' ' && c != '-' && c != '\'' && c != ')')
        .trim()
        .to_string();

    for prefix in PREFIXES_TO_REMOVE {
        if let Some(rest) = strip_prefix_ignore_case(&name, prefix) {
            // Keep names that are nothing but the article ("a")
            if rest.trim().is_empty() {
                break;
            }
            debug!(
                "Removed prefix '{}' from ingredient name: '{}' -> '{}'",
                prefix.trim(),
                original_name,
                rest.trim_start()
            );
            name = rest.trim_start().to_string();
            break;
        }
    }

    // Clean up multiple spaces
    name = name.split_whitespace().collect::<Vec<&str>>().join(" ");

    if name.chars().count() > config.max_ingredient_length {
        let truncated: String = name.chars().take(config.max_ingredient_length).collect();
        let cut = match truncated.rfind(' ') {
            Some(last_space) => truncated[..last_space].to_string(),
            None => truncated,
        };
        warn!(
            "Ingredient name truncated due to length limit ({} > {}): '{}' -> '{}'",
            name.chars().count(),
            config.max_ingredient_length,
            name,
            cut
        );
        name = cut;
    }

    trace!(
        "Post-processed ingredient name: '{}' -> '{}'",
        original_name,
        name
    );
    name
}

fn strip_prefix_ignore_case<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    let head = name.get(..prefix.len())?;
    if head.to_lowercase() == prefix.to_lowercase() {
        Some(&name[prefix.len()..])
    } else {
        None
    }
}
