//! Abbreviations that end in a period without ending a sentence.
//!
//! Short social text is written loosely, so the set stays small and leaves
//! out abbreviations that double as ordinary words ("no.", "sat.", "sun.").

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lowercase abbreviations, without their trailing period.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Titles and honorifics
    set.extend([
        "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "sr", "jr", "st", "capt", "gen", "lt",
        "sgt", "sen", "rep", "gov", "pres",
    ]);

    // Latin and scholarly shorthand
    set.extend(["etc", "vs", "e.g", "i.e", "cf", "viz", "n.b", "p.s", "a.m", "p.m"]);

    // Months and days
    set.extend([
        "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "mon",
        "tue", "tues", "thu", "thur", "thurs", "fri",
    ]);

    // Places and organizations
    set.extend([
        "ave", "blvd", "rd", "apt", "dept", "u.s", "u.k", "u.s.a", "inc", "corp", "ltd",
    ]);

    // Measures
    set.extend(["approx", "avg", "vol", "pp", "ft", "lb", "lbs"]);

    set
});

/// Check if a word is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let word_lower = word.to_lowercase();
    let trimmed = word_lower.trim_matches('.');
    ABBREVIATIONS.contains(trimmed)
}
