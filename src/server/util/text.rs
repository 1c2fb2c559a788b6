//! Text normalization and similarity scoring for parish names.
//!
//! Names typed by catalogers vary in accents, capitalization, punctuation and whether
//! the locality is included. Every comparison in the resolver runs over the output of
//! [`normalize`], so alias keys, stored names and user input meet in the same form.

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block stripped after NFD decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

fn is_combining_mark(c: char) -> bool {
    COMBINING_MARKS.contains(&c)
}

/// Lowercases and strips diacritics without touching punctuation or spacing.
///
/// Used for accent-insensitive comparisons where the original shape of the text
/// matters, e.g. searching the parish listing.
///
/// # Example
/// ```
/// use parish_catalog::server::util::text::fold_accents;
///
/// assert_eq!(fold_accents("Encarnación"), "encarnacion");
/// assert_eq!(fold_accents("Sta. María (Guadix)"), "sta. maria (guadix)");
/// ```
pub fn fold_accents(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Normalizes a name for matching.
///
/// Lowercases, strips combining diacritical marks, replaces every character other than
/// ASCII letters, digits and whitespace with a space, collapses whitespace runs and
/// trims. The function is idempotent.
///
/// # Example
/// ```
/// use parish_catalog::server::util::text::normalize;
///
/// assert_eq!(normalize("  Ntra. Sra. del Carmen (Granada) "), "ntra sra del carmen granada");
/// assert_eq!(normalize("San Miguel-Arcángel"), "san miguel arcangel");
/// ```
pub fn normalize(input: &str) -> String {
    let replaced: String = fold_accents(input)
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Turns a name into a lowercase, dash separated slug.
///
/// # Example
/// ```
/// use parish_catalog::server::util::text::slugify;
///
/// assert_eq!(slugify("Santa María la Mayor"), "santa-maria-la-mayor");
/// ```
pub fn slugify(input: &str) -> String {
    normalize(input).replace(' ', "-")
}

/// Levenshtein distance between two normalized strings, in characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Edit distance relative to the longer of the two strings.
///
/// Returns `1.0` when both strings are empty so that empty names never count as a
/// close match.
pub fn edit_distance_ratio(distance: usize, a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    distance as f64 / max_len as f64
}
