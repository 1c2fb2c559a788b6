//! Inventory number prefixes and sequence arithmetic.
//!
//! Inventory numbers look like `SJN-2024-PIN-003`: a parish code, the year, a category
//! code and a three digit sequence that is unique per parish and prefix.

use std::fmt;

use crate::server::util::text::normalize;

/// Words ignored when building a parish code from its name.
const STOPWORDS: [&str; 7] = ["de", "del", "la", "el", "y", "los", "las"];

/// Category code used when no category is supplied.
pub const UNKNOWN_CATEGORY_CODE: &str = "UNK";

/// Three letter code derived from a parish name
///
/// With three or more significant words the code is their initials. With two, the
/// first letter of the first word followed by the first two letters of the second, padded
/// with `X` for one-letter words. Otherwise the first three letters of the whole name.
pub fn parish_code(name: &str) -> String {
    let normalized = normalize(name);
    let words: Vec<&str> = normalized
        .split(' ')
        .filter(|word| !word.is_empty() && !STOPWORDS.contains(word))
        .collect();

    let code: String = match words.as_slice() {
        [first, second, third, ..] => [first, second, third]
            .iter()
            .filter_map(|word| word.chars().next())
            .collect(),
        [first, second] => {
            let mut second = second.chars();
            first
                .chars()
                .take(1)
                .chain(second.next())
                .chain(Some(second.next().unwrap_or('x')))
                .collect()
        }
        _ => normalized.chars().filter(|c| *c != ' ').take(3).collect(),
    };

    code.to_uppercase()
}

/// Three letter code derived from an object category, `UNK` when empty
pub fn category_code(category: &str) -> String {
    let code: String = normalize(category)
        .chars()
        .filter(|c| *c != ' ')
        .take(3)
        .collect();

    if code.is_empty() {
        return UNKNOWN_CATEGORY_CODE.to_string();
    }

    code.to_uppercase()
}

/// Prefix shared by all inventory numbers of a parish, year and category,
/// rendered as `{parish}-{year}-{category}-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryPrefix {
    pub parish_code: String,
    pub year: i32,
    pub category_code: String,
}

impl InventoryPrefix {
    pub fn new(parish_name: &str, category: &str, year: i32) -> Self {
        Self {
            parish_code: parish_code(parish_name),
            year,
            category_code: category_code(category),
        }
    }

    /// Inventory number with the given sequence, zero padded to three digits
    pub fn number(&self, sequence: u64) -> String {
        format!("{self}{sequence:03}")
    }

    /// Next free inventory number given the numbers already stored under this prefix
    ///
    /// Only numbers starting with this prefix count. The sequence is read from the leading
    /// digits after the last `-`. Entries without digits there, or whose sequence does not
    /// fit a `u64` once incremented, are ignored.
    pub fn next_number<I, S>(&self, existing: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prefix = self.to_string();

        let next_sequence = existing
            .into_iter()
            .filter(|number| number.as_ref().starts_with(&prefix))
            .filter_map(|number| sequence_of(number.as_ref()))
            .filter_map(|sequence| sequence.checked_add(1))
            .max()
            .unwrap_or(1);

        self.number(next_sequence)
    }
}

impl fmt::Display for InventoryPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-",
            self.parish_code, self.year, self.category_code
        )
    }
}

/// Leading digits of the segment after the last `-`
fn sequence_of(number: &str) -> Option<u64> {
    let last = number.rsplit('-').next()?;
    let digits: String = last
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().ok()
}
