//! Name matching over the full list of stored parishes.
//!
//! Runs three passes over candidates whose names are already normalized, each pass
//! scanning every candidate before the next one starts: exact equality, substring
//! containment in either direction, then the closest edit distance below a ratio.

use uuid::Uuid;

use crate::server::util::text::{edit_distance, edit_distance_ratio};

/// Shortest normalized target allowed to match by substring containment.
pub const SUBSTRING_MIN_LEN: usize = 5;

/// Fuzzy matches must stay strictly below this `distance / max length` ratio.
pub const FUZZY_MAX_RATIO: f64 = 0.25;

/// How a parish name was matched, reported for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// The caller supplied the parish ID
    Identifier,
    /// Stored name equals the input ignoring case
    ExactName,
    /// Stored name equals the alias or reference canonical name of the input
    ReferenceName,
    /// Normalized stored name equals the normalized input
    NormalizedName,
    /// One normalized name contains the other
    Substring,
    /// Closest edit distance within [`FUZZY_MAX_RATIO`]
    Fuzzy,
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Identifier => "identifier",
            Self::ExactName => "exact name",
            Self::ReferenceName => "reference name",
            Self::NormalizedName => "normalized name",
            Self::Substring => "substring",
            Self::Fuzzy => "fuzzy",
        };

        f.write_str(label)
    }
}

/// Stored parish with its name already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedParish {
    pub id: Uuid,
    pub name: String,
}

/// Picks the best candidate for a normalized target
///
/// Candidates with an empty normalized name never match. Among fuzzy candidates the
/// first one with the lowest distance wins, so callers order candidates for a
/// deterministic result.
pub fn match_normalized(
    target: &str,
    candidates: &[NormalizedParish],
) -> Option<(Uuid, MatchStrategy)> {
    if target.is_empty() {
        return None;
    }

    let candidates = candidates.iter().filter(|c| !c.name.is_empty());

    if let Some(found) = candidates.clone().find(|c| c.name == target) {
        return Some((found.id, MatchStrategy::NormalizedName));
    }

    if target.len() >= SUBSTRING_MIN_LEN {
        if let Some(found) = candidates
            .clone()
            .find(|c| c.name.contains(target) || target.contains(c.name.as_str()))
        {
            return Some((found.id, MatchStrategy::Substring));
        }
    }

    let mut best: Option<(usize, Uuid)> = None;
    for candidate in candidates {
        let distance = edit_distance(target, &candidate.name);
        if edit_distance_ratio(distance, target, &candidate.name) >= FUZZY_MAX_RATIO {
            continue;
        }
        if best.is_none_or(|(best_distance, _)| distance < best_distance) {
            best = Some((distance, candidate.id));
        }
    }

    best.map(|(_, id)| (id, MatchStrategy::Fuzzy))
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn parishes(names: &[&str]) -> Vec<NormalizedParish> {
        names
            .iter()
            .map(|name| NormalizedParish {
                id: Uuid::new_v4(),
                name: name.to_string(),
            })
            .collect()
    }

    /// Expect an exact match anywhere in the list to beat an earlier substring match
    #[test]
    fn exact_beats_earlier_substring() {
        let candidates = parishes(&["santiago apostol guadix", "santiago apostol"]);

        let result = match_normalized("santiago apostol", &candidates);

        assert_eq!(result, Some((candidates[1].id, MatchStrategy::NormalizedName)));
    }

    /// Expect substring matches in both directions
    #[test]
    fn matches_substring_both_directions() {
        let candidates = parishes(&["sagrario"]);

        let contained = match_normalized("parroquia del sagrario", &candidates);
        let containing = match_normalized("sagra", &candidates);

        assert_eq!(contained, Some((candidates[0].id, MatchStrategy::Substring)));
        assert_eq!(containing, Some((candidates[0].id, MatchStrategy::Substring)));
    }

    /// Expect targets shorter than the minimum not to use substring containment
    #[test]
    fn short_targets_skip_substring() {
        let candidates = parishes(&["san juan bautista"]);

        let result = match_normalized("juan", &candidates);

        assert_eq!(result, None);
    }

    /// Expect the closest name within the ratio to be picked
    #[test]
    fn picks_closest_fuzzy_match() {
        let candidates = parishes(&["santa ana", "santa maria", "santa marina"]);

        let result = match_normalized("santa mria", &candidates);

        assert_eq!(result, Some((candidates[1].id, MatchStrategy::Fuzzy)));
    }

    /// Expect a distance ratio at the threshold to be rejected
    #[test]
    fn rejects_ratio_at_threshold() {
        // 2 edits over 8 characters is exactly 0.25
        let candidates = parishes(&["abcdefgh"]);

        let result = match_normalized("abcdefxy", &candidates);

        assert_eq!(result, None);
    }

    /// Expect ties to resolve to the first candidate
    #[test]
    fn fuzzy_ties_resolve_to_first() {
        let candidates = parishes(&["santa marta", "santa maria"]);

        let result = match_normalized("santa marxa", &candidates);

        assert_eq!(result, Some((candidates[0].id, MatchStrategy::Fuzzy)));
    }

    /// Expect empty targets and empty candidate names never to match
    #[test]
    fn empty_names_never_match() {
        let candidates = parishes(&["", "sagrario"]);

        assert_eq!(match_normalized("", &candidates), None);
        assert_eq!(match_normalized("xyz", &parishes(&[""])), None);
    }
}
