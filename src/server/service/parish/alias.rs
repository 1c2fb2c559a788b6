use std::collections::HashMap;

use serde::Deserialize;

use crate::server::{service::parish::reference::ReferenceParish, util::text::normalize};

/// Manual alias overrides as stored on disk: `{ "aliases": { "<alias>": "<canonical name>" } }`
#[derive(Debug, Default, Deserialize)]
pub struct ManualAliasFile {
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

/// Mapping from a normalized alias to the canonical parish name it stands for.
///
/// Keys are always normalized with [`normalize`], values keep the canonical name's
/// original spelling so they can be compared against stored parish names.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    /// Builds the alias table from the reference catalog and the manual overrides
    ///
    /// Every reference entry contributes its bare name plus the `name (location)`,
    /// `name - location`, `name, location` and `name location` forms. Manual aliases
    /// are applied afterwards and win over generated ones on the same key.
    pub fn build(entries: &[ReferenceParish], manual: &HashMap<String, String>) -> Self {
        let mut aliases = HashMap::new();

        for entry in entries {
            let name = entry.name.trim();
            let location = entry.location.trim();
            if name.is_empty() {
                continue;
            }

            for variant in surface_forms(name, location) {
                let key = normalize(&variant);
                if !key.is_empty() {
                    aliases.insert(key, name.to_string());
                }
            }
        }

        for (alias, canonical) in manual {
            let key = normalize(alias);
            if key.is_empty() {
                continue;
            }
            aliases.insert(key, canonical.clone());
        }

        Self { aliases }
    }

    /// Gets the canonical name for an already normalized alias
    pub fn get(&self, normalized: &str) -> Option<&str> {
        self.aliases.get(normalized).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

fn surface_forms(name: &str, location: &str) -> Vec<String> {
    if location.is_empty() {
        return vec![name.to_string()];
    }

    vec![
        name.to_string(),
        format!("{name} ({location})"),
        format!("{name} - {location}"),
        format!("{name}, {location}"),
        format!("{name} {location}"),
    ]
}
