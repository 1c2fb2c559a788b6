use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::server::{
    data::parish::ParishRepository,
    error::{parish::ParishError, Error},
    service::parish::{
        matcher::{match_normalized, MatchStrategy, NormalizedParish},
        reference::ParishReference,
    },
    util::text::normalize,
};

/// Parish picked by [`ParishResolver::resolve`] and the strategy that found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParishMatch {
    pub parish_id: Uuid,
    pub strategy: MatchStrategy,
}

/// Resolves free-text parish names, or parish IDs, to a stored parish.
pub struct ParishResolver<'a, C: ConnectionTrait> {
    db: &'a C,
    reference: &'a ParishReference,
}

impl<'a, C: ConnectionTrait> ParishResolver<'a, C> {
    /// Creates a new instance of [`ParishResolver`]
    pub fn new(db: &'a C, reference: &'a ParishReference) -> Self {
        Self { db, reference }
    }

    /// Resolves a parish from an ID and/or a free-text name
    ///
    /// Strategies are tried in order and the first success wins:
    /// 1. A supplied ID that parses as a UUID is returned as is, without checking it exists
    /// 2. The raw name matched against stored names ignoring case
    /// 3. The name after alias substitution and snapping to the reference catalog,
    ///    matched against stored names ignoring case
    /// 4. Normalized, substring and fuzzy matching over every stored parish
    ///
    /// # Arguments
    /// - `id`: Parish ID supplied by the caller, blank values are ignored
    /// - `name`: Free-text parish name, blank values are ignored
    ///
    /// # Returns
    /// - `Ok(Some(ParishMatch))`: Parish ID and the strategy that matched
    /// - `Ok(None)`: Nothing matched, or only a malformed ID was supplied
    /// - `Err(Error::ParishError(ParishError::MissingInput))`: Neither ID nor name supplied
    /// - `Err(Error::DbErr)`: Database error
    pub async fn resolve(
        &self,
        id: Option<&str>,
        name: Option<&str>,
    ) -> Result<Option<ParishMatch>, Error> {
        let id = id.map(str::trim).filter(|id| !id.is_empty());
        let name = name.map(str::trim).filter(|name| !name.is_empty());

        if let Some(id) = id {
            match Uuid::parse_str(id) {
                Ok(parish_id) => {
                    return Ok(Some(ParishMatch {
                        parish_id,
                        strategy: MatchStrategy::Identifier,
                    }))
                }
                Err(_) if name.is_none() => {
                    tracing::debug!("Parish ID {:?} is not a UUID and no name was given", id);
                    return Ok(None);
                }
                Err(_) => {
                    tracing::debug!("Parish ID {:?} is not a UUID, resolving by name", id);
                }
            }
        }

        let Some(name) = name else {
            return Err(ParishError::MissingInput.into());
        };

        if let Some(parish_id) = self.find_unique_by_name(name).await? {
            return Ok(Some(self.matched(name, parish_id, MatchStrategy::ExactName)));
        }

        let normalized = normalize(name);
        let mut candidate = self.reference.alias(&normalized).unwrap_or(name);
        if let Some(canonical) = self.reference.canonical_name(candidate) {
            candidate = canonical;
        }

        if candidate != name {
            if let Some(parish_id) = self.find_unique_by_name(candidate).await? {
                return Ok(Some(self.matched(name, parish_id, MatchStrategy::ReferenceName)));
            }
        }

        let parishes: Vec<NormalizedParish> = ParishRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|parish| NormalizedParish {
                id: parish.id,
                name: normalize(&parish.name),
            })
            .collect();

        match match_normalized(&normalize(candidate), &parishes) {
            Some((parish_id, strategy)) => Ok(Some(self.matched(name, parish_id, strategy))),
            None => {
                tracing::debug!("No parish matches {:?}", name);
                Ok(None)
            }
        }
    }

    /// Gets the ID of the only parish named `name` ignoring case, if there is exactly one
    async fn find_unique_by_name(&self, name: &str) -> Result<Option<Uuid>, Error> {
        let mut rows = ParishRepository::new(self.db)
            .find_by_name_ignore_case(name, 2)
            .await?;

        if rows.len() == 1 {
            return Ok(rows.pop().map(|parish| parish.id));
        }

        Ok(None)
    }

    fn matched(&self, input: &str, parish_id: Uuid, strategy: MatchStrategy) -> ParishMatch {
        tracing::debug!("Resolved parish {:?} to {} by {}", input, parish_id, strategy);

        ParishMatch {
            parish_id,
            strategy,
        }
    }
}
