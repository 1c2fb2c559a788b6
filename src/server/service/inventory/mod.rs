//! Inventory number allocation.
//!
//! Numbers are reserved by inserting a placeholder catalog item. The unique
//! `(parish_id, inventory_number)` index is the only coordination between concurrent
//! requests: a rejected insert means another request took the candidate, so the
//! sequence is re-read and the reservation retried with backoff.

pub mod prefix;

#[cfg(test)]
mod tests;

use std::str::FromStr;

use chrono::Utc;
use sea_orm::ConnectionTrait;

use crate::{
    model::inventory::GenerateInventoryNumberDto,
    server::{
        data::{catalog_item::CatalogItemRepository, parish::ParishRepository},
        error::{inventory::InventoryError, parish::ParishError, Error},
        model::db::ParishModel,
        service::{
            inventory::prefix::InventoryPrefix,
            parish::{reference::ParishReference, resolver::ParishResolver},
            retry::{RetryContext, RetryPolicy},
        },
        util::time::inventory_year,
    },
};

/// Status of the placeholder item holding a freshly reserved number.
pub const RESERVED_ITEM_STATUS: &str = "draft";

/// What to do when a number cannot be reserved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Propagate the failure to the caller
    #[default]
    Reject,
    /// Hand out the unreserved `{prefix}001`, which may collide with an existing item
    Unreserved,
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "unreserved" => Ok(Self::Unreserved),
            other => Err(format!(
                "expected \"reject\" or \"unreserved\", got {:?}",
                other
            )),
        }
    }
}

/// Allocation settings read from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventorySettings {
    pub retry: RetryPolicy,
    pub fallback: FallbackPolicy,
}

/// Service allocating sequential inventory numbers per parish.
pub struct InventoryService<'a, C: ConnectionTrait> {
    db: &'a C,
    reference: &'a ParishReference,
    settings: &'a InventorySettings,
}

impl<'a, C: ConnectionTrait> InventoryService<'a, C> {
    /// Creates a new instance of [`InventoryService`]
    pub fn new(db: &'a C, reference: &'a ParishReference, settings: &'a InventorySettings) -> Self {
        Self {
            db,
            reference,
            settings,
        }
    }

    /// Resolves the requested parish and reserves its next inventory number
    ///
    /// # Returns
    /// - `Ok(String)`: The reserved inventory number
    /// - `Err(Error::ParishError(ParishError::MissingInput))`: Neither parish ID nor name supplied
    /// - `Err(Error::ParishError(ParishError::NotFound))`: No parish matches the input
    /// - `Err(Error::InventoryError(InventoryError::ReservationExhausted))`: Every attempt collided
    /// - `Err(Error::DbErr)`: Database error
    pub async fn generate(&self, request: &GenerateInventoryNumberDto) -> Result<String, Error> {
        let parish_match = ParishResolver::new(self.db, self.reference)
            .resolve(request.parish_id.as_deref(), request.parish_name.as_deref())
            .await?;

        let not_found = || {
            let input = request
                .parish_name
                .as_deref()
                .or(request.parish_id.as_deref())
                .unwrap_or_default();

            ParishError::NotFound(input.to_string())
        };

        let Some(parish_match) = parish_match else {
            return Err(not_found().into());
        };

        let Some(parish) = ParishRepository::new(self.db)
            .get_by_id(parish_match.parish_id)
            .await?
        else {
            return Err(not_found().into());
        };

        self.allocate(&parish, request.category.as_deref().unwrap_or_default())
            .await
    }

    /// Reserves the next inventory number of a parish for the current year
    pub async fn allocate(
        &self,
        parish: &ParishModel,
        category: &str,
    ) -> Result<String, Error> {
        self.allocate_in_year(parish, category, inventory_year(Utc::now()))
            .await
    }

    /// Reserves the next inventory number of a parish for the provided year
    ///
    /// Conflicting reservations are retried per the configured [`RetryPolicy`]. Once
    /// retries run out, or on any other error, the configured [`FallbackPolicy`] decides
    /// between failing and returning the unreserved first number of the prefix.
    pub async fn allocate_in_year(
        &self,
        parish: &ParishModel,
        category: &str,
        year: i32,
    ) -> Result<String, Error> {
        let prefix = InventoryPrefix::new(&parish.name, category, year);

        let result = RetryContext::new(self.settings.retry)
            .execute_with_retry("inventory number reservation", || {
                self.try_reserve(parish.id, &prefix)
            })
            .await;

        let err = match result {
            Ok(number) => {
                tracing::debug!("Reserved inventory number {} for parish {}", number, parish.id);
                return Ok(number);
            }
            Err(Error::InventoryError(InventoryError::SequenceTaken(_))) => {
                InventoryError::ReservationExhausted {
                    prefix: prefix.to_string(),
                    attempts: self.settings.retry.max_attempts.max(1),
                }
                .into()
            }
            Err(err) => err,
        };

        match self.settings.fallback {
            FallbackPolicy::Reject => Err(err),
            FallbackPolicy::Unreserved => {
                let number = prefix.number(1);
                tracing::warn!(
                    "Returning unreserved inventory number {} for parish {}: {}",
                    number,
                    parish.id,
                    err
                );

                Ok(number)
            }
        }
    }

    /// Computes the next candidate under `prefix` and tries to reserve it once
    async fn try_reserve(
        &self,
        parish_id: uuid::Uuid,
        prefix: &InventoryPrefix,
    ) -> Result<String, Error> {
        let repo = CatalogItemRepository::new(self.db);

        let existing = repo
            .find_inventory_numbers_with_prefix(parish_id, &prefix.to_string())
            .await?;
        let candidate = prefix.next_number(&existing);

        match repo
            .reserve(parish_id, &candidate, RESERVED_ITEM_STATUS)
            .await?
        {
            Some(_) => Ok(candidate),
            None => Err(InventoryError::SequenceTaken(candidate).into()),
        }
    }
}
