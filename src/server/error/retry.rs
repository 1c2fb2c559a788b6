use super::{inventory::InventoryError, Error};

/// Strategy for handling errors in a retry context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Unique constraint rejected our candidate because a concurrent request reserved
            // it first, re-reading the existing sequence numbers yields a fresh candidate.
            Self::InventoryError(InventoryError::SequenceTaken(_)) => ErrorRetryStrategy::Retry,

            // Retry budget already spent
            Self::InventoryError(InventoryError::ReservationExhausted { .. }) => {
                ErrorRetryStrategy::Fail
            }

            // Uniqueness conflicts are mapped to SequenceTaken before reaching here
            Self::DbErr(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Parish errors - bad input or no match, retrying yields the same result
            Self::ParishError(_) => ErrorRetryStrategy::Fail,

            // Catalog errors - bad requests or missing rows
            Self::CatalogError(_) => ErrorRetryStrategy::Fail,

            // Serialization errors - permanent failures (bad data format)
            Self::JsonError(_) => ErrorRetryStrategy::Fail,

            // Bad request bodies never become valid on retry
            Self::RequestBodyError(_) => ErrorRetryStrategy::Fail,

            // Filesystem errors are not part of any retried operation
            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use super::*;
    use crate::server::error::parish::ParishError;

    /// Expect only sequence conflicts to be retried
    #[test]
    fn retries_only_sequence_conflicts() {
        let taken = Error::InventoryError(InventoryError::SequenceTaken(
            "SJN-2024-PIN-001".to_string(),
        ));
        assert_eq!(taken.to_retry_strategy(), ErrorRetryStrategy::Retry);

        let db_err = Error::DbErr(DbErr::Custom("no such table: catalog_item".to_string()));
        assert_eq!(db_err.to_retry_strategy(), ErrorRetryStrategy::Fail);

        let not_found = Error::ParishError(ParishError::NotFound("San Juan".to_string()));
        assert_eq!(not_found.to_retry_strategy(), ErrorRetryStrategy::Fail);

        let exhausted = Error::InventoryError(InventoryError::ReservationExhausted {
            prefix: "SJN-2024-PIN-".to_string(),
            attempts: 5,
        });
        assert_eq!(exhausted.to_retry_strategy(), ErrorRetryStrategy::Fail);
    }
}
