//! Parish lookup services.
//!
//! Holds the reference data used to recognise the many ways catalogers write a parish
//! name, the resolver turning those names into stored parishes, and the listing used by
//! parish pickers.

pub mod alias;
pub mod matcher;
pub mod reference;
pub mod resolver;

#[cfg(test)]
mod tests;

use sea_orm::ConnectionTrait;

use crate::{
    model::parish::ParishDto,
    server::{data::parish::ParishRepository, error::Error, util::text::fold_accents},
};

/// Service for listing the parishes of a diocese.
pub struct ParishService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParishService<'a, C> {
    /// Creates a new instance of [`ParishService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists the parishes of a diocese, optionally filtered by a search term
    ///
    /// The search term matches the name or location ignoring accents and case. Results
    /// are sorted by their accent-folded name.
    ///
    /// # Arguments
    /// - `diocese`: Diocese to list
    /// - `search`: Search term, blank values list every parish of the diocese
    pub async fn list(&self, diocese: &str, search: Option<&str>) -> Result<Vec<ParishDto>, Error> {
        let search = search
            .map(str::trim)
            .filter(|search| !search.is_empty())
            .map(fold_accents);

        let mut parishes: Vec<(String, ParishDto)> = ParishRepository::new(self.db)
            .get_by_diocese(diocese)
            .await?
            .into_iter()
            .map(|parish| {
                (
                    fold_accents(&parish.name),
                    ParishDto {
                        id: parish.id,
                        name: parish.name,
                        location: parish.location,
                    },
                )
            })
            .filter(|(folded_name, parish)| match &search {
                Some(search) => {
                    folded_name.contains(search.as_str())
                        || fold_accents(&parish.location).contains(search.as_str())
                }
                None => true,
            })
            .collect();

        parishes.sort_by(|(a, _), (b, _)| a.cmp(b));

        Ok(parishes.into_iter().map(|(_, parish)| parish).collect())
    }
}
