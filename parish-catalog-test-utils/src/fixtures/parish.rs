use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{
    constant::{TEST_DIOCESE, TEST_LOCATION},
    error::TestError,
    model::ParishModel,
    TestContext,
};

impl TestContext {
    pub fn parish<'a>(&'a mut self) -> ParishFixtures<'a> {
        ParishFixtures { setup: self }
    }
}

pub struct ParishFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> ParishFixtures<'a> {
    pub async fn insert_parish(
        &self,
        name: &str,
        location: &str,
        diocese: &str,
    ) -> Result<ParishModel, TestError> {
        Ok(
            entity::prelude::Parish::insert(entity::parish::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                name: ActiveValue::Set(name.to_string()),
                location: ActiveValue::Set(location.to_string()),
                diocese: ActiveValue::Set(diocese.to_string()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a parish in the test diocese and location.
    pub async fn insert_mock_parish(&self, name: &str) -> Result<ParishModel, TestError> {
        self.insert_parish(name, TEST_LOCATION, TEST_DIOCESE).await
    }

    /// Get the first parish stored under `name`, typically one queued with `with_parish`.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<ParishModel>, TestError> {
        Ok(entity::prelude::Parish::find()
            .filter(entity::parish::Column::Name.eq(name))
            .one(&self.setup.db)
            .await?)
    }
}
