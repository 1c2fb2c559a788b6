use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

/// Read-only access to the parish records seeded by the diocese.
pub struct ParishRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParishRepository<'a, C> {
    /// Creates a new instance of [`ParishRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<entity::parish::Model>, DbErr> {
        entity::prelude::Parish::find_by_id(id).one(self.db).await
    }

    /// Gets the first parish whose name is exactly `name`
    pub async fn find_by_exact_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::parish::Model>, DbErr> {
        entity::prelude::Parish::find()
            .filter(entity::parish::Column::Name.eq(name))
            .order_by_asc(entity::parish::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets parishes whose name equals `name` ignoring case
    ///
    /// # Arguments
    /// - `name`: Name to compare against, compared after lowercasing both sides
    /// - `limit`: Maximum number of rows to return, callers checking for a unique match
    ///   pass `2` so ambiguity is detectable without loading every duplicate
    pub async fn find_by_name_ignore_case(
        &self,
        name: &str,
        limit: u64,
    ) -> Result<Vec<entity::parish::Model>, DbErr> {
        entity::prelude::Parish::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::parish::Column::Name)))
                    .eq(name.to_lowercase()),
            )
            .order_by_asc(entity::parish::Column::Name)
            .order_by_asc(entity::parish::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Gets every parish ordered by name, then ID
    ///
    /// The stable ordering makes first-match scans over the result deterministic.
    pub async fn get_all(&self) -> Result<Vec<entity::parish::Model>, DbErr> {
        entity::prelude::Parish::find()
            .order_by_asc(entity::parish::Column::Name)
            .order_by_asc(entity::parish::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every parish belonging to the provided diocese
    pub async fn get_by_diocese(
        &self,
        diocese: &str,
    ) -> Result<Vec<entity::parish::Model>, DbErr> {
        entity::prelude::Parish::find()
            .filter(entity::parish::Column::Diocese.eq(diocese))
            .order_by_asc(entity::parish::Column::Name)
            .all(self.db)
            .await
    }
}
