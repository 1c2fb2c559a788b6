use sea_orm::entity::prelude::*;

/// A cataloged heritage object.
///
/// `(parish_id, inventory_number)` is unique; a row with status `draft` and no
/// `data` is a reservation placeholder created by inventory number allocation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "catalog_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub parish_id: Uuid,
    pub inventory_number: String,
    pub status: String,
    pub image_url: Option<String>,
    pub user_id: Option<String>,
    pub parish_name: Option<String>,
    pub data: Option<Json>,
    pub created_at: DateTime,
    pub approved_at: Option<DateTime>,
    pub published_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parish::Entity",
        from = "Column::ParishId",
        to = "super::parish::Column::Id"
    )]
    Parish,
}

impl Related<super::parish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parish.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
