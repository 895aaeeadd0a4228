use sea_orm::entity::prelude::*;

/// Row model for the `beer` table.
///
/// `kind` maps to the `type` column; `type` is a reserved word in Rust so the
/// field is renamed at the entity boundary. Both `kind` and `style` store the
/// raw enumeration codes; interpretation lives in the domain model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "beer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub kind: i32,
    pub style: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
