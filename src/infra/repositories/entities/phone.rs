//! Phone database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Phone;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "phones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(indexed)]
    pub user_id: Uuid,
    pub number: String,
    pub city_code: String,
    pub country_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Phone {
    fn from(model: Model) -> Self {
        Phone {
            id: model.id,
            user_id: model.user_id,
            number: model.number,
            city_code: model.city_code,
            country_code: model.country_code,
        }
    }
}
