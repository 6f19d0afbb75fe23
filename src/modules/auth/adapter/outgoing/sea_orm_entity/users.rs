use sea_orm::entity::prelude::*;

use crate::modules::auth::application::domain::entities::{User, UserId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::modules::reservation::adapter::outgoing::sea_orm_entity::reservations::Entity")]
    Reservations,
}

impl Related<crate::modules::reservation::adapter::outgoing::sea_orm_entity::reservations::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: UserId::from(model.id),
            username: model.username,
            password_hash: model.password_hash,
            is_admin: model.is_admin,
        }
    }
}
