use sea_orm::entity::prelude::*;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::parking::adapter::outgoing::sea_orm_entity::parking_spots;
use crate::modules::reservation::application::domain::entities::Reservation;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub spot_id: i32,
    pub user_id: i32,
    pub parking_time: DateTimeUtc,
    pub leaving_time: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Double")]
    pub cost_per_hour: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "parking_spots::Entity",
        from = "Column::SpotId",
        to = "parking_spots::Column::Id",
        on_delete = "Cascade"
    )]
    ParkingSpot,
    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::UserId",
        to = "users::Column::Id",
        on_delete = "Restrict"
    )]
    User,
}

impl Related<parking_spots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingSpot.def()
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Reservation {
    fn from(model: Model) -> Self {
        Reservation {
            id: model.id,
            spot_id: model.spot_id,
            user_id: model.user_id.into(),
            parking_time: model.parking_time,
            leaving_time: model.leaving_time,
            cost_per_hour: model.cost_per_hour,
        }
    }
}
