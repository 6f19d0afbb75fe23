use sea_orm::entity::prelude::*;

use crate::modules::parking::application::domain::entities::ParkingLot;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "parking_lots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub prime_location_name: String,
    #[sea_orm(column_type = "Double")]
    pub price_per_hour: f64,
    pub address: String,
    pub pin_code: String,
    pub maximum_number_of_spots: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::parking_spots::Entity")]
    ParkingSpots,
}

impl Related<super::parking_spots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingSpots.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ParkingLot {
    fn from(model: Model) -> Self {
        ParkingLot {
            id: model.id,
            prime_location_name: model.prime_location_name,
            price_per_hour: model.price_per_hour,
            address: model.address,
            pin_code: model.pin_code,
            maximum_number_of_spots: model.maximum_number_of_spots,
        }
    }
}
