use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "parking_spots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lot_id: i32,
    /// "A" (available) or "O" (occupied).
    #[sea_orm(column_type = "String(StringLen::N(1))")]
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parking_lots::Entity",
        from = "Column::LotId",
        to = "super::parking_lots::Column::Id",
        on_delete = "Cascade"
    )]
    ParkingLot,
    #[sea_orm(has_many = "crate::modules::reservation::adapter::outgoing::sea_orm_entity::reservations::Entity")]
    Reservations,
}

impl Related<super::parking_lots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingLot.def()
    }
}

impl Related<crate::modules::reservation::adapter::outgoing::sea_orm_entity::reservations::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
