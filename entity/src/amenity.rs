use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "amenity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub label: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        super::hotel_amenity::Relation::Hotel.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::hotel_amenity::Relation::Amenity.def().rev())
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        super::room_amenity::Relation::Room.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::room_amenity::Relation::Amenity.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
