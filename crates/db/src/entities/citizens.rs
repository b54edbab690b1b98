//! `SeaORM` Entity for citizens table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "citizens")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub nid: String,
    pub name_en: String,
    pub name_bn: String,
    pub father_name_en: String,
    pub father_name_bn: String,
    pub mother_name_en: String,
    pub mother_name_bn: String,
    pub phone: String,
    pub date_of_birth: Date,
    pub gender: String,
    pub household_id: Option<Uuid>,
    pub village: String,
    pub post_office: String,
    pub postal_code: String,
    pub district: String,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::households::Entity",
        from = "Column::HouseholdId",
        to = "super::households::Column::Id"
    )]
    Households,
}

impl Related<super::households::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Households.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
