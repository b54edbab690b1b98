//! `SeaORM` Entity for households table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "households")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::citizens::Entity")]
    Citizens,
}

impl Related<super::citizens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Citizens.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
