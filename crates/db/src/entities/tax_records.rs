//! `SeaORM` Entity for tax_records table.
//!
//! `household_id` is copied from the citizen at payment time so the
//! one-payment-per-household-per-year rule is a real unique index on this
//! table rather than a two-step lookup.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tax_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub citizen_id: Uuid,
    pub household_id: Option<Uuid>,
    pub fiscal_year: String,
    pub amount: Decimal,
    #[sea_orm(unique)]
    pub receipt_number: String,
    pub paid_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::citizens::Entity",
        from = "Column::CitizenId",
        to = "super::citizens::Column::Id"
    )]
    Citizens,
    #[sea_orm(
        belongs_to = "super::households::Entity",
        from = "Column::HouseholdId",
        to = "super::households::Column::Id"
    )]
    Households,
}

impl Related<super::citizens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Citizens.def()
    }
}

impl Related<super::households::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Households.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
