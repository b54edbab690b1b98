//! `SeaORM` Entity for certificates table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "certificates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub citizen_id: Option<Uuid>,
    pub applicant_name: Option<String>,
    pub certificate_type_id: Uuid,
    pub status: String,
    #[sea_orm(unique)]
    pub certificate_number: Option<String>,
    pub issued_at: Option<DateTimeWithTimeZone>,
    pub fee_paid: Decimal,
    pub payload: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
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
        belongs_to = "super::certificate_types::Entity",
        from = "Column::CertificateTypeId",
        to = "super::certificate_types::Column::Id"
    )]
    CertificateTypes,
}

impl Related<super::citizens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Citizens.def()
    }
}

impl Related<super::certificate_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CertificateTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
