use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::CourseType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub modality: String,
    pub period: Option<String>,
    pub original_price: Option<f64>,
    pub installment_price: Option<f64>,
    pub installments: Option<i32>,
    pub cash_price: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_name = "type")]
    pub course_type: CourseType,
    pub location_city: String,
    pub location_unit: String,
    pub location_address: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
    #[sea_orm(has_many = "super::installment_plan::Entity")]
    InstallmentPlan,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::installment_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InstallmentPlan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
