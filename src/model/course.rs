use entity::sea_orm_active_enums::CourseType;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Presencial")]
    pub modality: String,
    #[schema(example = "Manhã")]
    pub period: Option<String>,
    #[schema(example = 4752.0)]
    pub original_price: Option<f64>,
    #[schema(example = 169.95)]
    pub installment_price: Option<f64>,
    #[schema(example = 18)]
    pub installments: Option<i32>,
    #[schema(example = 2613.6)]
    pub cash_price: Option<f64>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub course_type: CourseTypeDto,
    pub location: CourseLocationDto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CourseTypeDto {
    Presencial,
    EaD,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CourseLocationDto {
    #[schema(example = "Campinas")]
    pub city: String,
    #[schema(example = "Vila Industrial")]
    pub unit: String,
    #[schema(example = "Rua Dr. Sales de Oliveira, nº 1661 - Vila Industrial - Campinas")]
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentPlanDto {
    #[schema(example = 1)]
    pub id: i32,
    /// Number of installments
    #[schema(example = 18)]
    pub installments: i32,
    /// Value of each installment
    #[schema(example = 169.95)]
    pub installment_value: f64,
    /// Total price
    #[schema(example = 3059.1)]
    pub total_price: f64,
}

impl From<CourseType> for CourseTypeDto {
    fn from(course_type: CourseType) -> Self {
        match course_type {
            CourseType::Presencial => Self::Presencial,
            CourseType::EaD => Self::EaD,
        }
    }
}

impl From<entity::course::Model> for CourseDto {
    fn from(course: entity::course::Model) -> Self {
        Self {
            id: course.id,
            modality: course.modality,
            period: course.period,
            original_price: course.original_price,
            installment_price: course.installment_price,
            installments: course.installments,
            cash_price: course.cash_price,
            description: course.description,
            course_type: course.course_type.into(),
            location: CourseLocationDto {
                city: course.location_city,
                unit: course.location_unit,
                address: course.location_address,
            },
        }
    }
}

impl From<entity::installment_plan::Model> for InstallmentPlanDto {
    fn from(plan: entity::installment_plan::Model) -> Self {
        Self {
            id: plan.id,
            installments: plan.installments,
            installment_value: plan.installment_value,
            total_price: plan.total_price,
        }
    }
}
