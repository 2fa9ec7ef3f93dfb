use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::student::{CreateStudentDto, StudentDto};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateEnrollmentDto {
    pub student: CreateStudentDto,
    pub payment_info: PaymentInfoDto,
}

/// Course selection & chosen payment terms.
///
/// The three installment fields are sent together for an installment plan and
/// omitted together for cash payment.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PaymentInfoDto {
    #[schema(example = 1)]
    pub course_id: i32,
    #[serde(default)]
    #[schema(example = 12)]
    pub installments: Option<i32>,
    #[serde(default)]
    #[schema(example = 299.9)]
    pub installment_value: Option<f64>,
    #[serde(default)]
    #[schema(example = 3598.8)]
    pub total_price: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDto {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Student & enrollment created together by a single submission
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentWithStudentDto {
    pub student: StudentDto,
    pub enrollment: EnrollmentDto,
}

impl From<entity::enrollment::Model> for EnrollmentDto {
    fn from(enrollment: entity::enrollment::Model) -> Self {
        Self {
            id: enrollment.id,
            student_id: enrollment.student_id,
            course_id: enrollment.course_id,
            installments: enrollment.installments,
            installment_value: enrollment.installment_value,
            total_price: enrollment.total_price,
            created_at: enrollment.created_at,
            updated_at: enrollment.updated_at,
        }
    }
}
