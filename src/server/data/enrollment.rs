use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::model::{db::EnrollmentModel, enrollment::InstallmentTerms};

pub struct EnrollmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EnrollmentRepository<'a, C> {
    /// Creates a new instance of [`EnrollmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new enrollment of a student in a course
    ///
    /// Installment columns are all set from `installment_plan` or all left null for cash
    /// payment.
    pub async fn create(
        &self,
        student_id: i32,
        course_id: i32,
        installment_plan: Option<&InstallmentTerms>,
    ) -> Result<EnrollmentModel, DbErr> {
        let now = Utc::now().naive_utc();
        let enrollment = entity::enrollment::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            course_id: ActiveValue::Set(course_id),
            installments: ActiveValue::Set(installment_plan.map(|plan| plan.installments)),
            installment_value: ActiveValue::Set(
                installment_plan.map(|plan| plan.installment_value),
            ),
            total_price: ActiveValue::Set(installment_plan.map(|plan| plan.total_price)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        enrollment.insert(self.db).await
    }
}
