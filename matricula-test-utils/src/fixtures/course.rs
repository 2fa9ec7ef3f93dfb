use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    context::TestContext,
    error::TestError,
    fixtures::factory,
    model::{CourseModel, InstallmentPlanModel},
};

impl TestContext {
    pub fn course<'a>(&'a self) -> CourseFixtures<'a> {
        CourseFixtures { context: self }
    }
}

pub struct CourseFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> CourseFixtures<'a> {
    /// Insert a course keeping the model's ID
    pub async fn insert_course(&self, course: CourseModel) -> Result<CourseModel, TestError> {
        let course = entity::course::ActiveModel {
            id: ActiveValue::Set(course.id),
            modality: ActiveValue::Set(course.modality),
            period: ActiveValue::Set(course.period),
            original_price: ActiveValue::Set(course.original_price),
            installment_price: ActiveValue::Set(course.installment_price),
            installments: ActiveValue::Set(course.installments),
            cash_price: ActiveValue::Set(course.cash_price),
            description: ActiveValue::Set(course.description),
            course_type: ActiveValue::Set(course.course_type),
            location_city: ActiveValue::Set(course.location_city),
            location_unit: ActiveValue::Set(course.location_unit),
            location_address: ActiveValue::Set(course.location_address),
            created_at: ActiveValue::Set(course.created_at),
            updated_at: ActiveValue::Set(course.updated_at),
        };

        Ok(course.insert(&self.context.db).await?)
    }

    pub async fn insert_mock_course(&self, course_id: i32) -> Result<CourseModel, TestError> {
        self.insert_course(factory::mock_course_model(course_id))
            .await
    }

    /// Insert an installment plan, the ID is assigned by the database
    pub async fn insert_installment_plan(
        &self,
        course_id: i32,
        installments: i32,
        installment_value: f64,
    ) -> Result<InstallmentPlanModel, TestError> {
        let plan = factory::mock_installment_plan_model(course_id, installments, installment_value);
        let plan = entity::installment_plan::ActiveModel {
            course_id: ActiveValue::Set(plan.course_id),
            installments: ActiveValue::Set(plan.installments),
            installment_value: ActiveValue::Set(plan.installment_value),
            total_price: ActiveValue::Set(plan.total_price),
            created_at: ActiveValue::Set(plan.created_at),
            updated_at: ActiveValue::Set(plan.updated_at),
            ..Default::default()
        };

        Ok(plan.insert(&self.context.db).await?)
    }
}
