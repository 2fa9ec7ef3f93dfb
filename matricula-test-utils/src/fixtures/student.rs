use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{context::TestContext, error::TestError, fixtures::factory, model::StudentModel};

impl TestContext {
    pub fn student<'a>(&'a self) -> StudentFixtures<'a> {
        StudentFixtures { context: self }
    }
}

pub struct StudentFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> StudentFixtures<'a> {
    /// Insert a student keeping the model's ID
    pub async fn insert_student(&self, student: StudentModel) -> Result<StudentModel, TestError> {
        let student = entity::student::ActiveModel {
            id: ActiveValue::Set(student.id),
            full_name: ActiveValue::Set(student.full_name),
            cpf: ActiveValue::Set(student.cpf),
            birth_date: ActiveValue::Set(student.birth_date),
            email: ActiveValue::Set(student.email),
            phone: ActiveValue::Set(student.phone),
            high_school_completion_year: ActiveValue::Set(student.high_school_completion_year),
            agree_to_terms: ActiveValue::Set(student.agree_to_terms),
            receive_whatsapp_notifications: ActiveValue::Set(
                student.receive_whatsapp_notifications,
            ),
            created_at: ActiveValue::Set(student.created_at),
            updated_at: ActiveValue::Set(student.updated_at),
        };

        Ok(student.insert(&self.context.db).await?)
    }

    /// Insert a student with CPF & e-mail derived from `seed`
    pub async fn insert_mock_student(&self, seed: u32) -> Result<StudentModel, TestError> {
        self.insert_student(factory::mock_student_model(seed)).await
    }
}
