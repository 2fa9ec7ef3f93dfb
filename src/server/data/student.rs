use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::{db::StudentModel, student::NewStudent};

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new instance of [`StudentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a student by digits-only CPF
    pub async fn find_by_cpf(&self, cpf: &str) -> Result<Option<StudentModel>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::Cpf.eq(cpf))
            .one(self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<StudentModel>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Creates a new student
    ///
    /// Fails with a unique constraint violation if the CPF or email is already registered.
    pub async fn create(&self, student: &NewStudent) -> Result<StudentModel, DbErr> {
        let now = Utc::now().naive_utc();
        let student = entity::student::ActiveModel {
            full_name: ActiveValue::Set(student.full_name.clone()),
            cpf: ActiveValue::Set(student.cpf.clone()),
            birth_date: ActiveValue::Set(student.birth_date),
            email: ActiveValue::Set(student.email.clone()),
            phone: ActiveValue::Set(student.phone.clone()),
            high_school_completion_year: ActiveValue::Set(student.high_school_completion_year),
            agree_to_terms: ActiveValue::Set(true),
            receive_whatsapp_notifications: ActiveValue::Set(
                student.receive_whatsapp_notifications,
            ),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        student.insert(self.db).await
    }
}
