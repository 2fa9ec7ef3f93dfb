//! Student registration service.
//!
//! Registers prospective students after checking terms agreement, validating every
//! personal data field and making sure neither the CPF nor the e-mail is already taken.


use chrono::{NaiveDate, Utc};
use sea_orm::ConnectionTrait;

use crate::{
    model::student::CreateStudentDto,
    server::{
        data::student::StudentRepository,
        error::{student::StudentError, Error},
        model::db::StudentModel,
        validation::student::validate_student,
    },
};

/// Service for registering students.
///
/// Generic over the connection so it can run on its own or as part of an enrollment
/// transaction.
pub struct StudentService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentService<'a, C> {
    /// Creates a new instance of StudentService.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a student using today's UTC date as reference for date rules.
    ///
    /// See [`Self::create_student_on`].
    pub async fn create_student(&self, student: &CreateStudentDto) -> Result<StudentModel, Error> {
        self.create_student_on(student, Utc::now().date_naive())
            .await
    }

    /// Registers a student.
    ///
    /// Checks run in order and stop at the first failing step, nothing is written unless
    /// every check passes:
    /// 1. Terms of use must be accepted
    /// 2. Every field must be valid, all invalid fields are reported together
    /// 3. The CPF must not be registered
    /// 4. The e-mail must not be registered
    ///
    /// A concurrent registration with the same CPF or e-mail that wins the race is reported
    /// with the same conflict error as the checks above.
    ///
    /// # Arguments
    /// - `student` - Submitted student data
    /// - `today` - Reference date for the birth date & completion year rules
    ///
    /// # Returns
    /// - `Ok(StudentModel)` - The stored student with digits-only CPF & phone
    /// - `Err(Error::StudentError)` - Terms not accepted, CPF or e-mail already registered
    /// - `Err(Error::ValidationError)` - One or more fields are invalid
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_student_on(
        &self,
        student: &CreateStudentDto,
        today: NaiveDate,
    ) -> Result<StudentModel, Error> {
        if student.agree_to_terms != Some(true) {
            return Err(StudentError::TermsNotAccepted.into());
        }

        let new_student = validate_student(student, today)?;

        let student_repo = StudentRepository::new(self.db);

        if student_repo.find_by_cpf(&new_student.cpf).await?.is_some() {
            return Err(StudentError::CpfAlreadyRegistered.into());
        }

        if student_repo
            .find_by_email(&new_student.email)
            .await?
            .is_some()
        {
            return Err(StudentError::EmailAlreadyRegistered.into());
        }

        let student = student_repo.create(&new_student).await.map_err(|err| {
            match StudentError::from_unique_violation(&err) {
                Some(conflict) => Error::from(conflict),
                None => Error::from(err),
            }
        })?;

        tracing::info!(student_id = %student.id, "Registered new student");

        Ok(student)
    }
}
