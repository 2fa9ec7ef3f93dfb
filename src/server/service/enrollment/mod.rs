//! Enrollment workflow.
//!
//! An enrollment registers a new student and links them to a course with the chosen
//! payment terms. Both records are written in one transaction.


use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::enrollment::{CreateEnrollmentDto, EnrollmentWithStudentDto},
    server::{
        data::{course::CourseRepository, enrollment::EnrollmentRepository},
        error::{course::CourseError, Error},
        service::student::StudentService,
        validation::payment::validate_payment_info,
    },
};

/// Service for enrolling new students in courses.
pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentService<'a> {
    /// Creates a new instance of EnrollmentService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls a new student using today's UTC date as reference for date rules.
    ///
    /// See [`Self::create_enrollment_on`].
    pub async fn create_enrollment(
        &self,
        enrollment: CreateEnrollmentDto,
    ) -> Result<EnrollmentWithStudentDto, Error> {
        self.create_enrollment_on(enrollment, Utc::now().date_naive())
            .await
    }

    /// Enrolls a new student in a course.
    ///
    /// The payment terms are validated and the course looked up before anything is written.
    /// The student is then registered following [`StudentService::create_student_on`] and the
    /// enrollment stored, both inside a single transaction: if either write fails neither
    /// record is kept.
    ///
    /// # Arguments
    /// - `enrollment` - Student data & payment info
    /// - `today` - Reference date for the student's date rules
    ///
    /// # Returns
    /// - `Ok(EnrollmentWithStudentDto)` - The stored student & enrollment
    /// - `Err(Error::ValidationError)` - Invalid payment info or student fields
    /// - `Err(Error::CourseError)` - Course does not exist
    /// - `Err(Error::StudentError)` - Terms not accepted, CPF or e-mail already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_enrollment_on(
        &self,
        enrollment: CreateEnrollmentDto,
        today: NaiveDate,
    ) -> Result<EnrollmentWithStudentDto, Error> {
        let payment_terms = validate_payment_info(&enrollment.payment_info)?;

        let course_repo = CourseRepository::new(self.db);
        let course = course_repo
            .get_by_id(payment_terms.course_id)
            .await?
            .ok_or(CourseError::NotFound(payment_terms.course_id))?;

        let txn = self.db.begin().await?;

        let student = StudentService::new(&txn)
            .create_student_on(&enrollment.student, today)
            .await?;

        let enrollment = EnrollmentRepository::new(&txn)
            .create(
                student.id,
                course.id,
                payment_terms.installment_plan.as_ref(),
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            enrollment_id = %enrollment.id,
            student_id = %student.id,
            course_id = %course.id,
            "Enrolled student in course"
        );

        Ok(EnrollmentWithStudentDto {
            student: student.into(),
            enrollment: enrollment.into(),
        })
    }
}
