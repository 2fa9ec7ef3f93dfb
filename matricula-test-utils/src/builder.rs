//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{CourseModel, StudentModel},
    TestContext,
};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
#[derive(Default)]
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_course_tables: bool,
    include_enrollment_tables: bool,

    // Database fixtures to insert
    courses: Vec<CourseModel>,
    installment_plans: Vec<(i32, i32, f64)>, // (course_id, installments, installment_value)
    students: Vec<StudentModel>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the course catalog tables: Course & InstallmentPlan.
    pub fn with_course_tables(mut self) -> Self {
        self.include_course_tables = true;
        self
    }

    /// Add every table: Course, InstallmentPlan, Student & Enrollment.
    pub fn with_enrollment_tables(mut self) -> Self {
        self.include_enrollment_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use matricula_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), matricula_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Course)
    ///     .with_table(Student)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a course into the database.
    pub fn with_course(mut self, course: CourseModel) -> Self {
        self.courses.push(course);
        self
    }

    /// Insert a mock on-campus course with every pricing field set.
    pub fn with_mock_course(self, course_id: i32) -> Self {
        self.with_course(factory::mock_course_model(course_id))
    }

    /// Insert a mock distance learning course without a period.
    pub fn with_mock_distance_course(self, course_id: i32) -> Self {
        self.with_course(factory::mock_distance_course_model(course_id))
    }

    /// Insert an installment plan for a course.
    ///
    /// Plans are inserted after courses, in the order they were added.
    pub fn with_installment_plan(
        mut self,
        course_id: i32,
        installments: i32,
        installment_value: f64,
    ) -> Self {
        self.installment_plans
            .push((course_id, installments, installment_value));
        self
    }

    /// Insert a student into the database.
    pub fn with_student(mut self, student: StudentModel) -> Self {
        self.students.push(student);
        self
    }

    /// Insert a mock student with CPF & e-mail derived from `seed`.
    pub fn with_mock_student(self, seed: u32) -> Self {
        self.with_student(factory::mock_student_model(seed))
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in order:
    /// 1. Create database tables
    /// 2. Insert courses, installment plans & students
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_course_tables || self.include_enrollment_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Course),
                schema.create_table_from_entity(entity::prelude::InstallmentPlan),
            ]);
        }

        if self.include_enrollment_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Student),
                schema.create_table_from_entity(entity::prelude::Enrollment),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for course in self.courses {
            setup.course().insert_course(course).await?;
        }

        for (course_id, installments, installment_value) in self.installment_plans {
            setup
                .course()
                .insert_installment_plan(course_id, installments, installment_value)
                .await?;
        }

        for student in self.students {
            setup.student().insert_student(student).await?;
        }

        Ok(setup)
    }
}
