use sea_orm::DatabaseConnection;

use crate::{
    model::course::{CourseDto, InstallmentPlanDto},
    server::{
        data::{course::CourseRepository, installment_plan::InstallmentPlanRepository},
        error::Error,
        model::db::CourseModel,
    },
};

/// Service for the read-only course catalog.
pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    /// Creates a new instance of CourseService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every course ordered by ID.
    ///
    /// A course's pricing columns are expected to be all set or all null. Courses breaking
    /// that rule are still returned as stored and logged so the catalog data can be fixed.
    ///
    /// # Returns
    /// - `Ok(Vec<CourseDto>)` - All courses, empty if the catalog is empty
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_courses(&self) -> Result<Vec<CourseDto>, Error> {
        let course_repo = CourseRepository::new(self.db);

        let courses = course_repo.get_all().await?;

        for course in courses.iter().filter(|course| has_partial_pricing(course)) {
            tracing::warn!(
                course_id = %course.id,
                "Course has partially populated pricing, expected original price, installment price, installments & cash price to be all set or all empty"
            );
        }

        Ok(courses.into_iter().map(CourseDto::from).collect())
    }

    /// Lists the installment plans of a course, fewest installments first.
    ///
    /// The course is not required to exist, an unknown course simply has no plans.
    pub async fn get_installment_plans(
        &self,
        course_id: i32,
    ) -> Result<Vec<InstallmentPlanDto>, Error> {
        let plan_repo = InstallmentPlanRepository::new(self.db);

        let plans = plan_repo.get_by_course_id(course_id).await?;

        Ok(plans.into_iter().map(InstallmentPlanDto::from).collect())
    }
}

fn has_partial_pricing(course: &CourseModel) -> bool {
    let populated = [
        course.original_price.is_some(),
        course.installment_price.is_some(),
        course.installments.is_some(),
        course.cash_price.is_some(),
    ];

    populated.iter().any(|&set| set) && !populated.iter().all(|&set| set)
}

#[cfg(test)]
mod tests {

    mod get_courses {
        use matricula_test_utils::prelude::*;

        use crate::{
            model::course::{CourseLocationDto, CourseTypeDto},
            server::{error::Error, service::course::CourseService},
        };

        /// Expect location columns to be nested & the course type to be mapped
        #[tokio::test]
        async fn maps_courses_to_dtos() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_course_tables()
                .with_mock_course(1)
                .with_mock_distance_course(2)
                .build()
                .await?;

            let course_service = CourseService::new(&test.db);
            let courses = course_service.get_courses().await.unwrap();

            assert_eq!(courses.len(), 2);
            assert_eq!(courses[0].course_type, CourseTypeDto::Presencial);
            assert_eq!(
                courses[0].location,
                CourseLocationDto {
                    city: "Campinas".to_string(),
                    unit: "Vila Industrial".to_string(),
                    address: "Rua Dr. Sales de Oliveira, nº 1661 - Vila Industrial - Campinas"
                        .to_string(),
                }
            );
            assert_eq!(courses[1].course_type, CourseTypeDto::EaD);
            assert_eq!(courses[1].period, None);
            assert_eq!(courses[1].original_price, None);
            assert_eq!(courses[1].cash_price, None);

            Ok(())
        }

        /// Expect a course with partially populated pricing to be returned unchanged
        #[tokio::test]
        async fn returns_partially_priced_course() -> Result<(), TestError> {
            let mut course = factory::mock_course_model(1);
            course.cash_price = None;
            let test = TestBuilder::new()
                .with_course_tables()
                .with_course(course)
                .build()
                .await?;

            let course_service = CourseService::new(&test.db);
            let courses = course_service.get_courses().await.unwrap();

            assert_eq!(courses.len(), 1);
            assert_eq!(courses[0].cash_price, None);
            assert!(courses[0].original_price.is_some());

            Ok(())
        }

        /// Expect Error when required tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let course_service = CourseService::new(&test.db);
            let result = course_service.get_courses().await;

            assert!(matches!(result, Err(Error::DbErr(_))));

            Ok(())
        }
    }

    mod get_installment_plans {
        use matricula_test_utils::prelude::*;

        use crate::server::service::course::CourseService;

        #[tokio::test]
        async fn returns_plans_ordered_by_installments() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_course_tables()
                .with_mock_course(1)
                .with_installment_plan(1, 18, 169.95)
                .with_installment_plan(1, 1, 2613.6)
                .build()
                .await?;

            let course_service = CourseService::new(&test.db);
            let plans = course_service.get_installment_plans(1).await.unwrap();

            assert_eq!(plans.len(), 2);
            assert_eq!(plans[0].installments, 1);
            assert_eq!(plans[1].installments, 18);
            assert_eq!(plans[1].installment_value, 169.95);

            Ok(())
        }

        /// Expect an empty list for a course that has no plans
        #[tokio::test]
        async fn returns_empty_list_for_course_without_plans() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_course_tables()
                .with_mock_course(1)
                .build()
                .await?;

            let course_service = CourseService::new(&test.db);
            let plans = course_service.get_installment_plans(1).await.unwrap();

            assert!(plans.is_empty());

            Ok(())
        }
    }

    mod has_partial_pricing {
        use matricula_test_utils::prelude::*;

        use crate::server::service::course::has_partial_pricing;

        #[test]
        fn detects_partial_pricing() {
            let full = factory::mock_course_model(1);
            assert!(!has_partial_pricing(&full));

            let mut none = factory::mock_course_model(1);
            none.original_price = None;
            none.installment_price = None;
            none.installments = None;
            none.cash_price = None;
            assert!(!has_partial_pricing(&none));

            let mut partial = factory::mock_course_model(1);
            partial.installments = None;
            assert!(has_partial_pricing(&partial));
        }
    }
}
