use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::InstallmentPlanModel;

pub struct InstallmentPlanRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InstallmentPlanRepository<'a, C> {
    /// Creates a new instance of [`InstallmentPlanRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the installment plans of a course, fewest installments first
    ///
    /// Plans with the same installment count are ordered by ID. Returns an empty list for
    /// unknown courses.
    pub async fn get_by_course_id(
        &self,
        course_id: i32,
    ) -> Result<Vec<InstallmentPlanModel>, DbErr> {
        entity::prelude::InstallmentPlan::find()
            .filter(entity::installment_plan::Column::CourseId.eq(course_id))
            .order_by_asc(entity::installment_plan::Column::Installments)
            .order_by_asc(entity::installment_plan::Column::Id)
            .all(self.db)
            .await
    }
}
