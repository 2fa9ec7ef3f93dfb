use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::CourseModel;

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    /// Creates a new instance of [`CourseRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every course ordered by ID
    pub async fn get_all(&self) -> Result<Vec<CourseModel>, DbErr> {
        entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, course_id: i32) -> Result<Option<CourseModel>, DbErr> {
        entity::prelude::Course::find_by_id(course_id)
            .one(self.db)
            .await
    }
}
