//! Student-course association repository for database operations.
//!
//! This module provides the `StudentCourseRepository` for managing the
//! many-to-many relationship between students and courses. Rows are addressed
//! by their composite key (student id, course id) and carry the optional
//! `conclusion_date` join attribute.

use chrono::NaiveDate;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct StudentCourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentCourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an association row.
    ///
    /// Does not check for an existing pair; a duplicate (student, course)
    /// combination or a dangling foreign key fails with a database error.
    pub async fn create(
        &self,
        student_id: i32,
        course_id: i32,
        conclusion_date: Option<NaiveDate>,
    ) -> Result<entity::student_course::Model, DbErr> {
        entity::prelude::StudentCourse::insert(entity::student_course::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            course_id: ActiveValue::Set(course_id),
            conclusion_date: ActiveValue::Set(conclusion_date),
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Gets all association rows, without expanding either side
    pub async fn get_all(&self) -> Result<Vec<entity::student_course::Model>, DbErr> {
        entity::prelude::StudentCourse::find()
            .order_by_asc(entity::student_course::Column::StudentId)
            .order_by_asc(entity::student_course::Column::CourseId)
            .all(self.db)
            .await
    }

    /// Gets the unique association row matching both keys
    pub async fn get_by_keys(
        &self,
        student_id: i32,
        course_id: i32,
    ) -> Result<Option<entity::student_course::Model>, DbErr> {
        entity::prelude::StudentCourse::find_by_id((student_id, course_id))
            .one(self.db)
            .await
    }

    /// Updates an association row, allowing the composite key itself to move.
    ///
    /// The row is addressed by its current keys; an absent `conclusion_date`
    /// keeps the stored value. Repointing onto an already existing pair fails
    /// with a database error.
    pub async fn update(
        &self,
        existing: entity::student_course::Model,
        new_student_id: i32,
        new_course_id: i32,
        conclusion_date: Option<NaiveDate>,
    ) -> Result<entity::student_course::Model, DbErr> {
        let conclusion_date = conclusion_date.or(existing.conclusion_date);

        entity::prelude::StudentCourse::update_many()
            .filter(entity::student_course::Column::StudentId.eq(existing.student_id))
            .filter(entity::student_course::Column::CourseId.eq(existing.course_id))
            .col_expr(
                entity::student_course::Column::StudentId,
                Expr::value(new_student_id),
            )
            .col_expr(
                entity::student_course::Column::CourseId,
                Expr::value(new_course_id),
            )
            .col_expr(
                entity::student_course::Column::ConclusionDate,
                Expr::value(conclusion_date),
            )
            .exec(self.db)
            .await?;

        self.get_by_keys(new_student_id, new_course_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Association ({}, {}) not found after update",
                new_student_id, new_course_id
            )))
    }

    /// Deletes an association row, returning whether a row was removed
    pub async fn delete(&self, student_id: i32, course_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::StudentCourse::delete_by_id((student_id, course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
