//! Student data repository for database operations.
//!
//! This module provides the `StudentRepository` for managing student records
//! together with their one-to-one location and their course enrollments. The
//! multi-entity create and update sequences run inside a single transaction so
//! a failure partway through rolls every earlier write back.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::student::{
    CreateStudentParam, Gender, Student, UpdateLocationParam, UpdateStudentParam,
};

/// Repository providing database operations for the student aggregate.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a student with its location and course enrollments.
    ///
    /// All writes happen in one transaction. Each entry in `param.courses` is
    /// resolved against the course table first; entries whose course id does
    /// not exist are skipped without failing the request.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created aggregate, without re-querying relations
    /// - `Err(DbErr)` - Constraint violation (duplicate email/cpf) or any other
    ///   persistence failure; nothing is left behind in the database
    pub async fn create(&self, param: CreateStudentParam) -> Result<Student, DbErr> {
        let txn = self.db.begin().await?;

        let student = entity::student::ActiveModel {
            name: ActiveValue::Set(param.name),
            lastname: ActiveValue::Set(param.lastname),
            birthdate: ActiveValue::Set(param.birthdate),
            cpf: ActiveValue::Set(param.cpf),
            gender: ActiveValue::Set(param.gender.map(Gender::into_entity)),
            email: ActiveValue::Set(param.email),
            register_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let location = entity::location::ActiveModel {
            postal_code: ActiveValue::Set(param.location.postal_code),
            country: ActiveValue::Set(param.location.country),
            street: ActiveValue::Set(param.location.street),
            district: ActiveValue::Set(param.location.district),
            number: ActiveValue::Set(param.location.number),
            complement: ActiveValue::Set(param.location.complement),
            city: ActiveValue::Set(param.location.city),
            state: ActiveValue::Set(param.location.state),
            student_fk: ActiveValue::Set(student.id_student),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut enrollments = Vec::new();
        for enrollment in param.courses {
            // Course ids that do not resolve are skipped, not surfaced as errors.
            let Some(course) = entity::prelude::Course::find_by_id(enrollment.course_id)
                .one(&txn)
                .await?
            else {
                continue;
            };

            let row = entity::prelude::StudentCourse::insert(entity::student_course::ActiveModel {
                student_id: ActiveValue::Set(student.id_student),
                course_id: ActiveValue::Set(course.id_course),
                conclusion_date: ActiveValue::Set(enrollment.conclusion_date),
            })
            .exec_with_returning(&txn)
            .await?;

            enrollments.push((row, Some(course)));
        }

        txn.commit().await?;

        Ok(Student::from_entity(student, Some(location), enrollments))
    }

    /// Gets a student row by id without relations
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(id).one(self.db).await
    }

    /// Gets all students with their location and enrolled courses
    pub async fn get_all_with_relations(&self) -> Result<Vec<Student>, DbErr> {
        let students = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::IdStudent)
            .all(self.db)
            .await?;

        let mut result = Vec::new();
        for student in students {
            result.push(self.load_relations(student).await?);
        }

        Ok(result)
    }

    /// Gets a student by id with location and enrolled courses
    pub async fn get_by_id_with_relations(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let Some(student) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(self.load_relations(student).await?))
    }

    /// Applies scalar, location and enrollment updates in one transaction.
    ///
    /// The caller is expected to have loaded the student row already (the 404
    /// case is handled before this is reached). A present location payload
    /// updates the existing location or creates one if the student has none.
    /// A non-empty courses list replaces all existing enrollments: current
    /// association rows are deleted, then one row is inserted per entry whose
    /// course id resolves.
    pub async fn update(
        &self,
        student: entity::student::Model,
        param: UpdateStudentParam,
    ) -> Result<(), DbErr> {
        let id = student.id_student;
        let txn = self.db.begin().await?;

        let mut active_model: entity::student::ActiveModel = student.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(lastname) = param.lastname {
            active_model.lastname = ActiveValue::Set(Some(lastname));
        }
        if let Some(birthdate) = param.birthdate {
            active_model.birthdate = ActiveValue::Set(Some(birthdate));
        }
        if let Some(cpf) = param.cpf {
            active_model.cpf = ActiveValue::Set(Some(cpf));
        }
        if let Some(gender) = param.gender {
            active_model.gender = ActiveValue::Set(Some(gender.into_entity()));
        }
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if active_model.is_changed() {
            active_model.update(&txn).await?;
        }

        if let Some(location) = param.location {
            upsert_location(&txn, id, location).await?;
        }

        if let Some(enrollments) = param.courses.filter(|courses| !courses.is_empty()) {
            entity::prelude::StudentCourse::delete_many()
                .filter(entity::student_course::Column::StudentId.eq(id))
                .exec(&txn)
                .await?;

            for enrollment in enrollments {
                let Some(course) = entity::prelude::Course::find_by_id(enrollment.course_id)
                    .one(&txn)
                    .await?
                else {
                    continue;
                };

                entity::prelude::StudentCourse::insert(entity::student_course::ActiveModel {
                    student_id: ActiveValue::Set(id),
                    course_id: ActiveValue::Set(course.id_course),
                    conclusion_date: ActiveValue::Set(enrollment.conclusion_date),
                })
                .exec_with_returning(&txn)
                .await?;
            }
        }

        txn.commit().await?;

        Ok(())
    }

    /// Deletes a student, returning whether a row was removed.
    ///
    /// The student's location is removed by the schema-level cascade, not here.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn load_relations(&self, student: entity::student::Model) -> Result<Student, DbErr> {
        let location = student
            .find_related(entity::prelude::Location)
            .one(self.db)
            .await?;

        let enrollments = entity::prelude::StudentCourse::find()
            .filter(entity::student_course::Column::StudentId.eq(student.id_student))
            .find_also_related(entity::prelude::Course)
            .all(self.db)
            .await?;

        Ok(Student::from_entity(student, location, enrollments))
    }
}

/// Updates the student's existing location or creates one bound to them.
///
/// Creating from a partial payload requires the not-null columns; a missing
/// required field surfaces as a `DbErr` the same way a NOT NULL violation would.
async fn upsert_location(
    txn: &DatabaseTransaction,
    student_id: i32,
    param: UpdateLocationParam,
) -> Result<(), DbErr> {
    let existing = entity::prelude::Location::find()
        .filter(entity::location::Column::StudentFk.eq(student_id))
        .one(txn)
        .await?;

    match existing {
        Some(location) => {
            let mut active_model: entity::location::ActiveModel = location.into();
            if let Some(postal_code) = param.postal_code {
                active_model.postal_code = ActiveValue::Set(postal_code);
            }
            if let Some(country) = param.country {
                active_model.country = ActiveValue::Set(country);
            }
            if let Some(street) = param.street {
                active_model.street = ActiveValue::Set(Some(street));
            }
            if let Some(district) = param.district {
                active_model.district = ActiveValue::Set(Some(district));
            }
            if let Some(number) = param.number {
                active_model.number = ActiveValue::Set(number);
            }
            if let Some(complement) = param.complement {
                active_model.complement = ActiveValue::Set(Some(complement));
            }
            if let Some(city) = param.city {
                active_model.city = ActiveValue::Set(Some(city));
            }
            if let Some(state) = param.state {
                active_model.state = ActiveValue::Set(Some(state));
            }
            if active_model.is_changed() {
                active_model.update(txn).await?;
            }
        }
        None => {
            entity::location::ActiveModel {
                postal_code: ActiveValue::Set(require_field(param.postal_code, "postal_code")?),
                country: ActiveValue::Set(require_field(param.country, "country")?),
                street: ActiveValue::Set(param.street),
                district: ActiveValue::Set(param.district),
                number: ActiveValue::Set(require_field(param.number, "number")?),
                complement: ActiveValue::Set(param.complement),
                city: ActiveValue::Set(param.city),
                state: ActiveValue::Set(param.state),
                student_fk: ActiveValue::Set(student_id),
                ..Default::default()
            }
            .insert(txn)
            .await?;
        }
    }

    Ok(())
}

fn require_field<T>(value: Option<T>, column: &str) -> Result<T, DbErr> {
    value.ok_or_else(|| DbErr::Custom(format!("location {column} cannot be null")))
}
