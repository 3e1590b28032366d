//! Student domain models and parameters.
//!
//! Provides the student aggregate (student row plus its location and enrolled
//! courses) and the parameter types for the multi-entity create and update
//! operations. All conversion between entity models, domain models, and DTOs
//! is written out explicitly here.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::student::{
    CreateLocationDto, CreateStudentDto, EnrolledCourseDto, EnrollmentDto, GenderDto, LocationDto,
    StudentDto, UpdateLocationDto, UpdateStudentDto,
};

/// Student gender choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub fn from_entity(entity: entity::student::Gender) -> Self {
        match entity {
            entity::student::Gender::Male => Self::Male,
            entity::student::Gender::Female => Self::Female,
            entity::student::Gender::NonBinary => Self::NonBinary,
            entity::student::Gender::Other => Self::Other,
            entity::student::Gender::PreferNotToSay => Self::PreferNotToSay,
        }
    }

    pub fn into_entity(self) -> entity::student::Gender {
        match self {
            Self::Male => entity::student::Gender::Male,
            Self::Female => entity::student::Gender::Female,
            Self::NonBinary => entity::student::Gender::NonBinary,
            Self::Other => entity::student::Gender::Other,
            Self::PreferNotToSay => entity::student::Gender::PreferNotToSay,
        }
    }

    pub fn from_dto(dto: GenderDto) -> Self {
        match dto {
            GenderDto::Male => Self::Male,
            GenderDto::Female => Self::Female,
            GenderDto::NonBinary => Self::NonBinary,
            GenderDto::Other => Self::Other,
            GenderDto::PreferNotToSay => Self::PreferNotToSay,
        }
    }

    pub fn into_dto(self) -> GenderDto {
        match self {
            Self::Male => GenderDto::Male,
            Self::Female => GenderDto::Female,
            Self::NonBinary => GenderDto::NonBinary,
            Self::Other => GenderDto::Other,
            Self::PreferNotToSay => GenderDto::PreferNotToSay,
        }
    }
}

/// Location bound to a single student (one-to-one).
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id_location: i32,
    pub postal_code: String,
    pub country: String,
    pub street: Option<String>,
    pub district: Option<String>,
    pub number: i32,
    pub complement: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub student_fk: i32,
}

impl Location {
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            id_location: entity.id_location,
            postal_code: entity.postal_code,
            country: entity.country,
            street: entity.street,
            district: entity.district,
            number: entity.number,
            complement: entity.complement,
            city: entity.city,
            state: entity.state,
            student_fk: entity.student_fk,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            id_location: self.id_location,
            postal_code: self.postal_code,
            country: self.country,
            street: self.street,
            district: self.district,
            number: self.number,
            complement: self.complement,
            city: self.city,
            state: self.state,
            student_fk: self.student_fk,
        }
    }
}

/// A course the student is enrolled in, with the join attribute projected.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrolledCourse {
    pub id_course: i32,
    pub name: String,
    pub conclusion_date: Option<NaiveDate>,
}

impl EnrolledCourse {
    pub fn into_dto(self) -> EnrolledCourseDto {
        EnrolledCourseDto {
            id_course: self.id_course,
            name: self.name,
            conclusion_date: self.conclusion_date,
        }
    }
}

/// Student aggregate with its location and enrolled courses.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id_student: i32,
    pub name: String,
    pub lastname: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub cpf: Option<String>,
    pub gender: Option<Gender>,
    pub email: String,
    pub register_date: DateTime<Utc>,
    pub location: Option<Location>,
    pub courses: Vec<EnrolledCourse>,
}

impl Student {
    /// Assembles the aggregate from the student row and its relations.
    ///
    /// Enrollment rows whose course side is missing are dropped; the join table
    /// holds a foreign key, so this only happens on unmatched `find_also_related`
    /// results.
    pub fn from_entity(
        entity: entity::student::Model,
        location: Option<entity::location::Model>,
        enrollments: Vec<(
            entity::student_course::Model,
            Option<entity::course::Model>,
        )>,
    ) -> Self {
        let courses = enrollments
            .into_iter()
            .filter_map(|(enrollment, course)| {
                course.map(|course| EnrolledCourse {
                    id_course: course.id_course,
                    name: course.name,
                    conclusion_date: enrollment.conclusion_date,
                })
            })
            .collect();

        Self {
            id_student: entity.id_student,
            name: entity.name,
            lastname: entity.lastname,
            birthdate: entity.birthdate,
            cpf: entity.cpf,
            gender: entity.gender.map(Gender::from_entity),
            email: entity.email,
            register_date: entity.register_date,
            location: location.map(Location::from_entity),
            courses,
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id_student: self.id_student,
            name: self.name,
            lastname: self.lastname,
            birthdate: self.birthdate,
            cpf: self.cpf,
            gender: self.gender.map(Gender::into_dto),
            email: self.email,
            register_date: self.register_date,
            location: self.location.map(Location::into_dto),
            courses: self.courses.into_iter().map(EnrolledCourse::into_dto).collect(),
        }
    }
}

/// Location payload for student creation.
#[derive(Debug, Clone)]
pub struct CreateLocationParam {
    pub postal_code: String,
    pub country: String,
    pub street: Option<String>,
    pub district: Option<String>,
    pub number: i32,
    pub complement: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl CreateLocationParam {
    pub fn from_dto(dto: CreateLocationDto) -> Self {
        Self {
            postal_code: dto.postal_code,
            country: dto.country,
            street: dto.street,
            district: dto.district,
            number: dto.number,
            complement: dto.complement,
            city: dto.city,
            state: dto.state,
        }
    }
}

/// One requested course enrollment; the course id may not resolve to a record.
#[derive(Debug, Clone)]
pub struct EnrollmentParam {
    pub course_id: i32,
    pub conclusion_date: Option<NaiveDate>,
}

impl EnrollmentParam {
    pub fn from_dto(dto: EnrollmentDto) -> Self {
        Self {
            course_id: dto.course_id,
            conclusion_date: dto.conclusion_date,
        }
    }
}

/// Parameters for creating a student with its location and enrollments.
#[derive(Debug, Clone)]
pub struct CreateStudentParam {
    pub name: String,
    pub lastname: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub cpf: Option<String>,
    pub gender: Option<Gender>,
    pub email: String,
    pub location: CreateLocationParam,
    pub courses: Vec<EnrollmentParam>,
}

impl CreateStudentParam {
    pub fn from_dto(dto: CreateStudentDto) -> Self {
        Self {
            name: dto.name,
            lastname: dto.lastname,
            birthdate: dto.birthdate,
            cpf: dto.cpf,
            gender: dto.gender.map(Gender::from_dto),
            email: dto.email,
            location: CreateLocationParam::from_dto(dto.location),
            courses: dto.courses.into_iter().map(EnrollmentParam::from_dto).collect(),
        }
    }
}

/// Partial location payload for student updates.
///
/// Fields left as `None` keep their current value when a location already
/// exists; when one has to be created, the required columns must be present.
#[derive(Debug, Clone)]
pub struct UpdateLocationParam {
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub street: Option<String>,
    pub district: Option<String>,
    pub number: Option<i32>,
    pub complement: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl UpdateLocationParam {
    pub fn from_dto(dto: UpdateLocationDto) -> Self {
        Self {
            postal_code: dto.postal_code,
            country: dto.country,
            street: dto.street,
            district: dto.district,
            number: dto.number,
            complement: dto.complement,
            city: dto.city,
            state: dto.state,
        }
    }
}

/// Parameters for updating a student.
///
/// Scalar fields left as `None` are not touched. A present `courses` list with
/// at least one entry replaces all existing enrollments; an absent or empty
/// list leaves them unchanged.
#[derive(Debug, Clone)]
pub struct UpdateStudentParam {
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub cpf: Option<String>,
    pub gender: Option<Gender>,
    pub email: Option<String>,
    pub location: Option<UpdateLocationParam>,
    pub courses: Option<Vec<EnrollmentParam>>,
}

impl UpdateStudentParam {
    pub fn from_dto(dto: UpdateStudentDto) -> Self {
        Self {
            name: dto.name,
            lastname: dto.lastname,
            birthdate: dto.birthdate,
            cpf: dto.cpf,
            gender: dto.gender.map(Gender::from_dto),
            email: dto.email,
            location: dto.location.map(UpdateLocationParam::from_dto),
            courses: dto
                .courses
                .map(|courses| courses.into_iter().map(EnrollmentParam::from_dto).collect()),
        }
    }
}
