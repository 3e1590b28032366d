//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle foreign key relationships,
//! making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let student = factory::student::create_student(&db).await?;
//!     let course = factory::course::create_course(&db).await?;
//!
//!     // Create a student with location and an enrollment
//!     let location = factory::location::create_location(&db, student.id_student).await?;
//!     let enrollment =
//!         factory::student_course::create_enrollment(&db, student.id_student, course.id_course)
//!             .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db)
//!     .name("Ada")
//!     .email("ada@example.com")
//!     .cpf("123.456.789-00")
//!     .build()
//!     .await?;
//! ```

pub mod course;
pub mod helpers;
pub mod location;
pub mod student;
pub mod student_course;

// Re-export commonly used factory functions for concise usage
pub use course::{create_course, create_course_with_name};
pub use location::create_location;
pub use student::create_student;
pub use student_course::{create_enrollment, create_enrollment_with_date};
