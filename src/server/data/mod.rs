//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models or entity models at their boundary. All database queries, inserts, updates,
//! and deletes are performed through these repositories.

pub mod course;
pub mod student;
pub mod student_course;
