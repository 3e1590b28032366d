//! Domain models and operation-specific parameter types.
//!
//! Domain models sit between the data layer (SeaORM entities) and the API layer
//! (DTOs), so that database structures never leak into controllers. Parameter
//! types carry validated operation input from controllers down to repositories.

pub mod student;
