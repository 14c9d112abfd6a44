//! Domain layer for the taskboard service: shared types, the error
//! taxonomy, and field validation rules. No I/O lives here.

pub mod error;
pub mod types;
pub mod validation;
