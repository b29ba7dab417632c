//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod field_error;

pub use config_warning::ConfigWarning;
pub use field_error::{FieldError, FieldErrorKind, FieldErrors};
