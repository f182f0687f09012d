pub mod auth;
pub mod department;
pub mod employee;
pub mod project;
pub mod timesheet;

use crate::errors::AppError;

/// Run `validator` rules on a request body, folding failures into the
/// 400 taxonomy.
pub(crate) fn validate_body(body: &impl validator::Validate) -> Result<(), AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}
