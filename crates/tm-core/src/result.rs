//! Result type aliases and service result pattern

use crate::error::{TmError, ValidationErrors};

/// Standard Result type for catalog operations
pub type TmResult<T> = Result<T, TmError>;

/// Outcome of a write service
///
/// Carries either the resulting value or the validation errors that stopped
/// the operation.
#[derive(Debug)]
pub struct ServiceResult<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// The result value (if successful)
    pub result: Option<T>,
    /// Errors (if failed)
    pub errors: ValidationErrors,
}

impl<T> ServiceResult<T> {
    /// Create a successful result
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: ValidationErrors::new(),
        }
    }

    /// Create a failed result with errors
    pub fn failure(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            result: None,
            errors,
        }
    }

    /// Create a failed result with a single base error message
    pub fn failure_with_message(message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add_base(message);
        Self::failure(errors)
    }

    /// Create a failed result with a single field error
    pub fn failure_on(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, message);
        Self::failure(errors)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }

    /// Borrow the result value
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Map the result value
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ServiceResult<U> {
        ServiceResult {
            success: self.success,
            result: self.result.map(f),
            errors: self.errors,
        }
    }

    /// Convert to standard Result
    pub fn into_result(self) -> TmResult<T> {
        if self.success {
            self.result.ok_or_else(|| {
                TmError::Internal("ServiceResult success but no result value".into())
            })
        } else {
            Err(TmError::Validation(self.errors))
        }
    }
}

impl<T> From<TmResult<T>> for ServiceResult<T> {
    fn from(result: TmResult<T>) -> Self {
        match result {
            Ok(value) => ServiceResult::success(value),
            Err(TmError::Validation(errors)) => ServiceResult::failure(errors),
            Err(e) => ServiceResult::failure_with_message(e.to_string()),
        }
    }
}
