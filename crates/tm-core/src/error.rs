//! Core error types for the Transfermarkt catalog
//!
//! The query pipeline itself never fails; these errors only come from the
//! edges (loading, persisting, lookups by id, edit validation).

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Core error type for all catalog operations
#[derive(Error, Debug)]
pub enum TmError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TmError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        TmError::NotFound {
            entity,
            field: "id",
            value: id.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        TmError::Forbidden {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            TmError::NotFound { .. } => "not_found",
            TmError::Forbidden { .. } => "forbidden",
            TmError::Validation(_) => "validation_failed",
            TmError::Storage(_) => "storage_error",
            TmError::ExternalService { .. } => "external_service_error",
            TmError::Config(_) => "configuration_error",
            TmError::Internal(_) => "internal_error",
        }
    }

    /// Process exit code for command-line front ends
    pub fn exit_code(&self) -> i32 {
        match self {
            TmError::NotFound { .. } => 2,
            TmError::Forbidden { .. } => 3,
            TmError::Validation(_) => 4,
            TmError::Config(_) => 78,
            TmError::Storage(_) | TmError::ExternalService { .. } => 74,
            TmError::Internal(_) => 70,
        }
    }
}

/// Validation errors collection
///
/// Field messages are kept in a sorted map so `full_messages` is stable.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationErrors {
    /// Field-specific errors: field_name -> Vec<error_messages>
    pub errors: BTreeMap<String, Vec<String>>,
    /// Base errors not tied to a specific field
    pub base_errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn add_base(&mut self, message: impl Into<String>) {
        self.base_errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.base_errors.is_empty()
    }

    /// Check if there are errors for a specific field
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get errors for a specific field
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
        self.base_errors.extend(other.base_errors);
    }

    pub fn full_messages(&self) -> Vec<String> {
        let mut messages = self.base_errors.clone();
        for (field, field_messages) in &self.errors {
            for msg in field_messages {
                messages.push(format!("{} {}", field, msg));
            }
        }
        messages
    }

    /// `Ok(())` when empty, otherwise the collected errors
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}
