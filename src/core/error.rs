use thiserror::Error;

/// Errors that can occur while taking intake submissions, reading the
/// record store, or building and rendering invoices.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeskError {
    /// One or more fields failed validation. Nothing was persisted.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// The backing file exists but could not be read or parsed.
    #[error("storage read error: {0}")]
    StorageRead(String),

    /// The backing file could not be created or rewritten.
    #[error("storage write error: {0}")]
    StorageWrite(String),

    /// Customer ID allocation error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// A lookup was attempted with a blank query.
    #[error("search query must not be empty")]
    EmptyQuery,

    /// Builder or edit operation received invalid input.
    #[error("builder error: {0}")]
    Builder(String),

    /// PDF or DOCX serialization error.
    #[error("render error: {0}")]
    Render(String),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),
}

impl DeskError {
    /// Field names named by a [`DeskError::Validation`], in report order.
    /// Empty for every other variant.
    pub fn invalid_fields(&self) -> Vec<&str> {
        match self {
            Self::Validation(errors) => errors.iter().map(|e| e.field.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// What went wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// Required text field is empty after trimming.
    Required,
    /// The recipient requirements were not acknowledged.
    NotAcknowledged,
    /// Field exceeds its maximum length in characters.
    TooLong { max: usize },
    /// Numeric field is below zero.
    Negative,
}

/// A single validation error with field name and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Column name or dot-separated path (e.g. "lines.0.amount").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    pub kind: ValidationKind,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, kind: ValidationKind) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind,
        }
    }

    /// Shorthand for a [`ValidationKind::Required`] error.
    pub fn required(field: impl Into<String>, label: &str) -> Self {
        Self::new(
            field,
            format!("{label} must not be empty"),
            ValidationKind::Required,
        )
    }
}
