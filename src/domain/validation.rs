use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidEmail { input: String },
    InvalidPhoneNumber { input: String },
    RaggedImportRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    TooManyImportRows { max: usize, actual: usize },
    TooManyRecipients { max: usize, actual: usize },
    MissingEnvVar { name: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidEmail { input } => write!(f, "invalid email address: {input}"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::RaggedImportRow {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "import row {row} has {actual} values (expected {expected})"
                )
            }
            Self::TooManyImportRows { max, actual } => {
                write!(f, "too many import rows: {actual} (max {max})")
            }
            Self::TooManyRecipients { max, actual } => {
                write!(f, "too many recipients: {actual} (max {max})")
            }
            Self::MissingEnvVar { name } => {
                write!(f, "environment variable {name} is not set")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim surrounding whitespace; reject what is left if empty.
pub(crate) fn trimmed(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, ValidationError> {
    let value = value.into();
    match value.trim() {
        "" => Err(ValidationError::Empty { field }),
        trimmed => Ok(trimmed.to_owned()),
    }
}

pub(crate) fn non_empty(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, ValidationError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}
