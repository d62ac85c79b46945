use super::error::{ValidationError, ValidationKind};
use super::types::IntakeSubmission;

/// A required text field of the intake form.
struct RequiredField {
    column: &'static str,
    label: &'static str,
    max_chars: usize,
    value: fn(&IntakeSubmission) -> &str,
}

const REQUIRED_FIELDS: [RequiredField; 6] = [
    RequiredField {
        column: "sender_name",
        label: "Sender's Name",
        max_chars: 100,
        value: |s| s.sender_name.as_str(),
    },
    RequiredField {
        column: "sender_phone",
        label: "Sender's Phone",
        max_chars: 25,
        value: |s| s.sender_phone.as_str(),
    },
    RequiredField {
        column: "recipient_name_zh",
        label: "Recipient's Name",
        max_chars: 100,
        value: |s| s.recipient_name_zh.as_str(),
    },
    RequiredField {
        column: "recipient_id_number",
        label: "Recipient's ID",
        max_chars: 20,
        value: |s| s.recipient_id_number.as_str(),
    },
    RequiredField {
        column: "recipient_address_zh",
        label: "Recipient's Address",
        max_chars: 200,
        value: |s| s.recipient_address_zh.as_str(),
    },
    RequiredField {
        column: "recipient_phone",
        label: "Recipient's Phone",
        max_chars: 25,
        value: |s| s.recipient_phone.as_str(),
    },
];

/// Form label for a column name, if it is one of the required fields.
pub fn field_label(column: &str) -> Option<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .find(|f| f.column == column)
        .map(|f| f.label)
}

/// Validate an intake submission before it is persisted.
/// Returns all validation errors found (not just the first).
pub fn validate_submission(submission: &IntakeSubmission) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for field in &REQUIRED_FIELDS {
        let value = (field.value)(submission).trim();
        if value.is_empty() {
            errors.push(ValidationError::required(field.column, field.label));
        } else if value.chars().count() > field.max_chars {
            errors.push(ValidationError::new(
                field.column,
                format!(
                    "{} must be at most {} characters",
                    field.label, field.max_chars
                ),
                ValidationKind::TooLong {
                    max: field.max_chars,
                },
            ));
        }
    }

    if !submission.requirements_acknowledged {
        errors.push(ValidationError::new(
            "recipient_requirements_ack",
            "recipient must acknowledge the EZWAY requirements before submission",
            ValidationKind::NotAcknowledged,
        ));
    }

    errors
}
