use super::error::DeskError;
use super::types::{ContactMethod, IntakeSubmission};
use super::validation;

/// Builder for intake submissions.
///
/// ```
/// use shipdesk::core::*;
///
/// let submission = IntakeSubmissionBuilder::new("Amy Chen", "626-555-0101")
///     .recipient("陳小明", "A123456789", "台北市信義區市府路1號", "0912-345-678")
///     .acknowledge_requirements(true)
///     .contact_method(ContactMethod::WeChat)
///     .build()
///     .unwrap();
/// assert_eq!(submission.preferred_contact_method, ContactMethod::WeChat);
/// ```
pub struct IntakeSubmissionBuilder {
    submission: IntakeSubmission,
}

impl IntakeSubmissionBuilder {
    pub fn new(sender_name: impl Into<String>, sender_phone: impl Into<String>) -> Self {
        Self {
            submission: IntakeSubmission {
                sender_name: sender_name.into(),
                sender_phone: sender_phone.into(),
                ..Default::default()
            },
        }
    }

    pub fn recipient(
        mut self,
        name_zh: impl Into<String>,
        id_number: impl Into<String>,
        address_zh: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        self.submission.recipient_name_zh = name_zh.into();
        self.submission.recipient_id_number = id_number.into();
        self.submission.recipient_address_zh = address_zh.into();
        self.submission.recipient_phone = phone.into();
        self
    }

    pub fn acknowledge_requirements(mut self, acknowledged: bool) -> Self {
        self.submission.requirements_acknowledged = acknowledged;
        self
    }

    pub fn contact_method(mut self, method: ContactMethod) -> Self {
        self.submission.preferred_contact_method = method;
        self
    }

    /// Set the contact method from its form label ("Line", "WeChat", ...).
    pub fn contact_method_label(self, label: &str) -> Result<Self, DeskError> {
        let method = ContactMethod::from_label(label)
            .ok_or_else(|| DeskError::Builder(format!("unknown contact method '{label}'")))?;
        Ok(self.contact_method(method))
    }

    /// Build the submission, running validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<IntakeSubmission, DeskError> {
        let errors = validation::validate_submission(&self.submission);
        if !errors.is_empty() {
            return Err(DeskError::Validation(errors));
        }
        Ok(self.submission)
    }

    /// Build without validation; the store still validates on append.
    pub fn build_unchecked(self) -> IntakeSubmission {
        self.submission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_contact_label_rejected() {
        let err = IntakeSubmissionBuilder::new("a", "1")
            .contact_method_label("Fax")
            .err()
            .unwrap();
        assert!(matches!(err, DeskError::Builder(_)));
    }

    #[test]
    fn build_reports_missing_ack() {
        let err = IntakeSubmissionBuilder::new("Amy", "626")
            .recipient("陳", "A1", "台北", "09")
            .build()
            .unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["recipient_requirements_ack"]);
    }
}
