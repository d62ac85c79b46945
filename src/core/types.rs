use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Column header of the backing file, in on-disk order.
pub const COLUMNS: [&str; 10] = [
    "customer_id",
    "sender_name",
    "sender_phone",
    "recipient_requirements_ack",
    "recipient_name_zh",
    "recipient_id_number",
    "recipient_address_zh",
    "recipient_phone",
    "preferred_contact_method",
    "created_at",
];

/// Textual format of [`CustomerRecord::created_at`].
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Literal written to `recipient_requirements_ack` for accepted submissions.
pub const ACK_YES: &str = "Yes";

/// One persisted intake record.
///
/// Every field is text, exactly as it appears in the backing file. Records
/// read from a hand-edited file may therefore carry values the intake form
/// would never produce; use [`CustomerRecord::contact_method`] and
/// [`CustomerRecord::created_at_parsed`] for typed access.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// `BTR` + 6 digits, assigned by the store.
    pub customer_id: String,
    pub sender_name: String,
    pub sender_phone: String,
    /// Always [`ACK_YES`] for records created by the store.
    pub recipient_requirements_ack: String,
    pub recipient_name_zh: String,
    pub recipient_id_number: String,
    pub recipient_address_zh: String,
    pub recipient_phone: String,
    pub preferred_contact_method: String,
    /// Creation time formatted with [`CREATED_AT_FORMAT`].
    pub created_at: String,
}

impl CustomerRecord {
    /// Field values in [`COLUMNS`] order.
    pub fn fields(&self) -> [&str; 10] {
        [
            &self.customer_id,
            &self.sender_name,
            &self.sender_phone,
            &self.recipient_requirements_ack,
            &self.recipient_name_zh,
            &self.recipient_id_number,
            &self.recipient_address_zh,
            &self.recipient_phone,
            &self.preferred_contact_method,
            &self.created_at,
        ]
    }

    /// Rebuild a record from values in [`COLUMNS`] order.
    pub fn from_fields(fields: [String; 10]) -> Self {
        let [
            customer_id,
            sender_name,
            sender_phone,
            recipient_requirements_ack,
            recipient_name_zh,
            recipient_id_number,
            recipient_address_zh,
            recipient_phone,
            preferred_contact_method,
            created_at,
        ] = fields;
        Self {
            customer_id,
            sender_name,
            sender_phone,
            recipient_requirements_ack,
            recipient_name_zh,
            recipient_id_number,
            recipient_address_zh,
            recipient_phone,
            preferred_contact_method,
            created_at,
        }
    }

    pub fn contact_method(&self) -> Option<ContactMethod> {
        ContactMethod::from_label(&self.preferred_contact_method)
    }

    pub fn created_at_parsed(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.created_at, CREATED_AT_FORMAT).ok()
    }

    pub fn is_acknowledged(&self) -> bool {
        self.recipient_requirements_ack == ACK_YES
    }
}

/// Preferred channel for contacting the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContactMethod {
    #[default]
    Line,
    WeChat,
    Instagram,
    Email,
    Phone,
    Other,
}

impl ContactMethod {
    /// All choices, in the order the intake form offers them.
    pub const ALL: [ContactMethod; 6] = [
        Self::Line,
        Self::WeChat,
        Self::Instagram,
        Self::Email,
        Self::Phone,
        Self::Other,
    ];

    /// Label stored in the backing file.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::WeChat => "WeChat",
            Self::Instagram => "Instagram",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Other => "Other",
        }
    }

    /// Parse from the stored label (exact match).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

impl std::fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Form payload handed over by the intake UI.
///
/// Text is kept as typed; trimming happens when the record is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntakeSubmission {
    pub sender_name: String,
    pub sender_phone: String,
    /// Recipient confirmed the EZWAY real-name and customs-clearance steps.
    pub requirements_acknowledged: bool,
    pub recipient_name_zh: String,
    pub recipient_id_number: String,
    pub recipient_address_zh: String,
    pub recipient_phone: String,
    pub preferred_contact_method: ContactMethod,
}

impl IntakeSubmission {
    /// Finalize into a record. Callers validate first; see
    /// [`validate_submission`](super::validate_submission).
    pub fn into_record(self, customer_id: String, created_at: NaiveDateTime) -> CustomerRecord {
        CustomerRecord {
            customer_id,
            sender_name: self.sender_name.trim().to_string(),
            sender_phone: self.sender_phone.trim().to_string(),
            recipient_requirements_ack: ACK_YES.to_string(),
            recipient_name_zh: self.recipient_name_zh.trim().to_string(),
            recipient_id_number: self.recipient_id_number.trim().to_string(),
            recipient_address_zh: self.recipient_address_zh.trim().to_string(),
            recipient_phone: self.recipient_phone.trim().to_string(),
            preferred_contact_method: self.preferred_contact_method.label().to_string(),
            created_at: created_at.format(CREATED_AT_FORMAT).to_string(),
        }
    }
}
