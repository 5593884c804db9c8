use std::fmt;

use phonenumber::country;

use crate::domain::validation::{ValidationError, trimmed};

/// String newtype holding a trimmed, non-empty value sent under `$field`.
macro_rules! trimmed_string {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Query parameter name used by Unisender (`", $field, "`).")]
            pub const FIELD: &'static str = $field;

            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                trimmed(Self::FIELD, value).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

/// Numeric id assigned by Unisender.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            #[doc = concat!("Query parameter name used by Unisender (`", $field, "`).")]
            pub const FIELD: &'static str = $field;

            pub fn new(value: u64) -> Self {
                Self(value)
            }

            pub fn value(self) -> u64 {
                self.0
            }
        }
    };
}

/// Unisender API key (`api_key`).
///
/// `Debug` output hides the key.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

impl ApiKey {
    pub const FIELD: &'static str = "api_key";

    /// Environment variable read by [`ApiKey::from_env`].
    pub const ENV_VAR: &'static str = "UNISENDER_API_KEY";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        trimmed(Self::FIELD, value).map(Self)
    }

    pub fn from_env() -> Result<Self, ValidationError> {
        let value = std::env::var(Self::ENV_VAR)
            .map_err(|_| ValidationError::MissingEnvVar { name: Self::ENV_VAR })?;
        Self::new(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

trimmed_string!(
    /// Unisender account login, used by partner and account-level calls.
    Login,
    "login"
);

trimmed_string!(
    /// Name of an additional contact field (`email`, `phone`, `Name`, ...).
    FieldName,
    "name"
);

trimmed_string!(
    /// Identifier of an asynchronous task, assigned on submission.
    TaskUuid,
    "task_uuid"
);

trimmed_string!(
    /// Id returned by `sendSms`, accepted by `checkSms`.
    SmsId,
    "sms_id"
);

impl fmt::Display for TaskUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Email address.
///
/// Only the shape is checked: a single `@` with text on both sides.
/// Deliverability is Unisender's business.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const FIELD: &'static str = "email";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = trimmed(Self::FIELD, value)?;
        match value.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(value))
            }
            _ => Err(ValidationError::InvalidEmail { input: value }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number exactly as Unisender will receive it (`phone`).
///
/// Only trimmed. Parse into [`PhoneNumber`] first when E.164 is wanted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    pub const FIELD: &'static str = "phone";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        trimmed(Self::FIELD, value).map(Self)
    }

    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Keeps the E.164 form.
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

/// Phone number validated by `phonenumber`; compared by its E.164 form.
#[derive(Debug, Clone)]
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    pub const FIELD: &'static str = "phone";

    /// `default_region` applies when `input` has no `+<country>` prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let raw = trimmed(Self::FIELD, input)?;
        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;
        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        Ok(Self { raw, e164, parsed })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn e164(&self) -> &str {
        &self.e164
    }

    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

/// Password for a partner-registered account. Kept byte for byte; only an
/// empty string is rejected.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Password(String);

impl Password {
    pub const FIELD: &'static str = "password";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

numeric_id!(
    /// Contact list id.
    ListId,
    "list_id"
);

numeric_id!(
    /// Additional field id.
    FieldId,
    "id"
);

numeric_id!(
    /// Tag (label) id.
    TagId,
    "id"
);

numeric_id!(
    /// Email or SMS message id.
    MessageId,
    "message_id"
);

numeric_id!(
    CampaignId,
    "campaign_id"
);

numeric_id!(
    /// User template id. System templates use a plain `u64`, see `TemplateRef`.
    TemplateId,
    "template_id"
);

/// Kind of contact addressed by `exclude`/`unsubscribe`/`getContactCount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactType {
    Email,
    Phone,
}

impl ContactType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

/// Data type of an additional contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Text,
    Number,
    Date,
    Bool,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Bool => "bool",
        }
    }
}

/// Status of an asynchronous task.
///
/// Tasks move `new -> processing -> completed`; any other string is kept as
/// [`TaskStatus::Other`] and treated as a failure by the poller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    New,
    Processing,
    Completed,
    Other(String),
}

impl TaskStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "new" => Self::New,
            "processing" => Self::Processing,
            "completed" => Self::Completed,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "new",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Other(other) => other,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
