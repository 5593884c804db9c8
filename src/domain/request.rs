use crate::domain::validation::{ValidationError, non_empty};
use crate::domain::value::{
    CampaignId, ContactType, EmailAddress, FieldId, FieldName, FieldType, ListId, Login,
    MessageId, Password, RawPhoneNumber, TagId, TemplateId,
};

pub const IMPORT_CONTACTS_MAX_ROWS: usize = 10_000;
pub const SEND_SMS_MAX_PHONES: usize = 150;

/// Optional `limit`/`offset` pair shared by listing calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

// ---------------------------------------------------------------------------
// Contact lists
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub after_subscribe_url: Option<String>,
    pub before_subscribe_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateList {
    title: String,
    options: ListOptions,
}

impl CreateList {
    pub fn new(title: impl Into<String>, options: ListOptions) -> Result<Self, ValidationError> {
        Ok(Self {
            title: non_empty("title", title)?,
            options,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
pub struct UpdateList {
    list_id: ListId,
    title: String,
    options: ListOptions,
}

impl UpdateList {
    pub fn new(
        list_id: ListId,
        title: impl Into<String>,
        options: ListOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            list_id,
            title: non_empty("title", title)?,
            options,
        })
    }

    pub fn list_id(&self) -> ListId {
        self.list_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }
}

/// How `subscribe` confirms a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubleOptin {
    /// Unisender sends its own confirmation request.
    SendConfirmation,
    /// The caller has already obtained consent.
    Confirmed,
    /// Consent obtained; a contact that already exists keeps its status.
    ConfirmedKeepStatus,
}

impl DoubleOptin {
    pub fn as_code(self) -> u8 {
        match self {
            Self::SendConfirmation => 0,
            Self::Confirmed => 3,
            Self::ConfirmedKeepStatus => 4,
        }
    }
}

/// How `subscribe` treats fields of an existing contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Only fill fields that are empty.
    KeepExisting,
    /// Replace every field; missing ones are cleared.
    ReplaceAll,
    /// Replace only the fields passed in the request.
    ReplaceGiven,
}

impl Overwrite {
    pub fn as_code(self) -> u8 {
        match self {
            Self::KeepExisting => 0,
            Self::ReplaceAll => 1,
            Self::ReplaceGiven => 2,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubscribeOptions {
    pub tags: Vec<String>,
    pub double_optin: Option<DoubleOptin>,
    pub overwrite: Option<Overwrite>,
}

#[derive(Debug, Clone)]
pub struct Subscribe {
    list_ids: Vec<ListId>,
    fields: Vec<(FieldName, String)>,
    options: SubscribeOptions,
}

impl Subscribe {
    /// Subscribe a contact described by arbitrary fields.
    ///
    /// `fields` must carry at least one value (usually `email` or `phone`).
    pub fn new(
        list_ids: Vec<ListId>,
        fields: Vec<(FieldName, String)>,
        options: SubscribeOptions,
    ) -> Result<Self, ValidationError> {
        if list_ids.is_empty() {
            return Err(ValidationError::Empty { field: "list_ids" });
        }
        if fields.is_empty() {
            return Err(ValidationError::Empty { field: "fields" });
        }
        Ok(Self {
            list_ids,
            fields,
            options,
        })
    }

    /// Subscribe an email address, optionally with a `Name` field.
    pub fn email(
        list_ids: Vec<ListId>,
        email: EmailAddress,
        name: Option<String>,
        options: SubscribeOptions,
    ) -> Result<Self, ValidationError> {
        let mut fields = vec![(FieldName::new("email")?, email.as_str().to_owned())];
        if let Some(name) = name {
            fields.push((FieldName::new("Name")?, name));
        }
        Self::new(list_ids, fields, options)
    }

    pub fn list_ids(&self) -> &[ListId] {
        &self.list_ids
    }

    pub fn fields(&self) -> &[(FieldName, String)] {
        &self.fields
    }

    pub fn options(&self) -> &SubscribeOptions {
        &self.options
    }
}

/// Contact addressed by `exclude` and `unsubscribe`.
///
/// An empty `list_ids` applies the call to every list.
#[derive(Debug, Clone)]
pub struct RemoveContact {
    pub contact_type: ContactType,
    pub contact: String,
    pub list_ids: Vec<ListId>,
}

impl RemoveContact {
    pub fn email(email: EmailAddress, list_ids: Vec<ListId>) -> Self {
        Self {
            contact_type: ContactType::Email,
            contact: email.as_str().to_owned(),
            list_ids,
        }
    }

    pub fn phone(phone: RawPhoneNumber, list_ids: Vec<ListId>) -> Self {
        Self {
            contact_type: ContactType::Phone,
            contact: phone.raw().to_owned(),
            list_ids,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    pub overwrite_tags: bool,
    pub overwrite_lists: bool,
}

/// Bulk import: a header row of field names plus rows of values in the same order.
#[derive(Debug, Clone)]
pub struct ImportContacts {
    field_names: Vec<FieldName>,
    data: Vec<Vec<String>>,
    options: ImportOptions,
}

impl ImportContacts {
    pub fn new(
        field_names: Vec<FieldName>,
        data: Vec<Vec<String>>,
        options: ImportOptions,
    ) -> Result<Self, ValidationError> {
        if field_names.is_empty() {
            return Err(ValidationError::Empty {
                field: "field_names",
            });
        }
        if data.is_empty() {
            return Err(ValidationError::Empty { field: "data" });
        }
        if data.len() > IMPORT_CONTACTS_MAX_ROWS {
            return Err(ValidationError::TooManyImportRows {
                max: IMPORT_CONTACTS_MAX_ROWS,
                actual: data.len(),
            });
        }
        if let Some((row, values)) = data
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != field_names.len())
        {
            return Err(ValidationError::RaggedImportRow {
                row,
                expected: field_names.len(),
                actual: values.len(),
            });
        }
        Ok(Self {
            field_names,
            data,
            options,
        })
    }

    pub fn field_names(&self) -> &[FieldName] {
        &self.field_names
    }

    pub fn data(&self) -> &[Vec<String>] {
        &self.data
    }

    pub fn options(&self) -> ImportOptions {
        self.options
    }
}

/// Filters for `exportContacts`. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct ExportContacts {
    pub notify_url: Option<String>,
    pub list_id: Option<ListId>,
    pub field_names: Vec<FieldName>,
    pub email: Option<EmailAddress>,
    pub phone: Option<RawPhoneNumber>,
    pub tag: Option<String>,
    pub email_status: Option<String>,
    pub phone_status: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactCountOptions {
    pub tag_id: Option<TagId>,
    /// Count only contacts that have this kind of address (`address` or `phone` on the wire).
    pub contact_type: Option<ContactType>,
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GetContactCount {
    pub list_id: ListId,
    pub options: ContactCountOptions,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetContactOptions {
    pub include_lists: bool,
    pub include_fields: bool,
    pub include_details: bool,
}

#[derive(Debug, Clone)]
pub struct GetContact {
    pub email: EmailAddress,
    pub options: GetContactOptions,
}

// ---------------------------------------------------------------------------
// Additional fields and tags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct FieldOptions {
    pub is_visible: Option<bool>,
    pub view_pos: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct CreateField {
    pub name: FieldName,
    pub field_type: FieldType,
    pub options: FieldOptions,
}

#[derive(Debug, Clone)]
pub struct UpdateField {
    pub id: FieldId,
    pub name: FieldName,
    pub options: FieldOptions,
}

// ---------------------------------------------------------------------------
// Messages and campaigns
// ---------------------------------------------------------------------------

/// File attached to an email, keyed by file name on the wire (`attachments[name]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct EmailMessageOptions {
    pub text_body: Option<String>,
    pub generate_text: bool,
    pub tag: Option<String>,
    pub attachments: Vec<Attachment>,
    pub lang: Option<String>,
    pub template_id: Option<TemplateId>,
    pub system_template_id: Option<u64>,
    pub wrap_type: Option<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CreateEmailMessage {
    sender_name: String,
    sender_email: EmailAddress,
    subject: String,
    body: String,
    list_id: ListId,
    options: EmailMessageOptions,
}

impl CreateEmailMessage {
    pub fn new(
        sender_name: impl Into<String>,
        sender_email: EmailAddress,
        subject: impl Into<String>,
        body: impl Into<String>,
        list_id: ListId,
        options: EmailMessageOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            sender_name: non_empty("sender_name", sender_name)?,
            sender_email,
            subject: non_empty("subject", subject)?,
            body: non_empty("body", body)?,
            list_id,
            options,
        })
    }

    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    pub fn sender_email(&self) -> &EmailAddress {
        &self.sender_email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn list_id(&self) -> ListId {
        self.list_id
    }

    pub fn options(&self) -> &EmailMessageOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
pub struct CreateSmsMessage {
    sender: String,
    body: String,
    list_id: ListId,
    tag: Option<String>,
}

impl CreateSmsMessage {
    pub fn new(
        sender: impl Into<String>,
        body: impl Into<String>,
        list_id: ListId,
        tag: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            sender: non_empty("sender", sender)?,
            body: non_empty("body", body)?,
            list_id,
            tag,
        })
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn list_id(&self) -> ListId {
        self.list_id
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CampaignOptions {
    pub start_time: Option<String>,
    pub timezone: Option<String>,
    pub track_read: Option<bool>,
    pub track_links: Option<bool>,
    pub contacts: Vec<String>,
    pub contacts_url: Option<String>,
    pub track_ga: Option<bool>,
    pub payment_limit: Option<u64>,
    pub payment_currency: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateCampaign {
    pub message_id: MessageId,
    pub options: CampaignOptions,
}

#[derive(Debug, Clone)]
pub struct SendSms {
    phones: Vec<RawPhoneNumber>,
    sender: String,
    text: String,
}

impl SendSms {
    pub fn new(
        phones: Vec<RawPhoneNumber>,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if phones.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }
        if phones.len() > SEND_SMS_MAX_PHONES {
            return Err(ValidationError::TooManyRecipients {
                max: SEND_SMS_MAX_PHONES,
                actual: phones.len(),
            });
        }
        Ok(Self {
            phones,
            sender: non_empty("sender", sender)?,
            text: non_empty("text", text)?,
        })
    }

    pub fn phones(&self) -> &[RawPhoneNumber] {
        &self.phones
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendEmailOptions {
    pub attachments: Vec<Attachment>,
    pub lang: Option<String>,
    pub track_read: Option<bool>,
    pub track_links: Option<bool>,
    pub cc: Option<String>,
    pub headers: Option<String>,
    pub images_as: Option<String>,
    pub error_checking: bool,
    pub metadata: Vec<(String, String)>,
    pub ref_key: Option<String>,
    pub user_campaign_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SendEmail {
    email: String,
    sender_name: String,
    sender_email: EmailAddress,
    subject: String,
    body: String,
    list_id: ListId,
    options: SendEmailOptions,
}

impl SendEmail {
    /// `email` may be a bare address or `Name <address>`.
    pub fn new(
        email: impl Into<String>,
        sender_name: impl Into<String>,
        sender_email: EmailAddress,
        subject: impl Into<String>,
        body: impl Into<String>,
        list_id: ListId,
        options: SendEmailOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            email: non_empty(EmailAddress::FIELD, email)?,
            sender_name: non_empty("sender_name", sender_name)?,
            sender_email,
            subject: non_empty("subject", subject)?,
            body: non_empty("body", body)?,
            list_id,
            options,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    pub fn sender_email(&self) -> &EmailAddress {
        &self.sender_email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn list_id(&self) -> ListId {
        self.list_id
    }

    pub fn options(&self) -> &SendEmailOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
pub struct SendTestEmail {
    pub emails: Vec<EmailAddress>,
    pub message_id: MessageId,
}

#[derive(Debug, Clone)]
pub struct UpdateOptInEmail {
    sender_name: String,
    sender_email: EmailAddress,
    subject: String,
    body: String,
    list_id: ListId,
}

impl UpdateOptInEmail {
    pub fn new(
        sender_name: impl Into<String>,
        sender_email: EmailAddress,
        subject: impl Into<String>,
        body: impl Into<String>,
        list_id: ListId,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            sender_name: non_empty("sender_name", sender_name)?,
            sender_email,
            subject: non_empty("subject", subject)?,
            body: non_empty("body", body)?,
            list_id,
        })
    }

    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    pub fn sender_email(&self) -> &EmailAddress {
        &self.sender_email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn list_id(&self) -> ListId {
        self.list_id
    }
}

/// Fields changed by `updateEmailMessage`; `None` leaves the value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateEmailMessage {
    pub sender_name: Option<String>,
    pub sender_email: Option<EmailAddress>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub text_body: Option<String>,
    pub lang: Option<String>,
    pub categories: Vec<String>,
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct TemplateOptions {
    pub description: Option<String>,
    pub text_body: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateEmailTemplate {
    title: String,
    subject: String,
    body: String,
    options: TemplateOptions,
}

impl CreateEmailTemplate {
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        options: TemplateOptions,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: non_empty("title", title)?,
            subject: non_empty("subject", subject)?,
            body: non_empty("body", body)?,
            options,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn options(&self) -> &TemplateOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEmailTemplate {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub description: Option<String>,
    pub text_body: Option<String>,
    pub lang: Option<String>,
}

/// Either a user template or one of Unisender's system templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateRef {
    User(TemplateId),
    System(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    User,
    System,
}

impl TemplateKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::System => "system",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TemplateQuery {
    pub kind: Option<TemplateKind>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub page: Page,
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CampaignDeliveryStats {
    pub campaign_id: CampaignId,
    pub changed_since: Option<String>,
    pub field_ids: Vec<FieldId>,
}

impl CampaignDeliveryStats {
    pub fn new(campaign_id: CampaignId) -> Self {
        Self {
            campaign_id,
            changed_since: None,
            field_ids: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CampaignQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub page: Page,
}

#[derive(Debug, Clone, Default)]
pub struct MessageQuery {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub page: Page,
}

// ---------------------------------------------------------------------------
// Partners
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct RegisterOptions {
    pub notify: bool,
    pub api_mode: bool,
    pub timezone: Option<String>,
    pub country_code: Option<String>,
    pub extra: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct Register {
    pub email: EmailAddress,
    pub login: Login,
    pub password: Password,
    pub options: RegisterOptions,
}

/// Key used by `checkUserExists`.
#[derive(Debug, Clone)]
pub enum UserLookup {
    Login(Login),
    Email(EmailAddress),
}

#[derive(Debug, Clone)]
pub struct TransferMoney {
    pub source_client_id: u64,
    pub target_client_id: u64,
    /// Decimal amount as a string, kept verbatim.
    pub sum: String,
    pub currency: String,
}
