use crate::domain::value::{
    CampaignId, FieldId, ListId, MessageId, SmsId, TagId, TaskStatus, TaskUuid, TemplateId,
};

/// Successful `{ "result": T }` envelope.
///
/// `warnings` carries whatever Unisender reported alongside the result, unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub result: T,
    pub warnings: Vec<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> T {
        self.result
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub id: ListId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    pub field_type: String,
    pub is_visible: Option<bool>,
    pub view_pos: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportSummary {
    pub total: u64,
    pub inserted: u64,
    pub updated: u64,
    pub deleted: u64,
    pub new_emails: u64,
    pub invalid: u64,
    pub log: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedCampaign {
    pub campaign_id: CampaignId,
    pub status: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignStatus {
    pub status: String,
    pub creation_time: Option<String>,
    pub start_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageVersion {
    pub message_id: MessageId,
    pub actual_version_id: MessageId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebVersion {
    pub letter_id: MessageId,
    pub web_letter_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentSms {
    pub sms_id: SmsId,
    pub currency: Option<String>,
    /// Price as returned by Unisender (JSON string or number token, verbatim).
    pub price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTemplate {
    pub template_id: TemplateId,
}

/// Snapshot of an asynchronous upstream task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTask {
    pub task_uuid: TaskUuid,
    pub status: TaskStatus,
    /// Only populated once `status` is [`TaskStatus::Completed`].
    pub file_to_download: Option<String>,
}

/// Outcome of a finished export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub task_uuid: TaskUuid,
    pub file_to_download: String,
    /// Number of status checks it took to reach `completed`.
    pub polls: u32,
}
