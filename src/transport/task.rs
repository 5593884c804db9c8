use serde::Deserialize;

use super::envelope::{TransportError, decode_envelope};
use super::query::Params;
use crate::domain::{ApiResponse, ExportTask, TaskStatus, TaskUuid};

#[derive(Debug, Clone, Deserialize)]
struct TaskJson {
    #[serde(default)]
    task_uuid: Option<String>,
    status: String,
    #[serde(default)]
    file_to_download: Option<String>,
}

/// Answer to a task submission, before the uuid is known to be usable.
///
/// A rejected submission may carry a status and nothing else, so the uuid is
/// only checked once the status says the task was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSubmission {
    pub status: TaskStatus,
    task_uuid: Option<String>,
}

impl TaskSubmission {
    pub fn into_task_uuid(self) -> Result<TaskUuid, TransportError> {
        let raw = self.task_uuid.unwrap_or_default();
        TaskUuid::new(raw.clone()).map_err(|_| TransportError::InvalidValue {
            field: TaskUuid::FIELD,
            value: raw,
        })
    }
}

pub fn encode_task_result_params(task_uuid: &TaskUuid) -> Params {
    vec![(TaskUuid::FIELD.to_owned(), task_uuid.as_str().to_owned())]
}

pub fn decode_task_submission(json: &str) -> Result<ApiResponse<TaskSubmission>, TransportError> {
    decode_envelope(json, |parsed: TaskJson| {
        Ok(TaskSubmission {
            status: TaskStatus::parse(parsed.status.trim()),
            task_uuid: parsed.task_uuid,
        })
    })
}

/// Decode an `async/getTaskResult` poll.
pub fn decode_task_response(json: &str) -> Result<ApiResponse<ExportTask>, TransportError> {
    decode_envelope(json, |parsed: TaskJson| {
        let task_uuid = TaskSubmission {
            status: TaskStatus::New,
            task_uuid: parsed.task_uuid,
        }
        .into_task_uuid()?;
        let file_to_download = parsed
            .file_to_download
            .filter(|link| !link.trim().is_empty());
        Ok(ExportTask {
            task_uuid,
            status: TaskStatus::parse(parsed.status.trim()),
            file_to_download,
        })
    })
}
