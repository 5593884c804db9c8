//! Asynchronous export tasks: submit once, then poll `async/getTaskResult`
//! until the task completes, fails, hits a guard or is cancelled.

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::{UnisenderClient, UnisenderError};
use crate::domain::{
    ApiResponse, CampaignDeliveryStats, ExportContacts, ExportTask, ExportedFile, TaskStatus,
    TaskUuid,
};
use crate::transport::{self, TransportError, operation};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Polling cadence and optional guards.
///
/// With both guards unset the loop polls until the task leaves `processing`,
/// which matches how Unisender's own tooling behaves. Callers who need a bound
/// should set `max_attempts`, `max_wait`, or cancel the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Pause between two polls.
    pub interval: Duration,
    /// Upper bound on `async/getTaskResult` calls.
    pub max_attempts: Option<u32>,
    /// Upper bound on time spent polling, measured from task acceptance.
    pub max_wait: Option<Duration>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: None,
            max_wait: None,
        }
    }
}

/// Operation pair driving one kind of asynchronous task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskEndpoints {
    pub submit: &'static str,
    pub poll: &'static str,
}

impl TaskEndpoints {
    pub const CONTACTS: Self = Self {
        submit: operation::EXPORT_CONTACTS,
        poll: operation::GET_TASK_RESULT,
    };

    pub const CAMPAIGN_DELIVERY_STATS: Self = Self {
        submit: operation::GET_CAMPAIGN_DELIVERY_STATS,
        poll: operation::GET_TASK_RESULT,
    };
}

impl UnisenderClient {
    /// Export contacts to a CSV file and wait for its download link.
    pub async fn export_contacts(
        &self,
        request: &ExportContacts,
        cancel: &CancellationToken,
    ) -> Result<ExportedFile, UnisenderError> {
        let params = transport::encode_export_contacts_params(request);
        self.run_export_task(TaskEndpoints::CONTACTS, params, cancel)
            .await
    }

    /// Build a delivery report for a campaign and wait for its download link.
    pub async fn get_campaign_delivery_stats(
        &self,
        request: &CampaignDeliveryStats,
        cancel: &CancellationToken,
    ) -> Result<ExportedFile, UnisenderError> {
        let params = transport::encode_delivery_stats_params(request);
        self.run_export_task(TaskEndpoints::CAMPAIGN_DELIVERY_STATS, params, cancel)
            .await
    }

    /// Single `async/getTaskResult` call, for callers driving their own loop.
    pub async fn get_task_result(
        &self,
        task_uuid: &TaskUuid,
    ) -> Result<ApiResponse<ExportTask>, UnisenderError> {
        self.send(
            operation::GET_TASK_RESULT,
            transport::encode_task_result_params(task_uuid),
            transport::decode_task_response,
        )
        .await
    }

    /// Submit a task through `endpoints.submit` and poll `endpoints.poll`.
    ///
    /// The submission must come back with status `new`; anything else fails
    /// with [`UnisenderError::SubmissionRejected`] before any poll. Each poll
    /// then either completes (returning the download link), continues on
    /// `processing`, or fails with [`UnisenderError::PollingFailed`].
    ///
    /// The token is raced against every request and every pause.
    pub async fn run_export_task(
        &self,
        endpoints: TaskEndpoints,
        params: Vec<(String, String)>,
        cancel: &CancellationToken,
    ) -> Result<ExportedFile, UnisenderError> {
        let submit = self.send(endpoints.submit, params, transport::decode_task_submission);
        let submitted = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(UnisenderError::Cancelled {
                    operation: endpoints.submit,
                    task_uuid: None,
                });
            }
            response = submit => response?.result,
        };

        if submitted.status != TaskStatus::New {
            return Err(UnisenderError::SubmissionRejected {
                operation: endpoints.submit,
                status: submitted.status.to_string(),
            });
        }

        let task_uuid = submitted
            .into_task_uuid()
            .map_err(|source| UnisenderError::Parse {
                operation: endpoints.submit,
                source,
            })?;
        tracing::info!(operation = endpoints.submit, %task_uuid, "task accepted");

        let started = Instant::now();
        let mut attempts: u32 = 0;
        loop {
            let poll = self.send(
                endpoints.poll,
                transport::encode_task_result_params(&task_uuid),
                transport::decode_task_response,
            );
            let task = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(cancelled(endpoints.poll, &task_uuid)),
                response = poll => response?.result,
            };
            attempts = attempts.saturating_add(1);
            tracing::debug!(
                operation = endpoints.poll,
                %task_uuid,
                attempt = attempts,
                status = %task.status,
                "task polled"
            );

            match task.status {
                TaskStatus::Completed => {
                    let file_to_download =
                        task.file_to_download
                            .ok_or_else(|| UnisenderError::Parse {
                                operation: endpoints.poll,
                                source: TransportError::MissingDownloadLink {
                                    task_uuid: task_uuid.to_string(),
                                },
                            })?;
                    tracing::info!(
                        operation = endpoints.submit,
                        %task_uuid,
                        polls = attempts,
                        "task completed"
                    );
                    return Ok(ExportedFile {
                        task_uuid,
                        file_to_download,
                        polls: attempts,
                    });
                }
                TaskStatus::Processing => {}
                other => {
                    return Err(UnisenderError::PollingFailed {
                        operation: endpoints.poll,
                        task_uuid: task_uuid.to_string(),
                        status: other.to_string(),
                    });
                }
            }

            if self.guard_reached(attempts, started) {
                tracing::warn!(
                    operation = endpoints.poll,
                    %task_uuid,
                    attempts,
                    "task still processing, giving up"
                );
                return Err(UnisenderError::PollTimeout {
                    operation: endpoints.poll,
                    task_uuid: task_uuid.to_string(),
                    attempts,
                });
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(cancelled(endpoints.poll, &task_uuid)),
                _ = tokio::time::sleep(self.poll.interval) => {}
            }
        }
    }

    /// True when one more poll would exceed a configured guard.
    fn guard_reached(&self, attempts: u32, started: Instant) -> bool {
        if self
            .poll
            .max_attempts
            .is_some_and(|max_attempts| attempts >= max_attempts)
        {
            return true;
        }
        self.poll
            .max_wait
            .is_some_and(|max_wait| started.elapsed() + self.poll.interval > max_wait)
    }
}

fn cancelled(operation: &'static str, task_uuid: &TaskUuid) -> UnisenderError {
    tracing::debug!(operation, %task_uuid, "task polling cancelled");
    UnisenderError::Cancelled {
        operation,
        task_uuid: Some(task_uuid.to_string()),
    }
}
