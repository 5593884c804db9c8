//! Typed async client for the Unisender email/SMS marketing API.
//!
//! The crate is split in three layers: `domain` holds validated request and
//! response types, a private transport layer turns them into query parameters
//! and decodes the `{ "result": ... }` envelope, and [`client`] issues the
//! HTTP calls and drives asynchronous export tasks.
//!
//! ```rust,no_run
//! use unisender::{ApiKey, CancellationToken, ExportContacts, ListId, UnisenderClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), unisender::UnisenderError> {
//!     let client = UnisenderClient::new(ApiKey::new("...")?);
//!     let lists = client.get_lists().await?.result;
//!
//!     let request = ExportContacts {
//!         list_id: lists.first().map(|list| list.id).or(Some(ListId::new(1))),
//!         ..Default::default()
//!     };
//!     let exported = client
//!         .export_contacts(&request, &CancellationToken::new())
//!         .await?;
//!     println!("{}", exported.file_to_download);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_POLL_INTERVAL, PollConfig, TaskEndpoints, UnisenderClient,
    UnisenderClientBuilder, UnisenderError,
};
pub use domain::{
    ApiKey, ApiResponse, CampaignDeliveryStats, CampaignId, EmailAddress, ExportContacts,
    ExportTask, ExportedFile, FieldName, ImportContacts, ImportOptions, ListId, Login,
    MessageId, PhoneNumber, RawPhoneNumber, SendSms, TaskStatus, TaskUuid, ValidationError,
};
pub use tokio_util::sync::CancellationToken;
pub use transport::TransportError;
