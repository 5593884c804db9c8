use std::io;
use std::time::Duration;

use unisender::{
    ApiKey, CancellationToken, ExportContacts, FieldName, ListId, PollConfig, UnisenderClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let list_id = std::env::var("UNISENDER_LIST_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNISENDER_LIST_ID environment variable is required",
        )
    })?;
    let list_id = ListId::new(list_id.trim().parse()?);

    let client = UnisenderClient::builder(ApiKey::from_env()?)
        .poll_config(PollConfig {
            max_wait: Some(Duration::from_secs(15 * 60)),
            ..Default::default()
        })
        .build()?;

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_ctrl_c.cancel();
        }
    });

    let request = ExportContacts {
        list_id: Some(list_id),
        field_names: vec![FieldName::new("email")?, FieldName::new("Name")?],
        ..Default::default()
    };
    let exported = client.export_contacts(&request, &cancel).await?;

    println!(
        "task {} finished after {} polls: {}",
        exported.task_uuid, exported.polls, exported.file_to_download
    );

    Ok(())
}
