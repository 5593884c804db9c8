use std::io::{self, BufRead};

use unisender::{FieldName, ImportContacts, ImportOptions, UnisenderClient};

/// Reads `email,name` lines from stdin and imports them in one call.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = UnisenderClient::from_env()?;

    let mut rows = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut columns = line.splitn(2, ',');
        let email = columns.next().unwrap_or_default().trim().to_owned();
        let name = columns.next().unwrap_or_default().trim().to_owned();
        rows.push(vec![email, name]);
    }

    let request = ImportContacts::new(
        vec![FieldName::new("email")?, FieldName::new("Name")?],
        rows,
        ImportOptions::default(),
    )?;
    let summary = client.import_contacts(&request).await?.result;

    println!(
        "total: {}, inserted: {}, updated: {}, invalid: {}",
        summary.total, summary.inserted, summary.updated, summary.invalid
    );
    for entry in &summary.log {
        eprintln!("{entry}");
    }

    Ok(())
}
