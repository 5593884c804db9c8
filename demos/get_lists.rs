use unisender::UnisenderClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = UnisenderClient::from_env()?;

    let response = client.get_lists().await?;
    for list in &response.result {
        println!("{:>8}  {}", list.id.value(), list.title);
    }
    for warning in &response.warnings {
        eprintln!("warning: {warning}");
    }

    Ok(())
}
