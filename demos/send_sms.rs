use std::io;

use unisender::{PhoneNumber, RawPhoneNumber, SendSms, UnisenderClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = UnisenderClient::from_env()?;

    let phone_raw = std::env::var("UNISENDER_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNISENDER_PHONE environment variable is required",
        )
    })?;
    let sender = std::env::var("UNISENDER_SMS_SENDER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNISENDER_SMS_SENDER environment variable is required",
        )
    })?;

    let phone = PhoneNumber::parse(None, &phone_raw)?;
    let request = SendSms::new(
        vec![RawPhoneNumber::from(phone)],
        sender,
        "Hello from the unisender crate",
    )?;
    let sent = client.send_sms(&request).await?.result;

    println!(
        "sms_id: {}, price: {:?} {:?}",
        sent.sms_id.as_str(),
        sent.price,
        sent.currency
    );

    Ok(())
}
