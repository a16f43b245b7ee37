use std::io;

use zenziva::{ClientConfig, ZenzivaClient};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = required_env("ZENZIVA_USERKEY")?;
    let password = required_env("ZENZIVA_PASSKEY")?;
    let phone = required_env("ZENZIVA_PHONE")?;
    let message = std::env::var("ZENZIVA_MESSAGE")
        .unwrap_or_else(|_| "Hello from the zenziva demo.".to_owned());
    let otp = std::env::var("ZENZIVA_OTP").is_ok_and(|value| value == "1");

    let mut config = ClientConfig::new(username, password);
    if let Ok(service_type) = std::env::var("ZENZIVA_TYPE") {
        config = config.with_service_type(service_type);
    }
    if let Ok(subdomain) = std::env::var("ZENZIVA_SUBDOMAIN") {
        config = config.with_subdomain(subdomain);
    }

    let client = ZenzivaClient::new(config)?;
    let result = client.simple_send_otp(phone, message, otp).await?;
    println!(
        "message_id: {}, to: {}, success: {}, message: {}",
        result.message_id, result.to, result.success, result.message
    );

    Ok(())
}
