//! Send one message to several recipients with the async API.
//!
//! # Running
//!
//! ```bash
//! CPSMS_USERNAME=user CPSMS_API_KEY=key \
//!     cargo run --example send_group_sms -- 4511111111 4522222222
//! ```

use sportstiming_sms::cpsms::CpSmsConfig;
use sportstiming_sms::{ClassifiedError, SportstimingSms};
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let recipients: Vec<String> = env::args().skip(1).collect();
    if recipients.is_empty() {
        return Err("usage: send_group_sms <recipient>...".into());
    }

    let username = env::var("CPSMS_USERNAME")?;
    let api_key = env::var("CPSMS_API_KEY")?;

    let config = CpSmsConfig::builder(username, api_key)
        .timeout(Duration::from_secs(15))
        .build()?;
    let sms = SportstimingSms::from_config(config)?;

    println!("Sending to {} recipients...", recipients.len());
    match sms
        .send_group_sms_async("Race starts in 30 minutes", "Sportstim", &recipients)
        .await
    {
        Ok(result) => println!("Response: {result}"),
        Err(e) if e.is_transport() => println!("Gateway unreachable: {e}"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
