//! Send a single SMS through CPSMS.
//!
//! # Running
//!
//! ```bash
//! CPSMS_USERNAME=user CPSMS_API_KEY=key \
//!     cargo run --example send_sms -- 4512345678 "Hello from the finish line"
//! ```

use sportstiming_sms::SportstimingSms;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let to = args.next().ok_or("usage: send_sms <recipient> [message]")?;
    let message = args.next().unwrap_or_else(|| "Hello from Sportstiming".to_string());

    // Reads CPSMS_USERNAME, CPSMS_API_KEY and the optional CPSMS_BASE_URL
    let sms = SportstimingSms::from_env()?;

    println!("Sending to {to}...");
    let result = sms.send_sms(&message, "Sportstim", &to)?;

    // The raw CPSMS body, success or error
    println!("Response: {result}");

    Ok(())
}
