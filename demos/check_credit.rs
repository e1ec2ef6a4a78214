//! Print the remaining CPSMS credit.
//!
//! # Running
//!
//! ```bash
//! CPSMS_USERNAME=user CPSMS_API_KEY=key cargo run --example check_credit
//! ```

use sportstiming_sms::SportstimingSms;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sms = SportstimingSms::from_env()?;

    // Returned exactly as CPSMS formats it, e.g. "9.843,40"
    let credit = sms.check_credit()?;
    println!("Credit: {credit}");

    Ok(())
}
