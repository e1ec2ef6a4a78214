//! SMS facade with async and blocking call styles.

#[cfg(feature = "blocking")]
pub(crate) mod blocking;
pub(crate) mod credit;
pub(crate) mod error;
pub(crate) mod structure;

pub use error::SmsServiceError;
pub use structure::SportstimingSms;
