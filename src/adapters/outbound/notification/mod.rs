pub mod disabled;
pub mod twilio;

pub use disabled::DisabledNotifier;
pub use twilio::{DEFAULT_TWILIO_API_BASE, TwilioConfig, TwilioNotifier};
