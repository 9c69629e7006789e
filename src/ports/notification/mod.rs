mod notifier;

pub use notifier::{Notifier, upload_message};
