//! SMS delivery adapters.

mod console_sender;
mod twilio_sender;

pub use console_sender::ConsoleSmsSender;
pub use twilio_sender::{TwilioConfig, TwilioSmsSender};
