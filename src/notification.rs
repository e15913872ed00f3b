use crate::member::Member;
use tracing::info;

/// Delivery capability for project notifications. Implementations decide the
/// transport; callers only hand over a message and a recipient.
pub trait NotificationChannel {
    fn send(&self, message: &str, recipient: &Member);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmailNotification;

impl NotificationChannel for EmailNotification {
    fn send(&self, message: &str, recipient: &Member) {
        info!(recipient = %recipient.name, channel = "email", "{message}");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SmsNotification;

impl NotificationChannel for SmsNotification {
    fn send(&self, message: &str, recipient: &Member) {
        info!(recipient = %recipient.name, channel = "sms", "{message}");
    }
}

/// Wraps the channel picked at project construction behind a single
/// `notify` entry point.
pub struct NotificationContext {
    channel: Box<dyn NotificationChannel>,
}

impl NotificationContext {
    pub fn new(channel: Box<dyn NotificationChannel>) -> Self {
        Self { channel }
    }

    pub fn notify(&self, message: &str, recipient: &Member) {
        self.channel.send(message, recipient);
    }
}
