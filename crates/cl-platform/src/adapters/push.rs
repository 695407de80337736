use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use tracing::{info, warn};

use cl_core::ports::{PushMessagingError, PushMessagingPort, PushNotificationListener};
use cl_core::PushPayload;

/// Push messaging stand-in with no vendor SDK behind it.
///
/// Configuration always succeeds. Tokens and payloads are fed in from the
/// outside (the CLI) instead of arriving from a push service.
#[derive(Debug, Clone, Default)]
pub struct LoggingPushMessaging {
    sender_id: Option<String>,
}

impl LoggingPushMessaging {
    pub fn new(sender_id: Option<String>) -> Self {
        Self { sender_id }
    }
}

impl PushMessagingPort for LoggingPushMessaging {
    fn configure(&self) -> Result<(), PushMessagingError> {
        info!(sender_id = ?self.sender_id, "push messaging configured");
        Ok(())
    }
}

/// Listener that prints each forwarded payload as one JSON line.
pub struct StdoutPushListener {
    out: Mutex<Box<dyn Write + Send>>,
}

impl StdoutPushListener {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }
}

impl Default for StdoutPushListener {
    fn default() -> Self {
        Self::new()
    }
}

impl PushNotificationListener for StdoutPushListener {
    fn on_notification(&self, payload: &PushPayload) {
        let line = match serde_json::to_string(payload) {
            Ok(line) => line,
            Err(err) => {
                warn!(error = %err, "failed to serialize push payload");
                return;
            }
        };

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            warn!(error = %err, "failed to write push payload");
        }
    }
}
