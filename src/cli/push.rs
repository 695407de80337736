use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use cl_app::usecases::{NotificationDisposition, PushNotificationDispatcher};
use cl_core::push::InvalidPayloadError;
use cl_core::{PushEvent, PushPayload};
use cl_platform::StdoutPushListener;

use crate::bootstrap::WiredApp;

const PUSH_EVENT_BUFFER: usize = 32;
const TOKEN_PREFIX: &str = "token ";

fn ready_dispatcher(wired: &WiredApp) -> Result<Arc<PushNotificationDispatcher>> {
    let dispatcher = wired.app.push_dispatcher();
    dispatcher.configure()?;
    dispatcher.set_listener(Arc::new(StdoutPushListener::new()));
    Ok(dispatcher)
}

fn report(disposition: NotificationDisposition) {
    if disposition == NotificationDisposition::DiagnosisUpdated {
        println!("diagnosis potential");
    }
}

pub(super) fn push(wired: &WiredApp, raw: &str) -> Result<()> {
    let payload = PushPayload::parse(raw)?;
    let dispatcher = ready_dispatcher(wired)?;
    report(dispatcher.handle_notification(&payload));
    Ok(())
}

pub(super) fn token(wired: &WiredApp, token: String) -> Result<()> {
    let dispatcher = ready_dispatcher(wired)?;
    dispatcher.handle_new_token(token);
    Ok(())
}

/// Parse one line of `listen` input. Blank lines yield `None`.
pub fn parse_event_line(line: &str) -> Result<Option<PushEvent>, InvalidPayloadError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if let Some(token) = line.strip_prefix(TOKEN_PREFIX) {
        return Ok(Some(PushEvent::TokenRefreshed(token.trim().to_string())));
    }
    PushPayload::parse(line).map(|payload| Some(PushEvent::Message(payload)))
}

async fn pump_events<R>(reader: R, tx: mpsc::Sender<PushEvent>) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut sent = 0;
    while let Some(line) = lines.next_line().await? {
        match parse_event_line(&line) {
            Ok(Some(event)) => {
                if tx.send(event).await.is_err() {
                    warn!("push dispatcher stopped; no longer reading input");
                    break;
                }
                sent += 1;
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, "skipping invalid push input line"),
        }
    }
    Ok(sent)
}

pub(super) async fn listen<R>(wired: &WiredApp, input: R) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    let dispatcher = ready_dispatcher(wired)?;
    let (tx, rx) = mpsc::channel(PUSH_EVENT_BUFFER);

    let runner = {
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move { dispatcher.run(rx).await })
    };

    let sent = pump_events(BufReader::new(input), tx).await?;
    runner.await?;
    debug!(sent, "push input exhausted");
    Ok(())
}
