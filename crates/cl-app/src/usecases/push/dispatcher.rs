//! Push notification dispatcher.
//!
//! Single entry point for every inbound push message and for push token
//! refreshes coming from the delivery provider.

use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::mpsc;
use tracing::{debug, error, info, info_span, Instrument};

use cl_core::ports::{
    LocalAlertPort, PersistencePort, PushMessagingError, PushMessagingPort,
    PushNotificationListener,
};
use cl_core::{Diagnosis, LocalAlert, PushEvent, PushPayload};

/// What the dispatcher did with a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationDisposition {
    /// A potential diagnosis was recorded and the user alerted.
    DiagnosisUpdated,
    /// Handed to the registered listener unchanged.
    Forwarded,
    /// Unrecognized and nobody listening.
    Dropped,
}

pub struct PushNotificationDispatcher {
    persistence: Arc<dyn PersistencePort>,
    alerts: Arc<dyn LocalAlertPort>,
    messaging: Arc<dyn PushMessagingPort>,
    potential_alert: LocalAlert,
    listener: RwLock<Option<Arc<dyn PushNotificationListener>>>,
    push_token: RwLock<Option<String>>,
}

impl PushNotificationDispatcher {
    pub fn new(
        persistence: Arc<dyn PersistencePort>,
        alerts: Arc<dyn LocalAlertPort>,
        messaging: Arc<dyn PushMessagingPort>,
        potential_alert: LocalAlert,
    ) -> Self {
        Self {
            persistence,
            alerts,
            messaging,
            potential_alert,
            listener: RwLock::new(None),
            push_token: RwLock::new(None),
        }
    }

    /// Initialize the push vendor SDK.
    pub fn configure(&self) -> Result<(), PushMessagingError> {
        self.messaging.configure()?;
        info!("push messaging configured");
        Ok(())
    }

    /// Register the listener for unrecognized payloads, replacing any previous one.
    pub fn set_listener(&self, listener: Arc<dyn PushNotificationListener>) {
        *self.listener.write().unwrap_or_else(PoisonError::into_inner) = Some(listener);
    }

    pub fn clear_listener(&self) {
        self.listener
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    /// Most recent push token, if one has been issued.
    pub fn push_token(&self) -> Option<String> {
        self.push_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Classify and act on one inbound payload.
    pub fn handle_notification(&self, payload: &PushPayload) -> NotificationDisposition {
        let _span = info_span!("usecase.push_dispatcher.handle_notification").entered();

        if payload.is_potential_diagnosis() {
            // Write then alert. The two are independent; neither undoes the other.
            match self.persistence.set_diagnosis(Diagnosis::Potential) {
                Ok(()) => info!("potential diagnosis recorded"),
                Err(err) => error!(error = %err, "failed to record potential diagnosis"),
            }
            self.alerts.emit(self.potential_alert.clone());
            return NotificationDisposition::DiagnosisUpdated;
        }

        self.forward(payload)
    }

    /// Remember a refreshed push token and announce it to the listener.
    pub fn handle_new_token(&self, token: impl Into<String>) -> NotificationDisposition {
        let _span = info_span!("usecase.push_dispatcher.handle_new_token").entered();

        let token = token.into();
        *self.push_token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.clone());
        info!("push token refreshed");

        self.forward(&PushPayload::push_token(token))
    }

    /// Dispatch events from the push transport until the channel closes.
    pub async fn run(&self, mut events: mpsc::Receiver<PushEvent>) {
        let span = info_span!("usecase.push_dispatcher.run");
        async {
            while let Some(event) = events.recv().await {
                let disposition = match &event {
                    PushEvent::Message(payload) => self.handle_notification(payload),
                    PushEvent::TokenRefreshed(token) => self.handle_new_token(token.as_str()),
                };
                debug!(?disposition, "push event handled");
            }
            debug!("push event stream closed");
        }
        .instrument(span)
        .await
    }

    fn forward(&self, payload: &PushPayload) -> NotificationDisposition {
        let listener = self
            .listener
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let keys: Vec<&str> = payload.keys().collect();
        match listener {
            Some(listener) => {
                debug!(?keys, "forwarding push payload to listener");
                listener.on_notification(payload);
                NotificationDisposition::Forwarded
            }
            None => {
                debug!(?keys, "no push listener registered; dropping payload");
                NotificationDisposition::Dropped
            }
        }
    }
}
