mod support;

use std::sync::Arc;

use mockall::mock;
use serde_json::json;
use tokio::sync::mpsc;

use cl_app::usecases::NotificationDisposition;
use cl_core::ports::{PersistencePort, PushNotificationListener};
use cl_core::push::PUSH_TOKEN_KEY;
use cl_core::{Diagnosis, PushEvent, PushPayload};

use support::{default_harness, potential_alert, RecordingListener};

mock! {
    Listener {}

    impl PushNotificationListener for Listener {
        fn on_notification(&self, payload: &PushPayload);
    }
}

fn payload(value: serde_json::Value) -> PushPayload {
    PushPayload::try_from(value).unwrap()
}

#[tokio::test]
async fn test_potential_status_records_diagnosis_and_alerts() {
    let h = default_harness();
    let dispatcher = h.app.push_dispatcher();
    let mut listener = MockListener::new();
    listener.expect_on_notification().never();
    dispatcher.set_listener(Arc::new(listener));

    let disposition = dispatcher.handle_notification(&payload(json!({ "status": "Potential" })));

    assert_eq!(disposition, NotificationDisposition::DiagnosisUpdated);
    assert_eq!(h.persistence.diagnosis().unwrap(), Diagnosis::Potential);
    assert_eq!(*h.alerts.emitted.lock().unwrap(), vec![potential_alert()]);
}

#[tokio::test]
async fn test_other_payloads_are_forwarded_unchanged() {
    let h = default_harness();
    let dispatcher = h.app.push_dispatcher();
    let listener = Arc::new(RecordingListener::default());
    dispatcher.set_listener(listener.clone());

    let message = payload(json!({ "status": "potential", "extra": { "n": 1 } }));
    let disposition = dispatcher.handle_notification(&message);

    assert_eq!(disposition, NotificationDisposition::Forwarded);
    assert_eq!(*listener.received.lock().unwrap(), vec![message]);
    assert_eq!(h.persistence.diagnosis().unwrap(), Diagnosis::Unknown);
    assert!(h.alerts.emitted.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_token_refresh_is_stored_and_announced() {
    let h = default_harness();
    let dispatcher = h.app.push_dispatcher();
    let mut listener = MockListener::new();
    listener
        .expect_on_notification()
        .withf(|p| p.get_str(PUSH_TOKEN_KEY) == Some("12345") && p.len() == 1)
        .times(1)
        .return_const(());
    dispatcher.set_listener(Arc::new(listener));

    dispatcher.handle_new_token("12345");

    assert_eq!(dispatcher.push_token().as_deref(), Some("12345"));
}

#[tokio::test]
async fn test_without_listener_unrecognized_payloads_are_dropped() {
    let h = default_harness();
    let dispatcher = h.app.push_dispatcher();

    let disposition = dispatcher.handle_notification(&payload(json!({ "kind": "news" })));

    assert_eq!(disposition, NotificationDisposition::Dropped);
}

#[tokio::test]
async fn test_run_drains_transport_events_in_order() {
    let h = default_harness();
    let dispatcher = h.app.push_dispatcher();
    let listener = Arc::new(RecordingListener::default());
    dispatcher.set_listener(listener.clone());

    let (tx, rx) = mpsc::channel(8);
    tx.send(PushEvent::TokenRefreshed("t1".into())).await.unwrap();
    tx.send(PushEvent::Message(payload(json!({ "status": "Potential" }))))
        .await
        .unwrap();
    tx.send(PushEvent::Message(payload(json!({ "kind": "news" }))))
        .await
        .unwrap();
    drop(tx);

    dispatcher.run(rx).await;

    let received = listener.received.lock().unwrap();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].get_str(PUSH_TOKEN_KEY), Some("t1"));
    assert_eq!(received[1].get_str("kind"), Some("news"));
    assert_eq!(h.persistence.diagnosis().unwrap(), Diagnosis::Potential);
    assert_eq!(h.alerts.emitted.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_dispatcher_is_shared_across_app_handles() {
    let h = default_harness();

    h.app.push_dispatcher().handle_new_token("abc");

    assert_eq!(h.app.push_dispatcher().push_token().as_deref(), Some("abc"));
}
