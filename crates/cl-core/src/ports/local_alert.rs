use crate::push::LocalAlert;

/// On-device alert emitter.
///
/// Fire-and-forget: delivery failures are the implementation's to log, the
/// caller never observes them.
pub trait LocalAlertPort: Send + Sync {
    fn emit(&self, alert: LocalAlert);
}
