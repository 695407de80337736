use tracing::info;

use cl_core::ports::LocalAlertPort;
use cl_core::LocalAlert;

/// Local alert emitter that writes alerts to the log.
#[derive(Debug, Clone, Default)]
pub struct TracingAlertEmitter;

impl LocalAlertPort for TracingAlertEmitter {
    fn emit(&self, alert: LocalAlert) {
        info!(
            identifier = %alert.identifier,
            title = %alert.title,
            body = %alert.body,
            "local alert"
        );
    }
}
