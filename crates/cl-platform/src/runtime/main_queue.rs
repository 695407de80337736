//! The designated execution context for UI-facing work.
//!
//! [`MainQueue`] is the sending half handed to use cases. [`MainQueueRunner`]
//! owns the receiving half and runs tasks one at a time, in order, on
//! whichever task drives it. Nothing else touches UI state.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use cl_core::ports::{UiQueuePort, UiTask};

pub type UiTaskSender = mpsc::UnboundedSender<UiTask>;
pub type UiTaskReceiver = mpsc::UnboundedReceiver<UiTask>;

#[derive(Clone)]
pub struct MainQueue {
    tx: UiTaskSender,
}

impl MainQueue {
    pub fn channel() -> (Self, MainQueueRunner) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, MainQueueRunner { rx })
    }
}

impl UiQueuePort for MainQueue {
    fn dispatch(&self, task: UiTask) {
        if self.tx.send(task).is_err() {
            warn!("main queue runner stopped; dropping UI task");
        }
    }
}

pub struct MainQueueRunner {
    rx: UiTaskReceiver,
}

impl MainQueueRunner {
    /// Run tasks until every [`MainQueue`] handle is dropped.
    pub async fn run(mut self) {
        while let Some(task) = self.rx.recv().await {
            task();
        }
        debug!("main queue closed");
    }

    /// Run the next task, waiting for one if none is queued.
    ///
    /// Returns `false` once the queue is closed and drained.
    pub async fn run_next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Run every task that is already queued without waiting for more.
    pub fn drain(&mut self) -> usize {
        let mut ran = 0;
        while let Ok(task) = self.rx.try_recv() {
            task();
            ran += 1;
        }
        ran
    }
}

/// Runs each task immediately on the dispatching context.
///
/// Only suitable where the caller already is the UI context.
#[derive(Debug, Clone, Default)]
pub struct InlineUiQueue;

impl UiQueuePort for InlineUiQueue {
    fn dispatch(&self, task: UiTask) {
        task();
    }
}
