/// Unit of work scheduled onto the UI queue.
pub type UiTask = Box<dyn FnOnce() + Send + 'static>;

/// The single execution context that owns UI-facing state.
///
/// Completion callbacks that UI code observes are always dispatched through
/// here, never invoked directly from whatever context an OS callback used.
pub trait UiQueuePort: Send + Sync {
    fn dispatch(&self, task: UiTask);
}
